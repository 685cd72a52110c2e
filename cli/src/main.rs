use cli_helpers::prelude::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use use_free_images::{
    client::Client,
    flickr::{Credentials, Flickr},
    pipeline::{Delays, Pipeline},
    source::Source,
    store::Store,
};

mod input;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    opts.verbose.init_logging()?;

    match opts.command {
        Command::Collect {
            input,
            cache,
            flickr,
            output,
            timeout,
            freeimages_delay,
            flickr_delay,
        } => {
            let entries = input::read_entries_from_path(&input)?;
            let credentials = Credentials::parse(&std::fs::read_to_string(&flickr)?)?;
            let timeout = (timeout != 0).then(|| Duration::from_secs(timeout));

            let pipeline = Pipeline::new(
                Store::new(&cache),
                Client::new(timeout)?,
                Flickr::new(credentials, timeout)?,
            )
            .with_delays(Delays {
                freeimages: Duration::from_secs(freeimages_delay),
                flickr: Duration::from_secs(flickr_delay),
            });

            let records = pipeline.run(entries).await?;

            let mut writer = BufWriter::new(std::fs::File::create(&output)?);
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writer.flush()?;

            log::info!("Wrote {} records to {}", records.len(), output.display());
        }
        Command::Classify => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(std::io::stdout());

            for line in std::io::stdin().lines() {
                let line = line?;
                let url = line.trim();

                if !url.is_empty() {
                    let name = Source::classify(url).map_or("unknown", |source| source.name());

                    writer.write_record([name, url])?;
                }
            }

            writer.flush()?;
        }
    }

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("CLI argument reading error")]
    Args(#[from] cli_helpers::Error),
    #[error("CSV error")]
    Csv(#[from] csv::Error),
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    #[error("Credentials error")]
    Credentials(#[from] use_free_images::flickr::CredentialsError),
    #[error("Page client error")]
    Client(#[from] use_free_images::client::Error),
    #[error("Flickr error")]
    Flickr(#[from] use_free_images::flickr::Error),
    #[error("Pipeline error")]
    Pipeline(#[from] use_free_images::pipeline::Error),
}

#[derive(Debug, Parser)]
#[clap(name = "use-free-images", version, author)]
struct Opts {
    #[clap(flatten)]
    verbose: Verbosity,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Collect image URLs and copyright information for a list of photo pages
    Collect {
        /// CSV file (1st column: URL, 2nd column: copyright to override the downloaded one)
        #[clap(long, short)]
        input: PathBuf,
        /// Cache directory
        #[clap(long, short)]
        cache: PathBuf,
        /// Flickr credentials file (1st line: API key, 2nd line: API secret)
        #[clap(long, short)]
        flickr: PathBuf,
        /// File to write the resulting JSON to
        #[clap(long, short)]
        output: PathBuf,
        /// Request timeout in seconds (0 for no timeout)
        #[clap(long, default_value = "60")]
        timeout: u64,
        /// Time to wait after each FreeImages download in seconds
        #[clap(long, default_value = "60")]
        freeimages_delay: u64,
        /// Time to wait after each Flickr photo lookup in seconds
        #[clap(long, default_value = "2")]
        flickr_delay: u64,
    },
    /// Print the source of each URL provided on standard input
    Classify,
}
