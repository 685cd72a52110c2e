use std::io::Read;
use std::path::Path;
use use_free_images::photo::InputEntry;

/// Read input entries from headerless CSV: the URL, then an optional copyright override.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<InputEntry>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = vec![];

    for record in reader.records() {
        let record = record?;

        if let Some(url) = record.get(0).filter(|url| !url.is_empty()) {
            entries.push(InputEntry::new(url, record.get(1).map(str::to_string)));
        }
    }

    Ok(entries)
}

pub fn read_entries_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InputEntry>, csv::Error> {
    read_entries(std::fs::File::open(path)?)
}
