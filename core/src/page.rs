//! Extraction of photo records from scraped photo pages.

use crate::photo::PhotoRecord;
use scraper::{Html, Selector};
use std::sync::LazyLock;

pub const FREEIMAGES_NAME: &str = "FreeImages.com";
pub const MORGUEFILE_NAME: &str = "MorgueFile";

/// Title of the page FreeImages serves instead of a photo when it suspects a bot.
///
/// This is an exact match on the current wording and will stop detecting challenges if the page
/// text changes.
pub const FREEIMAGES_CHALLENGE_TITLE: &str = "Are you human? - FreeImages.com";

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static FREEIMAGES_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".preview > img"));
static FREEIMAGES_AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector("#photographer-name"));
static MORGUEFILE_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".img-responsive"));
static MORGUEFILE_AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector(".creative > a"));

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parsed {
    Photo(PhotoRecord),
    /// A bot challenge page was served instead of the photo page.
    Challenge,
    /// The expected image or author elements were not present.
    Missing,
}

impl Parsed {
    #[must_use]
    pub const fn is_challenge(&self) -> bool {
        matches!(self, Self::Challenge)
    }
}

impl From<Option<PhotoRecord>> for Parsed {
    fn from(value: Option<PhotoRecord>) -> Self {
        value.map_or(Self::Missing, Self::Photo)
    }
}

#[must_use]
pub fn parse_freeimages(html: &str) -> Parsed {
    let document = Html::parse_document(html);

    if title(&document).as_deref() == Some(FREEIMAGES_CHALLENGE_TITLE) {
        return Parsed::Challenge;
    }

    document
        .select(&FREEIMAGES_IMAGE)
        .next()
        .and_then(|image| image.value().attr("src"))
        .zip(
            document
                .select(&FREEIMAGES_AUTHOR)
                .next()
                .map(|author| author.text().collect::<String>()),
        )
        .map(|(url, author)| PhotoRecord::attributed(url, FREEIMAGES_NAME, author.trim()))
        .into()
}

#[must_use]
pub fn parse_morguefile(html: &str) -> Parsed {
    let document = Html::parse_document(html);

    document
        .select(&MORGUEFILE_IMAGE)
        .next()
        .and_then(|image| image.value().attr("src"))
        .zip(
            document
                .select(&MORGUEFILE_AUTHOR)
                .next()
                .and_then(|link| link.value().attr("href"))
                .and_then(|href| href.rsplit('/').next()),
        )
        .map(|(url, author)| PhotoRecord::attributed(url, MORGUEFILE_NAME, author))
        .into()
}

fn title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
}
