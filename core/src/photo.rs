use std::fmt::Display;

/// An image URL with its copyright attribution.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PhotoRecord {
    pub url: String,
    pub copyright: String,
}

impl PhotoRecord {
    #[must_use]
    pub fn new<U: Into<String>, C: Into<String>>(url: U, copyright: C) -> Self {
        Self {
            url: url.into(),
            copyright: copyright.into(),
        }
    }

    /// Build a record attributed as `<source> / <author>`.
    #[must_use]
    pub fn attributed<U: Into<String>, A: Display>(url: U, source: &str, author: A) -> Self {
        Self::new(url, format!("{source} / {author}"))
    }
}

/// One line of the input list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputEntry {
    pub url: String,
    pub copyright_override: Option<String>,
}

impl InputEntry {
    /// An empty override is treated as no override.
    #[must_use]
    pub fn new<U: Into<String>>(url: U, copyright_override: Option<String>) -> Self {
        Self {
            url: url.into(),
            copyright_override: copyright_override.filter(|value| !value.is_empty()),
        }
    }
}

/// The fields of a Flickr photo needed to build its static image URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemotePhoto {
    pub id: String,
    pub secret: String,
    pub farm: String,
    pub server: String,
    pub author: Option<String>,
}

impl RemotePhoto {
    #[must_use]
    pub fn image_url(&self, size: Option<&str>) -> String {
        let size = size.map(|size| format!("_{size}")).unwrap_or_default();

        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}{size}.jpg",
            self.farm, self.server, self.id, self.secret
        )
    }
}
