use regex::Regex;
use std::sync::LazyLock;

static FLICKR_USER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.flickr\.com/photos/([^/]+)/$").expect("valid pattern")
});
static FREEIMAGES_PHOTO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http://www\.freeimages\.com/photo/[^/]+$").expect("valid pattern")
});
static MORGUEFILE_PHOTO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http://morguefile\.com/p/\d+$").expect("valid pattern")
});
static FLICKR_PHOTO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.flickr\.com/photos/[^/]+/(\d+)/$").expect("valid pattern")
});

/// The handler that owns an input URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// A Flickr photo stream, identified by user ID or username.
    FlickrUser { user: String },
    FreeImagesPhoto,
    MorgueFilePhoto,
    FlickrPhoto { photo_id: String },
}

impl Source {
    /// Match the URL against each source pattern in priority order.
    #[must_use]
    pub fn classify(url: &str) -> Option<Self> {
        if let Some(captures) = FLICKR_USER.captures(url) {
            Some(Self::FlickrUser {
                user: captures[1].to_string(),
            })
        } else if FREEIMAGES_PHOTO.is_match(url) {
            Some(Self::FreeImagesPhoto)
        } else if MORGUEFILE_PHOTO.is_match(url) {
            Some(Self::MorgueFilePhoto)
        } else {
            FLICKR_PHOTO
                .captures(url)
                .map(|captures| Self::FlickrPhoto {
                    photo_id: captures[1].to_string(),
                })
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FlickrUser { .. } => "flickr-user",
            Self::FreeImagesPhoto => "freeimages-photo",
            Self::MorgueFilePhoto => "morguefile-photo",
            Self::FlickrPhoto { .. } => "flickr-photo",
        }
    }
}
