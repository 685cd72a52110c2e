use crate::client::Client;
use crate::flickr::{self, Flickr};
use crate::page::{self, Parsed};
use crate::photo::{InputEntry, PhotoRecord, RemotePhoto};
use crate::source::Source;
use crate::store::{Namespace, Store};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store error")]
    Store(#[from] crate::store::Error),
    #[error("Page client error")]
    Client(#[from] crate::client::Error),
    #[error("Flickr error")]
    Flickr(#[from] crate::flickr::Error),
    #[error("Result cache JSON error")]
    Json(#[from] serde_json::Error),
}

/// Pauses applied after requests to rate-limited sources.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Delays {
    /// After each FreeImages page download.
    pub freeimages: Duration,
    /// After each Flickr photo lookup.
    pub flickr: Duration,
}

impl Delays {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            freeimages: Duration::ZERO,
            flickr: Duration::ZERO,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            freeimages: Duration::from_secs(60),
            flickr: Duration::from_secs(2),
        }
    }
}

/// The records found for a single input URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Never empty.
    Found(Vec<PhotoRecord>),
    NotFound,
    /// No source handles the URL.
    Unsupported,
}

impl From<Option<PhotoRecord>> for Outcome {
    fn from(value: Option<PhotoRecord>) -> Self {
        value.map_or(Self::NotFound, |record| Self::Found(vec![record]))
    }
}

impl FromIterator<PhotoRecord> for Outcome {
    fn from_iter<I: IntoIterator<Item = PhotoRecord>>(iter: I) -> Self {
        let records = iter.into_iter().collect::<Vec<_>>();

        if records.is_empty() {
            Self::NotFound
        } else {
            Self::Found(records)
        }
    }
}

/// Records for the photos of a Flickr user, all attributed to that user.
///
/// Bounded by [`flickr::PAGE_SIZE`] and consumed once.
pub struct PhotoStream {
    author: String,
    photos: std::vec::IntoIter<RemotePhoto>,
}

impl PhotoStream {
    #[must_use]
    pub fn new(author: String, photos: Vec<RemotePhoto>) -> Self {
        Self {
            author,
            photos: photos.into_iter(),
        }
    }
}

impl Iterator for PhotoStream {
    type Item = PhotoRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.photos.next().map(|photo| {
            PhotoRecord::attributed(photo.image_url(None), flickr::NAME, &self.author)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.photos.size_hint()
    }
}

impl ExactSizeIterator for PhotoStream {}

pub struct Pipeline {
    store: Store,
    client: Client,
    flickr: Flickr,
    delays: Delays,
}

impl Pipeline {
    #[must_use]
    pub fn new(store: Store, client: Client, flickr: Flickr) -> Self {
        Self {
            store,
            client,
            flickr,
            delays: Delays::default(),
        }
    }

    #[must_use]
    pub const fn with_delays(mut self, delays: Delays) -> Self {
        self.delays = delays;
        self
    }

    /// Process each entry in order, returning all records.
    pub async fn run<I: IntoIterator<Item = InputEntry>>(
        &self,
        entries: I,
    ) -> Result<Vec<PhotoRecord>, Error> {
        let mut records = vec![];

        for entry in entries {
            records.extend(self.process(&entry).await?);
        }

        Ok(records)
    }

    /// Find the records for one entry, using the result cache when possible.
    ///
    /// The override, if any, replaces the copyright of every record but is never cached.
    pub async fn process(&self, entry: &InputEntry) -> Result<Vec<PhotoRecord>, Error> {
        log::info!("Processing {}", entry.url);

        let cached = self
            .store
            .read(&entry.url, Namespace::Results)?
            .filter(|payload| !payload.trim().is_empty());

        let mut records = match cached {
            Some(payload) => serde_json::from_str::<Vec<PhotoRecord>>(payload.trim())?,
            None => match self.resolve(&entry.url).await? {
                Outcome::Found(records) => {
                    self.store.write(
                        &entry.url,
                        Namespace::Results,
                        serde_json::to_string(&records)?,
                    )?;

                    records
                }
                Outcome::NotFound => {
                    log::warn!("No photos found for {}", entry.url);
                    vec![]
                }
                Outcome::Unsupported => {
                    log::warn!("Unknown URL \"{}\"", entry.url);
                    vec![]
                }
            },
        };

        if let Some(copyright) = &entry.copyright_override {
            for record in &mut records {
                record.copyright.clone_from(copyright);
            }
        }

        Ok(records)
    }

    /// Classify the URL and run its source handler, bypassing the result cache.
    pub async fn resolve(&self, url: &str) -> Result<Outcome, Error> {
        match Source::classify(url) {
            Some(Source::FlickrUser { user }) => Ok(self.flickr_user(&user).await?.collect()),
            Some(Source::FreeImagesPhoto) => Ok(self.freeimages_photo(url).await?.into()),
            Some(Source::MorgueFilePhoto) => Ok(self.morguefile_photo(url).await?.into()),
            Some(Source::FlickrPhoto { photo_id }) => {
                Ok(Some(self.flickr_photo(&photo_id).await?).into())
            }
            None => Ok(Outcome::Unsupported),
        }
    }

    async fn freeimages_photo(&self, url: &str) -> Result<Option<PhotoRecord>, Error> {
        let fetched = self
            .client
            .fetch_cached(&self.store, url, page::parse_freeimages, |parsed| {
                !parsed.is_challenge()
            })
            .await?;

        let requested = fetched.is_requested();

        let record = match fetched.into_parsed() {
            Some(Parsed::Photo(record)) => Some(record),
            Some(Parsed::Challenge) => {
                log::error!("Bot challenge served for {url}");
                None
            }
            Some(Parsed::Missing) => {
                log::warn!("No FreeImages photo in page {url}");
                None
            }
            None => None,
        };

        if requested {
            Self::wait(self.delays.freeimages).await;
        }

        Ok(record)
    }

    async fn morguefile_photo(&self, url: &str) -> Result<Option<PhotoRecord>, Error> {
        let fetched = self
            .client
            .fetch_cached(&self.store, url, page::parse_morguefile, |_| true)
            .await?;

        Ok(match fetched.into_parsed() {
            Some(Parsed::Photo(record)) => Some(record),
            Some(Parsed::Challenge | Parsed::Missing) => {
                log::warn!("No MorgueFile photo in page {url}");
                None
            }
            None => None,
        })
    }

    async fn flickr_photo(&self, photo_id: &str) -> Result<PhotoRecord, Error> {
        log::info!("Flickr Photo ID {photo_id}");

        let photo = self.flickr.photo_info(photo_id).await?;
        let author = photo.author.as_deref().unwrap_or_default();
        let record = PhotoRecord::attributed(photo.image_url(None), flickr::NAME, author);

        Self::wait(self.delays.flickr).await;

        Ok(record)
    }

    async fn flickr_user(&self, user: &str) -> Result<PhotoStream, Error> {
        log::info!("Flickr User {user}");

        let user_id = if flickr::is_user_id(user) {
            user.to_string()
        } else {
            self.flickr.find_user_id(user).await?
        };

        let author = self.flickr.person_name(&user_id).await?;
        let photos = self.flickr.user_photos(&user_id).await?;

        Ok(PhotoStream::new(author, photos))
    }

    async fn wait(delay: Duration) {
        if !delay.is_zero() {
            log::info!("Waiting {delay:?}");
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Delays, Error, Outcome, PhotoStream, Pipeline};
    use crate::client::Client;
    use crate::flickr::{Credentials, Flickr};
    use crate::photo::{InputEntry, PhotoRecord, RemotePhoto};
    use crate::store::{Namespace, Store};
    use std::time::Duration;
    use tokio::time::Instant;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MORGUEFILE_URL: &str = "http://morguefile.com/p/12345";
    const MORGUEFILE_PAGE: &str = r#"<html><body>
<img class="img-responsive" src="http://img.example/x.jpg">
<div class="creative"><a href="http://morguefile.com/creative/janedoe">Jane Doe</a></div>
</body></html>"#;
    const FREEIMAGES_URL: &str = "http://www.freeimages.com/photo/red-apple-1393982";
    const FREEIMAGES_PAGE: &str = r#"<html><head><title>Red apple</title></head><body>
<div class="preview"><img src="http://images.freeimages.com/images/apple.jpg"></div>
<a id="photographer-name" href="/photographer/jd">John Doe</a>
</body></html>"#;
    const FREEIMAGES_CHALLENGE: &str =
        "<html><head><title>Are you human? - FreeImages.com</title></head></html>";
    const FLICKR_PHOTO_URL: &str = "https://www.flickr.com/photos/bob/1/";
    const FLICKR_USER_URL: &str = "https://www.flickr.com/photos/bob/";

    fn pipeline(store: &Store, server: &MockServer) -> Result<Pipeline, Box<dyn std::error::Error>> {
        pipeline_with_delays(store, server, Delays::none())
    }

    fn pipeline_with_delays(
        store: &Store,
        server: &MockServer,
        delays: Delays,
    ) -> Result<Pipeline, Box<dyn std::error::Error>> {
        let credentials = Credentials {
            key: "key".to_string(),
            secret: "secret".to_string(),
        };
        let flickr = Flickr::with_base_url(credentials, None, format!("{}/rest/", server.uri()))?;

        Ok(Pipeline::new(store.clone(), Client::new(None)?, flickr).with_delays(delays))
    }

    async fn mount_api(server: &MockServer, api_method: &str, body: &str) {
        Mock::given(method("GET"))
            .and(query_param("method", api_method))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_user_stream(server: &MockServer) {
        mount_api(
            server,
            "flickr.people.findByUsername",
            r#"{"user":{"id":"1@N00","nsid":"1@N00","username":{"_content":"bob"}},"stat":"ok"}"#,
        )
        .await;
        mount_api(
            server,
            "flickr.people.getInfo",
            r#"{"person":{"nsid":"1@N00","username":{"_content":"bob"},
               "realname":{"_content":"Bob Smith"}},"stat":"ok"}"#,
        )
        .await;
        mount_api(
            server,
            "flickr.people.getPhotos",
            r#"{"photos":{"page":1,"photo":[
               {"id":"10","secret":"s1","server":"100","farm":1},
               {"id":"11","secret":"s2","server":"101","farm":5}]},"stat":"ok"}"#,
        )
        .await;
    }

    #[tokio::test]
    async fn test_morguefile_photo() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        store.write(MORGUEFILE_URL, Namespace::Pages, MORGUEFILE_PAGE)?;

        let records = pipeline(&store, &server)?
            .run([InputEntry::new(MORGUEFILE_URL, None)])
            .await?;

        assert_eq!(
            records,
            vec![PhotoRecord::new(
                "http://img.example/x.jpg",
                "MorgueFile / janedoe"
            )]
        );
        assert_eq!(
            store.read(MORGUEFILE_URL, Namespace::Results)?.as_deref(),
            Some(r#"[{"url":"http://img.example/x.jpg","copyright":"MorgueFile / janedoe"}]"#)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_morguefile_photo_override() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        store.write(MORGUEFILE_URL, Namespace::Pages, MORGUEFILE_PAGE)?;

        let pipeline = pipeline(&store, &server)?;
        let entry = InputEntry::new(MORGUEFILE_URL, Some("CC-BY Jane Doe".to_string()));

        let first = pipeline.run([entry.clone()]).await?;
        let second = pipeline.run([entry]).await?;

        assert_eq!(first[0].copyright, "CC-BY Jane Doe");
        assert_eq!(first, second);

        // The cached result keeps the derived copyright.
        let cached = pipeline
            .run([InputEntry::new(MORGUEFILE_URL, None)])
            .await?;

        assert_eq!(cached[0].copyright, "MorgueFile / janedoe");

        Ok(())
    }

    #[tokio::test]
    async fn test_flickr_photo() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());

        Mock::given(method("GET"))
            .and(query_param("method", "flickr.photos.getInfo"))
            .and(query_param("photo_id", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"photo":{"id":1,"secret":"abc","farm":2,"server":3,
                   "owner":{"realname":"","username":"bob"}},"stat":"ok"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let pipeline = pipeline(&store, &server)?;
        let entries = vec![InputEntry::new(FLICKR_PHOTO_URL, None)];

        let first = pipeline.run(entries.clone()).await?;
        let second = pipeline.run(entries).await?;

        assert_eq!(
            first,
            vec![PhotoRecord::new(
                "https://farm2.staticflickr.com/3/1_abc.jpg",
                "Flickr / bob"
            )]
        );
        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_flickr_user_override() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        mount_user_stream(&server).await;

        let pipeline = pipeline(&store, &server)?;
        let entries = vec![
            InputEntry::new(FLICKR_USER_URL, Some("CC0".to_string())),
            InputEntry::new(FLICKR_USER_URL, None),
        ];

        let records = pipeline.run(entries).await?;

        assert_eq!(
            records,
            vec![
                PhotoRecord::new("https://farm1.staticflickr.com/100/10_s1.jpg", "CC0"),
                PhotoRecord::new("https://farm5.staticflickr.com/101/11_s2.jpg", "CC0"),
                PhotoRecord::new(
                    "https://farm1.staticflickr.com/100/10_s1.jpg",
                    "Flickr / Bob Smith"
                ),
                PhotoRecord::new(
                    "https://farm5.staticflickr.com/101/11_s2.jpg",
                    "Flickr / Bob Smith"
                ),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_flickr_user_id_skips_lookup() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());

        mount_api(
            &server,
            "flickr.people.getInfo",
            r#"{"person":{"username":{"_content":"bob"}},"stat":"ok"}"#,
        )
        .await;
        mount_api(
            &server,
            "flickr.people.getPhotos",
            r#"{"photos":{"photo":[{"id":"10","secret":"s1","server":"100","farm":1}]},"stat":"ok"}"#,
        )
        .await;

        Mock::given(method("GET"))
            .and(query_param("method", "flickr.people.findByUsername"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let records = pipeline(&store, &server)?
            .run([InputEntry::new("https://www.flickr.com/photos/1@N00/", None)])
            .await?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].copyright, "Flickr / bob");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_stream_is_not_cached() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());

        mount_api(
            &server,
            "flickr.people.getInfo",
            r#"{"person":{"username":{"_content":"bob"}},"stat":"ok"}"#,
        )
        .await;
        mount_api(
            &server,
            "flickr.people.getPhotos",
            r#"{"photos":{"photo":[]},"stat":"ok"}"#,
        )
        .await;

        let url = "https://www.flickr.com/photos/1@N00/";
        let records = pipeline(&store, &server)?
            .run([InputEntry::new(url, None)])
            .await?;

        assert!(records.is_empty());
        assert_eq!(store.read(url, Namespace::Results)?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_url() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        let url = "https://example.com/photo/1";

        let pipeline = pipeline(&store, &server)?;

        assert_eq!(pipeline.resolve(url).await?, Outcome::Unsupported);
        assert!(pipeline.run([InputEntry::new(url, None)]).await?.is_empty());
        assert_eq!(store.read(url, Namespace::Results)?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_result_cache_hit() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());

        store.write(
            FLICKR_USER_URL,
            Namespace::Results,
            "[{\"url\":\"https://farm1.staticflickr.com/1/1_a.jpg\",\"copyright\":\"Flickr / x\"}]\n",
        )?;

        let records = pipeline(&store, &server)?
            .run([InputEntry::new(FLICKR_USER_URL, None)])
            .await?;

        assert_eq!(
            records,
            vec![PhotoRecord::new(
                "https://farm1.staticflickr.com/1/1_a.jpg",
                "Flickr / x"
            )]
        );
        assert!(server.received_requests().await.unwrap_or_default().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_freeimages_challenge() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());

        store.write(FREEIMAGES_URL, Namespace::Pages, FREEIMAGES_CHALLENGE)?;

        let records = pipeline(&store, &server)?
            .run([InputEntry::new(FREEIMAGES_URL, None)])
            .await?;

        assert!(records.is_empty());
        assert_eq!(store.read(FREEIMAGES_URL, Namespace::Results)?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_freeimages_photo() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        store.write(FREEIMAGES_URL, Namespace::Pages, FREEIMAGES_PAGE)?;

        let records = pipeline(&store, &server)?
            .run([InputEntry::new(FREEIMAGES_URL, None)])
            .await?;

        assert_eq!(
            records,
            vec![PhotoRecord::new(
                "http://images.freeimages.com/images/apple.jpg",
                "FreeImages.com / John Doe"
            )]
        );
        assert_eq!(
            store.read(FREEIMAGES_URL, Namespace::Results)?.as_deref(),
            Some(
                r#"[{"url":"http://images.freeimages.com/images/apple.jpg","copyright":"FreeImages.com / John Doe"}]"#
            )
        );

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_freeimages_delay_after_download() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        let delays = Delays {
            freeimages: Duration::from_secs(60),
            flickr: Duration::ZERO,
        };

        Mock::given(method("GET"))
            .and(path("/photo/red-apple-1393982"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FREEIMAGES_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/photo/challenge-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FREEIMAGES_CHALLENGE))
            .expect(1)
            .mount(&server)
            .await;

        let pipeline = pipeline_with_delays(&store, &server, delays)?;
        let photo_url = format!("{}/photo/red-apple-1393982", server.uri());
        let challenge_url = format!("{}/photo/challenge-1", server.uri());

        let start = Instant::now();
        let record = pipeline.freeimages_photo(&photo_url).await?;

        assert!(start.elapsed() >= delays.freeimages);
        assert_eq!(
            record.map(|record| record.copyright).as_deref(),
            Some("FreeImages.com / John Doe")
        );

        // The page is now cached, so there is no request and no wait.
        let start = Instant::now();
        let record = pipeline.freeimages_photo(&photo_url).await?;

        assert!(start.elapsed() < delays.freeimages);
        assert!(record.is_some());

        // A challenge response still counts as a request.
        let start = Instant::now();

        assert_eq!(pipeline.freeimages_photo(&challenge_url).await?, None);
        assert!(start.elapsed() >= delays.freeimages);
        assert_eq!(store.read(&challenge_url, Namespace::Pages)?, None);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_freeimages_page_cache_hit_skips_delay() -> Result<(), Box<dyn std::error::Error>>
    {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        store.write(FREEIMAGES_URL, Namespace::Pages, FREEIMAGES_PAGE)?;

        let delays = Delays::default();
        let pipeline = pipeline_with_delays(&store, &server, delays)?;

        let start = Instant::now();
        let records = pipeline
            .run([InputEntry::new(FREEIMAGES_URL, None)])
            .await?;

        assert_eq!(records.len(), 1);
        assert!(start.elapsed() < delays.freeimages);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_flickr_photo_delay() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        let delays = Delays {
            freeimages: Duration::ZERO,
            flickr: Duration::from_secs(2),
        };

        mount_api(
            &server,
            "flickr.photos.getInfo",
            r#"{"photo":{"id":"1","secret":"abc","farm":2,"server":"3",
               "owner":{"realname":"Bob Smith","username":"bob"}},"stat":"ok"}"#,
        )
        .await;

        let pipeline = pipeline_with_delays(&store, &server, delays)?;
        let entries = vec![InputEntry::new(FLICKR_PHOTO_URL, None)];

        let start = Instant::now();
        let first = pipeline.run(entries.clone()).await?;

        assert!(start.elapsed() >= delays.flickr);

        // Served from the result cache without a lookup or a wait.
        let start = Instant::now();
        let second = pipeline.run(entries).await?;

        assert!(start.elapsed() < delays.flickr);
        assert_eq!(first, second);
        assert_eq!(first[0].copyright, "Flickr / Bob Smith");

        Ok(())
    }

    #[tokio::test]
    async fn test_api_error_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        let base = tempfile::tempdir()?;
        let store = Store::new(base.path());
        store.write(MORGUEFILE_URL, Namespace::Pages, MORGUEFILE_PAGE)?;

        mount_api(
            &server,
            "flickr.photos.getInfo",
            r#"{"stat":"fail","code":1,"message":"Photo not found"}"#,
        )
        .await;

        let result = pipeline(&store, &server)?
            .run([
                InputEntry::new(MORGUEFILE_URL, None),
                InputEntry::new(FLICKR_PHOTO_URL, None),
            ])
            .await;

        assert!(matches!(result, Err(Error::Flickr(_))));
        // Entries processed before the failure stay cached.
        assert!(store.read(MORGUEFILE_URL, Namespace::Results)?.is_some());

        Ok(())
    }

    #[test]
    fn test_photo_stream() {
        let photos = (0..3)
            .map(|index| RemotePhoto {
                id: index.to_string(),
                secret: "s".to_string(),
                farm: "1".to_string(),
                server: "2".to_string(),
                author: None,
            })
            .collect();

        let mut stream = PhotoStream::new("Bob".to_string(), photos);

        assert_eq!(stream.len(), 3);
        assert_eq!(
            stream.next(),
            Some(PhotoRecord::new(
                "https://farm1.staticflickr.com/2/0_s.jpg",
                "Flickr / Bob"
            ))
        );
        assert_eq!(stream.by_ref().count(), 2);
        assert_eq!(stream.next(), None);
    }
}
