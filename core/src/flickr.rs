//! A minimal client for the public methods of the Flickr REST API.

use crate::photo::RemotePhoto;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::sync::LazyLock;
use std::time::Duration;

pub const NAME: &str = "Flickr";
pub const DEFAULT_BASE_URL: &str = "https://api.flickr.com/services/rest/";

/// Number of photos requested from a user's photo stream (only the first page is read).
pub const PAGE_SIZE: usize = 500;

static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+@N\d+$").expect("valid pattern"));

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),
    #[error("Invalid API URL")]
    Url(#[from] url::ParseError),
    #[error("JSON decoding error")]
    Json(#[from] serde_json::Error),
    #[error("Flickr API error {code}: {message}")]
    Api { code: i64, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Missing API key")]
    MissingKey,
    #[error("Missing API secret")]
    MissingSecret,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    /// Read the API key and secret from the first two non-empty lines.
    pub fn parse(contents: &str) -> Result<Self, CredentialsError> {
        let mut lines = contents.lines().map(str::trim).filter(|line| !line.is_empty());

        let key = lines.next().ok_or(CredentialsError::MissingKey)?;
        let secret = lines.next().ok_or(CredentialsError::MissingSecret)?;

        Ok(Self {
            key: key.to_string(),
            secret: secret.to_string(),
        })
    }
}

/// Whether the value is a Flickr NSID (e.g. `12345678@N00`) rather than a username.
#[must_use]
pub fn is_user_id(value: &str) -> bool {
    USER_ID.is_match(value)
}

#[derive(Clone)]
pub struct Flickr {
    underlying: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl Flickr {
    pub fn new(credentials: Credentials, timeout: Option<Duration>) -> Result<Self, Error> {
        Self::with_base_url(credentials, timeout, DEFAULT_BASE_URL)
    }

    pub fn with_base_url<S: Into<String>>(
        credentials: Credentials,
        timeout: Option<Duration>,
        base_url: S,
    ) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            underlying: builder.build()?,
            credentials,
            base_url: base_url.into(),
        })
    }

    pub async fn photo_info(&self, photo_id: &str) -> Result<RemotePhoto, Error> {
        let response: PhotoInfoResponse = self
            .call("flickr.photos.getInfo", &[("photo_id", photo_id)])
            .await?;
        let photo = response.photo;

        let author = photo
            .owner
            .realname
            .filter(|realname| !realname.is_empty())
            .unwrap_or(photo.owner.username);

        Ok(RemotePhoto {
            id: photo.id.to_string(),
            secret: photo.secret,
            farm: photo.farm.to_string(),
            server: photo.server.to_string(),
            author: Some(author),
        })
    }

    /// The display name of a user: their real name if set, otherwise their username.
    pub async fn person_name(&self, user_id: &str) -> Result<String, Error> {
        let response: PersonResponse = self
            .call("flickr.people.getInfo", &[("user_id", user_id)])
            .await?;
        let person = response.person;

        Ok(person
            .realname
            .map(|realname| realname.content)
            .filter(|realname| !realname.is_empty())
            .unwrap_or(person.username.content))
    }

    pub async fn find_user_id(&self, username: &str) -> Result<String, Error> {
        log::info!("Flickr findByUsername {username}");

        let response: UserResponse = self
            .call("flickr.people.findByUsername", &[("username", username)])
            .await?;

        Ok(response.user.nsid)
    }

    /// The first page of a user's public photos, without authors.
    pub async fn user_photos(&self, user_id: &str) -> Result<Vec<RemotePhoto>, Error> {
        let page_size = PAGE_SIZE.to_string();
        let response: PhotosResponse = self
            .call(
                "flickr.people.getPhotos",
                &[
                    ("user_id", user_id),
                    ("per_page", page_size.as_str()),
                    ("page", "1"),
                ],
            )
            .await?;

        Ok(response
            .photos
            .photo
            .into_iter()
            .take(PAGE_SIZE)
            .map(|photo| RemotePhoto {
                id: photo.id.to_string(),
                secret: photo.secret,
                farm: photo.farm.to_string(),
                server: photo.server.to_string(),
                author: None,
            })
            .collect())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        arguments: &[(&str, &str)],
    ) -> Result<T, Error> {
        let mut parameters = vec![
            ("method", method),
            ("api_key", self.credentials.key.as_str()),
            ("format", "json"),
            ("nojsoncallback", "1"),
        ];
        parameters.extend_from_slice(arguments);

        let signature = sign(&self.credentials.secret, &parameters);
        parameters.push(("api_sig", &signature));

        let url = url::Url::parse_with_params(&self.base_url, &parameters)?;
        log::info!("Calling {method}");

        let body = self.underlying.get(url).send().await?.text().await?;
        let status: Status = serde_json::from_str(&body)?;

        if status.stat == "ok" {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Error::Api {
                code: status.code.unwrap_or_default(),
                message: status.message.unwrap_or(status.stat),
            })
        }
    }
}

/// Flickr's request signature: the MD5 digest of the secret followed by each parameter name and
/// value, in parameter name order.
fn sign(secret: &str, parameters: &[(&str, &str)]) -> String {
    let mut sorted = parameters.to_vec();
    sorted.sort_unstable();

    let mut input = secret.to_string();

    for (name, value) in sorted {
        input.push_str(name);
        input.push_str(value);
    }

    format!("{:x}", md5::compute(input.as_bytes()))
}

/// An identifier that the API may represent as either a string or a number.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Number(u64),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(serde::Deserialize)]
struct Status {
    stat: String,
    code: Option<i64>,
    message: Option<String>,
}

#[derive(serde::Deserialize)]
struct Content {
    #[serde(rename = "_content")]
    content: String,
}

#[derive(serde::Deserialize)]
struct PhotoInfoResponse {
    photo: PhotoInfo,
}

#[derive(serde::Deserialize)]
struct PhotoInfo {
    id: Scalar,
    secret: String,
    farm: Scalar,
    server: Scalar,
    owner: Owner,
}

#[derive(serde::Deserialize)]
struct Owner {
    #[serde(default)]
    realname: Option<String>,
    username: String,
}

#[derive(serde::Deserialize)]
struct PersonResponse {
    person: Person,
}

#[derive(serde::Deserialize)]
struct Person {
    username: Content,
    #[serde(default)]
    realname: Option<Content>,
}

#[derive(serde::Deserialize)]
struct UserResponse {
    user: User,
}

#[derive(serde::Deserialize)]
struct User {
    nsid: String,
}

#[derive(serde::Deserialize)]
struct PhotosResponse {
    photos: Photos,
}

#[derive(serde::Deserialize)]
struct Photos {
    #[serde(default)]
    photo: Vec<PhotoSummary>,
}

#[derive(serde::Deserialize)]
struct PhotoSummary {
    id: Scalar,
    secret: String,
    server: Scalar,
    farm: Scalar,
}
