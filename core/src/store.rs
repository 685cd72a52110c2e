use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Number of hex characters of the SHA-256 digest used as a file name.
pub const KEY_LENGTH: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Expected file")]
    ExpectedFile(PathBuf),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Namespace {
    /// Raw fetched page markup.
    Pages,
    /// Serialized photo records for an input URL.
    Results,
}

impl Namespace {
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Pages => "html",
            Self::Results => "photos",
        }
    }
}

/// Write-once content cache addressed by a truncated digest of an identifier.
///
/// Presence of a file is trusted: entries are never refreshed or expired.
#[derive(Clone, Debug)]
pub struct Store {
    pub base: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn key(identifier: &str) -> String {
        let digest = Sha256::digest(identifier.as_bytes());
        let mut key = hex::encode(digest);
        key.truncate(KEY_LENGTH);

        key
    }

    #[must_use]
    pub fn dir(&self, namespace: Namespace) -> PathBuf {
        self.base.join(namespace.dir_name())
    }

    #[must_use]
    pub fn path(&self, identifier: &str, namespace: Namespace) -> PathBuf {
        self.dir(namespace).join(Self::key(identifier))
    }

    pub fn read(&self, identifier: &str, namespace: Namespace) -> Result<Option<String>, Error> {
        let path = self.path(identifier, namespace);

        if !path.exists() {
            Ok(None)
        } else if path.is_file() {
            log::info!("Reading cache {}", path.display());

            Ok(Some(std::fs::read_to_string(&path)?))
        } else {
            Err(Error::ExpectedFile(path))
        }
    }

    pub fn write<T: Into<String>>(
        &self,
        identifier: &str,
        namespace: Namespace,
        payload: T,
    ) -> Result<String, Error> {
        let payload = payload.into();
        std::fs::create_dir_all(self.dir(namespace))?;

        let path = self.path(identifier, namespace);
        log::info!("Writing cache {}", path.display());

        let mut file = File::create(&path)?;
        file.write_all(payload.as_bytes())?;

        Ok(payload)
    }
}
