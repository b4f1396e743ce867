//! Where template files come from.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A read-only tree of template files addressed by relative path.
pub trait TemplateSource {
    /// Fetch the bytes stored at `path` (e.g. `core/.claude/settings.json`).
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, for progress output.
    fn describe(&self) -> String;
}

/// Templates served over HTTP(S).
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Http {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl TemplateSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        let wrap = |source| FetchError::Http {
            url: url.clone(),
            source,
        };
        let resp = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(wrap)?;
        let body = resp.bytes().map_err(wrap)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Templates in a local directory, e.g. an offline mirror.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let full = self.root.join(path);
        fs::read(&full).map_err(|source| FetchError::Io { path: full, source })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}

/// Pick a source for `base`: HTTP(S) URLs go over the network, anything else
/// is a directory (an optional `file://` prefix is stripped).
pub fn open_source(base: &str, timeout: Duration) -> Result<Box<dyn TemplateSource>, FetchError> {
    if is_remote(base) {
        Ok(Box::new(HttpSource::new(base, timeout)?))
    } else {
        let dir = base.strip_prefix("file://").unwrap_or(base);
        Ok(Box::new(DirSource::new(dir)))
    }
}
