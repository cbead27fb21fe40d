use reqwest::{Client, StatusCode};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::content::ContentDocument;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: Url, status: StatusCode },
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the content document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Remote(Url),
    Local(PathBuf),
}

impl ContentSource {
    /// Resolves a content location.
    ///
    /// Absolute `http(s)` URLs are fetched as-is and `file://` URLs become
    /// local paths. Anything else is joined onto `base` when one is given,
    /// which is how a page-relative `data.json` is located, and is otherwise
    /// read from the local filesystem.
    pub fn parse(spec: &str, base: Option<&Url>) -> Result<Self, url::ParseError> {
        match Url::parse(spec) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => return Ok(Self::Remote(url)),
            Ok(url) if url.scheme() == "file" => {
                if let Ok(path) = url.to_file_path() {
                    return Ok(Self::Local(path));
                }
            }
            _ => {}
        }

        match base {
            Some(base) => Ok(Self::Remote(base.join(spec)?)),
            None => Ok(Self::Local(PathBuf::from(spec))),
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Remote(url) => write!(f, "{}", url),
            ContentSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentLoader {
    client: Client,
    source: ContentSource,
}

impl ContentLoader {
    pub fn new(source: ContentSource) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    /// Loads and parses the content document. One attempt, no retry.
    pub async fn load(&self) -> Result<ContentDocument, LoadError> {
        info!("Loading content from {}", self.source);

        let body = match &self.source {
            ContentSource::Remote(url) => self.fetch(url).await?,
            ContentSource::Local(path) => tokio::fs::read(path).await.map_err(|source| {
                FetchError::File {
                    path: path.clone(),
                    source,
                }
            })?,
        };

        debug!("Content body is {} bytes", body.len());

        let document = serde_json::from_slice::<ContentDocument>(&body)?;
        Ok(document)
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}
