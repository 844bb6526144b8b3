use std::sync::Arc;

use loader_logging::{loader_debug, loader_info, loader_warn};

use crate::fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::parse::parse_document;
use crate::{
    EngineEvent, FailureKind, LoadError, LoadProgress, RemoteDocument, SourceUrl, Stage,
};

/// How a non-2xx response status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Parse the body regardless of status. An error page that happens to be
    /// valid JSON resolves like any other document.
    #[default]
    Ignore,
    /// Reject with [`FailureKind::HttpStatus`] before parsing.
    Enforce,
}

/// Fetches the configured source and parses it as JSON.
pub struct Loader {
    source: SourceUrl,
    fetcher: Arc<dyn Fetcher>,
    status_policy: StatusPolicy,
}

impl Loader {
    pub fn new(source: SourceUrl, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            source,
            fetcher,
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn with_reqwest(source: SourceUrl, settings: FetchSettings) -> Self {
        Self::new(source, Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn source(&self) -> &SourceUrl {
        &self.source
    }

    /// Run one GET-and-parse of the source.
    ///
    /// Every call issues exactly one request. Nothing is cached and nothing is
    /// retried.
    pub async fn load_data(&self, sink: &dyn ProgressSink) -> Result<RemoteDocument, LoadError> {
        loader_info!("Loading {}", self.source);
        sink.emit(EngineEvent::Progress(LoadProgress {
            stage: Stage::Requesting,
            bytes: None,
        }));

        let output = self.fetcher.fetch(&self.source, sink).await?;
        let metadata = output.metadata;

        if !metadata.is_success() {
            match self.status_policy {
                StatusPolicy::Ignore => {
                    loader_warn!(
                        "{} answered with status {}; parsing body anyway",
                        self.source,
                        metadata.status
                    );
                }
                StatusPolicy::Enforce => {
                    return Err(LoadError::new(
                        FailureKind::HttpStatus(metadata.status),
                        format!("{} answered with status {}", self.source, metadata.status),
                    ));
                }
            }
        }

        sink.emit(EngineEvent::Progress(LoadProgress {
            stage: Stage::Parsing,
            bytes: Some(metadata.byte_len),
        }));
        let value = parse_document(&output.bytes)?;
        loader_debug!("Parsed {} bytes from {}", metadata.byte_len, metadata.final_url);

        sink.emit(EngineEvent::Progress(LoadProgress {
            stage: Stage::Done,
            bytes: Some(metadata.byte_len),
        }));
        Ok(RemoteDocument { value, metadata })
    }
}
