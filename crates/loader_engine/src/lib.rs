//! Loader engine: source configuration, transport, and the load pipeline.
mod engine;
mod fetch;
mod loader;
mod parse;
mod source;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use loader::{Loader, StatusPolicy};
pub use parse::parse_document;
pub use source::{SourceUrl, DICCAS_INTERFACE_DATA_URL};
pub use types::{
    EngineEvent, FailureKind, FetchMetadata, FetchOutput, LoadError, LoadProgress,
    RemoteDocument, Stage,
};
