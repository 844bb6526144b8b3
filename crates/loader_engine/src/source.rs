use std::fmt;

use crate::{FailureKind, LoadError};

/// Data file served to the DiCCAS interface page.
pub const DICCAS_INTERFACE_DATA_URL: &str =
    "https://raw.githubusercontent.com/LaboratorioSperimentale/DiCCAS/refs/heads/interface/interface/data.json";

/// Absolute http(s) URL a [`crate::Loader`] reads from.
///
/// Built once and never mutated; production code builds it from a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(url::Url);

impl SourceUrl {
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let parsed = url::Url::parse(raw)
            .map_err(|err| LoadError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed)),
            other => Err(LoadError::new(
                FailureKind::InvalidUrl,
                format!("{raw}: unsupported scheme {other}"),
            )),
        }
    }

    pub fn diccas_interface_data() -> Result<Self, LoadError> {
        Self::parse(DICCAS_INTERFACE_DATA_URL)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
