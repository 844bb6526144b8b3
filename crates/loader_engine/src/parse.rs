use serde_json::Value;

use crate::{FailureKind, LoadError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a response body as a single JSON value.
///
/// A leading UTF-8 BOM is skipped, matching how browsers read JSON bodies.
pub fn parse_document(bytes: &[u8]) -> Result<Value, LoadError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(body).map_err(|err| LoadError::new(FailureKind::Parse, err.to_string()))
}
