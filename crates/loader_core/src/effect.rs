use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the one load of this page.
    LoadData,
    /// Write the resolved document to the diagnostic output.
    LogDocument { document: Value },
    /// Surface a rejected load.
    ReportFailure { message: String },
}
