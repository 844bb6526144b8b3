use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host signalled that the page content finished loading.
    DocumentReady,
    /// Engine completion with the parsed document.
    LoadResolved { document: Value },
    /// Engine completion with a failure, already rendered for display.
    LoadRejected { message: String },
}
