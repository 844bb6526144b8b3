use crate::{Effect, LoadPhase, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
///
/// The page triggers at most one load. Completion messages are only honoured
/// while that load is pending, and the document is handed out for logging
/// only once it has resolved.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentReady => {
            if state.phase() != LoadPhase::Idle {
                return (state, Vec::new());
            }
            state.begin_load();
            vec![Effect::LoadData]
        }
        Msg::LoadResolved { document } => {
            if state.phase() != LoadPhase::Pending {
                return (state, Vec::new());
            }
            state.resolve();
            // The document is not retained; it lives only in the effect.
            vec![Effect::LogDocument { document }]
        }
        Msg::LoadRejected { message } => {
            if state.phase() != LoadPhase::Pending {
                return (state, Vec::new());
            }
            state.reject(&message);
            vec![Effect::ReportFailure { message }]
        }
    };

    (state, effects)
}
