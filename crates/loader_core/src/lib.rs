//! Loader core: pure page lifecycle state machine.
mod effect;
mod msg;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{LoadPhase, PageState};
pub use update::update;
