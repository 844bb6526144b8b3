/// Phase of the single load owned by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// The page has not signalled readiness yet.
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl LoadPhase {
    pub fn is_settled(self) -> bool {
        matches!(self, LoadPhase::Resolved | LoadPhase::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    phase: LoadPhase,
    loads_requested: u32,
    last_failure: Option<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Number of loads this page has started. Never exceeds one.
    pub fn loads_requested(&self) -> u32 {
        self.loads_requested
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub(crate) fn begin_load(&mut self) {
        self.phase = LoadPhase::Pending;
        self.loads_requested += 1;
    }

    pub(crate) fn resolve(&mut self) {
        self.phase = LoadPhase::Resolved;
    }

    pub(crate) fn reject(&mut self, message: &str) {
        self.phase = LoadPhase::Rejected;
        self.last_failure = Some(message.to_string());
    }
}
