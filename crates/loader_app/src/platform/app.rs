use std::io;

use anyhow::{bail, Context};
use loader_core::LoadPhase;
use loader_engine::{EngineHandle, FetchSettings, Loader, SourceUrl};
use loader_logging::loader_info;

use super::effects::EffectRunner;
use super::logging;

/// Plays one page load against the built-in source.
///
/// Process start stands in for the document-ready event. The process exits
/// with an error when the load is rejected.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let source = SourceUrl::diccas_interface_data().context("built-in source url")?;
    let loader = Loader::with_reqwest(source, FetchSettings::default());
    let engine = EngineHandle::new(loader).context("failed to start loader engine")?;

    let mut runner = EffectRunner::new(engine, io::stdout().lock());
    let state = runner.run_page()?;
    loader_info!("Page load finished in phase {:?}", state.phase());

    match state.phase() {
        LoadPhase::Resolved => Ok(()),
        _ => bail!(
            "page load failed: {}",
            state.last_failure().unwrap_or("unknown failure")
        ),
    }
}
