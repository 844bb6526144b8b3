use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::ChannelProgressSink;
use crate::{EngineEvent, Loader};

enum EngineCommand {
    Load,
}

/// Runs loads on a background tokio runtime and reports back over a channel.
///
/// The caller stays synchronous: it requests a load and then polls or blocks
/// for [`EngineEvent`]s until `LoadCompleted` arrives.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(loader: Loader) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let loader = Arc::new(loader);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let loader = loader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(loader.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request_load(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Load);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    loader: &Loader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = loader.load_data(&sink).await;
            let _ = event_tx.send(EngineEvent::LoadCompleted { result });
        }
    }
}
