use std::io::Write;

use anyhow::Context;
use loader_core::{update, Effect, LoadPhase, Msg, PageState};
use loader_engine::{EngineEvent, EngineHandle};
use loader_logging::{loader_debug, loader_error, loader_info};
use serde_json::Value;

/// Drives the page core and executes its effects against the engine.
pub struct EffectRunner<W: Write> {
    engine: EngineHandle,
    out: W,
    state: PageState,
}

impl<W: Write> EffectRunner<W> {
    pub fn new(engine: EngineHandle, out: W) -> Self {
        Self {
            engine,
            out,
            state: PageState::new(),
        }
    }

    /// Signals document-ready and blocks until the triggered load settles.
    ///
    /// The document is written only after it has resolved, never while the
    /// load is still pending.
    pub fn run_page(&mut self) -> anyhow::Result<PageState> {
        self.dispatch(Msg::DocumentReady)?;

        while self.state.phase() == LoadPhase::Pending {
            let event = self
                .engine
                .recv()
                .context("loader engine stopped before the load settled")?;
            match event {
                EngineEvent::Progress(progress) => {
                    loader_debug!("Load {:?} bytes={:?}", progress.stage, progress.bytes);
                }
                EngineEvent::LoadCompleted { result } => {
                    let msg = match result {
                        Ok(document) => {
                            loader_info!(
                                "Loaded {} bytes from {} (status {})",
                                document.metadata.byte_len,
                                document.metadata.final_url,
                                document.metadata.status
                            );
                            Msg::LoadResolved {
                                document: document.into_value(),
                            }
                        }
                        Err(err) => Msg::LoadRejected {
                            message: err.to_string(),
                        },
                    };
                    self.dispatch(msg)?;
                }
            }
        }

        Ok(self.state.clone())
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let (next, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = next;
        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(&mut self, effect: Effect) -> anyhow::Result<()> {
        match effect {
            Effect::LoadData => {
                loader_info!("Document ready; requesting page data");
                self.engine.request_load();
            }
            Effect::LogDocument { document } => {
                write_document(&mut self.out, &document)?;
            }
            Effect::ReportFailure { message } => {
                loader_error!("Page data load rejected: {}", message);
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

fn write_document(out: &mut impl Write, document: &Value) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(document).context("failed to render document")?;
    writeln!(out, "{rendered}").context("failed to write document")?;
    out.flush().context("failed to flush document output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader_engine::{FetchSettings, Loader, SourceUrl};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(
        status: u16,
        body: &'static str,
        expected_calls: u64,
    ) -> (MockServer, SourceUrl) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/interface/data.json"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(expected_calls)
            .mount(&server)
            .await;
        let source = SourceUrl::parse(&format!("{}/interface/data.json", server.uri())).unwrap();
        (server, source)
    }

    async fn run_page(source: SourceUrl) -> (PageState, String) {
        tokio::task::spawn_blocking(move || {
            loader_logging::initialize_for_tests();
            let loader = Loader::with_reqwest(source, FetchSettings::default());
            let engine = EngineHandle::new(loader).unwrap();
            let mut runner = EffectRunner::new(engine, Vec::new());
            let state = runner.run_page().unwrap();
            (state, String::from_utf8(runner.into_output()).unwrap())
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn logs_resolved_document_once() {
        let (_server, source) = serve(200, r#"{"a":1}"#, 1).await;

        let (state, output) = run_page(source).await;

        assert_eq!(state.phase(), LoadPhase::Resolved);
        assert_eq!(state.loads_requested(), 1);
        assert_eq!(output, "{\n  \"a\": 1\n}\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn repeated_runs_log_identical_output() {
        let (_server, source) = serve(200, r#"[{"id":1,"tags":["flood"]}]"#, 2).await;

        let (_, first) = run_page(source.clone()).await;
        let (_, second) = run_page(source).await;

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_with_json_body_is_logged() {
        let (_server, source) = serve(500, r#"{"error":"x"}"#, 1).await;

        let (state, output) = run_page(source).await;

        assert_eq!(state.phase(), LoadPhase::Resolved);
        assert_eq!(output, "{\n  \"error\": \"x\"\n}\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unparseable_body_is_reported_not_logged() {
        let (_server, source) = serve(404, "not found", 1).await;

        let (state, output) = run_page(source).await;

        assert_eq!(state.phase(), LoadPhase::Rejected);
        assert!(state.last_failure().unwrap().starts_with("invalid json"));
        assert!(output.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn refused_connection_is_reported() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = SourceUrl::parse(&format!("http://{addr}/interface/data.json")).unwrap();

        let (state, output) = run_page(source).await;

        assert_eq!(state.phase(), LoadPhase::Rejected);
        assert!(state.last_failure().unwrap().starts_with("network error"));
        assert!(output.is_empty());
    }
}
