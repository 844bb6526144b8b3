use loader_engine::{EngineEvent, EngineHandle, FailureKind, FetchSettings, Loader, SourceUrl};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Blocks on the engine channel off the test runtime until the load settles.
async fn wait_for_completion(engine: EngineHandle) -> (EngineHandle, EngineEvent, usize) {
    tokio::task::spawn_blocking(move || {
        let mut progress = 0;
        loop {
            match engine.recv() {
                Some(event @ EngineEvent::LoadCompleted { .. }) => {
                    return (engine, event, progress);
                }
                Some(EngineEvent::Progress(_)) => progress += 1,
                None => panic!("engine stopped before completing the load"),
            }
        }
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_resolved_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
        .expect(1)
        .mount(&server)
        .await;
    let source = SourceUrl::parse(&format!("{}/data.json", server.uri())).unwrap();
    let engine = EngineHandle::new(Loader::with_reqwest(source, FetchSettings::default())).unwrap();

    engine.request_load();
    let (engine, event, progress) = wait_for_completion(engine).await;

    match event {
        EngineEvent::LoadCompleted { result } => {
            assert_eq!(result.unwrap().value, json!({"a": 1}));
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(progress > 0);
    assert!(engine.try_recv().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_rejection() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source = SourceUrl::parse(&format!("http://{addr}/data.json")).unwrap();
    let engine = EngineHandle::new(Loader::with_reqwest(source, FetchSettings::default())).unwrap();

    engine.request_load();
    let (_engine, event, _) = wait_for_completion(engine).await;

    match event {
        EngineEvent::LoadCompleted { result } => {
            assert_eq!(result.unwrap_err().kind, FailureKind::Network);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
