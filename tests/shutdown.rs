mod common;

use std::time::Duration;

use tokio::{net::TcpListener, sync::oneshot};

use common::{init_tracing_once, wait_until_ready};

#[tokio::test]
async fn server_stops_cleanly_when_signalled() {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    let (tx, rx) = oneshot::channel::<()>();
    let server = tokio::spawn(hello_app::serve_with_shutdown(listener, async {
        rx.await.ok();
    }));

    wait_until_ready(&address).await;
    {
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{address}/"))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    tx.send(()).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not shut down in time")
        .expect("server task panicked");
    assert!(result.is_ok(), "serve returned {result:?}");

    let after = reqwest::Client::new()
        .get(format!("{address}/health"))
        .send()
        .await;
    assert!(after.is_err(), "server still accepting connections");
}

#[tokio::test]
#[should_panic(expected = "did not become ready")]
async fn readiness_wait_fails_loudly_without_a_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    wait_until_ready(&format!("http://127.0.0.1:{port}")).await;
}
