#![allow(dead_code)]

use std::sync::Once;

use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("hello_app=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, hello_app::app()).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");
    wait_until_ready(&address).await;
    address
}

/// Same as [`spawn_app`] but drives the server through [`hello_app::serve`],
/// the entry point used by the binary.
pub async fn spawn_served_app() -> String {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        hello_app::serve(listener).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");
    wait_until_ready(&address).await;
    address
}

/// Polls `GET /health` until the server answers, panicking if it never does.
pub async fn wait_until_ready(address: &str) {
    const ATTEMPTS: usize = 10;

    let client = reqwest::Client::new();
    for _ in 0..ATTEMPTS {
        if client
            .get(format!("{address}/health"))
            .send()
            .await
            .is_ok()
        {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    panic!("server at {address} did not become ready after {ATTEMPTS} attempts");
}
