//! Request logging goes through the same filter the server installs by default.

mod common;

use common::{spawn_app_with, MockChain};
use spl_token_demo::infra::logging;
use spl_token_demo::transport;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// current_thread runtime: the server task shares the thread-local subscriber.
#[tokio::test]
async fn requests_are_logged_under_default_filter() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(logging::DEFAULT_FILTER))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = spawn_app_with(MockChain::new(), false, |router| {
        router.layer(transport::http::trace_layer())
    })
    .await;
    let owner = solana_sdk::pubkey::Pubkey::new_unique();
    let resp = app
        .http
        .get(app.url(&format!("/balance/{}", owner)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let logs = captured.text();
    assert!(logs.contains("started processing request"), "logs: {}", logs);
    assert!(logs.contains("finished processing request"), "logs: {}", logs);
    assert!(logs.contains(&format!("/balance/{}", owner)), "logs: {}", logs);
    assert!(logs.contains("GET"), "logs: {}", logs);
}
