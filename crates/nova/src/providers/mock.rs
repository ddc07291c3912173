use async_trait::async_trait;
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};

use super::bedrock::{InvokeOutput, ModelInvoker};
use crate::errors::{NovaError, NovaResult};

/// A mock invoker that replays pre-configured response bodies and records requests
pub struct MockInvoker {
    responses: Arc<Mutex<Vec<Value>>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockInvoker {
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far, as (model id, parsed body)
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> NovaResult<InvokeOutput> {
        let request: Value = serde_json::from_slice(&body)?;
        let mut requests = self.requests.lock().unwrap();
        let request_id = format!("mock-request-{}", requests.len());
        requests.push((model_id.to_string(), request));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(NovaError::Transport("no more mock responses".to_string()));
        }
        let response = responses.remove(0);
        Ok(InvokeOutput {
            request_id,
            body: serde_json::to_vec(&response)?,
        })
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber installed on this thread and return what it logged
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
