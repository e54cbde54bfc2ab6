//! HTTP client wrapper - executes built requests

use std::future::Future;
use std::time::{Duration, Instant};

use crate::error::TransportError;
use crate::models::{ApiRequest, HttpReply};

/// Outcome of one invocation
pub type Invocation = Result<HttpReply, TransportError>;

/// Performs exactly one HTTP exchange per call.
///
/// 4xx/5xx replies are returned as `Ok`; only transport failures are errors.
pub trait Invoker {
    fn invoke(&self, request: &ApiRequest) -> impl Future<Output = Invocation>;
}

/// `reqwest`-backed invoker
#[derive(Clone)]
pub struct HttpInvoker {
    client: reqwest::Client,
}

impl HttpInvoker {
    pub fn new(timeout: Option<Duration>) -> Self {
        HttpInvoker {
            client: create_client(timeout),
        }
    }
}

impl Invoker for HttpInvoker {
    async fn invoke(&self, request: &ApiRequest) -> Invocation {
        let start = Instant::now();

        let mut req_builder = self.client.get(&request.url);
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        let result = async {
            let resp = req_builder.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;
            Ok::<_, reqwest::Error>(HttpReply { status, body })
        }
        .await;

        let elapsed = start.elapsed().as_millis() as u64;
        match result {
            Ok(reply) => {
                tracing::info!(
                    method = %request.method,
                    url = %request.url,
                    status = reply.status,
                    time_ms = elapsed,
                    "Request completed"
                );
                Ok(reply)
            }
            Err(e) => {
                let err = TransportError::from(e);
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    time_ms = elapsed,
                    "Request failed: {}",
                    err
                );
                Err(err)
            }
        }
    }
}

/// Create an HTTP client; without a timeout the client default applies
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(?timeout, "Failed to build HTTP client, using defaults: {}", e);
        reqwest::Client::new()
    })
}
