//! `Transport` backed by ureq.
//!
//! ureq is blocking, so each request runs on tokio's blocking pool. Status
//! codes are returned as data; only failures to get any response at all are
//! errors.

use async_trait::async_trait;
use films_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, TransportError> {
    tracing::debug!(method = req.method.as_str(), path = %req.path, "sending request");
    let mut call = match req.method {
        HttpMethod::Get => agent.get(&req.path),
    };
    for (name, value) in &req.headers {
        call = call.header(name, value);
    }
    let mut response = call.call().map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::new(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use films_core::FilmsClient;

    use super::*;

    async fn serve() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(mock_server::run(listener));
        format!("http://{addr}")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetches_films_from_mock_server() {
        let client = FilmsClient::new(&serve().await);
        let response = UreqTransport::default()
            .execute(client.build_list_films())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response
            .headers
            .iter()
            .any(|(name, value)| name == "content-type" && value == "application/json"));
        let movies = client.parse_list_films(response).unwrap();
        assert_eq!(movies.len(), 6);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_is_returned_as_data() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/people", serve().await),
            headers: Vec::new(),
            body: None,
        };
        let response = UreqTransport::default().execute(request).await.unwrap();
        assert_eq!(response.status, 404);
    }
}
