mod crm;
mod geo;

use std::time::Duration;

use dentlead_ports::error::PortError;

pub use crm::HttpLeadSink;
pub use geo::HttpGeoLocator;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, PortError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("dentlead/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PortError::Transport(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_server {
    use std::sync::{Arc, Mutex};

    use axum::body::Bytes;
    use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
    use axum::Router;
    use tokio::net::TcpListener;

    /// A request as the canned server received it.
    #[derive(Debug, Clone)]
    pub struct Seen {
        pub method: Method,
        pub path: String,
        pub content_type: Option<String>,
        pub body: String,
    }

    pub type SeenRequests = Arc<Mutex<Vec<Seen>>>;

    /// Answers every request with `status` and the JSON `body`, recording what came in.
    pub async fn serve_canned(status: u16, body: &'static str) -> (String, SeenRequests) {
        let seen = SeenRequests::default();
        let recorder = seen.clone();
        let status = StatusCode::from_u16(status).unwrap();

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap, request: Bytes| async move {
                recorder.lock().unwrap().push(Seen {
                    method,
                    path: uri.path().to_string(),
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body: String::from_utf8_lossy(&request).into_owned(),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), seen)
    }
}
