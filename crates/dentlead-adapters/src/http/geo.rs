use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use dentlead_ports::error::PortError;
use dentlead_ports::outbound::GeoLocator;
use dentlead_ports::types::GeoLocation;

use super::build_client;

/// Subset of an ipapi-style lookup response.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    ip: Option<String>,
    country_calling_code: Option<String>,
    #[serde(default)]
    error: bool,
}

/// Resolves a visitor's dial code through an ipapi-compatible JSON service.
#[derive(Clone)]
pub struct HttpGeoLocator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGeoLocator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PortError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn lookup_url(&self, ip: Option<IpAddr>) -> String {
        match ip {
            Some(ip) => format!("{}/{ip}/json/", self.base_url),
            None => format!("{}/json/", self.base_url),
        }
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn locate(&self, ip: Option<IpAddr>) -> Result<Option<GeoLocation>, PortError> {
        let response = self
            .client
            .get(self.lookup_url(ip))
            .send()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortError::Status(status.as_u16()));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| PortError::Decode(e.to_string()))?;

        if body.error {
            tracing::debug!(?ip, "geo service could not place address");
            return Ok(None);
        }
        Ok(body
            .country_calling_code
            .zip(body.ip)
            .map(|(dial_code, ip)| GeoLocation { dial_code, ip }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::serve_canned;
    use axum::http::Method;

    #[test]
    fn lookup_url_targets_caller_or_given_ip() {
        let geo = HttpGeoLocator::new("https://ipapi.co/", Duration::from_secs(1)).unwrap();
        assert_eq!(geo.lookup_url(None), "https://ipapi.co/json/");
        let ip: IpAddr = "203.0.113.9".parse().unwrap();
        assert_eq!(geo.lookup_url(Some(ip)), "https://ipapi.co/203.0.113.9/json/");
    }

    #[tokio::test]
    async fn parses_calling_code_and_ip() {
        let (base, seen) = serve_canned(
            200,
            r#"{"ip":"203.0.113.9","country_code":"DE","country_calling_code":"+49"}"#,
        )
        .await;
        let geo = HttpGeoLocator::new(base, Duration::from_secs(5)).unwrap();

        let found = geo.locate(None).await.unwrap();

        assert_eq!(
            found,
            Some(GeoLocation {
                dial_code: "+49".into(),
                ip: "203.0.113.9".into()
            })
        );
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::GET);
        assert_eq!(seen[0].path, "/json/");
    }

    #[tokio::test]
    async fn service_error_flag_means_unknown() {
        let (base, _) =
            serve_canned(200, r#"{"ip":"10.0.0.1","error":true,"reason":"Reserved IP Address"}"#)
                .await;
        let geo = HttpGeoLocator::new(base, Duration::from_secs(5)).unwrap();
        assert_eq!(geo.locate(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let (base, _) = serve_canned(200, "not json").await;
        let geo = HttpGeoLocator::new(base, Duration::from_secs(5)).unwrap();
        assert!(matches!(geo.locate(None).await, Err(PortError::Decode(_))));
    }

    #[tokio::test]
    async fn rate_limited_is_status_error() {
        let (base, _) = serve_canned(429, "{}").await;
        let geo = HttpGeoLocator::new(base, Duration::from_secs(5)).unwrap();
        assert!(matches!(geo.locate(None).await, Err(PortError::Status(429))));
    }
}
