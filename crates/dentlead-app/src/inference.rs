use std::net::IpAddr;
use std::sync::Arc;

use dentlead_core::country;
use dentlead_core::locale::{slug_from_path, Locale};
use dentlead_ports::outbound::GeoLocator;
use dentlead_ports::types::InitialDialCode;

/// How a new form picks its starting dial code.
#[derive(Clone)]
pub enum DialCodeInference {
    /// From the page's URL slug.
    Slug,
    /// From one geo-IP lookup of the visitor.
    GeoIp(Arc<dyn GeoLocator>),
}

impl DialCodeInference {
    /// Whether leads built under this strategy carry the visitor's address.
    pub fn records_client_ip(&self) -> bool {
        matches!(self, Self::GeoIp(_))
    }

    /// Resolves the starting dial code. Misses and lookup failures keep `default`.
    pub async fn infer(
        &self,
        page_path: &str,
        client_ip: Option<IpAddr>,
        default: &str,
    ) -> InitialDialCode {
        match self {
            Self::Slug => InitialDialCode {
                dial_code: from_slug(page_path).unwrap_or(default).to_string(),
                ip: None,
            },
            Self::GeoIp(locator) => match locator.locate(client_ip).await {
                Ok(Some(found)) if country::is_known_dial_code(&found.dial_code) => {
                    InitialDialCode {
                        dial_code: found.dial_code,
                        ip: Some(found.ip),
                    }
                }
                Ok(Some(found)) => {
                    tracing::debug!(dial_code = %found.dial_code, "geo lookup returned unlisted dial code");
                    InitialDialCode {
                        dial_code: default.to_string(),
                        ip: Some(found.ip),
                    }
                }
                Ok(None) => InitialDialCode {
                    dial_code: default.to_string(),
                    ip: None,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "geo lookup failed, keeping default dial code");
                    InitialDialCode {
                        dial_code: default.to_string(),
                        ip: None,
                    }
                }
            },
        }
    }
}

/// Dial code bound to the page's slug, if the slug is known.
pub fn from_slug(page_path: &str) -> Option<&'static str> {
    slug_from_path(page_path)
        .and_then(Locale::for_slug)
        .map(|locale| locale.dial_code)
}
