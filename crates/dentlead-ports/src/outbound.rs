use std::net::IpAddr;

use async_trait::async_trait;

use dentlead_core::lead::LeadPayload;

use crate::error::PortError;
use crate::types::GeoLocation;

/// CRM endpoint that accepts leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), PortError>;
}

/// IP geolocation service. `None` for the address means "the caller's own".
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self, ip: Option<IpAddr>) -> Result<Option<GeoLocation>, PortError>;
}

/// Key to localized string lookup. Unknown keys come back unchanged.
pub trait Translator: Send + Sync {
    fn t(&self, key: &str) -> String;
}
