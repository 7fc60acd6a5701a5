use serde::{Deserialize, Serialize};

/// Result of a geo-IP lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub dial_code: String,
    pub ip: String,
}

/// Contact form as posted by the landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    /// Missing when the visitor never touched the country selector.
    pub dial_code: Option<String>,
    pub phone: String,
    pub email: String,
}

/// Dial code a new form should start with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialDialCode {
    pub dial_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}
