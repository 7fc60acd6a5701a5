use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::SubmissionId;
use crate::locale::Locale;
use crate::phone::{digits_only, validate};

/// Fixed attribution sent with every lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadMetadata {
    pub lead_source: String,
    pub doctor: String,
    pub lead_source_detail: String,
}

impl Default for LeadMetadata {
    fn default() -> Self {
        Self {
            lead_source: "Google/Web Form".into(),
            doctor: "Cevre Dent".into(),
            lead_source_detail: "Cevredent Turkey Web App".into(),
        }
    }
}

/// Body posted to the CRM ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    /// Dial code and local digits with no separator, e.g. "+905321234567".
    pub phone: String,
    pub email: String,
    pub lead_source: String,
    pub language: String,
    pub doctor: String,
    pub lead_source_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Form fields as entered by the visitor.
#[derive(Debug, Clone, Copy)]
pub struct LeadContact<'a> {
    pub name: &'a str,
    pub dial_code: &'a str,
    pub local_number: &'a str,
    pub email: &'a str,
}

impl LeadPayload {
    /// Builds the payload, refusing numbers the phone rules reject.
    pub fn assemble(
        contact: LeadContact<'_>,
        locale: &Locale,
        metadata: &LeadMetadata,
        ip: Option<String>,
    ) -> Result<Self, DomainError> {
        let verdict = validate(contact.dial_code, contact.local_number);
        if !verdict.valid {
            return Err(DomainError::InvalidPhone(verdict.error_kind));
        }

        Ok(Self {
            name: contact.name.trim().to_string(),
            phone: format!("{}{}", contact.dial_code, digits_only(contact.local_number)),
            email: contact.email.trim().to_string(),
            lead_source: metadata.lead_source.clone(),
            language: locale.language.to_string(),
            doctor: metadata.doctor.clone(),
            lead_source_detail: metadata.lead_source_detail.clone(),
            ip,
        })
    }
}

/// Record of a lead the CRM accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    pub redirect: String,
    pub submitted_at: DateTime<Utc>,
}
