use std::net::IpAddr;

use async_trait::async_trait;

use dentlead_core::lead::SubmissionReceipt;

use crate::types::{ContactSubmission, InitialDialCode};

/// Why a posted form was turned away before reaching the CRM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeRejection {
    /// Translation key of the failed check.
    Invalid { error_key: &'static str },
    UnknownDialCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted(SubmissionReceipt),
    Rejected(IntakeRejection),
    /// The CRM could not be reached or refused the lead.
    Failed { error_key: &'static str },
}

#[async_trait]
pub trait LeadIntake: Send + Sync {
    async fn initial_dial_code(&self, page_path: &str, client_ip: Option<IpAddr>)
        -> InitialDialCode;
    async fn submit(
        &self,
        page_path: &str,
        client_ip: Option<IpAddr>,
        form: ContactSubmission,
    ) -> IntakeOutcome;
}
