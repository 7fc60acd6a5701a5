use std::time::Duration;

use async_trait::async_trait;

use dentlead_core::lead::LeadPayload;
use dentlead_ports::error::PortError;
use dentlead_ports::outbound::LeadSink;

use super::build_client;

/// Posts leads as JSON to the CRM's form ingestion endpoint.
#[derive(Clone)]
pub struct HttpLeadSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadSink {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, PortError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), PortError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), endpoint = %self.endpoint, "crm rejected lead");
            return Err(PortError::Status(status.as_u16()));
        }

        tracing::debug!(status = status.as_u16(), "crm accepted lead");
        Ok(())
    }
}
