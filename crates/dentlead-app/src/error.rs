use dentlead_core::error::DomainError;
use dentlead_ports::error::PortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("port error: {0}")]
    Port(#[from] PortError),
}
