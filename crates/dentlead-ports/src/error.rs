use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
}
