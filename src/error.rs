use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no production records available for the requested date range")]
    NoData,

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
