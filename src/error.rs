use thiserror::Error;

/// Failures a lookup can surface to the operator. Per-item URL parse
/// failures inside the tree build are not represented here: they are logged
/// and dropped, never fatal.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid domain name: {0:?}")]
    InvalidDomain(String),

    #[error("domain is blocked: {0}")]
    BlockedDomain(String),

    #[error("archive index request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
