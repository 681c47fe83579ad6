use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid trade record {0}: {1}")]
    InvalidTrade(String, String),
}
