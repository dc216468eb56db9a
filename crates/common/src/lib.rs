use thiserror::Error;

pub mod types;
pub mod users;
pub mod utils;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}
