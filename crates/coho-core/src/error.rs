use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid version map '{input}': expected a JSON object of repo id to version")]
    InvalidVersionMap {
        input: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
