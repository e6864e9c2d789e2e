#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
