use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Request body is not a JSON object")]
    BodyNotObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl DomainError {
    /// ログ出力用のエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::BodyNotObject => "BODY_NOT_OBJECT",
            DomainError::MissingField(_) => "MISSING_FIELD",
            DomainError::InvalidField { .. } => "INVALID_FIELD",
        }
    }
}
