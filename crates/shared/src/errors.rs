use domain::DomainError;
use thiserror::Error;

/// 映画作成処理で発生しうるエラー
///
/// どのバリアントもレスポンス上は 500 に集約される。区別はログでのみ行う。
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("DynamoDB error: {0}")]
    DynamoDb(String),
}

impl AppError {
    /// ログ出力用のエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::MalformedBody(_) => "MALFORMED_BODY",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::DynamoDb(_) => "DYNAMODB_ERROR",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::MalformedBody(error.to_string())
    }
}
