use crate::errors::AppError;
use std::env;

/// Lambda 起動時に一度だけ読み込む設定
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub table_name: Option<String>,
    pub environment: String,
    pub aws_region: Option<String>,
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            table_name: non_empty("TABLE_NAME"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            aws_region: non_empty("AWS_REGION"),
            dynamodb_endpoint: non_empty("DYNAMODB_ENDPOINT"),
        }
    }

    pub fn with_table_name(table_name: impl Into<String>) -> Self {
        Config {
            table_name: Some(table_name.into()),
            environment: "dev".to_string(),
            ..Default::default()
        }
    }

    /// 書き込み先テーブル名。未設定はリクエスト単位のエラーとして扱う
    pub fn table_name(&self) -> Result<&str, AppError> {
        self.table_name
            .as_deref()
            .ok_or_else(|| AppError::Configuration("TABLE_NAME is not set".to_string()))
    }
}
