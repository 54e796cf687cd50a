use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// 映画レコードの識別子（UUID v4 の文字列表現）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// テーブルに永続化される映画レコード
///
/// `pelicula_datos` は不透明な JSON 値としてそのまま保存し、中身は解釈しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub tenant_id: String,
    pub uuid: MovieId,
    pub pelicula_datos: Value,
}

impl MovieRecord {
    /// 新しい識別子を採番してレコードを組み立てる
    pub fn new(tenant_id: String, pelicula_datos: Value) -> Self {
        Self {
            tenant_id,
            uuid: MovieId::new(),
            pelicula_datos,
        }
    }
}
