use crate::errors::DomainError;
use crate::movie::MovieRecord;
use serde_json::Value;

/// 映画作成リクエスト（パース済みボディから抽出した必須フィールド）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovieRequest {
    pub tenant_id: String,
    pub pelicula_datos: Value,
}

impl CreateMovieRequest {
    /// パース済みボディから `tenant_id` と `pelicula_datos` を取り出す
    ///
    /// どちらのキーも省略時のデフォルト値は持たない。
    pub fn from_body(body: &Value) -> Result<Self, DomainError> {
        let fields = body.as_object().ok_or(DomainError::BodyNotObject)?;

        let tenant_id = fields
            .get("tenant_id")
            .ok_or(DomainError::MissingField("tenant_id"))?;
        let pelicula_datos = fields
            .get("pelicula_datos")
            .ok_or(DomainError::MissingField("pelicula_datos"))?;

        // パーティションキーになるので文字列のみ受け付ける
        let tenant_id = tenant_id
            .as_str()
            .ok_or_else(|| DomainError::InvalidField {
                field: "tenant_id",
                reason: format!("expected a string, got {tenant_id}"),
            })?
            .to_string();

        Ok(Self {
            tenant_id,
            pelicula_datos: pelicula_datos.clone(),
        })
    }

    pub fn into_record(self) -> MovieRecord {
        MovieRecord::new(self.tenant_id, self.pelicula_datos)
    }
}
