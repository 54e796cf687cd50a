use crate::DynamoDbClient;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::RequestId;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnConsumedCapacity};
use domain::MovieRecord;
use serde::Serialize;
use shared::AppError;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{error, info};

/// put_item の応答から抜き出した確認情報
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutAcknowledgment {
    pub table_name: String,
    pub request_id: Option<String>,
    pub consumed_capacity_units: Option<f64>,
}

/// 映画レコードの保存先
///
/// 使う操作は単一アイテムの無条件 put のみ。
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn put_movie(
        &self,
        table_name: &str,
        record: &MovieRecord,
    ) -> Result<PutAcknowledgment, AppError>;
}

pub struct DynamoMovieRepository {
    db: DynamoDbClient,
}

impl DynamoMovieRepository {
    pub fn new(db: DynamoDbClient) -> Self {
        Self { db }
    }

    /// `pelicula_datos` の構造を保ったまま DynamoDB アイテムへ変換
    pub fn to_item(record: &MovieRecord) -> Result<HashMap<String, AttributeValue>, AppError> {
        serde_dynamo::aws_sdk_dynamodb_1::to_item(record)
            .map_err(|e| AppError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl MovieStore for DynamoMovieRepository {
    async fn put_movie(
        &self,
        table_name: &str,
        record: &MovieRecord,
    ) -> Result<PutAcknowledgment, AppError> {
        let item = Self::to_item(record)?;
        let start_time = Instant::now();

        let output = self
            .db
            .client()
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(
                    table = table_name,
                    operation = "put_item",
                    duration_ms = start_time.elapsed().as_millis() as u64,
                    error = %message,
                    "DynamoDB operation failed"
                );
                AppError::DynamoDb(message)
            })?;

        info!(
            table = table_name,
            operation = "put_item",
            tenant_id = %record.tenant_id,
            uuid = %record.uuid,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "DynamoDB operation completed successfully"
        );

        Ok(PutAcknowledgment {
            table_name: table_name.to_string(),
            request_id: output.request_id().map(str::to_string),
            consumed_capacity_units: output
                .consumed_capacity()
                .and_then(|capacity| capacity.capacity_units()),
        })
    }
}
