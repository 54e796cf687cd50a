use crate::models::{ApiGatewayProxyResponse, InvocationEnvelope};
use domain::{CreateMovieRequest, MovieRecord};
use infrastructure::{MovieStore, PutAcknowledgment};
use serde_json::json;
use shared::{AppError, Config, StructuredLogger};
use tracing::{error, info};

pub const MENSAJE_RECIBIDO: &str = "Evento recibido en CrearPelicula";
pub const MENSAJE_CREADA: &str = "Película creada correctamente";
pub const MENSAJE_ERROR: &str = "Error al crear la película";

/// 映画レコード作成ハンドラー
///
/// 呼び出しごとに `Received -> {Persisted, Failed}` のどちらかで終わる。
/// 失敗はすべて 500 レスポンスに変換し、ランタイムへはエラーを返さない。
pub struct RecordCreationHandler<S> {
    store: S,
    config: Config,
    logger: StructuredLogger,
}

impl<S: MovieStore> RecordCreationHandler<S> {
    pub fn new(store: S, config: Config, logger: StructuredLogger) -> Self {
        Self {
            store,
            config,
            logger,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn handle(&self, envelope: InvocationEnvelope) -> ApiGatewayProxyResponse {
        self.logger.log_received(MENSAJE_RECIBIDO, envelope.raw());

        match self.create_movie(&envelope).await {
            Ok((pelicula, ack)) => {
                info!(tenant_id = %pelicula.tenant_id, uuid = %pelicula.uuid, "Movie created");
                self.logger
                    .log_success(MENSAJE_CREADA, &pelicula.tenant_id, &pelicula, &ack);

                ApiGatewayProxyResponse::new(
                    200,
                    json!({
                        "mensaje": MENSAJE_CREADA,
                        "pelicula": pelicula
                    }),
                )
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "Movie creation failed");
                self.logger.log_error(MENSAJE_ERROR, &e, envelope.body());

                create_error_response(&e)
            }
        }
    }

    async fn create_movie(
        &self,
        envelope: &InvocationEnvelope,
    ) -> Result<(MovieRecord, PutAcknowledgment), AppError> {
        let body = envelope.parsed_body()?;
        let request = CreateMovieRequest::from_body(&body)?;
        let table_name = self.config.table_name()?;

        let pelicula = request.into_record();
        let ack = self.store.put_movie(table_name, &pelicula).await?;

        Ok((pelicula, ack))
    }
}

/// エラーレスポンスを作成（原因の種別に関係なく 500）
fn create_error_response(error: &AppError) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse::new(
        500,
        json!({
            "mensaje": MENSAJE_ERROR,
            "detalle_error": error.to_string()
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn test_create_error_response() {
        let response =
            create_error_response(&AppError::from(DomainError::MissingField("pelicula_datos")));

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["mensaje"], MENSAJE_ERROR);
        assert_eq!(
            body["detalle_error"],
            "Missing required field: pelicula_datos"
        );
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
