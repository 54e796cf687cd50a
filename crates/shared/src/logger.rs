use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// ログ行の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogType {
    Info,
    Error,
}

/// 1 行分の構造化ログ。トップレベルのキーは `tipo` と `log_datos` のみ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub tipo: LogType,
    pub log_datos: Value,
}

/// 構造化ログの出力先
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// 標準出力へ 1 行ずつ書き出す
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write structured log line");
        }
    }
}

/// 書き込まれた行をメモリに保持する（テスト用）
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[derive(Clone)]
pub struct StructuredLogger {
    sink: Arc<dyn LogSink>,
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl StructuredLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink))
    }

    pub fn log(&self, tipo: LogType, log_datos: Value) {
        let line = LogLine { tipo, log_datos };
        match serde_json::to_string(&line) {
            Ok(line) => self.sink.write_line(&line),
            Err(e) => tracing::error!(error = %e, "Failed to serialize structured log line"),
        }
    }

    /// 呼び出し受信時のログ（イベント全体を含む）
    pub fn log_received(&self, mensaje: &str, event: &Value) {
        self.log(
            LogType::Info,
            json!({
                "mensaje": mensaje,
                "event": event
            }),
        );
    }

    /// 永続化成功時のログ
    pub fn log_success<R, A>(&self, mensaje: &str, tenant_id: &str, pelicula: &R, dynamodb_response: &A)
    where
        R: Serialize,
        A: Serialize,
    {
        self.log(
            LogType::Info,
            json!({
                "mensaje": mensaje,
                "tenant_id": tenant_id,
                "pelicula": pelicula,
                "dynamodb_response": dynamodb_response
            }),
        );
    }

    /// 失敗時のログ。`body_recibido` は受け取ったボディ（なければ null）
    pub fn log_error(&self, mensaje: &str, error: &AppError, body_recibido: Option<&Value>) {
        self.log(
            LogType::Error,
            json!({
                "mensaje": mensaje,
                "detalle_error": error.to_string(),
                "tipo_error": error.code(),
                "body_recibido": body_recibido
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> serde_json::Map<String, Value> {
        match serde_json::from_str::<Value>(line).unwrap() {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_log_line_has_exactly_two_keys() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(Arc::new(sink.clone()));

        logger.log_received("Evento recibido", &json!({"body": "{}"}));
        logger.log_error(
            "Error",
            &AppError::Configuration("TABLE_NAME is not set".to_string()),
            None,
        );

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let map = parse(line);
            assert_eq!(map.len(), 2);
            assert!(map.contains_key("tipo"));
            assert!(map.contains_key("log_datos"));
        }
        assert_eq!(parse(&lines[0])["tipo"], "INFO");
        assert_eq!(parse(&lines[1])["tipo"], "ERROR");
    }

    #[test]
    fn test_log_error_fields() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(Arc::new(sink.clone()));
        let body = json!("not json");

        logger.log_error(
            "Error al crear la película",
            &AppError::MalformedBody("expected value".to_string()),
            Some(&body),
        );

        let map = parse(&sink.lines()[0]);
        let datos = &map["log_datos"];
        assert_eq!(datos["mensaje"], "Error al crear la película");
        assert_eq!(datos["tipo_error"], "MALFORMED_BODY");
        assert_eq!(datos["body_recibido"], "not json");
        assert!(datos["detalle_error"]
            .as_str()
            .unwrap()
            .contains("expected value"));
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(Arc::new(sink.clone()));

        logger.log(LogType::Info, json!({"mensaje": "Película"}));

        assert!(sink.lines()[0].contains("Película"));
    }

    #[test]
    fn test_log_type_round_trip() {
        let tipo: LogType = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(tipo, LogType::Error);
        assert_eq!(serde_json::to_string(&LogType::Info).unwrap(), "\"INFO\"");
    }
}
