use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::AppError;

/// API Gateway から渡される呼び出しイベント
///
/// `body` 以外のキーも受信ログのためにそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEnvelope(Value);

impl InvocationEnvelope {
    pub fn new(event: Value) -> Self {
        Self(event)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// 受信したままのボディ（未指定や null の場合は None）
    pub fn body(&self) -> Option<&Value> {
        self.0.get("body").filter(|body| !body.is_null())
    }

    /// ボディを JSON オブジェクトとして取り出す
    ///
    /// 文字列の場合は JSON としてパースし、未指定なら空のマップとして扱う。
    pub fn parsed_body(&self) -> Result<Value, AppError> {
        match self.body() {
            None => Ok(Value::Object(Map::new())),
            Some(Value::String(text)) => Ok(serde_json::from_str(text)?),
            Some(body) => Ok(body.clone()),
        }
    }
}

impl From<Value> for InvocationEnvelope {
    fn from(event: Value) -> Self {
        Self::new(event)
    }
}

/// API Gateway プロキシレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiGatewayProxyResponse {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parsed_body_inline_object() {
        let envelope = InvocationEnvelope::new(json!({"body": {"tenant_id": "t1"}}));
        assert_eq!(envelope.parsed_body().unwrap(), json!({"tenant_id": "t1"}));
    }

    #[test]
    fn test_parsed_body_string_is_decoded() {
        let envelope = InvocationEnvelope::new(json!({
            "body": "{\"tenant_id\":\"t1\",\"pelicula_datos\":1}",
            "httpMethod": "POST"
        }));

        assert_eq!(
            envelope.parsed_body().unwrap(),
            json!({"tenant_id": "t1", "pelicula_datos": 1})
        );
    }

    #[test]
    fn test_parsed_body_absent_is_empty_map() {
        let envelope = InvocationEnvelope::new(json!({"httpMethod": "POST"}));

        assert!(envelope.body().is_none());
        assert_eq!(envelope.parsed_body().unwrap(), json!({}));
    }

    #[test]
    fn test_parsed_body_null_is_empty_map() {
        let envelope = InvocationEnvelope::new(json!({"body": null}));
        assert_eq!(envelope.parsed_body().unwrap(), json!({}));
    }

    #[test]
    fn test_parsed_body_malformed_string() {
        let envelope = InvocationEnvelope::new(json!({"body": "not json"}));

        let err = envelope.parsed_body().unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }

    #[test]
    fn test_envelope_keeps_raw_event() {
        let event = json!({"body": "{}", "requestContext": {"requestId": "abc"}});
        let envelope: InvocationEnvelope = serde_json::from_value(event.clone()).unwrap();

        assert_eq!(envelope.raw(), &event);
    }

    #[test]
    fn test_response_uses_gateway_field_names() {
        let response = ApiGatewayProxyResponse::new(200, json!({"mensaje": "ok"}));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 200, "body": "{\"mensaje\":\"ok\"}"})
        );
    }
}
