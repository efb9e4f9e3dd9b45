//! JSON body extractor that reports where decoding failed.
//!
//! Axum's `Json` flattens deserialization failures into a text body. Here the
//! body is decoded through `serde_path_to_error` so a 422 can point at the
//! exact field (`["body", "profile_sections", "step3", 0, 1]`).

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{error::Category, json, Value};
use serde_path_to_error::Segment;

use crate::errors::{AppError, FieldError};

/// Structurally validated JSON body. Rejects with 422 and per-field detail.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::PayloadRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        decode(&bytes)
            .map(ValidatedJson)
            .map_err(|e| AppError::UnprocessableEntity(vec![e]))
    }
}

/// Decodes `bytes` as `T`, describing the first failure as a [`FieldError`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FieldError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(field_error)?;
    deserializer.end().map_err(|e| FieldError {
        loc: vec![json!("body")],
        msg: without_position(&e),
        kind: "json_invalid",
    })?;
    Ok(value)
}

fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let mut loc = vec![json!("body")];
    for segment in err.path().iter() {
        match segment {
            Segment::Seq { index } => loc.push(json!(index)),
            Segment::Map { key } => loc.push(json!(key)),
            Segment::Enum { variant } => loc.push(json!(variant)),
            Segment::Unknown => {}
        }
    }

    let inner = err.into_inner();
    let msg = without_position(&inner);

    let kind = match inner.classify() {
        Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        Category::Data => {
            if let Some(field) = missing_field_name(&msg) {
                loc.push(Value::String(field.to_string()));
                "missing"
            } else if msg.starts_with("invalid type") {
                "invalid_type"
            } else {
                "value_error"
            }
        }
    };

    FieldError { loc, msg, kind }
}

/// serde_json appends " at line N column M"; the location is carried in `loc` instead.
fn without_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}

fn missing_field_name(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.strip_suffix('`')
}
