//! Machine-readable description of the document API, for tools and agents
//! that call it. Served at `GET /openapi.json`; describes behavior only.

use axum::Json;
use serde_json::{json, Value};

use crate::render::DOCX_MIME_TYPE;

/// GET /openapi.json
pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

fn string_table(description: &str, columns: &[&str]) -> Value {
    json!({
        "type": "array",
        "description": format!("{description} Each row: {}.", columns.join(", ")),
        "items": {
            "type": "array",
            "items": { "type": "string" },
            "maxItems": columns.len()
        }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Level Set Profile Document API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Renders a coaching profile into a Word document and serves it for download."
        },
        "paths": {
            "/generate-docx": { "post": generate_operation() },
            "/download/{filename}": { "get": download_operation() }
        },
        "components": {
            "schemas": {
                "ProfileSections": profile_sections_schema(),
                "ProfileRequest": profile_request_schema(),
                "GenerateDocxResponse": generate_response_schema(),
                "ValidationErrorResponse": validation_error_schema(),
                "NotFoundResponse": {
                    "type": "object",
                    "properties": {
                        "detail": { "type": "string", "const": "File not found." }
                    }
                }
            }
        }
    })
}

fn json_content(schema_ref: &str) -> Value {
    json!({
        "application/json": {
            "schema": { "$ref": format!("#/components/schemas/{schema_ref}") }
        }
    })
}

fn generate_operation() -> Value {
    json!({
        "operationId": "generateDocx",
        "summary": "Render a profile report and store it for download",
        "requestBody": {
            "required": true,
            "content": json_content("ProfileRequest")
        },
        "responses": {
            "200": {
                "description": "Document rendered and stored",
                "content": json_content("GenerateDocxResponse")
            },
            "422": {
                "description": "Body does not match ProfileRequest",
                "content": json_content("ValidationErrorResponse")
            }
        }
    })
}

fn download_operation() -> Value {
    let mut binary = serde_json::Map::new();
    binary.insert(
        DOCX_MIME_TYPE.to_string(),
        json!({ "schema": { "type": "string", "format": "binary" } }),
    );

    json!({
        "operationId": "downloadDocument",
        "summary": "Download a previously generated report",
        "parameters": [{
            "name": "filename",
            "in": "path",
            "required": true,
            "schema": { "type": "string" },
            "description": "File name taken from a generate-docx download_url"
        }],
        "responses": {
            "200": {
                "description": "The document",
                "content": Value::Object(binary)
            },
            "404": {
                "description": "No document with that name",
                "content": json_content("NotFoundResponse")
            }
        }
    })
}

fn profile_sections_schema() -> Value {
    json!({
        "type": "object",
        "required": ["step1", "step2", "step3", "step4", "step5", "step6", "summary"],
        "properties": {
            "step1": { "type": "string", "description": "Career alignment assessment." },
            "step2": { "type": "string", "description": "Current functional domain." },
            "step3": string_table("Trajectory insight.", &["stage", "title", "years"]),
            "step4": string_table("Compensation intelligence.", &["stage", "typical salary"]),
            "step5": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Key growth levers, one per bullet."
            },
            "step6": string_table("Future-facing roles.", &["title", "executive?", "salary"]),
            "summary": { "type": "string", "description": "Readiness summary." }
        }
    })
}

fn profile_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["client_name", "profile_sections"],
        "properties": {
            "client_name": { "type": "string" },
            "profile_sections": { "$ref": "#/components/schemas/ProfileSections" }
        }
    })
}

fn generate_response_schema() -> Value {
    json!({
        "type": "object",
        "required": ["download_url"],
        "properties": {
            "download_url": {
                "type": "string",
                "examples": ["/download/Jane_Doe_LevelSetProfile.docx"]
            }
        }
    })
}

fn validation_error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "detail": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["loc", "msg", "type"],
                    "properties": {
                        "loc": {
                            "type": "array",
                            "items": { "anyOf": [{ "type": "string" }, { "type": "integer" }] }
                        },
                        "msg": { "type": "string" },
                        "type": { "type": "string" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describes_both_document_operations() {
        let doc = openapi_document();
        assert!(doc["paths"]["/generate-docx"]["post"].is_object());
        assert!(doc["paths"]["/download/{filename}"]["get"].is_object());
    }

    #[test]
    fn test_all_sections_required() {
        let doc = openapi_document();
        let required = doc["components"]["schemas"]["ProfileSections"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 7);
    }

    #[test]
    fn test_download_declares_docx_media_type() {
        let doc = openapi_document();
        let content = &doc["paths"]["/download/{filename}"]["get"]["responses"]["200"]["content"];
        assert!(content[DOCX_MIME_TYPE].is_object());
    }
}
