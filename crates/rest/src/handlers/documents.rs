//! Document lookup endpoint.
//!
//! Returns document metadata with the payload as base64 and the
//! best-effort extracted text. Extraction is display support, never a
//! failure source: documents whose type has no extractor (or whose payload
//! defeats it) come back with `documentText: null`.

use axum::extract::{Path, Query, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use kauri_model::{DocumentContent, DocumentRecord};
use kauri_store::LabStore;
use serde::Deserialize;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Query parameters for the document lookup.
#[derive(Debug, Deserialize)]
pub struct DocumentParams {
    #[serde(rename = "practiceID")]
    practice_id: Option<i32>,
}

/// `GET /api/labtest/document/{documentKey}?practiceID=`
///
/// 400 on a blank key or a non-positive practice id; store failures here
/// surface as a 500 with the underlying error text.
pub async fn document_by_key<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(document_key): Path<String>,
    Query(params): Query<DocumentParams>,
) -> RestResult<Json<Vec<DocumentContent>>> {
    if document_key.trim().is_empty() {
        return Err(RestError::bad_request("Document key is required"));
    }
    let practice_id = params.practice_id.unwrap_or_default();
    if practice_id <= 0 {
        return Err(RestError::bad_request("Valid Practice ID is required"));
    }

    let records = state
        .store()
        .document_by_key(&document_key, practice_id)
        .await
        .map_err(|err| {
            RestError::internal("An error occurred while retrieving document data", err)
        })?;

    Ok(Json(records.into_iter().map(into_content).collect()))
}

/// Converts a stored document row into the response shape: base64 payload
/// plus extracted text.
fn into_content(record: DocumentRecord) -> DocumentContent {
    let document_text = record
        .document_bytes
        .as_deref()
        .and_then(|bytes| kauri_doctext::extract_text(bytes, record.document_type.as_deref()));
    let document_base64 = record.document_bytes.as_deref().map(|bytes| BASE64.encode(bytes));

    DocumentContent {
        document_id: record.document_id,
        document_type_id: record.document_type_id,
        document_name: record.document_name,
        description: record.description,
        is_deleted: record.is_deleted,
        document_type: record.document_type,
        document_base64,
        document_text,
    }
}
