//! Stored documents and their extracted content.

use serde::{Deserialize, Serialize};

/// A stored document row as the procedure returns it, binary payload
/// included. Internal to the service; responses carry [`DocumentContent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(rename = "documentID")]
    pub document_id: i32,
    #[serde(rename = "documentTypeID")]
    pub document_type_id: i32,
    pub document_name: Option<String>,
    pub description: Option<String>,
    pub is_deleted: bool,
    /// Type tag driving text extraction ("PDF", "RTF", "TXT", ...).
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_bytes: Option<Vec<u8>>,
    #[serde(rename = "inboxFolderItemID")]
    pub inbox_folder_item_id: Option<i32>,
}

/// The response shape for document lookups: metadata plus the payload as
/// base64 and the best-effort extracted text (`None` when extraction is
/// unsupported for the type or failed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    #[serde(rename = "documentID")]
    pub document_id: i32,
    #[serde(rename = "documentTypeID")]
    pub document_type_id: i32,
    pub document_name: Option<String>,
    pub description: Option<String>,
    pub is_deleted: bool,
    pub document_type: Option<String>,
    pub document_base64: Option<String>,
    pub document_text: Option<String>,
}
