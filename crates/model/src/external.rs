//! Reference-data search payloads.
//!
//! Responses from the two public lookup APIs the gateway proxies: the NIH
//! Clinical Tables ICD-10 search and the RxNav medication vocabulary. A
//! failed upstream call degrades to an empty result set still tagged with
//! the original query, never an error to the caller.

use serde::{Deserialize, Serialize};

/// One ICD-10 code/name pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisHit {
    pub code: String,
    pub name: String,
    /// "`code` - `name`" display form.
    pub description: String,
}

/// Diagnosis search results, tagged with the query that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisSearchResponse {
    pub results: Vec<DiagnosisHit>,
    pub total_count: usize,
    pub query: String,
}

impl DiagnosisSearchResponse {
    /// Empty result set for a query, used when the upstream call fails.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// One medication concept from the RxNav vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationHit {
    pub name: String,
    pub concept_id: String,
    pub vocabulary: String,
    /// Concept-group name the hit was found under.
    pub category: String,
}

/// Medication search results, tagged with the query that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSearchResponse {
    pub results: Vec<MedicationHit>,
    pub total_count: usize,
    pub query: String,
}

impl MedicationSearchResponse {
    /// Empty result set for a query, used when the upstream call fails.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}
