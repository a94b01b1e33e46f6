//! Observation search results and longitudinal observation history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row from the grouped observation search procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLabObservation {
    #[serde(rename = "patientID")]
    pub patient_id: i32,
    pub message_subject: Option<String>,
    pub result_name: Option<String>,
    pub observation_coding_system: Option<String>,
    pub observation_date_time: Option<NaiveDateTime>,
    pub observation_value: Option<String>,
    pub units: Option<String>,
    pub reference_ranges: Option<String>,
    #[serde(rename = "abnormalFlagID")]
    pub abnormal_flag_id: Option<i32>,
    pub abnormal_flag_desc: Option<String>,
    #[serde(rename = "labTestNTEID")]
    pub lab_test_nte_id: Option<i64>,
    pub source: Option<String>,
    pub comments: Option<String>,
}

/// One row of per-panel observation history for a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationHistoryEntry {
    #[serde(rename = "labTestOBRID")]
    pub lab_test_obr_id: i32,
    pub snomed_code: Option<String>,
    pub message_subject: Option<String>,
    /// Panel grouping (e.g. "CBC"), used by the in-memory panel filter.
    pub panel_type: Option<String>,
    pub observation_date_time: Option<NaiveDateTime>,
    pub status_change_date_time: Option<NaiveDateTime>,
    #[serde(rename = "appointmentID")]
    pub appointment_id: Option<i32>,
    #[serde(rename = "labTestOBXID")]
    pub lab_test_obx_id: i32,
    #[serde(rename = "snomedCode_2")]
    pub snomed_code_2: Option<String>,
    pub result_name: Option<String>,
    pub observation_coding_system: Option<String>,
    pub observation_value: Option<String>,
    pub units: Option<String>,
    pub reference_ranges: Option<String>,
    #[serde(rename = "abnormalFlagID")]
    pub abnormal_flag_id: i32,
    pub abnormal_flag_desc: Option<String>,
    #[serde(rename = "labTestNTEID")]
    pub lab_test_nte_id: Option<i32>,
    pub source: Option<String>,
    pub comments: Option<String>,
    #[serde(rename = "priorityID")]
    pub priority_id: i32,
    pub provider_full_name: Option<String>,
    pub patient_full_address: Option<String>,
}
