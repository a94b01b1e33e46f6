//! Flat lab-test result rows.
//!
//! One [`LabTestRow`] is a single observation instance joined with its order,
//! message, inbox, and patient context. The source hierarchy is
//! message (MSH) → order (OBR) → observation (OBX) → note (NTE): an
//! observation id is unique within its order, an order id within its message.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single lab observation row, flattened across the message/order/
/// observation/note hierarchy.
///
/// Columns that are nullable in the store (or absent in some procedure
/// versions) are `Option`; identifier fields that the store always supplies
/// default to zero when a row omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTestRow {
    /// Message-level identifier (MSH).
    #[serde(rename = "labTestMshID")]
    pub lab_test_msh_id: i32,
    pub sending_application: Option<String>,
    pub sending_facility: Option<String>,
    pub receiving_facility: Option<String>,
    pub message_datetime: Option<NaiveDateTime>,
    /// National health identifier associated with the patient.
    #[serde(rename = "nhiNumber")]
    pub nhi_number: Option<String>,
    pub full_name: Option<String>,
    pub dob: Option<NaiveDateTime>,
    pub gender_name: Option<String>,
    #[serde(rename = "patientID")]
    pub patient_id: Option<String>,
    #[serde(rename = "practiceID")]
    pub practice_id: Option<String>,
    pub msh_inserted_at: Option<NaiveDateTime>,
    pub markas_read: bool,
    #[serde(rename = "ifiInboxUpdate")]
    pub inbox_updated_at: Option<NaiveDateTime>,
    pub inbox_received_date: Option<NaiveDateTime>,
    /// Order-level identifier (OBR).
    #[serde(rename = "labTestOBRID")]
    pub lab_test_obr_id: i32,
    pub snomed_code: Option<String>,
    pub panel_type: Option<String>,
    pub message_subject: Option<String>,
    pub observation_date_time: Option<NaiveDateTime>,
    pub status_change_date_time: Option<NaiveDateTime>,
    #[serde(rename = "appointmentID")]
    pub appointment_id: Option<String>,
    /// Observation-level identifier (OBX).
    #[serde(rename = "labTestOBXID")]
    pub lab_test_obx_id: i64,
    #[serde(rename = "snomedCode_2")]
    pub snomed_code_2: Option<String>,
    pub result_name: Option<String>,
    pub observation_coding_system: Option<String>,
    pub observation_value: Option<String>,
    pub units: Option<String>,
    pub reference_ranges: Option<String>,
    /// Coded indicator that the value falls outside its reference range.
    #[serde(rename = "abnormalFlagID")]
    pub abnormal_flag_id: i32,
    pub abnormal_flag_description: Option<String>,
    /// Note-level identifier (NTE).
    #[serde(rename = "labTestNTEID")]
    pub lab_test_nte_id: i32,
    pub source: Option<String>,
    pub comments: Option<String>,
    pub ethnicity: Option<String>,
    #[serde(rename = "priorityID")]
    pub priority_id: i32,
    pub provider_full_name: Option<String>,
    pub org_name: Option<String>,
    pub folder_name: Option<String>,
    pub prev_date: Option<NaiveDateTime>,
    #[serde(rename = "obResultStatus")]
    pub ob_result_status: Option<String>,
    pub result_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_casing_preserved() {
        let row = LabTestRow {
            lab_test_msh_id: 7,
            nhi_number: Some("NHI123".to_string()),
            patient_id: Some("P001".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["labTestMshID"], 7);
        assert_eq!(json["nhiNumber"], "NHI123");
        assert_eq!(json["patientID"], "P001");
        assert!(json["labTestOBXID"].is_number());
    }

    #[test]
    fn test_default_is_empty_row() {
        let row = LabTestRow::default();
        assert_eq!(row.lab_test_msh_id, 0);
        assert!(row.message_datetime.is_none());
        assert!(!row.markas_read);
    }
}
