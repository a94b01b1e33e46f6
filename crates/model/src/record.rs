//! The aggregated patient record bundle.
//!
//! One stored-procedure invocation returns up to four ordered result sets —
//! header, lab-test details, allergies, diagnoses — which the storage layer
//! assembles into a [`PatientRecordBundle`]. The header is absent exactly
//! when the first result set produced zero rows; the three collections are
//! independently optional.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Composite "everything about patient X" response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecordBundle {
    /// Demographic header from result set 1; `None` when that set was empty.
    pub header: Option<PatientRecordHeader>,
    /// Lab-test detail rows from result set 2, in source order.
    pub lab_test_details: Vec<PatientLabTestDetail>,
    /// Allergy records from result set 3.
    pub allergies: Vec<PatientAllergy>,
    /// Diagnosis records from result set 4.
    pub diagnoses: Vec<PatientDiagnosis>,
}

impl PatientRecordBundle {
    /// True when the bundle carries no header and no rows in any slice.
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.lab_test_details.is_empty()
            && self.allergies.is_empty()
            && self.diagnoses.is_empty()
    }
}

/// Demographic header of the patient record (result set 1, zero-or-one row).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecordHeader {
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
    pub ethnicity: Option<String>,
    pub age: Option<i32>,
}

/// One lab-test detail line (result set 2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLabTestDetail {
    #[serde(rename = "labTestOBRID")]
    pub lab_test_obr_id: i32,
    pub snomed_code: Option<String>,
    pub message_subject: Option<String>,
    pub observation_date_time: Option<NaiveDateTime>,
    pub status_change_date_time: Option<NaiveDateTime>,
    #[serde(rename = "appointmentID")]
    pub appointment_id: Option<String>,
    #[serde(rename = "labTestOBXID")]
    pub lab_test_obx_id: i64,
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
    pub lab_test_nte_id: i32,
    pub source: Option<String>,
    pub comments: Option<String>,
    #[serde(rename = "priorityID")]
    pub priority_id: i32,
}

/// One allergy reaction record (result set 3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAllergy {
    #[serde(rename = "allergyID")]
    pub allergy_id: i32,
    /// Stable identifier carried alongside the numeric id, when present.
    #[serde(rename = "allergyUUID")]
    pub allergy_uuid: Option<String>,
    pub is_reviewed: bool,
    #[serde(rename = "medTechID")]
    pub med_tech_id: Option<i32>,
    pub onset_date: Option<NaiveDateTime>,
    #[serde(rename = "allergyTypeID")]
    pub allergy_type_id: Option<i32>,
    #[serde(rename = "medicineTypeID")]
    pub medicine_type_id: Option<i32>,
    pub medicine_short_name: Option<String>,
    pub medicine_classification: Option<String>,
    pub favourite_substance: Option<String>,
    pub disease_name: Option<String>,
    pub substance_type_id: Option<i32>,
    pub other: Option<String>,
    pub reaction: Option<String>,
    pub is_active: bool,
    pub full_name: Option<String>,
    pub comment: Option<String>,
    pub is_highlight: bool,
    pub inserted_at: Option<NaiveDateTime>,
    pub allergy_type: Option<String>,
    pub name: Option<String>,
    /// "No known allergies" marker row.
    #[serde(rename = "isNKA")]
    pub is_nka: bool,
    pub sequence_no: Option<i32>,
    pub severity: Option<String>,
}

/// One condition record (result set 4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDiagnosis {
    #[serde(rename = "diagnosisID")]
    pub diagnosis_id: i32,
    #[serde(rename = "appointmentID")]
    pub appointment_id: Option<i32>,
    pub disease_name: Option<String>,
    pub diagnosis_date: Option<NaiveDateTime>,
    pub diagnosis_by: Option<String>,
    pub summary: Option<String>,
    pub is_long_term: bool,
    pub addto_problem: bool,
    pub is_highlighted: bool,
    /// Byte-typed column in some environments; kept narrow on purpose.
    pub sequence_no: Option<u8>,
    pub is_active: bool,
    pub is_confidential: bool,
    pub diagnosis_type: Option<String>,
    pub is_mapped: bool,
    #[serde(rename = "practiceID")]
    pub practice_id: Option<i32>,
    pub on_set_date: Option<NaiveDateTime>,
    pub mapped_by: Option<String>,
    pub mapped_date: Option<NaiveDateTime>,
    pub is_stopped: bool,
    pub snomed_disease_name: Option<String>,
    #[serde(rename = "patientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "practiceLocationID")]
    pub practice_location_id: Option<i32>,
    pub is_primary_diagnosis: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle() {
        assert!(PatientRecordBundle::default().is_empty());
    }

    #[test]
    fn test_bundle_with_only_allergies_is_not_empty() {
        let bundle = PatientRecordBundle {
            allergies: vec![PatientAllergy::default()],
            ..Default::default()
        };
        assert!(!bundle.is_empty());
        assert!(bundle.header.is_none());
    }

    #[test]
    fn test_header_absent_serializes_null() {
        let bundle = PatientRecordBundle::default();
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json["header"].is_null());
        assert_eq!(json["labTestDetails"].as_array().unwrap().len(), 0);
    }
}
