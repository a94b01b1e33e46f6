//! Referral inbox rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One referral message row joined with its inbox and patient context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRow {
    #[serde(rename = "labTestMshID")]
    pub lab_test_msh_id: i32,
    pub sending_application: Option<String>,
    pub sending_facility: Option<String>,
    pub receiving_facility: Option<String>,
    pub message_datetime: Option<NaiveDateTime>,
    #[serde(rename = "nhiNumber")]
    pub nhi_number: Option<String>,
    pub version_id: Option<String>,
    pub full_name: Option<String>,
    #[serde(rename = "dmsID")]
    pub dms_id: Option<String>,
    #[serde(rename = "dmsIDKey")]
    pub dms_id_key: Option<String>,
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
    pub org_name: Option<String>,
    pub folder_name: Option<String>,
}
