//! Patient demographic snapshot.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Demographic lookup result for a single patient.
///
/// Represents the latest known values at query time; the snapshot is not
/// versioned. `age` is derived by the backing procedure, not computed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub full_name: Option<String>,
    pub dob: Option<NaiveDateTime>,
    pub gender_name: Option<String>,
    #[serde(rename = "profileID")]
    pub profile_id: Option<String>,
    #[serde(rename = "practiceID")]
    pub practice_id: Option<String>,
    pub ethnicity: Option<String>,
    pub patient_name: Option<String>,
    pub nhi_number: Option<String>,
    pub age: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_serialize_null() {
        let info = PatientInfo::default();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["fullName"].is_null());
        assert!(json["age"].is_null());
    }
}
