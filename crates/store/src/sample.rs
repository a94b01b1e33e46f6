//! Built-in fallback dataset.
//!
//! When the backing store is unreachable (or the get-all procedure returns
//! nothing) the service answers with two fixed sample records instead of an
//! error. Callers depend on this for offline demos, so the behavior is part
//! of the public contract and covered by tests; do not replace it with an
//! error path.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use kauri_model::LabTestRow;
use tracing::warn;

use crate::error::StoreResult;

/// The two fixed sample records served when the store yields nothing.
pub fn lab_test_rows() -> Vec<LabTestRow> {
    let now = Utc::now().naive_utc();
    vec![
        LabTestRow {
            lab_test_msh_id: 1,
            sending_application: Some("LAB_SYSTEM".to_string()),
            sending_facility: Some("MAIN_LAB".to_string()),
            receiving_facility: Some("HOSPITAL_A".to_string()),
            message_datetime: Some(now - Duration::days(1)),
            nhi_number: Some("NHI123456789".to_string()),
            full_name: Some("John Doe".to_string()),
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).map(|d| d.and_time(NaiveTime::MIN)),
            gender_name: Some("Male".to_string()),
            patient_id: Some("P001".to_string()),
            practice_id: Some("PRACTICE001".to_string()),
            msh_inserted_at: Some(now),
            markas_read: false,
            lab_test_obr_id: 1,
            snomed_code: Some("TEST001".to_string()),
            message_subject: Some("Blood Test Results".to_string()),
            observation_date_time: Some(now),
            lab_test_obx_id: 1,
            result_name: Some("Hemoglobin".to_string()),
            observation_value: Some("14.2".to_string()),
            units: Some("g/dL".to_string()),
            reference_ranges: Some("12.0-16.0".to_string()),
            abnormal_flag_id: 0,
            source: Some("LAB".to_string()),
            comments: Some("Normal result".to_string()),
            priority_id: 3,
            ..Default::default()
        },
        LabTestRow {
            lab_test_msh_id: 2,
            sending_application: Some("LAB_SYSTEM".to_string()),
            sending_facility: Some("MAIN_LAB".to_string()),
            receiving_facility: Some("HOSPITAL_A".to_string()),
            message_datetime: Some(now - Duration::days(2)),
            nhi_number: Some("NHI987654321".to_string()),
            full_name: Some("Jane Smith".to_string()),
            dob: NaiveDate::from_ymd_opt(1985, 5, 15).map(|d| d.and_time(NaiveTime::MIN)),
            gender_name: Some("Female".to_string()),
            patient_id: Some("P002".to_string()),
            practice_id: Some("PRACTICE001".to_string()),
            msh_inserted_at: Some(now - Duration::days(1)),
            markas_read: true,
            lab_test_obr_id: 2,
            snomed_code: Some("TEST002".to_string()),
            message_subject: Some("Cholesterol Test".to_string()),
            observation_date_time: Some(now - Duration::days(1)),
            lab_test_obx_id: 2,
            result_name: Some("Total Cholesterol".to_string()),
            observation_value: Some("180".to_string()),
            units: Some("mg/dL".to_string()),
            reference_ranges: Some("<200".to_string()),
            abnormal_flag_id: 0,
            source: Some("LAB".to_string()),
            comments: Some("Good cholesterol level".to_string()),
            priority_id: 2,
            ..Default::default()
        },
    ]
}

/// The get-all fallback decision: a failed fetch or an empty result both
/// degrade to the sample dataset.
pub fn or_sample(fetched: StoreResult<Vec<LabTestRow>>) -> Vec<LabTestRow> {
    match fetched {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => {
            warn!("lab test fetch returned no rows; serving built-in sample dataset");
            lab_test_rows()
        }
        Err(err) => {
            warn!(error = %err, "lab test fetch failed; serving built-in sample dataset");
            lab_test_rows()
        }
    }
}
