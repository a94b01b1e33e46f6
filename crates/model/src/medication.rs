//! Paged medication list entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One prescribed-medication row for a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientMedication {
    #[serde(rename = "patientID")]
    pub patient_id: i32,
    #[serde(rename = "medicationID")]
    pub medication_id: i32,
    #[serde(rename = "lastRXDate")]
    pub last_rx_date: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDateTime>,
    pub provider_name: Option<String>,
    pub medicine_name: Option<String>,
    pub take: Option<String>,
    #[serde(rename = "frequencyID")]
    pub frequency_id: Option<i32>,
    #[serde(rename = "routeID")]
    pub route_id: Option<i32>,
    pub quantity: Option<i32>,
    pub duration: Option<i32>,
    pub duration_type: Option<String>,
    pub directions: Option<String>,
    pub medication_category: Option<String>,
}
