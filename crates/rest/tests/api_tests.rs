//! Route-level tests over an in-memory mock store.
//!
//! Exercises the HTTP contract: status codes, validation before I/O, the
//! sample-data fallback shape, the aggregated record, and the document
//! content mapping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use kauri_model::{
    DocumentRecord, LabTestRow, ObservationHistoryEntry, PatientAllergy, PatientDiagnosis,
    PatientInfo, PatientLabObservation, PatientMedication, PatientRecordBundle,
    PatientRecordHeader, ReferralRow,
};
use kauri_rest::{create_app_with_client, ExternalApiClient, ServerConfig};
use kauri_store::{
    sample, LabStore, MedicationPage, PriorityBucket, StoreError, StoreResult,
};
use serde_json::Value;

/// In-memory store with scriptable responses.
#[derive(Default)]
struct MockStore {
    all_rows: Vec<LabTestRow>,
    patient_rows: HashMap<String, Vec<LabTestRow>>,
    infos: HashMap<i64, PatientInfo>,
    record: Option<PatientRecordBundle>,
    allergies: Vec<PatientAllergy>,
    diagnoses: Vec<PatientDiagnosis>,
    observations: Vec<PatientLabObservation>,
    history: Vec<ObservationHistoryEntry>,
    documents: Option<Vec<DocumentRecord>>,
    referrals: Vec<ReferralRow>,
    bucket_rows: Vec<LabTestRow>,
    // Shared so tests can inspect what the handler forwarded.
    seen_medication_page: Arc<Mutex<Option<MedicationPage>>>,
}

#[async_trait]
impl LabStore for MockStore {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn all_lab_tests(&self) -> Vec<LabTestRow> {
        self.all_rows.clone()
    }

    async fn lab_tests_by_patient(&self, patient_id: &str) -> Vec<LabTestRow> {
        self.patient_rows.get(patient_id).cloned().unwrap_or_default()
    }

    async fn patient_lab_tests(&self, patient_id: i64) -> Vec<LabTestRow> {
        self.patient_rows
            .get(&patient_id.to_string())
            .cloned()
            .unwrap_or_default()
    }

    async fn patient_info(&self, patient_id: i64) -> Option<PatientInfo> {
        self.infos.get(&patient_id).cloned()
    }

    async fn patient_record(
        &self,
        _patient_id: i64,
        _lab_test_msh_id: Option<i64>,
    ) -> Option<PatientRecordBundle> {
        self.record.clone()
    }

    async fn patient_allergies(&self, _patient_id: i64) -> Vec<PatientAllergy> {
        self.allergies.clone()
    }

    async fn patient_diagnoses(&self, _patient_id: i64) -> Vec<PatientDiagnosis> {
        self.diagnoses.clone()
    }

    async fn patient_observations(
        &self,
        _patient_id: i32,
        _observation_text: Option<String>,
        _practice_id: Option<i32>,
    ) -> Vec<PatientLabObservation> {
        self.observations.clone()
    }

    async fn observation_history(&self, _patient_id: i32) -> Vec<ObservationHistoryEntry> {
        self.history.clone()
    }

    async fn patient_medications(
        &self,
        _patient_id: i32,
        page: MedicationPage,
    ) -> Vec<PatientMedication> {
        *self.seen_medication_page.lock().unwrap() = Some(page);
        vec![PatientMedication::default()]
    }

    async fn referrals(&self) -> Vec<ReferralRow> {
        self.referrals.clone()
    }

    async fn document_by_key(
        &self,
        _document_key: &str,
        _practice_id: i32,
    ) -> StoreResult<Vec<DocumentRecord>> {
        self.documents
            .clone()
            .ok_or_else(|| StoreError::connection("document store offline"))
    }

    async fn priority_bucket(&self, _bucket: PriorityBucket) -> Vec<LabTestRow> {
        self.bucket_rows.clone()
    }
}

fn server(store: MockStore) -> TestServer {
    let app = create_app_with_client(
        store,
        // Unroutable endpoints: external searches degrade to empty results.
        ExternalApiClient::with_urls("http://127.0.0.1:9/icd", "http://127.0.0.1:9/rx"),
        ServerConfig::for_testing(),
    );
    TestServer::new(app).expect("failed to create test server")
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn row(patient: &str, practice: &str, when: NaiveDateTime) -> LabTestRow {
    LabTestRow {
        patient_id: Some(patient.to_string()),
        practice_id: Some(practice.to_string()),
        message_datetime: Some(when),
        ..Default::default()
    }
}

mod lab_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_serves_sample_fallback_shape() {
        // A store that fell back to the sample dataset serves exactly the
        // two documented records.
        let server = server(MockStore {
            all_rows: sample::lab_test_rows(),
            ..Default::default()
        });

        let response = server.get("/api/labtest").await;
        response.assert_status_ok();
        let body: Value = response.json();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["patientID"], "P001");
        assert_eq!(rows[0]["fullName"], "John Doe");
        assert_eq!(rows[1]["patientID"], "P002");
        assert_eq!(rows[1]["fullName"], "Jane Smith");
    }

    #[tokio::test]
    async fn test_by_patient_returns_only_their_rows() {
        let mut patient_rows = HashMap::new();
        patient_rows.insert("P001".to_string(), vec![row("P001", "PR1", at(2024, 1, 1))]);
        let server = server(MockStore {
            patient_rows,
            ..Default::default()
        });

        let response = server.get("/api/labtest/patient/P001").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body.as_array().unwrap().len(), 1);

        let response = server.get("/api/labtest/patient/P999").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_daterange_rejects_inverted_bounds() {
        let server = server(MockStore::default());
        let response = server
            .get("/api/labtest/daterange")
            .add_query_param("startDate", "2024-02-01")
            .add_query_param("endDate", "2024-01-01")
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Start date must be before or equal to end date"));
    }

    #[tokio::test]
    async fn test_daterange_rejects_malformed_dates() {
        let server = server(MockStore::default());
        let response = server
            .get("/api/labtest/daterange")
            .add_query_param("startDate", "last tuesday")
            .add_query_param("endDate", "2024-01-01")
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_daterange_bounds_are_inclusive() {
        let server = server(MockStore {
            all_rows: vec![
                row("P1", "PR", at(2024, 1, 1)),
                row("P2", "PR", at(2024, 1, 31)),
                row("P3", "PR", at(2024, 2, 1)),
            ],
            ..Default::default()
        });
        let response = server
            .get("/api/labtest/daterange")
            .add_query_param("startDate", "2024-01-01")
            .add_query_param("endDate", "2024-01-31")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_applies_conjunctive_predicates() {
        let server = server(MockStore {
            all_rows: vec![
                row("P001", "PR1", at(2024, 1, 10)),
                row("P001", "PR2", at(2024, 1, 10)),
                row("P002", "PR1", at(2024, 1, 10)),
            ],
            ..Default::default()
        });
        let response = server
            .get("/api/labtest/filter")
            .add_query_param("patientId", "P001")
            .add_query_param("practiceId", "PR2")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["practiceID"], "PR2");
    }

    #[tokio::test]
    async fn test_priority_buckets_serve_rows() {
        let server = server(MockStore {
            bucket_rows: vec![row("P001", "PR1", at(2024, 3, 3))],
            ..Default::default()
        });
        for path in [
            "/api/labtest/incomplete-high-priority",
            "/api/labtest/incomplete-low-priority",
            "/api/labtest/complete-high-priority",
            "/api/labtest/complete-low-priority",
        ] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body.as_array().unwrap().len(), 1, "bucket {path}");
        }
    }
}

mod patient {
    use super::*;

    #[tokio::test]
    async fn test_patient_info_found() {
        let mut infos = HashMap::new();
        infos.insert(
            42,
            PatientInfo {
                full_name: Some("Jo Bloggs".to_string()),
                nhi_number: Some("NHI42".to_string()),
                age: Some(61),
                ..Default::default()
            },
        );
        let server = server(MockStore {
            infos,
            ..Default::default()
        });

        let response = server.get("/api/labtest/patient-info/42").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["fullName"], "Jo Bloggs");
        assert_eq!(body["age"], 61);
    }

    #[tokio::test]
    async fn test_patient_info_missing_is_404() {
        let server = server(MockStore::default());
        let response = server.get("/api/labtest/patient-info/999999999").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("999999999"));
    }

    #[tokio::test]
    async fn test_patient_record_round_trip() {
        let bundle = PatientRecordBundle {
            header: Some(PatientRecordHeader {
                nhi_number: Some("NHI1".to_string()),
                patient_id: Some("42".to_string()),
                ..Default::default()
            }),
            allergies: vec![PatientAllergy::default()],
            ..Default::default()
        };
        let server = server(MockStore {
            record: Some(bundle),
            ..Default::default()
        });

        let response = server
            .get("/api/labtest/patient-labtest-updated/42")
            .add_query_param("labTestMshID", "7")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["header"]["nhiNumber"], "NHI1");
        assert_eq!(body["allergies"].as_array().unwrap().len(), 1);
        assert!(body["labTestDetails"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_patient_record_failure_is_404() {
        let server = server(MockStore {
            record: None,
            ..Default::default()
        });
        let response = server.get("/api/labtest/patient-labtest-updated/42").await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_legacy_inbox_detail_alias() {
        let server = server(MockStore {
            record: Some(PatientRecordBundle::default()),
            ..Default::default()
        });
        let response = server.get("/api/labtest/patientinboxdetail/42").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_allergy_and_diagnosis_slices() {
        let server = server(MockStore {
            allergies: vec![PatientAllergy {
                allergy_id: 5,
                ..Default::default()
            }],
            diagnoses: vec![PatientDiagnosis {
                diagnosis_id: 9,
                ..Default::default()
            }],
            ..Default::default()
        });

        let response = server.get("/api/labtest/patient-allergies/42").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0]["allergyID"], 5);

        let response = server.get("/api/labtest/patient-diagnoses/42").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0]["diagnosisID"], 9);
    }
}

mod observations {
    use super::*;

    #[tokio::test]
    async fn test_observation_search_returns_rows() {
        let server = server(MockStore {
            observations: vec![PatientLabObservation {
                patient_id: 7,
                result_name: Some("Hemoglobin".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });
        let response = server
            .get("/api/labtest/patient-observations/7")
            .add_query_param("observationText", "Hemo")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0]["resultName"], "Hemoglobin");
    }

    #[tokio::test]
    async fn test_history_panel_filter_applies_in_memory() {
        let server = server(MockStore {
            history: vec![
                ObservationHistoryEntry {
                    panel_type: Some("CBC".to_string()),
                    observation_date_time: Some(at(2024, 3, 1)),
                    ..Default::default()
                },
                ObservationHistoryEntry {
                    panel_type: Some("Lipids".to_string()),
                    observation_date_time: Some(at(2024, 3, 1)),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        let response = server
            .get("/api/labtest/patient-observation-history/7")
            .add_query_param("panelType", "cbc")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["panelType"], "CBC");
    }

    #[tokio::test]
    async fn test_history_rejects_malformed_dates() {
        let server = server(MockStore::default());
        let response = server
            .get("/api/labtest/patient-observation-history/7")
            .add_query_param("startDate", "never")
            .await;
        response.assert_status_bad_request();
    }
}

mod medications {
    use super::*;

    #[tokio::test]
    async fn test_default_paging() {
        let seen = Arc::new(Mutex::new(None));
        let server = server(MockStore {
            seen_medication_page: Arc::clone(&seen),
            ..Default::default()
        });

        let response = server.get("/api/labtest/patient-medications/7").await;
        response.assert_status_ok();

        let page = seen.lock().unwrap().unwrap();
        assert_eq!(page, MedicationPage::default());
        assert_eq!(page.page_size, 20);
    }

    #[tokio::test]
    async fn test_explicit_paging() {
        let seen = Arc::new(Mutex::new(None));
        let server = server(MockStore {
            seen_medication_page: Arc::clone(&seen),
            ..Default::default()
        });

        let response = server
            .get("/api/labtest/patient-medications/7")
            .add_query_param("practiceId", "3")
            .add_query_param("pageSize", "50")
            .await;
        response.assert_status_ok();

        let page = seen.lock().unwrap().unwrap();
        assert_eq!(page.practice_id, 3);
        assert_eq!(page.page_size, 50);
        assert_eq!(page.page_no, 1);
    }
}

mod documents {
    use super::*;

    #[tokio::test]
    async fn test_requires_positive_practice_id() {
        let server = server(MockStore {
            documents: Some(vec![]),
            ..Default::default()
        });

        let response = server.get("/api/labtest/document/DOC-1").await;
        response.assert_status_bad_request();

        let response = server
            .get("/api/labtest/document/DOC-1")
            .add_query_param("practiceID", "0")
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Valid Practice ID is required"));
    }

    #[tokio::test]
    async fn test_returns_base64_and_extracted_text() {
        let server = server(MockStore {
            documents: Some(vec![DocumentRecord {
                document_id: 11,
                document_type: Some("TXT".to_string()),
                document_bytes: Some(b"Potassium: 4.2".to_vec()),
                ..Default::default()
            }]),
            ..Default::default()
        });

        let response = server
            .get("/api/labtest/document/DOC-1")
            .add_query_param("practiceID", "127")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0]["documentID"], 11);
        assert_eq!(body[0]["documentText"], "Potassium: 4.2");
        assert!(body[0]["documentBase64"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_store_failure_exposes_error_details() {
        let server = server(MockStore {
            documents: None,
            ..Default::default()
        });

        let response = server
            .get("/api/labtest/document/DOC-1")
            .add_query_param("practiceID", "127")
            .await;
        response.assert_status_internal_server_error();
        let body: Value = response.json();
        assert!(body["error"].as_str().is_some());
        assert!(body["details"].as_str().unwrap().contains("offline"));
    }
}

mod external_api {
    use super::*;

    #[tokio::test]
    async fn test_blank_diagnosis_query_is_400() {
        let server = server(MockStore::default());
        let response = server.get("/api/externalapi/diagnosis/search").await;
        response.assert_status_bad_request();

        let response = server
            .get("/api/externalapi/diagnosis/search")
            .add_query_param("query", "  ")
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_blank_medication_search_is_400() {
        let server = server(MockStore::default());
        let response = server.get("/api/externalapi/medication/search").await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_unreachable_upstream_degrades_to_empty_result() {
        // The client points at an unroutable port; the search still
        // answers 200 with an empty, query-tagged result.
        let server = server(MockStore::default());
        let response = server
            .get("/api/externalapi/diagnosis/search")
            .add_query_param("query", "diabetes")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["query"], "diabetes");
        assert_eq!(body["totalCount"], 0);
        assert!(body["results"].as_array().unwrap().is_empty());
    }
}

mod operational {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let server = server(MockStore::default());
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "mock");
    }

    #[tokio::test]
    async fn test_referrals_roundtrip() {
        let server = server(MockStore {
            referrals: vec![ReferralRow {
                lab_test_msh_id: 3,
                org_name: Some("Radiology".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });
        let response = server.get("/api/labtest/referrals").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0]["labTestMshID"], 3);
        assert_eq!(body[0]["orgName"], "Radiology");
    }
}
