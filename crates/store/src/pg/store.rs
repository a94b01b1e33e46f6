//! The PostgreSQL [`LabStore`] implementation.

use async_trait::async_trait;
use deadpool_postgres::Pool;
use kauri_model::{
    DocumentRecord, LabTestRow, ObservationHistoryEntry, PatientAllergy, PatientDiagnosis,
    PatientInfo, PatientLabObservation, PatientMedication, PatientRecordBundle, ReferralRow,
};
use tokio_postgres::types::ToSql;
use tracing::{debug, warn};

use crate::assemble::{assemble_patient_record, read_allergies, read_diagnoses};
use crate::error::{StoreError, StoreResult};
use crate::mapping::{map_row, map_rows, FromRow};
use crate::pg::config::PgConfig;
use crate::pg::row::PgSqlRow;
use crate::pg::stream::PgProcedureStream;
use crate::procedures;
use crate::sample;
use crate::store::{LabStore, MedicationPage, PriorityBucket};

/// Pooled-connection store over PostgreSQL.
///
/// Each operation acquires one connection from the pool and releases it on
/// every exit path; nothing is shared between requests beyond the pool and
/// the immutable configuration.
pub struct PgLabStore {
    pool: Pool,
    config: PgConfig,
}

impl PgLabStore {
    /// Builds the pool and verifies connectivity with a probe query.
    pub async fn connect(config: PgConfig) -> StoreResult<Self> {
        let pool = config.create_pool()?;
        let client = pool.get().await.map_err(StoreError::connection)?;
        client.simple_query("SELECT 1").await?;
        drop(client);

        debug!(
            host = %config.host,
            dbname = %config.dbname,
            "connected to PostgreSQL backend"
        );
        Ok(Self { pool, config })
    }

    async fn client(&self) -> StoreResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(StoreError::connection)
    }

    /// Runs a single-result-set query and maps its rows.
    async fn fetch<T: FromRow>(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> StoreResult<Vec<T>> {
        let client = self.client().await?;
        let rows = client.query(sql, params).await?;
        let rows: Vec<PgSqlRow> = rows.into_iter().map(PgSqlRow::new).collect();
        Ok(map_rows(&rows))
    }

    /// Like [`Self::fetch`], degrading failures to an empty result.
    async fn fetch_or_empty<T: FromRow>(
        &self,
        operation: &str,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Vec<T> {
        match self.fetch(sql, params).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(operation, error = %err, "query failed; returning empty result");
                Vec::new()
            }
        }
    }

    async fn try_patient_record(
        &self,
        patient_id: i64,
        lab_test_msh_id: Option<i64>,
    ) -> StoreResult<PatientRecordBundle> {
        let mut client = self.client().await?;
        let tx = client.transaction().await?;
        tx.execute(
            &format!(
                "SET LOCAL statement_timeout = {}",
                self.config.record_timeout_ms
            ),
            &[],
        )
        .await?;

        let mut stream = PgProcedureStream::open(
            &tx,
            procedures::PATIENT_RECORD_CURSORS,
            &[&patient_id, &lab_test_msh_id],
        )
        .await?;
        let bundle = assemble_patient_record(&mut stream).await?;
        drop(stream);
        tx.commit().await?;
        Ok(bundle)
    }

    async fn try_patient_lab_tests(&self, patient_id: i64) -> StoreResult<Vec<LabTestRow>> {
        let client = self.client().await?;

        // The flat procedure rows carry no demographics; they are looked up
        // separately and stamped onto every row.
        let demo_rows = client
            .query(procedures::PATIENT_DEMOGRAPHICS, &[&patient_id.to_string()])
            .await?;
        let demographics = demo_rows
            .into_iter()
            .next()
            .map(PgSqlRow::new)
            .and_then(|row| match map_row::<LabTestRow>(&row) {
                Ok(demo) => Some(demo),
                Err(err) => {
                    warn!(patient_id, error = %err, "patient demographics failed to map");
                    None
                }
            });

        let rows = client
            .query(procedures::PATIENT_LAB_TESTS, &[&patient_id])
            .await?;
        let rows: Vec<PgSqlRow> = rows.into_iter().map(PgSqlRow::new).collect();
        let mut mapped: Vec<LabTestRow> = map_rows(&rows);

        if let Some(demo) = demographics {
            for row in &mut mapped {
                row.nhi_number = demo.nhi_number.clone();
                row.full_name = demo.full_name.clone();
                row.dob = demo.dob;
                row.gender_name = demo.gender_name.clone();
                row.patient_id = demo.patient_id.clone();
                row.practice_id = demo.practice_id.clone();
                row.ethnicity = demo.ethnicity.clone();
            }
        }
        Ok(mapped)
    }
}

#[async_trait]
impl LabStore for PgLabStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn all_lab_tests(&self) -> Vec<LabTestRow> {
        sample::or_sample(self.fetch(procedures::ALL_LAB_TESTS, &[]).await)
    }

    async fn lab_tests_by_patient(&self, patient_id: &str) -> Vec<LabTestRow> {
        self.fetch_or_empty(
            "lab_tests_by_patient",
            procedures::LAB_TESTS_BY_PATIENT,
            &[&patient_id],
        )
        .await
    }

    async fn patient_lab_tests(&self, patient_id: i64) -> Vec<LabTestRow> {
        match self.try_patient_lab_tests(patient_id).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(patient_id, error = %err, "patient lab test query failed");
                Vec::new()
            }
        }
    }

    async fn patient_info(&self, patient_id: i64) -> Option<PatientInfo> {
        match self
            .fetch::<PatientInfo>(procedures::PATIENT_INFO, &[&patient_id])
            .await
        {
            Ok(rows) => rows.into_iter().next(),
            Err(err) => {
                warn!(patient_id, error = %err, "patient info lookup failed");
                None
            }
        }
    }

    async fn patient_record(
        &self,
        patient_id: i64,
        lab_test_msh_id: Option<i64>,
    ) -> Option<PatientRecordBundle> {
        match self.try_patient_record(patient_id, lab_test_msh_id).await {
            Ok(bundle) => Some(bundle),
            Err(err) => {
                warn!(patient_id, error = %err, "patient record call failed");
                None
            }
        }
    }

    async fn patient_allergies(&self, patient_id: i64) -> Vec<PatientAllergy> {
        let run = async {
            let mut client = self.client().await?;
            let tx = client.transaction().await?;
            let mut stream = PgProcedureStream::open(
                &tx,
                procedures::PATIENT_RECORD_CURSORS,
                &[&patient_id, &None::<i64>],
            )
            .await?;
            let allergies = read_allergies(&mut stream).await?;
            drop(stream);
            tx.commit().await?;
            Ok::<_, StoreError>(allergies)
        };
        match run.await {
            Ok(allergies) => allergies,
            Err(err) => {
                warn!(patient_id, error = %err, "allergy slice query failed");
                Vec::new()
            }
        }
    }

    async fn patient_diagnoses(&self, patient_id: i64) -> Vec<PatientDiagnosis> {
        let run = async {
            let mut client = self.client().await?;
            let tx = client.transaction().await?;
            let mut stream = PgProcedureStream::open(
                &tx,
                procedures::PATIENT_RECORD_CURSORS,
                &[&patient_id, &None::<i64>],
            )
            .await?;
            let diagnoses = read_diagnoses(&mut stream).await?;
            drop(stream);
            tx.commit().await?;
            Ok::<_, StoreError>(diagnoses)
        };
        match run.await {
            Ok(diagnoses) => diagnoses,
            Err(err) => {
                warn!(patient_id, error = %err, "diagnosis slice query failed");
                Vec::new()
            }
        }
    }

    async fn patient_observations(
        &self,
        patient_id: i32,
        observation_text: Option<String>,
        practice_id: Option<i32>,
    ) -> Vec<PatientLabObservation> {
        self.fetch_or_empty(
            "patient_observations",
            procedures::PATIENT_OBSERVATIONS,
            &[&patient_id, &observation_text, &practice_id],
        )
        .await
    }

    async fn observation_history(&self, patient_id: i32) -> Vec<ObservationHistoryEntry> {
        self.fetch_or_empty(
            "observation_history",
            procedures::OBSERVATION_HISTORY,
            &[&patient_id],
        )
        .await
    }

    async fn patient_medications(
        &self,
        patient_id: i32,
        page: MedicationPage,
    ) -> Vec<PatientMedication> {
        self.fetch_or_empty(
            "patient_medications",
            procedures::PATIENT_MEDICATIONS,
            &[
                &patient_id,
                &page.practice_id,
                &page.practice_location_id,
                &page.page_no,
                &page.page_size,
            ],
        )
        .await
    }

    async fn referrals(&self) -> Vec<ReferralRow> {
        self.fetch_or_empty("referrals", procedures::REFERRALS, &[])
            .await
    }

    async fn document_by_key(
        &self,
        document_key: &str,
        practice_id: i32,
    ) -> StoreResult<Vec<DocumentRecord>> {
        self.fetch(procedures::DOCUMENT_BY_KEY, &[&document_key, &practice_id])
            .await
    }

    async fn priority_bucket(&self, bucket: PriorityBucket) -> Vec<LabTestRow> {
        let sql = match bucket {
            PriorityBucket::IncompleteHigh => procedures::INCOMPLETE_HIGH_PRIORITY,
            PriorityBucket::IncompleteLow => procedures::INCOMPLETE_LOW_PRIORITY,
            PriorityBucket::CompleteHigh => procedures::COMPLETE_HIGH_PRIORITY,
            PriorityBucket::CompleteLow => procedures::COMPLETE_LOW_PRIORITY,
        };
        self.fetch_or_empty("priority_bucket", sql, &[]).await
    }
}
