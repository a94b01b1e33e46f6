//! Assembly of the aggregated patient record.
//!
//! The patient-record procedure physically returns one ordered stream of up
//! to four result sets: header, lab-test details, allergies, diagnoses.
//! [`assemble_patient_record`] consumes them positionally into a
//! [`PatientRecordBundle`] with two tolerance rules:
//!
//! - a stream that ends early (older procedure version) leaves the missing
//!   slices empty instead of failing the call;
//! - a single row that fails to map is dropped and processing continues —
//!   at most one record is lost, never the whole response.
//!
//! The isolated slice readers ([`read_allergies`], [`read_diagnoses`]) run
//! the identical procedure call and reach their target set by reading and
//! discarding the earlier sets, so fetching allergies alone costs the same
//! as fetching the whole bundle. Known inefficiency, kept to preserve the
//! backend call profile.

use kauri_model::{
    PatientAllergy, PatientDiagnosis, PatientLabTestDetail, PatientRecordBundle,
    PatientRecordHeader,
};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::mapping::{map_row, map_rows, FromRow};
use crate::stream::{BoxRow, ProcedureStream};

/// Walks the full four-set stream into a bundle.
pub async fn assemble_patient_record<S: ProcedureStream + ?Sized>(
    stream: &mut S,
) -> StoreResult<PatientRecordBundle> {
    let mut bundle = PatientRecordBundle::default();

    // Set 1: zero-or-one header row. A header that fails to map is treated
    // like a missing header; the remaining sets are still read.
    if let Some(rows) = stream.next_result_set().await? {
        bundle.header = map_header(&rows);
    } else {
        debug!("patient record stream ended before the header set");
        return Ok(bundle);
    }

    match stream.next_result_set().await? {
        Some(rows) => bundle.lab_test_details = map_set::<PatientLabTestDetail>(&rows, "detail"),
        None => {
            debug!("patient record stream ended before the detail set");
            return Ok(bundle);
        }
    }

    match stream.next_result_set().await? {
        Some(rows) => bundle.allergies = map_set::<PatientAllergy>(&rows, "allergy"),
        None => {
            debug!("patient record stream ended before the allergy set");
            return Ok(bundle);
        }
    }

    match stream.next_result_set().await? {
        Some(rows) => bundle.diagnoses = map_set::<PatientDiagnosis>(&rows, "diagnosis"),
        None => debug!("patient record stream ended before the diagnosis set"),
    }

    Ok(bundle)
}

/// Reads only the allergy slice (result set 3), discarding sets 1 and 2.
pub async fn read_allergies<S: ProcedureStream + ?Sized>(
    stream: &mut S,
) -> StoreResult<Vec<PatientAllergy>> {
    for _ in 0..2 {
        if !stream.discard_result_set().await? {
            return Ok(Vec::new());
        }
    }
    match stream.next_result_set().await? {
        Some(rows) => Ok(map_set::<PatientAllergy>(&rows, "allergy")),
        None => Ok(Vec::new()),
    }
}

/// Reads only the diagnosis slice (result set 4), discarding sets 1-3.
pub async fn read_diagnoses<S: ProcedureStream + ?Sized>(
    stream: &mut S,
) -> StoreResult<Vec<PatientDiagnosis>> {
    for _ in 0..3 {
        if !stream.discard_result_set().await? {
            return Ok(Vec::new());
        }
    }
    match stream.next_result_set().await? {
        Some(rows) => Ok(map_set::<PatientDiagnosis>(&rows, "diagnosis")),
        None => Ok(Vec::new()),
    }
}

fn map_header(rows: &[BoxRow]) -> Option<PatientRecordHeader> {
    let row = rows.first()?;
    match map_row::<PatientRecordHeader>(row) {
        Ok(header) => Some(header),
        Err(err) => {
            warn!(error = %err, "patient record header failed to map; continuing without it");
            None
        }
    }
}

fn map_set<T: FromRow>(rows: &[BoxRow], what: &str) -> Vec<T> {
    let mapped = map_rows::<T, BoxRow>(rows);
    if mapped.len() < rows.len() {
        warn!(
            set = what,
            dropped = rows.len() - mapped.len(),
            kept = mapped.len(),
            "dropped unmappable rows from result set"
        );
    }
    mapped
}
