//! Procedure and query text.
//!
//! Every database operation the dispatch layer performs is defined here in
//! one place: set-returning functions for single-result-set procedures, the
//! refcursor-returning patient record function, and the two literal
//! parameterized queries the per-patient endpoints use.

/// Zero-argument get-all over the message/order/observation/note joins.
pub const ALL_LAB_TESTS: &str = "SELECT * FROM labs.get_lab_tests_with_joins()";

/// Flat per-patient rows from the dedicated procedure.
pub const PATIENT_LAB_TESTS: &str = "SELECT * FROM labs.get_patient_lab_tests($1)";

/// Single-row patient demographic lookup.
pub const PATIENT_INFO: &str = "SELECT * FROM labs.get_patient_name_for_lab($1)";

/// The aggregated patient record: returns the ordered refcursors for the
/// header, detail, allergy, and diagnosis result sets. The second parameter
/// is an optional message-id filter and is passed as NULL when absent — the
/// procedure contract requires both positional parameters.
pub const PATIENT_RECORD_CURSORS: &str =
    "SELECT c::text FROM labs.get_patient_record($1, $2) AS c";

/// Grouped observation search with optional text and practice filters.
pub const PATIENT_OBSERVATIONS: &str =
    "SELECT * FROM labs.get_patient_group_lab_data_priority($1, $2, $3)";

/// Longitudinal observation history for one patient.
pub const OBSERVATION_HISTORY: &str =
    "SELECT * FROM labs.get_patient_observation_history($1)";

/// Paged medication list.
pub const PATIENT_MEDICATIONS: &str =
    "SELECT * FROM labs.get_patient_medication_details($1, $2, $3, $4, $5)";

/// Referral inbox rows.
pub const REFERRALS: &str = "SELECT * FROM labs.get_referrals_with_joins()";

/// Document lookup by key and practice.
pub const DOCUMENT_BY_KEY: &str = "SELECT * FROM docs.get_document_by_key($1, $2)";

/// Fixed priority/status bucket queries.
pub const INCOMPLETE_HIGH_PRIORITY: &str =
    "SELECT * FROM labs.get_incomplete_high_priority_results()";
pub const INCOMPLETE_LOW_PRIORITY: &str =
    "SELECT * FROM labs.get_incomplete_low_priority_results()";
pub const COMPLETE_HIGH_PRIORITY: &str =
    "SELECT * FROM labs.get_complete_high_priority_results()";
pub const COMPLETE_LOW_PRIORITY: &str =
    "SELECT * FROM labs.get_complete_low_priority_results()";

/// Direct parameterized query behind `GET /api/labtest/patient/{id}`:
/// the full join filtered to one patient id.
pub const LAB_TESTS_BY_PATIENT: &str = r#"
SELECT
    msh.labtestmshid,
    msh.sendingapplication,
    msh.sendingfacility,
    msh.receivingfacility,
    msh.messagedatetime,
    msh.internalpatientid AS nhinumber,
    COALESCE(
        tp.fullname,
        concat_ws(' ', msh.patientfamilyname, msh.patientgivenname, msh.patientmiddlename)
    ) AS fullname,
    msh.dob,
    tg.gendername,
    msh.patientid,
    msh.practiceid,
    msh.insertedat AS mshinsertedat,
    ifi.markasread,
    ifi.updatedat AS ifiinboxupdate,
    ifi.resultdate AS inboxrecevieddate,
    obr.labtestobrid,
    obr.uscode AS snomedcode,
    obr.usdescription AS mesagesubject,
    obr.observationdatetime,
    obr.statuschangedatetime,
    obr.appointmentid,
    obx.labtestobxid,
    obx.observationidentifier AS snomedcode_2,
    obx.observationtext AS resultname,
    obx.observationcodingsystem,
    obx.observationvalue,
    obx.units,
    obx.referenceranges,
    obx.abnormalflagid,
    nte.labtestnteid,
    nte.source,
    nte.comments
FROM appointment.tbllabtest_msh msh
LEFT JOIN appointment.tbllabtest_obr obr ON msh.labtestmshid = obr.labtestmshid
LEFT JOIN appointment.tbllabtest_obx obx ON obr.labtestobrid = obx.labtestobrid
LEFT JOIN appointment.tbllabtest_nte nte ON obx.labtestobxid = nte.labtestobxid
LEFT JOIN prompt.tblinboxfolderitem ifi ON ifi.externalref = msh.messagecontrolid
LEFT JOIN lookup.tblgender tg ON tg.gendercode = msh.gender
LEFT JOIN profile.tblprofile tp ON tp.profileid = msh.patientid
WHERE msh.patientid = $1
"#;

/// Direct parameterized query for the demographics stamped onto the flat
/// per-patient procedure rows.
pub const PATIENT_DEMOGRAPHICS: &str = r#"
SELECT DISTINCT
    msh.internalpatientid AS nhinumber,
    COALESCE(
        tp.fullname,
        concat_ws(' ', msh.patientfamilyname, msh.patientgivenname, msh.patientmiddlename)
    ) AS fullname,
    msh.dob,
    tg.gendername,
    msh.patientid,
    msh.practiceid
FROM appointment.tbllabtest_msh msh
LEFT JOIN lookup.tblgender tg ON tg.gendercode = msh.gender
LEFT JOIN profile.tblprofile tp ON tp.profileid = msh.patientid
WHERE msh.patientid = $1
"#;
