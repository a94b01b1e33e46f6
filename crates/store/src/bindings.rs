//! Field-binding tables for every projection type.
//!
//! Column names are matched case-insensitively and come from the backing
//! procedures. Where procedure versions disagree on a column's spelling
//! (`MesageSubject` vs `MessageSubject`, `InboxRecevied` vs
//! `InboxReceived`) both spellings bind to the same field.

use kauri_model::{
    DocumentRecord, LabTestRow, ObservationHistoryEntry, PatientAllergy, PatientDiagnosis,
    PatientInfo, PatientLabObservation, PatientLabTestDetail, PatientMedication,
    PatientRecordHeader, ReferralRow,
};

use crate::mapping::{FieldBinding, FromRow, Setter};

impl FromRow for LabTestRow {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<LabTestRow>] = &[
            FieldBinding {
                column: "LabTestMshID",
                setter: Setter::I32(|r, v| r.lab_test_msh_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SendingApplication",
                setter: Setter::Text(|r, v| r.sending_application = v),
            },
            FieldBinding {
                column: "SendingFacility",
                setter: Setter::Text(|r, v| r.sending_facility = v),
            },
            FieldBinding {
                column: "ReceivingFacility",
                setter: Setter::Text(|r, v| r.receiving_facility = v),
            },
            FieldBinding {
                column: "MessageDatetime",
                setter: Setter::DateTime(|r, v| r.message_datetime = v),
            },
            FieldBinding {
                column: "NHINumber",
                setter: Setter::Text(|r, v| r.nhi_number = v),
            },
            FieldBinding {
                column: "FullName",
                setter: Setter::Text(|r, v| r.full_name = v),
            },
            FieldBinding {
                column: "DOB",
                setter: Setter::DateTime(|r, v| r.dob = v),
            },
            FieldBinding {
                column: "GenderName",
                setter: Setter::Text(|r, v| r.gender_name = v),
            },
            FieldBinding {
                column: "PatientID",
                setter: Setter::Text(|r, v| r.patient_id = v),
            },
            FieldBinding {
                column: "PracticeID",
                setter: Setter::Text(|r, v| r.practice_id = v),
            },
            FieldBinding {
                column: "MshInsertedAt",
                setter: Setter::DateTime(|r, v| r.msh_inserted_at = v),
            },
            FieldBinding {
                column: "MarkasRead",
                setter: Setter::Bool(|r, v| r.markas_read = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "ifiinboxupdate",
                setter: Setter::DateTime(|r, v| r.inbox_updated_at = v),
            },
            // Historical misspelling in the joined view; newer versions fixed it.
            FieldBinding {
                column: "inboxrecevieddate",
                setter: Setter::DateTime(|r, v| r.inbox_received_date = v),
            },
            FieldBinding {
                column: "inboxreceiveddate",
                setter: Setter::DateTime(|r, v| r.inbox_received_date = v),
            },
            FieldBinding {
                column: "LabTestOBRID",
                setter: Setter::I32(|r, v| r.lab_test_obr_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode",
                setter: Setter::Text(|r, v| r.snomed_code = v),
            },
            FieldBinding {
                column: "PanelType",
                setter: Setter::Text(|r, v| r.panel_type = v),
            },
            // Both spellings observed across procedure revisions.
            FieldBinding {
                column: "MesageSubject",
                setter: Setter::Text(|r, v| r.message_subject = v),
            },
            FieldBinding {
                column: "MessageSubject",
                setter: Setter::Text(|r, v| r.message_subject = v),
            },
            FieldBinding {
                column: "ObservationDateTime",
                setter: Setter::DateTime(|r, v| r.observation_date_time = v),
            },
            FieldBinding {
                column: "StatusChangeDateTime",
                setter: Setter::DateTime(|r, v| r.status_change_date_time = v),
            },
            FieldBinding {
                column: "AppointmentID",
                setter: Setter::Text(|r, v| r.appointment_id = v),
            },
            FieldBinding {
                column: "LabTestOBXID",
                setter: Setter::I64(|r, v| r.lab_test_obx_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode_2",
                setter: Setter::Text(|r, v| r.snomed_code_2 = v),
            },
            FieldBinding {
                column: "ResultName",
                setter: Setter::Text(|r, v| r.result_name = v),
            },
            FieldBinding {
                column: "ObservationCodingSystem",
                setter: Setter::Text(|r, v| r.observation_coding_system = v),
            },
            FieldBinding {
                column: "ObservationValue",
                setter: Setter::Text(|r, v| r.observation_value = v),
            },
            FieldBinding {
                column: "Units",
                setter: Setter::Text(|r, v| r.units = v),
            },
            FieldBinding {
                column: "ReferenceRanges",
                setter: Setter::Text(|r, v| r.reference_ranges = v),
            },
            FieldBinding {
                column: "AbnormalFlagID",
                setter: Setter::I32(|r, v| r.abnormal_flag_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AbnormalFlagDesc",
                setter: Setter::Text(|r, v| r.abnormal_flag_description = v),
            },
            FieldBinding {
                column: "AbnormalFlagDescription",
                setter: Setter::Text(|r, v| r.abnormal_flag_description = v),
            },
            FieldBinding {
                column: "LabTestNTEID",
                setter: Setter::I32(|r, v| r.lab_test_nte_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "Source",
                setter: Setter::Text(|r, v| r.source = v),
            },
            FieldBinding {
                column: "Comments",
                setter: Setter::Text(|r, v| r.comments = v),
            },
            FieldBinding {
                column: "Ethnicity",
                setter: Setter::Text(|r, v| r.ethnicity = v),
            },
            FieldBinding {
                column: "PriorityID",
                setter: Setter::I32(|r, v| r.priority_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "ProviderFullName",
                setter: Setter::Text(|r, v| r.provider_full_name = v),
            },
            FieldBinding {
                column: "OrgName",
                setter: Setter::Text(|r, v| r.org_name = v),
            },
            FieldBinding {
                column: "FolderName",
                setter: Setter::Text(|r, v| r.folder_name = v),
            },
            FieldBinding {
                column: "PrevDate",
                setter: Setter::DateTime(|r, v| r.prev_date = v),
            },
            FieldBinding {
                column: "OBResultStatus",
                setter: Setter::Text(|r, v| r.ob_result_status = v),
            },
            FieldBinding {
                column: "ResultCategory",
                setter: Setter::Text(|r, v| r.result_category = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientRecordHeader {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientRecordHeader>] = &[
            FieldBinding {
                column: "NHINumber",
                setter: Setter::Text(|r, v| r.nhi_number = v),
            },
            FieldBinding {
                column: "FullName",
                setter: Setter::Text(|r, v| r.full_name = v),
            },
            FieldBinding {
                column: "DOB",
                setter: Setter::DateTime(|r, v| r.dob = v),
            },
            FieldBinding {
                column: "GenderName",
                setter: Setter::Text(|r, v| r.gender_name = v),
            },
            FieldBinding {
                column: "PatientID",
                setter: Setter::Text(|r, v| r.patient_id = v),
            },
            FieldBinding {
                column: "PracticeID",
                setter: Setter::Text(|r, v| r.practice_id = v),
            },
            FieldBinding {
                column: "MshInsertedAt",
                setter: Setter::DateTime(|r, v| r.msh_inserted_at = v),
            },
            FieldBinding {
                column: "Ethnicity",
                setter: Setter::Text(|r, v| r.ethnicity = v),
            },
            FieldBinding {
                column: "Age",
                setter: Setter::I32(|r, v| r.age = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientLabTestDetail {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientLabTestDetail>] = &[
            FieldBinding {
                column: "LabTestOBRID",
                setter: Setter::I32(|r, v| r.lab_test_obr_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode",
                setter: Setter::Text(|r, v| r.snomed_code = v),
            },
            FieldBinding {
                column: "MessageSubject",
                setter: Setter::Text(|r, v| r.message_subject = v),
            },
            FieldBinding {
                column: "ObservationDateTime",
                setter: Setter::DateTime(|r, v| r.observation_date_time = v),
            },
            FieldBinding {
                column: "StatusChangeDateTime",
                setter: Setter::DateTime(|r, v| r.status_change_date_time = v),
            },
            FieldBinding {
                column: "AppointmentID",
                setter: Setter::Text(|r, v| r.appointment_id = v),
            },
            FieldBinding {
                column: "LabTestOBXID",
                setter: Setter::I64(|r, v| r.lab_test_obx_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode_2",
                setter: Setter::Text(|r, v| r.snomed_code_2 = v),
            },
            FieldBinding {
                column: "ResultName",
                setter: Setter::Text(|r, v| r.result_name = v),
            },
            FieldBinding {
                column: "ObservationCodingSystem",
                setter: Setter::Text(|r, v| r.observation_coding_system = v),
            },
            FieldBinding {
                column: "ObservationValue",
                setter: Setter::Text(|r, v| r.observation_value = v),
            },
            FieldBinding {
                column: "Units",
                setter: Setter::Text(|r, v| r.units = v),
            },
            FieldBinding {
                column: "ReferenceRanges",
                setter: Setter::Text(|r, v| r.reference_ranges = v),
            },
            FieldBinding {
                column: "AbnormalFlagID",
                setter: Setter::I32(|r, v| r.abnormal_flag_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AbnormalFlagDesc",
                setter: Setter::Text(|r, v| r.abnormal_flag_desc = v),
            },
            FieldBinding {
                column: "LabTestNTEID",
                setter: Setter::I32(|r, v| r.lab_test_nte_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "Source",
                setter: Setter::Text(|r, v| r.source = v),
            },
            FieldBinding {
                column: "Comments",
                setter: Setter::Text(|r, v| r.comments = v),
            },
            FieldBinding {
                column: "PriorityID",
                setter: Setter::I32(|r, v| r.priority_id = v.unwrap_or_default()),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientAllergy {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientAllergy>] = &[
            FieldBinding {
                column: "AllergyID",
                setter: Setter::I32(|r, v| r.allergy_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AllergyUUID",
                setter: Setter::Text(|r, v| r.allergy_uuid = v),
            },
            FieldBinding {
                column: "IsReviewed",
                setter: Setter::Bool(|r, v| r.is_reviewed = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "MedTechID",
                setter: Setter::I32(|r, v| r.med_tech_id = v),
            },
            FieldBinding {
                column: "OnsetDate",
                setter: Setter::DateTime(|r, v| r.onset_date = v),
            },
            FieldBinding {
                column: "AllergyTypeID",
                setter: Setter::I32(|r, v| r.allergy_type_id = v),
            },
            FieldBinding {
                column: "MedicineTypeID",
                setter: Setter::I32(|r, v| r.medicine_type_id = v),
            },
            FieldBinding {
                column: "MedicineShortName",
                setter: Setter::Text(|r, v| r.medicine_short_name = v),
            },
            FieldBinding {
                column: "MedicineClassification",
                setter: Setter::Text(|r, v| r.medicine_classification = v),
            },
            FieldBinding {
                column: "FavouriteSubstance",
                setter: Setter::Text(|r, v| r.favourite_substance = v),
            },
            FieldBinding {
                column: "DiseaseName",
                setter: Setter::Text(|r, v| r.disease_name = v),
            },
            FieldBinding {
                column: "SubstanceTypeId",
                setter: Setter::I32(|r, v| r.substance_type_id = v),
            },
            FieldBinding {
                column: "Other",
                setter: Setter::Text(|r, v| r.other = v),
            },
            FieldBinding {
                column: "Reaction",
                setter: Setter::Text(|r, v| r.reaction = v),
            },
            FieldBinding {
                column: "IsActive",
                setter: Setter::Bool(|r, v| r.is_active = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "FullName",
                setter: Setter::Text(|r, v| r.full_name = v),
            },
            FieldBinding {
                column: "Comment",
                setter: Setter::Text(|r, v| r.comment = v),
            },
            FieldBinding {
                column: "IsHighlight",
                setter: Setter::Bool(|r, v| r.is_highlight = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "InsertedAt",
                setter: Setter::DateTime(|r, v| r.inserted_at = v),
            },
            FieldBinding {
                column: "AllergyType",
                setter: Setter::Text(|r, v| r.allergy_type = v),
            },
            FieldBinding {
                column: "Name",
                setter: Setter::Text(|r, v| r.name = v),
            },
            FieldBinding {
                column: "IsNKA",
                setter: Setter::Bool(|r, v| r.is_nka = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SequenceNo",
                setter: Setter::I32(|r, v| r.sequence_no = v),
            },
            FieldBinding {
                column: "Severity",
                setter: Setter::Text(|r, v| r.severity = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientDiagnosis {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientDiagnosis>] = &[
            FieldBinding {
                column: "DiagnosisID",
                setter: Setter::I32(|r, v| r.diagnosis_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AppointmentID",
                setter: Setter::I32(|r, v| r.appointment_id = v),
            },
            FieldBinding {
                column: "DiseaseName",
                setter: Setter::Text(|r, v| r.disease_name = v),
            },
            FieldBinding {
                column: "DiagnosisDate",
                setter: Setter::DateTime(|r, v| r.diagnosis_date = v),
            },
            FieldBinding {
                column: "DiagnosisBy",
                setter: Setter::Text(|r, v| r.diagnosis_by = v),
            },
            FieldBinding {
                column: "Summary",
                setter: Setter::Text(|r, v| r.summary = v),
            },
            FieldBinding {
                column: "IsLongTerm",
                setter: Setter::Bool(|r, v| r.is_long_term = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AddtoProblem",
                setter: Setter::Bool(|r, v| r.addto_problem = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "IsHighlighted",
                setter: Setter::Bool(|r, v| r.is_highlighted = v.unwrap_or_default()),
            },
            // tinyint in the source schema; a byte is wide enough.
            FieldBinding {
                column: "SequenceNo",
                setter: Setter::U8(|r, v| r.sequence_no = v),
            },
            FieldBinding {
                column: "IsActive",
                setter: Setter::Bool(|r, v| r.is_active = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "IsConfidential",
                setter: Setter::Bool(|r, v| r.is_confidential = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "DiagnosisType",
                setter: Setter::Text(|r, v| r.diagnosis_type = v),
            },
            FieldBinding {
                column: "IsMapped",
                setter: Setter::Bool(|r, v| r.is_mapped = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "PracticeID",
                setter: Setter::I32(|r, v| r.practice_id = v),
            },
            FieldBinding {
                column: "OnSetDate",
                setter: Setter::DateTime(|r, v| r.on_set_date = v),
            },
            FieldBinding {
                column: "MappedBy",
                setter: Setter::Text(|r, v| r.mapped_by = v),
            },
            FieldBinding {
                column: "MappedDate",
                setter: Setter::DateTime(|r, v| r.mapped_date = v),
            },
            FieldBinding {
                column: "IsStopped",
                setter: Setter::Bool(|r, v| r.is_stopped = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedDiseaseName",
                setter: Setter::Text(|r, v| r.snomed_disease_name = v),
            },
            FieldBinding {
                column: "PatientID",
                setter: Setter::I32(|r, v| r.patient_id = v),
            },
            FieldBinding {
                column: "PracticeLocationID",
                setter: Setter::I32(|r, v| r.practice_location_id = v),
            },
            FieldBinding {
                column: "IsPrimaryDiagnosis",
                setter: Setter::Bool(|r, v| r.is_primary_diagnosis = v.unwrap_or_default()),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientInfo {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientInfo>] = &[
            FieldBinding {
                column: "FullName",
                setter: Setter::Text(|r, v| r.full_name = v),
            },
            FieldBinding {
                column: "DOB",
                setter: Setter::DateTime(|r, v| r.dob = v),
            },
            FieldBinding {
                column: "GenderName",
                setter: Setter::Text(|r, v| r.gender_name = v),
            },
            // The procedure spells this "ProfileiD"; lookup is
            // case-insensitive so one binding covers it.
            FieldBinding {
                column: "ProfileID",
                setter: Setter::Text(|r, v| r.profile_id = v),
            },
            FieldBinding {
                column: "PracticeID",
                setter: Setter::Text(|r, v| r.practice_id = v),
            },
            FieldBinding {
                column: "Ethnicity",
                setter: Setter::Text(|r, v| r.ethnicity = v),
            },
            FieldBinding {
                column: "PatientName",
                setter: Setter::Text(|r, v| r.patient_name = v),
            },
            FieldBinding {
                column: "NhiNumber",
                setter: Setter::Text(|r, v| r.nhi_number = v),
            },
            FieldBinding {
                column: "Age",
                setter: Setter::I32(|r, v| r.age = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientLabObservation {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientLabObservation>] = &[
            FieldBinding {
                column: "PatientID",
                setter: Setter::I32(|r, v| r.patient_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "MessageSubject",
                setter: Setter::Text(|r, v| r.message_subject = v),
            },
            FieldBinding {
                column: "ResultName",
                setter: Setter::Text(|r, v| r.result_name = v),
            },
            FieldBinding {
                column: "ObservationCodingSystem",
                setter: Setter::Text(|r, v| r.observation_coding_system = v),
            },
            FieldBinding {
                column: "ObservationDateTime",
                setter: Setter::DateTime(|r, v| r.observation_date_time = v),
            },
            FieldBinding {
                column: "ObservationValue",
                setter: Setter::Text(|r, v| r.observation_value = v),
            },
            FieldBinding {
                column: "Units",
                setter: Setter::Text(|r, v| r.units = v),
            },
            FieldBinding {
                column: "ReferenceRanges",
                setter: Setter::Text(|r, v| r.reference_ranges = v),
            },
            FieldBinding {
                column: "AbnormalFlagID",
                setter: Setter::I32(|r, v| r.abnormal_flag_id = v),
            },
            FieldBinding {
                column: "AbnormalFlagDesc",
                setter: Setter::Text(|r, v| r.abnormal_flag_desc = v),
            },
            FieldBinding {
                column: "LabTestNTEID",
                setter: Setter::I64(|r, v| r.lab_test_nte_id = v),
            },
            FieldBinding {
                column: "Source",
                setter: Setter::Text(|r, v| r.source = v),
            },
            FieldBinding {
                column: "Comments",
                setter: Setter::Text(|r, v| r.comments = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for ObservationHistoryEntry {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<ObservationHistoryEntry>] = &[
            FieldBinding {
                column: "LabTestOBRID",
                setter: Setter::I32(|r, v| r.lab_test_obr_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode",
                setter: Setter::Text(|r, v| r.snomed_code = v),
            },
            FieldBinding {
                column: "MessageSubject",
                setter: Setter::Text(|r, v| r.message_subject = v),
            },
            FieldBinding {
                column: "PanelType",
                setter: Setter::Text(|r, v| r.panel_type = v),
            },
            FieldBinding {
                column: "ObservationDateTime",
                setter: Setter::DateTime(|r, v| r.observation_date_time = v),
            },
            FieldBinding {
                column: "StatusChangeDateTime",
                setter: Setter::DateTime(|r, v| r.status_change_date_time = v),
            },
            FieldBinding {
                column: "AppointmentID",
                setter: Setter::I32(|r, v| r.appointment_id = v),
            },
            FieldBinding {
                column: "LabTestOBXID",
                setter: Setter::I32(|r, v| r.lab_test_obx_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SnomedCode_2",
                setter: Setter::Text(|r, v| r.snomed_code_2 = v),
            },
            FieldBinding {
                column: "ResultName",
                setter: Setter::Text(|r, v| r.result_name = v),
            },
            FieldBinding {
                column: "ObservationCodingSystem",
                setter: Setter::Text(|r, v| r.observation_coding_system = v),
            },
            FieldBinding {
                column: "ObservationValue",
                setter: Setter::Text(|r, v| r.observation_value = v),
            },
            FieldBinding {
                column: "Units",
                setter: Setter::Text(|r, v| r.units = v),
            },
            FieldBinding {
                column: "ReferenceRanges",
                setter: Setter::Text(|r, v| r.reference_ranges = v),
            },
            FieldBinding {
                column: "AbnormalFlagID",
                setter: Setter::I32(|r, v| r.abnormal_flag_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "AbnormalFlagDesc",
                setter: Setter::Text(|r, v| r.abnormal_flag_desc = v),
            },
            FieldBinding {
                column: "LabTestNTEID",
                setter: Setter::I32(|r, v| r.lab_test_nte_id = v),
            },
            FieldBinding {
                column: "Source",
                setter: Setter::Text(|r, v| r.source = v),
            },
            FieldBinding {
                column: "Comments",
                setter: Setter::Text(|r, v| r.comments = v),
            },
            FieldBinding {
                column: "PriorityID",
                setter: Setter::I32(|r, v| r.priority_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "ProviderFullName",
                setter: Setter::Text(|r, v| r.provider_full_name = v),
            },
            FieldBinding {
                column: "PatientFullAddress",
                setter: Setter::Text(|r, v| r.patient_full_address = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for PatientMedication {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<PatientMedication>] = &[
            FieldBinding {
                column: "PatientID",
                setter: Setter::I32(|r, v| r.patient_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "MedicationID",
                setter: Setter::I32(|r, v| r.medication_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "LastRXDate",
                setter: Setter::DateTime(|r, v| r.last_rx_date = v),
            },
            FieldBinding {
                column: "StartDate",
                setter: Setter::DateTime(|r, v| r.start_date = v),
            },
            FieldBinding {
                column: "ProviderName",
                setter: Setter::Text(|r, v| r.provider_name = v),
            },
            FieldBinding {
                column: "MedicineName",
                setter: Setter::Text(|r, v| r.medicine_name = v),
            },
            FieldBinding {
                column: "Take",
                setter: Setter::Text(|r, v| r.take = v),
            },
            FieldBinding {
                column: "FrequencyID",
                setter: Setter::I32(|r, v| r.frequency_id = v),
            },
            FieldBinding {
                column: "RouteID",
                setter: Setter::I32(|r, v| r.route_id = v),
            },
            FieldBinding {
                column: "Quantity",
                setter: Setter::I32(|r, v| r.quantity = v),
            },
            FieldBinding {
                column: "Duration",
                setter: Setter::I32(|r, v| r.duration = v),
            },
            FieldBinding {
                column: "DurationType",
                setter: Setter::Text(|r, v| r.duration_type = v),
            },
            FieldBinding {
                column: "Directions",
                setter: Setter::Text(|r, v| r.directions = v),
            },
            FieldBinding {
                column: "MedicationCategory",
                setter: Setter::Text(|r, v| r.medication_category = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for ReferralRow {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<ReferralRow>] = &[
            FieldBinding {
                column: "LabTestMshID",
                setter: Setter::I32(|r, v| r.lab_test_msh_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "SendingApplication",
                setter: Setter::Text(|r, v| r.sending_application = v),
            },
            FieldBinding {
                column: "SendingFacility",
                setter: Setter::Text(|r, v| r.sending_facility = v),
            },
            FieldBinding {
                column: "ReceivingFacility",
                setter: Setter::Text(|r, v| r.receiving_facility = v),
            },
            FieldBinding {
                column: "MessageDatetime",
                setter: Setter::DateTime(|r, v| r.message_datetime = v),
            },
            FieldBinding {
                column: "NHINumber",
                setter: Setter::Text(|r, v| r.nhi_number = v),
            },
            FieldBinding {
                column: "VersionId",
                setter: Setter::Text(|r, v| r.version_id = v),
            },
            FieldBinding {
                column: "FullName",
                setter: Setter::Text(|r, v| r.full_name = v),
            },
            FieldBinding {
                column: "DMSID",
                setter: Setter::Text(|r, v| r.dms_id = v),
            },
            FieldBinding {
                column: "DMSIDKey",
                setter: Setter::Text(|r, v| r.dms_id_key = v),
            },
            FieldBinding {
                column: "DOB",
                setter: Setter::DateTime(|r, v| r.dob = v),
            },
            FieldBinding {
                column: "GenderName",
                setter: Setter::Text(|r, v| r.gender_name = v),
            },
            FieldBinding {
                column: "PatientID",
                setter: Setter::Text(|r, v| r.patient_id = v),
            },
            FieldBinding {
                column: "PracticeID",
                setter: Setter::Text(|r, v| r.practice_id = v),
            },
            FieldBinding {
                column: "MshInsertedAt",
                setter: Setter::DateTime(|r, v| r.msh_inserted_at = v),
            },
            FieldBinding {
                column: "MarkasRead",
                setter: Setter::Bool(|r, v| r.markas_read = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "ifiinboxupdate",
                setter: Setter::DateTime(|r, v| r.inbox_updated_at = v),
            },
            FieldBinding {
                column: "inboxrecevieddate",
                setter: Setter::DateTime(|r, v| r.inbox_received_date = v),
            },
            FieldBinding {
                column: "inboxreceiveddate",
                setter: Setter::DateTime(|r, v| r.inbox_received_date = v),
            },
            FieldBinding {
                column: "OrgName",
                setter: Setter::Text(|r, v| r.org_name = v),
            },
            FieldBinding {
                column: "FolderName",
                setter: Setter::Text(|r, v| r.folder_name = v),
            },
        ];
        BINDINGS
    }
}

impl FromRow for DocumentRecord {
    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<DocumentRecord>] = &[
            FieldBinding {
                column: "DocumentID",
                setter: Setter::I32(|r, v| r.document_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "DocumentTypeID",
                setter: Setter::I32(|r, v| r.document_type_id = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "DocumentName",
                setter: Setter::Text(|r, v| r.document_name = v),
            },
            FieldBinding {
                column: "Description",
                setter: Setter::Text(|r, v| r.description = v),
            },
            FieldBinding {
                column: "IsDeleted",
                setter: Setter::Bool(|r, v| r.is_deleted = v.unwrap_or_default()),
            },
            FieldBinding {
                column: "DocumentType",
                setter: Setter::Text(|r, v| r.document_type = v),
            },
            FieldBinding {
                column: "DocumentBytes",
                setter: Setter::Bytes(|r, v| r.document_bytes = v),
            },
            FieldBinding {
                column: "InboxFolderItemID",
                setter: Setter::I32(|r, v| r.inbox_folder_item_id = v),
            },
        ];
        BINDINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::map_row;
    use crate::row::testing::FakeRow;
    use crate::row::SqlValue;

    #[test]
    fn test_lab_row_maps_misspelled_subject_column() {
        let row = FakeRow::new()
            .with("LabTestMshID", "int4", SqlValue::Int(12))
            .with(
                "MesageSubject",
                "varchar",
                SqlValue::Text("Blood Test Results".to_string()),
            );
        let mapped: LabTestRow = map_row(&row).unwrap();
        assert_eq!(mapped.lab_test_msh_id, 12);
        assert_eq!(mapped.message_subject.as_deref(), Some("Blood Test Results"));
    }

    #[test]
    fn test_header_age_tolerates_text_column() {
        let row = FakeRow::new()
            .with("NHINumber", "varchar", SqlValue::Text("NHI42".to_string()))
            .with("Age", "varchar", SqlValue::Text("61".to_string()));
        let header: PatientRecordHeader = map_row(&row).unwrap();
        assert_eq!(header.age, Some(61));
        assert_eq!(header.nhi_number.as_deref(), Some("NHI42"));
    }

    #[test]
    fn test_header_age_unparseable_text_is_absent() {
        let row = FakeRow::new().with("Age", "varchar", SqlValue::Text("unknown".to_string()));
        let header: PatientRecordHeader = map_row(&row).unwrap();
        assert_eq!(header.age, None);
    }

    #[test]
    fn test_diagnosis_sequence_no_narrows_from_int() {
        let row = FakeRow::new()
            .with("DiagnosisID", "int4", SqlValue::Int(3))
            .with("SequenceNo", "int4", SqlValue::Int(7));
        let diagnosis: PatientDiagnosis = map_row(&row).unwrap();
        assert_eq!(diagnosis.sequence_no, Some(7));
    }

    #[test]
    fn test_header_numeric_patient_id_stringifies() {
        let row = FakeRow::new().with("PatientID", "int4", SqlValue::Int(4711));
        let header: PatientRecordHeader = map_row(&row).unwrap();
        assert_eq!(header.patient_id.as_deref(), Some("4711"));
    }

    #[test]
    fn test_allergy_uuid_column_stringifies() {
        let id = uuid::Uuid::new_v4();
        let row = FakeRow::new()
            .with("AllergyID", "int4", SqlValue::Int(1))
            .with("AllergyUUID", "uuid", SqlValue::Uuid(id));
        let allergy: PatientAllergy = map_row(&row).unwrap();
        assert_eq!(allergy.allergy_uuid, Some(id.to_string()));
    }

    #[test]
    fn test_document_bytes_pass_through() {
        let row = FakeRow::new()
            .with("DocumentID", "int4", SqlValue::Int(5))
            .with("DocumentType", "varchar", SqlValue::Text("PDF".to_string()))
            .with("DocumentBytes", "bytea", SqlValue::Bytes(vec![0x25, 0x50]));
        let doc: DocumentRecord = map_row(&row).unwrap();
        assert_eq!(doc.document_bytes, Some(vec![0x25, 0x50]));
    }
}
