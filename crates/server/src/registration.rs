// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration endpoints: signup, HR review, and trainer assignment.
//!
//! The failure messages vary per endpoint (prefix casing, single vs
//! double space, `academic record` vs `academic_record`). Existing
//! clients match on the exact strings, so each handler keeps its own.

use axum::{Json, extract::State as AxumState};
use serde_json::{Map, Value};
use tracing::info;

use coursereg_domain::{
    AcademicRecord, Course, Enrollment, int_field, missing_fields, text_field,
};

use crate::AppState;
use crate::response::{Envelope, HttpError};

/// Required `engineer_signup` fields, in check order.
const SIGNUP_FIELDS: [&str; 3] = ["EID", "SID", "CID"];

/// Required `hr_assign_engineer` fields, in check order.
const ASSIGN_FIELDS: [&str; 6] = ["EID", "SID", "CID", "QID", "status", "quiz_result"];

/// Required `hr_withdraw_engineer` fields, in check order.
const WITHDRAW_FIELDS: [&str; 2] = ["EID", "CID"];

/// Required `hr_assign_trainer` fields, in check order.
const TRAINER_FIELDS: [&str; 2] = ["CID", "TID"];

/// Renders a payload value for interpolation into a failure message.
///
/// Strings render without quotes; everything else uses its JSON form.
fn field_display(payload: &Map<String, Value>, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Handler for POST `/engineer_signup` endpoint.
///
/// Inserts a pending enrollment. Only the first missing field is
/// reported.
pub async fn handle_engineer_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling engineer_signup request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let missing: Vec<&str> = missing_fields(payload, &SIGNUP_FIELDS);
    if let Some(field) = missing.first() {
        return Err(HttpError::new(format!(
            "Enrollment ['{field}'] is not present,  engineer is not enrolled"
        )));
    }

    let failure: String = format!(
        "{} engineer is not updated successfully in the database",
        field_display(payload, "EID")
    );

    let eid: i32 = int_field(payload, "EID").map_err(|_| HttpError::new(failure.clone()))?;
    let sid: String = text_field(payload, "SID").map_err(|_| HttpError::new(failure.clone()))?;
    let cid: String = text_field(payload, "CID").map_err(|_| HttpError::new(failure.clone()))?;

    let enrollment: Enrollment = Enrollment { eid, sid, cid };

    let mut persistence = app_state.persistence.lock().await;
    persistence
        .insert_enrollment(&enrollment)
        .map_err(|_| HttpError::new(failure.clone()))?;
    drop(persistence);

    info!(eid = eid, "Successfully recorded signup");

    let data: Value = serde_json::to_value(&enrollment).map_err(|_| HttpError::new(failure.clone()))?;

    Ok(Json(Envelope::with_data(
        format!("{eid} engineer has been updated successfully in the database"),
        data,
    )))
}

/// Handler for GET `/hr_view_signup` endpoint.
///
/// Returns every pending enrollment. An empty table is reported as a
/// failure, matching the legacy surface.
pub async fn handle_hr_view_signup(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_view_signup request");

    let mut persistence = app_state.persistence.lock().await;
    let enrollments: Vec<Enrollment> = persistence
        .all_enrollments()
        .map_err(|_| HttpError::new("There are no enrollment retrieved"))?;
    drop(persistence);

    if enrollments.is_empty() {
        return Err(HttpError::new("There are no enrollment retrieved"));
    }

    let data: Value = serde_json::to_value(&enrollments)
        .map_err(|_| HttpError::new("There are no enrollment retrieved"))?;

    Ok(Json(Envelope::with_data(
        "All enrollments are retrieved",
        data,
    )))
}

/// Handler for POST `/hr_assign_engineer` endpoint.
///
/// Inserts an academic record directly, bypassing the enrollment
/// queue. Only the first missing field is reported.
pub async fn handle_hr_assign_engineer(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_assign_engineer request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let missing: Vec<&str> = missing_fields(payload, &ASSIGN_FIELDS);
    if let Some(field) = missing.first() {
        return Err(HttpError::new(format!(
            "academic record ['{field}'] is not present,  engineer is not assigned"
        )));
    }

    let failure: String = format!(
        "{} is not inserted successfully into the course details",
        field_display(payload, "EID")
    );

    let eid: i32 = int_field(payload, "EID").map_err(|_| HttpError::new(failure.clone()))?;
    let sid: String = text_field(payload, "SID").map_err(|_| HttpError::new(failure.clone()))?;
    let cid: String = text_field(payload, "CID").map_err(|_| HttpError::new(failure.clone()))?;
    let qid: i32 = int_field(payload, "QID").map_err(|_| HttpError::new(failure.clone()))?;
    let status: String = text_field(payload, "status").map_err(|_| HttpError::new(failure.clone()))?;
    let quiz_result: i32 =
        int_field(payload, "quiz_result").map_err(|_| HttpError::new(failure.clone()))?;

    let record: AcademicRecord = AcademicRecord {
        eid,
        sid,
        cid,
        qid,
        status,
        quiz_result,
    };

    let mut persistence = app_state.persistence.lock().await;
    persistence
        .insert_academic_record(&record)
        .map_err(|_| HttpError::new(failure.clone()))?;
    drop(persistence);

    info!(eid = eid, "Successfully assigned engineer");

    let data: Value = serde_json::to_value(&record).map_err(|_| HttpError::new(failure.clone()))?;

    Ok(Json(Envelope::with_data(
        format!("{eid} has been inserted successfully into the course details"),
        data,
    )))
}

/// Handler for POST `/hr_withdraw_engineer` endpoint.
///
/// Deletes the academic records matching `EID` and `CID`. Deleting
/// zero rows is a failure.
pub async fn handle_hr_withdraw_engineer(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_withdraw_engineer request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let missing: Vec<&str> = missing_fields(payload, &WITHDRAW_FIELDS);
    if let Some(field) = missing.first() {
        return Err(HttpError::new(format!(
            "academic_record ['{field}'] is not present,  engineer is not withdrawn"
        )));
    }

    let failure: String = format!("{} is not deleted", field_display(payload, "EID"));

    let eid: i32 = int_field(payload, "EID").map_err(|_| HttpError::new(failure.clone()))?;
    let cid: String = text_field(payload, "CID").map_err(|_| HttpError::new(failure.clone()))?;

    let mut persistence = app_state.persistence.lock().await;
    let rows_deleted: usize = persistence
        .delete_academic_records(eid, &cid)
        .map_err(|_| HttpError::new(failure.clone()))?;
    drop(persistence);

    if rows_deleted == 0 {
        return Err(HttpError::new(format!("{eid} is not deleted")));
    }

    info!(eid = eid, "Successfully withdrew engineer");

    Ok(Json(Envelope::message(format!(
        "{eid} has been deleted successfully from course details"
    ))))
}

/// Handler for POST `/hr_approve_signup` endpoint.
///
/// Copies the enrollment with the given `EID` into the academic record
/// table. `QID`, `status`, and `quiz_result` come from the body when
/// present, defaulting to `0`, `ongoing`, `0`. The enrollment row is
/// left in place; the move was never atomic and clients compensate.
pub async fn handle_hr_approve_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_approve_signup request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    if !payload.contains_key("EID") {
        return Err(HttpError::new(
            "Academic record ['EID'] is not present,  engineer is not enrolled",
        ));
    }

    let failure: String = format!(
        "{} prerequisites is not moved successfully",
        field_display(payload, "EID")
    );

    let eid: i32 = int_field(payload, "EID").map_err(|_| HttpError::new(failure.clone()))?;

    let qid: i32 = if payload.contains_key("QID") {
        int_field(payload, "QID").map_err(|_| HttpError::new(failure.clone()))?
    } else {
        0
    };
    let status: String = if payload.contains_key("status") {
        text_field(payload, "status").map_err(|_| HttpError::new(failure.clone()))?
    } else {
        String::from("ongoing")
    };
    let quiz_result: i32 = if payload.contains_key("quiz_result") {
        int_field(payload, "quiz_result").map_err(|_| HttpError::new(failure.clone()))?
    } else {
        0
    };

    let mut persistence = app_state.persistence.lock().await;
    let enrollment: Enrollment = persistence
        .find_enrollment(eid)
        .map_err(|_| HttpError::new(failure.clone()))?
        .ok_or_else(|| HttpError::new(failure.clone()))?;

    let record: AcademicRecord = AcademicRecord {
        eid,
        sid: enrollment.sid,
        cid: enrollment.cid,
        qid,
        status,
        quiz_result,
    };

    persistence
        .insert_academic_record(&record)
        .map_err(|_| HttpError::new(failure.clone()))?;
    drop(persistence);

    info!(eid = eid, "Successfully approved signup");

    let data: Value = serde_json::to_value(&record).map_err(|_| HttpError::new(failure.clone()))?;

    Ok(Json(Envelope::with_data(
        format!("{eid} prerequisites has been moved successfully from Enrollment to academic_record"),
        data,
    )))
}

/// Handler for POST `/hr_reject_signup` endpoint.
///
/// Deletes the enrollment with the given `EID`. Deleting zero rows is
/// a failure. Note the single space in the missing-field message;
/// every other endpoint here has two.
pub async fn handle_hr_reject_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_reject_signup request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    if !payload.contains_key("EID") {
        return Err(HttpError::new(
            "Academic record ['EID'] is not present, signup is not rejected",
        ));
    }

    let failure: String = format!("{} is not deleted", field_display(payload, "EID"));

    let eid: i32 = int_field(payload, "EID").map_err(|_| HttpError::new(failure.clone()))?;

    let mut persistence = app_state.persistence.lock().await;
    let rows_deleted: usize = persistence
        .delete_enrollments(eid)
        .map_err(|_| HttpError::new(failure.clone()))?;
    drop(persistence);

    if rows_deleted == 0 {
        return Err(HttpError::new(format!("{eid} is not deleted")));
    }

    info!(eid = eid, "Successfully rejected signup");

    Ok(Json(Envelope::message(format!(
        "{eid} has been deleted successfully from Enrollment"
    ))))
}

/// Handler for POST `/hr_assign_trainer` endpoint.
///
/// Overwrites the course's `trainers` column with the `TID` string and
/// returns the updated row.
pub async fn handle_hr_assign_trainer(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling hr_assign_trainer request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let missing: Vec<&str> = missing_fields(payload, &TRAINER_FIELDS);
    if let Some(field) = missing.first() {
        return Err(HttpError::new(format!(
            "Course ['{field}'] is not present,  trainers are not assigned"
        )));
    }

    let failure: &str = "Trainers are not updated successfully";

    let cid: String = text_field(payload, "CID").map_err(|_| HttpError::new(failure))?;
    let tid: String = text_field(payload, "TID").map_err(|_| HttpError::new(failure))?;

    let mut persistence = app_state.persistence.lock().await;
    let rows_updated: usize = persistence
        .set_course_trainers(&cid, &tid)
        .map_err(|_| HttpError::new(failure))?;
    if rows_updated == 0 {
        return Err(HttpError::new(failure));
    }
    let course: Course = persistence
        .find_course(&cid)
        .map_err(|_| HttpError::new(failure))?
        .ok_or_else(|| HttpError::new(failure))?;
    drop(persistence);

    info!(cid = %cid, trainers = %tid, "Successfully assigned trainers");

    let data: Value = serde_json::to_value(&course).map_err(|_| HttpError::new(failure))?;

    Ok(Json(Envelope::with_data(
        format!("Trainers {tid} has been updated successfully in the database"),
        data,
    )))
}
