// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side table mutations.
//!
//! All mutations use Diesel DSL. Delete and update operations report
//! the number of rows affected so callers can surface the legacy
//! "not deleted" / "not updated" failures for absent rows.

use diesel::prelude::*;
use tracing::info;

use coursereg_domain::{AcademicRecord, Course, Enrollment, Lesson};

use crate::diesel_schema::{academic_records, courses, enrollments, lessons};
use crate::error::PersistenceError;

/// Inserts a lesson row.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate `(LID, CID)`).
pub fn insert_lesson(conn: &mut SqliteConnection, lesson: &Lesson) -> Result<(), PersistenceError> {
    info!("Inserting lesson LID: {}, CID: {}", lesson.lid, lesson.cid);

    diesel::insert_into(lessons::table)
        .values((
            lessons::lid.eq(&lesson.lid),
            lessons::cid.eq(&lesson.cid),
            lessons::sid.eq(&lesson.sid),
            lessons::start.eq(lesson.start),
        ))
        .execute(conn)?;

    Ok(())
}

/// Inserts a course row.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate `CID`).
pub fn insert_course(conn: &mut SqliteConnection, course: &Course) -> Result<(), PersistenceError> {
    info!("Inserting course CID: {}", course.cid);

    diesel::insert_into(courses::table)
        .values((
            courses::cid.eq(&course.cid),
            courses::name.eq(&course.name),
            courses::prerequisites.eq(&course.prerequisites),
            courses::trainers.eq(&course.trainers),
        ))
        .execute(conn)?;

    Ok(())
}

/// Inserts an enrollment row.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate `EID`).
pub fn insert_enrollment(
    conn: &mut SqliteConnection,
    enrollment: &Enrollment,
) -> Result<(), PersistenceError> {
    info!("Inserting enrollment EID: {}", enrollment.eid);

    diesel::insert_into(enrollments::table)
        .values((
            enrollments::eid.eq(enrollment.eid),
            enrollments::sid.eq(&enrollment.sid),
            enrollments::cid.eq(&enrollment.cid),
        ))
        .execute(conn)?;

    Ok(())
}

/// Inserts an academic record row.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate `EID`).
pub fn insert_academic_record(
    conn: &mut SqliteConnection,
    record: &AcademicRecord,
) -> Result<(), PersistenceError> {
    info!("Inserting academic record EID: {}", record.eid);

    diesel::insert_into(academic_records::table)
        .values((
            academic_records::eid.eq(record.eid),
            academic_records::sid.eq(&record.sid),
            academic_records::cid.eq(&record.cid),
            academic_records::qid.eq(record.qid),
            academic_records::status.eq(&record.status),
            academic_records::quiz_result.eq(record.quiz_result),
        ))
        .execute(conn)?;

    Ok(())
}

/// Deletes academic records matching the given `EID` and `CID`.
///
/// # Returns
///
/// The number of rows deleted (zero when no record matched).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_academic_records(
    conn: &mut SqliteConnection,
    eid: i32,
    cid: &str,
) -> Result<usize, PersistenceError> {
    info!("Deleting academic records EID: {}, CID: {}", eid, cid);

    let rows_affected: usize = diesel::delete(academic_records::table)
        .filter(academic_records::eid.eq(eid))
        .filter(academic_records::cid.eq(cid))
        .execute(conn)?;

    info!("Deleted {} academic records", rows_affected);
    Ok(rows_affected)
}

/// Deletes enrollments matching the given `EID`.
///
/// # Returns
///
/// The number of rows deleted (zero when no enrollment matched).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_enrollments(conn: &mut SqliteConnection, eid: i32) -> Result<usize, PersistenceError> {
    info!("Deleting enrollments EID: {}", eid);

    let rows_affected: usize = diesel::delete(enrollments::table)
        .filter(enrollments::eid.eq(eid))
        .execute(conn)?;

    info!("Deleted {} enrollments", rows_affected);
    Ok(rows_affected)
}

/// Sets a course's `trainers` column.
///
/// # Returns
///
/// The number of rows updated (zero when the course does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_course_trainers(
    conn: &mut SqliteConnection,
    cid: &str,
    trainers: &str,
) -> Result<usize, PersistenceError> {
    info!("Assigning trainers '{}' to course CID: {}", trainers, cid);

    let rows_affected: usize = diesel::update(courses::table)
        .filter(courses::cid.eq(cid))
        .set(courses::trainers.eq(trainers))
        .execute(conn)?;

    Ok(rows_affected)
}
