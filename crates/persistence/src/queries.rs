// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side table queries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use tracing::debug;

use coursereg_domain::{AcademicRecord, Course, Enrollment, Lesson};

use crate::diesel_schema::{academic_records, courses, enrollments, lessons};
use crate::error::PersistenceError;

/// Row tuple for the `lessons` table, in schema column order.
type LessonRow = (String, String, String, NaiveDateTime);

/// Row tuple for the `enrollments` table, in schema column order.
type EnrollmentRow = (i32, String, String);

/// Row tuple for the `academic_records` table, in schema column order.
type AcademicRecordRow = (i32, String, String, i32, String, i32);

/// Row tuple for the `courses` table, in schema column order.
type CourseRow = (String, String, String, String);

fn lesson_from_row(row: LessonRow) -> Lesson {
    Lesson {
        lid: row.0,
        cid: row.1,
        sid: row.2,
        start: row.3,
    }
}

fn enrollment_from_row(row: EnrollmentRow) -> Enrollment {
    Enrollment {
        eid: row.0,
        sid: row.1,
        cid: row.2,
    }
}

fn record_from_row(row: AcademicRecordRow) -> AcademicRecord {
    AcademicRecord {
        eid: row.0,
        sid: row.1,
        cid: row.2,
        qid: row.3,
        status: row.4,
        quiz_result: row.5,
    }
}

fn course_from_row(row: CourseRow) -> Course {
    Course {
        cid: row.0,
        name: row.1,
        prerequisites: row.2,
        trainers: row.3,
    }
}

/// Retrieves all lessons in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn all_lessons(conn: &mut SqliteConnection) -> Result<Vec<Lesson>, PersistenceError> {
    debug!("Loading all lessons");

    let rows: Vec<LessonRow> = lessons::table.load(conn)?;
    Ok(rows.into_iter().map(lesson_from_row).collect())
}

/// Retrieves lessons matching an exact `SID`, `CID`, and start timestamp.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `sid` - The student/staff group identifier
/// * `cid` - The course identifier
/// * `start` - The session start timestamp
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_lessons(
    conn: &mut SqliteConnection,
    sid: &str,
    cid: &str,
    start: NaiveDateTime,
) -> Result<Vec<Lesson>, PersistenceError> {
    debug!("Querying lessons for SID: {}, CID: {}", sid, cid);

    let rows: Vec<LessonRow> = lessons::table
        .filter(lessons::sid.eq(sid))
        .filter(lessons::cid.eq(cid))
        .filter(lessons::start.eq(start))
        .load(conn)?;
    Ok(rows.into_iter().map(lesson_from_row).collect())
}

/// Retrieves all enrollments in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn all_enrollments(conn: &mut SqliteConnection) -> Result<Vec<Enrollment>, PersistenceError> {
    debug!("Loading all enrollments");

    let rows: Vec<EnrollmentRow> = enrollments::table.load(conn)?;
    Ok(rows.into_iter().map(enrollment_from_row).collect())
}

/// Retrieves the enrollment with the given `EID`, if one exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_enrollment(
    conn: &mut SqliteConnection,
    eid: i32,
) -> Result<Option<Enrollment>, PersistenceError> {
    debug!("Looking up enrollment EID: {}", eid);

    let row: Option<EnrollmentRow> = enrollments::table
        .filter(enrollments::eid.eq(eid))
        .first(conn)
        .optional()?;
    Ok(row.map(enrollment_from_row))
}

/// Retrieves all academic records in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn all_academic_records(
    conn: &mut SqliteConnection,
) -> Result<Vec<AcademicRecord>, PersistenceError> {
    debug!("Loading all academic records");

    let rows: Vec<AcademicRecordRow> = academic_records::table.load(conn)?;
    Ok(rows.into_iter().map(record_from_row).collect())
}

/// Retrieves the course with the given `CID`, if one exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_course(
    conn: &mut SqliteConnection,
    cid: &str,
) -> Result<Option<Course>, PersistenceError> {
    debug!("Looking up course CID: {}", cid);

    let row: Option<CourseRow> = courses::table
        .filter(courses::cid.eq(cid))
        .first(conn)
        .optional()?;
    Ok(row.map(course_from_row))
}
