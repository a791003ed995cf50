// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the course registration service.
//!
//! This crate provides `SQLite` persistence for lessons, courses,
//! enrollments, and academic records. It is built on Diesel with
//! embedded migrations.
//!
//! `SQLite` is the only backend:
//! - In-memory databases back unit and integration tests
//! - File-based databases (WAL mode) back deployments
//!
//! All table access goes through the [`Persistence`] adapter; raw SQL
//! is limited to PRAGMA statements in the `sqlite` module.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use coursereg_domain::{AcademicRecord, Course, Enrollment, Lesson};

mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the course registration tables.
///
/// Owns a single `SQLite` connection. Callers requiring shared access
/// wrap the adapter in an `Arc<Mutex<_>>`.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Lessons
    // ========================================================================

    /// Retrieves all lessons in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_lessons(&mut self) -> Result<Vec<Lesson>, PersistenceError> {
        queries::all_lessons(&mut self.conn)
    }

    /// Retrieves lessons matching an exact `SID`, `CID`, and start timestamp.
    ///
    /// # Arguments
    ///
    /// * `sid` - The student/staff group identifier
    /// * `cid` - The course identifier
    /// * `start` - The session start timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_lessons(
        &mut self,
        sid: &str,
        cid: &str,
        start: NaiveDateTime,
    ) -> Result<Vec<Lesson>, PersistenceError> {
        queries::find_lessons(&mut self.conn, sid, cid, start)
    }

    /// Inserts a lesson.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_lesson(&mut self, lesson: &Lesson) -> Result<(), PersistenceError> {
        mutations::insert_lesson(&mut self.conn, lesson)
    }

    // ========================================================================
    // Courses
    // ========================================================================

    /// Retrieves the course with the given `CID`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_course(&mut self, cid: &str) -> Result<Option<Course>, PersistenceError> {
        queries::find_course(&mut self.conn, cid)
    }

    /// Inserts a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_course(&mut self, course: &Course) -> Result<(), PersistenceError> {
        mutations::insert_course(&mut self.conn, course)
    }

    /// Sets a course's trainers column, returning the number of rows updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_course_trainers(
        &mut self,
        cid: &str,
        trainers: &str,
    ) -> Result<usize, PersistenceError> {
        mutations::set_course_trainers(&mut self.conn, cid, trainers)
    }

    // ========================================================================
    // Enrollments
    // ========================================================================

    /// Retrieves all enrollments in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_enrollments(&mut self) -> Result<Vec<Enrollment>, PersistenceError> {
        queries::all_enrollments(&mut self.conn)
    }

    /// Retrieves the enrollment with the given `EID`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_enrollment(&mut self, eid: i32) -> Result<Option<Enrollment>, PersistenceError> {
        queries::find_enrollment(&mut self.conn, eid)
    }

    /// Inserts an enrollment.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), PersistenceError> {
        mutations::insert_enrollment(&mut self.conn, enrollment)
    }

    /// Deletes enrollments matching the given `EID`, returning the number of
    /// rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_enrollments(&mut self, eid: i32) -> Result<usize, PersistenceError> {
        mutations::delete_enrollments(&mut self.conn, eid)
    }

    // ========================================================================
    // Academic Records
    // ========================================================================

    /// Retrieves all academic records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_academic_records(&mut self) -> Result<Vec<AcademicRecord>, PersistenceError> {
        queries::all_academic_records(&mut self.conn)
    }

    /// Inserts an academic record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_academic_record(
        &mut self,
        record: &AcademicRecord,
    ) -> Result<(), PersistenceError> {
        mutations::insert_academic_record(&mut self.conn, record)
    }

    /// Deletes academic records matching the given `EID` and `CID`, returning
    /// the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_academic_records(
        &mut self,
        eid: i32,
        cid: &str,
    ) -> Result<usize, PersistenceError> {
        mutations::delete_academic_records(&mut self.conn, eid, cid)
    }
}
