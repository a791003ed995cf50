// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity types for the course registration service.
//!
//! Serialized field names use the legacy uppercase identifiers (`LID`,
//! `CID`, `SID`, `EID`, `QID`) that existing clients depend on.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dates;

/// One scheduled lesson session. `LID` is scoped per `CID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    /// The lesson identifier, unique within its course.
    #[serde(rename = "LID")]
    pub lid: String,
    /// The course this lesson belongs to.
    #[serde(rename = "CID")]
    pub cid: String,
    /// The student or staff group identifier.
    #[serde(rename = "SID")]
    pub sid: String,
    /// The session start timestamp, rendered as an HTTP date.
    #[serde(serialize_with = "dates::serialize_http_date")]
    pub start: NaiveDateTime,
}

/// A course with its flat prerequisite and trainer lists.
///
/// `prerequisites` and `trainers` are comma-joined identifier strings,
/// not normalized rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// The course identifier.
    #[serde(rename = "CID")]
    pub cid: String,
    /// The course display name.
    pub name: String,
    /// Comma-joined prerequisite course identifiers.
    pub prerequisites: String,
    /// Comma-joined trainer identifiers.
    pub trainers: String,
}

/// A pending signup awaiting HR approval or rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    /// The enrollment identifier.
    #[serde(rename = "EID")]
    pub eid: i32,
    /// The enrolling engineer's identifier.
    #[serde(rename = "SID")]
    pub sid: String,
    /// The course being signed up for.
    #[serde(rename = "CID")]
    pub cid: String,
}

/// An approved or active enrollment with its quiz bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcademicRecord {
    /// The enrollment identifier this record was created from.
    #[serde(rename = "EID")]
    pub eid: i32,
    /// The engineer's identifier.
    #[serde(rename = "SID")]
    pub sid: String,
    /// The course identifier.
    #[serde(rename = "CID")]
    pub cid: String,
    /// The quiz identifier.
    #[serde(rename = "QID")]
    pub qid: i32,
    /// The record status (e.g., `ongoing`).
    pub status: String,
    /// The quiz result.
    pub quiz_result: i32,
}
