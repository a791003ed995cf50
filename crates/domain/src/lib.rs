// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod error;
mod fields;
mod types;

#[cfg(test)]
mod tests;

pub use dates::{http_date, parse_start};
pub use error::DomainError;
pub use fields::{int_field, missing_fields, text_field};
pub use types::{AcademicRecord, Course, Enrollment, Lesson};
