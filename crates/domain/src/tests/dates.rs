// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;

use crate::{DomainError, http_date, parse_start};

#[test]
fn test_parse_start_accepts_wire_format() {
    let parsed: NaiveDateTime = parse_start("01/01/0001 00:00:00").unwrap();
    assert_eq!(http_date(&parsed), "Mon, 01 Jan 0001 00:00:00 GMT");
}

#[test]
fn test_parse_start_accepts_modern_date() {
    let parsed: NaiveDateTime = parse_start("15/06/2026 13:45:30").unwrap();
    assert_eq!(http_date(&parsed), "Mon, 15 Jun 2026 13:45:30 GMT");
}

#[test]
fn test_parse_start_rejects_truncated_value() {
    let result: Result<NaiveDateTime, DomainError> = parse_start("0001 00:00:00");
    assert!(matches!(result, Err(DomainError::InvalidStartDate { .. })));
}

#[test]
fn test_parse_start_rejects_iso_order() {
    // YYYY-MM-DD is not the wire format and must not be accepted.
    let result: Result<NaiveDateTime, DomainError> = parse_start("0001-01-01 00:00:00");
    assert!(result.is_err());
}

#[test]
fn test_parse_start_rejects_impossible_date() {
    let result: Result<NaiveDateTime, DomainError> = parse_start("32/01/2026 00:00:00");
    assert!(result.is_err());
}

#[test]
fn test_parse_start_error_preserves_input() {
    let err: DomainError = parse_start("garbage").unwrap_err();
    if let DomainError::InvalidStartDate { value, .. } = err {
        assert_eq!(value, "garbage");
    } else {
        panic!("expected InvalidStartDate");
    }
}

#[test]
fn test_http_date_round_trips_through_parse() {
    let parsed: NaiveDateTime = parse_start("20/01/0001 08:30:00").unwrap();
    assert_eq!(http_date(&parsed), "Sat, 20 Jan 0001 08:30:00 GMT");
}
