// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use chrono::NaiveDateTime;
use coursereg_domain::{AcademicRecord, Course, Enrollment, Lesson};

pub fn test_start(value: &str) -> NaiveDateTime {
    coursereg_domain::parse_start(value).expect("Valid test timestamp")
}

pub fn create_test_lesson(lid: &str, cid: &str, sid: &str, start: &str) -> Lesson {
    Lesson {
        lid: String::from(lid),
        cid: String::from(cid),
        sid: String::from(sid),
        start: test_start(start),
    }
}

pub fn create_test_course(cid: &str, name: &str) -> Course {
    Course {
        cid: String::from(cid),
        name: String::from(name),
        prerequisites: String::new(),
        trainers: String::new(),
    }
}

pub fn create_test_enrollment(eid: i32, sid: &str, cid: &str) -> Enrollment {
    Enrollment {
        eid,
        sid: String::from(sid),
        cid: String::from(cid),
    }
}

pub fn create_test_record(eid: i32, sid: &str, cid: &str) -> AcademicRecord {
    AcademicRecord {
        eid,
        sid: String::from(sid),
        cid: String::from(cid),
        qid: 0,
        status: String::from("ongoing"),
        quiz_result: 0,
    }
}
