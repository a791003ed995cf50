// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    lessons (lid, cid) {
        lid -> Text,
        cid -> Text,
        sid -> Text,
        start -> Timestamp,
    }
}

diesel::table! {
    courses (cid) {
        cid -> Text,
        name -> Text,
        prerequisites -> Text,
        trainers -> Text,
    }
}

diesel::table! {
    enrollments (eid) {
        eid -> Integer,
        sid -> Text,
        cid -> Text,
    }
}

diesel::table! {
    academic_records (eid) {
        eid -> Integer,
        sid -> Text,
        cid -> Text,
        qid -> Integer,
        status -> Text,
        quiz_result -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    academic_records,
    courses,
    enrollments,
    lessons,
);
