// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lesson endpoints: view, query, and create.

use axum::{Json, extract::State as AxumState};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use tracing::info;

use coursereg_domain::{Lesson, missing_fields, parse_start, text_field};

use crate::AppState;
use crate::response::{Envelope, HttpError};

/// Required `create_lesson` fields, in declaration order.
const CREATE_LESSON_FIELDS: [&str; 4] = ["LID", "SID", "CID", "start"];

/// Handler for GET `/view_lessons` endpoint.
///
/// Returns every lesson row. An empty table is reported as a failure,
/// matching the legacy surface.
pub async fn handle_view_lessons(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling view_lessons request");

    let mut persistence = app_state.persistence.lock().await;
    let lessons: Vec<Lesson> = persistence
        .all_lessons()
        .map_err(|_| HttpError::new("There are no lesson retrieved"))?;
    drop(persistence);

    if lessons.is_empty() {
        return Err(HttpError::new("There are no lesson retrieved"));
    }

    let data: Value = serde_json::to_value(&lessons)
        .map_err(|_| HttpError::new("There are no lesson retrieved"))?;

    Ok(Json(Envelope::with_data("All lessons are retrieved", data)))
}

/// Handler for POST `/query_lessons` endpoint.
///
/// Filters lessons by exact `SID`, `CID`, and `start`. Missing fields,
/// unparsable dates, and zero matches all collapse into the single
/// legacy failure message.
pub async fn handle_query_lessons(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling query_lessons request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let sid: String =
        text_field(payload, "SID").map_err(|_| HttpError::new("Lessons cannot be query"))?;
    let cid: String =
        text_field(payload, "CID").map_err(|_| HttpError::new("Lessons cannot be query"))?;
    let start_raw: String =
        text_field(payload, "start").map_err(|_| HttpError::new("Lessons cannot be query"))?;
    let start: NaiveDateTime =
        parse_start(&start_raw).map_err(|_| HttpError::new("Lessons cannot be query"))?;

    let mut persistence = app_state.persistence.lock().await;
    let lessons: Vec<Lesson> = persistence
        .find_lessons(&sid, &cid, start)
        .map_err(|_| HttpError::new("Lessons cannot be query"))?;
    drop(persistence);

    if lessons.is_empty() {
        return Err(HttpError::new("Lessons cannot be query"));
    }

    let data: Value = serde_json::to_value(&lessons)
        .map_err(|_| HttpError::new("Lessons cannot be query"))?;

    Ok(Json(Envelope::with_data(
        "Lessons have been query successfully from the database",
        data,
    )))
}

/// Handler for POST `/create_lesson` endpoint.
///
/// Missing fields are reported comma-joined in declaration order; all
/// other failures use the single "not inserted" message.
pub async fn handle_create_lesson(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, HttpError> {
    info!("Handling create_lesson request");

    let empty: Map<String, Value> = Map::new();
    let payload: &Map<String, Value> = body.as_object().unwrap_or(&empty);

    let missing: Vec<&str> = missing_fields(payload, &CREATE_LESSON_FIELDS);
    if !missing.is_empty() {
        return Err(HttpError::new(format!("{} is missing", missing.join(","))));
    }

    let failure: &str = "Lesson is not inserted successfully into the database";

    let lid: String = text_field(payload, "LID").map_err(|_| HttpError::new(failure))?;
    let sid: String = text_field(payload, "SID").map_err(|_| HttpError::new(failure))?;
    let cid: String = text_field(payload, "CID").map_err(|_| HttpError::new(failure))?;
    let start_raw: String = text_field(payload, "start").map_err(|_| HttpError::new(failure))?;
    let start: NaiveDateTime = parse_start(&start_raw).map_err(|_| HttpError::new(failure))?;

    let lesson: Lesson = Lesson {
        lid,
        cid,
        sid,
        start,
    };

    let mut persistence = app_state.persistence.lock().await;
    persistence
        .insert_lesson(&lesson)
        .map_err(|_| HttpError::new(failure))?;
    drop(persistence);

    info!(
        lid = %lesson.lid,
        cid = %lesson.cid,
        "Successfully created lesson"
    );

    let data: Value = serde_json::to_value(&lesson).map_err(|_| HttpError::new(failure))?;

    Ok(Json(Envelope::with_data(
        "Lesson has been inserted successfully into the database",
        data,
    )))
}

#[cfg(test)]
mod tests {
    use crate::{AppState, build_router};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use coursereg_domain::{Lesson, parse_start};
    use coursereg_persistence::Persistence;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    fn test_lesson(lid: &str, cid: &str, sid: &str) -> Lesson {
        Lesson {
            lid: String::from(lid),
            cid: String::from(cid),
            sid: String::from(sid),
            start: parse_start("01/01/0001 00:00:00").unwrap(),
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    async fn post(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_view_lessons_single_row() {
        let app_state: AppState = create_test_app_state();
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_lesson(&test_lesson("1", "IS111", "G1"))
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let (status, body) = get(app, "/view_lessons").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "All lessons are retrieved",
                "data": [
                    {
                        "LID": "1",
                        "CID": "IS111",
                        "SID": "G1",
                        "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_view_lessons_two_rows() {
        let app_state: AppState = create_test_app_state();
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_lesson(&test_lesson("1", "IS111", "G1"))
                .unwrap();
            persistence
                .insert_lesson(&test_lesson("2", "IS111", "G1"))
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let (status, body) = get(app, "/view_lessons").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "All lessons are retrieved",
                "data": [
                    {
                        "LID": "1",
                        "CID": "IS111",
                        "SID": "G1",
                        "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                    },
                    {
                        "LID": "2",
                        "CID": "IS111",
                        "SID": "G1",
                        "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_view_lessons_empty_table_fails() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get(app, "/view_lessons").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "There are no lesson retrieved"}));
    }

    #[tokio::test]
    async fn test_query_lessons_matches_rows() {
        let app_state: AppState = create_test_app_state();
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_lesson(&test_lesson("1", "IS111", "G1"))
                .unwrap();
            persistence
                .insert_lesson(&test_lesson("2", "IS111", "G1"))
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let request_body = json!({
            "SID": "G1",
            "CID": "IS111",
            "start": "01/01/0001 00:00:00"
        });
        let (status, body) = post(app, "/query_lessons", &request_body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "data": [
                    {
                        "LID": "1",
                        "CID": "IS111",
                        "SID": "G1",
                        "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                    },
                    {
                        "LID": "2",
                        "CID": "IS111",
                        "SID": "G1",
                        "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                    }
                ],
                "message": "Lessons have been query successfully from the database"
            })
        );
    }

    #[tokio::test]
    async fn test_query_lessons_empty_database_fails() {
        let app: Router = build_router(create_test_app_state());

        let request_body = json!({
            "SID": "G1",
            "CID": "IS111",
            "start": "01/01/0001 00:00:00"
        });
        let (status, body) = post(app, "/query_lessons", &request_body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Lessons cannot be query"}));
    }

    #[tokio::test]
    async fn test_query_lessons_missing_fields_fail() {
        for request_body in [
            json!({"CID": "IS111", "start": "01/01/0001 00:00:00"}),
            json!({"SID": "G1", "start": "01/01/0001 00:00:00"}),
            json!({"SID": "G1", "CID": "IS111"}),
            json!({}),
        ] {
            let app: Router = build_router(create_test_app_state());
            let (status, body) = post(app, "/query_lessons", &request_body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({"message": "Lessons cannot be query"}));
        }
    }

    #[tokio::test]
    async fn test_query_lessons_no_match_fails() {
        let app_state: AppState = create_test_app_state();
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_lesson(&test_lesson("1", "IS111", "G1"))
                .unwrap();
        }

        for request_body in [
            json!({"SID": "USAIN BOLT", "CID": "IS111", "start": "01/01/0001 00:00:00"}),
            json!({"SID": "G1", "CID": "POKEMON", "start": "01/01/0001 00:00:00"}),
            json!({"SID": "G1", "CID": "IS111", "start": "20/01/0001 00:00:00"}),
        ] {
            let app: Router = build_router(app_state.clone());
            let (status, body) = post(app, "/query_lessons", &request_body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({"message": "Lessons cannot be query"}));
        }
    }

    #[tokio::test]
    async fn test_create_lesson_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let request_body = json!({
            "LID": "1",
            "SID": "G4",
            "CID": "IS212",
            "start": "01/01/0001 00:00:00"
        });
        let (status, body) = post(app, "/create_lesson", &request_body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Lesson has been inserted successfully into the database",
                "data": {
                    "CID": "IS212",
                    "SID": "G4",
                    "LID": "1",
                    "start": "Mon, 01 Jan 0001 00:00:00 GMT"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_create_lesson_missing_single_field() {
        let cases = [
            (
                json!({"SID": "G4", "CID": "IS212", "start": "01/01/0001 00:00:00"}),
                "LID is missing",
            ),
            (
                json!({"LID": "1", "SID": "G4", "start": "01/01/0001 00:00:00"}),
                "CID is missing",
            ),
            (
                json!({"LID": "1", "SID": "G4", "CID": "IS212"}),
                "start is missing",
            ),
        ];

        for (request_body, expected) in cases {
            let app: Router = build_router(create_test_app_state());
            let (status, body) = post(app, "/create_lesson", &request_body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({"message": expected}));
        }
    }

    #[tokio::test]
    async fn test_create_lesson_missing_fields_join_in_order() {
        let app: Router = build_router(create_test_app_state());

        let request_body = json!({"LID": "1", "SID": "G4"});
        let (status, body) = post(app, "/create_lesson", &request_body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "CID,start is missing"}));
    }

    #[tokio::test]
    async fn test_create_lesson_all_fields_missing() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = post(app, "/create_lesson", &json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "LID,SID,CID,start is missing"}));
    }

    #[tokio::test]
    async fn test_create_lesson_bad_start_fails() {
        let app: Router = build_router(create_test_app_state());

        // Numeric LID is coerced; the malformed date is the failure.
        let request_body = json!({
            "LID": 10,
            "SID": "G4",
            "CID": "IS212",
            "start": "0001 00:00:00"
        });
        let (status, body) = post(app, "/create_lesson", &request_body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"message": "Lesson is not inserted successfully into the database"})
        );
    }

    #[tokio::test]
    async fn test_create_lesson_duplicate_key_fails() {
        let app_state: AppState = create_test_app_state();
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_lesson(&test_lesson("1", "IS111", "G1"))
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let request_body = json!({
            "LID": "1",
            "SID": "G1",
            "CID": "IS111",
            "start": "01/01/0001 00:00:00"
        });
        let (status, body) = post(app, "/create_lesson", &request_body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"message": "Lesson is not inserted successfully into the database"})
        );
    }
}
