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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use coursereg_persistence::Persistence;

mod lessons;
mod registration;
mod response;

use lessons::{handle_create_lesson, handle_query_lessons, handle_view_lessons};
use registration::{
    handle_engineer_signup, handle_hr_approve_signup, handle_hr_assign_engineer,
    handle_hr_assign_trainer, handle_hr_reject_signup, handle_hr_view_signup,
    handle_hr_withdraw_engineer,
};

/// Course Registration Server - HTTP backend for lessons, enrollments,
/// and academic records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for registration tables.
    persistence: Arc<Mutex<Persistence>>,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/view_lessons", get(handle_view_lessons))
        .route("/query_lessons", post(handle_query_lessons))
        .route("/create_lesson", post(handle_create_lesson))
        .route("/engineer_signup", post(handle_engineer_signup))
        .route("/hr_view_signup", get(handle_hr_view_signup))
        .route("/hr_assign_engineer", post(handle_hr_assign_engineer))
        .route("/hr_withdraw_engineer", post(handle_hr_withdraw_engineer))
        .route("/hr_approve_signup", post(handle_hr_approve_signup))
        .route("/hr_reject_signup", post(handle_hr_reject_signup))
        .route("/hr_assign_trainer", post(handle_hr_assign_trainer))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Course Registration Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
