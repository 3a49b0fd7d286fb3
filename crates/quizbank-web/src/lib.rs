//! Quizbank Web Interface
//!
//! Server-rendered admin panel for a quiz question bank: aggregate stats, a
//! searchable and paginated question list with answer distributions, an
//! upload workflow for exam pages and an upload history with undo. Pages are
//! rendered with `maud` and wired with htmx attributes; all data comes from
//! the question-bank REST API through [`api_client::ApiClient`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod cursor;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod statics;

// Re-export the main functions
pub use server::build_app;
pub use state::AppState;
