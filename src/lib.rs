// Crate root for `timegrid`.
// Re-exports the main modules and the convenience `run_server` used by `main`.
pub mod api_json;
pub mod models;
pub mod timetable;
pub mod server;

/// Runs the HTTP server (re-export so `main` stays trivial)
pub use server::run_server;
