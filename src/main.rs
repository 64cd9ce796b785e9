// --- Timetable Resolution API - entry point ---

use timegrid::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind = format!("0.0.0.0:{}", port);
    println!("=== Timetable Resolution API ===");
    println!("Starting server on http://{}", bind);
    run_server(&bind).await
}
