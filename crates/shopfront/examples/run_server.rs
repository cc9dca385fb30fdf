//! Run the shopfront API server standalone for testing.
//!
//! Usage: cargo run --example run_server

use shopfront::server::Server;

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenvy::from_path(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shopfront=debug")),
        )
        .init();

    println!("Starting shopfront API server...");

    let data_dir = std::env::var("SHOPFRONT_DATA_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from(".shopfront"));

    match Server::start_in_dir(&data_dir).await {
        Ok(server) => {
            println!("Server listening on http://{}", server.addr());
            println!("\nAvailable endpoints:");
            println!("  GET  /health                    - Health check");
            println!("  GET  /home/state                - Current view state");
            println!("  GET  /home/categories           - Category dropdown entries");
            println!("  POST /home/categories/:id/open  - Request navigation to a category");
            println!("  GET  /home/filter               - Current filter criteria");
            println!("  PUT  /home/filter               - Update filter criteria");
            println!("  POST /home/search               - Trigger a search pass");
            println!("  PUT  /home/panels               - Toggle panel sections");
            println!("  GET  /home/journal              - Recent dispatches");
            println!("  GET  /home/events               - Server-sent event stream");
            println!("\nPress Ctrl+C to stop");

            // Keep the server running
            tokio::signal::ctrl_c().await.unwrap();
            println!("\nShutting down...");
        }
        Err(e) => {
            eprintln!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    }
}
