//! landmark-guide CLI entry point
//!
//! Campus guide - CLI + web server

use landmark_guide::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
