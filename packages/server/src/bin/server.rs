//! Bingo session server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bingo-server
//! cargo run --bin bingo-server -- --host 0.0.0.0 --port 3001 --log-level debug
//! ```

use bingo_server::bootstrap::build_server;
use bingo_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bingo-server")]
#[command(about = "Turn-based multiplayer bingo session server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,

    /// Default log level (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_CRATE_NAME"), "bingo_shared", "tower_http"],
        &args.log_level,
    );

    let server = build_server();
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
