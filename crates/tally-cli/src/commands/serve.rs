//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    let config = tally_server::ServerConfig::from_env();

    println!("🚀 Starting Tally web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if config.allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin");
    } else {
        println!(
            "   🌐 CORS: {} ({})",
            config.allowed_origins.join(", "),
            tally_server::ALLOWED_ORIGINS_ENV
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;
    tally_server::serve_with_config(db, host, port, config).await?;

    Ok(())
}
