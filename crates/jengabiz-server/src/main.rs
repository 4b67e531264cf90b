//! JengaBiz: business-advisor chat server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("JENGABIZ_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "ask" => {
                if args.len() < 3 {
                    eprintln!("Usage: jengabiz ask <message>");
                    std::process::exit(1);
                }
                let message = args[2..].join(" ");
                println!("{}", jengabiz_advisor::generate_ai_response(&message));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("JengaBiz: business advisor for small enterprises");
                println!();
                println!("Usage: jengabiz [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  ask <message>            Print the advisor's reply and exit");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'jengabiz help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();

    info!("Data directory: {}", data_dir.display());

    let config = jengabiz_core::JengaBizConfig::from_env(&data_dir)?;
    let port = config.port;

    let state = Arc::new(AppState::new(config));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("JengaBiz server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
