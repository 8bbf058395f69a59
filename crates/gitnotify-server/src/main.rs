use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use gitnotify_server::config::{Commands, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::parse();

    match config.command {
        Some(Commands::Render { ref path }) => {
            let notification = gitnotify_server::render_file(path)?;
            println!("{}\n\n{}", notification.topic, notification.content);
        }
        None => {
            let addr = config.addr();
            info!("gitnotify-server starting");
            let listener = TcpListener::bind(addr).await?;
            gitnotify_server::serve(listener).await?;
        }
    }

    Ok(())
}
