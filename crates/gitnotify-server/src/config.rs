use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gitnotify-server", about = "Render git webhook events as chat notifications")]
pub struct ServerConfig {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address to listen on
    #[arg(long, env = "GITNOTIFY_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "GITNOTIFY_PORT", default_value = "3720")]
    pub port: u16,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a `{"topic": ..., "event": ...}` JSON file to stdout
    Render {
        /// Path to the JSON file
        path: PathBuf,
    },
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
