pub mod config;
mod routes;

#[cfg(test)]
mod test_helpers;

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use gitnotify_core::{EventContext, NotifyError, TopicContext};
use gitnotify_format::Notification;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

/// An event together with the metadata that names its topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub topic: TopicContext,
    pub event: EventContext,
}

impl RenderRequest {
    pub fn from_json(body: &str) -> Result<Self, NotifyError> {
        let request: RenderRequest = serde_json::from_str(body)?;
        request.event.validate()?;
        Ok(request)
    }

    pub fn render(&self) -> Notification {
        gitnotify_format::render(&self.topic, &self.event)
    }
}

/// Read a render request from a JSON file and render it.
pub fn render_file(path: &Path) -> Result<Notification> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let request = RenderRequest::from_json(&body)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(request.render())
}

pub fn build_router() -> Router {
    routes::build_router()
}

pub async fn serve(listener: TcpListener) -> Result<()> {
    info!("gitnotify-server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router()).await?;
    Ok(())
}
