//! Source of the author details shown in the info panel.

use async_trait::async_trait;
use url::Url;

use crate::gateway::GatewayError;
use crate::model::Author;

#[async_trait]
pub trait AppInfoClient: Send + Sync {
    async fn author(&self) -> Result<Author, GatewayError>;
}

const AUTHOR_AVATAR: &str = "https://live.staticflickr.com/65535/51904519089_c6ef9deaff_o.png";

/// Built-in author of the app.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAppInfo;

#[async_trait]
impl AppInfoClient for StaticAppInfo {
    async fn author(&self) -> Result<Author, GatewayError> {
        author("Kody Deda", "iOS Developer", AUTHOR_AVATAR)
    }
}

/// Placeholder author for previews and demos.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewAppInfo;

#[async_trait]
impl AppInfoClient for PreviewAppInfo {
    async fn author(&self) -> Result<Author, GatewayError> {
        author("Johnny Appleseed", "Preview Author", "https://example.com/avatar.png")
    }
}

fn author(name: &str, title: &str, avatar: &str) -> Result<Author, GatewayError> {
    let avatar_url =
        Url::parse(avatar).map_err(|e| GatewayError::new(format!("invalid avatar URL: {e}")))?;
    Ok(Author {
        name: name.to_string(),
        title: title.to_string(),
        avatar_url,
    })
}
