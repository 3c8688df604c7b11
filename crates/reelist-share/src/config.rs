//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8082").
    pub bind_addr: String,

    /// Public base URL of the application (used in canonical routes and
    /// OG tags). e.g., "https://reelist.video"
    pub base_url: String,

    /// Site name shown in OG tags and page titles.
    pub site_name: String,

    /// Same-origin path of the default preview image, used when a payload
    /// carries no thumbnail or failed to decode. Served by the static
    /// asset tier, not by this service.
    pub default_image_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `SHARE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8082")
    /// - `SHARE_BASE_URL`: Public base URL for redirects/OG tags (default: "http://localhost:8082")
    /// - `SHARE_SITE_NAME`: Site name (default: "Reelist")
    /// - `SHARE_DEFAULT_IMAGE`: Default preview image path (default: "/images/share-card.png")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SHARE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());

        let base_url = std::env::var("SHARE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8082".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("SHARE_SITE_NAME").unwrap_or_else(|_| "Reelist".to_string());

        let default_image_path = std::env::var("SHARE_DEFAULT_IMAGE")
            .unwrap_or_else(|_| "/images/share-card.png".to_string());
        let default_image_path = if default_image_path.starts_with('/') {
            default_image_path
        } else {
            format!("/{default_image_path}")
        };

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            site_name = %site_name,
            default_image = %default_image_path,
            "share configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            default_image_path,
        })
    }
}
