//! Client configuration.

/// Default API root used when no override is baked in at build time.
const DEFAULT_BASE_URL: &str = "https://modern-blog-platform-production.up.railway.app/api";

/// Where the remote API lives.
///
/// The base URL is resolved once at build time: `BLOG_API_URL` wins when
/// set (local backends, staging), otherwise the production URL is used.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// API root, without a trailing slash. Endpoint paths are appended as-is.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("BLOG_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at an explicit API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::with_base_url("http://localhost:8000/api/");
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_default_points_somewhere() {
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert!(!config.base_url.ends_with('/'));
    }
}
