//! Application Configuration
//!
//! Configuration for the users application layer.

/// Users application configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Page size when the client does not send `limit`
    pub default_page_size: i64,
    /// Upper bound for `limit`
    pub max_page_size: i64,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 200,
        }
    }
}
