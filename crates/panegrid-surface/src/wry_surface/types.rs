/// Configuration for creating a wry-backed surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Page loaded at construction.
    pub initial_url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Keep cookies and storage in memory, private to this surface.
    pub incognito: bool,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_url: "about:blank".to_string(),
            devtools: cfg!(debug_assertions),
            user_agent: None,
            incognito: true,
            clipboard: true,
            autoplay: false,
        }
    }
}
