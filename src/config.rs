//! Runtime configuration, read once from the environment at startup.

/// Everything tunable without a rebuild. Each field falls back to a
/// documented default when its variable is unset.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `C_ATLAS_TITLE`, default "C-Atlas". Window and chart title.
    pub title: String,
    /// `C_ATLAS_VERSION`, default "1.0.0". Shown in the footer.
    pub version: String,
    /// `C_ATLAS_CHART_THEME`, default "dark".
    pub chart_theme: String,
    /// `C_ATLAS_CHART_RENDERER`, default "svg". Advisory only; the egui
    /// painter ignores it but it is kept for parity with exported options.
    pub chart_renderer: String,
    /// `C_ATLAS_API_BASE_URL`, default "http://localhost:3000". Root for
    /// both theory documents and feedback submission.
    pub api_base_url: String,
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "C-Atlas".to_string(),
            version: "1.0.0".to_string(),
            chart_theme: "dark".to_string(),
            chart_renderer: "svg".to_string(),
            api_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            title: env_or("C_ATLAS_TITLE", &defaults.title),
            version: env_or("C_ATLAS_VERSION", &defaults.version),
            chart_theme: env_or("C_ATLAS_CHART_THEME", &defaults.chart_theme),
            chart_renderer: env_or("C_ATLAS_CHART_RENDERER", &defaults.chart_renderer),
            api_base_url: env_or("C_ATLAS_API_BASE_URL", &defaults.api_base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "C-Atlas");
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.chart_theme, "dark");
    }
}
