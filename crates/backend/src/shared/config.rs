use contracts::domain::a002_category::Category;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Basic auth is only enforced when this section is present
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub app_password: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[[categories]]
id = 1
name = "Fashion"

[[categories]]
id = 2
name = "Home & Living"

[[categories]]
id = 3
name = "Health & Beauty"

[[categories]]
id = 4
name = "Electronics"

[[categories]]
id = 5
name = "Sports & Outdoor"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.auth.is_none());
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.categories[0].name, "Fashion");
    }

    #[test]
    fn test_auth_section_and_port_default() {
        let config = parse_config(
            r#"
            [auth]
            username = "seller"
            app_password = "cdcB 77WT"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.categories.is_empty());
        let auth = config.auth.unwrap();
        assert_eq!(auth.username, "seller");
        assert_eq!(auth.app_password, "cdcB 77WT");
    }
}
