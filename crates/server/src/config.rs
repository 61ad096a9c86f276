use gitscope_services::services::github::GITHUB_API_BASE;

/// Runtime configuration, read from the environment with defaults for
/// anything unset. The username is fixed for the server's lifetime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub github_api_base: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match std::env::var("PORT") {
            Ok(port_str) => port_str
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid port value '{}': {}", port_str, e))?,
            Err(_) => 8080,
        };

        let username = std::env::var("GITSCOPE_USERNAME").unwrap_or_else(|_| "octocat".to_string());

        let github_api_base = std::env::var("GITSCOPE_GITHUB_API_BASE")
            .unwrap_or_else(|_| GITHUB_API_BASE.to_string());

        Ok(Self {
            host,
            port,
            username,
            github_api_base,
        })
    }
}
