use std::sync::Arc;

use gitscope_server::{config::ServerConfig, routes};
use gitscope_services::services::github::{GithubClient, HttpTransport, ProfileLoader};
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer().with_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("info")),
                    ),
                )
                .init();

            let config = ServerConfig::from_env()?;

            let transport = Arc::new(HttpTransport::new()?);
            let client = GithubClient::new(config.github_api_base.clone(), transport);
            let loader = ProfileLoader::new(config.username.clone(), client);

            // Warm the state so the first page load already has data.
            loader.fetch_user_data();

            let app = routes::router(&loader);

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(
                "Gitscope server for '{}' listening on {}",
                config.username,
                addr
            );

            axum::serve(listener, app).await?;

            Ok(())
        })
}
