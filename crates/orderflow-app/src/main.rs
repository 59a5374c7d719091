use orderflow_client::{MailerClient, UserDirectoryClient};
use orderflow_hex::application::order_workflow::OrderWorkflow;
use orderflow_hex::config::Config;
use orderflow_hex::inbound::http::{HttpServer, HttpServerConfig};
use orderflow_store::{build_store, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for SERVER_PORT / DATABASE_URL / USER_SERVICE_URL / MAILER_URL when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        user_service = %config.user_service_url,
        mailer = %config.mailer_url,
        send_mails = config.send_mails,
        "configuration loaded"
    );

    let store: Store = build_store(config.database_url.as_deref()).await?;
    let directory = UserDirectoryClient::builder(&config.user_service_url)?
        .with_timeout(config.http_timeout)
        .build()?;
    let mailer = MailerClient::builder(&config.mailer_url)?
        .with_timeout(config.http_timeout)
        .build()?;
    let workflow = OrderWorkflow::new(store, directory, mailer, config.workflow_config());

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(workflow, server_cfg).await?;
    http.run().await
}
