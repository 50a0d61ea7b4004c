use roster_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Roster Server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize state (stores, repositories, services)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server
    Server::with_state(config, state).run().await
}
