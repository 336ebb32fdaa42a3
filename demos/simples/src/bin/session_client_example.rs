use api_session_client::prelude::*;
use api_session_client::utils::setup_logger;
use serde_json::json;
use tracing::{error, info};

async fn run(client: &mut SessionClient) -> Result<(), AppError> {
    info!("Logging in against {}", client.base_url());
    client.login().await?;
    info!("✓ Client logged in");

    let post = client.execute("/posts/1", Method::GET, None).await?;
    info!("Post 1: {}", post);

    let new_post = json!({
        "title": "Test Post",
        "body": "Test Content",
        "userId": 1
    });
    let created = client
        .execute("/posts", Method::POST, Some(new_post))
        .await?;
    info!("Created post: {}", created);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    let config = Config::from_env();
    info!("Starting session client example with config: {}", config);

    let mut client = SessionClient::new(config);
    let result = run(&mut client).await;

    info!("Cleaning up client");
    client.close();
    info!("Client closed");

    if let Err(e) = &result {
        error!("Example failed: {}", e);
    }
    result?;
    Ok(())
}
