use anyhow::Result;
use pluggy_api::Client;

pub async fn run(client: &Client) -> Result<()> {
    let token = client.create_connect_token(None, None).await?;
    println!("Successfully created connect token: {}", token.access_token);
    Ok(())
}
