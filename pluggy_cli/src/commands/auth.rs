use anyhow::Result;
use pluggy_api::{Client, ConnectorFilters};

pub async fn run(client: &Client) -> Result<()> {
    match client
        .fetch_connectors(&ConnectorFilters::default(), false)
        .await
    {
        Ok(_) => println!("Successfully connected to the API using the configured API key"),
        Err(err) => println!("Can't communicate with the API, please review your API key: {err}"),
    }
    Ok(())
}
