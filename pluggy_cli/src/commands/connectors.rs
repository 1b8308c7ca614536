use anyhow::Result;
use clap::Args;
use pluggy_api::{Client, ConnectorFilters};
use tabled::{Table, Tabled};

#[derive(Args)]
pub struct ConnectorsArgs {
    /// Include sandbox connectors
    #[arg(long)]
    pub sandbox: bool,

    /// Filter by connector name (or part of it)
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by country code (repeatable)
    #[arg(long)]
    pub country: Vec<String>,

    /// Include connector health in the output
    #[arg(long)]
    pub health: bool,
}

#[derive(Tabled)]
struct ConnectorRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    connector_type: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Health")]
    health: String,
}

pub async fn run(args: &ConnectorsArgs, client: &Client) -> Result<()> {
    let mut filters = ConnectorFilters::default().with_countries(&args.country);
    if let Some(name) = &args.name {
        filters = filters.with_name(name);
    }
    if args.sandbox {
        filters = filters.with_sandbox(true);
    }

    let connectors = client.fetch_connectors(&filters, args.health).await?;
    let rows: Vec<ConnectorRow> = connectors
        .results
        .iter()
        .map(|c| ConnectorRow {
            id: c.id,
            name: c.name.clone(),
            connector_type: c.connector_type.to_string(),
            country: c.country.clone(),
            health: c
                .health
                .as_ref()
                .map(|h| h.status.clone())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
