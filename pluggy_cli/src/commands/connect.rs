//! End-to-end sandbox connect flow: create an item against the sandbox
//! connector, poll until the server finishes executing it (answering the MFA
//! challenge if one appears), then walk the retrieved data and clean up.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use pluggy_api::{
    types::{ItemStatus, Parameters},
    Client, Error, TransactionFilters,
};

const POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Args)]
pub struct ConnectArgs {
    /// Connector to execute (0 is the sandbox Pluggy Bank)
    #[arg(long, default_value_t = 0)]
    pub connector_id: i64,

    /// Sandbox user credential
    #[arg(long, default_value = "user-ok")]
    pub user: String,

    /// Sandbox password credential
    #[arg(long, default_value = "password-ok")]
    pub password: String,

    /// Value submitted if the connector asks for MFA
    #[arg(long, default_value = "123456")]
    pub mfa_value: String,

    /// Keep the item instead of deleting it at the end
    #[arg(long)]
    pub keep: bool,
}

pub async fn run(args: &ConnectArgs, base_client: &Client, base_url: &str) -> Result<()> {
    // Items are connected with a scoped token, never the raw API key.
    let token = base_client.create_connect_token(None, None).await?;
    let client = Client::with_base_url(base_url, token.access_token)?;

    let connector = client.fetch_connector(args.connector_id, false).await?;
    println!("Connecting with {}", connector.name);

    let credentials = Parameters::from([
        ("user".to_string(), args.user.clone()),
        ("password".to_string(), args.password.clone()),
    ]);
    let mut item = client
        .create_item(args.connector_id, &credentials, None)
        .await?;

    let start = Instant::now();
    let mut checks = 0;
    while !item.status.is_finished() {
        println!(
            "Item {} is syncing with the institution (status {}, check #{}, elapsed: {:?})",
            item.id,
            item.status,
            checks,
            start.elapsed()
        );
        checks += 1;
        tokio::time::sleep(POLL_INTERVAL).await;
        item = client.fetch_item(&item.id).await?;

        if item.status == ItemStatus::WaitingUserInput {
            let Some(parameter) = item.parameter.clone() else {
                continue;
            };
            println!("MFA requested: {}, providing value", parameter.name);
            let answer = Parameters::from([(parameter.name, args.mfa_value.clone())]);
            match client.update_item_mfa(&item.id, Some(&answer)).await {
                Ok(updated) => item = updated,
                // A rejected value keeps the item waiting; keep polling.
                Err(Error::ConnectorValidation { message, .. }) => {
                    println!("Connector rejected the MFA value: {message}");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    println!("Item completed execution with status {}", item.status);
    if item.status != ItemStatus::Updated {
        if let Some(error) = &item.error {
            println!("Execution error {}: {}", error.code, error.message);
        }
        return Ok(());
    }

    let accounts = client.fetch_accounts(&item.id, None).await?;
    for account in &accounts.results {
        println!(
            "Account {} ({}) has a balance of {}, its number is {}",
            account.id, account.name, account.balance, account.number
        );
        let transactions = client
            .fetch_transactions(&account.id, &TransactionFilters::default())
            .await?;
        for tx in &transactions.results {
            println!(
                "  Transaction {} made at {}, description: {}, amount: {}",
                tx.id, tx.date, tx.description, tx.amount
            );
        }
    }

    let identity = client.fetch_identity_by_item_id(&item.id).await?;
    println!(
        "Identity of the account owner is {}",
        identity.full_name.as_deref().unwrap_or("(unknown)")
    );

    if !args.keep {
        client.delete_item(&item.id).await?;
        println!("Item deleted successfully");
    }
    Ok(())
}
