use ibc_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let account_id = env::var("IBC_ACCOUNT_ID").unwrap_or_else(|_| "U1234567".to_string());
    let mut client = Client::new(Config::new())?;

    let handles = vec![
        client
            .submit(tasks::portfolio::account_summary(&account_id))
            .await?,
        client
            .submit(tasks::portfolio::account_ledger(&account_id))
            .await?,
        client
            .submit(tasks::portfolio::portfolio_positions(
                &PositionsRequest::new(&account_id)
                    .with_sort(SortField::UnrealizedPnl)
                    .with_direction(SortDirection::Descending),
            ))
            .await?,
    ];

    for handle in handles {
        let outcome = handle.outcome().await?;
        let elapsed = outcome.completed_at - outcome.submitted_at;
        match outcome.result {
            Ok(value) => info!(
                "{} [{}] in {}ms: {}",
                outcome.name,
                outcome.id,
                elapsed.num_milliseconds(),
                value
            ),
            Err(e) => warn!("{} [{}] failed: {}", outcome.name, outcome.id, e),
        }
    }

    client.shutdown().await;
    Ok(())
}
