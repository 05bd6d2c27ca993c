use ibc_client::prelude::*;
use ibc_client::presentation::fields::label_snapshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    let mut client = Client::new(Config::new())?;

    // The gateway wants the brokerage accounts listed before market data
    let accounts = client.run(&tasks::accounts::accounts()).await?;
    info!("Accounts: {}", accounts);

    let snapshot = SnapshotRequest::new(["265598"])
        .with_field(MarketDataField::LastPrice)
        .with_field(MarketDataField::BidPrice)
        .with_field(MarketDataField::AskPrice);
    let quote = client.run(&tasks::market_data::snapshot(&snapshot)).await?;
    info!("Snapshot: {}", label_snapshot(quote));

    client.shutdown().await;
    Ok(())
}
