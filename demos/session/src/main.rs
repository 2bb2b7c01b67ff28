use ig_session::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let epic = env::args()
        .nth(1)
        .unwrap_or_else(|| "CS.D.EURUSD.CFD.IP".to_string());

    let detail = SessionClient::scoped(Config::new(), async |client: &SessionClient| {
        let accounts = client.get_accounts().await?;
        info!("Accounts: {}", accounts);
        client.get_market_detail(&epic).await
    })
    .await?;

    info!(
        "{}: bid {} / offer {}",
        epic, detail["snapshot"]["bid"], detail["snapshot"]["offer"]
    );
    Ok(())
}
