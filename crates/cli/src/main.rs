use std::io;

use anyhow::Context;

use stockroom_cli::{Session, Settings};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    stockroom_observability::init(&settings.log_config());

    tracing::info!(currency = %settings.currency_symbol, "starting inventory session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), Inventory::new(), settings);
    session.run().context("inventory session failed")?;

    tracing::info!("inventory session ended");
    Ok(())
}
