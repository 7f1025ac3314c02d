use anyhow::Context;
use satchel_demo::{DemoConfig, showcase};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    satchel_observability::init(config.log_format);
    config.warn_on_fallbacks();

    showcase::inventory();

    let txs = config
        .load_transactions()
        .context("loading transactions")?;
    showcase::analytics(&txs)?;

    Ok(())
}
