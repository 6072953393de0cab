use std::io;

use stockledger_cli::Shell;
use stockledger_inventory::{LedgerConfig, StockLedger};

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = LedgerConfig::from_env();
    tracing::info!(
        stock_in_reason = %config.stock_in_reason,
        stock_out_reason = %config.stock_out_reason,
        "starting stock ledger shell"
    );

    let mut shell = Shell::new(StockLedger::with_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    shell.run(stdin.lock(), &mut stdout, &mut stderr)
}
