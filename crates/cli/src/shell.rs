use std::io::{BufRead, Write};

use stockledger_core::find_by;
use stockledger_inventory::{Item, StockLedger};

use crate::command::{Command, parse_command};

/// Drives a `StockLedger` from text commands.
#[derive(Debug, Default)]
pub struct Shell {
    ledger: StockLedger,
}

impl Shell {
    pub fn new(ledger: StockLedger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Process every line of `input` until EOF or `quit`.
    ///
    /// Parse and ledger failures go to `err` and processing continues; only
    /// I/O failures abort.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> anyhow::Result<()> {
        for (lineno, line) in input.lines().enumerate() {
            let line = line?;
            let cmd = match parse_command(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(err, "line {}: {e:#}", lineno + 1)?;
                    continue;
                }
            };

            if cmd == Command::Quit {
                break;
            }

            if let Err(e) = self.execute(cmd, out) {
                writeln!(err, "line {}: {e}", lineno + 1)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Execute one command, writing its output to `out`.
    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> anyhow::Result<()> {
        match cmd {
            Command::Add {
                item_id,
                quantity,
                price,
                user,
                name,
            } => {
                let item = Item {
                    id: item_id,
                    name,
                    quantity,
                    price,
                };
                self.ledger.add_stock(item, &user)?;
                writeln!(out, "ok")?;
            }
            Command::Remove {
                item_id,
                quantity,
                user,
            } => {
                self.ledger.remove_stock(item_id, quantity, &user)?;
                writeln!(out, "ok")?;
            }
            Command::List => {
                let mut items = self.ledger.list_items();
                items.sort_by_key(|i| i.id);
                write_items(out, &items)?;
            }
            Command::Find { min_quantity } => {
                let mut items = find_by(&self.ledger.list_items(), |i| i.quantity >= min_quantity)?;
                items.sort_by_key(|i| i.id);
                write_items(out, &items)?;
            }
            Command::Log => {
                for entry in self.ledger.view_audit_log() {
                    writeln!(out, "{}", serde_json::to_string(entry)?)?;
                }
            }
            Command::Total => {
                writeln!(out, "{:.2}", self.ledger.calculate_total_cost())?;
            }
            Command::Quit => {}
        }
        Ok(())
    }
}

fn write_items(out: &mut impl Write, items: &[Item]) -> std::io::Result<()> {
    for item in items {
        writeln!(
            out,
            "{}\t{}\t{:.2}\t{}",
            item.id, item.quantity, item.price, item.name
        )?;
    }
    Ok(())
}
