use anyhow::{Context, bail};

use stockledger_core::ItemId;

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        item_id: ItemId,
        quantity: i64,
        price: f64,
        user: String,
        name: String,
    },
    Remove {
        item_id: ItemId,
        quantity: i64,
        user: String,
    },
    List,
    Log,
    Total,
    /// List items holding at least this many units.
    Find { min_quantity: i64 },
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
///
/// Quantities are parsed as signed integers on purpose: sign checks belong to
/// the ledger, which reports them with the item id.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let cmd = match verb.as_str() {
        "add" => {
            if args.len() < 4 {
                bail!("usage: add <id> <quantity> <price> <user> [name...]");
            }
            Command::Add {
                item_id: args[0].parse()?,
                quantity: parse_int(args[1], "quantity")?,
                price: args[2]
                    .parse()
                    .with_context(|| format!("invalid price '{}'", args[2]))?,
                user: args[3].to_string(),
                name: args[4..].join(" "),
            }
        }
        "remove" => {
            if args.len() != 3 {
                bail!("usage: remove <id> <quantity> <user>");
            }
            Command::Remove {
                item_id: args[0].parse()?,
                quantity: parse_int(args[1], "quantity")?,
                user: args[2].to_string(),
            }
        }
        "find" => {
            if args.len() != 1 {
                bail!("usage: find <min-quantity>");
            }
            Command::Find {
                min_quantity: parse_int(args[0], "min-quantity")?,
            }
        }
        "list" => Command::List,
        "log" => Command::Log,
        "total" => Command::Total,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{other}'"),
    };

    Ok(Some(cmd))
}

fn parse_int(raw: &str, what: &str) -> anyhow::Result<i64> {
    raw.parse()
        .with_context(|| format!("invalid {what} '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_multi_word_name() {
        let cmd = parse_command("add 1 5 2.5 alice hex bolt").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                item_id: ItemId::new(1),
                quantity: 5,
                price: 2.5,
                user: "alice".to_string(),
                name: "hex bolt".to_string(),
            }
        );
    }

    #[test]
    fn keeps_negative_quantities_for_the_ledger_to_reject() {
        let cmd = parse_command("remove 3 -2 bob").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Remove {
                item_id: ItemId::new(3),
                quantity: -2,
                user: "bob".to_string(),
            }
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("# restock").unwrap(), None);
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("LIST").unwrap(), Some(Command::List));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(
            parse_command("find 10").unwrap(),
            Some(Command::Find { min_quantity: 10 })
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_command("add 1 5").is_err());
        assert!(parse_command("add x 5 1.0 alice").is_err());
        assert!(parse_command("remove 1 many bob").is_err());
        assert!(parse_command("sell 1").is_err());
    }
}
