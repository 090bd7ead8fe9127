use anyhow::{bail, Context, Result};
use std::env;

use bank_ledger::BankAccount;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <customer-name> <opening-balance> [debit=AMT|credit=AMT ...]", args[0]);
        std::process::exit(1);
    }

    let customer_name = &args[1];
    let opening_balance: f64 = args[2]
        .parse()
        .with_context(|| format!("Invalid opening balance: {}", args[2]))?;

    run_ledger(customer_name, opening_balance, &args[3..])
}

fn run_ledger(customer_name: &str, opening_balance: f64, operations: &[String]) -> Result<()> {
    println!("🏦 Bank Ledger v{}", bank_ledger::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Open account
    let mut account = BankAccount::new(customer_name, opening_balance);
    println!("\n📂 Opened account for {}", account.customer_name());
    println!("✓ Opening balance: {:.2}", account.balance());
    if account.is_overdrawn() {
        println!("⚠️  Account starts overdrawn");
    }

    // 2. Apply operations in order; a rejected operation is reported and
    //    skipped, it does not abort the run.
    let mut applied = 0usize;
    let mut rejected = 0usize;
    for op in operations {
        let (kind, amount) = parse_operation(op)?;
        let outcome = match kind {
            OperationKind::Debit => account.debit(amount),
            OperationKind::Credit => account.credit(amount),
        };
        match outcome {
            Ok(balance) => {
                applied += 1;
                println!("✓ {} {:.2} → balance {:.2}", kind.verb(), amount, balance);
            }
            Err(e) => {
                rejected += 1;
                eprintln!("❌ {} {:.2} rejected: {}", kind.verb(), amount, e);
            }
        }
    }

    // 3. Final state
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Applied {} operations, rejected {}", applied, rejected);
    println!("✓ Final balance: {:.2}", account.balance());
    println!("\n{}", serde_json::to_string_pretty(&account)?);

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum OperationKind {
    Debit,
    Credit,
}

impl OperationKind {
    fn verb(&self) -> &'static str {
        match self {
            OperationKind::Debit => "Debit",
            OperationKind::Credit => "Credit",
        }
    }
}

/// Parse an operation argument of the form `debit=AMT` or `credit=AMT`.
fn parse_operation(op: &str) -> Result<(OperationKind, f64)> {
    let Some((kind, amount)) = op.split_once('=') else {
        bail!("Invalid operation (expected debit=AMT or credit=AMT): {}", op);
    };

    let amount: f64 = amount
        .parse()
        .with_context(|| format!("Invalid amount in operation: {}", op))?;

    match kind {
        "debit" => Ok((OperationKind::Debit, amount)),
        "credit" => Ok((OperationKind::Credit, amount)),
        other => bail!("Unknown operation '{}' (expected debit or credit)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() {
        let (kind, amount) = parse_operation("debit=4.55").unwrap();
        assert!(matches!(kind, OperationKind::Debit));
        assert_eq!(amount, 4.55);

        let (kind, amount) = parse_operation("credit=25").unwrap();
        assert!(matches!(kind, OperationKind::Credit));
        assert_eq!(amount, 25.0);
    }

    #[test]
    fn test_parse_operation_rejects_malformed() {
        assert!(parse_operation("debit").is_err());
        assert!(parse_operation("transfer=10").is_err());
        assert!(parse_operation("debit=ten").is_err());
    }
}
