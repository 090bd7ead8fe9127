// 💳 BankAccount Entity - Customer name with validated balance mutations
//
// "Customer name is set once at construction, balance changes only through
//  debit and credit"
//
// Problem solved:
// - Balance can never go negative through a debit
// - Negative amounts are rejected for both operations
// - Rejected operations leave the balance untouched (no partial mutation)
// - Opening balance is stored verbatim (may start negative)

use serde::{Deserialize, Serialize};

// ============================================================================
// OUT OF RANGE ERROR
// ============================================================================

/// Validation failure raised when an operation's amount violates the
/// balance or sign constraint.
///
/// Raised synchronously at the point of violation and propagated directly
/// to the caller. Never transient, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutOfRange {
    /// The rejected amount.
    pub amount: f64,

    /// The balance at the time of rejection (unchanged by the failure).
    pub balance: f64,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "amount {} out of range for balance {}",
            self.amount, self.balance
        )
    }
}

impl std::error::Error for OutOfRange {}

// ============================================================================
// BANK ACCOUNT ENTITY
// ============================================================================

/// A customer's bank account.
///
/// Identity: customer name (never changes after construction)
/// Value: balance (changes only through `debit` / `credit`)
///
/// Both fields are private; all reads go through accessors and all writes
/// go through the two validated mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Customer who owns the account. Read-only after construction.
    customer_name: String,

    /// Current balance of the account.
    balance: f64,
}

impl BankAccount {
    /// Create a new account with an opening balance.
    ///
    /// Both arguments are stored verbatim: the opening balance is not
    /// validated (an account may legitimately start overdrawn) and the
    /// customer name is not checked for emptiness. Intentional leniency
    /// carried over from the documented behavior.
    ///
    /// # Example
    /// ```
    /// use bank_ledger::BankAccount;
    ///
    /// let account = BankAccount::new("Juan Pérez", 1000.0);
    /// assert_eq!(account.balance(), 1000.0);
    /// ```
    pub fn new(customer_name: impl Into<String>, balance: f64) -> Self {
        BankAccount {
            customer_name: customer_name.into(),
            balance,
        }
    }

    /// Customer who owns the account.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Current balance. No side effects.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Check if the account has a positive balance.
    pub fn is_positive(&self) -> bool {
        self.balance > 0.0
    }

    /// Check if the account is overdrawn (negative balance).
    ///
    /// Only reachable through a negative opening balance; `debit` never
    /// takes the balance below zero.
    pub fn is_overdrawn(&self) -> bool {
        self.balance < 0.0
    }

    /// Debit (withdraw) an amount from the account.
    ///
    /// Returns the updated balance, or `OutOfRange` when the amount
    /// exceeds the current balance or is negative. On failure the balance
    /// is unchanged.
    ///
    /// The amount-exceeds-balance check runs before the negative-amount
    /// check. Both map to the same error, so the ordering is not
    /// observable, but it mirrors the original validation sequence.
    ///
    /// # Example
    /// ```
    /// use bank_ledger::BankAccount;
    ///
    /// let mut account = BankAccount::new("Juan Pérez", 1000.0);
    /// account.debit(250.0).unwrap();
    /// assert_eq!(account.balance(), 750.0);
    /// ```
    pub fn debit(&mut self, amount: f64) -> Result<f64, OutOfRange> {
        if amount > self.balance {
            return Err(OutOfRange {
                amount,
                balance: self.balance,
            });
        }
        if amount < 0.0 {
            return Err(OutOfRange {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Credit (deposit) an amount to the account.
    ///
    /// Returns the updated balance, or `OutOfRange` when the amount is
    /// negative. On failure the balance is unchanged.
    ///
    /// # Example
    /// ```
    /// use bank_ledger::BankAccount;
    ///
    /// let mut account = BankAccount::new("Juan Pérez", 1000.0);
    /// account.credit(500.0).unwrap();
    /// assert_eq!(account.balance(), 1500.0);
    /// ```
    pub fn credit(&mut self, amount: f64) -> Result<f64, OutOfRange> {
        if amount < 0.0 {
            return Err(OutOfRange {
                amount,
                balance: self.balance,
            });
        }
        self.balance += amount;
        Ok(self.balance)
    }
}

// ============================================================================
// TESTS
// ============================================================================
