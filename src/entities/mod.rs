// Entity Models
//
// Each entity has:
// - An identity fixed at construction (customer name)
// - Mutable values reachable only through validated operations

pub mod account;

pub use account::{BankAccount, OutOfRange};
