//! Shopping cart module.
//!
//! The cart is a ledger of variant ids, one entry per unit added.

mod ledger;

pub use ledger::CartLedger;
