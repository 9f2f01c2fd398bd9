//! Field encoding and transaction construction for itemset mining.
//!
//! Each fixed-width record is split into configured fields, every field is
//! encoded into a canonical item name (binary / categorical / continuous
//! discretization), and the items form one deduplicated, name-ordered
//! transaction with a sequential ID. A running unique-item count is kept
//! across all transactions.

pub mod builder;
pub mod encode;
pub mod error;
pub mod intervals;
pub mod preprocessor;

pub use builder::{IdPolicy, TransactionBuilder};
pub use encode::{OTHERS_LABEL, encode};
pub use error::EncodeError;
pub use intervals::{Interval, IntervalTable};
pub use preprocessor::Preprocessor;
