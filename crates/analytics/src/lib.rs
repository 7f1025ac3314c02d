//! Transaction analytics.
//!
//! Pure queries over a slice of [`Transaction`] records. Callers own the
//! data; nothing here holds module-level state.

pub mod query;
pub mod summary;
pub mod transaction;

pub use query::{
    average_amount, by_merchant, by_type, in_date_range, is_iso_date, total_amount, unique_types,
};
pub use summary::{DateRange, Summary};
pub use transaction::{Transaction, fixture, load_transactions};
