pub mod date;
pub mod error;
pub mod fields;
pub mod history;

// Re-exports
pub use date::{days_between, parse, parse_value, weekday_of, CalendarDate};
pub use error::{Error, Result};
pub use fields::RequestFields;
pub use history::{HistoryRecord, Ledger, PageSize};
