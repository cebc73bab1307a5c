pub mod dates;
pub mod history;
pub mod index;

/// Route identifiers written to the history ledger.
pub mod route {
    pub const BETWEEN: &str = "between";
    pub const WEEKDAY: &str = "weekday";
    pub const HISTORY: &str = "history";
}
