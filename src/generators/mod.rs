pub mod pattern;
pub mod row;

pub use pattern::{Pattern, Run, Runs};
pub use row::SymbolRow;
