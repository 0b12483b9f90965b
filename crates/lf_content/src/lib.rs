pub mod table;

pub use table::{ContentTable, DEFAULT_LOCALE};
