pub mod export;
pub mod loader;

pub use export::{write_csv, write_csv_file};
pub use loader::load_records;
