mod csv_writer;
mod file_finder;
mod record;
mod selector;
mod xml_parser;

// Re-export public API
pub use csv_writer::{rows_to_csv, write_csv};
pub use file_finder::find_mods_files;
pub use record::{Element, ParsedRecord};
pub use xml_parser::{parse_record_file, read_record_file};
