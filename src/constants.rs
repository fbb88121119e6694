// Repository links
pub const IMAGE_LINK_BASE: &str = "https://doh.arcabc.ca/islandora/object/";
pub const IMAGE_LINK_SEPARATOR: &str = "%3A";

// Dates
pub const NO_DATE: &str = "n.d.";
pub const LETTER_MONTH_DATE_PATTERN: &str = r"^[A-Z][a-z]{2}-[0-9]{2}$"; // e.g. Jun-17
pub const DAY_MONTH_YEAR_DATE_PATTERN: &str = r"^[0-9]{2}-[0-9]{2}-[1-2][0-9]{3}$"; // e.g. 21-01-1917
pub const APPROXIMATE_QUALIFIERS: &[&str] = &["Estimated", "approximate"];
pub const CIRCA_MARKER: &str = ", ca. ";

// Genre authorities
pub const MARC_GENRE_AUTHORITY: &str = "marcgt";
pub const DEFAULT_GENRE_AUTHORITY: &str = "aat";

// Output
pub const CSV_EXTENSION: &str = "csv";
