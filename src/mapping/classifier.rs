use crate::models::SchemaVariant;
use crate::parser::ParsedRecord;

/// A record is a newspaper issue if it has a volume `detail` element.
pub fn is_newspaper_issue(record: &ParsedRecord) -> bool {
    record.find_with_attr("detail", "type", "volume").is_some()
}

pub fn classify(record: &ParsedRecord) -> SchemaVariant {
    if is_newspaper_issue(record) {
        SchemaVariant::NewspaperIssue
    } else {
        SchemaVariant::GenericItem
    }
}
