use super::groups::FieldGroup;
use crate::errors::AppResult;
use crate::parser::ParsedRecord;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::trace;

/// Memoized field-group values for exactly one record.
///
/// A group is populated in full the first time any of its columns is looked
/// up and served from memory afterwards. A cache is built per record and
/// dropped with it, so values never carry over to the next file.
#[derive(Debug, Default)]
pub struct PerRecordCache {
    groups: HashMap<FieldGroup, HashMap<String, String>>,
}

impl PerRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `column` within `group`, populating the group from
    /// `record` on first access.
    ///
    /// # Errors
    ///
    /// Propagates selector errors raised while populating the group.
    pub fn lookup(
        &mut self,
        group: FieldGroup,
        column: &str,
        record: &ParsedRecord,
    ) -> AppResult<Option<String>> {
        let values = match self.groups.entry(group) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let values = group.populate(record)?;
                trace!(group = group.name(), values = values.len(), "Populated field group");
                entry.insert(values)
            }
        };
        Ok(values.get(column).cloned())
    }

    #[cfg(test)]
    fn is_populated(&self, group: FieldGroup) -> bool {
        self.groups.contains_key(&group)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> String {
        let subjects: String = names
            .iter()
            .map(|t| format!("<subject><topic>{t}</topic></subject>"))
            .collect();
        format!("<mods>{subjects}</mods>")
    }

    #[test]
    fn lookup_populates_group_once() {
        let xml = topics(&["Mining", "Logging"]);
        let record = ParsedRecord::parse(&xml).unwrap();
        let mut cache = PerRecordCache::new();
        assert!(cache.is_empty());

        let first = cache
            .lookup(FieldGroup::TopicalSubjects, "Subject2_Topic", &record)
            .unwrap();
        assert_eq!(first.as_deref(), Some("Logging"));
        assert!(cache.is_populated(FieldGroup::TopicalSubjects));
        assert!(!cache.is_populated(FieldGroup::Languages));

        // Served from memory even when asked against another record.
        let empty = topics(&[]);
        let other = ParsedRecord::parse(&empty).unwrap();
        let again = cache
            .lookup(FieldGroup::TopicalSubjects, "Subject1_Topic", &other)
            .unwrap();
        assert_eq!(again.as_deref(), Some("Mining"));
    }

    #[test]
    fn missing_column_is_absent() {
        let xml = topics(&["Mining"]);
        let record = ParsedRecord::parse(&xml).unwrap();
        let mut cache = PerRecordCache::new();
        let value = cache
            .lookup(FieldGroup::TopicalSubjects, "Subject4_Topic", &record)
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn fresh_cache_does_not_see_previous_record() {
        let (xml_a, xml_b) = (topics(&["One", "Two", "Three"]), topics(&["Only"]));
        let a = ParsedRecord::parse(&xml_a).unwrap();
        let b = ParsedRecord::parse(&xml_b).unwrap();

        let mut cache = PerRecordCache::new();
        cache
            .lookup(FieldGroup::TopicalSubjects, "Subject1_Topic", &a)
            .unwrap();

        let mut cache = PerRecordCache::new();
        let second = cache
            .lookup(FieldGroup::TopicalSubjects, "Subject2_Topic", &b)
            .unwrap();
        assert_eq!(second, None);
    }
}
