use crate::errors::AppResult;
use crate::parser::{Element, ParsedRecord};
use std::collections::HashMap;

/// Repeatable fields that are extracted together and numbered in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// `Creator{n}_Given` / `Creator{n}_Family`
    Creators,
    /// `Contributor{n}_Given` / `Contributor{n}_Family`
    Contributors,
    /// `Subject{n}_Given` / `Subject{n}_Family`
    PersonalSubjects,
    /// `Subject{n}_Topic`
    TopicalSubjects,
    /// `CorporateSubject_{n}`
    CorporateSubjects,
    /// `Language{n}`
    Languages,
}

impl FieldGroup {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Creators => "creators",
            Self::Contributors => "contributors",
            Self::PersonalSubjects => "subjects-personal",
            Self::TopicalSubjects => "subjects-topical",
            Self::CorporateSubjects => "corporate-subjects",
            Self::Languages => "languages",
        }
    }

    /// Extracts every value of the group, keyed by column name.
    ///
    /// All matches are numbered, including ones past the last column a schema
    /// declares; those are simply never read.
    pub fn populate(&self, record: &ParsedRecord) -> AppResult<HashMap<String, String>> {
        match self {
            Self::Creators => {
                personal_names(record, "mods > name[type=personal]", Some("creator"), "Creator")
            }
            Self::Contributors => personal_names(
                record,
                "mods > name[type=personal]",
                Some("contributor"),
                "Contributor",
            ),
            Self::PersonalSubjects => {
                personal_names(record, "subject > name[type=personal]", None, "Subject")
            }
            Self::TopicalSubjects => Ok(numbered(record.find_all("topic"), |n| {
                format!("Subject{n}_Topic")
            })),
            Self::CorporateSubjects => Ok(numbered(
                record.select("subject > name[type=corporate]")?,
                |n| format!("CorporateSubject_{n}"),
            )),
            Self::Languages => Ok(numbered(record.find_all("languageTerm"), |n| {
                format!("Language{n}")
            })),
        }
    }
}

/// True if `name` carries a `roleTerm` whose text is exactly `role`.
pub(crate) fn has_role(name: Element<'_, '_>, role: &str) -> bool {
    name.descendants()
        .any(|el| el.name() == "roleTerm" && el.text().trim() == role)
}

fn numbered<'a, 'input: 'a>(
    elements: impl IntoIterator<Item = Element<'a, 'input>>,
    column: impl Fn(usize) -> String,
) -> HashMap<String, String> {
    elements
        .into_iter()
        .enumerate()
        .map(|(i, el)| (column(i + 1), el.text().trim().to_string()))
        .collect()
}

/// Given/family pairs of personal names, numbered among complete entries only.
///
/// A name lacking either part is skipped and does not use up a number.
fn personal_names(
    record: &ParsedRecord,
    selector: &str,
    role: Option<&str>,
    prefix: &str,
) -> AppResult<HashMap<String, String>> {
    let mut values = HashMap::new();
    let mut n = 0;

    for name in record.select(selector)? {
        if role.is_some_and(|role| !has_role(name, role)) {
            continue;
        }
        let given = name.find_with_attr("namePart", "type", "given");
        let family = name.find_with_attr("namePart", "type", "family");
        if let (Some(given), Some(family)) = (given, family) {
            n += 1;
            values.insert(format!("{prefix}{n}_Given"), given.text().trim().to_string());
            values.insert(format!("{prefix}{n}_Family"), family.text().trim().to_string());
        }
    }

    Ok(values)
}
