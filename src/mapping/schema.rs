use super::extractors::{self, Extractor, RecordContext};
use super::groups::FieldGroup;
use crate::errors::AppResult;
use crate::models::SchemaVariant;
use crate::parser::ParsedRecord;

/// How a column's value is located in a record.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Trimmed text of the first element with this tag.
    Find(&'static str),
    /// Trimmed text of the first element with this tag and attribute value.
    FindWithAttr {
        tag: &'static str,
        attr: &'static str,
        value: &'static str,
    },
    /// Trimmed text of the first element matching a structural selector.
    Select(&'static str),
    /// The column's entry in a numbered field group.
    Group(FieldGroup),
    Derived(Extractor),
}

impl Rule {
    pub fn apply(
        &self,
        column: &str,
        record: &ParsedRecord,
        ctx: &mut RecordContext<'_>,
    ) -> AppResult<Option<String>> {
        match *self {
            Rule::Find(tag) => Ok(record.find_text(tag)),
            Rule::FindWithAttr { tag, attr, value } => Ok(record
                .find_with_attr(tag, attr, value)
                .map(|el| el.text().trim().to_string())),
            Rule::Select(selector) => record.select_text(selector),
            Rule::Group(group) => ctx.cache.lookup(group, column, record),
            Rule::Derived(extractor) => extractor(record, ctx),
        }
    }
}

/// One output column. Columns without a rule are always written empty.
#[derive(Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub rule: Option<Rule>,
}

impl Column {
    const fn new(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule: Some(rule),
        }
    }

    const fn unmapped(name: &'static str) -> Self {
        Self { name, rule: None }
    }
}

const fn find(name: &'static str, tag: &'static str) -> Column {
    Column::new(name, Rule::Find(tag))
}

const fn find_attr(
    name: &'static str,
    tag: &'static str,
    attr: &'static str,
    value: &'static str,
) -> Column {
    Column::new(name, Rule::FindWithAttr { tag, attr, value })
}

const fn select(name: &'static str, selector: &'static str) -> Column {
    Column::new(name, Rule::Select(selector))
}

const fn group(name: &'static str, group: FieldGroup) -> Column {
    Column::new(name, Rule::Group(group))
}

const fn derived(name: &'static str, extractor: Extractor) -> Column {
    Column::new(name, Rule::Derived(extractor))
}

pub static GENERIC_ITEM_SCHEMA: [Column; 54] = [
    derived("key", extractors::key),
    derived("imageLink", extractors::image_link),
    derived("PID", extractors::pid),
    Column::unmapped("Filename"),
    Column::unmapped("Directory"),
    Column::unmapped("child_key"),
    derived("Title", extractors::title),
    select("AlternativeTitle", "titleInfo[type=alternative] > title"),
    group("Creator1_Given", FieldGroup::Creators),
    group("Creator1_Family", FieldGroup::Creators),
    derived("CorporateCreator", extractors::corporate_creator),
    group("Contributor1_Given", FieldGroup::Contributors),
    group("Contributor1_Family", FieldGroup::Contributors),
    derived("CorporateContributor", extractors::corporate_contributor),
    find("Publisher_Original", "publisher"),
    derived("DateCreated", extractors::date_created),
    find("Description", "abstract"),
    derived("Extent", extractors::extent),
    group("Subject1_Topic", FieldGroup::TopicalSubjects),
    group("Subject2_Topic", FieldGroup::TopicalSubjects),
    group("Subject3_Topic", FieldGroup::TopicalSubjects),
    group("Subject4_Topic", FieldGroup::TopicalSubjects),
    group("Subject5_Topic", FieldGroup::TopicalSubjects),
    derived("Subject_Geographic", extractors::subject_geographic),
    find("Coordinates", "cartographics"),
    group("Subject1_Given", FieldGroup::PersonalSubjects),
    group("Subject1_Family", FieldGroup::PersonalSubjects),
    group("Subject2_Given", FieldGroup::PersonalSubjects),
    group("Subject2_Family", FieldGroup::PersonalSubjects),
    group("Subject3_Given", FieldGroup::PersonalSubjects),
    group("Subject3_Family", FieldGroup::PersonalSubjects),
    group("CorporateSubject_1", FieldGroup::CorporateSubjects),
    group("CorporateSubject_2", FieldGroup::CorporateSubjects),
    find("DateRange", "temporal"),
    find("Genre", "genre"),
    derived("GenreAuthority", extractors::genre_authority),
    find("Type", "typeOfResource"),
    find("internetMediaType", "internetMediaType"),
    group("Language1", FieldGroup::Languages),
    group("Language2", FieldGroup::Languages),
    find("Notes", "note"),
    find_attr("AccessIdentifier", "identifier", "type", "access"),
    find_attr("LocalIdentifier", "identifier", "type", "local"),
    select("ISBN", "identifier[type=isbn]"),
    find("Classification", "classification"),
    select("URI", "identifier[type=uri]"),
    find("Source", "physicalLocation"),
    find_attr("Rights", "accessCondition", "displayLabel", "Restricted"),
    find_attr(
        "CreativeCommons_URI",
        "accessCondition",
        "displayLabel",
        "Creative Commons license",
    ),
    find_attr(
        "RightsStatement",
        "accessCondition",
        "displayLabel",
        "Rights Statement",
    ),
    select("relatedItem_Title", "relatedItem[type=host] > titleInfo > title"),
    select("relatedItem_PID", "relatedItem[type=host] > identifier"),
    derived("recordCreationDate", extractors::record_creation_date),
    derived("recordOrigin", extractors::record_origin),
];

pub static NEWSPAPER_ISSUE_SCHEMA: [Column; 10] = [
    derived("key", extractors::key),
    derived("imageLink", extractors::image_link),
    derived("PID", extractors::pid),
    derived("Title", extractors::title),
    derived("DateCreated", extractors::date_created),
    select("Volume", "detail[type=volume] > number"),
    select("Issue", "detail[type=issue] > number"),
    find("Publisher_Original", "publisher"),
    select("relatedItem_Title", "relatedItem[type=host] > titleInfo > title"),
    select("relatedItem_PID", "relatedItem[type=host] > identifier"),
];

/// The ordered columns of a schema variant.
pub fn columns(variant: SchemaVariant) -> &'static [Column] {
    match variant {
        SchemaVariant::GenericItem => &GENERIC_ITEM_SCHEMA,
        SchemaVariant::NewspaperIssue => &NEWSPAPER_ISSUE_SCHEMA,
    }
}

/// Column names of a schema variant, in output order.
pub fn header(variant: SchemaVariant) -> Vec<&'static str> {
    columns(variant).iter().map(|c| c.name).collect()
}
