use super::cache::PerRecordCache;
use super::dates;
use super::groups::has_role;
use crate::constants::{
    APPROXIMATE_QUALIFIERS, CIRCA_MARKER, DEFAULT_GENRE_AUTHORITY, IMAGE_LINK_BASE,
    IMAGE_LINK_SEPARATOR, MARC_GENRE_AUTHORITY, NO_DATE,
};
use crate::errors::{AppError, AppResult};
use crate::parser::ParsedRecord;

/// Per-record state handed to every extractor.
#[derive(Debug)]
pub struct RecordContext<'a> {
    /// Zero-based position of the record in processing order.
    pub row_index: usize,
    /// File name of the record, without directories.
    pub file_name: &'a str,
    pub cache: PerRecordCache,
}

impl<'a> RecordContext<'a> {
    pub fn new(row_index: usize, file_name: &'a str) -> Self {
        Self {
            row_index,
            file_name,
            cache: PerRecordCache::new(),
        }
    }
}

/// A column value computed from the whole record rather than a single lookup.
pub type Extractor = fn(&ParsedRecord, &mut RecordContext<'_>) -> AppResult<Option<String>>;

/// Splits `<repoCode>_<objectNumber>.xml` into its two parts.
///
/// The `.xml` extension is stripped case-insensitively and the name is split
/// on the first underscore only.
///
/// # Errors
///
/// Returns `InvalidInput` if the name has no underscore.
pub fn repo_and_number(file_name: &str) -> AppResult<(&str, &str)> {
    let stem = match file_name.len().checked_sub(4) {
        Some(cut)
            if file_name
                .get(cut..)
                .is_some_and(|ext| ext.eq_ignore_ascii_case(".xml")) =>
        {
            &file_name[..cut]
        }
        _ => file_name,
    };

    stem.split_once('_').ok_or_else(|| {
        AppError::InvalidInput(format!(
            "File name '{file_name}' does not follow <repoCode>_<objectNumber>.xml"
        ))
    })
}

pub fn key(_: &ParsedRecord, ctx: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    Ok(Some((ctx.row_index + 1).to_string()))
}

pub fn pid(_: &ParsedRecord, ctx: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    let (repo, number) = repo_and_number(ctx.file_name)?;
    Ok(Some(format!("{repo}_{number}")))
}

pub fn image_link(_: &ParsedRecord, ctx: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    let (repo, number) = repo_and_number(ctx.file_name)?;
    Ok(Some(format!(
        "{IMAGE_LINK_BASE}{repo}{IMAGE_LINK_SEPARATOR}{number}"
    )))
}

/// The record title, with `, ca. <date>` appended when the date is approximate.
///
/// The suffix is added only if some `dateIssued` carries an approximate
/// qualifier, the effective date is not `n.d.`, and the title does not
/// already contain the marker.
pub fn title(record: &ParsedRecord, _: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    let Some(base) = record.find_text("title") else {
        return Ok(None);
    };

    let approximate = record.find_all("dateIssued").any(|el| {
        el.attr("qualifier")
            .is_some_and(|q| APPROXIMATE_QUALIFIERS.contains(&q))
    });
    if !approximate || base.contains(CIRCA_MARKER) {
        return Ok(Some(base));
    }

    let date = dates::date_created(record)?;
    if date == NO_DATE {
        Ok(Some(base))
    } else {
        Ok(Some(format!("{base}{CIRCA_MARKER}{date}")))
    }
}

pub fn date_created(record: &ParsedRecord, _: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    dates::date_created(record).map(Some)
}

/// Extent up to the first `;`, minus the character just before it.
pub fn extent(record: &ParsedRecord, _: &mut RecordContext<'_>) -> AppResult<Option<String>> {
    Ok(record.find_text("extent").map(|ext| truncate_extent(&ext)))
}

fn truncate_extent(ext: &str) -> String {
    let chars: Vec<char> = ext.chars().collect();
    match chars.iter().position(|&c| c == ';') {
        Some(0) => chars[..chars.len() - 1].iter().collect(),
        Some(k) => chars[..k - 1].iter().collect(),
        None => ext.to_string(),
    }
}

/// Name parts of the top-level corporate creator and contributor.
///
/// A name with a `creator` role counts only as creator, even if it also
/// carries `contributor`. For each role the last matching name wins.
fn corporate_roles(record: &ParsedRecord) -> AppResult<(Option<String>, Option<String>)> {
    let (mut creator, mut contributor) = (None, None);
    for name in record.select("mods > name[type=corporate]")? {
        let slot = if has_role(name, "creator") {
            &mut creator
        } else if has_role(name, "contributor") {
            &mut contributor
        } else {
            continue;
        };
        if let Some(part) = name.find("namePart") {
            *slot = Some(part.text().trim().to_string());
        }
    }
    Ok((creator, contributor))
}

pub fn corporate_creator(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    corporate_roles(record).map(|(creator, _)| creator)
}

pub fn corporate_contributor(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    corporate_roles(record).map(|(_, contributor)| contributor)
}

/// First `geographic` that is not the coordinates wrapper.
pub fn subject_geographic(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    Ok(record
        .find_all("geographic")
        .find(|el| el.find("cartographics").is_none())
        .map(|el| el.text().trim().to_string()))
}

pub fn genre_authority(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    if record.find("genre").is_none() {
        return Ok(None);
    }
    let authority = if record
        .find_with_attr("genre", "authority", MARC_GENRE_AUTHORITY)
        .is_some()
    {
        MARC_GENRE_AUTHORITY
    } else {
        DEFAULT_GENRE_AUTHORITY
    };
    Ok(Some(authority.to_string()))
}

// recordOrigin and recordCreationDate are emitted together or not at all.
fn record_info(record: &ParsedRecord) -> Option<(String, String)> {
    Some((
        record.find_text("recordOrigin")?,
        record.find_text("recordCreationDate")?,
    ))
}

pub fn record_origin(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    Ok(record_info(record).map(|(origin, _)| origin))
}

pub fn record_creation_date(
    record: &ParsedRecord,
    _: &mut RecordContext<'_>,
) -> AppResult<Option<String>> {
    Ok(record_info(record).map(|(_, created)| created))
}
