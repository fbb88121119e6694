use super::selector::Selector;
use crate::errors::AppResult;
use roxmltree::{Document, Node};

/// A parsed MODS document.
///
/// Tags are matched on their local name, so `mods:title` and `title` are the
/// same tag. Queries walk elements in document order, so "first match" means
/// first in the file.
#[derive(Debug)]
pub struct ParsedRecord<'input> {
    doc: Document<'input>,
}

/// Borrowed handle to one element of a [`ParsedRecord`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'input> ParsedRecord<'input> {
    /// Parses one XML document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with the line and column of the first problem.
    pub fn parse(xml: &'input str) -> AppResult<Self> {
        Ok(Self {
            doc: Document::parse(xml)?,
        })
    }

    /// The document element.
    pub fn root(&self) -> Element<'_, 'input> {
        Element {
            node: self.doc.root_element(),
        }
    }

    /// All elements in document order, the root included.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_, 'input>> {
        self.doc
            .descendants()
            .filter(Node::is_element)
            .map(|node| Element { node })
    }

    /// First element with the given tag name.
    pub fn find(&self, tag: &str) -> Option<Element<'_, 'input>> {
        self.elements().find(|el| el.name() == tag)
    }

    /// First element with the given tag name and attribute value.
    pub fn find_with_attr(
        &self,
        tag: &str,
        attr: &str,
        value: &str,
    ) -> Option<Element<'_, 'input>> {
        self.elements()
            .find(|el| el.name() == tag && el.attr(attr) == Some(value))
    }

    /// Every element with the given tag name.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Element<'a, 'input>> + 'a {
        self.elements().filter(move |el| el.name() == tag)
    }

    /// Elements matching a structural selector such as `subject > name[type=corporate]`.
    pub fn select(&self, selector: &str) -> AppResult<Vec<Element<'_, 'input>>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .elements()
            .filter(|el| selector.matches(el.node))
            .collect())
    }

    /// Trimmed text of the first element matching `selector`.
    pub fn select_text(&self, selector: &str) -> AppResult<Option<String>> {
        Ok(self
            .select(selector)?
            .first()
            .map(|el| el.text().trim().to_string()))
    }

    /// Trimmed text of the first element with the given tag name.
    pub fn find_text(&self, tag: &str) -> Option<String> {
        self.find(tag).map(|el| el.text().trim().to_string())
    }
}

impl<'a, 'input> Element<'a, 'input> {
    /// Local tag name.
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.node.attribute(key)
    }

    pub fn parent(&self) -> Option<Element<'a, 'input>> {
        self.node.parent_element().map(|node| Element { node })
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = Element<'a, 'input>> {
        self.node
            .children()
            .filter(Node::is_element)
            .map(|node| Element { node })
    }

    /// All nested elements in document order, excluding `self`.
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a, 'input>> {
        self.node
            .descendants()
            .skip(1)
            .filter(Node::is_element)
            .map(|node| Element { node })
    }

    /// First nested element with the given tag name.
    pub fn find(&self, tag: &str) -> Option<Element<'a, 'input>> {
        self.descendants().find(|el| el.name() == tag)
    }

    /// First nested element with the given tag name and attribute value.
    pub fn find_with_attr(&self, tag: &str, attr: &str, value: &str) -> Option<Element<'a, 'input>> {
        self.descendants()
            .find(|el| el.name() == tag && el.attr(attr) == Some(value))
    }

    /// Concatenated text of this element and all of its descendants, untrimmed.
    pub fn text(&self) -> String {
        self.node
            .descendants()
            .filter(Node::is_text)
            .filter_map(|node| node.text())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        r#"<mods><name type="personal"><namePart>A</namePart> <namePart>B</namePart></name><title>T</title></mods>"#;

    fn sample() -> ParsedRecord<'static> {
        ParsedRecord::parse(SAMPLE).unwrap()
    }

    #[test]
    fn text_concatenates_descendants() {
        let record = sample();
        assert_eq!(record.find("name").unwrap().text(), "A B");
        assert_eq!(record.root().text(), "A BT");
    }

    #[test]
    fn descendants_are_scoped_to_subtree() {
        let record = sample();
        let name = record.find("name").unwrap();
        let names: Vec<_> = name.descendants().map(|e| e.name()).collect();
        assert_eq!(names, vec!["namePart", "namePart"]);
        assert!(name.find("title").is_none());
    }

    #[test]
    fn find_with_attr_filters_on_value() {
        let record = sample();
        assert!(record.find_with_attr("name", "type", "personal").is_some());
        assert!(record.find_with_attr("name", "type", "corporate").is_none());
    }

    #[test]
    fn parent_and_children_links() {
        let record = sample();
        let part = record.find("namePart").unwrap();
        assert_eq!(part.parent().unwrap().name(), "name");
        assert_eq!(record.root().children().count(), 2);
        assert!(record.root().parent().is_none());
    }

    #[test]
    fn comments_are_not_text() {
        let record = ParsedRecord::parse("<mods><note>a<!-- skip -->b</note></mods>").unwrap();
        assert_eq!(record.find_text("note"), Some("ab".to_string()));
    }
}
