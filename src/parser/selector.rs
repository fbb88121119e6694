use crate::errors::{AppError, AppResult};
use roxmltree::Node;
use std::iter::Peekable;
use std::str::Chars;

/// How a step relates to the step before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// `tag[attr=value][attr]`; a tag of `*` matches any element.
#[derive(Debug)]
struct Compound {
    tag: Option<String>,
    attributes: Vec<(String, Option<String>)>,
}

#[derive(Debug)]
struct Step {
    combinator: Combinator,
    compound: Compound,
}

/// A small CSS-style selector over XML element nodes.
///
/// Supports type selectors, attribute presence/equality filters and the
/// descendant (whitespace) and child (`>`) combinators, which covers every
/// structural lookup the field rules need.
#[derive(Debug)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn parse(input: &str) -> AppResult<Self> {
        let invalid =
            |reason: &str| AppError::SelectorError(format!("Invalid selector '{input}': {reason}"));

        let mut steps = Vec::new();
        let mut pending = Combinator::Descendant;
        let mut chars = input.chars().peekable();

        loop {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            match chars.peek() {
                None => break,
                Some('>') => {
                    if steps.is_empty() || pending == Combinator::Child {
                        return Err(invalid("misplaced '>'"));
                    }
                    chars.next();
                    pending = Combinator::Child;
                }
                Some(_) => {
                    let compound = parse_compound(&mut chars).map_err(|r| invalid(&r))?;
                    steps.push(Step {
                        combinator: pending,
                        compound,
                    });
                    pending = Combinator::Descendant;
                }
            }
        }

        if steps.is_empty() {
            return Err(invalid("empty selector"));
        }
        if pending == Combinator::Child {
            return Err(invalid("trailing '>'"));
        }
        Ok(Self { steps })
    }

    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        node.is_element() && self.matches_step(node, self.steps.len() - 1)
    }

    fn matches_step(&self, element: Node<'_, '_>, idx: usize) -> bool {
        let step = &self.steps[idx];
        if !step.compound.matches(element) {
            return false;
        }
        if idx == 0 {
            return true;
        }
        match step.combinator {
            Combinator::Child => element
                .parent_element()
                .is_some_and(|p| self.matches_step(p, idx - 1)),
            Combinator::Descendant => {
                let mut ancestor = element.parent_element();
                while let Some(a) = ancestor {
                    if self.matches_step(a, idx - 1) {
                        return true;
                    }
                    ancestor = a.parent_element();
                }
                false
            }
        }
    }
}

impl Compound {
    fn matches(&self, element: Node<'_, '_>) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag_name().name() != tag.as_str() {
                return false;
            }
        }
        self.attributes.iter().all(|(key, value)| match value {
            Some(v) => element.attribute(key.as_str()) == Some(v.as_str()),
            None => element.has_attribute(key.as_str()),
        })
    }
}

fn parse_compound(chars: &mut Peekable<Chars<'_>>) -> Result<Compound, String> {
    let mut tag = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || c == '[' || c == '>' {
            break;
        }
        tag.push(c);
        chars.next();
    }

    let mut attributes = Vec::new();
    while chars.peek() == Some(&'[') {
        chars.next();
        let mut body = String::new();
        let mut quote: Option<char> = None;
        loop {
            match chars.next() {
                None => return Err("unterminated '['".to_string()),
                Some(c) if quote == Some(c) => quote = None,
                Some(c @ ('"' | '\'')) if quote.is_none() => quote = Some(c),
                Some(']') if quote.is_none() => break,
                Some(c) => body.push(c),
            }
        }
        match body.split_once('=') {
            Some((key, value)) => {
                attributes.push((key.trim().to_string(), Some(value.trim().to_string())))
            }
            None => attributes.push((body.trim().to_string(), None)),
        }
    }

    if tag.is_empty() && attributes.is_empty() {
        return Err("expected a tag or attribute filter".to_string());
    }

    Ok(Compound {
        tag: match tag.as_str() {
            "" | "*" => None,
            _ => Some(tag),
        },
        attributes,
    })
}
