use std::fmt;

use scraper::ElementRef;
use serde::Serialize;

/// Test attributes consulted after `id`, in priority order.
pub const TEST_ATTRIBUTES: &[&str] = &["data-cy", "data-test", "data-testid"];

/// Tags whose visible text is a good enough locator on its own.
pub const TEXT_LOCATABLE_TAGS: &[&str] = &["button", "a"];

/// Read-only view of a document node, as much as locator synthesis needs.
///
/// Implementations must answer from the live tree on every call; the engine
/// never holds on to a node between synthesis calls.
pub trait Inspectable: Clone + PartialEq {
    /// Lower-case tag name, e.g. `"button"`.
    fn tag_name(&self) -> String;

    /// Raw attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The parent *element*. Document and fragment roots are not elements.
    fn parent_element(&self) -> Option<Self>;

    /// Element children in document order (text and comments skipped).
    fn child_elements(&self) -> Vec<Self>;

    /// Concatenated descendant text, like DOM `textContent`.
    fn text_content(&self) -> String;

    /// Attribute value, treating the empty string as absent.
    fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|v| !v.is_empty())
    }

    /// Whitespace-separated class tokens.
    fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// `text_content` with surrounding whitespace removed.
    fn trimmed_text(&self) -> String {
        self.text_content().trim().to_string()
    }
}

impl<'a> Inspectable for ElementRef<'a> {
    fn tag_name(&self) -> String {
        self.value().name().to_ascii_lowercase()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

/// Which stable attribute produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Id,
    TestAttribute,
    Name,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::TestAttribute => write!(f, "test-attribute"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// The first stable attribute found on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeMatch {
    pub kind: AttributeKind,
    pub attr_name: String,
    pub value: String,
}

/// Token format used by the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Css,
    Xpath,
}

/// Element summary shown next to the locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ElementInfo {
    pub fn describe<N: Inspectable>(element: &N) -> Self {
        Self {
            tag: element.tag_name(),
            id: element.non_empty_attribute("id").map(String::from),
            classes: element.class_list().into_iter().map(String::from).collect(),
            value: element.non_empty_attribute("value").map(String::from),
        }
    }
}

/// Locators for one element, one per scheme.
///
/// Produced fresh for every synthesis call and superseded, never merged, by
/// the next one.
#[derive(Debug, Clone, Serialize)]
pub struct SelectorResult<N> {
    #[serde(skip)]
    pub element: N,
    pub info: ElementInfo,
    /// Cypress locator.
    pub css_scheme: String,
    /// Playwright locator.
    pub role_scheme: String,
    /// Selenium (Python) locator.
    pub xpath_scheme: String,
}
