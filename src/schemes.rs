use std::fmt;

use serde::Serialize;

use crate::dom::{AttributeKind, AttributeMatch, Inspectable, PathStyle, TEXT_LOCATABLE_TAGS};
use crate::escape::{css_attribute, css_ident, js_selector, js_string, py_string};
use crate::path::{build_path, xpath_expression};
use crate::prioritize::prioritize;

/// The three locator dialects, named after the frameworks that consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// CSS-based: `cy.get(...)`, `cy.contains(...)`.
    Cypress,
    /// Role/text-based: `page.getByRole(...)`, `page.locator(...)`.
    Playwright,
    /// Attribute/XPath-based: `driver.find_element(By..., ...)`.
    Selenium,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Cypress, Scheme::Playwright, Scheme::Selenium];

    /// The receiver every call in this scheme starts with.
    pub fn finder(&self) -> &'static str {
        match self {
            Self::Cypress => "cy",
            Self::Playwright => "page",
            Self::Selenium => "driver",
        }
    }

    pub fn format<N: Inspectable>(&self, element: &N) -> String {
        match self {
            Self::Cypress => css_scheme(element),
            Self::Playwright => role_scheme(element),
            Self::Selenium => xpath_scheme(element),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cypress => write!(f, "Cypress"),
            Self::Playwright => write!(f, "Playwright"),
            Self::Selenium => write!(f, "Selenium"),
        }
    }
}

impl AttributeMatch {
    /// CSS selector for this match; attribute values are quoted with `quote`.
    pub fn css_selector(&self, quote: char) -> String {
        match self.kind {
            AttributeKind::Id => format!("#{}", css_ident(&self.value)),
            AttributeKind::TestAttribute | AttributeKind::Name => {
                css_attribute(&self.attr_name, &self.value, quote)
            }
        }
    }
}

/// Cypress locator: stable attribute, then text for buttons/links, then a
/// lone class, then the structural CSS path.
pub fn css_scheme<N: Inspectable>(element: &N) -> String {
    let finder = Scheme::Cypress.finder();

    if let Some(m) = prioritize(element) {
        return format!("{finder}.get('{}')", js_selector(&m.css_selector('"')));
    }

    if let Some((tag, text)) = locatable_text(element) {
        return format!(
            "{finder}.contains('{}', '{}')",
            js_string(&tag),
            js_string(&text)
        );
    }

    if let [class] = element.class_list().as_slice() {
        return format!("{finder}.get('{}')", js_selector(&format!(".{}", css_ident(class))));
    }

    format!("{finder}.get('{}')", js_selector(&build_path(element, PathStyle::Css)))
}

/// Playwright locator. `id` outranks everything here, including test
/// attributes; then an explicit `role`, then text, then the CSS path.
pub fn role_scheme<N: Inspectable>(element: &N) -> String {
    let finder = Scheme::Playwright.finder();

    if let Some(id) = element.non_empty_attribute("id") {
        return format!("{finder}.locator('{}')", js_selector(&format!("#{}", css_ident(id))));
    }

    if let Some(role) = element.non_empty_attribute("role") {
        let text = element.trimmed_text();
        if text.is_empty() {
            return format!("{finder}.getByRole('{}')", js_string(role));
        }
        return format!(
            "{finder}.getByRole('{}', {{ name: '{}' }})",
            js_string(role),
            js_string(&text)
        );
    }

    if let Some((_, text)) = locatable_text(element) {
        return format!("{finder}.getByText('{}')", js_string(&text));
    }

    format!("{finder}.locator('{}')", js_selector(&build_path(element, PathStyle::Css)))
}

/// Selenium (Python) locator: stable attribute as a CSS selector, otherwise
/// an XPath built from same-tag sibling positions.
pub fn xpath_scheme<N: Inspectable>(element: &N) -> String {
    let finder = Scheme::Selenium.finder();

    if let Some(m) = prioritize(element) {
        return format!(
            "{finder}.find_element(By.CSS_SELECTOR, \"{}\")",
            py_string(&m.css_selector('\''))
        );
    }

    format!(
        "{finder}.find_element(By.XPATH, \"{}\")",
        py_string(&xpath_expression(element))
    )
}

/// Tag and trimmed text for `button`/`a` elements that have visible text.
fn locatable_text<N: Inspectable>(element: &N) -> Option<(String, String)> {
    let tag = element.tag_name();
    if !TEXT_LOCATABLE_TAGS.contains(&tag.as_str()) {
        return None;
    }
    let text = element.trimmed_text();
    if text.is_empty() {
        None
    } else {
        Some((tag, text))
    }
}
