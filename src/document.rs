use std::io::Read;

use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::dom::{Inspectable, SelectorResult, TEST_ATTRIBUTES};
use crate::engine::synthesize;

/// Attribute the browser front-end sets on the element under the pointer.
/// The engine never reads it, so it cannot leak into a locator.
pub const MARKER_ATTRIBUTE: &str = "data-selector-lens-target";

/// Tags that are worth a locator on a scan even without a role.
const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

/// Which elements of a document to synthesize locators for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'s> {
    /// Every element matching a CSS selector.
    Selector(&'s str),
    /// The element carrying [`MARKER_ATTRIBUTE`].
    Marked,
    /// Every interactive element, in document order.
    Interactive,
}

/// Parse an HTML document.
pub fn parse(html: &str) -> Html {
    debug!(html_len = html.len(), "parsing HTML");
    Html::parse_document(html)
}

/// Read HTML from a file path, or from stdin when `input` is `-`.
pub fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read HTML from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
}

/// Synthesize locators for each targeted element of `document`.
///
/// An unparsable selector is an error; a selector matching nothing is not.
pub fn inspect<'a>(
    document: &'a Html,
    target: Target<'_>,
) -> Result<Vec<SelectorResult<ElementRef<'a>>>> {
    let elements = find_targets(document, target)?;
    if elements.is_empty() {
        warn!(kind = ?target, "no element matched");
    }

    let results: Vec<_> = elements
        .iter()
        .filter_map(|el| synthesize(Some(el)))
        .collect();
    debug!(kind = ?target, results = results.len(), "inspection complete");
    Ok(results)
}

/// Convenience wrapper: parse `html` and inspect a single CSS-selected element.
///
/// Returns the owned locator strings for the first match, if any.
pub fn locate_first(html: &str, selector: &str) -> Result<Option<[String; 3]>> {
    let document = parse(html);
    let results = inspect(&document, Target::Selector(selector))?;
    Ok(results
        .into_iter()
        .next()
        .map(|r| [r.css_scheme, r.role_scheme, r.xpath_scheme]))
}

fn find_targets<'a>(document: &'a Html, target: Target<'_>) -> Result<Vec<ElementRef<'a>>> {
    match target {
        Target::Selector(css) => {
            let selector = parse_selector(css)?;
            Ok(document.select(&selector).collect())
        }
        Target::Marked => {
            let selector = parse_selector(&format!("[{MARKER_ATTRIBUTE}]"))?;
            Ok(document.select(&selector).take(1).collect())
        }
        Target::Interactive => {
            let body = find_body(document);
            Ok(body
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(is_interactive)
                .collect())
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid CSS selector '{css}': {e}"))
}

fn find_body(document: &Html) -> ElementRef<'_> {
    let root = document.root_element();
    root.children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.tag_name() == "body")
        .unwrap_or(root)
}

fn is_interactive(el: &ElementRef<'_>) -> bool {
    let tag = el.tag_name();
    if tag == "input" && el.attribute("type") == Some("hidden") {
        return false;
    }
    if INTERACTIVE_TAGS.contains(&tag.as_str()) {
        return true;
    }
    el.non_empty_attribute("role").is_some()
        || TEST_ATTRIBUTES
            .iter()
            .any(|attr| el.non_empty_attribute(attr).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = r#"<html><head><title>Login</title></head><body>
        <form id="login">
          <input type="hidden" name="csrf" value="abc">
          <input name="user">
          <div class="row"><span data-cy="hint">Tip</span></div>
          <button>Sign in</button>
        </form>
        <p>plain</p>
    </body></html>"#;

    #[test]
    fn selector_target_returns_all_matches() {
        let doc = parse(FORM);
        let results = inspect(&doc, Target::Selector("input")).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].css_scheme, r#"cy.get('[name="user"]')"#);
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let doc = parse(FORM);
        let err = inspect(&doc, Target::Selector("div[")).unwrap_err();
        assert!(err.to_string().contains("Invalid CSS selector"));
    }

    #[test]
    fn unmatched_selector_is_empty() {
        let doc = parse(FORM);
        assert!(inspect(&doc, Target::Selector("table")).unwrap().is_empty());
    }

    #[test]
    fn interactive_scan_skips_hidden_inputs_and_plain_text() {
        let doc = parse(FORM);
        let results = inspect(&doc, Target::Interactive).unwrap();
        let tags: Vec<&str> = results.iter().map(|r| r.info.tag.as_str()).collect();
        assert_eq!(tags, vec!["input", "span", "button"]);
        assert_eq!(
            results[2].role_scheme,
            "page.getByText('Sign in')"
        );
    }

    #[test]
    fn marked_element_is_found_and_marker_is_invisible() {
        let html = format!(
            r#"<body><ul><li>a</li><li {MARKER_ATTRIBUTE}="1">b</li></ul></body>"#
        );
        let doc = parse(&html);
        let results = inspect(&doc, Target::Marked).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].css_scheme, "cy.get('ul:nth-child(1) > li:nth-child(2)')");
        assert!(!results[0].xpath_scheme.contains(MARKER_ATTRIBUTE));
    }

    #[test]
    fn locate_first_returns_owned_strings() {
        let [cy, pw, se] = locate_first(FORM, "button").unwrap().unwrap();
        assert_eq!(cy, "cy.contains('button', 'Sign in')");
        assert_eq!(pw, "page.getByText('Sign in')");
        assert_eq!(
            se,
            r#"driver.find_element(By.XPATH, "//*[@id='login']/button")"#
        );
        assert!(locate_first(FORM, "video").unwrap().is_none());
    }
}
