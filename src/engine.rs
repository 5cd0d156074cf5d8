use tracing::debug;

use crate::dom::{ElementInfo, Inspectable, SelectorResult};
use crate::schemes::{css_scheme, role_scheme, xpath_scheme};

/// Synthesize locators for every scheme. A missing element yields `None`.
///
/// Pure: reads the element and its ancestors, never mutates them, and keeps
/// nothing between calls.
pub fn synthesize<N: Inspectable>(element: Option<&N>) -> Option<SelectorResult<N>> {
    let element = element?;

    let result = SelectorResult {
        element: element.clone(),
        info: ElementInfo::describe(element),
        css_scheme: css_scheme(element),
        role_scheme: role_scheme(element),
        xpath_scheme: xpath_scheme(element),
    };

    debug!(
        tag = %result.info.tag,
        css = %result.css_scheme,
        role = %result.role_scheme,
        xpath = %result.xpath_scheme,
        "synthesized locators"
    );
    Some(result)
}
