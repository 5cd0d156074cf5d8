use crate::dom::{ElementInfo, SelectorResult};
use crate::schemes::Scheme;

/// Render one result the way the hover tooltip shows it.
///
/// Example output:
/// ```text
/// element: button #submit-btn .primary
/// Cypress:    cy.get('#submit-btn')
/// Playwright: page.locator('#submit-btn')
/// Selenium:   driver.find_element(By.CSS_SELECTOR, "#submit-btn")
/// ```
pub fn to_compact_text<N>(result: &SelectorResult<N>) -> String {
    let mut output = String::new();
    output.push_str(&format!("element: {}\n", describe(&result.info)));

    for scheme in Scheme::ALL {
        let locator = match scheme {
            Scheme::Cypress => &result.css_scheme,
            Scheme::Playwright => &result.role_scheme,
            Scheme::Selenium => &result.xpath_scheme,
        };
        let label = format!("{scheme}:");
        output.push_str(&format!("{label:<12}{locator}\n"));
    }

    output
}

/// Render several results separated by `---` lines.
pub fn to_compact_text_all<N>(results: &[SelectorResult<N>]) -> String {
    results
        .iter()
        .map(to_compact_text)
        .collect::<Vec<_>>()
        .join("---\n")
}

fn describe(info: &ElementInfo) -> String {
    let mut out = info.tag.clone();
    if let Some(id) = &info.id {
        out.push_str(&format!(" #{id}"));
    }
    for class in &info.classes {
        out.push_str(&format!(" .{class}"));
    }
    if let Some(value) = &info.value {
        out.push_str(&format!(" = \"{value}\""));
    }
    out
}
