//! Point at an element, get copy-pasteable locators.
//!
//! Given an element of an HTML document, synthesize one locator per test
//! framework dialect:
//!
//! - Cypress (`cy.get(...)`, `cy.contains(...)`)
//! - Playwright (`page.locator(...)`, `page.getByRole(...)`, `page.getByText(...)`)
//! - Selenium for Python (`driver.find_element(By.CSS_SELECTOR | By.XPATH, ...)`)
//!
//! ```
//! use selector_lens::document;
//!
//! let [cy, pw, se] = document::locate_first(
//!     r#"<button id="submit-btn">Submit</button>"#,
//!     "button",
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(cy, "cy.get('#submit-btn')");
//! assert_eq!(pw, "page.locator('#submit-btn')");
//! assert_eq!(se, r##"driver.find_element(By.CSS_SELECTOR, "#submit-btn")"##);
//! ```

pub mod browser;
pub mod document;
pub mod dom;
pub mod engine;
pub mod escape;
pub mod inspector;
pub mod path;
pub mod prioritize;
pub mod report;
pub mod schemes;

pub use dom::{AttributeKind, AttributeMatch, ElementInfo, Inspectable, PathStyle, SelectorResult};
pub use engine::synthesize;
pub use path::build_path;
pub use prioritize::prioritize;
pub use schemes::Scheme;
