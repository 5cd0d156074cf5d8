//! Hover-inspector state: whether inspection is switched on, which element is
//! highlighted, and the locators last shown for it.
//!
//! The synthesis engine never reads this state; the inspector only feeds
//! elements into it and keeps the latest answer.

use crate::dom::{Inspectable, SelectorResult};
use crate::engine::synthesize;

#[derive(Debug)]
pub struct Inspector<N> {
    active: bool,
    highlighted: Option<N>,
    current: Option<SelectorResult<N>>,
}

impl<N: Inspectable> Default for Inspector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Inspectable> Inspector<N> {
    /// A switched-off inspector.
    pub fn new() -> Self {
        Self {
            active: false,
            highlighted: None,
            current: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Switch inspection on or off. Switching off drops the highlight and
    /// the last result.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        if !self.active {
            self.highlighted = None;
            self.current = None;
        }
        self.active
    }

    /// Pointer entered (or moved over) `element`. Returns the fresh result,
    /// which replaces any previous one.
    pub fn hover(&mut self, element: &N) -> Option<&SelectorResult<N>> {
        if !self.active {
            return None;
        }
        self.highlighted = Some(element.clone());
        self.current = synthesize(Some(element));
        self.current.as_ref()
    }

    /// Pointer left `element`. Only clears state when it is the highlighted
    /// one, so a late leave from a previous element is ignored.
    pub fn leave(&mut self, element: &N) {
        if self.highlighted.as_ref() == Some(element) {
            self.highlighted = None;
            self.current = None;
        }
    }

    pub fn highlighted(&self) -> Option<&N> {
        self.highlighted.as_ref()
    }

    /// Locators for the highlighted element, e.g. for a copy action.
    pub fn current(&self) -> Option<&SelectorResult<N>> {
        self.current.as_ref()
    }
}
