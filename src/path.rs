//! Structural paths for elements that carry no stable attribute.
//!
//! The walk goes from the target up towards the root and stops at the first
//! ancestor with an `id` (ids are taken to be unique in the page) or at the
//! root boundary. CSS paths index a node among *all* element siblings
//! (`:nth-child`), XPath paths among same-tag siblings only (`tag[j]`).

use crate::dom::{Inspectable, PathStyle};
use crate::escape::{css_ident, xpath_literal};

/// How a path walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathAnchor {
    /// Stopped on an element (possibly the target) that has an `id`.
    Id,
    /// Reached the root boundary, whose tag is recorded.
    Root(String),
    /// Ran out of parents before reaching a boundary.
    Detached,
    /// The target is the boundary itself.
    Boundary,
}

/// Tokens of a path, root-most first, plus how the walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathWalk {
    pub tokens: Vec<String>,
    pub anchor: PathAnchor,
}

/// The target and its ancestors up to, but excluding, the root boundary.
#[derive(Debug, Clone)]
pub struct AncestorChain<N> {
    /// Target first, outermost ancestor last.
    pub nodes: Vec<N>,
    /// The boundary the chain stopped under, `None` for detached trees.
    pub boundary: Option<N>,
}

/// `body`, or an `html` element that is the root of its tree.
pub fn is_boundary<N: Inspectable>(node: &N) -> bool {
    match node.tag_name().as_str() {
        "body" => true,
        "html" => node.parent_element().is_none(),
        _ => false,
    }
}

pub fn ancestor_chain<N: Inspectable>(element: &N) -> AncestorChain<N> {
    let mut nodes = Vec::new();
    let mut current = Some(element.clone());

    while let Some(node) = current {
        if is_boundary(&node) {
            return AncestorChain {
                nodes,
                boundary: Some(node),
            };
        }
        current = node.parent_element();
        nodes.push(node);
    }

    AncestorChain {
        nodes,
        boundary: None,
    }
}

/// Walk from `element` towards the root, producing path tokens.
pub fn walk<N: Inspectable>(element: &N, style: PathStyle) -> PathWalk {
    if is_boundary(element) {
        return PathWalk {
            tokens: vec![element.tag_name()],
            anchor: PathAnchor::Boundary,
        };
    }

    let chain = ancestor_chain(element);
    let mut anchor = match &chain.boundary {
        Some(boundary) => PathAnchor::Root(boundary.tag_name()),
        None => PathAnchor::Detached,
    };
    let mut tokens = Vec::with_capacity(chain.nodes.len());

    for (i, node) in chain.nodes.iter().enumerate() {
        if let Some(id) = node.non_empty_attribute("id") {
            tokens.push(id_token(id, style));
            anchor = PathAnchor::Id;
            break;
        }

        let parent = chain.nodes.get(i + 1).or(chain.boundary.as_ref());
        let token = match parent {
            Some(parent) => structural_token(node, parent, style),
            None => node.tag_name(),
        };
        tokens.push(token);
    }

    tokens.reverse();
    PathWalk { tokens, anchor }
}

/// Build the path string for `element` in the given style.
///
/// CSS tokens are joined with `" > "`, XPath tokens with `"/"`.
pub fn build_path<N: Inspectable>(element: &N, style: PathStyle) -> String {
    let separator = match style {
        PathStyle::Css => " > ",
        PathStyle::Xpath => "/",
    };
    walk(element, style).tokens.join(separator)
}

/// A complete XPath expression selecting `element`.
pub fn xpath_expression<N: Inspectable>(element: &N) -> String {
    let walk = walk(element, PathStyle::Xpath);
    let path = walk.tokens.join("/");
    match walk.anchor {
        PathAnchor::Root(boundary) => format!("//{boundary}/{path}"),
        PathAnchor::Id | PathAnchor::Detached | PathAnchor::Boundary => format!("//{path}"),
    }
}

fn id_token(id: &str, style: PathStyle) -> String {
    match style {
        PathStyle::Css => format!("#{}", css_ident(id)),
        PathStyle::Xpath => format!("*[@id={}]", xpath_literal(id)),
    }
}

fn structural_token<N: Inspectable>(node: &N, parent: &N, style: PathStyle) -> String {
    let tag = node.tag_name();
    let siblings = parent.child_elements();

    match style {
        PathStyle::Css => {
            let position = siblings.iter().position(|s| s == node).unwrap_or(0) + 1;
            format!("{tag}:nth-child({position})")
        }
        PathStyle::Xpath => {
            let same_tag: Vec<&N> = siblings.iter().filter(|s| s.tag_name() == tag).collect();
            if same_tag.len() <= 1 {
                return tag;
            }
            let position = same_tag.iter().position(|s| *s == node).unwrap_or(0) + 1;
            format!("{tag}[{position}]")
        }
    }
}
