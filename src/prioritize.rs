use crate::dom::{AttributeKind, AttributeMatch, Inspectable, TEST_ATTRIBUTES};

/// Return the element's most stable identifying attribute, if it has one.
///
/// Checked in order: `id`, then each test attribute in [`TEST_ATTRIBUTES`]
/// order, then `name`. Empty values never match.
pub fn prioritize<N: Inspectable>(element: &N) -> Option<AttributeMatch> {
    if let Some(id) = element.non_empty_attribute("id") {
        return Some(AttributeMatch {
            kind: AttributeKind::Id,
            attr_name: "id".into(),
            value: id.into(),
        });
    }

    for attr in TEST_ATTRIBUTES {
        if let Some(value) = element.non_empty_attribute(attr) {
            return Some(AttributeMatch {
                kind: AttributeKind::TestAttribute,
                attr_name: (*attr).into(),
                value: value.into(),
            });
        }
    }

    element
        .non_empty_attribute("name")
        .map(|name| AttributeMatch {
            kind: AttributeKind::Name,
            attr_name: "name".into(),
            value: name.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{ElementRef, Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    fn matched(html: &str) -> Option<AttributeMatch> {
        let doc = Html::parse_document(html);
        prioritize(&first(&doc, "#target, .target"))
    }

    #[test]
    fn id_wins_over_everything() {
        let doc = Html::parse_document(
            r#"<input id="email" data-cy="email-field" data-testid="e" name="email">"#,
        );
        let m = prioritize(&first(&doc, "input")).unwrap();
        assert_eq!(m.kind, AttributeKind::Id);
        assert_eq!(m.value, "email");
    }

    #[test]
    fn test_attributes_in_fixed_order() {
        let m = matched(r#"<div class="target" data-testid="c" data-test="b" data-cy="a"></div>"#)
            .unwrap();
        assert_eq!(m.attr_name, "data-cy");
        assert_eq!(m.value, "a");

        let m = matched(r#"<div class="target" data-testid="c" data-test="b"></div>"#).unwrap();
        assert_eq!(m.attr_name, "data-test");

        let m = matched(r#"<div class="target" data-testid="c"></div>"#).unwrap();
        assert_eq!(m.attr_name, "data-testid");
        assert_eq!(m.kind, AttributeKind::TestAttribute);
    }

    #[test]
    fn empty_values_are_skipped() {
        let m = matched(r#"<input class="target" id="" data-cy="" name="q">"#).unwrap();
        assert_eq!(m.kind, AttributeKind::Name);
        assert_eq!(m.value, "q");
    }

    #[test]
    fn name_is_last_resort() {
        let m = matched(r#"<select class="target" name="country"></select>"#).unwrap();
        assert_eq!(m.attr_name, "name");
    }

    #[test]
    fn no_stable_attribute() {
        assert_eq!(matched(r#"<span class="target" role="note">hi</span>"#), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let doc = Html::parse_document(r#"<button data-test="go" name="go-btn">Go</button>"#);
        let el = first(&doc, "button");
        assert_eq!(prioritize(&el), prioritize(&el));
    }
}
