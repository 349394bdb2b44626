//! Variant pass: XHTML namespace and language attributes.
//!
//! No XML prolog (`<?xml version=... ?>`) is emitted for XHTML documents;
//! the declaration line is still an open stub, not covered here.

use weft_doctree::{Node, update_by_identity};

use crate::doctypes;
use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::passes::target_missing;
use crate::pipeline::TargetView;

/// The XHTML namespace URI.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Inject `xmlns` and `xml:lang` on the target when the document type is
/// XML-flavored; a no-op otherwise.
///
/// Both attributes are prepended so they serialize before everything
/// else, overwriting prior values of the same names but leaving unrelated
/// attributes alone.
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    let doc_type = doctypes::resolve(&view.attrs, options)?;
    if !doc_type.xml {
        return Ok(tree.to_vec());
    }

    let xmlns = view.attrs.values_or("xmlns", &[XHTML_NAMESPACE]);
    let lang = view
        .attrs
        .values_or("xml:lang", &[options.default_language.as_str()]);

    update_by_identity(tree, view.identity, |element| {
        element.attrs.prepend("xml:lang", lang);
        element.attrs.prepend("xmlns", xmlns);
    })
    .ok_or_else(|| target_missing(view.identity))
}

#[cfg(test)]
mod tests {
    use weft_doctree::{Element, Identity, NodePath, find};

    use super::*;

    const TARGET: Identity = Identity::new(1);

    fn specialize(element: Element) -> Vec<Node> {
        let view = TargetView {
            identity: TARGET,
            attrs: element.attrs.clone(),
            children: element.children.clone(),
        };
        let tree = vec![element.into()];
        run(&view, &tree, &SpecializeOptions::default()).unwrap()
    }

    #[test]
    fn test_non_xml_is_noop() {
        let element = Element::special("html")
            .with_identity(TARGET)
            .with_attr("type", ["html401-strict"]);
        let out = specialize(element);
        let html = find(&out, &NodePath::new(["html"])).unwrap();
        assert!(!html.attrs.contains("xmlns"));
        assert!(!html.attrs.contains("xml:lang"));
    }

    #[test]
    fn test_xml_defaults_injected_first() {
        let element = Element::special("html")
            .with_identity(TARGET)
            .with_attr("type", ["xhtml1-strict"])
            .with_attr("class", ["site"]);
        let out = specialize(element);
        let html = find(&out, &NodePath::new(["html"])).unwrap();

        let names: Vec<_> = html.attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["xmlns", "xml:lang", "type", "class"]);
        assert_eq!(html.attrs.first_value("xmlns"), Some(XHTML_NAMESPACE));
        assert_eq!(html.attrs.first_value("xml:lang"), Some("en"));
    }

    #[test]
    fn test_authored_values_win() {
        let element = Element::special("html")
            .with_identity(TARGET)
            .with_attr("type", ["xhtml11"])
            .with_attr("xml:lang", ["fr"]);
        let out = specialize(element);
        let html = find(&out, &NodePath::new(["html"])).unwrap();
        assert_eq!(html.attrs.first_value("xml:lang"), Some("fr"));
    }
}
