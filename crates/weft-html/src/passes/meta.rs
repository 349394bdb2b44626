//! Meta-synthesis pass: derive head metadata from document attributes.

use weft_doctree::{Element, Node, NodePath, append_children};

use crate::doctypes;
use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::pipeline::TargetView;

/// The metadata kinds, in emission order.
///
/// Each kind reads the document attribute of the same name and builds its
/// own head node(s). A closed set: adding a kind means adding a variant
/// and its builder arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MetaKind {
    Encoding,
    Language,
    Description,
    Keywords,
    Copyright,
    NoSmartTag,
    Title,
    Favicon,
}

impl MetaKind {
    const ORDER: [MetaKind; 8] = [
        MetaKind::Encoding,
        MetaKind::Language,
        MetaKind::Description,
        MetaKind::Keywords,
        MetaKind::Copyright,
        MetaKind::NoSmartTag,
        MetaKind::Title,
        MetaKind::Favicon,
    ];

    /// The document attribute this kind reads.
    fn attr_name(self) -> &'static str {
        match self {
            MetaKind::Encoding => "encoding",
            MetaKind::Language => "language",
            MetaKind::Description => "description",
            MetaKind::Keywords => "keywords",
            MetaKind::Copyright => "copyright",
            MetaKind::NoSmartTag => "nosmarttag",
            MetaKind::Title => "title",
            MetaKind::Favicon => "favicon",
        }
    }

    /// Fallback when the attribute is absent. `None` means the kind is
    /// simply omitted.
    fn default_values(self, options: &SpecializeOptions) -> Option<Vec<String>> {
        match self {
            MetaKind::Encoding => Some(vec![options.default_encoding.clone()]),
            MetaKind::Language => Some(vec![options.default_language.clone()]),
            MetaKind::NoSmartTag => Some(vec!["true".to_owned()]),
            MetaKind::Favicon => options.default_favicon.clone().map(|href| vec![href]),
            _ => None,
        }
    }

    /// Build the head node(s) for this kind.
    fn build(self, values: &[String], xml: bool) -> Vec<Node> {
        let joined = values.join(" ");
        match self {
            MetaKind::Encoding => {
                let charset = if xml {
                    joined.to_ascii_uppercase()
                } else {
                    joined
                };
                let equiv = if xml { "content-type" } else { "Content-Type" };
                vec![http_equiv_meta(
                    equiv,
                    format!("text/html; charset={charset}"),
                )]
            }
            MetaKind::Language => {
                let equiv = if xml {
                    "content-language"
                } else {
                    "Content-Language"
                };
                vec![http_equiv_meta(equiv, joined)]
            }
            MetaKind::Copyright => {
                // Never case-folded, even under the XML flavor.
                vec![named_meta(
                    "copyright".to_owned(),
                    format!("Copyright (c) {joined}"),
                )]
            }
            MetaKind::NoSmartTag => {
                // Hard-coded exception: Office sniffs this exact spelling.
                vec![named_meta(
                    "MSSmartTagsPreventParsing".to_owned(),
                    "TRUE".to_owned(),
                )]
            }
            MetaKind::Title => {
                vec![
                    Element::new("title")
                        .with_children(interspersed(values))
                        .into(),
                ]
            }
            MetaKind::Favicon => vec![
                Element::new("link")
                    .with_attr("rel", ["icon"])
                    .with_attr("href", [joined.clone()])
                    .into(),
                Element::new("link")
                    .with_attr("rel", ["shortcut", "icon"])
                    .with_attr("href", [joined])
                    .into(),
            ],
            MetaKind::Description | MetaKind::Keywords => {
                let (name, content) = if xml {
                    (
                        self.attr_name().to_ascii_lowercase(),
                        joined.to_ascii_lowercase(),
                    )
                } else {
                    (self.attr_name().to_owned(), joined)
                };
                vec![named_meta(name, content)]
            }
        }
    }
}

fn http_equiv_meta(equiv: &str, content: String) -> Node {
    Element::new("meta")
        .with_attr("http-equiv", [equiv.to_owned()])
        .with_attr("content", [content])
        .into()
}

fn named_meta(name: String, content: String) -> Node {
    Element::new("meta")
        .with_attr("name", [name])
        .with_attr("content", [content])
        .into()
}

/// Values separated by single-space text nodes, for the title element.
fn interspersed(values: &[String]) -> Vec<Node> {
    let mut children = Vec::with_capacity(values.len() * 2);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            children.push(Node::text(" "));
        }
        children.push(Node::text(value.clone()));
    }
    children
}

/// Synthesize metadata nodes and append them to `head`.
///
/// For each kind in [`MetaKind::ORDER`]: resolve the attribute of that
/// name, falling back to the kind's default; the literal value `none`
/// suppresses the kind entirely (distinct from an absent attribute, which
/// takes the default).
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    let xml = doctypes::resolve(&view.attrs, options)?.xml;

    let mut synthesized = Vec::new();
    for kind in MetaKind::ORDER {
        let values = match view.attrs.get(kind.attr_name()) {
            Some(values) => values.to_vec(),
            None => match kind.default_values(options) {
                Some(values) => values,
                None => continue,
            },
        };
        if values.len() == 1 && values[0] == "none" {
            tracing::trace!(kind = kind.attr_name(), "metadata suppressed");
            continue;
        }
        synthesized.extend(kind.build(&values, xml));
    }

    if synthesized.is_empty() {
        return Ok(tree.to_vec());
    }
    append_children(tree, &NodePath::new(["html", "head"]), synthesized).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use weft_doctree::{Identity, find};

    use super::*;

    const TARGET: Identity = Identity::new(1);

    fn specialize(mut element: Element) -> Vec<Node> {
        element = element.with_children(vec![
            Element::new("head").into(),
            Element::new("body").into(),
        ]);
        let view = TargetView {
            identity: TARGET,
            attrs: element.attrs.clone(),
            children: element.children.clone(),
        };
        let tree = vec![element.into()];
        run(&view, &tree, &SpecializeOptions::default()).unwrap()
    }

    fn head_children(tree: &[Node]) -> Vec<&Element> {
        find(tree, &NodePath::new(["html", "head"]))
            .unwrap()
            .children
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    fn html(type_attr: &str) -> Element {
        Element::special("html")
            .with_identity(TARGET)
            .with_attr("type", [type_attr])
    }

    #[test]
    fn test_defaults_emit_encoding_language_nosmarttag_only() {
        let out = specialize(html("html401-strict"));
        let head = head_children(&out);
        assert_eq!(head.len(), 3);

        assert_eq!(head[0].attrs.first_value("http-equiv"), Some("Content-Type"));
        assert_eq!(
            head[0].attrs.first_value("content"),
            Some("text/html; charset=iso-8859-1")
        );
        assert_eq!(
            head[1].attrs.first_value("http-equiv"),
            Some("Content-Language")
        );
        assert_eq!(head[1].attrs.first_value("content"), Some("en"));
        assert_eq!(
            head[2].attrs.first_value("name"),
            Some("MSSmartTagsPreventParsing")
        );
        assert_eq!(head[2].attrs.first_value("content"), Some("TRUE"));
    }

    #[test]
    fn test_xml_flavor_casing() {
        let out = specialize(html("xhtml1-strict").with_attr("encoding", ["utf-8"]));
        let head = head_children(&out);
        assert_eq!(head[0].attrs.first_value("http-equiv"), Some("content-type"));
        assert_eq!(
            head[0].attrs.first_value("content"),
            Some("text/html; charset=UTF-8")
        );
        assert_eq!(
            head[1].attrs.first_value("http-equiv"),
            Some("content-language")
        );
    }

    #[test]
    fn test_nosmarttag_never_lowercased() {
        let out = specialize(html("xhtml1-strict"));
        let head = head_children(&out);
        assert_eq!(
            head[2].attrs.first_value("name"),
            Some("MSSmartTagsPreventParsing")
        );
    }

    #[test]
    fn test_generic_meta_lowercased_in_xml_only() {
        let authored = ["description", "A Fine Page"];
        let out = specialize(html("xhtml1-strict").with_attr(authored[0], [authored[1]]));
        let description = head_children(&out)
            .into_iter()
            .find(|e| e.attrs.first_value("name") == Some("description"))
            .unwrap();
        assert_eq!(description.attrs.first_value("content"), Some("a fine page"));

        let out = specialize(html("html401-strict").with_attr(authored[0], [authored[1]]));
        let description = head_children(&out)
            .into_iter()
            .find(|e| e.attrs.first_value("name") == Some("description"))
            .unwrap();
        assert_eq!(description.attrs.first_value("content"), Some("A Fine Page"));
    }

    #[test]
    fn test_none_sentinel_suppresses() {
        let out = specialize(
            html("html401-strict")
                .with_attr("encoding", ["none"])
                .with_attr("language", ["none"])
                .with_attr("nosmarttag", ["none"]),
        );
        assert!(head_children(&out).is_empty());
    }

    #[test]
    fn test_copyright_not_folded() {
        let out = specialize(html("xhtml1-strict").with_attr("copyright", ["2026 ACME Corp"]));
        let copyright = head_children(&out)
            .into_iter()
            .find(|e| e.attrs.first_value("name") == Some("copyright"))
            .unwrap();
        assert_eq!(
            copyright.attrs.first_value("content"),
            Some("Copyright (c) 2026 ACME Corp")
        );
    }

    #[test]
    fn test_title_is_element_with_interspersed_values() {
        let out = specialize(html("html401-strict").with_attr("title", ["My", "Site"]));
        let title = head_children(&out)
            .into_iter()
            .find(|e| e.name == "title")
            .unwrap();
        assert_eq!(
            title.children,
            vec![Node::text("My"), Node::text(" "), Node::text("Site")]
        );
    }

    #[test]
    fn test_favicon_emits_both_links() {
        let out = specialize(html("html401-strict").with_attr("favicon", ["/favicon.ico"]));
        let links: Vec<_> = head_children(&out)
            .into_iter()
            .filter(|e| e.name == "link")
            .collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].attrs.get("rel"), Some(&["icon".to_owned()][..]));
        assert_eq!(
            links[1].attrs.get("rel"),
            Some(&["shortcut".to_owned(), "icon".to_owned()][..])
        );
        for link in links {
            assert_eq!(link.attrs.first_value("href"), Some("/favicon.ico"));
        }
    }

    #[test]
    fn test_emission_order_is_fixed() {
        let out = specialize(
            html("html401-strict")
                .with_attr("favicon", ["/f.ico"])
                .with_attr("title", ["T"])
                .with_attr("keywords", ["a,b"])
                .with_attr("description", ["d"]),
        );
        let kinds: Vec<String> = head_children(&out)
            .into_iter()
            .map(|e| {
                e.attrs
                    .first_value("name")
                    .or_else(|| e.attrs.first_value("http-equiv"))
                    .map_or_else(|| e.name.clone(), ToOwned::to_owned)
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "Content-Type",
                "Content-Language",
                "description",
                "keywords",
                "MSSmartTagsPreventParsing",
                "title",
                "link",
                "link"
            ]
        );
    }

    #[test]
    fn test_missing_head_is_contract_violation() {
        let element = Element::special("html").with_identity(TARGET);
        let view = TargetView {
            identity: TARGET,
            attrs: element.attrs.clone(),
            children: Vec::new(),
        };
        let tree = vec![element.into()];
        let err = run(&view, &tree, &SpecializeOptions::default()).unwrap_err();
        assert!(matches!(err, SpecializeError::PathNotFound { .. }));
    }
}
