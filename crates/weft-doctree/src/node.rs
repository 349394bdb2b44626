//! Tree node types.

use std::fmt;

use crate::attrs::AttrSet;

/// Stable identity token for an element.
///
/// Assigned by the caller when it hands a tree to a pipeline, and used to
/// re-find the same element after passes have replaced the tree wholesale.
/// Tokens are opaque; only equality matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity(u64);

impl Identity {
    /// Create an identity token from a caller-chosen value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an element participates in further processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementKind {
    /// Emitted as ordinary markup.
    #[default]
    Normal,
    /// Requires pipeline-driven specialization (e.g. the document root).
    Special,
}

/// An element node: tag name, attributes, ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Tag name, case as authored. Case normalization is a serializer
    /// concern; transformation passes leave the name alone.
    pub name: String,
    /// Processing kind.
    pub kind: ElementKind,
    /// Stable identity, if the caller assigned one.
    pub identity: Option<Identity>,
    /// Ordered attribute set.
    pub attrs: AttrSet,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an ordinary element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Normal,
            identity: None,
            attrs: AttrSet::new(),
            children: Vec::new(),
        }
    }

    /// Create a `Special`-kind element.
    #[must_use]
    pub fn special(name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Special,
            ..Self::new(name)
        }
    }

    /// Attach an identity token.
    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Set an attribute (builder form).
    #[must_use]
    pub fn with_attr(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attrs
            .set(name, values.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the child list (builder form).
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A document tree node.
///
/// A whole tree is a `Vec<Node>`: the parser emits a sequence of top-level
/// items, not a single root.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Opaque literal text fragment. Entity handling happened upstream;
    /// the serializer emits fragments verbatim.
    Text(String),
    /// Source-layout hint between block items. Never emitted.
    Newline,
    /// An element.
    Element(Element),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// The element inside this node, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable access to the element inside this node, if it is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}
