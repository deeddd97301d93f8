//! Typed lookups over a parsed feed document

use roxmltree::Node;

pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
pub const RSS1_NS: &str = "http://purl.org/rss/1.0/";

/// An element name, optionally bound to the iTunes podcast namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Matches elements in no namespace or in the Atom / RSS 1.0 namespaces
    Plain(&'static str),
    /// Matches `itunes:` elements
    Itunes(&'static str),
}

impl Tag {
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }

        let name = node.tag_name();
        match *self {
            Tag::Plain(local) => {
                name.name() == local && matches!(name.namespace(), None | Some(ATOM_NS | RSS1_NS))
            }
            Tag::Itunes(local) => name.name() == local && name.namespace().is_some_and(is_itunes_ns),
        }
    }
}

/// Feeds declare the namespace with varying case and trailing slashes
fn is_itunes_ns(uri: &str) -> bool {
    uri.trim_end_matches('/')
        .to_ascii_lowercase()
        .ends_with("itunes.com/dtds/podcast-1.0.dtd")
}

/// Whether a node is an RSS `item` or Atom `entry`
pub fn is_item(node: Node<'_, '_>) -> bool {
    Tag::Plain("item").matches(node) || Tag::Plain("entry").matches(node)
}

/// Concatenated text of all descendant text nodes, like DOM `textContent`
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A subtree to search. Channel scopes do not look inside items.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a, 'input> {
    node: Node<'a, 'input>,
    skip_items: bool,
}

impl<'a, 'input> Scope<'a, 'input> {
    pub fn channel(node: Node<'a, 'input>) -> Self {
        Self {
            node,
            skip_items: true,
        }
    }

    pub fn item(node: Node<'a, 'input>) -> Self {
        Self {
            node,
            skip_items: false,
        }
    }

    /// Descendant elements in document order, excluding the scope node itself
    pub fn elements(&self) -> Elements<'a, 'input> {
        let mut elements = Elements {
            stack: Vec::new(),
            skip_items: self.skip_items,
        };
        elements.push_children(self.node);
        elements
    }

    pub fn first(&self, tag: Tag) -> Option<Node<'a, 'input>> {
        self.elements().find(|n| tag.matches(*n))
    }

    /// Trimmed text of the first matching element, if non-empty
    pub fn text(&self, tag: Tag) -> Option<String> {
        self.first(tag).and_then(|n| non_empty(&text_content(n)))
    }

    /// Trimmed attribute of the first matching element, if non-empty
    pub fn attr(&self, tag: Tag, attr: &str) -> Option<String> {
        self.first(tag)
            .and_then(|n| n.attribute(attr))
            .and_then(non_empty)
    }
}

/// Pre-order walk over element descendants
pub struct Elements<'a, 'input> {
    stack: Vec<Node<'a, 'input>>,
    skip_items: bool,
}

impl<'a, 'input> Elements<'a, 'input> {
    fn push_children(&mut self, node: Node<'a, 'input>) {
        let children: Vec<_> = node.children().filter(|c| c.is_element()).collect();
        self.stack.extend(children.into_iter().rev());
    }
}

impl<'a, 'input> Iterator for Elements<'a, 'input> {
    type Item = Node<'a, 'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if !(self.skip_items && is_item(node)) {
            self.push_children(node);
        }
        Some(node)
    }
}

/// One step in a field's fallback chain
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    Text(Tag),
    Attr(Tag, &'static str),
    /// Text of a child of the first `parent` element, e.g. `image/url`
    ChildText(Tag, Tag),
    /// `href` of the first `link` whose `type` contains the given fragment
    TypedLink(&'static str),
    /// Text of the first `link` that has any, skipping Atom href-only links
    LinkText,
    /// `href` of the first `link` pointing at a web page, not the feed itself
    PageLink,
}

impl Lookup {
    pub fn resolve(&self, scope: Scope<'_, '_>) -> Option<String> {
        match *self {
            Lookup::Text(tag) => scope.text(tag),
            Lookup::Attr(tag, attr) => scope.attr(tag, attr),
            Lookup::ChildText(parent, child) => scope
                .first(parent)
                .and_then(|p| Scope::item(p).text(child)),
            Lookup::TypedLink(fragment) => scope
                .elements()
                .filter(|n| Tag::Plain("link").matches(*n))
                .find(|n| n.attribute("type").is_some_and(|t| t.contains(fragment)))
                .and_then(|n| n.attribute("href"))
                .and_then(non_empty),
            Lookup::LinkText => links(scope).find_map(|n| non_empty(&text_content(n))),
            Lookup::PageLink => links(scope)
                .filter(|n| matches!(n.attribute("rel"), None | Some("alternate")))
                .find_map(|n| n.attribute("href").and_then(non_empty)),
        }
    }
}

fn links<'a, 'input>(scope: Scope<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    scope.elements().filter(|n| Tag::Plain("link").matches(*n))
}

/// First non-empty value from an ordered chain of lookups
pub fn first_of(scope: Scope<'_, '_>, chain: &[Lookup]) -> Option<String> {
    chain.iter().find_map(|lookup| lookup.resolve(scope))
}
