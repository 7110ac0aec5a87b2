//! Non-owning views into a parsed [`SourceFile`].

use crate::parser::SourceFile;
use tree_sitter::Node;

/// Identity of a node across every file taking part in one resolution.
///
/// Node ids are only unique within a tree, so the owning file's address
/// is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathKey {
    file: usize,
    node: usize,
}

/// A node plus the file it lives in.
///
/// Navigation (`parent`, `get`, `children`) is delegated to tree-sitter, which
/// already keeps the tree immutable and parent-addressable; the view itself
/// is `Copy` and can be passed around freely.
#[derive(Clone, Copy)]
pub struct NodePath<'a> {
    node: Node<'a>,
    file: &'a SourceFile,
}

impl PartialEq for NodePath<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.node.id() == other.node.id()
    }
}

impl Eq for NodePath<'_> {}

impl std::fmt::Debug for NodePath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}..{} `{}`",
            self.kind(),
            self.node.start_byte(),
            self.node.end_byte(),
            truncate(self.text(), 40)
        )
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl<'a> NodePath<'a> {
    pub fn new(node: Node<'a>, file: &'a SourceFile) -> Self {
        Self { node, file }
    }

    pub fn node(&self) -> Node<'a> {
        self.node
    }

    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    pub fn key(&self) -> PathKey {
        PathKey {
            file: self.file as *const SourceFile as usize,
            node: self.node.id(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn is(&self, kind: &str) -> bool {
        self.node.kind() == kind
    }

    pub fn is_any(&self, kinds: &[&str]) -> bool {
        kinds.contains(&self.node.kind())
    }

    /// Exact source text covered by this node.
    pub fn text(&self) -> &'a str {
        self.file
            .source
            .get(self.node.byte_range())
            .unwrap_or_default()
    }

    pub fn start(&self) -> usize {
        self.node.start_byte()
    }

    pub fn end(&self) -> usize {
        self.node.end_byte()
    }

    /// Whether `other` lies within this node's source range (inclusive of itself).
    pub fn contains(&self, other: &NodePath<'a>) -> bool {
        std::ptr::eq(self.file, other.file)
            && self.start() <= other.start()
            && other.end() <= self.end()
    }

    pub fn with(&self, node: Node<'a>) -> Self {
        Self {
            node,
            file: self.file,
        }
    }

    pub fn parent(&self) -> Option<Self> {
        self.node.parent().map(|node| self.with(node))
    }

    /// Previous sibling, named or anonymous.
    pub fn prev_sibling(&self) -> Option<Self> {
        self.node.prev_sibling().map(|node| self.with(node))
    }

    /// First child stored under `field`.
    pub fn get(&self, field: &str) -> Option<Self> {
        self.node
            .child_by_field_name(field)
            .map(|node| self.with(node))
    }

    /// All children stored under `field`, in source order.
    pub fn get_all(&self, field: &str) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children_by_field_name(field, &mut cursor)
            .map(|node| self.with(node))
            .collect()
    }

    /// Named children, skipping comments.
    pub fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|node| self.with(node))
            .collect()
    }

    /// Every child including anonymous tokens such as `static` or `?`.
    pub fn all_children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|node| self.with(node))
            .collect()
    }

    pub fn child_of_kind(&self, kind: &str) -> Option<Self> {
        self.children().into_iter().find(|child| child.is(kind))
    }

    /// Whether any direct child (named or anonymous) is the token `token`.
    pub fn has_token(&self, token: &str) -> bool {
        let mut cursor = self.node.walk();
        let found = self
            .node
            .children(&mut cursor)
            .any(|child| child.kind() == token);
        found
    }

    /// Is this node the value stored under `field` of its parent?
    pub fn is_field_of_parent(&self, field: &str) -> bool {
        self.parent()
            .and_then(|parent| parent.get(field))
            .is_some_and(|child| child == *self)
    }

    /// Strip any number of wrapping parentheses.
    pub fn unwrap_parens(self) -> Self {
        let mut current = self;
        while current.is("parenthesized_expression") {
            match current.children().into_iter().next() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            next: self.parent(),
        }
    }

    pub fn program(&self) -> Self {
        self.file.root()
    }
}

pub struct Ancestors<'a> {
    next: Option<NodePath<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodePath<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
