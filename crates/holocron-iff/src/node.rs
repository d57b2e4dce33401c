//! IFF node tree.

use holocron_common::Tag;

/// A node in the IFF tree.
///
/// Chunk payloads borrow from the buffer the tree was parsed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node<'a> {
    /// A container of child nodes.
    Form {
        /// Subtype tag (the four bytes after `FORM`).
        tag: Tag,
        /// Declared size, including the subtype.
        size: u32,
        /// Children in file order.
        children: Vec<Node<'a>>,
    },
    /// A leaf with an opaque payload.
    Chunk {
        tag: Tag,
        size: u32,
        #[cfg_attr(feature = "serde", serde(skip))]
        data: &'a [u8],
    },
}

impl<'a> Node<'a> {
    /// The form subtype or chunk tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Node::Form { tag, .. } | Node::Chunk { tag, .. } => *tag,
        }
    }

    /// The declared size field.
    #[inline]
    pub fn size(&self) -> u32 {
        match self {
            Node::Form { size, .. } | Node::Chunk { size, .. } => *size,
        }
    }

    #[inline]
    pub fn is_form(&self) -> bool {
        matches!(self, Node::Form { .. })
    }

    #[inline]
    pub fn is_chunk(&self) -> bool {
        matches!(self, Node::Chunk { .. })
    }

    /// Children of a form; empty for a chunk.
    #[inline]
    pub fn children(&self) -> &[Node<'a>] {
        match self {
            Node::Form { children, .. } => children,
            Node::Chunk { .. } => &[],
        }
    }

    /// Payload of a chunk; `None` for a form.
    #[inline]
    pub fn data(&self) -> Option<&'a [u8]> {
        match self {
            Node::Chunk { data, .. } => Some(data),
            Node::Form { .. } => None,
        }
    }

    /// Visit this node and all descendants depth-first, with their depth.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Node<'a>, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&Node<'a>, usize),
    {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}
