//! Stack-based navigation over a parsed IFF tree.

use holocron_common::{BinaryReader, Tag};
use log::trace;

use crate::{Error, Node, Result};

/// Where the cursor currently points.
#[derive(Debug, Clone, Copy)]
enum Context<'t, 'a> {
    /// A list of sibling nodes (the top level or a form's children).
    Nodes(&'t [Node<'a>]),
    /// A single chunk.
    Chunk { tag: Tag, data: &'a [u8] },
}

/// A cursor over an [`Iff`](crate::Iff) tree.
///
/// Every `enter_*` pushes the current context and every `exit_*` pops it, so
/// navigation always returns exactly where the matching enter started.
/// Exiting without a matching enter is a programming error and panics.
#[derive(Debug, Clone)]
pub struct IffReader<'t, 'a> {
    current: Context<'t, 'a>,
    stack: Vec<Context<'t, 'a>>,
}

impl<'t, 'a> IffReader<'t, 'a> {
    /// Create a cursor over a list of top-level nodes.
    pub fn new(nodes: &'t [Node<'a>]) -> Self {
        Self {
            current: Context::Nodes(nodes),
            stack: Vec::new(),
        }
    }

    /// Number of enters not yet matched by an exit.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The sibling nodes under the cursor; empty while inside a chunk.
    pub fn children(&self) -> &'t [Node<'a>] {
        match self.current {
            Context::Nodes(nodes) => nodes,
            Context::Chunk { .. } => &[],
        }
    }

    /// Tag of the chunk under the cursor, if any.
    pub fn current_chunk_tag(&self) -> Option<Tag> {
        match self.current {
            Context::Chunk { tag, .. } => Some(tag),
            Context::Nodes(_) => None,
        }
    }

    /// Enter the first form with subtype `name`.
    pub fn enter_form(&mut self, name: &str) -> Result<()> {
        self.enter_form_at(name, 0)
    }

    /// Enter the `occurrence`-th form with subtype `name`.
    pub fn enter_form_at(&mut self, name: &str, occurrence: usize) -> Result<()> {
        let nodes = self.nodes_for(name)?;
        let form = nodes
            .iter()
            .filter(|node| node.is_form() && node.tag().matches(name))
            .nth(occurrence)
            .ok_or_else(|| Error::FormNotFound {
                name: name.to_string(),
                occurrence,
            })?;

        trace!("enter form {} (occurrence {})", name, occurrence);
        self.stack.push(self.current);
        self.current = Context::Nodes(form.children());
        Ok(())
    }

    /// Return to the context that the matching `enter_form` left.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is on a chunk or nothing has been entered.
    pub fn exit_form(&mut self) {
        assert!(
            matches!(self.current, Context::Nodes(_)),
            "exit_form called while positioned on a chunk"
        );
        self.pop("exit_form");
    }

    /// Enter the first chunk tagged `name`.
    pub fn enter_chunk(&mut self, name: &str) -> Result<()> {
        self.enter_chunk_at(name, 0)
    }

    /// Enter the `occurrence`-th chunk tagged `name`.
    pub fn enter_chunk_at(&mut self, name: &str, occurrence: usize) -> Result<()> {
        let nodes = self.nodes_for(name)?;
        let (tag, data) = nodes
            .iter()
            .filter(|node| node.tag().matches(name))
            .filter_map(|node| node.data().map(|data| (node.tag(), data)))
            .nth(occurrence)
            .ok_or_else(|| Error::ChunkNotFound {
                name: name.to_string(),
                occurrence,
            })?;

        trace!("enter chunk {} ({} bytes)", name, data.len());
        self.stack.push(self.current);
        self.current = Context::Chunk { tag, data };
        Ok(())
    }

    /// Return to the context that the matching `enter_chunk` left.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a chunk.
    pub fn exit_chunk(&mut self) {
        assert!(
            matches!(self.current, Context::Chunk { .. }),
            "exit_chunk called while not positioned on a chunk"
        );
        self.pop("exit_chunk");
    }

    /// Raw payload of the chunk under the cursor.
    pub fn chunk_data(&self) -> Result<&'a [u8]> {
        match self.current {
            Context::Chunk { data, .. } => Ok(data),
            Context::Nodes(_) => Err(Error::NotInChunk),
        }
    }

    /// A [`BinaryReader`] over the chunk under the cursor.
    pub fn chunk_reader(&self) -> Result<BinaryReader<'a>> {
        self.chunk_data().map(BinaryReader::new)
    }

    /// Whether a form with subtype `name` exists under the cursor.
    pub fn has_form(&self, name: &str) -> bool {
        self.form_count(name) > 0
    }

    /// Number of forms with subtype `name` under the cursor.
    pub fn form_count(&self, name: &str) -> usize {
        self.children()
            .iter()
            .filter(|node| node.is_form() && node.tag().matches(name))
            .count()
    }

    /// Whether a chunk tagged `name` exists under the cursor.
    pub fn has_chunk(&self, name: &str) -> bool {
        self.chunk_count(name) > 0
    }

    /// Number of chunks tagged `name` under the cursor.
    pub fn chunk_count(&self, name: &str) -> usize {
        self.children()
            .iter()
            .filter(|node| node.is_chunk() && node.tag().matches(name))
            .count()
    }

    fn nodes_for(&self, name: &str) -> Result<&'t [Node<'a>]> {
        match self.current {
            Context::Nodes(nodes) => Ok(nodes),
            Context::Chunk { tag, .. } => Err(Error::InsideChunk {
                name: name.to_string(),
                chunk: tag,
            }),
        }
    }

    fn pop(&mut self, caller: &str) {
        match self.stack.pop() {
            Some(parent) => self.current = parent,
            None => panic!("{} called without a matching enter", caller),
        }
    }
}
