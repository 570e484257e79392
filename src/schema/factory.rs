//! Schema node storage
//!
//! A [`SchemaArena`] plays the factory role: it allocates storage for
//! every schema node created through it and drops them together.
//! Composite schemas reference children by [`SchemaHandle`], never by
//! ownership, so one arena controls the lifetime of a whole schema tree.

use super::types::{BoolSchema, NullSchema, Schema};

/// Identifies one schema node inside a [`SchemaArena`].
///
/// Handles are plain indices: cheap to copy and only meaningful with
/// the arena that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaHandle(usize);

impl SchemaHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index this handle refers to.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Owns the storage of every schema node allocated through it.
///
/// Nodes are inserted bottom-up: a child must be inserted (yielding its
/// handle) before any parent that references it. Dropping the arena
/// drops exactly the nodes it allocated, never nodes owned elsewhere.
#[derive(Debug, Default)]
pub struct SchemaArena {
    nodes: Vec<Schema>,
}

impl SchemaArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its handle.
    pub fn insert(&mut self, schema: impl Into<Schema>) -> SchemaHandle {
        let handle = SchemaHandle::new(self.nodes.len());
        self.nodes.push(schema.into());
        handle
    }

    /// Stores an unconstrained boolean schema.
    pub fn bool(&mut self) -> SchemaHandle {
        self.insert(BoolSchema::new())
    }

    /// Stores an unconstrained null schema.
    pub fn null(&mut self) -> SchemaHandle {
        self.insert(NullSchema::new())
    }

    /// Stores a wildcard schema that matches every value.
    pub fn any(&mut self) -> SchemaHandle {
        self.insert(Schema::Any)
    }

    /// Resolves a handle to its node.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this arena.
    pub fn get(&self, handle: SchemaHandle) -> &Schema {
        &self.nodes[handle.index()]
    }

    /// Returns the number of nodes held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes have been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
