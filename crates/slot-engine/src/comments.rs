//! Free-text comment feature backed by a pluggable store.
//!
//! The scheduling pages carry a comment box; its behavior is deliberately
//! thin. Listing returns at most a caller-chosen number of stored bodies with
//! no ordering promise, and adding is gated on a caller-supplied flag so a
//! submitted form can decline storage. No transactional semantics.

use crate::error::Result;

/// Number of comments listed when the caller does not say otherwise.
pub const DEFAULT_MAX_COMMENTS: usize = 10;

/// Storage backend for comment bodies.
///
/// The contract is minimal: `put` appends a body, `scan` returns at most
/// `max` stored bodies. Implementations choose the order `scan` yields.
pub trait CommentStore {
    /// Append a comment body.
    fn put(&mut self, body: String) -> Result<()>;

    /// Return at most `max` stored comment bodies.
    fn scan(&self, max: usize) -> Result<Vec<String>>;
}

/// In-memory comment store. Scans in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: Vec<String>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommentStore for MemoryCommentStore {
    fn put(&mut self, body: String) -> Result<()> {
        self.comments.push(body);
        Ok(())
    }

    fn scan(&self, max: usize) -> Result<Vec<String>> {
        Ok(self.comments.iter().take(max).cloned().collect())
    }
}

/// The comment surface the surrounding application talks to.
#[derive(Debug, Default)]
pub struct CommentBoard<S: CommentStore> {
    store: S,
}

impl<S: CommentStore> CommentBoard<S> {
    pub fn new(store: S) -> Self {
        CommentBoard { store }
    }

    /// Store a comment when `should_add` says so; otherwise a no-op.
    ///
    /// Returns whether the comment was stored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SlotError::Store`] when the backend fails to append.
    pub fn add_comment(&mut self, body: &str, should_add: bool) -> Result<bool> {
        if !should_add {
            return Ok(false);
        }
        self.store.put(body.to_string())?;
        Ok(true)
    }

    /// List at most `max` stored comment bodies.
    pub fn list_comments(&self, max: usize) -> Result<Vec<String>> {
        self.store.scan(max)
    }

    /// List comments with the default cap of [`DEFAULT_MAX_COMMENTS`].
    pub fn recent_comments(&self) -> Result<Vec<String>> {
        self.list_comments(DEFAULT_MAX_COMMENTS)
    }
}
