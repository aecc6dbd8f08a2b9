//! In-flight generation requests

use super::forms::IdeaKind;
use std::collections::HashSet;

/// Kind of generation call; at most one of each may be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Idea(IdeaKind),
    Extract,
    Compose,
}

#[derive(Debug, Clone, Default)]
pub struct BusySet(HashSet<Operation>);

impl BusySet {
    /// Mark `op` as running. Returns false when it already is.
    pub fn try_begin(&mut self, op: Operation) -> bool {
        self.0.insert(op)
    }

    pub fn finish(&mut self, op: Operation) {
        self.0.remove(&op);
    }

    pub fn is_busy(&self, op: Operation) -> bool {
        self.0.contains(&op)
    }

    pub fn any(&self) -> bool {
        !self.0.is_empty()
    }
}
