//! Ambient scope state and the release guard

use std::any::Any;

/// The shapes of state a scope can be opened with.
///
/// Backends dispatch on the variant; shapes a backend has no register for
/// expand to [`Scope::none`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeState {
    /// A plain textual annotation
    Text(String),
    /// Key/value annotations, one stack entry per pair
    Pairs(Vec<(String, String)>),
}

impl From<&str> for ScopeState {
    fn from(text: &str) -> Self {
        ScopeState::Text(text.to_owned())
    }
}

impl From<String> for ScopeState {
    fn from(text: String) -> Self {
        ScopeState::Text(text)
    }
}

impl From<Vec<(String, String)>> for ScopeState {
    fn from(pairs: Vec<(String, String)>) -> Self {
        ScopeState::Pairs(pairs)
    }
}

/// Releases everything a [`begin_scope`](crate::Logger::begin_scope) call
/// pushed, in reverse push order, on every exit path including unwinding.
///
/// Entries are deliberately not `Send`: releasing must happen on the
/// thread that opened the scope, since backends keep ambient context in
/// thread-local stacks.
pub struct Scope {
    entries: Vec<Box<dyn Any>>,
}

impl Scope {
    /// A scope that pushed nothing and releases nothing.
    pub fn none() -> Self {
        Self { entries: Vec::new() }
    }

    /// A scope owning backend-supplied entries; each entry's `Drop` undoes
    /// one push.
    pub fn from_entries(entries: Vec<Box<dyn Any>>) -> Self {
        Self { entries }
    }

    /// Whether this scope holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries this scope will release.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        // Release LIFO so nested pushes onto the same stack unwind cleanly.
        while let Some(entry) = self.entries.pop() {
            drop(entry);
        }
    }
}
