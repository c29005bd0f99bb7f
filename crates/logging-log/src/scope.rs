//! Thread-local named scope stacks
//!
//! The `log` crate has no ambient context of its own, so this backend
//! keeps one per thread: a set of named stacks the scope registers push
//! onto, rendered as annotations on every record emitted while entries
//! are live.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Stack used for plain textual scope state.
pub const DEFAULT_STACK: &str = "scope";

thread_local! {
    static STACKS: RefCell<BTreeMap<String, Vec<String>>> = RefCell::new(BTreeMap::new());
}

/// One pushed entry; popping happens when the entry is dropped, on the
/// thread that pushed it.
pub struct StackEntry {
    stack: String,
}

/// Push `value` onto the named stack of the current thread.
pub fn push(stack: &str, value: impl Into<String>) -> StackEntry {
    STACKS.with(|stacks| {
        stacks
            .borrow_mut()
            .entry(stack.to_owned())
            .or_default()
            .push(value.into());
    });
    StackEntry {
        stack: stack.to_owned(),
    }
}

impl Drop for StackEntry {
    fn drop(&mut self) {
        STACKS.with(|stacks| {
            let mut stacks = stacks.borrow_mut();
            if let Some(entries) = stacks.get_mut(&self.stack) {
                entries.pop();
                if entries.is_empty() {
                    stacks.remove(&self.stack);
                }
            }
        });
    }
}

/// Total number of live entries across all of this thread's stacks.
pub fn depth() -> usize {
    STACKS.with(|stacks| stacks.borrow().values().map(Vec::len).sum())
}

/// Snapshot of this thread's stacks as `(name, innermost-first entries)`
/// pairs, ordered by stack name.
pub fn annotations() -> Vec<(String, Vec<String>)> {
    STACKS.with(|stacks| {
        stacks
            .borrow()
            .iter()
            .map(|(name, entries)| {
                let mut entries = entries.clone();
                entries.reverse();
                (name.clone(), entries)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_pop_on_drop() {
        assert_eq!(depth(), 0);
        let outer = push(DEFAULT_STACK, "outer");
        {
            let _inner = push(DEFAULT_STACK, "inner");
            assert_eq!(depth(), 2);
            assert_eq!(
                annotations(),
                vec![(
                    DEFAULT_STACK.to_owned(),
                    vec!["inner".to_owned(), "outer".to_owned()]
                )]
            );
        }
        assert_eq!(depth(), 1);
        drop(outer);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn stacks_are_independent_per_name() {
        let _a = push("user", "alice");
        let _b = push("request", "42");
        assert_eq!(depth(), 2);
        let names: Vec<_> = annotations().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["request".to_owned(), "user".to_owned()]);
    }
}
