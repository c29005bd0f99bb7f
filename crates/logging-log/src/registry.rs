//! Scope registers and the registry dispatching on state shape

use crate::scope::{self, DEFAULT_STACK};
use lumen_logging::{Scope, ScopeState};
use std::any::Any;

/// Expands one shape of [`ScopeState`] into stack entries.
///
/// Registers declare which shapes they accept; the registry consults them
/// in reverse registration order so later registers can override the
/// built-ins for the shapes they match.
pub trait ScopeRegister: Send + Sync {
    /// Whether this register handles `state`.
    fn matches(&self, state: &ScopeState) -> bool;

    /// Push entries for `state`; each returned value pops one entry when
    /// dropped.
    fn add_to_scope(&self, state: &ScopeState) -> Vec<Box<dyn Any>>;
}

/// Dispatch table from state shapes to registers.
pub struct ScopeRegistry {
    registers: Vec<Box<dyn ScopeRegister>>,
}

impl ScopeRegistry {
    /// A registry with the built-in text and key/value registers.
    pub fn new() -> Self {
        Self::empty()
            .with_register(Box::new(TextScopeRegister))
            .with_register(Box::new(PairsScopeRegister))
    }

    /// A registry handling no shapes; every scope expands to nothing.
    pub fn empty() -> Self {
        Self {
            registers: Vec::new(),
        }
    }

    /// Append a register, which takes precedence over earlier ones for
    /// the shapes it matches.
    pub fn with_register(mut self, register: Box<dyn ScopeRegister>) -> Self {
        self.registers.push(register);
        self
    }

    /// Expand `state` into a scope; unmatched shapes yield
    /// [`Scope::none`].
    pub fn expand(&self, state: &ScopeState) -> Scope {
        for register in self.registers.iter().rev() {
            if register.matches(state) {
                return Scope::from_entries(register.add_to_scope(state));
            }
        }
        Scope::none()
    }
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes textual state onto the default stack.
pub struct TextScopeRegister;

impl ScopeRegister for TextScopeRegister {
    fn matches(&self, state: &ScopeState) -> bool {
        matches!(state, ScopeState::Text(_))
    }

    fn add_to_scope(&self, state: &ScopeState) -> Vec<Box<dyn Any>> {
        let ScopeState::Text(text) = state else {
            return Vec::new();
        };
        vec![Box::new(scope::push(DEFAULT_STACK, text.clone())) as Box<dyn Any>]
    }
}

/// Pushes each value onto a stack named by its key, one entry per pair.
pub struct PairsScopeRegister;

impl ScopeRegister for PairsScopeRegister {
    fn matches(&self, state: &ScopeState) -> bool {
        matches!(state, ScopeState::Pairs(_))
    }

    fn add_to_scope(&self, state: &ScopeState) -> Vec<Box<dyn Any>> {
        let ScopeState::Pairs(pairs) = state else {
            return Vec::new();
        };
        pairs
            .iter()
            .map(|(key, value)| Box::new(scope::push(key, value.clone())) as Box<dyn Any>)
            .collect()
    }
}
