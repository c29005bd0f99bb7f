//! `log`-crate backend for `lumen-logging`
//!
//! Routes facade records into whatever logger the `log` crate has
//! installed, and adds ambient scopes on top: thread-local named stacks
//! that scope registers push onto and whose live entries are appended to
//! each emitted message.
//!
//! ```no_run
//! use lumen_logging::{log_args, LogContext, ScopeState};
//! use lumen_logging_log::LogBridgeConfiguratorExt;
//!
//! let ctx = LogContext::new();
//! ctx.configure().use_log_bridge()?;
//!
//! let log = ctx.create_logger("app::Startup");
//! let _scope = log.begin_scope(&ScopeState::from("boot"));
//! log.info("listening on {Port}", log_args![8080]);
//! # Ok::<(), lumen_logging::Error>(())
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod bridge;
mod registry;
pub mod scope;

pub use bridge::{BridgeOptions, LogCrateLogger, LogCrateProvider};
pub use registry::{PairsScopeRegister, ScopeRegister, ScopeRegistry, TextScopeRegister};

use lumen_logging::{Configurator, Result};
use std::sync::Arc;

/// Adds `log`-crate backend selection to the configurator.
pub trait LogBridgeConfiguratorExt {
    /// Route the facade to the `log` crate with default options.
    fn use_log_bridge(&self) -> Result<&Self>;

    /// Route the facade to the `log` crate.
    fn use_log_bridge_with(&self, options: BridgeOptions) -> Result<&Self>;
}

impl LogBridgeConfiguratorExt for Configurator<'_> {
    fn use_log_bridge(&self) -> Result<&Self> {
        self.use_log_bridge_with(BridgeOptions::default())
    }

    fn use_log_bridge_with(&self, options: BridgeOptions) -> Result<&Self> {
        self.use_provider(Arc::new(LogCrateProvider::with_options(options)))?;
        Ok(self)
    }
}
