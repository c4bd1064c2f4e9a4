//! # Config Crate
//!
//! Centralized configuration for the tiny compiler pipeline.
//! Output punctuation, stack-growth limits and the parser's policy for
//! unclosed calls are defined here so every stage renders and recovers
//! the same way.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CompilerConfig, UnclosedCallPolicy, STATEMENT_TERMINATOR};
//!
//! let cfg = CompilerConfig::default();
//! assert_eq!(cfg.unclosed_calls, UnclosedCallPolicy::Reject);
//! assert_eq!(STATEMENT_TERMINATOR, ";");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Environment**: Nothing here reads files or environment variables
//! - **Copyable**: `CompilerConfig` is `Copy` and can be handed to any worker

pub mod constants;
