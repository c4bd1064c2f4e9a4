//! Configuration values shared across the tiny compiler pipeline.
//!
//! Each public item documents its purpose with a minimal usage example so
//! downstream crates stay declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// OUTPUT PUNCTUATION
// =============================================================================

/// Text appended to a rendered top-level call.
///
/// # Examples
/// ```
/// use config::constants::STATEMENT_TERMINATOR;
/// assert_eq!(format!("add(1, 2){STATEMENT_TERMINATOR}"), "add(1, 2);");
/// ```
pub const STATEMENT_TERMINATOR: &str = ";";

/// Separator placed between rendered call arguments.
///
/// # Examples
/// ```
/// use config::constants::ARGUMENT_SEPARATOR;
/// assert_eq!(["1", "2"].join(ARGUMENT_SEPARATOR), "1, 2");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Separator placed between rendered program statements.
///
/// # Examples
/// ```
/// use config::constants::STATEMENT_SEPARATOR;
/// assert_eq!(["a(1);", "b(2);"].join(STATEMENT_SEPARATOR), "a(1);\nb(2);");
/// ```
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Input compiled by the demonstration binary when no source is given.
///
/// # Examples
/// ```
/// use config::constants::DEMO_SOURCE;
/// assert!(DEMO_SOURCE.starts_with('('));
/// ```
pub const DEMO_SOURCE: &str = "(add 2 (subtract 4 2))";

// =============================================================================
// RECURSION LIMITS
// =============================================================================

/// Bytes of stack allocated when a recursive stage grows its stack using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which a recursive stage asks `stacker` for more.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// PARSER POLICY
// =============================================================================

/// What the parser does when a call's parameter list runs out of tokens
/// before its closing `)`.
///
/// # Examples
/// ```
/// use config::constants::UnclosedCallPolicy;
/// assert_eq!(UnclosedCallPolicy::default(), UnclosedCallPolicy::Reject);
/// assert_eq!(UnclosedCallPolicy::Truncate.to_string(), "truncate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnclosedCallPolicy {
    /// Fail the parse with an out-of-tokens error.
    #[default]
    Reject,
    /// Close the call with the parameters collected so far.
    Truncate,
}

impl fmt::Display for UnclosedCallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnclosedCallPolicy::Reject => write!(f, "reject"),
            UnclosedCallPolicy::Truncate => write!(f, "truncate"),
        }
    }
}

/// Settings threaded through one compile call.
///
/// # Examples
/// ```
/// use config::constants::{CompilerConfig, UnclosedCallPolicy};
/// let cfg = CompilerConfig::new(UnclosedCallPolicy::Truncate);
/// assert_eq!(cfg.unclosed_calls, UnclosedCallPolicy::Truncate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompilerConfig {
    /// Handling of a parameter list that is never closed.
    pub unclosed_calls: UnclosedCallPolicy,
}

impl CompilerConfig {
    /// Builds a configuration with the given unclosed-call policy.
    pub const fn new(unclosed_calls: UnclosedCallPolicy) -> Self {
        Self { unclosed_calls }
    }
}
