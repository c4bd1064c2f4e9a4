//! # Tiny Transform
//!
//! Rewrites the source AST into the C-like target AST.
//!
//! ## Architecture
//!
//! ```text
//! Source AST → Traverser (Transformer handlers) → Target AST
//! ```
//!
//! ## Module Structure
//!
//! - `traverser` - Generic depth-first walk and the `Visitor` trait
//! - `transformer` - Handlers producing the target tree
//! - `target` - Target node types
//!
//! ## Example
//!
//! ```rust
//! let source = tiny_parser::parse("(print x)").unwrap();
//! let target = tiny_transform::transform(&source).unwrap();
//! assert_eq!(target.body.len(), 1);
//! ```

pub mod error;
pub mod target;
pub mod transformer;
pub mod traverser;

// Re-export public API
pub use error::TransformError;
pub use transformer::{transform, Transformer};
pub use traverser::{traverse, Parent, Visit, Visitor};
