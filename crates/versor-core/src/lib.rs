//! # versor-core
//!
//! Small value-semantics toolkit:
//! - `Quaternion` — immutable hypercomplex numbers with Hamilton product
//!   and a canonical compact rendering
//! - `Phrase` — persistent word chains built by repeated extension
//! - `Bst` — persistent binary search tree with structure sharing
//! - Sequence utilities: first-match transform, bounded power iterator,
//!   meaningful line counting

pub mod error;
pub mod lines;
pub mod phrase;
pub mod powers;
pub mod prelude;
pub mod quaternion;
pub mod search;
pub mod tree;

pub use error::VersorError;
pub use lines::meaningful_line_count;
pub use phrase::{say, Phrase};
pub use powers::{powers, Powers};
pub use quaternion::Quaternion;
pub use search::first_then_apply;
pub use tree::Bst;

pub type Result<T> = std::result::Result<T, VersorError>;
