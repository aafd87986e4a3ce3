//! Convenience re-exports for common versor-core types.
//!
//! ```rust
//! use versor_core::prelude::*;
//! ```

pub use crate::lines::meaningful_line_count;
pub use crate::phrase::{say, Phrase};
pub use crate::powers::powers;
pub use crate::quaternion::Quaternion;
pub use crate::search::first_then_apply;
pub use crate::tree::Bst;
pub use crate::Result;
pub use crate::VersorError;
