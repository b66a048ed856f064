//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{xint, xint_literals, FixedWidth, Int, Primitive, Uint, Xint};

#[doc(no_inline)]
pub use crate::types::*;
