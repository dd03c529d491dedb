//! Decoration builders, one module per decoration family.
//!
//! Each builder takes the in-progress [`Assembly`](crate::builder::Assembly)
//! and hangs its nodes under the cake root. Anything placed on top of the
//! cake reads its height and radius from the shared tier layout.

pub(crate) mod candles;
pub(crate) mod flavor;
pub(crate) mod flowers;
pub(crate) mod sprinkles;
pub(crate) mod topper;
