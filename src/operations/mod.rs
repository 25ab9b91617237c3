//! Set operations over canonical interval slices.
//!
//! Every function here is pure: operands are borrowed and a freshly allocated
//! canonical `Vec` is returned. The only boundary arithmetic in the engine is
//! the `end + 1` adjacency test of [`compute_union`] and the `begin - 1` /
//! `end + 1` gap bounds of [`compute_complement`]; both go through the
//! checked successor and predecessor of [`Domain`](crate::domain::Domain).

mod complement;
mod difference;
mod intersection;
mod union;

pub use complement::compute_complement;
pub use difference::{compute_difference, compute_symmetric_difference};
pub use intersection::compute_intersection;
pub use union::compute_union;

pub(crate) use union::normalize;

pub mod assertions;
