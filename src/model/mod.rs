//! Element model for sequence diffing.
//!
//! The engine is generic over any type implementing [`Updatable`]. This
//! module defines that trait, value-equality impls for scalars, the
//! [`ByValue`] wrapper, and [`Record`], the JSON element type used by the
//! command-line front end.

mod record;
mod updatable;

pub use record::Record;
pub use updatable::{ByValue, Updatable};
