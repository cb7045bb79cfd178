//! Individual value generators.
//!
//! Each module covers one family of column values. All generators take the
//! RNG explicitly; none touch ambient random state.

pub mod date;
pub mod name;
pub mod numeric;
pub mod pattern;
