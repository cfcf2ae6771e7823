//! Pure point-sequence geometry behind the reveal masks.
//!
//! Every function here is total: degenerate input (empty, single point, zero length) comes
//! back unchanged instead of failing.

pub(crate) mod filter;
pub(crate) mod path_data;
pub(crate) mod points;
pub(crate) mod polygon;
pub(crate) mod portion;
