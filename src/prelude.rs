//! Crate prelude.

// The actual prelude.
pub use crate::{
    iter::{IntoIter, Iter},
    set::{EquivSet, FnEquivSet},
};

// Convenient imports within the crate.
pub(crate) use std::fmt::{Debug, Formatter, Result as FmtResult};
