//! # Equivalence sets
//!
//! A hash set whose notion of element equality is supplied by the caller at construction, instead
//! of coming from the element type's [`PartialEq`] and [`Hash`](std::hash::Hash) implementations.
//! This lets a single collection redefine "sameness" per instance, e.g. treat all even numbers as
//! one element:
//!
//! ```
//! use equivset::prelude::*;
//!
//! let mut set = EquivSet::new(
//!     |a: &u32, b: &u32| (a % 2 == 0 && b % 2 == 0) || a == b,
//!     |x: &u32| if x % 2 == 0 { 2 } else { u64::from(*x) },
//! );
//!
//! assert!(set.insert(2));
//! assert!(!set.insert(4));
//! assert!(set.contains(&6));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod iter;
pub mod prelude;
pub mod set;
