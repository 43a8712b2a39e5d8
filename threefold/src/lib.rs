//! Immutable singly-linked lists whose algorithms come in three equivalent
//! strategies: direct recursion, tail recursion, and iterative looping.
//!
//! The point of the crate is the comparison. All three strategies implement
//! one contract, [`ops::ListOps`], and are checked against the same oracle
//! by a shared property-based test suite. Outside of that comparison,
//! [`ops::iterative`] is the strategy to reach for; the direct-recursive
//! functions consume call stack proportional to the length of their input.
//!
//! ```
//! use threefold::list::List;
//! use threefold::ops::iterative;
//!
//! let list: List<i64> = [5, 6, 7].into_iter().collect();
//! assert_eq!(iterative::length(&list), 3);
//! assert_eq!(iterative::sum(&list), 18);
//! assert_eq!(iterative::reverse(&list).to_vec(), vec![7, 6, 5]);
//! ```

pub mod error;
pub mod list;
pub mod ops;
pub mod prelude;
