//! The list algorithms, in three strategies with identical observable
//! behavior.
//!
//! - [`recursive`] is the definitional form: each function calls itself on
//!   the tail. Call-stack usage grows linearly with the input, so it is
//!   comfortable up to a few tens of thousands of elements and should be
//!   avoided beyond that.
//! - [`tail_recursive`] is the accumulator-passing form. Rust makes no
//!   tail-call-elimination guarantee, so the self-call is spelled as
//!   rebinding of loop state; the control stack stays O(1) either way.
//! - [`iterative`] walks the list with ordinary loops and iterators. This
//!   is the strategy to use when not comparing strategies.
//!
//! The only deliberate asymmetry is `reverse`: the direct-recursive form is
//! the `append`-per-element definition and costs O(n²), while the other two
//! build the reversed list by prepending in O(n). Outputs are identical in
//! every case; `benches/reverse.rs` makes the cost difference visible.
//!
//! [`ListOps`] names the shared contract, and the unit types [`Recursive`],
//! [`TailRecursive`] and [`Iterative`] let test suites and benchmarks be
//! generic over the strategy.

pub mod iterative;
pub mod recursive;
pub mod tail_recursive;

use num_traits::Zero;

use crate::error::UnderflowError;
use crate::list::List;

/// The contract shared by all three strategies.
///
/// Every method is a pure function of its arguments; no operation mutates
/// an existing node.
pub trait ListOps {
    /// The number of elements.
    fn length<T>(list: &List<T>) -> usize;

    /// The sum of the elements; the empty list sums to zero.
    fn sum<T: Copy + Zero>(list: &List<T>) -> T;

    /// Whether `needle` equals any element. Scanning stops at the first
    /// match.
    fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool;

    /// The list without its first `count` elements. The result aliases the
    /// source's nodes; `count == 0` returns the source itself. Fails when
    /// `count` exceeds the length.
    fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError>;

    /// A freshly-built list of the first `count` elements, in order. Never
    /// aliases the source. Fails when `count` exceeds the length.
    fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError>;

    /// All of `x` followed by all of `y`. `x`'s spine is rebuilt with fresh
    /// nodes; `y` is shared as the tail of the result, and `concat(empty, y)`
    /// is `y` itself.
    fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T>;

    /// `list` with `value` added at the end: `concat(list, singleton)`.
    fn append<T: Clone>(list: &List<T>, value: T) -> List<T>;

    /// The elements in opposite order.
    fn reverse<T: Clone>(list: &List<T>) -> List<T>;
}

/// Strategy handle for [`recursive`].
#[derive(Debug, Clone, Copy)]
pub struct Recursive;

/// Strategy handle for [`tail_recursive`].
#[derive(Debug, Clone, Copy)]
pub struct TailRecursive;

/// Strategy handle for [`iterative`].
#[derive(Debug, Clone, Copy)]
pub struct Iterative;

impl ListOps for Recursive {
    fn length<T>(list: &List<T>) -> usize {
        recursive::length(list)
    }

    fn sum<T: Copy + Zero>(list: &List<T>) -> T {
        recursive::sum(list)
    }

    fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool {
        recursive::contains(list, needle)
    }

    fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        recursive::drop_front(list, count)
    }

    fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        recursive::keep_front(list, count)
    }

    fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T> {
        recursive::concat(x, y)
    }

    fn append<T: Clone>(list: &List<T>, value: T) -> List<T> {
        recursive::append(list, value)
    }

    fn reverse<T: Clone>(list: &List<T>) -> List<T> {
        recursive::reverse(list)
    }
}

impl ListOps for TailRecursive {
    fn length<T>(list: &List<T>) -> usize {
        tail_recursive::length(list)
    }

    fn sum<T: Copy + Zero>(list: &List<T>) -> T {
        tail_recursive::sum(list)
    }

    fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool {
        tail_recursive::contains(list, needle)
    }

    fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        tail_recursive::drop_front(list, count)
    }

    fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        tail_recursive::keep_front(list, count)
    }

    fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T> {
        tail_recursive::concat(x, y)
    }

    fn append<T: Clone>(list: &List<T>, value: T) -> List<T> {
        tail_recursive::append(list, value)
    }

    fn reverse<T: Clone>(list: &List<T>) -> List<T> {
        tail_recursive::reverse(list)
    }
}

impl ListOps for Iterative {
    fn length<T>(list: &List<T>) -> usize {
        iterative::length(list)
    }

    fn sum<T: Copy + Zero>(list: &List<T>) -> T {
        iterative::sum(list)
    }

    fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool {
        iterative::contains(list, needle)
    }

    fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        iterative::drop_front(list, count)
    }

    fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
        iterative::keep_front(list, count)
    }

    fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T> {
        iterative::concat(x, y)
    }

    fn append<T: Clone>(list: &List<T>, value: T) -> List<T> {
        iterative::append(list, value)
    }

    fn reverse<T: Clone>(list: &List<T>) -> List<T> {
        iterative::reverse(list)
    }
}
