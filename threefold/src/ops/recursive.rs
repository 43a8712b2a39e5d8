//! The direct-recursive strategy: every function is its own definition,
//! calling itself on the tail of the list.
//!
//! These are the forms the other two strategies are measured against. They
//! use one stack frame per element, so very long lists (beyond a few tens
//! of thousands of elements) risk exhausting the call stack; prefer
//! [`tail_recursive`](crate::ops::tail_recursive) or
//! [`iterative`](crate::ops::iterative) for such inputs.

use num_traits::Zero;

use crate::error::UnderflowError;
use crate::list::List;

pub fn length<T>(list: &List<T>) -> usize {
    match list.split_first() {
        None => 0,
        Some((_, rest)) => 1 + length(rest),
    }
}

pub fn sum<T: Copy + Zero>(list: &List<T>) -> T {
    match list.split_first() {
        None => T::zero(),
        Some((value, rest)) => *value + sum(rest),
    }
}

pub fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool {
    match list.split_first() {
        None => false,
        Some((value, _)) if value == needle => true,
        Some((_, rest)) => contains(rest, needle),
    }
}

pub fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
    if count == 0 {
        return Ok(list.clone());
    }
    match list.split_first() {
        None => Err(UnderflowError::TooFewElements),
        Some((_, rest)) => drop_front(rest, count - 1),
    }
}

pub fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
    if count == 0 {
        return Ok(List::new());
    }
    match list.split_first() {
        None => Err(UnderflowError::TooFewElements),
        Some((value, rest)) => Ok(keep_front(rest, count - 1)?.cons(value.clone())),
    }
}

pub fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T> {
    match x.split_first() {
        None => y.clone(),
        Some((value, rest)) => concat(rest, y).cons(value.clone()),
    }
}

pub fn append<T: Clone>(list: &List<T>, value: T) -> List<T> {
    concat(list, &List::singleton(value))
}

/// The definitional reverse: append the head to the reversed tail. Each
/// `append` re-walks the partial result, so the whole thing costs O(n²).
/// The other strategies compute the same list in O(n).
pub fn reverse<T: Clone>(list: &List<T>) -> List<T> {
    match list.split_first() {
        None => List::new(),
        Some((value, rest)) => append(&reverse(rest), value.clone()),
    }
}
