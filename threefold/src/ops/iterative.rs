//! The loop-based strategy: ordinary Rust iteration over the list's
//! cursor, written the way one would outside of a strategy comparison.
//!
//! Control stack is O(1) for every function here; `keep_front` and
//! `concat` buffer the prefix in a `Vec` so the result can be built
//! back-to-front without recursion.

use itertools::Itertools;
use num_traits::Zero;

use crate::error::UnderflowError;
use crate::list::List;

pub fn length<T>(list: &List<T>) -> usize {
    list.iter().count()
}

pub fn sum<T: Copy + Zero>(list: &List<T>) -> T {
    list.iter().fold(T::zero(), |acc, value| acc + *value)
}

pub fn contains<T: PartialEq>(list: &List<T>, needle: &T) -> bool {
    list.iter().any(|value| value == needle)
}

pub fn drop_front<T>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
    let mut suffix = list;
    for _ in 0..count {
        let (_, rest) = suffix
            .split_first()
            .ok_or(UnderflowError::TooFewElements)?;
        suffix = rest;
    }
    Ok(suffix.clone())
}

pub fn keep_front<T: Clone>(list: &List<T>, count: usize) -> Result<List<T>, UnderflowError> {
    let prefix = list.iter().take(count).collect_vec();
    if prefix.len() < count {
        return Err(UnderflowError::TooFewElements);
    }
    Ok(prefix.into_iter().cloned().collect())
}

pub fn concat<T: Clone>(x: &List<T>, y: &List<T>) -> List<T> {
    let mut joined = y.clone();
    for value in x.iter().collect_vec().into_iter().rev() {
        joined = joined.cons(value.clone());
    }
    joined
}

pub fn append<T: Clone>(list: &List<T>, value: T) -> List<T> {
    concat(list, &List::singleton(value))
}

pub fn reverse<T: Clone>(list: &List<T>) -> List<T> {
    let mut reversed = List::new();
    for value in list.iter() {
        reversed = reversed.cons(value.clone());
    }
    reversed
}
