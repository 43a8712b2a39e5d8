use std::fmt;
use std::sync::Arc;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// One link in a singly-linked sequence: a value and the remainder of the
/// list. Nodes are built bottom-up, so the tail exists before the node that
/// references it, and they are never mutated afterwards. That is what makes
/// sharing a suffix between two lists sound.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: List<T>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> &List<T> {
        &self.next
    }
}

/// An immutable singly-linked list: either the empty terminator or a
/// reference-counted [`Node`] holding the head value and the rest.
///
/// Cloning a list, taking its [`tail`](List::tail), and prepending with
/// [`cons`](List::cons) are all O(1) and share structure with the original;
/// nothing is ever deep-copied. The traversal algorithms live in
/// [`crate::ops`], in three strategies each.
// note: Clone, PartialEq, Debug, Serialize and Deserialize are hand-written
// below so that they don't impose a `T: Clone` bound the way the derived
// versions would.
pub struct List<T> {
    head: Option<Arc<Node<T>>>,
}

impl<T> List<T> {
    /// The empty terminator.
    pub fn new() -> Self {
        List { head: None }
    }

    /// A list holding exactly `value`.
    pub fn singleton(value: T) -> Self {
        List::new().cons(value)
    }

    /// A new list with `value` prepended. The new node shares `self` as its
    /// tail.
    ///
    /// ```
    /// use threefold::list::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        let node = Node {
            value,
            next: self.clone(),
        };
        List {
            head: Some(Arc::new(node)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first value, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// The list without its first value, if any.
    pub fn tail(&self) -> Option<&List<T>> {
        self.head.as_deref().map(Node::next)
    }

    /// Head and tail in one pattern-matchable step. This is the seam every
    /// traversal strategy recurses or iterates through.
    pub fn split_first(&self) -> Option<(&T, &List<T>)> {
        self.head.as_deref().map(|node| (&node.value, &node.next))
    }

    /// Classifies the list into the three mutually exclusive, exhaustive
    /// shapes: empty, exactly one element, more than one element.
    pub fn shape(&self) -> ListShape<'_, T> {
        match self.split_first() {
            None => ListShape::Empty,
            Some((value, rest)) if rest.is_empty() => ListShape::Singleton(value),
            Some((value, _)) => ListShape::Many(value),
        }
    }

    /// Whether `self` and `other` are the very same nodes in memory, not
    /// merely equal element-wise. Two empty lists count as the same.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// A borrowing iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }
}

impl<T: Clone> List<T> {
    /// The values in list order as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

/// Dropping the last list referencing a long chain would recurse once per
/// node if left to the compiler. Unlink the uniquely-owned prefix in a loop
/// instead, stopping at the first node some other list still references.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            match Arc::try_unwrap(node) {
                Ok(mut node) => cursor = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Builds a list preserving order: the iterator's first element becomes
    /// the head. Construction is bottom-up, by prepending in reverse.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        values
            .into_iter()
            .rfold(List::new(), |tail, value| tail.cons(value))
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

impl<'a, T: Arbitrary<'a>> Arbitrary<'a> for List<T> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let values = Vec::<T>::arbitrary(u)?;
        Ok(values.into_iter().collect())
    }
}

impl<T: GetSize> GetSize for List<T> {
    fn get_heap_size(&self) -> usize {
        let mut total = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            total += std::mem::size_of::<Node<T>>() + node.value.get_heap_size();
            cursor = node.next.head.as_deref();
        }
        total
    }
}

/// Borrowing iterator over a [`List`]. See [`List::iter`].
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = node.next.head.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// The three shapes a list can have, carrying the head value where one
/// exists. Returned by [`List::shape`]; meant to be matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape<'a, T> {
    /// The empty terminator.
    Empty,
    /// Exactly one element.
    Singleton(&'a T),
    /// Two or more elements.
    Many(&'a T),
}

impl<T: fmt::Display> fmt::Display for ListShape<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListShape::Empty => write!(f, "the list is empty"),
            ListShape::Singleton(head) => {
                write!(f, "the list has exactly one element, {head}")
            }
            ListShape::Many(head) => {
                write!(f, "the list has more than one element and starts with {head}")
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use get_size2::GetSize;
    use itertools::Itertools;
    use proptest::collection::vec;
    use proptest::prop_assert_eq;
    use proptest_arbitrary_interop::arb;
    use test_strategy::proptest;

    use super::List;
    use super::ListShape;
    use super::Node;

    #[test]
    fn cons_prepends_and_shares_the_tail() {
        let tail: List<u32> = [2, 3].into_iter().collect();
        let list = tail.cons(1);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert!(list.tail().unwrap().ptr_eq(&tail));
    }

    #[test]
    fn clone_is_the_same_nodes() {
        let list: List<u32> = (0..10).collect();
        assert!(list.clone().ptr_eq(&list));
    }

    #[test]
    fn empty_list_has_no_parts() {
        let list = List::<u32>::new();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert!(list.tail().is_none());
        assert!(list.split_first().is_none());
    }

    #[test]
    fn shape_distinguishes_the_three_cases() {
        let empty = List::<i32>::new();
        let one = List::singleton(42);
        let many = one.cons(13);

        assert_eq!(empty.shape(), ListShape::Empty);
        assert_eq!(one.shape(), ListShape::Singleton(&42));
        assert_eq!(many.shape(), ListShape::Many(&13));
    }

    #[test]
    fn shape_reports_are_readable() {
        let one = List::singleton(42);
        let many = one.cons(13);

        assert_eq!(List::<i32>::new().shape().to_string(), "the list is empty");
        assert_eq!(
            one.shape().to_string(),
            "the list has exactly one element, 42"
        );
        assert_eq!(
            many.shape().to_string(),
            "the list has more than one element and starts with 13"
        );
    }

    #[test]
    fn iteration_is_front_to_back() {
        let list: List<u32> = [1, 2, 3].into_iter().collect();
        let collected = list.iter().copied().collect_vec();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn debug_renders_as_a_sequence() {
        let list: List<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn dropping_a_long_unique_chain_does_not_recurse() {
        let list: List<u32> = (0..100_000).collect();
        drop(list);
    }

    #[test]
    fn dropping_one_alias_leaves_the_other_intact() {
        let shared: List<u32> = (0..100).collect();
        let longer = shared.cons(100);
        drop(longer);
        assert_eq!(shared.to_vec(), (0..100).collect_vec());
    }

    #[test]
    fn heap_size_counts_one_allocation_per_node() {
        let list: List<u64> = (0..7).collect();
        assert_eq!(list.get_heap_size(), 7 * std::mem::size_of::<Node<u64>>());
        assert_eq!(List::<u64>::new().get_heap_size(), 0);
    }

    #[test]
    fn serde_round_trip_goes_through_a_plain_sequence() {
        let list: List<i64> = [5, 6, 7].into_iter().collect();
        let encoded = serde_json::to_string(&list).unwrap();
        assert_eq!(encoded, "[5,6,7]");

        let decoded: List<i64> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, list);
    }

    #[proptest]
    fn vec_round_trip_is_the_identity(
        #[strategy(vec(arb::<i64>(), 0..=200))] values: Vec<i64>,
    ) {
        let list: List<i64> = values.iter().copied().collect();
        prop_assert_eq!(list.to_vec(), values);
    }

    #[proptest]
    fn arbitrary_lists_are_proper_lists(#[strategy(arb::<List<u8>>())] list: List<u8>) {
        let values = list.to_vec();
        let rebuilt: List<u8> = values.iter().copied().collect();
        prop_assert_eq!(rebuilt, list);
    }

    #[proptest]
    fn element_wise_equality_ignores_sharing(
        #[strategy(vec(arb::<i64>(), 0..=50))] values: Vec<i64>,
    ) {
        let one: List<i64> = values.iter().copied().collect();
        let two: List<i64> = values.iter().copied().collect();
        prop_assert_eq!(&one, &two);
        if !values.is_empty() {
            assert!(!one.ptr_eq(&two));
        }
    }
}
