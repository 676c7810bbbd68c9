//! An ordered multiset.
//!
//! Hands of cards, piles of tickets and claim-card combinations are all
//! multisets: unordered collections where the same value can appear several
//! times. `Bag` keeps its elements sorted so that iteration order is
//! deterministic, which both the wire encoding and the combination
//! enumeration rely on.

use std::collections::BTreeMap;
use std::fmt;

/// An immutable-flavored sorted multiset over `T`.
///
/// All "mutating" operations return a new bag; the in-place [`Bag::add`] is
/// meant for building a bag up before sharing it.
///
/// # Examples
/// ```
/// use rail_duel::bag::Bag;
///
/// let bag: Bag<u8> = [3, 1, 3].into_iter().collect();
/// assert_eq!(bag.size(), 3);
/// assert_eq!(bag.count_of(&3), 2);
/// assert_eq!(bag.to_vec(), vec![1, 3, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bag<T: Ord> {
    counts: BTreeMap<T, u32>,
    size: u32,
}

impl<T: Ord + Clone> Bag<T> {
    /// The empty bag.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            size: 0,
        }
    }

    /// A bag holding `count` copies of `value`.
    pub fn of(count: u32, value: T) -> Self {
        let mut bag = Self::new();
        bag.add_n(count, value);
        bag
    }

    /// A bag holding `n1` copies of `v1` and `n2` copies of `v2`.
    pub fn of_two(n1: u32, v1: T, n2: u32, v2: T) -> Self {
        let mut bag = Self::of(n1, v1);
        bag.add_n(n2, v2);
        bag
    }

    /// Adds one copy of `value` to this bag.
    pub fn add(&mut self, value: T) {
        self.add_n(1, value);
    }

    /// Adds `count` copies of `value` to this bag.
    pub fn add_n(&mut self, count: u32, value: T) {
        if count == 0 {
            return;
        }
        *self.counts.entry(value).or_insert(0) += count;
        self.size += count;
    }

    /// Total number of elements, multiplicities included.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the bag holds no element at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// How many copies of `value` the bag holds.
    pub fn count_of(&self, value: &T) -> u32 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Whether the bag holds at least one copy of `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.count_of(value) > 0
    }

    /// Whether `other` is a sub-multiset of this bag.
    pub fn contains_all(&self, other: &Bag<T>) -> bool {
        other
            .counts
            .iter()
            .all(|(value, count)| self.count_of(value) >= *count)
    }

    /// Number of distinct values in the bag.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over `(value, multiplicity)` pairs in ascending value order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, u32)> {
        self.counts.iter().map(|(value, count)| (value, *count))
    }

    /// Iterates over every element in ascending order, repeating each value
    /// as many times as its multiplicity.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.counts
            .iter()
            .flat_map(|(value, count)| std::iter::repeat(value).take(*count as usize))
    }

    /// Collects the bag into a sorted `Vec`, multiplicities included.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// The multiset union of this bag and `other`.
    pub fn union(&self, other: &Bag<T>) -> Bag<T> {
        let mut result = self.clone();
        for (value, count) in other.entries() {
            result.add_n(count, value.clone());
        }
        result
    }

    /// The saturating multiset difference of this bag and `other`: copies of
    /// a value not present in this bag are simply ignored.
    pub fn difference(&self, other: &Bag<T>) -> Bag<T> {
        let mut result = Self::new();
        for (value, count) in self.entries() {
            let kept = count.saturating_sub(other.count_of(value));
            result.add_n(kept, value.clone());
        }
        result
    }

    /// Every sub-multiset of this bag holding exactly `size` elements.
    ///
    /// Enumeration order is deterministic: for each value in ascending
    /// order, as many copies as possible are taken first. Returns an empty
    /// list if `size` exceeds the bag's size; the single empty bag if
    /// `size` is 0.
    pub fn subsets_of_size(&self, size: u32) -> Vec<Bag<T>> {
        let entries: Vec<(&T, u32)> = self.entries().collect();
        let mut subsets = Vec::new();
        let mut current = Bag::new();
        Self::subsets_from(&entries, size, &mut current, &mut subsets);
        subsets
    }

    fn subsets_from(
        entries: &[(&T, u32)],
        remaining: u32,
        current: &mut Bag<T>,
        subsets: &mut Vec<Bag<T>>,
    ) {
        if remaining == 0 {
            subsets.push(current.clone());
            return;
        }
        let Some(((value, count), rest)) = entries.split_first() else {
            return;
        };
        let available: u32 = rest.iter().map(|(_, c)| c).sum();
        let max_taken = remaining.min(*count);
        // Not taking enough from this entry cannot be made up for later.
        let min_taken = remaining.saturating_sub(available);
        for taken in (min_taken..=max_taken).rev() {
            current.add_n(taken, (*value).clone());
            Self::subsets_from(rest, remaining - taken, current, subsets);
            Self::remove_n(current, taken, value);
        }
    }

    fn remove_n(bag: &mut Bag<T>, count: u32, value: &T) {
        if count == 0 {
            return;
        }
        let entry = bag.counts.get_mut(value).expect("value was just added");
        *entry -= count;
        if *entry == 0 {
            bag.counts.remove(value);
        }
        bag.size -= count;
    }
}

impl<T: Ord + Clone> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        for value in iter {
            bag.add(value);
        }
        bag
    }
}

impl<T: Ord + Clone + fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries()
            .map(|(value, count)| {
                if count == 1 {
                    value.to_string()
                } else {
                    format!("{} x{}", value, count)
                }
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bag() {
        let bag: Bag<u8> = Bag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.size(), 0);
        assert_eq!(bag.count_of(&1), 0);
        assert!(!bag.contains(&1));
    }

    #[test]
    fn bag_of_and_counts() {
        let bag = Bag::of(3, 'a');
        assert_eq!(bag.size(), 3);
        assert_eq!(bag.count_of(&'a'), 3);
        assert_eq!(bag.distinct_count(), 1);
    }

    #[test]
    fn iteration_is_sorted() {
        let bag: Bag<i32> = [5, 1, 5, 2].into_iter().collect();
        assert_eq!(bag.to_vec(), vec![1, 2, 5, 5]);
    }

    #[test]
    fn union_sums_multiplicities() {
        let left = Bag::of_two(2, 'a', 1, 'b');
        let right = Bag::of_two(1, 'a', 1, 'c');
        let union = left.union(&right);
        assert_eq!(union.count_of(&'a'), 3);
        assert_eq!(union.count_of(&'b'), 1);
        assert_eq!(union.count_of(&'c'), 1);
        assert_eq!(union.size(), 5);
    }

    #[test]
    fn difference_saturates() {
        let left = Bag::of_two(2, 'a', 1, 'b');
        let right = Bag::of_two(5, 'a', 1, 'c');
        let difference = left.difference(&right);
        assert_eq!(difference.to_vec(), vec!['b']);
    }

    #[test]
    fn contains_all_is_multiset_inclusion() {
        let big = Bag::of_two(2, 'a', 1, 'b');
        assert!(big.contains_all(&Bag::of(2, 'a')));
        assert!(big.contains_all(&Bag::new()));
        assert!(!big.contains_all(&Bag::of(3, 'a')));
        assert!(!big.contains_all(&Bag::of(1, 'c')));
    }

    #[test]
    fn subsets_of_size_enumerates_all_combinations() {
        let bag = Bag::of_two(2, 'a', 2, 'b');
        let subsets = bag.subsets_of_size(2);

        // {aa}, {ab}, {bb}.
        assert_eq!(subsets.len(), 3);
        assert!(subsets.contains(&Bag::of(2, 'a')));
        assert!(subsets.contains(&Bag::of_two(1, 'a', 1, 'b')));
        assert!(subsets.contains(&Bag::of(2, 'b')));
        // Most copies of the smallest value come first.
        assert_eq!(subsets[0], Bag::of(2, 'a'));
    }

    #[test]
    fn subsets_of_size_boundaries() {
        let bag = Bag::of(2, 'a');
        assert_eq!(bag.subsets_of_size(0), vec![Bag::new()]);
        assert_eq!(bag.subsets_of_size(2), vec![Bag::of(2, 'a')]);
        assert!(bag.subsets_of_size(3).is_empty());
    }

    #[test]
    fn display_groups_multiplicities() {
        let bag = Bag::of_two(2, 'a', 1, 'b');
        assert_eq!(bag.to_string(), "a x2, b");
    }
}
