use crate::intervals::Interval;
use itertools::Itertools;
use std::ops::Range;

/// A set of numeric values, stored as a list of intervals.
///
/// The list is always normalized: intervals are sorted, and no two of them
/// overlap or almost overlap (those are merged into a single interval).
/// There is a single normalized representation for any given set of values,
/// so two sets compare equal exactly when they contain the same values.
///
/// ```text
///      (--)   (----]            [-----)
///    [---------)     (--]
///
///    [-----------]   (--]       [-----)    normalized
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumericSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> Default for NumericSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumericSet<T> {
    /// Makes a new empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// The normalized list of intervals, sorted in ascending order
    #[must_use]
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Number of disjoint intervals in the set (not the number of values)
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Removes and returns the rightmost interval, if any
    pub fn pop(&mut self) -> Option<Interval<T>> {
        self.intervals.pop()
    }
}

impl<T: PartialOrd + Copy> NumericSet<T> {
    /// All intervals of the set that are strictly to the left of target,
    /// with a gap between them and target.
    #[must_use]
    pub fn left_intervals(&self, target: &Interval<T>) -> &[Interval<T>] {
        let count = self
            .intervals
            .iter()
            .take_while(|i| i.strictly_left_of(target))
            .count();
        self.intervals.split_at(count).0
    }

    /// All intervals of the set that are strictly to the right of target,
    /// with a gap between them and target.
    #[must_use]
    pub fn right_intervals(&self, target: &Interval<T>) -> &[Interval<T>] {
        let count = self
            .intervals
            .iter()
            .rev()
            .take_while(|i| i.strictly_right_of(target))
            .count();
        self.intervals.split_at(self.intervals.len() - count).1
    }

    /// Indexes of the intervals that overlap or almost overlap target, i.e.
    /// everything between the left and right intervals.
    fn touching(&self, target: &Interval<T>) -> Range<usize> {
        let left = self.left_intervals(target).len();
        let right = self.right_intervals(target).len();
        left..self.intervals.len() - right
    }

    /// Add all values of the interval to the set.
    ///
    /// If the interval overlaps or almost overlaps existing intervals, they
    /// are all merged into a single interval.
    pub fn add(&mut self, interval: Interval<T>) {
        let touching = self.touching(&interval);
        let at = touching.start;
        let count = touching.len();
        let merged = self
            .intervals
            .drain(touching)
            .fold(interval, |acc, i| acc.convex_hull(&i));
        self.intervals.insert(at, merged);
        log::trace!("add: merged {count} interval(s) at index {at}");
        debug_assert!(self.is_normalized());
    }

    /// Remove all values of the interval from the set.
    ///
    /// Intervals of the set that partially overlap are trimmed, and might
    /// be split in two.  A bound is kept when the removed interval does not
    /// include it.
    pub fn remove(&mut self, interval: Interval<T>) {
        let touching = self.touching(&interval);
        let at = touching.start;
        let count = touching.len();
        let remainders: Vec<Interval<T>> = self
            .intervals
            .drain(touching)
            .flat_map(|i| i.difference(&interval))
            .collect();
        log::trace!(
            "remove: trimmed {count} interval(s) at index {at} into {}",
            remainders.len()
        );
        self.intervals.splice(at..at, remainders);
        debug_assert!(self.is_normalized());
    }

    /// Whether the point belongs to the set
    #[must_use]
    pub fn contains(&self, point: &T) -> bool {
        let idx = self.intervals.partition_point(|i| i.end() < *point);
        self.intervals.get(idx).is_some_and(|i| i.includes(point))
    }

    /// Returns the values that are in either set
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.update(other);
        result
    }

    /// Add all values of other to self
    pub fn update(&mut self, other: &Self) {
        for i in other {
            self.add(*i);
        }
    }

    /// Returns the values of self that are not in other
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_update(other);
        result
    }

    /// Remove all values of other from self
    pub fn difference_update(&mut self, other: &Self) {
        for i in other {
            self.remove(*i);
        }
    }

    /// Returns the values that are in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .cartesian_product(other.iter())
            .filter_map(|(left, right)| left.intersection(right))
            .collect()
    }

    /// Only keep the values of self that are also in other
    pub fn intersection_update(&mut self, other: &Self) {
        *self = self.intersection(other);
    }

    /// Whether every value of self is also in other
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.difference(other).is_empty()
    }

    /// Whether every value of other is also in self
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.difference(self).is_empty()
    }

    /// Returns the values that are in exactly one of the two sets
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Keep the values that are in exactly one of self and other
    pub fn symmetric_difference_update(&mut self, other: &Self) {
        *self = self.symmetric_difference(other);
    }

    /// Whether the list of intervals is sorted, with gaps between all of
    /// them.
    fn is_normalized(&self) -> bool {
        self.intervals
            .iter()
            .tuple_windows()
            .all(|(left, right)| left.strictly_left_of(right))
    }
}

impl<T: PartialOrd + Copy> From<Interval<T>> for NumericSet<T> {
    fn from(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}

impl<T: PartialOrd + Copy> FromIterator<Interval<T>> for NumericSet<T> {
    /// Build a normalized set, whatever the order and overlaps of the
    /// intervals.
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T: PartialOrd + Copy> Extend<Interval<T>> for NumericSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for i in iter {
            self.add(i);
        }
    }
}

impl<T> IntoIterator for NumericSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NumericSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for NumericSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.intervals.iter().join(", "))
    }
}

///  &NumericSet | &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitOr<&NumericSet<T>> for &NumericSet<T> {
    type Output = NumericSet<T>;

    /// Same as [`NumericSet::union()`]
    fn bitor(self, rhs: &NumericSet<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  &NumericSet & &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitAnd<&NumericSet<T>>
    for &NumericSet<T>
{
    type Output = NumericSet<T>;

    /// Same as [`NumericSet::intersection()`]
    fn bitand(self, rhs: &NumericSet<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  &NumericSet - &NumericSet
impl<T: PartialOrd + Copy> std::ops::Sub<&NumericSet<T>> for &NumericSet<T> {
    type Output = NumericSet<T>;

    /// Same as [`NumericSet::difference()`]
    fn sub(self, rhs: &NumericSet<T>) -> Self::Output {
        self.difference(rhs)
    }
}

///  &NumericSet ^ &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitXor<&NumericSet<T>>
    for &NumericSet<T>
{
    type Output = NumericSet<T>;

    /// Same as [`NumericSet::symmetric_difference()`]
    fn bitxor(self, rhs: &NumericSet<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

///  NumericSet |= &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitOrAssign<&NumericSet<T>>
    for NumericSet<T>
{
    fn bitor_assign(&mut self, rhs: &NumericSet<T>) {
        self.update(rhs);
    }
}

///  NumericSet &= &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitAndAssign<&NumericSet<T>>
    for NumericSet<T>
{
    fn bitand_assign(&mut self, rhs: &NumericSet<T>) {
        self.intersection_update(rhs);
    }
}

///  NumericSet -= &NumericSet
impl<T: PartialOrd + Copy> std::ops::SubAssign<&NumericSet<T>>
    for NumericSet<T>
{
    fn sub_assign(&mut self, rhs: &NumericSet<T>) {
        self.difference_update(rhs);
    }
}

///  NumericSet ^= &NumericSet
impl<T: PartialOrd + Copy> std::ops::BitXorAssign<&NumericSet<T>>
    for NumericSet<T>
{
    fn bitxor_assign(&mut self, rhs: &NumericSet<T>) {
        self.symmetric_difference_update(rhs);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn intv(text: &str) -> Interval<f64> {
        text.parse().unwrap()
    }

    fn set(intervals: &[&str]) -> NumericSet<f64> {
        intervals.iter().map(|text| intv(text)).collect()
    }

    #[test]
    fn test_add() {
        let mut s = NumericSet::new();
        s.add(intv("(2, 3)"));
        assert_eq!(s.len(), 1);
        s.add(intv("(13, 15)"));
        s.add(intv("(9, 10)"));
        s.add(intv("(6, 8)"));
        s.add(intv("(0, 1)"));
        s.add(intv("(2.5, 8.5]"));
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "{(0, 1), (2, 8.5], (9, 10), (13, 15)}");

        // Covered interval, nothing changes
        let before = s.clone();
        s.add(intv("[3, 4]"));
        assert_eq!(s, before);

        // Bridges all intervals
        s.add(intv("[0.5, 14)"));
        assert_eq!(s.to_string(), "{(0, 15)}");
    }

    #[test]
    fn test_add_junction() {
        let mut s = set(&["(2, 3)"]);
        s.add(intv("(1, 2)"));
        assert_eq!(s.to_string(), "{(1, 2), (2, 3)}");

        let mut s = set(&["(2, 3)"]);
        s.add(intv("(1, 2]"));
        assert_eq!(s.to_string(), "{(1, 3)}");

        let mut s = set(&["(1, 2)"]);
        s.add(intv("(2, 3)"));
        assert_eq!(s.to_string(), "{(1, 2), (2, 3)}");

        let mut s = set(&["(1, 2]"]);
        s.add(intv("(2, 3)"));
        assert_eq!(s.to_string(), "{(1, 3)}");

        // Filling the hole merges both sides
        let mut s = set(&["(1, 2)", "(2, 3)"]);
        s.add(Interval::new_single(2.0));
        assert_eq!(s.to_string(), "{(1, 3)}");

        let mut s = set(&["(1, 2)", "(2, 3)"]);
        s.add(intv("[2, 3]"));
        assert_eq!(s.to_string(), "{(1, 3]}");
    }

    #[test]
    fn test_from_iter() {
        let s = set(&["[5, 6]", "(0, 1)", "(4, 5)", "[1, 1]", "(8, 9)"]);
        assert_eq!(s.to_string(), "{(0, 1], (4, 6], (8, 9)}");

        let s: NumericSet<f64> = NumericSet::from(intv("(0, 1)"));
        assert_eq!(s.len(), 1);

        let mut s = NumericSet::default();
        s.extend([intv("[3, 4]"), intv("[1, 2]")]);
        assert_eq!(s.to_string(), "{[1, 2], [3, 4]}");
        assert_eq!(NumericSet::<f64>::new().to_string(), "{}");
    }

    #[test]
    fn test_left_intervals() {
        let s = set(&["(1, 2)", "(2, 3)"]);
        assert!(s.left_intervals(&intv("(0, 1.5)")).is_empty());

        let s = set(&["(1, 2)", "(2, 3)", "(4, 5)"]);
        assert_eq!(s.left_intervals(&intv("(3, 4)")).len(), 2);
        assert_eq!(s.left_intervals(&intv("[3, 4)")).len(), 1);
        assert_eq!(s.left_intervals(&intv("[3, 3]")).len(), 1);
        assert_eq!(s.left_intervals(&intv("[6, 7]")).len(), 3);
    }

    #[test]
    fn test_right_intervals() {
        let s = set(&["(1, 2)", "(2, 3)"]);
        assert!(s.right_intervals(&intv("(1.5, 2.5)")).is_empty());

        let s = set(&["(1, 2)", "(2, 3)", "(4, 5)"]);
        assert_eq!(s.right_intervals(&intv("(3, 4)")).len(), 1);
        assert_eq!(s.right_intervals(&intv("(3, 4]")).len(), 0);
        assert_eq!(s.right_intervals(&intv("[0, 0]")).len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut s = set(&["(1, 2)", "(2, 3)"]);
        assert!(!s.is_empty());
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_copy() {
        let s = set(&["(1, 2)", "(2, 3)"]);
        let mut copy = s.clone();
        assert_eq!(copy, s);
        copy.add(intv("[2, 2]"));
        assert_eq!(s.to_string(), "{(1, 2), (2, 3)}");
        assert_eq!(copy.to_string(), "{(1, 3)}");
    }

    #[test]
    fn test_pop() {
        let mut s = set(&["(2, 4)", "[6, 7]"]);
        assert_eq!(s.pop(), Some(intv("[6, 7]")));
        assert_eq!(s.pop(), Some(intv("(2, 4)")));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_contains() {
        let s = set(&["(0, 1]", "[4, 4]", "(5, 7)"]);
        assert!(!s.contains(&0.0));
        assert!(s.contains(&0.5));
        assert!(s.contains(&1.0));
        assert!(!s.contains(&2.0));
        assert!(s.contains(&4.0));
        assert!(!s.contains(&5.0));
        assert!(s.contains(&6.0));
        assert!(!s.contains(&7.0));
        assert!(!NumericSet::new().contains(&7.0));
    }

    #[test]
    fn test_remove() {
        let mut s = set(&[
            "[2, 3)", "(4, 5)", "(6, 7)", "(8, 9)", "(10, 11)", "(12, 13]",
        ]);
        s.remove(intv("(2, 13)"));
        assert_eq!(s.to_string(), "{[2, 2], [13, 13]}");

        let mut s = set(&[
            "(2, 3)", "(4, 5)", "(6, 7)", "(8, 9)", "(10, 11)", "(12, 13)",
        ]);
        s.remove(intv("(2.5, 12.5)"));
        assert_eq!(s.to_string(), "{(2, 2.5], [12.5, 13)}");

        // Splits an interval
        let mut s = set(&["[0, 10]"]);
        s.remove(intv("[4, 5)"));
        assert_eq!(s.to_string(), "{[0, 4), [5, 10]}");

        // Almost overlapping intervals are kept
        let mut s = set(&["(0, 1]", "[3, 4)"]);
        s.remove(intv("(1, 3)"));
        assert_eq!(s.to_string(), "{(0, 1], [3, 4)}");

        let mut s: NumericSet<f64> = NumericSet::new();
        s.remove(intv("(1, 3)"));
        assert!(s.is_empty());
    }

    #[test]
    fn test_difference() {
        let s1 = set(&["(2, 4)", "(5, 7)", "(8, 10)"]);
        let s2 = set(&["(3, 5)", "(6, 8)"]);
        assert_eq!(s1.difference(&s2).to_string(), "{(2, 3], (5, 6], (8, 10)}");

        let s1 = set(&["[2, 4)", "(5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 5)", "(5, 10)"]);
        assert_eq!(s1.difference(&s2).to_string(), "{[2, 2], [10, 10]}");

        let s1 = set(&["(2, 4]", "(5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 5)", "(6, 9)"]);
        assert_eq!(s1.difference(&s2).to_string(), "{(5, 6], [9, 10]}");

        let mut s = s1.clone();
        s.difference_update(&s2);
        assert_eq!(s, s1.difference(&s2));
        assert_eq!(&s1 - &s2, s);
        s -= &s1;
        assert!(s.is_empty());
    }

    #[test]
    fn test_intersection() {
        let s1 = set(&["(2, 4]", "(5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 5)", "(6, 9)"]);
        assert_eq!(
            s1.intersection(&s2).to_string(),
            "{(2, 4], (6, 7), (8, 9)}"
        );
        assert_eq!(s2.intersection(&s1), s1.intersection(&s2));

        let s1 = set(&["(2, 4]", "[5, 7)", "(8, 10]"]);
        let s2 = set(&["[4, 5)", "(7, 8)"]);
        assert_eq!(s1.intersection(&s2).to_string(), "{[4, 4]}");

        let mut s = s1.clone();
        s.intersection_update(&s2);
        assert_eq!(s.to_string(), "{[4, 4]}");
        assert_eq!(&s1 & &s2, s);

        s &= &NumericSet::new();
        assert!(s.is_empty());
    }

    #[test]
    fn test_subset() {
        let s1 = set(&["(2, 4]", "[5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 10)"]);
        assert!(!s1.is_subset(&s2));
        assert!(!s2.is_subset(&s1));
        assert!(!s1.is_superset(&s2));
        assert!(!s2.is_superset(&s1));

        let s2 = set(&["(2, 10]"]);
        assert!(s1.is_subset(&s2));
        assert!(!s2.is_subset(&s1));
        assert!(!s1.is_superset(&s2));
        assert!(s2.is_superset(&s1));

        assert!(s1.is_subset(&s1));
        assert!(s1.is_superset(&s1));
        assert!(NumericSet::new().is_subset(&s1));
        assert!(!s1.is_subset(&NumericSet::new()));
    }

    #[test]
    fn test_symmetric_difference() {
        let s1 = set(&["[2, 4]", "(5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 5)", "(6, 9)"]);
        let diff = s1.symmetric_difference(&s2);
        assert_eq!(diff.len(), 5);
        assert_eq!(
            diff.to_string(),
            "{[2, 2], (4, 5), (5, 6], [7, 8], [9, 10]}"
        );
        assert_eq!(s2.symmetric_difference(&s1), diff);
        assert_eq!(&s1 ^ &s2, diff);

        let mut s = s1.clone();
        s.symmetric_difference_update(&s2);
        assert_eq!(s, diff);
        s ^= &s2;
        assert_eq!(s, s1);
    }

    #[test]
    fn test_union() {
        let s1 = set(&["[2, 4]", "(5, 7)", "(8, 10]"]);
        let s2 = set(&["(2, 5)", "(6, 9)"]);
        let union = s1.union(&s2);
        assert_eq!(union.to_string(), "{[2, 5), (5, 10]}");
        assert_eq!(s2.union(&s1), union);
        assert_eq!(&s1 | &s2, union);
        assert_eq!(s1.union(&s1), s1);

        let mut s = s1.clone();
        s.update(&s2);
        assert_eq!(s, union);
        s |= &set(&["[5, 5]"]);
        assert_eq!(s.to_string(), "{[2, 10]}");
    }

    #[test]
    fn test_into_iter() {
        let s = set(&["(0, 1)", "[2, 3]"]);
        let starts: Vec<f64> = s.iter().map(Interval::start).collect();
        assert_eq!(starts, vec![0.0, 2.0]);
        let owned: Vec<Interval<f64>> = s.clone().into_iter().collect();
        assert_eq!(owned, s.intervals());
        assert_eq!((&s).into_iter().count(), 2);
    }
}
