use crate::errors::{Error, Result};
use crate::numeric_sets::NumericSet;
use regex::Regex;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

static NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\[(])\s*([^,\s]+)\s*,\s*([^\s\])]+)\s*([\])])\s*$")
        .expect("interval notation regex is valid")
});

/// A bounded interval of values like:
///    [A, B]    start-closed, end-closed
///    [A, B)    start-closed, end-open
///    (A, B)    start-open, end-open
///    (A, B]    start-open, end-closed
///
/// An interval always contains at least one value.  Operations whose result
/// would be empty return `None` (or an empty [`NumericSet`]) instead.
/// Values of `T` are seen as points on a continuum: there is always
/// something between two distinct bounds, so `(1, 2)` is not empty even for
/// integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
    start_inclusive: bool,
    end_inclusive: bool,
}

impl<T: Copy> Interval<T> {
    /// Returns an interval that contains a single value (`[value, value]`)
    #[must_use]
    pub fn new_single(value: T) -> Self {
        Self {
            start: value,
            end: value,
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    /// The lower bound
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// The upper bound
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Whether the lower bound is part of the interval
    #[must_use]
    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    /// Whether the upper bound is part of the interval
    #[must_use]
    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Create a new interval.
    ///
    /// Returns an error if `start` is greater than `end` (or the two cannot
    /// be compared, as with NaN).  Returns `None` when the bounds describe an
    /// empty interval, like `(3, 3)` or `[3, 3)`.
    pub fn new(
        start: T,
        end: T,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Result<Option<Self>> {
        match start.partial_cmp(&end) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self::non_empty(
                start,
                end,
                start_inclusive,
                end_inclusive,
            )),
            Some(Ordering::Greater) | None => Err(Error::InvalidRange),
        }
    }

    /// Build the interval from computed bounds, or None if it would be empty.
    pub(crate) fn non_empty(
        start: T,
        end: T,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Option<Self> {
        match start.partial_cmp(&end) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) if start_inclusive && end_inclusive => {}
            Some(Ordering::Equal | Ordering::Greater) | None => return None,
        }
        Some(Self {
            start,
            end,
            start_inclusive,
            end_inclusive,
        })
    }

    /// True if self is of the form `[A, A]`.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Whether the point is contained in the interval
    #[must_use]
    pub fn includes(&self, point: &T) -> bool {
        (self.start < *point && *point < self.end)
            || (self.start_inclusive && self.start == *point)
            || (self.end_inclusive && self.end == *point)
    }

    /// Whether the two intervals have at least one point in common.
    /// Sharing a bound only counts when both intervals include it:
    /// ```text
    ///    (----]                 (----]
    ///         [----)   overlap       (----)   do not overlap
    /// ```
    #[must_use]
    pub fn is_overlapping(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Whether the two intervals do not overlap, but their union is still a
    /// single interval.  This happens when they share a bound that exactly
    /// one of them includes:
    /// ```text
    ///    (----]
    ///         (----)     almost overlap, union is (---------)
    ///    (----)
    ///         (----)     neither includes the bound, union has a hole
    /// ```
    #[must_use]
    pub fn is_almost_overlapping(&self, other: &Self) -> bool {
        if self.is_overlapping(other) {
            return false;
        }
        let start_junction = self.start == other.end
            && (self.start_inclusive || other.end_inclusive);
        let end_junction = self.end == other.start
            && (self.end_inclusive || other.start_inclusive);
        start_junction || end_junction
    }

    /// Whether the two intervals overlap or almost overlap, i.e. whether
    /// their union is a single interval.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.is_overlapping(other) || self.is_almost_overlapping(other)
    }

    /// Whether every value in self is less than every value in other, with
    /// a gap between the two.
    #[must_use]
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        self.end <= other.start && !self.touches(other)
    }

    /// Whether every value in self is greater than every value in other,
    /// with a gap between the two.
    #[must_use]
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        self.start >= other.end && !self.touches(other)
    }

    /// Returns the values common to both intervals, or None if there are
    /// none.  Can be called as `Interval::intersection(&a, &b)`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = max_bound(self.start, other.start);
        let end = min_bound(self.end, other.end);
        Self::non_empty(
            start,
            end,
            self.includes(&start) && other.includes(&start),
            self.includes(&end) && other.includes(&end),
        )
    }

    /// Returns the smallest interval that contains the values of both
    /// intervals.
    #[must_use]
    pub fn convex_hull(&self, other: &Self) -> Self {
        let start = min_bound(self.start, other.start);
        let end = max_bound(self.end, other.end);
        Self {
            start,
            end,
            start_inclusive: self.includes(&start) || other.includes(&start),
            end_inclusive: self.includes(&end) || other.includes(&end),
        }
    }

    /// Returns the values found in either interval.  This is a single
    /// interval when the two touch, and both intervals (sorted) otherwise.
    #[must_use]
    pub fn union(&self, other: &Self) -> NumericSet<T> {
        if self.touches(other) {
            NumericSet::from(self.convex_hull(other))
        } else {
            [*self, *other].into_iter().collect()
        }
    }

    /// Returns the result of removing all values of other from self:
    /// ```text
    ///      [--------- self ---------]
    ///             (--- other ---)
    ///      [------]             [---]     difference, two intervals
    /// ```
    /// A bound of self is kept in the result when other does not include it.
    #[must_use]
    pub fn difference(&self, other: &Self) -> NumericSet<T> {
        if !self.is_overlapping(other) {
            return NumericSet::from(*self);
        }
        let before = Self::non_empty(
            self.start,
            other.start,
            self.start_inclusive,
            !other.start_inclusive,
        );
        let after = Self::non_empty(
            other.end,
            self.end,
            !other.end_inclusive,
            self.end_inclusive,
        );
        before.into_iter().chain(after).collect()
    }
}

impl<T: std::fmt::Display> Interval<T> {
    /// The interval in `(A, B]` notation, same as `to_string()`.
    #[must_use]
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start_inclusive {
            write!(f, "[")?;
        } else {
            write!(f, "(")?;
        }
        write!(f, "{}, {}", self.start, self.end)?;
        if self.end_inclusive {
            write!(f, "]")
        } else {
            write!(f, ")")
        }
    }
}

impl<T: PartialOrd + Copy + FromStr> FromStr for Interval<T> {
    type Err = Error;

    /// Parse the `(A, B]` notation.  Both bounds are parsed with
    /// `T::from_str`, so `[1.5, 2)` is valid for floats or decimals.
    fn from_str(text: &str) -> Result<Self> {
        let caps = NOTATION
            .captures(text)
            .ok_or_else(|| Error::Syntax(text.to_string()))?;
        let (_, [open, start, end, close]) = caps.extract();
        let start = start
            .parse::<T>()
            .map_err(|_| Error::Syntax(text.to_string()))?;
        let end =
            end.parse::<T>().map_err(|_| Error::Syntax(text.to_string()))?;
        Interval::new(start, end, open == "[", close == "]")?
            .ok_or_else(|| Error::Empty(text.trim().to_string()))
    }
}

fn min_bound<T: PartialOrd>(left: T, right: T) -> T {
    if right < left {
        right
    } else {
        left
    }
}

fn max_bound<T: PartialOrd>(left: T, right: T) -> T {
    if left < right {
        right
    } else {
        left
    }
}
