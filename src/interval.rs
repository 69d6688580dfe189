//! A module containing [`Interval`] and its constructor functions.

use core::ops::RangeInclusive;

use crate::utils::{invalid_interval_panic, partial_max, partial_min};
use crate::PointType;

/// A closed interval, both ends are always included.
///
/// Intervals built with [`Interval::new()`] or [`ii()`] are checked so
/// that `lower <= upper`, [`Interval::new_unchecked()`] trusts the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
	pub(crate) lower: T,
	pub(crate) upper: T,
}

impl<T> Interval<T>
where
	T: PointType,
{
	/// Makes a new interval from its two inclusive end-points.
	///
	/// # Panics
	///
	/// Panics if `lower` is greater than `upper` or if the two are not
	/// comparable (such as a `NaN` end-point).
	///
	/// # Examples
	/// ```
	/// use holed::Interval;
	///
	/// let interval = Interval::new(2, 8);
	///
	/// assert_eq!(interval.contains(&2), true);
	/// assert_eq!(interval.contains(&9), false);
	/// ```
	pub fn new(lower: T, upper: T) -> Self {
		let interval = Interval { lower, upper };
		invalid_interval_panic(&interval);
		interval
	}

	/// Makes a new interval without checking that `lower <= upper`.
	///
	/// Using an interval with `lower > upper` in a [`Domain`](crate::Domain)
	/// gives unspecified results.
	pub fn new_unchecked(lower: T, upper: T) -> Self {
		Interval { lower, upper }
	}

	/// Makes the interval containing only `value`.
	pub fn point(value: T) -> Self {
		Interval {
			lower: value.clone(),
			upper: value,
		}
	}

	/// Makes an interval from two end-points given in any order.
	pub(crate) fn sorted(a: T, b: T) -> Self {
		if b < a {
			Interval { lower: b, upper: a }
		} else {
			Interval { lower: a, upper: b }
		}
	}

	/// The lower end-point, inclusive.
	pub fn lower(&self) -> &T {
		&self.lower
	}

	/// The upper end-point, inclusive.
	pub fn upper(&self) -> &T {
		&self.upper
	}

	/// Consumes the interval, returning `(lower, upper)`.
	pub fn into_bounds(self) -> (T, T) {
		(self.lower, self.upper)
	}

	/// Does the interval contain the given point?
	pub fn contains(&self, point: &T) -> bool {
		*point >= self.lower && *point <= self.upper
	}

	/// Is the interval valid, which here means `lower <= upper`.
	pub fn is_valid(&self) -> bool {
		self.lower <= self.upper
	}

	/// Returns `true` if both end-points are equal.
	pub fn is_single_point(&self) -> bool {
		self.lower == self.upper
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	///
	/// assert_eq!(ii(1, 4).overlaps(&ii(4, 8)), true);
	/// assert_eq!(ii(1, 4).overlaps(&ii(5, 8)), false);
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		self.lower <= other.upper && other.lower <= self.upper
	}

	/// Returns the interval of points common to both intervals, if any.
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		if !self.overlaps(other) {
			return None;
		}

		Some(Interval {
			lower: partial_max(&self.lower, &other.lower).clone(),
			upper: partial_min(&self.upper, &other.upper).clone(),
		})
	}
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
	T: PointType,
{
	/// # Panics
	///
	/// Panics if the range's start is greater than its end.
	fn from(range: RangeInclusive<T>) -> Self {
		let (lower, upper) = range.into_inner();
		Interval::new(lower, upper)
	}
}

/// An included-included interval, checked like [`Interval::new()`].
pub fn ii<T>(lower: T, upper: T) -> Interval<T>
where
	T: PointType,
{
	Interval::new(lower, upper)
}
