//! A module containing [`Domain`].

use core::ops::RangeInclusive;

use log::trace;
use smallvec::SmallVec;

use crate::utils::{cmp_points, cut_interval, invalid_interval_panic};
use crate::{ExclusionSet, Interval};

mod algebra;
mod discrete;

pub use discrete::Iter;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
pub trait PointType: PartialOrd + Clone {}
impl<T> PointType for T where T: PartialOrd + Clone {}

/// A subset of an ordered type stored as a union of closed intervals minus a
/// set of excluded points ("holes").
///
/// `T` is the generic type parameter for the point type the domain is a
/// subset of.
///
/// The intervals are always kept in canonical form: sorted by their lower
/// end-point and pairwise disjoint. Excluded points that no longer lie inside
/// any interval are dropped.
///
/// # Examples
/// ```
/// use holed::interval::ii;
/// use holed::Domain;
///
/// let mut domain = Domain::from_interval(ii(0.0, 1.0));
///
/// domain.remove_value(0.5);
/// domain.remove_interval(&ii(0.3, 0.4));
///
/// assert_eq!(domain.contains(&0.1), true);
/// assert_eq!(domain.contains(&0.35), false);
/// assert_eq!(domain.contains(&0.5), false);
/// assert_eq!(domain.interval_count(), 2);
///
/// domain.append_interval(ii(0.3, 0.4));
///
/// assert_eq!(domain.contains(&0.35), true);
/// assert_eq!(domain.interval_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Domain<T> {
	pub(crate) intervals: SmallVec<[Interval<T>; 2]>,
	pub(crate) exclusions: ExclusionSet<T>,
}

impl<T> Domain<T>
where
	T: PointType,
{
	/// Makes a new, empty `Domain`.
	///
	/// # Examples
	/// ```
	/// use holed::Domain;
	///
	/// let domain: Domain<i8> = Domain::new();
	///
	/// assert_eq!(domain.is_empty(), true);
	/// ```
	pub fn new() -> Self {
		Domain {
			intervals: SmallVec::new(),
			exclusions: ExclusionSet::new(),
		}
	}

	/// Makes a `Domain` containing only `value`.
	pub fn from_value(value: T) -> Self {
		Domain::from_interval(Interval::point(value))
	}

	/// Makes a `Domain` covering a single interval.
	pub fn from_interval(interval: Interval<T>) -> Self {
		let mut intervals = SmallVec::new();
		intervals.push(interval);
		Domain {
			intervals,
			exclusions: ExclusionSet::new(),
		}
	}

	/// Makes a `Domain` covering `lower..=upper` without checking that
	/// `lower <= upper`.
	pub fn from_bounds_unchecked(lower: T, upper: T) -> Self {
		Domain::from_interval(Interval::new_unchecked(lower, upper))
	}

	/// Returns the stored intervals in ascending order.
	pub fn intervals(&self) -> &[Interval<T>] {
		&self.intervals
	}

	/// Returns the number of stored intervals.
	pub fn interval_count(&self) -> usize {
		self.intervals.len()
	}

	/// Returns the set of excluded points.
	pub fn exclusions(&self) -> &ExclusionSet<T> {
		&self.exclusions
	}

	/// Returns the smallest lower end-point of the stored intervals, or
	/// `None` if the domain is empty.
	///
	/// The end-point itself may be excluded.
	pub fn lower_bound(&self) -> Option<&T> {
		self.intervals
			.iter()
			.map(|interval| &interval.lower)
			.reduce(|min, lower| if lower < min { lower } else { min })
	}

	/// Returns the largest upper end-point of the stored intervals, or
	/// `None` if the domain is empty.
	///
	/// The end-point itself may be excluded.
	pub fn upper_bound(&self) -> Option<&T> {
		self.intervals
			.iter()
			.map(|interval| &interval.upper)
			.reduce(|max, upper| if upper > max { upper } else { max })
	}

	/// Returns `true` if the domain has no intervals.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Returns `true` if the domain spans exactly one point which is not
	/// excluded.
	///
	/// Discrete point types can hide a single value behind holes in a wider
	/// span, see [`Domain::is_single_discrete_value()`] for those.
	pub fn is_single_value(&self) -> bool {
		self.single_value().is_some()
	}

	/// Returns the only value in the domain, see
	/// [`Domain::is_single_value()`].
	pub fn single_value(&self) -> Option<&T> {
		let lower = self.lower_bound()?;
		let upper = self.upper_bound()?;

		(lower == upper && !self.exclusions.contains(lower)).then_some(lower)
	}

	/// Returns `true` if `point` is in the domain.
	///
	/// Excluded points are never contained.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain = Domain::from_interval(ii(1, 10));
	/// domain.remove_value(4);
	///
	/// assert_eq!(domain.contains(&3), true);
	/// assert_eq!(domain.contains(&4), false);
	/// assert_eq!(domain.contains(&11), false);
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		if self.exclusions.contains(point) {
			return false;
		}

		self.intervals.iter().any(|interval| interval.contains(point))
	}

	/// Returns `true` if any stored interval overlaps `interval`.
	///
	/// Excluded points are not taken into account.
	pub fn overlaps_interval(&self, interval: &Interval<T>) -> bool {
		self.intervals
			.iter()
			.any(|stored| stored.overlaps(interval))
	}

	/// Returns `true` if any stored interval overlaps any interval of
	/// `other`.
	///
	/// Excluded points are not taken into account.
	pub fn overlaps(&self, other: &Domain<T>) -> bool {
		other
			.intervals
			.iter()
			.any(|interval| self.overlaps_interval(interval))
	}

	/// Adds `value` to the domain.
	pub fn append_value(&mut self, value: T) {
		self.append_interval(Interval::point(value));
	}

	/// Adds every point of `interval` to the domain, clearing any exclusion
	/// it covers.
	///
	/// # Panics
	///
	/// Panics if the given interval is invalid.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain = Domain::new();
	///
	/// domain.append_interval(ii(1, 3));
	/// domain.append_interval(ii(5, 7));
	/// assert_eq!(domain.interval_count(), 2);
	///
	/// domain.append_interval(ii(3, 5));
	/// assert_eq!(domain.intervals(), [ii(1, 7)]);
	/// ```
	pub fn append_interval(&mut self, interval: Interval<T>) {
		invalid_interval_panic(&interval);

		let covered: Vec<T> = self.exclusions.within(&interval).cloned().collect();
		for point in covered {
			self.exclusions.remove(&point);
		}

		self.intervals.push(interval);
		self.normalize();
	}

	/// Adds every point of `other` to the domain, this is the same as
	/// [`Domain::union_with()`].
	pub fn append(&mut self, other: &Domain<T>) {
		self.union_with(other);
	}

	/// Excludes `value` from the domain.
	pub fn remove_value(&mut self, value: T) {
		if self.overlaps_interval(&Interval::point(value.clone())) {
			self.exclusions.insert(value);
		}
	}

	/// Excludes every value yielded by `values`.
	pub fn remove_values<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		for value in values {
			self.remove_value(value);
		}
	}

	/// Removes every point of `interval` from the domain.
	///
	/// Since every stored interval is closed, cutting into one leaves its new
	/// end-point in place and excludes it instead.
	///
	/// # Panics
	///
	/// Panics if the given interval is invalid.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain = Domain::from_interval(ii(0, 10));
	/// domain.remove_interval(&ii(3, 6));
	///
	/// assert_eq!(domain.intervals(), [ii(0, 3), ii(6, 10)]);
	/// assert_eq!(domain.contains(&2), true);
	/// assert_eq!(domain.contains(&3), false);
	/// assert_eq!(domain.contains(&6), false);
	/// assert_eq!(domain.contains(&7), true);
	/// ```
	pub fn remove_interval(&mut self, interval: &Interval<T>) {
		invalid_interval_panic(interval);

		let mut kept = SmallVec::with_capacity(self.intervals.len() + 1);
		for stored in self.intervals.drain(..) {
			if !stored.overlaps(interval) {
				kept.push(stored);
				continue;
			}

			let cut = cut_interval(&stored, interval);
			kept.extend(cut.before_cut);
			kept.extend(cut.after_cut);
			for hole in cut.holes {
				self.exclusions.insert(hole);
			}
		}

		self.intervals = kept;
		self.normalize();
	}

	/// Removes every point of `other` from the domain.
	///
	/// Points excluded from `other` but contained by `self` stay in the
	/// domain.
	pub fn remove_domain(&mut self, other: &Domain<T>) {
		let readmitted: Vec<T> = other
			.exclusions
			.iter()
			.filter(|hole| self.contains(hole))
			.cloned()
			.collect();

		for interval in other.intervals.iter() {
			self.remove_interval(interval);
		}
		for hole in readmitted {
			self.append_value(hole);
		}
	}

	/// Restores canonical form: sorts the intervals, merges every pair that
	/// shares a point and drops exclusions outside every interval.
	pub(crate) fn normalize(&mut self) {
		self.intervals
			.sort_by(|a, b| cmp_points(&a.lower, &b.lower));

		let mut index = 1;
		while index < self.intervals.len() {
			if self.intervals[index - 1].upper >= self.intervals[index].lower {
				let next = self.intervals.remove(index);
				let previous = &mut self.intervals[index - 1];
				if next.upper > previous.upper {
					previous.upper = next.upper;
				}
			} else {
				index += 1;
			}
		}

		let Domain {
			intervals,
			exclusions,
		} = self;
		exclusions.retain(|hole| intervals.iter().any(|interval| interval.contains(hole)));

		trace!(
			"normalized to {} intervals and {} exclusions",
			self.intervals.len(),
			self.exclusions.len()
		);
	}
}

impl<T> Default for Domain<T>
where
	T: PointType,
{
	fn default() -> Self {
		Domain::new()
	}
}

impl<T> PartialEq for Domain<T>
where
	T: PointType,
{
	/// Two domains are equal if their exclusion sets are equal and their
	/// intervals match as sets.
	fn eq(&self, other: &Self) -> bool {
		self.exclusions == other.exclusions
			&& self.intervals.len() == other.intervals.len()
			&& self
				.intervals
				.iter()
				.all(|interval| other.intervals.contains(interval))
	}
}

impl<T> From<Interval<T>> for Domain<T>
where
	T: PointType,
{
	fn from(interval: Interval<T>) -> Self {
		Domain::from_interval(interval)
	}
}

impl<T> From<RangeInclusive<T>> for Domain<T>
where
	T: PointType,
{
	/// # Panics
	///
	/// Panics if the range's start is greater than its end.
	fn from(range: RangeInclusive<T>) -> Self {
		Domain::from_interval(Interval::from(range))
	}
}

impl<T> FromIterator<Interval<T>> for Domain<T>
where
	T: PointType,
{
	fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
		let mut domain = Domain::new();
		domain.extend(iter);
		domain
	}
}

impl<T> Extend<Interval<T>> for Domain<T>
where
	T: PointType,
{
	fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
		for interval in iter {
			self.append_interval(interval);
		}
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::de::Error;
	use serde::ser::SerializeStruct;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Domain, Interval, PointType};

	impl<T> Serialize for Domain<T>
	where
		T: PointType + Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut state = serializer.serialize_struct("Domain", 2)?;
			state.serialize_field("intervals", &self.intervals[..])?;
			state.serialize_field(
				"exclusions",
				&self.exclusions.iter().collect::<Vec<_>>(),
			)?;
			state.end()
		}
	}

	#[derive(Deserialize)]
	#[serde(rename = "Domain")]
	struct RawDomain<T> {
		intervals: Vec<Interval<T>>,
		exclusions: Vec<T>,
	}

	impl<'de, T> Deserialize<'de> for Domain<T>
	where
		T: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let raw = RawDomain::<T>::deserialize(deserializer)?;

			let mut domain = Domain::new();
			for interval in raw.intervals {
				if !interval.is_valid() {
					return Err(D::Error::custom(
						"interval lower bound is greater than its upper bound",
					));
				}
				domain.intervals.push(interval);
			}
			for hole in raw.exclusions {
				domain.exclusions.insert(hole);
			}
			domain.normalize();

			Ok(domain)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::ii;

	fn basic() -> Domain<i8> {
		let mut domain: Domain<i8> = [ii(0, 4), ii(8, 12), ii(20, 20)]
			.into_iter()
			.collect();
		domain.remove_value(10);
		domain
	}

	#[test]
	fn empty_domain() {
		let domain = Domain::<i32>::new();
		assert!(domain.is_empty());
		assert!(!domain.contains(&0));
		assert_eq!(domain.lower_bound(), None);
		assert_eq!(domain.upper_bound(), None);
		assert!(!domain.is_single_value());
		assert_eq!(domain, Domain::default());
	}

	#[test]
	fn constructors() {
		assert_eq!(Domain::from_value(4).intervals(), [ii(4, 4)]);
		assert_eq!(Domain::from(2..=5).intervals(), [ii(2, 5)]);
		assert_eq!(Domain::from(ii(2, 5)), Domain::from(2..=5));

		let unchecked = Domain::from_bounds_unchecked(-3, 7);
		assert!(!unchecked.is_empty());
		assert!(unchecked.contains(&0));
	}

	#[test]
	fn bounds_tests() {
		let domain = basic();
		assert_eq!(domain.lower_bound(), Some(&0));
		assert_eq!(domain.upper_bound(), Some(&20));
	}

	#[test]
	fn append_merges_overlapping() {
		let mut domain = Domain::new();
		domain.append_interval(ii(1, 3));
		domain.append_interval(ii(5, 7));
		assert_eq!(domain.interval_count(), 2);
		assert!(!domain.contains(&4));

		domain.append_interval(ii(3, 5));
		assert_eq!(domain.interval_count(), 1);
		assert_eq!(domain.intervals(), [ii(1, 7)]);
		assert!(domain.contains(&4));
	}

	#[test]
	fn append_swallowed_interval_keeps_upper() {
		let mut domain = Domain::from_interval(ii(0, 10));
		domain.append_interval(ii(2, 3));
		assert_eq!(domain.intervals(), [ii(0, 10)]);
	}

	#[test]
	fn append_chain_merges_through_neighbours() {
		let mut domain: Domain<i32> =
			[ii(0, 1), ii(3, 4), ii(6, 7), ii(9, 10)].into_iter().collect();
		domain.append_interval(ii(1, 9));
		assert_eq!(domain.intervals(), [ii(0, 10)]);
	}

	#[test]
	fn append_does_not_merge_adjacent_points() {
		let mut domain = Domain::from_value(1);
		domain.append_value(2);
		assert_eq!(domain.intervals(), [ii(1, 1), ii(2, 2)]);
	}

	#[test]
	fn append_clears_covered_exclusions() {
		let mut domain = basic();
		assert!(!domain.contains(&10));
		domain.append_interval(ii(9, 11));
		assert!(domain.contains(&10));
		assert!(domain.exclusions().is_empty());

		let mut domain = basic();
		domain.append_value(10);
		assert!(domain.contains(&10));
	}

	#[test]
	fn remove_value_tests() {
		let mut domain = basic();
		domain.remove_values([1, 2]);
		assert!(domain.contains(&0));
		assert!(!domain.contains(&1));
		assert!(!domain.contains(&2));
		assert!(domain.contains(&3));

		// nothing to exclude outside the intervals
		domain.remove_value(50);
		assert_eq!(domain.exclusions().len(), 3);
	}

	#[test]
	fn excluded_values_are_never_contained() {
		let mut domain = Domain::from_interval(ii(0, 100));
		for value in (0..=100).step_by(7) {
			domain.remove_value(value);
		}
		for value in (0..=100).step_by(7) {
			assert!(!domain.contains(&value));
		}
		assert!(domain.contains(&1));
	}

	#[test]
	fn remove_interval_cases() {
		// exact match
		assert_remove_interval(ii(2, 8), ii(2, 8), &[], &[]);
		// swallowed
		assert_remove_interval(ii(2, 8), ii(0, 10), &[], &[]);
		// interior
		assert_remove_interval(
			ii(2, 8),
			ii(4, 6),
			&[ii(2, 4), ii(6, 8)],
			&[4, 6],
		);
		// overhangs the start
		assert_remove_interval(ii(2, 8), ii(0, 5), &[ii(5, 8)], &[5]);
		// overhangs the end
		assert_remove_interval(ii(2, 8), ii(5, 10), &[ii(2, 5)], &[5]);
		// touches the start
		assert_remove_interval(ii(2, 8), ii(0, 2), &[ii(2, 8)], &[2]);
		// touches the end
		assert_remove_interval(ii(2, 8), ii(8, 10), &[ii(2, 8)], &[8]);
		// no overlap at all
		assert_remove_interval(ii(2, 8), ii(10, 12), &[ii(2, 8)], &[]);
	}
	fn assert_remove_interval(
		before: Interval<i8>,
		to_remove: Interval<i8>,
		intervals: &[Interval<i8>],
		exclusions: &[i8],
	) {
		let mut domain = Domain::from_interval(before);
		domain.remove_interval(&to_remove);
		assert_eq!(domain.intervals(), intervals);
		assert_eq!(
			domain.exclusions().iter().copied().collect::<Vec<_>>(),
			exclusions
		);
	}

	#[test]
	fn remove_interval_spanning_several() {
		let mut domain = basic();
		domain.remove_interval(&ii(3, 9));
		assert_eq!(domain.intervals(), [ii(0, 3), ii(9, 12), ii(20, 20)]);
		assert!(domain.contains(&2));
		assert!(!domain.contains(&3));
		assert!(!domain.contains(&9));
		assert!(!domain.contains(&10));
		assert!(domain.contains(&11));
	}

	#[test]
	fn removal_then_reappend_floats() {
		let mut domain = Domain::from_interval(ii(0.0, 1.0));
		domain.remove_value(0.5);
		domain.remove_interval(&ii(0.3, 0.4));
		assert!(domain.contains(&0.1));
		assert!(!domain.contains(&0.3));
		assert!(!domain.contains(&0.35));
		assert!(!domain.contains(&0.4));
		assert!(!domain.contains(&0.5));
		assert_eq!(domain.interval_count(), 2);

		domain.append_interval(ii(0.3, 0.4));
		assert!(domain.contains(&0.1));
		assert!(domain.contains(&0.3));
		assert!(domain.contains(&0.35));
		assert!(domain.contains(&0.4));
		assert!(!domain.contains(&0.5));
		assert_eq!(domain.interval_count(), 1);
	}

	#[test]
	fn remove_point_interval_keeps_one_interval() {
		let mut domain = Domain::from_interval(ii(0.0, 1.0));
		domain.remove_interval(&ii(0.5, 0.5));
		assert_eq!(domain.intervals(), [ii(0.0, 1.0)]);
		assert!(!domain.contains(&0.5));
	}

	#[test]
	fn remove_domain_keeps_others_holes() {
		let mut other = Domain::from_interval(ii(3, 6));
		other.remove_value(4);

		let mut domain = Domain::from_interval(ii(0, 10));
		domain.remove_domain(&other);

		for value in 0..=10 {
			assert_eq!(
				domain.contains(&value),
				!(3..=6).contains(&value) || value == 4,
				"value {value}"
			);
		}
	}

	#[test]
	fn normalize_is_idempotent() {
		let mut domain = basic();
		domain.remove_interval(&ii(2, 9));
		let once = domain.clone();
		domain.normalize();
		assert_eq!(domain, once);
		assert_eq!(domain.intervals(), once.intervals());
	}

	#[test]
	fn overlap_ignores_exclusions() {
		let domain = Domain::from_interval(ii(-100, 100));
		assert!(domain.overlaps_interval(&ii(-100, 100)));
		assert!(domain.overlaps_interval(&ii(-50, 150)));
		assert!(domain.overlaps_interval(&ii(100, 150)));
		assert!(domain.overlaps_interval(&ii(100, 100)));
		assert!(!domain.overlaps_interval(&ii(101, 150)));
		assert!(domain.overlaps(&domain));

		let mut holed = Domain::from_interval(ii(0, 2));
		holed.remove_value(1);
		assert!(holed.overlaps_interval(&ii(1, 1)));
	}

	#[test]
	fn single_value_tests() {
		assert!(Domain::from_value(1).is_single_value());
		assert_eq!(Domain::from_value(1).single_value(), Some(&1));
		assert!(Domain::from_interval(ii(1, 1)).is_single_value());
		assert!(!Domain::from_interval(ii(1, 2)).is_single_value());

		let mut excluded = Domain::from_value(0.5);
		excluded.remove_value(0.5);
		assert!(!excluded.is_single_value());
	}

	#[test]
	fn equality_tests() {
		let h1 = Domain::from_interval(ii(1, 1));
		let h2 = Domain::from_interval(ii(2, 2));
		let h3 = h1.union(&h2);

		let mut h4 = Domain::from_interval(ii(1, 1));
		h4.append_value(2);

		assert_ne!(h1, h2);
		assert_ne!(h1, h3);
		assert_ne!(h2, h3);
		assert_ne!(h1, h4);
		assert_ne!(h2, h4);
		assert_eq!(h3, h4);

		let mut holed = h4.clone();
		holed.remove_value(2);
		assert_ne!(holed, h4);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_keeps_holes() {
		let domain = basic();
		let json = serde_json::to_string(&domain).unwrap();
		let back: Domain<i8> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, domain);
	}
}
