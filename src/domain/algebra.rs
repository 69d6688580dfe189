use core::ops::{BitAnd, BitOr, BitXor, Sub};

use itertools::Itertools;
use log::debug;

use crate::{Domain, ExclusionSet, Interval, PointType};

impl<T> Domain<T>
where
	T: PointType,
{
	/// Adds every point of `other` to `self`.
	///
	/// Afterwards `self.contains(v)` holds exactly when the old `self` or
	/// `other` contained `v`: exclusions from either side are kept only
	/// where the other side does not cover them.
	pub fn union_with(&mut self, other: &Domain<T>) {
		debug!(
			"union_with({} intervals, {} intervals)",
			self.intervals.len(),
			other.intervals.len()
		);

		let mut exclusions = ExclusionSet::new();
		for hole in self.exclusions.iter() {
			if !other.contains(hole) {
				exclusions.insert(hole.clone());
			}
		}
		for hole in other.exclusions.iter() {
			if !self.contains(hole) {
				exclusions.insert(hole.clone());
			}
		}

		self.intervals.extend(other.intervals.iter().cloned());
		self.exclusions = exclusions;
		self.normalize();
	}

	/// Keeps only the points of `self` that `other` also contains.
	///
	/// Every overlapping pair of intervals contributes its overlap, and the
	/// exclusions of both sides are kept.
	pub fn intersect_with(&mut self, other: &Domain<T>) {
		debug!(
			"intersect_with({} intervals, {} intervals)",
			self.intervals.len(),
			other.intervals.len()
		);

		self.intervals = self
			.intervals
			.iter()
			.cartesian_product(other.intervals.iter())
			.filter_map(|(ours, theirs)| ours.intersection(theirs))
			.collect();
		self.exclusions.extend_from(&other.exclusions);
		self.normalize();
	}

	/// Keeps the points that exactly one of `self` and `other` contains.
	///
	/// This is `(self - other) | (other - self)`, each subtraction cutting
	/// every overlapping pair of intervals apart and excluding the closed
	/// end-points left next to each cut.
	pub fn symmetric_difference_with(&mut self, other: &Domain<T>) {
		debug!(
			"symmetric_difference_with({} intervals, {} intervals)",
			self.intervals.len(),
			other.intervals.len()
		);

		let mut theirs = other.clone();
		theirs.remove_domain(self);

		self.remove_domain(other);
		self.union_with(&theirs);
	}

	/// Returns the union of `self` and `other`, see [`Domain::union_with()`].
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let a = Domain::from_interval(ii(1, 1));
	/// let b = Domain::from_interval(ii(2, 2));
	///
	/// let union = a.union(&b);
	///
	/// assert_eq!(union.contains(&1), true);
	/// assert_eq!(union.contains(&2), true);
	/// assert_eq!(a.contains(&2), false);
	/// ```
	pub fn union(&self, other: &Domain<T>) -> Domain<T> {
		let mut result = self.clone();
		result.union_with(other);
		result
	}

	/// Returns a copy of the domain with `value` added, see
	/// [`Domain::append_value()`].
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let domain = Domain::from_interval(ii(1, 3));
	///
	/// let widened = domain.with_value(7);
	///
	/// assert_eq!(widened.intervals(), [ii(1, 3), ii(7, 7)]);
	/// assert_eq!(domain.contains(&7), false);
	/// ```
	pub fn with_value(&self, value: T) -> Domain<T> {
		let mut result = self.clone();
		result.append_value(value);
		result
	}

	/// Returns a copy of the domain with every point of `interval` added, see
	/// [`Domain::append_interval()`].
	///
	/// # Panics
	///
	/// Panics if the given interval is invalid.
	pub fn with_interval(&self, interval: Interval<T>) -> Domain<T> {
		let mut result = self.clone();
		result.append_interval(interval);
		result
	}

	/// Returns the intersection of `self` and `other`, see
	/// [`Domain::intersect_with()`].
	pub fn intersection(&self, other: &Domain<T>) -> Domain<T> {
		let mut result = self.clone();
		result.intersect_with(other);
		result
	}

	/// Returns the symmetric difference of `self` and `other`, see
	/// [`Domain::symmetric_difference_with()`].
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let a = Domain::from_interval(ii(1, 10));
	/// let b = Domain::from_interval(ii(5, 15));
	///
	/// let difference = a.symmetric_difference(&b);
	///
	/// assert_eq!(difference.contains(&4), true);
	/// assert_eq!(difference.contains(&5), false);
	/// assert_eq!(difference.contains(&10), false);
	/// assert_eq!(difference.contains(&11), true);
	/// ```
	pub fn symmetric_difference(&self, other: &Domain<T>) -> Domain<T> {
		let mut result = self.clone();
		result.symmetric_difference_with(other);
		result
	}

	/// Returns the points of `self` that `other` does not contain, see
	/// [`Domain::remove_domain()`].
	pub fn difference(&self, other: &Domain<T>) -> Domain<T> {
		let mut result = self.clone();
		result.remove_domain(other);
		result
	}
}

impl<T> BitOr<&Domain<T>> for &Domain<T>
where
	T: PointType,
{
	type Output = Domain<T>;

	fn bitor(self, rhs: &Domain<T>) -> Domain<T> {
		self.union(rhs)
	}
}

impl<T> BitAnd<&Domain<T>> for &Domain<T>
where
	T: PointType,
{
	type Output = Domain<T>;

	fn bitand(self, rhs: &Domain<T>) -> Domain<T> {
		self.intersection(rhs)
	}
}

impl<T> BitXor<&Domain<T>> for &Domain<T>
where
	T: PointType,
{
	type Output = Domain<T>;

	fn bitxor(self, rhs: &Domain<T>) -> Domain<T> {
		self.symmetric_difference(rhs)
	}
}

impl<T> Sub<&Domain<T>> for &Domain<T>
where
	T: PointType,
{
	type Output = Domain<T>;

	fn sub(self, rhs: &Domain<T>) -> Domain<T> {
		self.difference(rhs)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::interval::ii;
	use crate::{Domain, Interval};

	const NUMBERS_DOMAIN: core::ops::RangeInclusive<i8> = -2..=22;

	fn domain(intervals: &[Interval<i8>], holes: &[i8]) -> Domain<i8> {
		let mut domain: Domain<i8> = intervals.iter().copied().collect();
		domain.remove_values(holes.iter().copied());
		domain
	}

	fn samples() -> Vec<Domain<i8>> {
		vec![
			Domain::new(),
			domain(&[ii(0, 10)], &[]),
			domain(&[ii(5, 15)], &[]),
			domain(&[ii(0, 10)], &[3, 7]),
			domain(&[ii(2, 3), ii(5, 6)], &[]),
			domain(&[ii(0, 4), ii(8, 12), ii(20, 20)], &[10]),
			domain(&[ii(4, 8), ii(10, 10)], &[4, 8]),
			domain(&[ii(1, 1), ii(2, 2)], &[2]),
		]
	}

	#[test]
	fn union_tests() {
		let h1 = Domain::from_interval(ii(1, 1));
		let h2 = Domain::from_interval(ii(2, 2));

		let mut merged = h1.clone();
		merged.union_with(&h2);
		assert!(merged.contains(&1));
		assert!(merged.contains(&2));

		let union = &h1 | &h2;
		assert!(union.contains(&1));
		assert!(union.contains(&2));

		// no modification when using the operator
		assert!(!h1.contains(&2));
		assert!(!h2.contains(&1));
	}

	#[test]
	fn with_value_and_interval() {
		let mut holed = domain(&[ii(0, 10)], &[5]);

		let patched = holed.with_value(5);
		assert!(patched.contains(&5));
		assert!(patched.exclusions().is_empty());

		let extended = holed.with_interval(ii(8, 15));
		assert_eq!(extended.intervals(), [ii(0, 15)]);
		assert!(!extended.contains(&5));
		assert!(extended.contains(&15));

		// no modification when combining
		assert!(!holed.contains(&5));
		assert!(!holed.contains(&15));

		holed.append_value(5);
		assert_eq!(patched, holed);
	}

	#[test]
	fn union_drops_covered_exclusions() {
		let holed = domain(&[ii(0, 10)], &[3, 7]);
		let patch = domain(&[ii(2, 4)], &[]);

		let union = holed.union(&patch);
		assert_eq!(union.intervals(), [ii(0, 10)]);
		assert!(union.contains(&3));
		assert!(!union.contains(&7));
		assert_eq!(union.exclusions().iter().copied().collect::<Vec<_>>(), [7]);
	}

	#[test]
	fn union_of_two_holes_keeps_shared_hole() {
		let a = domain(&[ii(0, 10)], &[5]);
		let b = domain(&[ii(3, 8)], &[5]);
		let union = &a | &b;
		assert!(!union.contains(&5));
		assert!(union.contains(&4));
	}

	#[test]
	fn intersection_tests() {
		let mut h1 = Domain::from_interval(ii(1, 3));
		let h2 = Domain::from_interval(ii(2, 4));
		h1.intersect_with(&h2);
		assert!(h1.contains(&2));
		assert!(h1.contains(&3));
		assert!(!h1.contains(&1));
		assert!(!h1.contains(&4));

		let h1 = Domain::from_interval(ii(1, 3));
		let intersection = &h1 & &h2;
		assert_eq!(intersection.intervals(), [ii(2, 3)]);

		// no modification when using the operator
		assert!(!h1.contains(&4));
		assert!(!h2.contains(&1));
	}

	#[test]
	fn intersection_cross_product() {
		let a = domain(&[ii(0, 4), ii(8, 12)], &[]);
		let b = domain(&[ii(3, 9), ii(11, 20)], &[12]);
		let intersection = a.intersection(&b);
		assert_eq!(
			intersection.intervals(),
			[ii(3, 4), ii(8, 9), ii(11, 12)]
		);
		assert!(!intersection.contains(&12));
		assert!(intersection.contains(&11));
	}

	#[test]
	fn symmetric_difference_tests() {
		let mut h1 = Domain::from_interval(ii(1, 3));
		let h2 = Domain::from_interval(ii(2, 4));
		h1.symmetric_difference_with(&h2);
		assert!(!h1.contains(&2));
		assert!(!h1.contains(&3));
		assert!(h1.contains(&1));
		assert!(h1.contains(&4));

		let h1 = Domain::from_interval(ii(1, 3));
		let difference = &h1 ^ &h2;
		assert!(!difference.contains(&2));
		assert!(difference.contains(&4));

		// no modification when using the operator
		assert!(!h1.contains(&4));
		assert!(!h2.contains(&1));
	}

	#[test]
	fn symmetric_difference_staggered() {
		let a = Domain::from_interval(ii(1, 10));
		let b = Domain::from_interval(ii(5, 15));
		let difference = a.symmetric_difference(&b);

		let contained: Vec<i8> = NUMBERS_DOMAIN
			.filter(|value| difference.contains(value))
			.collect();
		assert_eq!(contained, [1, 2, 3, 4, 11, 12, 13, 14, 15]);
		assert_eq!(difference.intervals(), [ii(1, 5), ii(10, 15)]);
	}

	#[test]
	fn symmetric_difference_endpoint_cases() {
		// equal on both ends
		assert_symmetric_difference(ii(2, 8), ii(2, 8), &[]);
		// same lower, ours shorter
		assert_symmetric_difference(ii(2, 5), ii(2, 8), &[6, 7, 8]);
		// same lower, ours longer
		assert_symmetric_difference(ii(2, 8), ii(2, 5), &[6, 7, 8]);
		// same upper, ours longer
		assert_symmetric_difference(ii(2, 8), ii(5, 8), &[2, 3, 4]);
		// same upper, ours shorter
		assert_symmetric_difference(ii(5, 8), ii(2, 8), &[2, 3, 4]);
		// nested
		assert_symmetric_difference(ii(0, 10), ii(4, 6), &[0, 1, 2, 3, 7, 8, 9, 10]);
		assert_symmetric_difference(ii(4, 6), ii(0, 10), &[0, 1, 2, 3, 7, 8, 9, 10]);
		// staggered
		assert_symmetric_difference(ii(0, 5), ii(3, 8), &[0, 1, 2, 6, 7, 8]);
		assert_symmetric_difference(ii(3, 8), ii(0, 5), &[0, 1, 2, 6, 7, 8]);
		// touching at a single point
		assert_symmetric_difference(ii(0, 5), ii(5, 8), &[0, 1, 2, 3, 4, 6, 7, 8]);
		// disjoint
		assert_symmetric_difference(ii(0, 2), ii(6, 8), &[0, 1, 2, 6, 7, 8]);
	}
	fn assert_symmetric_difference(
		ours: Interval<i8>,
		theirs: Interval<i8>,
		contained: &[i8],
	) {
		let difference =
			Domain::from_interval(ours).symmetric_difference(&Domain::from_interval(theirs));
		let actual: Vec<i8> = NUMBERS_DOMAIN
			.filter(|value| difference.contains(value))
			.collect();
		assert_eq!(actual, contained, "{ours:?} ^ {theirs:?}");
	}

	#[test]
	fn symmetric_difference_several_overlaps() {
		let a = domain(&[ii(0, 10)], &[]);
		let b = domain(&[ii(2, 3), ii(5, 6)], &[]);
		let difference = a.symmetric_difference(&b);
		let actual: Vec<i8> = NUMBERS_DOMAIN
			.filter(|value| difference.contains(value))
			.collect();
		assert_eq!(actual, [0, 1, 4, 7, 8, 9, 10]);
	}

	#[test]
	fn containment_laws_over_samples() {
		for a in samples() {
			for b in samples() {
				let union = a.union(&b);
				let intersection = a.intersection(&b);
				let difference = a.symmetric_difference(&b);
				let subtraction = &a - &b;

				for value in NUMBERS_DOMAIN {
					let (in_a, in_b) = (a.contains(&value), b.contains(&value));
					assert_eq!(union.contains(&value), in_a || in_b, "{a:?} | {b:?} at {value}");
					assert_eq!(
						intersection.contains(&value),
						in_a && in_b,
						"{a:?} & {b:?} at {value}"
					);
					assert_eq!(
						difference.contains(&value),
						in_a != in_b,
						"{a:?} ^ {b:?} at {value}"
					);
					assert_eq!(
						subtraction.contains(&value),
						in_a && !in_b,
						"{a:?} - {b:?} at {value}"
					);
				}
			}
		}
	}

	#[test]
	fn operands_are_never_altered() {
		for a in samples() {
			for b in samples() {
				let (a_before, b_before) = (a.clone(), b.clone());
				let _ = &a | &b;
				let _ = &a & &b;
				let _ = &a ^ &b;
				let _ = &a - &b;
				assert_eq!(a, a_before);
				assert_eq!(b, b_before);
			}
		}
	}
}
