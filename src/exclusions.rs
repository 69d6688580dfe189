//! A module containing [`ExclusionSet`].

use core::cmp::Ordering;

use btree_monstrousity::btree_map::SearchBoundCustom;
use btree_monstrousity::BTreeMap;

use crate::utils::cmp_points;
use crate::{Interval, PointType};

/// An ordered set of individually excluded points ("holes").
///
/// The set is based on a [`BTreeMap`] that takes its comparators per call, so
/// points only need to be [`PartialOrd`], which lets `f64` holes live in the
/// same structure as integer ones.
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionSet<T> {
	inner: BTreeMap<T, ()>,
}

impl<T> ExclusionSet<T>
where
	T: PointType,
{
	/// Makes a new, empty `ExclusionSet`.
	pub fn new() -> Self {
		ExclusionSet {
			inner: BTreeMap::default(),
		}
	}

	/// Returns `true` if `point` is excluded.
	pub fn contains(&self, point: &T) -> bool {
		self.inner.contains_key(point_comp(point))
	}

	/// Excludes `point`, returning `false` if it already was.
	pub fn insert(&mut self, point: T) -> bool {
		self.inner.insert(point, (), double_comp()).is_none()
	}

	/// Stops excluding `point`, returning `true` if it was excluded.
	pub fn remove(&mut self, point: &T) -> bool {
		self.inner.remove(point_comp(point)).is_some()
	}

	/// Returns the number of excluded points.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if nothing is excluded.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over the excluded points in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
		self.inner.iter().map(first)
	}

	/// Returns an iterator over the excluded points inside `interval` in
	/// ascending order.
	pub fn within<'a>(
		&'a self,
		interval: &'a Interval<T>,
	) -> impl DoubleEndedIterator<Item = &'a T> {
		self.inner
			.range(
				point_comp(&interval.lower),
				SearchBoundCustom::Included,
				point_comp(&interval.upper),
				SearchBoundCustom::Included,
			)
			.map(first)
	}

	/// Excludes every point `other` excludes.
	pub fn extend_from(&mut self, other: &Self) {
		for point in other.iter() {
			self.insert(point.clone());
		}
	}

	/// Keeps only the points for which `keep` returns `true`.
	pub fn retain<F>(&mut self, mut keep: F)
	where
		F: FnMut(&T) -> bool,
	{
		let doomed: Vec<T> = self
			.iter()
			.filter(|point| !keep(point))
			.cloned()
			.collect();

		for point in doomed {
			self.remove(&point);
		}
	}
}

impl<T> Default for ExclusionSet<T>
where
	T: PointType,
{
	fn default() -> Self {
		ExclusionSet::new()
	}
}

impl<T> FromIterator<T> for ExclusionSet<T>
where
	T: PointType,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = ExclusionSet::new();
		for point in iter {
			set.insert(point);
		}
		set
	}
}

fn double_comp<T>() -> impl FnMut(&T, &T) -> Ordering
where
	T: PointType,
{
	|inner_point: &T, new_point: &T| cmp_points(new_point, inner_point)
}
fn point_comp<T>(point: &T) -> impl FnMut(&T) -> Ordering + '_
where
	T: PointType,
{
	move |inner_point: &T| cmp_points(point, inner_point)
}

fn first<A, B>((a, _): (A, B)) -> A {
	a
}
