use core::iter::FusedIterator;

use log::debug;
use smallvec::SmallVec;

use crate::{DiscreteFinite, Domain, ExclusionSet, Interval, PointType};

impl<T> Domain<T>
where
	T: PointType + DiscreteFinite,
{
	/// Returns an iterator over every point in the domain in ascending
	/// order, skipping excluded points.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain: Domain<u8> = [ii(1, 3), ii(7, 8)].into_iter().collect();
	/// domain.remove_value(2);
	///
	/// assert_eq!(domain.iter().collect::<Vec<_>>(), [1, 3, 7, 8]);
	/// ```
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			domain: self,
			index: 0,
			cursor: None,
		}
	}

	/// Returns the only point in the domain, if there is exactly one.
	///
	/// Unlike [`Domain::single_value()`] this also finds a single point
	/// left over between holes, such as `1..=2` with `2` excluded. Points
	/// are enumerated only until a second one is found.
	pub fn single_discrete_value(&self) -> Option<T> {
		let mut points = self.iter();
		let only = points.next()?;

		points.next().is_none().then_some(only)
	}

	/// Returns `true` if the domain holds exactly one point, see
	/// [`Domain::single_discrete_value()`].
	pub fn is_single_discrete_value(&self) -> bool {
		self.single_discrete_value().is_some()
	}

	/// Absorbs every exclusion into the intervals.
	///
	/// Holes on an interval's end-point shrink it, holes inside an interval
	/// split it in two. Afterwards the exclusion set is empty and the domain
	/// contains exactly the same points.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain = Domain::from_interval(ii(0, 10));
	/// domain.remove_values([0, 5, 10]);
	/// domain.compact();
	///
	/// assert_eq!(domain.intervals(), [ii(1, 4), ii(6, 9)]);
	/// assert_eq!(domain.exclusions().is_empty(), true);
	/// ```
	pub fn compact(&mut self) {
		debug!(
			"compact({} intervals, {} exclusions)",
			self.intervals.len(),
			self.exclusions.len()
		);

		let mut compacted = SmallVec::with_capacity(self.intervals.len());
		for interval in self.intervals.drain(..) {
			let mut start = Some(interval.lower.clone());
			for hole in self.exclusions.within(&interval) {
				let Some(current) = start.take() else {
					break;
				};
				if let Some(before) = hole.clone().down() {
					if before >= current {
						compacted.push(Interval::new_unchecked(current, before));
					}
				}
				start = hole.clone().up();
			}

			if let Some(current) = start {
				if current <= interval.upper {
					compacted.push(Interval::new_unchecked(current, interval.upper));
				}
			}
		}

		self.intervals = compacted;
		self.exclusions = ExclusionSet::new();
	}
}

/// An iterator over the points of a [`Domain`], see [`Domain::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
	domain: &'a Domain<T>,
	index: usize,
	cursor: Option<T>,
}

impl<T> Iterator for Iter<'_, T>
where
	T: PointType + DiscreteFinite,
{
	type Item = T;

	fn next(&mut self) -> Option<T> {
		loop {
			let interval = self.domain.intervals.get(self.index)?;
			let current = self
				.cursor
				.take()
				.unwrap_or_else(|| interval.lower.clone());

			match current.clone().up() {
				Some(next) if next <= interval.upper => self.cursor = Some(next),
				_ => self.index += 1,
			}

			if !self.domain.exclusions.contains(&current) {
				return Some(current);
			}
		}
	}
}

impl<T> FusedIterator for Iter<'_, T> where T: PointType + DiscreteFinite {}

impl<'a, T> IntoIterator for &'a Domain<T>
where
	T: PointType + DiscreteFinite,
{
	type Item = T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}
