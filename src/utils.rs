use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::{Interval, PointType};

/// Orders two points, treating incomparable points as equal.
pub(crate) fn cmp_points<T>(a: &T, b: &T) -> Ordering
where
	T: PartialOrd,
{
	a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub(crate) fn partial_max<'a, T>(a: &'a T, b: &'a T) -> &'a T
where
	T: PartialOrd,
{
	if b > a {
		b
	} else {
		a
	}
}

pub(crate) fn partial_min<'a, T>(a: &'a T, b: &'a T) -> &'a T
where
	T: PartialOrd,
{
	if b < a {
		b
	} else {
		a
	}
}

pub(crate) fn invalid_interval_panic<T>(interval: &Interval<T>)
where
	T: PointType,
{
	if !interval.is_valid() {
		panic!(
			"invalid interval given to function, the lower bound must not be greater than the upper bound"
		);
	}
}

/// How a removed interval (`cut`) sits on a stored interval (`base`) that it
/// overlaps.
#[derive(Debug, PartialEq)]
pub(crate) enum RemovalCase {
	/// `cut` covers all of `base`, including the exact-match case.
	Swallowed,
	/// `cut` lies strictly inside `base`.
	Interior,
	/// `cut` only shares `base`'s upper end-point.
	TouchesEnd,
	/// `cut` only shares `base`'s lower end-point.
	TouchesStart,
	/// `cut` covers `base`'s lower part.
	OverhangsStart,
	/// `cut` covers `base`'s upper part.
	OverhangsEnd,
}

/// Classifies an overlapping pair into one of the six [`RemovalCase`]s.
///
/// # Panics
///
/// Panics if the pair matches none of the cases, which can only happen for
/// incomparable points or for intervals that do not overlap.
pub(crate) fn removal_case<T>(base: &Interval<T>, cut: &Interval<T>) -> RemovalCase
where
	T: PointType,
{
	if cut.lower <= base.lower && base.upper <= cut.upper {
		RemovalCase::Swallowed
	} else if base.lower < cut.lower && cut.upper < base.upper {
		RemovalCase::Interior
	} else if base.lower < cut.lower && cut.lower == base.upper {
		RemovalCase::TouchesEnd
	} else if cut.upper == base.lower && cut.upper < base.upper {
		RemovalCase::TouchesStart
	} else if cut.lower <= base.lower
		&& base.lower < cut.upper
		&& cut.upper < base.upper
	{
		RemovalCase::OverhangsStart
	} else if base.lower < cut.lower
		&& cut.lower < base.upper
		&& base.upper <= cut.upper
	{
		RemovalCase::OverhangsEnd
	} else {
		panic!("interval removal matched none of the known overlap cases");
	}
}

#[derive(Debug, PartialEq)]
pub(crate) struct CutResult<T> {
	pub(crate) before_cut: Option<Interval<T>>,
	pub(crate) after_cut: Option<Interval<T>>,
	/// The end-points of material kept next to the cut, which must become
	/// exclusions since every interval is closed.
	pub(crate) holes: SmallVec<[T; 2]>,
}

/// Cuts `cut` out of `base`. The two must overlap.
pub(crate) fn cut_interval<T>(base: &Interval<T>, cut: &Interval<T>) -> CutResult<T>
where
	T: PointType,
{
	let mut result = CutResult {
		before_cut: None,
		after_cut: None,
		holes: SmallVec::new(),
	};

	match removal_case(base, cut) {
		RemovalCase::Swallowed => {}
		RemovalCase::Interior => {
			result.before_cut = Some(Interval {
				lower: base.lower.clone(),
				upper: cut.lower.clone(),
			});
			result.after_cut = Some(Interval {
				lower: cut.upper.clone(),
				upper: base.upper.clone(),
			});
			result.holes.push(cut.lower.clone());
			result.holes.push(cut.upper.clone());
		}
		RemovalCase::TouchesEnd => {
			result.before_cut = Some(base.clone());
			result.holes.push(base.upper.clone());
		}
		RemovalCase::TouchesStart => {
			result.after_cut = Some(base.clone());
			result.holes.push(base.lower.clone());
		}
		RemovalCase::OverhangsStart => {
			result.after_cut = Some(Interval {
				lower: cut.upper.clone(),
				upper: base.upper.clone(),
			});
			result.holes.push(cut.upper.clone());
		}
		RemovalCase::OverhangsEnd => {
			result.before_cut = Some(Interval {
				lower: base.lower.clone(),
				upper: cut.lower.clone(),
			});
			result.holes.push(cut.lower.clone());
		}
	}

	result
}
