//! A module containing transforms over a [`Domain`] and the arithmetic built
//! on them.
//!
//! Every transform maps both end-points of each interval and every excluded
//! point through a function. The two mapped end-points are re-ordered so a
//! decreasing function still yields valid intervals. Only the end-points are
//! mapped, so for a function that is not monotonic over an interval the
//! result is the interval between the two mapped end-points, not the true
//! image of the interval.

use core::convert::Infallible;
use core::ops::{Add, Div, Mul, Sub};

use log::debug;
use smallvec::SmallVec;

use crate::{Domain, ExclusionSet, Interval, NonFiniteError, PointType};

/// A trait for point types some of whose values cannot be stored in a
/// [`Domain`], such as `NaN` for floating-point numbers.
pub trait Representable {
	/// Returns `false` if the value must not be stored in a [`Domain`].
	fn is_representable(&self) -> bool {
		true
	}
}

macro_rules! always {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Representable for $ident {}

		always!($($t)*);
	};
}

always!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, bool, char, String,);

impl Representable for f32 {
	fn is_representable(&self) -> bool {
		self.is_finite()
	}
}

impl Representable for f64 {
	fn is_representable(&self) -> bool {
		self.is_finite()
	}
}

/// A trait for point types with addition, subtraction and multiplication.
///
/// Each operation returns `None` instead of overflowing, floating-point
/// overflow is caught by [`Representable`] instead.
pub trait Numeric:
	PointType + Representable + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
	/// `self + rhs`, or `None` on overflow.
	fn checked_plus(&self, rhs: &Self) -> Option<Self>;
	/// `self - rhs`, or `None` on overflow.
	fn checked_minus(&self, rhs: &Self) -> Option<Self>;
	/// `self * rhs`, or `None` on overflow.
	fn checked_times(&self, rhs: &Self) -> Option<Self>;
}

macro_rules! integer {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Numeric for $ident {
			fn checked_plus(&self, rhs: &Self) -> Option<Self> {
				$ident::checked_add(*self, *rhs)
			}
			fn checked_minus(&self, rhs: &Self) -> Option<Self> {
				$ident::checked_sub(*self, *rhs)
			}
			fn checked_times(&self, rhs: &Self) -> Option<Self> {
				$ident::checked_mul(*self, *rhs)
			}
		}

		integer!($($t)*);
	};
}

integer!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);

macro_rules! float {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Numeric for $ident {
			fn checked_plus(&self, rhs: &Self) -> Option<Self> {
				Some(self + rhs)
			}
			fn checked_minus(&self, rhs: &Self) -> Option<Self> {
				Some(self - rhs)
			}
			fn checked_times(&self, rhs: &Self) -> Option<Self> {
				Some(self * rhs)
			}
		}

		float!($($t)*);
	};
}

float!(f32, f64,);

/// The marker trait for numeric point types that can also be divided.
pub trait FloatingPoint: Numeric + Div<Output = Self> {}
impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

impl<T> Domain<T>
where
	T: PointType,
{
	/// Maps every end-point and exclusion through `f`, stopping at the first
	/// error.
	pub(crate) fn try_map<U, E, F>(&self, mut f: F) -> Result<Domain<U>, E>
	where
		U: PointType,
		F: FnMut(&T) -> Result<U, E>,
	{
		let mut intervals = SmallVec::with_capacity(self.intervals.len());
		for interval in self.intervals.iter() {
			let lower = f(&interval.lower)?;
			let upper = f(&interval.upper)?;
			intervals.push(Interval::sorted(lower, upper));
		}

		let mut exclusions = ExclusionSet::new();
		for hole in self.exclusions.iter() {
			exclusions.insert(f(hole)?);
		}

		let mut domain = Domain {
			intervals,
			exclusions,
		};
		domain.normalize();

		Ok(domain)
	}

	/// Makes a new `Domain` over another point type by mapping every
	/// end-point and exclusion through `f`.
	///
	/// Returns a [`NonFiniteError`] carrying the first value whose image is
	/// not [representable](Representable).
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let mut domain = Domain::from_interval(ii(1, 4));
	/// domain.remove_value(2);
	///
	/// let halves = domain.transform(|x| x as f64 / 2.0).unwrap();
	///
	/// assert_eq!(halves.intervals(), [ii(0.5, 2.0)]);
	/// assert_eq!(halves.contains(&1.0), false);
	///
	/// let error = domain.transform(|x| x as f64 / 0.0).unwrap_err();
	/// assert_eq!(error.value, 1);
	/// ```
	pub fn transform<U, F>(&self, mut f: F) -> Result<Domain<U>, NonFiniteError<T>>
	where
		U: PointType + Representable,
		F: FnMut(T) -> U,
	{
		debug!(
			"transform({} intervals, {} exclusions)",
			self.intervals.len(),
			self.exclusions.len()
		);

		self.try_map(|value| {
			let image = f(value.clone());
			if image.is_representable() {
				Ok(image)
			} else {
				Err(NonFiniteError {
					value: value.clone(),
				})
			}
		})
	}

	/// Maps every end-point and exclusion of the domain through `f` in place,
	/// see [`Domain::transform()`].
	///
	/// The domain is left unchanged if an error is returned.
	pub fn apply<F>(&mut self, f: F) -> Result<(), NonFiniteError<T>>
	where
		T: Representable,
		F: FnMut(T) -> T,
	{
		*self = self.transform(f)?;
		Ok(())
	}

	/// Like [`Domain::transform()`] within the same point type, but `f`
	/// reports failures itself by returning `None`.
	pub(crate) fn checked_transform<F>(&self, mut f: F) -> Result<Domain<T>, NonFiniteError<T>>
	where
		T: Representable,
		F: FnMut(&T) -> Option<T>,
	{
		debug!(
			"checked_transform({} intervals, {} exclusions)",
			self.intervals.len(),
			self.exclusions.len()
		);

		self.try_map(|value| match f(value) {
			Some(image) if image.is_representable() => Ok(image),
			_ => Err(NonFiniteError {
				value: value.clone(),
			}),
		})
	}
}

impl<T> Domain<T>
where
	T: Numeric,
{
	/// Returns the domain shifted up by `rhs`.
	///
	/// Returns a [`NonFiniteError`] carrying the first value whose image
	/// overflows or is not [representable](Representable).
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let domain = Domain::from_interval(ii(0, 10));
	///
	/// assert_eq!(domain.plus(5).unwrap().intervals(), [ii(5, 15)]);
	///
	/// let bytes = Domain::from_interval(ii(0_u8, 255));
	/// assert_eq!(bytes.plus(1).unwrap_err().value, 255);
	/// ```
	pub fn plus(&self, rhs: T) -> Result<Domain<T>, NonFiniteError<T>> {
		self.checked_transform(|value| value.checked_plus(&rhs))
	}

	/// Returns the domain shifted down by `rhs`.
	pub fn minus(&self, rhs: T) -> Result<Domain<T>, NonFiniteError<T>> {
		self.checked_transform(|value| value.checked_minus(&rhs))
	}

	/// Returns the domain scaled by `rhs`.
	pub fn times(&self, rhs: T) -> Result<Domain<T>, NonFiniteError<T>> {
		self.checked_transform(|value| value.checked_times(&rhs))
	}
}

impl<T> Domain<T>
where
	T: FloatingPoint,
{
	/// Returns the domain divided by `rhs`.
	///
	/// Dividing by zero produces infinities or `NaN` and so always fails on a
	/// non-empty domain.
	pub fn divided_by(&self, rhs: T) -> Result<Domain<T>, NonFiniteError<T>> {
		self.transform(|value| value / rhs.clone())
	}
}

impl Domain<String> {
	/// Returns the domain with `suffix` appended to every end-point and
	/// exclusion.
	pub fn concat(&self, suffix: &str) -> Domain<String> {
		self.concat_repeated(1, suffix)
	}

	/// Returns the domain with `suffix` appended `count` times to every
	/// end-point and exclusion.
	pub fn concat_repeated(&self, count: usize, suffix: &str) -> Domain<String> {
		let suffix = suffix.repeat(count);
		let result: Result<_, Infallible> = self.try_map(|value| Ok(format!("{value}{suffix}")));

		match result {
			Ok(domain) => domain,
			Err(never) => match never {},
		}
	}
}
