//! A module containing the [`Randomizable`] trait, its impls for common point
//! types and random sampling over a [`Domain`].

use log::{trace, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::{Domain, DomainError, Interval, PointType};

/// The number of draws [`Domain::random_element()`] makes before giving up.
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Characters used to build random strings.
pub(crate) const ALPHABET: &[u8] =
	b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!?.:;/=-+*@#%&";

const MAX_STRING_GROWTH: usize = 16;
const MAX_CONSECUTIVE_RETRIES: usize = 100;

/// A trait for point types that can be drawn at random.
pub trait Randomizable: Sized {
	/// Draws an unconstrained value of the type.
	fn random_element<R>(rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized;

	/// Draws a value from `interval`, or `None` if no value could be drawn.
	///
	/// The drawn value is expected, but not required, to lie inside the
	/// interval: [`Domain::random_element()`] rejects values it does not
	/// contain.
	fn random_element_in<R>(interval: &Interval<Self>, rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized;

	/// The relative likelihood of `interval` being picked when sampling a
	/// [`Domain`] holding several intervals.
	fn span_weight(_interval: &Interval<Self>) -> f64 {
		1.0
	}
}

macro_rules! integer {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Randomizable for $ident {
			fn random_element<R>(rng: &mut R) -> Option<Self>
			where
				R: Rng + ?Sized,
			{
				Some(rng.gen())
			}
			fn random_element_in<R>(interval: &Interval<Self>, rng: &mut R) -> Option<Self>
			where
				R: Rng + ?Sized,
			{
				interval
					.is_valid()
					.then(|| rng.gen_range(interval.lower..=interval.upper))
			}
			fn span_weight(interval: &Interval<Self>) -> f64 {
				interval.upper as f64 - interval.lower as f64 + 1.0
			}
		}

		integer!($($t)*);
	};
}

integer!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);

macro_rules! float {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Randomizable for $ident {
			fn random_element<R>(rng: &mut R) -> Option<Self>
			where
				R: Rng + ?Sized,
			{
				let magnitude = rng.gen::<$ident>() * $ident::MAX;
				Some(if rng.gen() { magnitude } else { -magnitude })
			}
			fn random_element_in<R>(interval: &Interval<Self>, rng: &mut R) -> Option<Self>
			where
				R: Rng + ?Sized,
			{
				let (lower, upper) = (interval.lower, interval.upper);
				if !lower.is_finite() || !upper.is_finite() || lower > upper {
					return None;
				}

				let t: $ident = rng.gen();
				let span = upper - lower;
				if span.is_finite() {
					Some((lower + span * t).min(upper))
				} else {
					Some(lower * (1.0 - t) + upper * t)
				}
			}
			fn span_weight(interval: &Interval<Self>) -> f64 {
				let span = interval.upper as f64 - interval.lower as f64;
				if span.is_finite() {
					span
				} else {
					f64::MAX
				}
			}
		}

		float!($($t)*);
	};
}

float!(f32, f64,);

impl Randomizable for bool {
	fn random_element<R>(rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized,
	{
		Some(rng.gen())
	}
	fn random_element_in<R>(interval: &Interval<Self>, rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized,
	{
		match (interval.lower, interval.upper) {
			(false, true) => Some(rng.gen()),
			(lower, upper) if lower == upper => Some(lower),
			_ => None,
		}
	}
	fn span_weight(interval: &Interval<Self>) -> f64 {
		if interval.lower == interval.upper {
			1.0
		} else {
			2.0
		}
	}
}

/// Random strings are made of ASCII letters, digits and a few symbols.
///
/// Drawing from an interval starts at its lower bound and appends random
/// characters as long as the result stays below the upper bound, so the
/// drawn strings always share the lower bound as a prefix.
impl Randomizable for String {
	fn random_element<R>(rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized,
	{
		let length = rng.gen_range(8..=100);
		Some((0..length).map(|_| random_letter(rng)).collect())
	}

	fn random_element_in<R>(interval: &Interval<Self>, rng: &mut R) -> Option<Self>
	where
		R: Rng + ?Sized,
	{
		if interval.lower > interval.upper {
			return None;
		}

		let growth = rng.gen_range(0..=MAX_STRING_GROWTH);
		let mut candidate = interval.lower.clone();
		let mut retries = 0;
		let mut grown = 0;
		while grown < growth && retries < MAX_CONSECUTIVE_RETRIES {
			candidate.push(random_letter(rng));
			if candidate <= interval.upper {
				grown += 1;
				retries = 0;
			} else {
				candidate.pop();
				retries += 1;
			}
		}

		Some(candidate)
	}
}

fn random_letter<R>(rng: &mut R) -> char
where
	R: Rng + ?Sized,
{
	char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
}

impl<T> Domain<T>
where
	T: PointType + Randomizable,
{
	/// Draws a random point of the domain.
	///
	/// An interval is picked with a probability proportional to its
	/// [`Randomizable::span_weight()`], then a value is drawn from it.
	/// Values that fall on a hole, or outside the domain, are rejected and
	/// the draw is retried.
	///
	/// Returns `Ok(None)` if the domain is empty and
	/// [`DomainError::SamplingExhausted`] if no draw was accepted after
	/// [`MAX_SAMPLING_ATTEMPTS`] attempts.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	/// use rand::rngs::StdRng;
	/// use rand::SeedableRng;
	///
	/// let mut rng = StdRng::seed_from_u64(7);
	/// let mut domain = Domain::from_interval(ii(1, 3));
	/// domain.remove_value(2);
	///
	/// let value = domain.random_element(&mut rng).unwrap().unwrap();
	///
	/// assert_eq!(value == 1 || value == 3, true);
	/// ```
	pub fn random_element<R>(&self, rng: &mut R) -> Result<Option<T>, DomainError>
	where
		R: Rng + ?Sized,
	{
		if self.is_empty() {
			return Ok(None);
		}

		let mut weights: Vec<f64> = self.intervals.iter().map(T::span_weight).collect();
		let heaviest = weights.iter().copied().fold(0.0, f64::max);
		let chooser = if heaviest > 0.0 && heaviest.is_finite() {
			weights.iter_mut().for_each(|weight| *weight /= heaviest);
			WeightedIndex::new(&weights).ok()
		} else {
			None
		};
		if chooser.is_none() {
			trace!("falling back to uniform interval choice for weights {weights:?}");
		}

		for _ in 0..MAX_SAMPLING_ATTEMPTS {
			let index = match &chooser {
				Some(chooser) => chooser.sample(rng),
				None => rng.gen_range(0..self.intervals.len()),
			};

			if let Some(candidate) = T::random_element_in(&self.intervals[index], rng) {
				if self.contains(&candidate) {
					return Ok(Some(candidate));
				}
			}
		}

		warn!(
			"random_element() gave up after {MAX_SAMPLING_ATTEMPTS} attempts over {} intervals",
			self.intervals.len()
		);
		Err(DomainError::SamplingExhausted {
			attempts: MAX_SAMPLING_ATTEMPTS,
		})
	}

	/// Draws `count` independent random points of the domain, see
	/// [`Domain::random_element()`].
	///
	/// Returns `Ok(None)` if the domain is empty.
	pub fn random_sample<R>(&self, rng: &mut R, count: usize) -> Result<Option<Vec<T>>, DomainError>
	where
		R: Rng + ?Sized,
	{
		if self.is_empty() {
			return Ok(None);
		}

		let mut sample = Vec::with_capacity(count);
		for _ in 0..count {
			if let Some(value) = self.random_element(rng)? {
				sample.push(value);
			}
		}

		Ok(Some(sample))
	}
}
