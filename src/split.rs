//! A module containing the [`Splittable`] trait, its impls for common point
//! types and the [`Domain`] operations built on it.

use core::cmp::Ordering;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::random::ALPHABET;
use crate::{Domain, Interval, PointType};

/// A trait for point types with a notion of distance.
///
/// [`advanced_by()`](Splittable::advanced_by) is expected to be a rough
/// inverse of [`distance_to()`](Splittable::distance_to), it does not have to
/// be an exact one.
pub trait Splittable {
	/// The distance from `self` to `other`, negative when `other` comes
	/// first.
	fn distance_to(&self, other: &Self) -> f64;
	/// A value roughly `distance` away from `self`.
	fn advanced_by(&self, distance: f64) -> Self;
}

macro_rules! number {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Splittable for $ident {
			fn distance_to(&self, other: &Self) -> f64 {
				*other as f64 - *self as f64
			}
			fn advanced_by(&self, distance: f64) -> Self {
				(*self as f64 + distance) as $ident
			}
		}

		number!($($t)*);
	};
}

number!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64,);

impl Splittable for bool {
	fn distance_to(&self, other: &Self) -> f64 {
		if self == other {
			0.0
		} else {
			1.0
		}
	}
	fn advanced_by(&self, distance: f64) -> Self {
		if (distance as i64) % 2 == 0 {
			*self
		} else {
			!*self
		}
	}
}

/// Strings are measured in Levenshtein edits over their characters.
///
/// Advancing is random: for `n` steps up to the string's length `n`
/// characters are substituted, longer steps also insert characters and
/// negative steps delete them.
impl Splittable for String {
	fn distance_to(&self, other: &Self) -> f64 {
		levenshtein(self, other) as f64
	}

	fn advanced_by(&self, distance: f64) -> Self {
		let mut rng = rand::thread_rng();
		let steps = distance as i64;
		let mut chars: Vec<char> = self.chars().collect();

		if steps < 0 {
			for _ in 0..steps.unsigned_abs() {
				if chars.is_empty() {
					break;
				}
				let index = rng.gen_range(0..chars.len());
				chars.remove(index);
			}
			return chars.into_iter().collect();
		}

		let steps = steps as usize;
		let mut pool: Vec<char> = ALPHABET
			.iter()
			.map(|byte| char::from(*byte))
			.filter(|letter| !chars.contains(letter))
			.collect();
		if pool.is_empty() {
			pool = ALPHABET.iter().map(|byte| char::from(*byte)).collect();
		}

		let substitutions = steps.min(chars.len());
		let mut indices: Vec<usize> = (0..chars.len()).collect();
		indices.shuffle(&mut rng);
		for index in indices.into_iter().take(substitutions) {
			if let Some(replacement) = pool.choose(&mut rng) {
				chars[index] = *replacement;
			}
		}

		for _ in substitutions..steps {
			if let Some(addition) = pool.choose(&mut rng) {
				let index = rng.gen_range(0..=chars.len());
				chars.insert(index, *addition);
			}
		}

		chars.into_iter().collect()
	}
}

/// The number of single-character edits turning `source` into `target`.
pub(crate) fn levenshtein(source: &str, target: &str) -> usize {
	let target: Vec<char> = target.chars().collect();
	let mut previous: Vec<usize> = (0..=target.len()).collect();
	let mut current = vec![0; target.len() + 1];

	for (i, source_char) in source.chars().enumerate() {
		current[0] = i + 1;
		for (j, target_char) in target.iter().enumerate() {
			current[j + 1] = if source_char == *target_char {
				previous[j]
			} else {
				1 + previous[j].min(previous[j + 1]).min(current[j])
			};
		}
		core::mem::swap(&mut previous, &mut current);
	}

	previous[target.len()]
}

impl<T> Domain<T>
where
	T: PointType + Splittable,
{
	/// The distance between the domain's lower and upper bounds, or `0.0`
	/// if it is empty.
	pub fn amplitude(&self) -> f64 {
		match (self.lower_bound(), self.upper_bound()) {
			(Some(lower), Some(upper)) => lower.distance_to(upper),
			_ => 0.0,
		}
	}

	/// Partitions the domain into roughly `count` consecutive pieces.
	///
	/// Each piece spans `max(minimal_step, amplitude / count)` except the
	/// last one, which is clamped to the upper bound, and is intersected with
	/// `self` so holes and gaps stay where they were. Consecutive pieces
	/// share their boundary point. Empty pieces are skipped.
	///
	/// The domain is returned whole when `count` is zero, when it is empty
	/// or when its amplitude is not larger than `minimal_step`. A negative
	/// `minimal_step` counts as zero.
	///
	/// # Examples
	/// ```
	/// use holed::interval::ii;
	/// use holed::Domain;
	///
	/// let domain = Domain::from_interval(ii(0, 100));
	///
	/// let pieces = domain.split(1.0, 4);
	///
	/// assert_eq!(pieces.len(), 4);
	/// assert_eq!(pieces[0].intervals(), [ii(0, 25)]);
	/// assert_eq!(pieces[3].intervals(), [ii(75, 100)]);
	/// ```
	pub fn split(&self, minimal_step: f64, count: usize) -> Vec<Domain<T>> {
		let (lower, upper) = match (self.lower_bound(), self.upper_bound()) {
			(Some(lower), Some(upper)) if count >= 1 => (lower.clone(), upper.clone()),
			_ => return vec![self.clone()],
		};

		let amplitude = lower.distance_to(&upper);
		let minimal_step = minimal_step.max(0.0);
		if amplitude <= minimal_step {
			return vec![self.clone()];
		}

		let step = minimal_step.max(amplitude / count as f64);
		debug!("split(amplitude = {amplitude}, step = {step})");

		let mut pieces = Vec::new();
		let mut cursor = lower;
		while cursor < upper {
			let mut next = cursor.advanced_by(step);
			if next.partial_cmp(&cursor) != Some(Ordering::Greater) || next > upper {
				next = upper.clone();
			}

			let piece = Domain::from_interval(Interval::new_unchecked(cursor, next.clone()))
				.intersection(self);
			if !piece.is_empty() {
				pieces.push(piece);
			}
			cursor = next;
		}

		if pieces.is_empty() {
			pieces.push(self.clone());
		}
		pieces
	}
}
