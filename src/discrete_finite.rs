//! A module containing the [`DiscreteFinite`] trait and trait impls for the
//! primitive integer datatypes and `bool`.

/// A trait for point types which are both discrete and finite.
///
/// Implementing it is what lets a [`Domain`](crate::Domain) enumerate its
/// points, absorb its holes with [`Domain::compact()`](crate::Domain::compact)
/// and recognise single values hidden behind holes.
pub trait DiscreteFinite {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! integer {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl DiscreteFinite for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;

			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
		}

		integer!($($t)*);
	};
}

integer!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);

impl DiscreteFinite for bool {
	const MIN: Self = false;
	const MAX: Self = true;

	fn up(self) -> Option<Self> {
		(!self).then_some(true)
	}
	fn down(self) -> Option<Self> {
		self.then_some(false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integer_steps() {
		assert_eq!(4_i8.up(), Some(5));
		assert_eq!(4_i8.down(), Some(3));
		assert_eq!(i8::MAX.up(), None);
		assert_eq!(u8::MIN.down(), None);
	}

	#[test]
	fn bool_steps() {
		assert_eq!(false.up(), Some(true));
		assert_eq!(true.up(), None);
		assert_eq!(true.down(), Some(false));
		assert_eq!(false.down(), None);
	}
}
