//! Error types returned by fallible [`Domain`](crate::Domain) operations.

use thiserror::Error;

/// Errors from operations over a whole [`Domain`](crate::Domain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
	/// Random sampling rejected every candidate it drew.
	#[error("random sampling gave up after {attempts} rejected draws")]
	SamplingExhausted {
		/// How many draws were attempted.
		attempts: usize,
	},
}

/// The error returned when a transform produces a value that is not
/// representable, such as `NaN` or an infinity for floating-point points, or
/// when integer arithmetic overflows.
///
/// Contains the pre-image whose image was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("transform produced a non-representable value from {value:?}")]
pub struct NonFiniteError<T> {
	/// The value which was mapped to a non-representable result.
	pub value: T,
}
