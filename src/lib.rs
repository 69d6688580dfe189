//! This crate provides [`Domain`], a subset of an ordered type stored as a
//! union of closed intervals minus a set of individually excluded points.
//!
//! ## Example
//!
//! ```rust
//! use holed::interval::ii;
//! use holed::Domain;
//!
//! let mut domain = Domain::from_interval(ii(1, 10));
//!
//! domain.remove_value(4);
//! domain.append_interval(ii(20, 30));
//!
//! assert_eq!(domain.contains(&3), true);
//! assert_eq!(domain.contains(&4), false);
//! assert_eq!(domain.contains(&15), false);
//! assert_eq!(domain.contains(&25), true);
//!
//! let other = Domain::from_interval(ii(5, 25));
//!
//! let intersection = &domain & &other;
//! assert_eq!(intersection.intervals(), [ii(5, 10), ii(20, 25)]);
//!
//! let difference = &domain - &other;
//! assert_eq!(difference.contains(&2), true);
//! assert_eq!(difference.contains(&7), false);
//! ```
//!
//! ## Example using capabilities of the point type
//!
//! ```rust
//! use holed::interval::ii;
//! use holed::Domain;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut domain = Domain::from_interval(ii(0.0, 100.0));
//! domain.remove_value(50.0);
//!
//! // floating-point domains can be split, sampled and transformed
//! let pieces = domain.split(1.0, 4);
//! assert_eq!(pieces.len(), 4);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let value = domain.random_element(&mut rng).unwrap().unwrap();
//! assert_eq!(domain.contains(&value), true);
//!
//! let scaled = domain.times(2.0).unwrap();
//! assert_eq!(scaled.contains(&100.0), false);
//! assert_eq!(scaled.upper_bound(), Some(&200.0));
//!
//! // transforms that produce NaN or infinities report the pre-image
//! assert_eq!(domain.divided_by(0.0).unwrap_err().value, 0.0);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Closed Intervals and Holes
//!
//! Every interval of a [`Domain`] is closed, that is it contains both of
//! its end-points. An open end is expressed by excluding the end-point,
//! so removing `3..=6` from `0..=10` leaves `0..=3` and `6..=10` with `3`
//! and `6` excluded. This works for [`Continuous`] types like `f64` where
//! there is no "next" value below `3.0`.
//!
//! Excluded points always take priority: a point that is excluded is
//! never contained, whichever interval it lies in.
//!
//! ### Canonical Form
//!
//! The intervals of a [`Domain`] are kept sorted and pairwise disjoint:
//! intervals which share at least one point are merged. Intervals which
//! are merely adjacent, such as `1..=1` and `2..=2`, are not merged since
//! that is only meaningful for [`Discrete`] types.
//!
//! ### Capabilities
//!
//! The point type only needs [`PartialOrd`] and [`Clone`] for the core
//! operations. Further operations become available when the point type
//! implements the matching trait:
//!
//! | trait             | operations                                      |
//! | ----------------- | ----------------------------------------------- |
//! | [`DiscreteFinite`] | iteration, compaction, discrete single values  |
//! | [`Splittable`]    | amplitude, splitting                            |
//! | [`Randomizable`]  | random elements and samples                     |
//! | [`Representable`] | transforms                                      |
//! | [`Numeric`]       | addition, subtraction and multiplication        |
//! | [`FloatingPoint`] | division                                        |
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`discrete`]: https://en.wikipedia.org/wiki/Discrete_mathematics
//! [`continuous`]: https://en.wikipedia.org/wiki/List_of_continuity-related_mathematical_topics

#![allow(clippy::tabs_in_doc_comments)]

pub mod interval;
pub(crate) mod utils;

pub mod discrete_finite;
pub mod error;
pub mod exclusions;

pub mod domain;

pub mod arithmetic;
pub mod random;
pub mod split;

pub use crate::arithmetic::{FloatingPoint, Numeric, Representable};
pub use crate::discrete_finite::DiscreteFinite;
pub use crate::domain::{Domain, Iter, PointType};
pub use crate::error::{DomainError, NonFiniteError};
pub use crate::exclusions::ExclusionSet;
pub use crate::interval::Interval;
pub use crate::random::{Randomizable, MAX_SAMPLING_ATTEMPTS};
pub use crate::split::Splittable;
