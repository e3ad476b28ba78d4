//! Validated Bernoulli success probabilities.

use rand::{Rng, distributions::Standard};

use crate::{Result, error::GraphError};

/// A probability known to lie within `[0, 1]`.
///
/// # Examples
/// ```
/// use blockgraph_core::Probability;
///
/// let p = Probability::new("p", 0.25).expect("0.25 is a valid probability");
/// assert_eq!(p.get(), 0.25);
/// assert!(Probability::new("p", 1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Validates `value`, naming it `parameter` in the error.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `value` is NaN or
    /// outside `[0, 1]`.
    pub fn new(parameter: &'static str, value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GraphError::InvalidProbability { parameter, value })
        }
    }

    /// Returns the wrapped value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> f64 { self.0 }

    /// Runs one Bernoulli trial, consuming exactly one uniform draw in
    /// `[0, 1)` from `rng`.
    pub(crate) fn trial<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        let draw: f64 = rng.sample(Standard);
        draw < self.0
    }
}
