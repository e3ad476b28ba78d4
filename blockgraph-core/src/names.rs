//! Display-name sources for generated nodes.
//!
//! Names carry no graph semantics. They are drawn from a stream kept apart
//! from the class/edge random source so naming never shifts the draw order
//! the generator depends on for reproducibility.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Ann", "Anna", "Ben", "Carla", "Chen", "Dana", "David", "Elena", "Emil",
    "Eva", "Farah", "Felix", "Grace", "Hana", "Hugo", "Ines", "Ivan", "Jana", "Jonas", "Kai",
    "Karin", "Lena", "Liam", "Lucia", "Marek", "Maya", "Nina", "Noah", "Olga", "Omar", "Petra",
    "Quinn", "Rosa", "Sam", "Sofia", "Tomas", "Uma", "Vera", "Victor", "Wen", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Berg", "Castro", "Dvorak", "Evans", "Fischer", "Garcia", "Hart", "Ito",
    "Jensen", "Kim", "Kovac", "Lee", "Lopez", "Meyer", "Moreau", "Novak", "Okafor", "Park",
    "Quinn", "Rossi", "Sato", "Silva", "Smith", "Tanaka", "Ueda", "Varga", "Weber", "Xu",
    "Young", "Zeman",
];

/// Produces display names for generated nodes.
pub trait NameSource {
    /// Returns the next name. Repeats are allowed.
    fn next_name(&mut self) -> String;
}

impl<F> NameSource for F
where
    F: FnMut() -> String,
{
    fn next_name(&mut self) -> String {
        self()
    }
}

/// Random `"First Last"` names drawn from fixed tables.
///
/// # Examples
/// ```
/// use blockgraph_core::{NameSource, RandomNames};
///
/// let mut left = RandomNames::seeded(9);
/// let mut right = RandomNames::seeded(9);
/// assert_eq!(left.next_name(), right.next_name());
/// ```
#[derive(Debug, Clone)]
pub struct RandomNames<R = SmallRng> {
    rng: R,
}

impl RandomNames<SmallRng> {
    /// Creates a reproducible name stream from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates a name stream seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> RandomNames<R> {
    /// Wraps an arbitrary random source.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NameSource for RandomNames<R> {
    fn next_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Anon");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Ymous");
        format!("{first} {last}")
    }
}
