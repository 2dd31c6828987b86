use rand::Rng;

use crate::Trit;

const MAX_WEIGHT: u32 = 100;

impl Trit {
    /// Draws a random value from the thread-local generator.
    ///
    /// With no weights each state is equally likely. Otherwise the weights
    /// are summed and clamped to `0..=100`, giving the percentage chance of
    /// Unknown; the remainder splits evenly between True and False.
    #[must_use]
    pub fn random(weights: &[u8]) -> Trit {
        Trit::random_with(&mut rand::thread_rng(), weights)
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, weights: &[u8]) -> Trit {
        if weights.is_empty() {
            return Trit::new(rng.gen_range(-1..=1));
        }
        let weight = weights
            .iter()
            .fold(0u32, |acc, &w| acc.saturating_add(u32::from(w)))
            .min(MAX_WEIGHT);
        if rng.gen_range(0..MAX_WEIGHT) < weight {
            Trit::UNKNOWN
        } else if rng.gen_bool(0.5) {
            Trit::TRUE
        } else {
            Trit::FALSE
        }
    }
}
