//! Deterministic random number generation for ray tracing.
//!
//! Implements the PCG-XSH-RR 64/32 generator with exact integer semantics
//! so renders reproduce bit for bit across runs and platforms. Includes
//! rejection samplers for the unit sphere and unit disk.

use glam::Vec3A;

/// Rejection sampling rounds before falling back to scaling the candidate.
const MAX_REJECTION_ROUNDS: u32 = 128;

/// PCG-XSH-RR 64/32 pseudo-random generator.
///
/// All randomness in the renderer flows through a single `Pcg32` value
/// passed down explicitly, which makes the draw order (and therefore the
/// output image) a pure function of the seed.
#[derive(Debug, Clone)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64,
            inc: 0,
        }
    }

    /// Advance the generator and return the next 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate
            .wrapping_mul(6364136223846793005)
            .wrapping_add(self.inc | 1);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Return the next value mapped to [0.0, 1.0].
    ///
    /// The denominator rounds to 2^32 in f32 and so does the largest
    /// numerator, so exactly 1.0 is a possible (if rare) result.
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / (u32::MAX as f32 + 1.0)
    }
}

/// Generate a random point strictly inside the unit sphere.
///
/// Draws three components per round and rejects candidates outside the
/// sphere. The loop is capped; if every round rejects (only possible with
/// a degenerate generator) the last candidate is scaled into range.
pub fn random_in_unit_sphere(rng: &mut Pcg32) -> Vec3A {
    let mut p = Vec3A::ZERO;
    for _ in 0..MAX_REJECTION_ROUNDS {
        p = 2.0 * Vec3A::new(rng.next_f32(), rng.next_f32(), rng.next_f32()) - Vec3A::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    p * (0.999999 / p.length())
}

/// Generate a random point strictly inside the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut Pcg32) -> Vec3A {
    let mut p = Vec3A::ZERO;
    for _ in 0..MAX_REJECTION_ROUNDS {
        p = 2.0 * Vec3A::new(rng.next_f32(), rng.next_f32(), 0.0) - Vec3A::new(1.0, 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    p * (0.999999 / p.length())
}
