//! Reproducible random side-length triples.
//!
//! Purpose
//! - Feed benches, the CLI `sample` command, and randomized tests with
//!   candidate sides that can be replayed from `(seed, index)`.
//!
//! Model
//! - Each side is drawn uniformly from `[len_min, len_max)`.
//! - With `valid_only`, triples failing the geometry check are redrawn from
//!   the same RNG stream, up to `max_attempts` draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::validate::check_geometry;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SideCfg {
    pub len_min: f64,
    pub len_max: f64,
    /// Redraw until the triple forms a valid triangle.
    pub valid_only: bool,
    pub max_attempts: u32,
}

impl Default for SideCfg {
    fn default() -> Self {
        Self {
            len_min: 0.0,
            len_max: 2.0,
            valid_only: false,
            max_attempts: 64,
        }
    }
}

impl SideCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !(self.len_min.is_finite() && self.len_max.is_finite()) {
            return Err(SampleError::invalid("length bounds must be finite"));
        }
        if self.len_min >= self.len_max {
            return Err(SampleError::invalid("len_min < len_max required"));
        }
        if !(self.len_max - self.len_min).is_finite() {
            return Err(SampleError::invalid("length range must be finite"));
        }
        if self.max_attempts == 0 {
            return Err(SampleError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    /// `valid_only` draw gave up after this many attempts.
    Exhausted { attempts: u32 },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::Exhausted { attempts } => {
                write!(f, "no valid triangle after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw one triple of side lengths.
pub fn draw_sides(cfg: SideCfg, tok: ReplayToken) -> Result<[f64; 3], SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    for _ in 0..cfg.max_attempts {
        let sides: [f64; 3] = std::array::from_fn(|_| rng.gen_range(cfg.len_min..cfg.len_max));
        if !cfg.valid_only || check_geometry(&sides).is_ok() {
            return Ok(sides);
        }
    }
    Err(SampleError::Exhausted {
        attempts: cfg.max_attempts,
    })
}
