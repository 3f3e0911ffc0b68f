use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::constants::{DEFAULT_ATTR_BOUND, EPSILON};

/// Bounded attribute vector describing one entity's personality.
///
/// Holds one `f64` slot per label of the attribute set `A`. Every write
/// goes through a clamp to [-bound, +bound]; the bound in effect at write
/// time decides, and later bound changes never re-clamp stored values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Personality<A: Attribute> {
    values: Vec<f64>,
    bound: f64,
    #[serde(skip)]
    _attrs: PhantomData<A>,
}

impl<A: Attribute> Personality<A> {
    /// Blank personality: every attribute 0.0, default clamp bound.
    pub fn new() -> Self {
        Self::with_bound(DEFAULT_ATTR_BOUND)
    }

    /// Blank personality with a custom clamp bound.
    pub fn with_bound(bound: f64) -> Self {
        debug_assert!(bound > 0.0, "clamp bound must be positive: {bound}");
        debug_assert!(crate::attribute::validate_indexing::<A>().is_ok());
        Self {
            values: vec![0.0; A::COUNT],
            bound,
            _attrs: PhantomData,
        }
    }

    /// Personality with initial values, applied through `set` in iteration
    /// order. Later entries for the same attribute override earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (A, f64)>) -> Self {
        Self::from_entries_with_bound(DEFAULT_ATTR_BOUND, entries)
    }

    /// `from_entries` with a custom clamp bound.
    pub fn from_entries_with_bound(
        bound: f64,
        entries: impl IntoIterator<Item = (A, f64)>,
    ) -> Self {
        let mut personality = Self::with_bound(bound);
        for (attr, value) in entries {
            personality.set(attr, value);
        }
        personality
    }

    /// Current clamp bound.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Replace the clamp bound for subsequent `set` calls.
    /// Already-stored values are not re-clamped.
    pub fn set_bound(&mut self, bound: f64) {
        debug_assert!(bound > 0.0, "clamp bound must be positive: {bound}");
        self.bound = bound;
    }

    /// Attribute value at `attr`.
    pub fn get(&self, attr: A) -> f64 {
        self.values[attr.index()]
    }

    /// Store `value` at `attr`, clamped to [-bound, +bound].
    /// Out-of-range input is clamped, never rejected.
    pub fn set(&mut self, attr: A, value: f64) {
        self.values[attr.index()] = value.clamp(-self.bound, self.bound);
    }

    /// Snapshot of every attribute as a label → value map.
    pub fn to_map(&self) -> HashMap<A, f64> {
        A::ALL.iter().map(|&attr| (attr, self.get(attr))).collect()
    }

    /// Dot product over the shared attribute set.
    pub fn dot(&self, other: &Self) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean (L2) norm.
    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Chebyshev (infinity) norm: the largest absolute attribute.
    pub fn inf_norm(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()))
    }

    /// Similarity to another personality, on the scale [-1.0, +1.0].
    ///
    /// Combines cosine similarity (directional alignment) with an intensity
    /// agreement term comparing the two infinity norms. Cosine alone scores
    /// two same-direction vectors 1.0 regardless of magnitude; the intensity
    /// term discounts that by the peak-magnitude gap relative to the clamp
    /// bound. All-zero vectors have no direction; cosine is defined as 0.0
    /// there, so the result is 0.0.
    pub fn similarity(&self, other: &Self) -> f64 {
        let norm_product = self.l2_norm() * other.l2_norm();

        let cosine = if norm_product == 0.0 {
            0.0
        } else {
            self.dot(other) / norm_product
        };

        // Larger of the two bounds keeps the measure symmetric when the
        // operands were configured with different bounds.
        let bound = self.bound.max(other.bound);
        let intensity = 1.0 - (self.inf_norm() - other.inf_norm()).abs() / bound;

        cosine * intensity
    }

    /// Uniform random personality with every attribute drawn from
    /// [-DEFAULT_ATTR_BOUND, +DEFAULT_ATTR_BOUND].
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::random_with_bound(DEFAULT_ATTR_BOUND, rng)
    }

    /// Uniform random personality over a custom clamp bound.
    pub fn random_with_bound(bound: f64, rng: &mut impl Rng) -> Self {
        let mut personality = Self::with_bound(bound);
        for &attr in A::ALL {
            personality.set(attr, rng.random_range(-bound..=bound));
        }
        personality
    }

    /// Random personality near this one: each attribute perturbed uniformly
    /// within ±radius, then clamped to this vector's bound. Useful for
    /// generating similar-but-distinct characters.
    pub fn random_near(&self, radius: f64, rng: &mut impl Rng) -> Self {
        let mut personality = Self::with_bound(self.bound);
        for &attr in A::ALL {
            let delta = rng.random_range(-radius..=radius);
            personality.set(attr, self.get(attr) + delta);
        }
        personality
    }
}

impl<A: Attribute> Default for Personality<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares attribute values within EPSILON. The clamp bound is
/// configuration, not state, and does not participate.
impl<A: Attribute> PartialEq for Personality<A> {
    fn eq(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }
}

/// Read access as `personality[attr]`. Writes go through `set`; a raw
/// `&mut f64` would bypass the clamp.
impl<A: Attribute> Index<A> for Personality<A> {
    type Output = f64;

    fn index(&self, attr: A) -> &f64 {
        &self.values[attr.index()]
    }
}

impl<A: Attribute> fmt::Display for Personality<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Personality(")?;
        for (i, &attr) in A::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", attr.label(), self.get(attr))?;
        }
        write!(f, ")")
    }
}
