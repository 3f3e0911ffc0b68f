//! Personality attribute vectors for character compatibility scoring.
//!
//! Models an entity's personality as a bounded `f64` vector over a closed,
//! application-defined set of attribute labels. Writes clamp to a
//! configurable symmetric bound; pairwise similarity combines cosine
//! alignment with an intensity agreement term over infinity norms.
//!
//! Zero I/O: pure math, with no opinions about transport or persistence.

pub mod attribute;
pub mod constants;
pub mod personality;

pub use attribute::{Attribute, IndexingError, validate_indexing};
pub use constants::{DEFAULT_ATTR_BOUND, EPSILON};
pub use personality::Personality;
