//! Equivalent-product ("muadil") resolution.
//!
//! Equivalents are found in two tiers:
//!
//! 1. **Cross-reference**: stock codes listed in the product's curated
//!    cross-reference cells, looked up case-insensitively in the same table.
//! 2. **Feature fingerprint**: when the first tier finds nothing, a random
//!    sample of other products with exactly the same feature flags.
//!
//! The random source is passed in by the caller, so tests can use a seeded
//! generator.
//!
//! # Example
//!
//! ```ignore
//! use muadil::matching::{EquivalenceResolver, ResolverConfig};
//!
//! let resolver = EquivalenceResolver::new(ResolverConfig::default());
//! let equivalents = resolver.resolve(product, table, &mut rand::thread_rng());
//! for other in &equivalents.products {
//!     println!("{}", other.headline());
//! }
//! ```

mod config;
mod resolver;

pub use config::{ResolverConfig, DEFAULT_SAMPLE_SIZE};
pub use resolver::{find_equivalents, EquivalenceResolver, EquivalenceSource, Equivalents};
