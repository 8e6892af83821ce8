#![deny(missing_docs)]
#![doc = "Core error, randomness and weight types shared by the multi-scheduling crates."]

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, MschedError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{EntityKind, WeightComponent, WeightVector};
