//! Synthetic Brazilian voter dataset generator.
//!
//! Produces checksum-consistent placeholder identifiers (CPF, voter
//! registration title) and fully populated voter records, serialized to
//! a CSV dataset with a JSON run report.

pub mod engine;
pub mod errors;
pub mod ids;
pub mod model;
pub mod output;
pub mod provider;
pub mod record;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use provider::{FakeProvider, PtBrProvider};
pub use record::{VoterRecord, generate_voter};
