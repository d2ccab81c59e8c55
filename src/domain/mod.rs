//! Domain layer: configuration trees and profile records
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod path;
pub mod profile;
pub mod render;
pub mod section;
pub mod value;

pub use error::{DomainError, DomainResult};
pub use profile::{parse_uuid, undashed, Profile};
pub use render::SectionConvert;
pub use section::ConfigTree;
pub use value::{PlainMap, PlainValue, Scalar, Value};
