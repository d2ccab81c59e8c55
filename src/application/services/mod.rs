//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, JsonTransport)
//! but are themselves concrete structs, not traits.

mod document;
mod lookup;

pub use document::DocumentService;
pub use lookup::{MojangLookup, ProfileLookup, PROFILES_URL, SESSION_PROFILE_URL};
