//! Player profile lookup
//!
//! Decodes profile responses of the Mojang API. Transport failures and
//! malformed responses are soft: they yield `None`, which callers must read as
//! "unknown", not as "no such player".

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value as Json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{undashed, Profile};
use crate::infrastructure::traits::JsonTransport;

/// Batch name-to-profile endpoint.
pub const PROFILES_URL: &str = "https://api.mojang.com/profiles/minecraft";

/// Profile-with-properties endpoint, followed by the undashed id.
pub const SESSION_PROFILE_URL: &str = "https://sessionserver.mojang.com/session/minecraft/profile/";

/// Resolve player names and ids to profiles.
pub trait ProfileLookup {
    /// First profile matching `name`.
    fn lookup_by_name(&self, name: &str) -> Option<Profile>;

    /// Profiles for all resolvable `names`.
    ///
    /// `None` when the whole request failed; names that do not resolve are
    /// simply missing from the list.
    fn lookup_by_names(&self, names: &BTreeSet<String>) -> Option<Vec<Profile>>;

    /// Profile including its properties (skin data).
    fn lookup_by_id(&self, id: Uuid) -> Option<Profile>;
}

/// Lookup against the public Mojang endpoints.
pub struct MojangLookup {
    transport: Arc<dyn JsonTransport>,
}

impl MojangLookup {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    fn post_names<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<Vec<Profile>> {
        let request = Json::Array(names.into_iter().map(Json::from).collect());
        let response = self.transport.post_json(PROFILES_URL, &request)?;
        let Json::Array(entries) = response else {
            warn!("profile lookup: expected an array, got {}", response);
            return None;
        };

        let mut profiles = Vec::with_capacity(entries.len());
        for entry in &entries {
            if !entry.is_object() {
                warn!("profile lookup: non-object entry {}", entry);
                return None;
            }
            match Profile::from_json(entry) {
                Some(profile) => profiles.push(profile),
                None => debug!("profile lookup: skipping undecodable entry {}", entry),
            }
        }
        Some(profiles)
    }
}

impl ProfileLookup for MojangLookup {
    fn lookup_by_name(&self, name: &str) -> Option<Profile> {
        self.post_names([name])?.into_iter().next()
    }

    fn lookup_by_names(&self, names: &BTreeSet<String>) -> Option<Vec<Profile>> {
        self.post_names(names.iter().map(String::as_str))
    }

    fn lookup_by_id(&self, id: Uuid) -> Option<Profile> {
        let url = format!("{SESSION_PROFILE_URL}{}", undashed(&id));
        let response = self.transport.get_json(&url)?;
        if !response.is_object() {
            warn!("profile lookup: expected an object for {}", id);
            return None;
        }
        Profile::from_json(&response)
    }
}
