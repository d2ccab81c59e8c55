//! Player profile records returned by the lookup collaborator

use serde_json::Value as Json;
use uuid::Uuid;

/// Player profile: identifier, name and optional opaque properties (skin data).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub properties: Option<Vec<Json>>,
}

impl Profile {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: None,
        }
    }

    /// Decode a profile object.
    ///
    /// Requires string `name` and `id` fields with a parsable identifier.
    /// `properties` is kept only when it is an array.
    pub fn from_json(json: &Json) -> Option<Self> {
        let object = json.as_object()?;
        let name = object.get("name")?.as_str()?;
        let id = parse_uuid(object.get("id")?.as_str()?)?;
        let properties = object
            .get("properties")
            .and_then(Json::as_array)
            .cloned();
        Some(Self {
            id,
            name: name.to_string(),
            properties,
        })
    }
}

/// Parse a UUID in dashed (`8-4-4-4-12`) or undashed (32 hex chars) form.
///
/// Undashed text is normalized to the dashed form before parsing.
pub fn parse_uuid(text: &str) -> Option<Uuid> {
    if text.len() == 32 && text.is_ascii() {
        let dashed = format!(
            "{}-{}-{}-{}-{}",
            &text[0..8],
            &text[8..12],
            &text[12..16],
            &text[16..20],
            &text[20..32]
        );
        return Uuid::parse_str(&dashed).ok();
    }
    Uuid::parse_str(text).ok()
}

/// 32 lowercase hex chars, as used in session-server URLs.
pub fn undashed(id: &Uuid) -> String {
    id.simple().to_string()
}
