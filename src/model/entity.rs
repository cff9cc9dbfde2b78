//! People records as delivered by the paginated API.

use serde::Deserialize;

/// Sentinel the API uses for a numeric field it has no value for.
pub const UNKNOWN: &str = "unknown";

/// A single person record.
///
/// `height` and `mass` are numeric-as-text: they may hold [`UNKNOWN`] or use a
/// comma as decimal separator (e.g. `"1,358"`). They are kept verbatim so the
/// table shows exactly what the API returned; interpretation happens in
/// [`crate::model::power::compute_power`].
///
/// `name` is the identity key within a session. Uniqueness is assumed, not
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Entity {
    /// Display name, matched by the name filter.
    pub name: String,
    /// Height in centimetres, as text.
    pub height: String,
    /// Mass in kilograms, as text.
    pub mass: String,
}

impl Entity {
    /// Build an entity from its three text fields.
    pub fn new(name: impl Into<String>, height: impl Into<String>, mass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: height.into(),
            mass: mass.into(),
        }
    }

    /// True if either numeric field is the [`UNKNOWN`] sentinel.
    pub fn has_missing_data(&self) -> bool {
        self.height == UNKNOWN || self.mass == UNKNOWN
    }
}

/// One page of the people resource.
///
/// `next` is an absolute URL to the following page; `None` (JSON `null` or an
/// absent key) terminates pagination.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeoplePage {
    /// Total number of records across all pages, as reported by the server.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page, in server order.
    pub results: Vec<Entity>,
}
