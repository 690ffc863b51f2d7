//! Static tables mapping in-game identifiers to display names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// In-game identifier tables, loaded once at startup and never modified.
///
/// Keys are the raw identifiers stored on entities (for example `$economy_agri;`),
/// values are the names shown to users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IngameIdsDto {
    #[serde(default)]
    pub state: BTreeMap<String, String>,
    #[serde(default)]
    pub superpower: BTreeMap<String, String>,
    #[serde(default)]
    pub government: BTreeMap<String, String>,
    #[serde(default)]
    pub economy: BTreeMap<String, String>,
    #[serde(default)]
    pub security: BTreeMap<String, String>,
    #[serde(default)]
    pub station: BTreeMap<String, String>,
}

impl IngameIdsDto {
    /// Returns the display name for `id`, or `id` itself when the table has no entry.
    pub fn display<'a>(table: &'a BTreeMap<String, String>, id: &'a str) -> &'a str {
        table.get(id).map(String::as_str).unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect unknown identifiers to fall back to the raw identifier
    #[test]
    fn display_falls_back_to_raw_id() {
        let mut ids = IngameIdsDto::default();
        ids.economy
            .insert("$economy_agri;".to_string(), "Agriculture".to_string());

        assert_eq!(IngameIdsDto::display(&ids.economy, "$economy_agri;"), "Agriculture");
        assert_eq!(IngameIdsDto::display(&ids.economy, "$economy_none;"), "$economy_none;");
    }
}
