use super::types::{Agent, Buddy, MapInfo, PlayerCard, PlayerTitle, Skin, Spray};
use serde::{Deserialize, Serialize};

fn same_id(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Full copy of the cosmetic and map catalog, tagged with the client version
/// and display language it was fetched for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub riot_client_version: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub skins: Vec<Skin>,
    #[serde(default)]
    pub buddies: Vec<Buddy>,
    #[serde(default)]
    pub sprays: Vec<Spray>,
    #[serde(default)]
    pub cards: Vec<PlayerCard>,
    #[serde(default)]
    pub titles: Vec<PlayerTitle>,
    #[serde(default)]
    pub maps: Vec<MapInfo>,
}

impl CatalogSnapshot {
    /// A snapshot is reusable only for the same version and language, and
    /// only if the map list is populated (an empty list means an earlier
    /// refresh never completed).
    pub fn is_valid_for(&self, version: &str, language: &str) -> bool {
        self.riot_client_version.as_deref() == Some(version)
            && self.language.as_deref() == Some(language)
            && !self.maps.is_empty()
    }

    pub fn skin(&self, uuid: &str) -> Option<&Skin> {
        self.skins.iter().find(|s| same_id(&s.uuid, uuid))
    }

    /// Find the skin owning a given skin level
    pub fn skin_for_level(&self, level_uuid: &str) -> Option<&Skin> {
        self.skins
            .iter()
            .find(|s| s.levels.iter().any(|l| same_id(&l.uuid, level_uuid)))
    }

    pub fn buddy(&self, uuid: &str) -> Option<&Buddy> {
        self.buddies.iter().find(|b| same_id(&b.uuid, uuid))
    }

    /// Find the buddy owning a given buddy level
    pub fn buddy_for_level(&self, level_uuid: &str) -> Option<&Buddy> {
        self.buddies
            .iter()
            .find(|b| b.levels.iter().any(|l| same_id(&l.uuid, level_uuid)))
    }

    pub fn spray(&self, uuid: &str) -> Option<&Spray> {
        self.sprays.iter().find(|s| same_id(&s.uuid, uuid))
    }

    pub fn card(&self, uuid: &str) -> Option<&PlayerCard> {
        self.cards.iter().find(|c| same_id(&c.uuid, uuid))
    }

    pub fn title(&self, uuid: &str) -> Option<&PlayerTitle> {
        self.titles.iter().find(|t| same_id(&t.uuid, uuid))
    }

    /// Match-service map ids are game paths, so maps are looked up by `mapUrl`
    pub fn map_by_url(&self, map_url: &str) -> Option<&MapInfo> {
        self.maps
            .iter()
            .find(|m| m.map_url.as_deref().is_some_and(|url| url == map_url))
    }
}

/// Playable agents, persisted separately from the cosmetic catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCatalog {
    #[serde(default)]
    pub riot_client_version: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub agents: Vec<Agent>,
}

impl AgentCatalog {
    pub fn is_valid_for(&self, version: &str, language: &str) -> bool {
        self.riot_client_version.as_deref() == Some(version)
            && self.language.as_deref() == Some(language)
    }

    pub fn agent(&self, uuid: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| same_id(&a.uuid, uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{BuddyLevel, SkinLevel};

    fn map(uuid: &str, name: &str, url: &str) -> MapInfo {
        MapInfo {
            uuid: uuid.to_string(),
            display_name: Some(name.to_string()),
            map_url: Some(url.to_string()),
            display_icon: None,
            list_view_icon: None,
            splash: None,
            coordinates: None,
        }
    }

    fn stamped(version: &str, language: &str) -> CatalogSnapshot {
        CatalogSnapshot {
            riot_client_version: Some(version.to_string()),
            language: Some(language.to_string()),
            maps: vec![map("m1", "Ascent", "/Game/Maps/Ascent/Ascent")],
            ..Default::default()
        }
    }

    #[test]
    fn valid_when_version_language_and_maps_match() {
        let snapshot = stamped("v1", "en-US");
        assert!(snapshot.is_valid_for("v1", "en-US"));
        assert!(!snapshot.is_valid_for("v2", "en-US"));
        assert!(!snapshot.is_valid_for("v1", "de-DE"));
    }

    #[test]
    fn empty_maps_invalidate_snapshot() {
        let mut snapshot = stamped("v1", "en-US");
        snapshot.maps.clear();
        assert!(!snapshot.is_valid_for("v1", "en-US"));
    }

    #[test]
    fn default_snapshot_is_never_valid() {
        assert!(!CatalogSnapshot::default().is_valid_for("", ""));
    }

    #[test]
    fn agent_catalog_ignores_empty_list() {
        let agents = AgentCatalog {
            riot_client_version: Some("v1".to_string()),
            language: Some("en-US".to_string()),
            agents: vec![],
        };
        assert!(agents.is_valid_for("v1", "en-US"));
        assert!(!agents.is_valid_for("v1", "fr-FR"));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let snapshot = CatalogSnapshot {
            skins: vec![Skin {
                uuid: "abc-def".to_string(),
                display_name: Some("Reaver Vandal".to_string()),
                display_icon: None,
                theme_uuid: None,
                content_tier_uuid: None,
                wallpaper: None,
                chromas: vec![],
                levels: vec![SkinLevel {
                    uuid: "lvl-abc".to_string(),
                    display_name: None,
                    display_icon: None,
                    level_item: None,
                    streamed_video: None,
                }],
            }],
            buddies: vec![Buddy {
                uuid: "buddy-1".to_string(),
                display_name: Some("Lucky Dice".to_string()),
                display_icon: None,
                levels: vec![BuddyLevel {
                    uuid: "buddy-lvl-1".to_string(),
                    display_name: None,
                    display_icon: None,
                    charm_level: Some(1),
                }],
            }],
            ..Default::default()
        };

        assert!(snapshot.skin("ABC-DEF").is_some());
        assert_eq!(
            snapshot.skin_for_level("LVL-ABC").unwrap().uuid,
            "abc-def"
        );
        assert!(snapshot.buddy("BUDDY-1").is_some());
        assert_eq!(
            snapshot.buddy_for_level("buddy-lvl-1").unwrap().uuid,
            "buddy-1"
        );
        assert!(snapshot.skin("missing").is_none());
        assert!(snapshot.spray("missing").is_none());
        assert!(snapshot.card("missing").is_none());
        assert!(snapshot.title("missing").is_none());
    }

    #[test]
    fn map_lookup_by_game_path() {
        let snapshot = stamped("v1", "en-US");
        assert_eq!(
            snapshot
                .map_by_url("/Game/Maps/Ascent/Ascent")
                .unwrap()
                .display_name
                .as_deref(),
            Some("Ascent")
        );
        assert!(snapshot.map_by_url("/Game/Maps/Bonsai/Bonsai").is_none());
    }
}
