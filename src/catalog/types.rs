//! Catalog item types as served by the catalog service
//!
//! Only the fields the lookup helpers use are kept. The service returns `null`
//! for many of them, so everything except `uuid` is optional or defaults to empty.

use serde::{Deserialize, Serialize};

/// Envelope around every catalog response: `{ "status": 200, "data": ... }`
#[derive(Debug, Deserialize)]
pub struct CatalogResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub riot_client_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub theme_uuid: Option<String>,
    #[serde(default)]
    pub content_tier_uuid: Option<String>,
    #[serde(default)]
    pub wallpaper: Option<String>,
    #[serde(default)]
    pub chromas: Vec<SkinChroma>,
    #[serde(default)]
    pub levels: Vec<SkinLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinChroma {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub full_render: Option<String>,
    #[serde(default)]
    pub swatch: Option<String>,
    #[serde(default)]
    pub streamed_video: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinLevel {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    /// e.g. "EEquippableSkinLevelItem::VFX"
    #[serde(default)]
    pub level_item: Option<String>,
    #[serde(default)]
    pub streamed_video: Option<String>,
}

/// Gun buddy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buddy {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub levels: Vec<BuddyLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyLevel {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub charm_level: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spray {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub full_icon: Option<String>,
    #[serde(default)]
    pub full_transparent_icon: Option<String>,
    #[serde(default)]
    pub levels: Vec<SprayLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprayLevel {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub spray_level: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub small_art: Option<String>,
    #[serde(default)]
    pub wide_art: Option<String>,
    #[serde(default)]
    pub large_art: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTitle {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub title_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Game path the match service reports as `mapId`, e.g. "/Game/Maps/Ascent/Ascent"
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub list_view_icon: Option<String>,
    #[serde(default)]
    pub splash: Option<String>,
    #[serde(default)]
    pub coordinates: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub full_portrait: Option<String>,
    #[serde(default)]
    pub is_playable_character: bool,
    #[serde(default)]
    pub role: Option<AgentRole>,
    #[serde(default)]
    pub abilities: Vec<AgentAbility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRole {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAbility {
    /// "Ability1", "Ability2", "Grenade", "Ultimate" or "Passive"
    pub slot: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_icon: Option<String>,
}

/// Weapon metadata, fetched on demand for loadout resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponMetadata {
    pub uuid: String,
    #[serde(default)]
    pub display_name: String,
    /// e.g. "EEquippableCategory::Rifle"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shop_data: Option<WeaponShopData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponShopData {
    #[serde(default)]
    pub category_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_deserializes_with_nulls() {
        let json = r#"{
            "uuid": "skin-1",
            "displayName": "Prime Vandal",
            "displayIcon": null,
            "themeUuid": "theme-1",
            "contentTierUuid": null,
            "wallpaper": null,
            "assetPath": "ShooterGame/Content/...",
            "chromas": [
                { "uuid": "chroma-1", "displayName": "Prime Vandal", "fullRender": "https://x/render.png" }
            ],
            "levels": [
                { "uuid": "level-1", "displayName": "Prime Vandal Level 1", "levelItem": null }
            ]
        }"#;

        let skin: Skin = serde_json::from_str(json).unwrap();
        assert_eq!(skin.display_name.as_deref(), Some("Prime Vandal"));
        assert!(skin.display_icon.is_none());
        assert_eq!(skin.chromas.len(), 1);
        assert_eq!(
            skin.chromas[0].full_render.as_deref(),
            Some("https://x/render.png")
        );
        assert_eq!(skin.levels[0].uuid, "level-1");
    }

    #[test]
    fn agent_deserializes_minimal() {
        let json = r#"{ "uuid": "agent-1", "displayName": "Jett" }"#;

        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.display_name.as_deref(), Some("Jett"));
        assert!(agent.role.is_none());
        assert!(agent.abilities.is_empty());
        assert!(!agent.is_playable_character);
    }

    #[test]
    fn version_envelope_deserializes() {
        let json = r#"{
            "status": 200,
            "data": {
                "manifestId": "ABC",
                "branch": "release-09.00",
                "riotClientVersion": "release-09.00-shipping-28-2512345"
            }
        }"#;

        let response: CatalogResponse<VersionInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data.riot_client_version,
            "release-09.00-shipping-28-2512345"
        );
    }

    #[test]
    fn weapon_metadata_deserializes_shop_data() {
        let json = r#"{
            "uuid": "w-1",
            "displayName": "Vandal",
            "category": "EEquippableCategory::Rifle",
            "shopData": { "cost": 2900, "categoryText": "Rifles" }
        }"#;

        let weapon: WeaponMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            weapon
                .shop_data
                .and_then(|s| s.category_text)
                .as_deref(),
            Some("Rifles")
        );
    }
}
