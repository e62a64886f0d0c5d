//! Equipped loadout: the personalization payload resolved against the catalog

use crate::catalog::types::WeaponMetadata;
use crate::catalog::CatalogSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display order of weapon categories; anything else sorts after these
pub const CATEGORY_ORDER: [&str; 8] = [
    "Sidearm", "SMG", "Shotgun", "Rifle", "Sniper", "Heavy", "Melee", "Other",
];

pub const UNKNOWN_SKIN: &str = "Unknown skin";

/// Equip slot ids of the three spray wheel positions
const SPRAY_SLOTS: [(&str, &str); 3] = [
    ("5863985E-43AC-B05D-CB2D-139E72970014", "Spray 1"),
    ("7CDC908E-4F69-9140-A604-899BD879EED1", "Spray 2"),
    ("0814B2FE-4512-60A4-5288-1FBDCEC6CA48", "Spray 3"),
];

/// `GET /personalization/v2/players/{puuid}/playerloadout`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerLoadout {
    #[serde(rename = "Subject", default)]
    pub subject: String,
    #[serde(rename = "Version", default)]
    pub version: u32,
    #[serde(rename = "Guns", default)]
    pub guns: Vec<LoadoutGun>,
    #[serde(rename = "Sprays", default)]
    pub sprays: Vec<LoadoutSpray>,
    #[serde(rename = "Identity", default)]
    pub identity: Option<LoadoutIdentity>,
    #[serde(rename = "Incognito", default)]
    pub incognito: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadoutGun {
    /// Weapon UUID
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "SkinID", default)]
    pub skin_id: String,
    #[serde(rename = "SkinLevelID", default)]
    pub skin_level_id: String,
    #[serde(rename = "ChromaID", default)]
    pub chroma_id: String,
    #[serde(rename = "CharmInstanceID", default)]
    pub charm_instance_id: Option<String>,
    #[serde(rename = "CharmID", default)]
    pub charm_id: Option<String>,
    #[serde(rename = "CharmLevelID", default)]
    pub charm_level_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadoutSpray {
    #[serde(rename = "EquipSlotID")]
    pub equip_slot_id: String,
    #[serde(rename = "SprayID")]
    pub spray_id: String,
    #[serde(rename = "SprayLevelID", default)]
    pub spray_level_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadoutIdentity {
    #[serde(rename = "PlayerCardID", default)]
    pub player_card_id: String,
    #[serde(rename = "PlayerTitleID", default)]
    pub player_title_id: String,
    #[serde(rename = "AccountLevel", default)]
    pub account_level: u32,
    #[serde(rename = "PreferredLevelBorderID", default)]
    pub preferred_level_border_id: String,
    #[serde(rename = "HideAccountLevel", default)]
    pub hide_account_level: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedWeapon {
    pub weapon_id: String,
    pub weapon_name: String,
    pub category: String,
    pub skin_name: String,
    pub skin_level_name: Option<String>,
    pub chroma_name: Option<String>,
    pub image: Option<String>,
    pub buddy_name: Option<String>,
    pub buddy_icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedSpray {
    pub id: String,
    pub slot: String,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityDetails {
    pub card_art: Option<String>,
    pub card_name: Option<String>,
    pub title_name: Option<String>,
    pub level: u32,
    pub hide_level: bool,
}

/// Category for a weapon: shop category text, else the last `::` segment of
/// the internal category, else "Melee" for knives, else "Other"
pub fn resolve_category(meta: Option<&WeaponMetadata>) -> String {
    let Some(meta) = meta else {
        return "Other".to_string();
    };

    if let Some(text) = meta
        .shop_data
        .as_ref()
        .and_then(|s| s.category_text.as_deref())
        .filter(|t| !t.is_empty())
    {
        return text.to_string();
    }

    if let Some((_, last)) = meta.category.as_deref().and_then(|c| c.rsplit_once("::")) {
        return last.to_string();
    }

    if meta.display_name.to_lowercase().contains("melee") {
        return "Melee".to_string();
    }

    "Other".to_string()
}

/// Resolve every equipped gun against the catalog and weapon metadata
pub fn resolve_weapons(
    guns: &[LoadoutGun],
    catalog: &CatalogSnapshot,
    weapons: &[WeaponMetadata],
) -> Vec<EquippedWeapon> {
    let metadata: HashMap<String, &WeaponMetadata> = weapons
        .iter()
        .map(|w| (w.uuid.to_lowercase(), w))
        .collect();

    guns.iter()
        .map(|gun| {
            let meta = metadata.get(&gun.id.to_lowercase()).copied();
            resolve_weapon(gun, catalog, meta)
        })
        .collect()
}

fn resolve_weapon(
    gun: &LoadoutGun,
    catalog: &CatalogSnapshot,
    meta: Option<&WeaponMetadata>,
) -> EquippedWeapon {
    let skin = catalog
        .skin(&gun.skin_id)
        .or_else(|| catalog.skin_for_level(&gun.skin_level_id));

    let chroma = skin.and_then(|s| {
        s.chromas
            .iter()
            .find(|c| c.uuid.eq_ignore_ascii_case(&gun.chroma_id))
    });
    let level = skin.and_then(|s| {
        s.levels
            .iter()
            .find(|l| l.uuid.eq_ignore_ascii_case(&gun.skin_level_id))
    });

    let charm_level_id = gun.charm_level_id.as_deref().unwrap_or_default();
    let buddy = gun
        .charm_id
        .as_deref()
        .and_then(|id| catalog.buddy(id))
        .or_else(|| catalog.buddy_for_level(charm_level_id));
    let buddy_level = buddy.and_then(|b| {
        b.levels
            .iter()
            .find(|l| l.uuid.eq_ignore_ascii_case(charm_level_id))
            .or_else(|| b.levels.first())
    });

    let weapon_name = meta
        .map(|m| m.display_name.clone())
        .filter(|n| !n.is_empty())
        .or_else(|| skin.and_then(|s| s.display_name.clone()))
        .unwrap_or_else(|| gun.id.clone());

    EquippedWeapon {
        weapon_id: gun.id.clone(),
        weapon_name,
        category: resolve_category(meta),
        skin_name: skin
            .and_then(|s| s.display_name.clone())
            .unwrap_or_else(|| UNKNOWN_SKIN.to_string()),
        skin_level_name: level.and_then(|l| l.display_name.clone()),
        chroma_name: chroma.and_then(|c| c.display_name.clone()),
        image: chroma
            .and_then(|c| c.full_render.clone().or_else(|| c.display_icon.clone()))
            .or_else(|| level.and_then(|l| l.display_icon.clone()))
            .or_else(|| skin.and_then(|s| s.display_icon.clone())),
        buddy_name: buddy_level
            .and_then(|l| l.display_name.clone())
            .or_else(|| buddy.and_then(|b| b.display_name.clone())),
        buddy_icon: buddy_level.and_then(|l| l.display_icon.clone()),
    }
}

fn category_weight(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

/// Stable sort by category order, then weapon name ignoring case
pub fn sort_weapons(weapons: &mut [EquippedWeapon]) {
    weapons.sort_by(|a, b| {
        category_weight(&a.category)
            .cmp(&category_weight(&b.category))
            .then_with(|| a.weapon_name.to_lowercase().cmp(&b.weapon_name.to_lowercase()))
    });
}

/// Group weapons by category: known categories in canonical order, then
/// unknown ones in first-seen order. Empty groups never appear.
pub fn group_by_category(weapons: &[EquippedWeapon]) -> Vec<(String, Vec<&EquippedWeapon>)> {
    let mut groups: Vec<(String, Vec<&EquippedWeapon>)> = Vec::new();
    for weapon in weapons {
        let key = if weapon.category.is_empty() {
            "Other"
        } else {
            weapon.category.as_str()
        };
        match groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, items)) => items.push(weapon),
            None => groups.push((key.to_string(), vec![weapon])),
        }
    }
    // stable, so unknown categories keep first-seen order
    groups.sort_by_key(|(name, _)| category_weight(name));
    groups
}

/// Equipped sprays present in the catalog, in slot order
pub fn resolve_sprays(sprays: &[LoadoutSpray], catalog: &CatalogSnapshot) -> Vec<EquippedSpray> {
    sprays
        .iter()
        .filter_map(|spray| {
            let Some(asset) = catalog.spray(&spray.spray_id) else {
                log::debug!("Spray {} not in catalog, skipping", spray.spray_id);
                return None;
            };
            Some(EquippedSpray {
                id: spray.spray_id.clone(),
                slot: spray.equip_slot_id.clone(),
                name: asset.display_name.clone().unwrap_or_default(),
                icon: asset.display_icon.clone(),
            })
        })
        .collect()
}

pub fn identity_details(identity: &LoadoutIdentity, catalog: &CatalogSnapshot) -> IdentityDetails {
    let card = catalog.card(&identity.player_card_id);
    let title = catalog.title(&identity.player_title_id);

    IdentityDetails {
        card_art: card.and_then(|c| {
            c.wide_art
                .clone()
                .or_else(|| c.large_art.clone())
                .or_else(|| c.display_icon.clone())
        }),
        card_name: card.and_then(|c| c.display_name.clone()),
        title_name: title.and_then(|t| t.title_text.clone().or_else(|| t.display_name.clone())),
        level: identity.account_level,
        hide_level: identity.hide_account_level,
    }
}

/// Weapons whose skin name contains `query`; a blank query keeps everything
pub fn filter_by_skin_name<'a>(weapons: &'a [EquippedWeapon], query: &str) -> Vec<&'a EquippedWeapon> {
    let query = query.trim().to_lowercase();
    weapons
        .iter()
        .filter(|w| query.is_empty() || w.skin_name.to_lowercase().contains(&query))
        .collect()
}

/// Distinct secondary labels for a weapon card: level, chroma (when it is
/// not just the skin name again) and buddy
pub fn metadata_tags(weapon: &EquippedWeapon) -> Vec<String> {
    let chroma = weapon
        .chroma_name
        .as_ref()
        .filter(|c| **c != weapon.skin_name);

    let mut tags: Vec<String> = Vec::new();
    for tag in [weapon.skin_level_name.as_ref(), chroma, weapon.buddy_name.as_ref()]
        .into_iter()
        .flatten()
    {
        if !tag.is_empty() && !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Human label for a spray equip slot
pub fn spray_slot_label(slot: &str) -> String {
    if let Some(label) = known_slot(slot) {
        return label.to_string();
    }

    let sanitized = sanitize_slot(slot);
    if sanitized.is_empty() {
        return slot.to_string();
    }

    let condensed: String = sanitized
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if let Some(n) = condensed.strip_prefix("spray").filter(|n| matches!(*n, "1" | "2" | "3")) {
        return format!("Spray {}", n);
    }
    if let Some(label) = known_slot(&condensed) {
        return label.to_string();
    }

    sanitized
}

fn known_slot(slot: &str) -> Option<&'static str> {
    let condensed: String = slot.chars().filter(|c| *c != '-' && *c != '_').collect();
    SPRAY_SLOTS
        .iter()
        .find(|(id, _)| {
            let id: String = id.chars().filter(|c| *c != '-').collect();
            id.eq_ignore_ascii_case(&condensed)
        })
        .map(|(_, label)| *label)
}

/// "EAresSpraySlot::SpraySlot_FirstHalf" -> "First Half"
fn sanitize_slot(slot: &str) -> String {
    let tail = slot.rsplit_once("::").map_or(slot, |(_, tail)| tail);
    const MARKER: &str = "sprayslot_";
    // ASCII lower-casing keeps byte offsets, so the index is valid in `tail`
    let tail = match tail.to_ascii_lowercase().find(MARKER) {
        Some(at) => format!("{}{}", &tail[..at], &tail[at + MARKER.len()..]),
        None => tail.to_string(),
    };

    let mut out = String::with_capacity(tail.len() + 4);
    let mut prev: Option<char> = None;
    for c in tail.chars() {
        if c == '_' || c == '-' {
            if !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                out.push(' ');
            }
            out.push(c);
        }
        prev = Some(c);
    }
    out.trim().to_string()
}
