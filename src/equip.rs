//! Equipment collections (buddies, sprays, cards, titles) as searchable lists

use crate::catalog::CatalogSnapshot;
use std::fmt;
use std::str::FromStr;

const QUERY_PUNCTUATION: &str = "&/\\#,+()$~%.^'\":*?<>{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipSection {
    Buddies,
    Sprays,
    Cards,
    Titles,
}

impl EquipSection {
    pub fn all() -> [EquipSection; 4] {
        [Self::Buddies, Self::Sprays, Self::Cards, Self::Titles]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Buddies => "buddies",
            Self::Sprays => "sprays",
            Self::Cards => "cards",
            Self::Titles => "titles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buddies => "Gun Buddies",
            Self::Sprays => "Sprays",
            Self::Cards => "Player Cards",
            Self::Titles => "Player Titles",
        }
    }
}

impl fmt::Display for EquipSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EquipSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| {
                format!("unknown section '{s}', expected one of buddies, sprays, cards, titles")
            })
    }
}

/// One row of an equipment collection
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub display_name: String,
    pub subtitle: String,
    pub image: Option<String>,
    pub section: EquipSection,
}

/// Trim, drop punctuation and lower-case a search query
pub fn sanitize_query(query: &str) -> String {
    query
        .trim()
        .chars()
        .filter(|c| !QUERY_PUNCTUATION.contains(*c))
        .collect::<String>()
        .to_lowercase()
}

fn name_or_unknown(name: Option<&String>) -> String {
    name.cloned().unwrap_or_else(|| "Unknown".to_string())
}

/// Every item of `section` in catalog order, mapped for display
pub fn build_display_items(section: EquipSection, catalog: &CatalogSnapshot) -> Vec<DisplayItem> {
    match section {
        EquipSection::Buddies => catalog
            .buddies
            .iter()
            .map(|buddy| {
                let first_level = buddy.levels.first();
                DisplayItem {
                    id: buddy.uuid.clone(),
                    display_name: name_or_unknown(buddy.display_name.as_ref()),
                    subtitle: first_level
                        .and_then(|l| l.display_name.clone())
                        .unwrap_or_default(),
                    image: buddy
                        .display_icon
                        .clone()
                        .or_else(|| first_level.and_then(|l| l.display_icon.clone())),
                    section,
                }
            })
            .collect(),
        EquipSection::Sprays => catalog
            .sprays
            .iter()
            .map(|spray| DisplayItem {
                id: spray.uuid.clone(),
                display_name: name_or_unknown(spray.display_name.as_ref()),
                subtitle: spray
                    .category
                    .clone()
                    .or_else(|| spray.levels.first().and_then(|l| l.display_name.clone()))
                    .unwrap_or_default(),
                image: spray
                    .full_transparent_icon
                    .clone()
                    .or_else(|| spray.full_icon.clone())
                    .or_else(|| spray.display_icon.clone()),
                section,
            })
            .collect(),
        EquipSection::Cards => catalog
            .cards
            .iter()
            .map(|card| DisplayItem {
                id: card.uuid.clone(),
                display_name: name_or_unknown(card.display_name.as_ref()),
                subtitle: String::new(),
                image: card
                    .large_art
                    .clone()
                    .or_else(|| card.display_icon.clone())
                    .or_else(|| card.small_art.clone()),
                section,
            })
            .collect(),
        EquipSection::Titles => catalog
            .titles
            .iter()
            .map(|title| DisplayItem {
                id: title.uuid.clone(),
                display_name: name_or_unknown(
                    title.display_name.as_ref().or(title.title_text.as_ref()),
                ),
                subtitle: title.title_text.clone().unwrap_or_default(),
                image: None,
                section,
            })
            .collect(),
    }
}

/// Items whose name or subtitle contains the sanitised query
pub fn filter_items<'a>(items: &'a [DisplayItem], query: &str) -> Vec<&'a DisplayItem> {
    let query = sanitize_query(query);
    items
        .iter()
        .filter(|item| {
            query.is_empty()
                || item.display_name.to_lowercase().contains(&query)
                || item.subtitle.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn sort_items(items: &mut [DisplayItem]) {
    items.sort_by_cached_key(|item| item.display_name.to_lowercase());
}
