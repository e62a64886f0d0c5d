//! Agent gallery helpers

use super::types::{Agent, AgentAbility};

/// Passive abilities first, then the rest in catalog order
pub fn sort_abilities(abilities: &[AgentAbility]) -> Vec<&AgentAbility> {
    let (passive, active): (Vec<_>, Vec<_>) =
        abilities.iter().partition(|a| a.slot == "Passive");
    passive.into_iter().chain(active).collect()
}

/// Agents whose role display name matches `role`; `None` selects every agent
pub fn agents_by_role<'a>(agents: &'a [Agent], role: Option<&str>) -> Vec<&'a Agent> {
    match role {
        None => agents.iter().collect(),
        Some(role) => agents
            .iter()
            .filter(|agent| {
                agent
                    .role
                    .as_ref()
                    .and_then(|r| r.display_name.as_deref())
                    .is_some_and(|name| name == role)
            })
            .collect(),
    }
}

/// Distinct role names in first-seen order, for building a role picker
pub fn roles(agents: &[Agent]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for name in agents
        .iter()
        .filter_map(|a| a.role.as_ref()?.display_name.as_deref())
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
