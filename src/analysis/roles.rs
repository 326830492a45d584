use crate::api::models::ChampionInfo;
use std::fmt;

/// Lane roles, approximated from Data Dragon champion tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Role::Top => &["Fighter", "Tank"],
            Role::Jungle => &["Fighter", "Assassin"],
            Role::Mid => &["Mage", "Assassin"],
            Role::Adc => &["Marksman"],
            Role::Support => &["Support", "Tank"],
        }
    }

    pub fn fits(&self, champion: &ChampionInfo) -> bool {
        champion
            .tags
            .iter()
            .any(|tag| self.tags().contains(&tag.as_str()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        };
        write!(f, "{}", name)
    }
}

/// Keeps input order. `None` keeps every champion.
pub fn champions_for_role<'a>(
    champions: &[&'a ChampionInfo],
    role: Option<Role>,
) -> Vec<&'a ChampionInfo> {
    champions
        .iter()
        .copied()
        .filter(|champion| role.map_or(true, |r| r.fits(champion)))
        .collect()
}
