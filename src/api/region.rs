use std::fmt;

/// Platform shard that serves summoner, league, mastery and spectator data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Na1,
    Euw1,
    Kr,
    Jp1,
    Br1,
    Eun1,
    La1,
    La2,
    Oc1,
    Tr1,
    Ru,
}

/// Continental cluster that serves match-v5 data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalRoute {
    Americas,
    Europe,
    Asia,
    Sea,
}

pub const DEFAULT_PLATFORM: Platform = Platform::Na1;
pub const DEFAULT_ROUTE: RegionalRoute = RegionalRoute::Americas;

/// User-facing region code to platform.
pub const REGION_PLATFORMS: [(&str, Platform); 11] = [
    ("na", Platform::Na1),
    ("euw", Platform::Euw1),
    ("kr", Platform::Kr),
    ("jp", Platform::Jp1),
    ("br", Platform::Br1),
    ("eune", Platform::Eun1),
    ("lan", Platform::La1),
    ("las", Platform::La2),
    ("oce", Platform::Oc1),
    ("tr", Platform::Tr1),
    ("ru", Platform::Ru),
];

/// Platform id to the regional route used by match-v5.
pub const PLATFORM_ROUTES: [(&str, RegionalRoute); 11] = [
    ("na1", RegionalRoute::Americas),
    ("br1", RegionalRoute::Americas),
    ("la1", RegionalRoute::Americas),
    ("la2", RegionalRoute::Americas),
    ("euw1", RegionalRoute::Europe),
    ("eun1", RegionalRoute::Europe),
    ("tr1", RegionalRoute::Europe),
    ("ru", RegionalRoute::Europe),
    ("kr", RegionalRoute::Asia),
    ("jp1", RegionalRoute::Asia),
    ("oc1", RegionalRoute::Sea),
];

/// Maps a region code such as `"euw"` to its platform. Unknown codes fall
/// back to NA1.
pub fn resolve_platform(region: &str) -> Platform {
    let region = region.to_lowercase();
    REGION_PLATFORMS
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, platform)| *platform)
        .unwrap_or(DEFAULT_PLATFORM)
}

/// Maps a platform id such as `"kr"` to its regional route. Keyed by
/// platform id, not region code. Unknown ids fall back to americas.
pub fn resolve_route(platform_id: &str) -> RegionalRoute {
    PLATFORM_ROUTES
        .iter()
        .find(|(id, _)| *id == platform_id)
        .map(|(_, route)| *route)
        .unwrap_or(DEFAULT_ROUTE)
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Na1 => "na1",
            Platform::Euw1 => "euw1",
            Platform::Kr => "kr",
            Platform::Jp1 => "jp1",
            Platform::Br1 => "br1",
            Platform::Eun1 => "eun1",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Oc1 => "oc1",
            Platform::Tr1 => "tr1",
            Platform::Ru => "ru",
        }
    }
}

impl RegionalRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionalRoute::Americas => "americas",
            RegionalRoute::Europe => "europe",
            RegionalRoute::Asia => "asia",
            RegionalRoute::Sea => "sea",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RegionalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
