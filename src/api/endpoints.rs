// URL builders for the Riot API and Data Dragon. Pure formatting, no I/O.

use super::region::{Platform, RegionalRoute};
use std::fmt;
use urlencoding::encode;

pub const DEFAULT_MATCH_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Queue {
    #[default]
    #[value(name = "solo")]
    RankedSolo5x5,
    #[value(name = "flex")]
    RankedFlexSr,
    #[value(name = "flex-tt")]
    RankedFlexTt,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::RankedSolo5x5 => "RANKED_SOLO_5x5",
            Queue::RankedFlexSr => "RANKED_FLEX_SR",
            Queue::RankedFlexTt => "RANKED_FLEX_TT",
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            Queue::RankedSolo5x5 => "Ranked Solo/Duo",
            Queue::RankedFlexSr => "Ranked Flex",
            Queue::RankedFlexTt => "Ranked Flex 3v3",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn platform_host(platform: Platform) -> String {
    format!("https://{}.api.riotgames.com", platform)
}

fn regional_host(route: RegionalRoute) -> String {
    format!("https://{}.api.riotgames.com", route)
}

pub fn champions(ddragon_base: &str, version: &str) -> String {
    format!(
        "{}/cdn/{}/data/en_US/champion.json",
        ddragon_base,
        encode(version)
    )
}

pub fn summoner_by_name(platform: Platform, summoner_name: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-name/{}",
        platform_host(platform),
        encode(summoner_name)
    )
}

pub fn league_entries(platform: Platform, summoner_id: &str) -> String {
    format!(
        "{}/lol/league/v4/entries/by-summoner/{}",
        platform_host(platform),
        encode(summoner_id)
    )
}

pub fn champion_mastery(platform: Platform, summoner_id: &str) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-summoner/{}",
        platform_host(platform),
        encode(summoner_id)
    )
}

pub fn featured_games(platform: Platform) -> String {
    format!("{}/lol/spectator/v4/featured-games", platform_host(platform))
}

pub fn challenger_league(platform: Platform, queue: Queue) -> String {
    format!(
        "{}/lol/league/v4/challengerleagues/by-queue/{}",
        platform_host(platform),
        queue
    )
}

pub fn match_ids(route: RegionalRoute, puuid: &str, count: u32) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?count={}",
        regional_host(route),
        encode(puuid),
        count
    )
}

pub fn match_detail(route: RegionalRoute, match_id: &str) -> String {
    format!(
        "{}/lol/match/v5/matches/{}",
        regional_host(route),
        encode(match_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dragon_champion_list() {
        assert_eq!(
            champions("https://ddragon.leagueoflegends.com", "13.6.1"),
            "https://ddragon.leagueoflegends.com/cdn/13.6.1/data/en_US/champion.json"
        );
    }

    #[test]
    fn summoner_name_is_percent_encoded() {
        assert_eq!(
            summoner_by_name(Platform::Na1, "Hide on bush"),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Hide%20on%20bush"
        );
        assert_eq!(
            summoner_by_name(Platform::Euw1, "a/b?c#d"),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn platform_scoped_templates() {
        assert_eq!(
            league_entries(Platform::Kr, "abc-DEF_123"),
            "https://kr.api.riotgames.com/lol/league/v4/entries/by-summoner/abc-DEF_123"
        );
        assert_eq!(
            champion_mastery(Platform::Jp1, "sid"),
            "https://jp1.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-summoner/sid"
        );
        assert_eq!(
            featured_games(Platform::Br1),
            "https://br1.api.riotgames.com/lol/spectator/v4/featured-games"
        );
        assert_eq!(
            challenger_league(Platform::Na1, Queue::default()),
            "https://na1.api.riotgames.com/lol/league/v4/challengerleagues/by-queue/RANKED_SOLO_5x5"
        );
        assert_eq!(
            challenger_league(Platform::Eun1, Queue::RankedFlexSr),
            "https://eun1.api.riotgames.com/lol/league/v4/challengerleagues/by-queue/RANKED_FLEX_SR"
        );
    }

    #[test]
    fn match_templates_use_regional_route() {
        assert_eq!(
            match_ids(RegionalRoute::Asia, "puuid-1", DEFAULT_MATCH_COUNT),
            "https://asia.api.riotgames.com/lol/match/v5/matches/by-puuid/puuid-1/ids?count=5"
        );
        assert_eq!(
            match_detail(RegionalRoute::Europe, "EUW1_6543210"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_6543210"
        );
    }
}
