use serde::Deserialize;
use std::collections::HashMap;

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SummonerDto {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
}

// League V4 entries response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub summoner_id: String,
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

// League V4 challenger league response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LeagueListDto {
    #[serde(default)]
    pub league_id: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub queue: String,
    #[serde(default)]
    pub entries: Vec<LeagueItemDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LeagueItemDto {
    #[serde(default)]
    pub summoner_id: String,
    #[serde(default)]
    pub summoner_name: String,
    pub league_points: i32,
    #[serde(default)]
    pub rank: String,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
}

// Champion Mastery V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
    #[serde(default)]
    pub last_play_time: i64,
}

// Spectator V4 featured games response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct FeaturedGames {
    #[serde(default)]
    pub game_list: Vec<FeaturedGameInfo>,
    #[serde(default)]
    pub client_refresh_interval: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct FeaturedGameInfo {
    pub game_id: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub map_id: i64,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub game_start_time: i64,
    /// Seconds since the game started.
    #[serde(default)]
    pub game_length: i64,
    #[serde(default)]
    pub participants: Vec<FeaturedParticipant>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct FeaturedParticipant {
    pub champion_id: i64,
    pub team_id: i32,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id: String,
    #[serde(default)]
    pub bot: bool,
}

impl FeaturedParticipant {
    pub fn display_name(&self) -> &str {
        if self.riot_id.is_empty() {
            &self.summoner_name
        } else {
            &self.riot_id
        }
    }
}

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub data_version: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchInfo {
    #[serde(default)]
    pub game_creation: i64,
    pub game_duration: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub queue_id: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub game_ended_in_early_surrender: bool,
}

// Data Dragon champion.json response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[allow(dead_code)]
pub struct ChampionInfo {
    pub id: String,
    /// Numeric champion id as a string, e.g. `"266"`.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
