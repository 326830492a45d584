use crate::cache::{ChampionCache, ChampionSnapshot};
use crate::config::Config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::dispatch::{build_agent, fetch_json};
use super::endpoints::{self, Queue};
use super::models::*;
use super::region::{resolve_platform, resolve_route, Platform, RegionalRoute};

pub struct RiotApiClient {
    config: Config,
    agent: ureq::Agent,
    champions: ChampionCache,
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let champions_url = endpoints::champions(&config.ddragon_base_url, &config.ddragon_version);
        RiotApiClient {
            config,
            agent: build_agent(),
            champions: ChampionCache::new(champions_url),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform_for(region: &str) -> Platform {
        resolve_platform(region)
    }

    /// Match-v5 is partitioned by continent, so match URLs always go through
    /// the platform first and then the route table.
    pub fn route_for(region: &str) -> RegionalRoute {
        resolve_route(resolve_platform(region).as_str())
    }

    fn get_authed<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let credential = self.config.credential()?;
        decode(fetch_json(&self.agent, url, Some(credential))?)
    }

    pub fn get_champions(&self) -> Result<Arc<ChampionSnapshot>, AppError> {
        self.champions.get(&self.agent)
    }

    /// `Ok(None)` when no champion has this numeric key.
    pub fn get_champion_by_id(&self, champion_id: &str) -> Result<Option<ChampionInfo>, AppError> {
        self.champions.by_key(&self.agent, champion_id)
    }

    pub fn get_summoner_by_name(
        &self,
        region: &str,
        summoner_name: &str,
    ) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_name(Self::platform_for(region), summoner_name);
        self.get_authed(&url)
    }

    pub fn get_league_entries(
        &self,
        region: &str,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = endpoints::league_entries(Self::platform_for(region), summoner_id);
        self.get_authed(&url)
    }

    pub fn get_match_ids(
        &self,
        region: &str,
        puuid: &str,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids(Self::route_for(region), puuid, count);
        self.get_authed(&url)
    }

    pub fn get_match(&self, region: &str, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_detail(Self::route_for(region), match_id);
        self.get_authed(&url)
    }

    pub fn get_champion_mastery(
        &self,
        region: &str,
        summoner_id: &str,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = endpoints::champion_mastery(Self::platform_for(region), summoner_id);
        self.get_authed(&url)
    }

    pub fn get_featured_games(&self, region: &str) -> Result<FeaturedGames, AppError> {
        let url = endpoints::featured_games(Self::platform_for(region));
        self.get_authed(&url)
    }

    pub fn get_challenger_league(
        &self,
        region: &str,
        queue: Queue,
    ) -> Result<LeagueListDto, AppError> {
        let url = endpoints::challenger_league(Self::platform_for(region), queue);
        self.get_authed(&url)
    }
}
