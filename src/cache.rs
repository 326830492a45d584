use crate::api::dispatch::fetch_json;
use crate::api::models::{ChampionInfo, DataDragonChampions};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct ChampionSnapshot {
    /// Keyed by Data Dragon id, e.g. `"Aatrox"`.
    pub champions: HashMap<String, ChampionInfo>,
    pub fetched_at: DateTime<Utc>,
}

impl ChampionSnapshot {
    pub fn new(champions: HashMap<String, ChampionInfo>) -> Self {
        ChampionSnapshot {
            champions,
            fetched_at: Utc::now(),
        }
    }

    /// Linear scan for the champion whose numeric `key` matches.
    pub fn by_key(&self, key: &str) -> Option<&ChampionInfo> {
        self.champions.values().find(|champion| champion.key == key)
    }

    pub fn sorted_by_name(&self) -> Vec<&ChampionInfo> {
        let mut list: Vec<_> = self.champions.values().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }
}

/// Process-lifetime memo of the Data Dragon champion list.
///
/// There is no expiry; call [`ChampionCache::refresh`] to refetch. Two
/// callers that miss at the same time will both fetch, and the first one to
/// store its result wins.
#[derive(Debug)]
pub struct ChampionCache {
    url: String,
    slot: RwLock<Option<Arc<ChampionSnapshot>>>,
}

impl ChampionCache {
    pub fn new(url: String) -> Self {
        ChampionCache {
            url,
            slot: RwLock::new(None),
        }
    }

    #[cfg(test)]
    pub fn is_populated(&self) -> bool {
        self.cached().is_some()
    }

    pub fn get(&self, agent: &ureq::Agent) -> Result<Arc<ChampionSnapshot>, AppError> {
        if let Some(snapshot) = self.cached() {
            return Ok(snapshot);
        }

        let fresh = Arc::new(self.fetch(agent)?);
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        Ok(slot.get_or_insert(fresh).clone())
    }

    #[allow(dead_code)]
    pub fn refresh(&self, agent: &ureq::Agent) -> Result<Arc<ChampionSnapshot>, AppError> {
        let fresh = Arc::new(self.fetch(agent)?);
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(fresh.clone());
        Ok(fresh)
    }

    pub fn by_key(
        &self,
        agent: &ureq::Agent,
        key: &str,
    ) -> Result<Option<ChampionInfo>, AppError> {
        Ok(self.get(agent)?.by_key(key).cloned())
    }

    fn cached(&self) -> Option<Arc<ChampionSnapshot>> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn fetch(&self, agent: &ureq::Agent) -> Result<ChampionSnapshot, AppError> {
        log::debug!("Fetching champion list from Data Dragon");
        let value = fetch_json(agent, &self.url, None)?;
        let payload: DataDragonChampions =
            serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))?;
        log::info!("Cached {} champions", payload.data.len());
        Ok(ChampionSnapshot::new(payload.data))
    }
}
