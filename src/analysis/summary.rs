use crate::api::models::MatchDto;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct MatchLine {
    pub match_id: String,
    pub champion: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub won: bool,
    pub remake: bool,
    pub duration_secs: i64,
    pub played_at: Option<DateTime<Utc>>,
}

impl MatchLine {
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSummary {
    pub lines: Vec<MatchLine>,
}

impl MatchSummary {
    // remakes count as neither
    pub fn wins(&self) -> usize {
        self.lines.iter().filter(|l| !l.remake && l.won).count()
    }

    pub fn losses(&self) -> usize {
        self.lines.iter().filter(|l| !l.remake && !l.won).count()
    }

    pub fn win_rate(&self) -> f64 {
        let played = self.wins() + self.losses();
        if played == 0 {
            0.0
        } else {
            (self.wins() as f64 / played as f64) * 100.0
        }
    }
}

/// Builds one line per match the player took part in, preserving order.
pub fn summarize(matches: &[MatchDto], puuid: &str) -> MatchSummary {
    let lines = matches
        .iter()
        .filter_map(|m| {
            let player = m.info.participants.iter().find(|p| p.puuid == puuid)?;
            Some(MatchLine {
                match_id: m.metadata.match_id.clone(),
                champion: player.champion_name.clone(),
                kills: player.kills,
                deaths: player.deaths,
                assists: player.assists,
                won: player.win,
                remake: player.game_ended_in_early_surrender,
                duration_secs: m.info.game_duration,
                played_at: DateTime::from_timestamp_millis(m.info.game_creation)
                    .filter(|_| m.info.game_creation > 0),
            })
        })
        .collect();

    MatchSummary { lines }
}
