use crate::api::models::{FeaturedGameInfo, FeaturedParticipant};
use chrono::{DateTime, Utc};

pub const BLUE_TEAM: i32 = 100;
pub const RED_TEAM: i32 = 200;
pub const TEAM_SIZE: usize = 5;

pub struct Teams<'a> {
    pub blue: Vec<&'a FeaturedParticipant>,
    pub red: Vec<&'a FeaturedParticipant>,
}

/// Formats elapsed seconds as `m:ss`. Negative lengths (game still loading)
/// show as `0:00`.
pub fn game_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn split_teams(game: &FeaturedGameInfo) -> Teams<'_> {
    let team = |id: i32| {
        game.participants
            .iter()
            .filter(|p| p.team_id == id)
            .take(TEAM_SIZE)
            .collect::<Vec<_>>()
    };

    Teams {
        blue: team(BLUE_TEAM),
        red: team(RED_TEAM),
    }
}

pub fn started_at(game: &FeaturedGameInfo) -> Option<DateTime<Utc>> {
    if game.game_start_time <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(game.game_start_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_with(participants: serde_json::Value) -> FeaturedGameInfo {
        serde_json::from_value(json!({
            "gameId": 42,
            "gameMode": "CLASSIC",
            "gameStartTime": 1_700_000_000_000i64,
            "gameLength": 754,
            "participants": participants
        }))
        .unwrap()
    }

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(game_clock(754), "12:34");
        assert_eq!(game_clock(65), "1:05");
        assert_eq!(game_clock(0), "0:00");
        assert_eq!(game_clock(-30), "0:00");
    }

    #[test]
    fn teams_are_split_and_capped() {
        let participants: Vec<_> = (0..12)
            .map(|i| {
                json!({
                    "championId": i,
                    "teamId": if i < 7 { 100 } else { 200 },
                    "summonerName": format!("p{i}")
                })
            })
            .collect();
        let game = game_with(json!(participants));

        let teams = split_teams(&game);
        assert_eq!(teams.blue.len(), 5);
        assert_eq!(teams.red.len(), 5);
        assert_eq!(teams.blue[0].summoner_name, "p0");
        assert_eq!(teams.red[0].summoner_name, "p7");
    }

    #[test]
    fn start_time_from_epoch_millis() {
        let game = game_with(json!([]));
        let started = started_at(&game).unwrap();
        assert_eq!(started.timestamp(), 1_700_000_000);

        let mut unknown = game.clone();
        unknown.game_start_time = 0;
        assert!(started_at(&unknown).is_none());
    }
}
