use crate::api::models::LeagueItemDto;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub rank: usize,
    pub name: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_rate: f64,
    pub hot_streak: bool,
}

/// Percentage in 0..=100, 0.0 when no games were played.
pub fn win_rate(wins: i32, losses: i32) -> f64 {
    let total = wins + losses;
    if total <= 0 {
        0.0
    } else {
        (wins as f64 / total as f64) * 100.0
    }
}

/// Highest LP first; ties keep API order.
pub fn top_players(entries: &[LeagueItemDto], top_n: usize) -> Vec<RankedPlayer> {
    let mut sorted: Vec<&LeagueItemDto> = entries.iter().collect();
    sorted.sort_by(|a, b| b.league_points.cmp(&a.league_points));

    sorted
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, entry)| RankedPlayer {
            rank: idx + 1,
            name: if entry.summoner_name.is_empty() {
                entry.summoner_id.clone()
            } else {
                entry.summoner_name.clone()
            },
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
            win_rate: win_rate(entry.wins, entry.losses),
            hot_streak: entry.hot_streak,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, lp: i32, wins: i32, losses: i32) -> LeagueItemDto {
        LeagueItemDto {
            summoner_id: format!("id-{name}"),
            summoner_name: name.to_string(),
            league_points: lp,
            rank: "I".to_string(),
            wins,
            losses,
            hot_streak: false,
            veteran: false,
            fresh_blood: false,
            inactive: false,
        }
    }

    #[test]
    fn sorts_by_lp_and_truncates() {
        let entries = vec![
            entry("low", 800, 10, 10),
            entry("top", 1500, 30, 10),
            entry("mid", 1100, 20, 20),
            entry("also-mid", 1100, 5, 5),
        ];

        let top = top_players(&entries, 3);
        let names: Vec<_> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["top", "mid", "also-mid"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].win_rate, 75.0);
    }

    #[test]
    fn fewer_entries_than_requested() {
        let top = top_players(&[entry("solo", 900, 1, 0)], DEFAULT_TOP_N);
        assert_eq!(top.len(), 1);
        assert!(top_players(&[], DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn falls_back_to_summoner_id_without_name() {
        let top = top_players(&[entry("", 900, 1, 1)], 1);
        assert_eq!(top[0].name, "id-");
    }

    #[test]
    fn win_rate_without_games_is_zero() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(1, 3), 25.0);
    }
}
