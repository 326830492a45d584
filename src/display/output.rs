use crate::analysis::leaderboard::RankedPlayer;
use crate::analysis::live::{game_clock, split_teams, started_at};
use crate::analysis::summary::MatchSummary;
use crate::api::models::{
    ChampionInfo, FeaturedGameInfo, FeaturedParticipant, LeagueEntryDto, SummonerDto,
};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    key: String,
    name: String,
    title: String,
    tags: String,
}

#[derive(Tabled)]
struct RankedRow {
    queue: String,
    rank: String,
    lp: String,
    record: String,
    win_rate: String,
}

#[derive(Tabled)]
pub struct MasteryRow {
    pub champion: String,
    pub level: String,
    pub points: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "match")]
    match_id: String,
    champion: String,
    kda: String,
    result: String,
    duration: String,
    played: String,
}

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: String,
    player: String,
    lp: String,
    record: String,
    win_rate: String,
}

fn print_header(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_champions(champions: &[&ChampionInfo], heading: &str) {
    print_header(&format!("🛡️ {} ({})", heading, champions.len()), 60);

    if champions.is_empty() {
        println!("{}", "No champions match".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            key: c.key.clone(),
            name: c.name.clone(),
            title: c.title.clone(),
            tags: c.tags.join(", "),
        })
        .collect();
    print_table(rows);
}

pub fn display_champion(champion: &ChampionInfo) {
    println!("{} ({})", champion.name.bold(), champion.title);
    println!("  id:   {}", champion.id);
    println!("  key:  {}", champion.key);
    if !champion.tags.is_empty() {
        println!("  tags: {}", champion.tags.join(", "));
    }
}

pub fn display_summoner(summoner: &SummonerDto, region: &str) {
    print_header(
        &format!("🎮 {} [{}]", summoner.name, region.to_uppercase()),
        60,
    );
    println!("{} {}", "Level:".bold(), summoner.summoner_level);
    println!("{} {}\n", "PUUID:".bold(), summoner.puuid);
}

pub fn display_ranked(entries: &[LeagueEntryDto]) {
    if entries.is_empty() {
        println!("{}\n", "Unranked".yellow());
        return;
    }

    let rows: Vec<RankedRow> = entries
        .iter()
        .map(|e| RankedRow {
            queue: e.queue_type.clone(),
            rank: format!("{} {}", e.tier, e.rank),
            lp: e.league_points.to_string(),
            record: format!("{}W {}L", e.wins, e.losses),
            win_rate: format!(
                "{:.1}%",
                crate::analysis::leaderboard::win_rate(e.wins, e.losses)
            ),
        })
        .collect();
    print_table(rows);
}

pub fn display_mastery(rows: Vec<MasteryRow>) {
    println!("{}", "Top Champion Mastery".bold().yellow());
    if rows.is_empty() {
        println!("{}\n", "No mastery data".yellow());
        return;
    }
    print_table(rows);
}

pub fn display_match_summary(summary: &MatchSummary) {
    print_header(
        &format!("📊 MATCH HISTORY (Last {} Games)", summary.lines.len()),
        80,
    );
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        summary.wins().to_string().green(),
        summary.losses().to_string().red(),
        summary.win_rate()
    );

    if summary.lines.is_empty() {
        return;
    }

    print_table(match_rows(summary));
}

fn match_rows(summary: &MatchSummary) -> Vec<MatchRow> {
    summary
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let result = if line.remake {
                "REMAKE".yellow().to_string()
            } else if line.won {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            };
            MatchRow {
                number: (idx + 1).to_string(),
                match_id: line.match_id.clone(),
                champion: line.champion.clone(),
                kda: format!(
                    "{}/{}/{} ({:.2})",
                    line.kills,
                    line.deaths,
                    line.assists,
                    line.kda()
                ),
                result,
                duration: game_clock(line.duration_secs),
                played: line
                    .played_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect()
}

/// `champion_name` resolves a numeric champion id to a display name.
pub fn display_featured_games<F>(games: &[FeaturedGameInfo], champion_name: F)
where
    F: Fn(i64) -> String,
{
    print_header(&format!("📺 LIVE GAMES ({})", games.len()), 60);

    if games.is_empty() {
        println!("{}", "No live games available".yellow());
        return;
    }

    for game in games {
        let started = started_at(game)
            .map(|t| format!(", started {}", t.format("%H:%M UTC")))
            .unwrap_or_default();
        println!(
            "{} {} {}{}",
            game.game_mode.bold(),
            game_clock(game.game_length).cyan(),
            format!("(game {})", game.game_id).dimmed(),
            started
        );

        let teams = split_teams(game);
        let side = |players: &[&FeaturedParticipant]| {
            players
                .iter()
                .map(|p| format!("{} ({})", p.display_name(), champion_name(p.champion_id)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("  {} {}", "Blue:".blue().bold(), side(teams.blue.as_slice()));
        println!("  {} {}\n", "Red: ".red().bold(), side(teams.red.as_slice()));
    }
}

pub fn display_leaderboard(players: &[RankedPlayer], heading: &str) {
    print_header(&format!("🏆 {}", heading), 60);

    if players.is_empty() {
        println!("{}", "No players available".yellow());
        return;
    }

    let rows: Vec<LeaderboardRow> = players
        .iter()
        .map(|p| LeaderboardRow {
            rank: format!("#{}", p.rank),
            player: if p.hot_streak {
                format!("{} 🔥", p.name)
            } else {
                p.name.clone()
            },
            lp: p.league_points.to_string(),
            record: format!("{}W {}L", p.wins, p.losses),
            win_rate: format!("{:.1}%", p.win_rate),
        })
        .collect();
    print_table(rows);
}
