mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;

use analysis::leaderboard::{top_players, DEFAULT_TOP_N};
use analysis::roles::{champions_for_role, Role};
use analysis::summary::summarize;
use anyhow::Context;
use api::client::RiotApiClient;
use api::endpoints::Queue;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::*;
use error::AppError;
use indicatif::ProgressBar;

const TOP_MASTERIES: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "lol-stats")]
#[command(about = "League of Legends champions, live games and leaderboards", long_about = None)]
struct Args {
    /// Region code: na, euw, kr, jp, br, eune, lan, las, oce, tr, ru
    /// (default: RIOT_REGION or na)
    #[arg(short, long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List champions from Data Dragon
    Champions {
        /// Only champions whose tags fit this role
        #[arg(long, value_enum)]
        role: Option<Role>,
    },
    /// Look up a champion by numeric key (e.g. 266)
    Champion { key: String },
    /// Summoner profile: rank, top masteries, recent matches
    Summoner {
        /// Summoner name
        name: String,

        /// Number of recent matches (default: MATCH_COUNT or 5)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        matches: Option<u32>,
    },
    /// Featured live games
    Live,
    /// Challenger leaderboard
    Leaderboard {
        #[arg(short, long, value_enum, default_value = "solo")]
        queue: Queue,

        /// Number of players to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(region) = args.region {
        config.region = region;
    }
    let region = config.region.clone();
    let client = RiotApiClient::new(config);

    match args.command {
        Command::Champions { role } => show_champions(&client, role),
        Command::Champion { key } => show_champion(&client, &key),
        Command::Summoner { name, matches } => show_summoner(&client, &region, &name, matches),
        Command::Live => show_live_games(&client, &region),
        Command::Leaderboard { queue, top } => show_leaderboard(&client, &region, queue, top),
    }
}

fn show_champions(client: &RiotApiClient, role: Option<Role>) -> anyhow::Result<()> {
    let snapshot = client
        .get_champions()
        .context("Failed to fetch champion list")?;
    display_info(&format!(
        "Data Dragon {} fetched at {}",
        client.config().ddragon_version,
        snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    let all = snapshot.sorted_by_name();
    let selected = champions_for_role(&all, role);

    let heading = match role {
        Some(role) => format!("Champions for {}", role),
        None => "Champions".to_string(),
    };
    display_champions(&selected, &heading);
    Ok(())
}

fn show_champion(client: &RiotApiClient, key: &str) -> anyhow::Result<()> {
    let champion = client
        .get_champion_by_id(key)
        .context("Failed to fetch champion list")?
        .ok_or_else(|| AppError::ChampionNotFound(key.to_string()))?;
    display_champion(&champion);
    Ok(())
}

fn show_summoner(
    client: &RiotApiClient,
    region: &str,
    name: &str,
    match_count: Option<u32>,
) -> anyhow::Result<()> {
    let platform = RiotApiClient::platform_for(region);
    display_info(&format!("Fetching {} on {}", name, platform));

    let summoner = client
        .get_summoner_by_name(region, name)
        .with_context(|| format!("Failed to fetch summoner {}", name))?;
    display_summoner(&summoner, region);

    let entries = client
        .get_league_entries(region, &summoner.id)
        .context("Failed to fetch ranked entries")?;
    display_ranked(&entries);

    let champions = client
        .get_champions()
        .context("Failed to fetch champion list")?;
    let mut masteries = client
        .get_champion_mastery(region, &summoner.id)
        .context("Failed to fetch champion mastery")?;
    masteries.sort_by(|a, b| b.champion_points.cmp(&a.champion_points));
    let mastery_rows = masteries
        .iter()
        .take(TOP_MASTERIES)
        .map(|m| MasteryRow {
            champion: champions
                .by_key(&m.champion_id.to_string())
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("#{}", m.champion_id)),
            level: m.champion_level.to_string(),
            points: m.champion_points.to_string(),
        })
        .collect();
    display_mastery(mastery_rows);

    let count = match_count.unwrap_or(client.config().match_count);
    display_info(&format!(
        "Fetching last {} matches via {}",
        count,
        RiotApiClient::route_for(region)
    ));
    let match_ids = client
        .get_match_ids(region, &summoner.puuid, count)
        .context("Failed to fetch match ids")?;

    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Fetching match details");
    let mut matches = Vec::with_capacity(match_ids.len());
    for match_id in &match_ids {
        let detail = client
            .get_match(region, match_id)
            .with_context(|| format!("Failed to fetch match {}", match_id))?;
        matches.push(detail);
        pb.inc(1);
    }
    pb.finish_and_clear();

    display_match_summary(&summarize(&matches, &summoner.puuid));
    Ok(())
}

fn show_live_games(client: &RiotApiClient, region: &str) -> anyhow::Result<()> {
    let featured = client
        .get_featured_games(region)
        .context("Failed to fetch featured games")?;
    let champions = client
        .get_champions()
        .context("Failed to fetch champion list")?;

    display_featured_games(&featured.game_list, |champion_id| {
        champions
            .by_key(&champion_id.to_string())
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    });
    Ok(())
}

fn show_leaderboard(
    client: &RiotApiClient,
    region: &str,
    queue: Queue,
    top: usize,
) -> anyhow::Result<()> {
    let league = client
        .get_challenger_league(region, queue)
        .context("Failed to fetch leaderboard")?;
    let players = top_players(&league.entries, top);

    display_leaderboard(
        &players,
        &format!(
            "{} Challenger - {}",
            queue.friendly_name(),
            RiotApiClient::platform_for(region)
        ),
    );
    display_success(&format!("{} players in league", league.entries.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_count_flag_must_be_positive() {
        let parse = |count: &str| {
            Args::try_parse_from(["lol-stats", "summoner", "Faker", "--matches", count])
        };

        assert!(parse("0").is_err());
        assert!(parse("-2").is_err());
        match parse("7").unwrap().command {
            Command::Summoner { matches, .. } => assert_eq!(matches, Some(7)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn champions_takes_only_a_role() {
        assert!(Args::try_parse_from(["lol-stats", "champions", "--refresh"]).is_err());
        let args = Args::try_parse_from(["lol-stats", "champions", "--role", "adc"]).unwrap();
        assert!(matches!(args.command, Command::Champions { role: Some(Role::Adc) }));
    }
}
