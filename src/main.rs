//! Valo Companion - command-line front end
//!
//! Loads the cached catalog and prints match history, scoreboards, the
//! equipped loadout and equipment collections.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use valo_companion::equip::{build_display_items, filter_items, sort_items, EquipSection};
use valo_companion::loadout::{
    filter_by_skin_name, group_by_category, identity_details, metadata_tags, resolve_sprays,
    resolve_weapons, sort_weapons, spray_slot_label,
};
use valo_companion::matches::{MatchEntry, MatchSummary};
use valo_companion::{
    CatalogCache, Config, FetchOutcome, Identity, Language, MatchStore, RiotClient, Scoreboard,
};

/// Valorant catalog and match history companion
#[derive(Parser, Debug)]
#[command(name = "valo_companion")]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog display language (locale code, short code or English name)
    #[arg(short, long, global = true, default_value = "en-US", value_parser = parse_language)]
    language: Language,

    /// Directory for the persisted catalog files
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Catalog service base URL
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct SessionArgs {
    #[arg(long, global = true, env = "VALO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[arg(long, global = true, env = "VALO_ENTITLEMENTS_TOKEN", hide_env_values = true)]
    entitlements_token: Option<String>,

    /// Auth region (na, eu, ap, kr, latam, br)
    #[arg(long, global = true, env = "VALO_REGION")]
    region: Option<String>,

    #[arg(long, global = true, env = "VALO_PUUID")]
    puuid: Option<String>,
}

impl SessionArgs {
    fn identity(&self) -> Identity {
        Identity::new(
            self.access_token.as_deref().unwrap_or_default(),
            self.entitlements_token.as_deref().unwrap_or_default(),
            self.region.as_deref().unwrap_or_default(),
            self.puuid.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the catalog and print category counts
    Catalog,
    /// Print recent matches with your stats
    History,
    /// Print the scoreboard of one match
    Match {
        /// Match id from the history list
        id: String,
    },
    /// Print the equipped loadout, sprays and identity
    Loadout {
        /// Only show weapons whose skin name contains this
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print an equipment collection (buddies, sprays, cards, titles)
    Collection {
        section: EquipSection,
        query: Option<String>,
    },
}

fn parse_language(s: &str) -> std::result::Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unsupported language '{s}'"))
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config {
        language: args.language,
        ..Config::default()
    };
    if let Some(dir) = args.cache_dir {
        config.cache_dir = dir;
    }
    if let Some(url) = args.catalog_url {
        config.catalog_base_url = url;
    }
    log::debug!("Cache directory: {}", config.cache_dir.display());

    let mut catalog = CatalogCache::from_config(&config);
    let load = catalog.load().await.context("Failed to load catalog")?;
    log::info!(
        "Catalog {} ({}) ready: snapshot from {:?}, agents from {:?}",
        catalog.version().unwrap_or("unknown"),
        catalog.language(),
        load.snapshot,
        load.agents
    );

    let identity = args.session.identity();

    match args.command {
        Command::Catalog => print_catalog(&catalog),
        Command::History => print_history(&config, &catalog, &identity).await?,
        Command::Match { id } => print_match(&catalog, &identity, &id).await?,
        Command::Loadout { query } => {
            print_loadout(&catalog, &identity, query.as_deref().unwrap_or_default()).await?
        }
        Command::Collection { section, query } => {
            print_collection(&catalog, section, query.as_deref().unwrap_or_default())
        }
    }

    Ok(())
}

fn riot_client(catalog: &CatalogCache, identity: &Identity) -> Result<RiotClient> {
    if !identity.is_complete() {
        anyhow::bail!(
            "Session credentials missing: set VALO_ACCESS_TOKEN, VALO_ENTITLEMENTS_TOKEN, VALO_REGION and VALO_PUUID"
        );
    }
    Ok(RiotClient::new(
        &identity.region,
        catalog.version().unwrap_or_default(),
    ))
}

fn print_catalog(catalog: &CatalogCache) {
    let snapshot = catalog.snapshot();
    println!("Version:  {}", catalog.version().unwrap_or("unknown"));
    println!("Language: {}", catalog.language().as_str());
    println!("Skins:    {}", snapshot.skins.len());
    println!("Buddies:  {}", snapshot.buddies.len());
    println!("Sprays:   {}", snapshot.sprays.len());
    println!("Cards:    {}", snapshot.cards.len());
    println!("Titles:   {}", snapshot.titles.len());
    println!("Maps:     {}", snapshot.maps.len());
    println!("Agents:   {}", catalog.agents().agents.len());
}

async fn print_history(config: &Config, catalog: &CatalogCache, identity: &Identity) -> Result<()> {
    let client = riot_client(catalog, identity)?;
    let mut store = MatchStore::from_config(config);

    let outcome = store
        .fetch_matches(&client, catalog, identity)
        .await
        .context("Failed to fetch match history")?;
    if outcome == FetchOutcome::MissingIdentity {
        anyhow::bail!("Session credentials are incomplete");
    }

    for line in history_lines(store.matches()) {
        println!("{}", line);
    }

    Ok(())
}

/// One printable line per summary, or an empty-state line for an empty list
fn history_lines(matches: &[MatchSummary]) -> Vec<String> {
    if matches.is_empty() {
        return vec!["No matches found".to_string()];
    }

    matches
        .iter()
        .map(|summary| {
            let started = summary
                .started_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            match &summary.stats {
                MatchEntry::Loaded(stats) => format!(
                    "{}  {:<14} {:<10} {:<8} {}  {}-{}  {}",
                    started,
                    summary.queue_label(),
                    stats.map_name,
                    stats.kda,
                    if stats.won { "WIN " } else { "LOSS" },
                    stats.rounds_won,
                    stats.rounds_lost,
                    summary.match_id
                ),
                MatchEntry::Failed { reason } => format!(
                    "{}  {:<14} unavailable ({})  {}",
                    started,
                    summary.queue_label(),
                    reason,
                    summary.match_id
                ),
            }
        })
        .collect()
}

async fn print_match(catalog: &CatalogCache, identity: &Identity, match_id: &str) -> Result<()> {
    let client = riot_client(catalog, identity)?;
    let details = client
        .match_details(identity, match_id)
        .await
        .with_context(|| format!("Failed to fetch match {}", match_id))?;

    let board = Scoreboard::build(&details, catalog, &identity.puuid);
    println!(
        "{}  Blue {} : {} Red",
        board.map_name, board.blue.rounds_won, board.red.rounds_won
    );

    for team in [&board.blue, &board.red] {
        println!();
        println!(
            "{} TEAM  {}",
            team.team_id.to_uppercase(),
            if team.victory { "VICTORY" } else { "DEFEAT" }
        );
        for player in &team.players {
            println!(
                "{} {:<20} {:<12} {:>5}",
                if player.is_self { ">" } else { " " },
                player.name,
                player.kda(),
                player.score
            );
        }
    }

    Ok(())
}

async fn print_loadout(catalog: &CatalogCache, identity: &Identity, query: &str) -> Result<()> {
    let client = riot_client(catalog, identity)?;
    let (loadout, weapons) = tokio::try_join!(
        client.player_loadout(identity),
        catalog.client().fetch_weapons(catalog.language()),
    )
    .context("Failed to fetch loadout")?;

    let snapshot = catalog.snapshot();
    let mut equipped = resolve_weapons(&loadout.guns, snapshot, &weapons);
    sort_weapons(&mut equipped);

    if let Some(identity) = &loadout.identity {
        let details = identity_details(identity, snapshot);
        println!(
            "{}  {}",
            details.card_name.as_deref().unwrap_or("Unknown card"),
            details.title_name.as_deref().unwrap_or_default()
        );
        if !details.hide_level {
            println!("Level {}", details.level);
        }
    }

    let filtered: Vec<_> = filter_by_skin_name(&equipped, query)
        .into_iter()
        .cloned()
        .collect();
    for (category, weapons) in group_by_category(&filtered) {
        println!();
        println!("{}", category);
        for weapon in weapons {
            let tags = metadata_tags(weapon);
            if tags.is_empty() {
                println!("  {:<12} {}", weapon.weapon_name, weapon.skin_name);
            } else {
                println!(
                    "  {:<12} {} [{}]",
                    weapon.weapon_name,
                    weapon.skin_name,
                    tags.join(", ")
                );
            }
        }
    }

    let sprays = resolve_sprays(&loadout.sprays, snapshot);
    if !sprays.is_empty() {
        println!();
        println!("Sprays");
        for spray in sprays {
            println!("  {:<12} {}", spray_slot_label(&spray.slot), spray.name);
        }
    }

    Ok(())
}

fn print_collection(catalog: &CatalogCache, section: EquipSection, query: &str) {
    let mut items = build_display_items(section, catalog.snapshot());
    sort_items(&mut items);

    let matching = filter_items(&items, query);
    println!("{} ({} of {})", section.label(), matching.len(), items.len());
    for item in matching {
        if item.subtitle.is_empty() {
            println!("  {}", item.display_name);
        } else {
            println!("  {}  ({})", item.display_name, item.subtitle);
        }
    }
}
