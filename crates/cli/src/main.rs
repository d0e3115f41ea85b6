use anyhow::{bail, Context, Result};
use doudizhu_core::{
    Event, Game, GameConfig, GameOutcome, GameRecord, GreedyPolicy, Policy, RandomPolicy, Role,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyKind {
    Greedy,
    Random,
}

impl PolicyKind {
    fn from_opt(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "greedy" => Some(Self::Greedy),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Random => "random",
        }
    }
}

#[derive(Debug, Clone)]
struct CliOptions {
    seed: Option<u64>,
    games: u32,
    config: Option<PathBuf>,
    record: Option<PathBuf>,
    policy: PolicyKind,
    verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: None,
            games: 1,
            config: None,
            record: None,
            policy: PolicyKind::Greedy,
            verbose: false,
        }
    }
}

const USAGE: &str = "usage: doudizhu [--seed N] [--games N] [--config PATH] [--record PATH] \
[--policy greedy|random] [--verbose]";

fn parse_cli_options(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        let value = args.get(idx + 1);
        match flag {
            "--verbose" | "-v" => options.verbose = true,
            "--seed" | "--games" | "--config" | "--record" | "--policy" => {
                let Some(value) = value else {
                    bail!("{flag} needs a value\n{USAGE}");
                };
                match flag {
                    "--seed" => {
                        options.seed = Some(
                            value
                                .parse::<u64>()
                                .with_context(|| format!("invalid seed '{value}'"))?,
                        );
                    }
                    "--games" => {
                        options.games = value
                            .parse::<u32>()
                            .with_context(|| format!("invalid game count '{value}'"))?;
                    }
                    "--config" => options.config = Some(PathBuf::from(value)),
                    "--record" => options.record = Some(PathBuf::from(value)),
                    _ => {
                        options.policy = PolicyKind::from_opt(value)
                            .with_context(|| format!("unknown policy '{value}'"))?;
                    }
                }
                idx += 1;
            }
            "--help" | "-h" => bail!("{USAGE}"),
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
        idx += 1;
    }
    Ok(options)
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&body)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("checking config {}", path.display()))?;
    Ok(config)
}

fn save_record(record: &GameRecord, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(record).context("encoding game record")?;
    fs::write(path, body).with_context(|| format!("writing record {}", path.display()))
}

fn build_policies(kind: PolicyKind, seed: u64) -> Vec<Box<dyn Policy>> {
    (0..3u64)
        .map(|seat| -> Box<dyn Policy> {
            match kind {
                PolicyKind::Greedy => Box::new(GreedyPolicy),
                PolicyKind::Random => Box::new(RandomPolicy::new(seed.wrapping_add(seat + 1))),
            }
        })
        .collect()
}

fn play_game(config: GameConfig, kind: PolicyKind) -> Result<(Game, GameOutcome)> {
    let seed = config.seed;
    let mut game = Game::deal(config).with_context(|| format!("dealing game {seed}"))?;
    let mut policies = build_policies(kind, seed);
    let outcome = game
        .run(&mut policies)
        .with_context(|| format!("playing game {seed}"))?;
    Ok((game, outcome))
}

fn print_summary(game: &Game, outcome: &GameOutcome) {
    println!("seed: {}", game.config().seed);
    match outcome.winner {
        Some(seat) => println!("winner: player {} after {} turns", seat, outcome.turns),
        None => println!("no winner after {} turns", outcome.turns),
    }
    println!("payoff: {:?}", outcome.payoff);
    for player in game.players() {
        let role = match player.role {
            Role::Landlord => "landlord",
            Role::Peasant => "peasant",
        };
        println!("player {} ({}): {}", player.id, role, player.hand.encoding());
    }
    for (idx, turn) in game.round().history().iter().enumerate() {
        println!("{:>3}. player {}: {}", idx + 1, turn.player, turn.action);
    }
}

fn print_events(game: &mut Game) {
    for event in game.events.drain() {
        match event {
            Event::ActionReplaced {
                player,
                attempted,
                fallback,
            } => println!("event: player {player} tried {attempted}, played {fallback}"),
            other => println!("event: {:?}", other),
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let default_filter = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut base = match &options.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = options.seed {
        base.seed = seed;
    }
    log::info!(
        "playing {} game(s) from seed {} with {} policy",
        options.games,
        base.seed,
        options.policy.label()
    );

    let mut last_record = None;
    for offset in 0..options.games {
        let mut config = base.clone();
        config.seed = base.seed.wrapping_add(u64::from(offset));
        let (mut game, outcome) = play_game(config, options.policy)?;
        if offset > 0 {
            println!();
        }
        print_summary(&game, &outcome);
        if options.verbose {
            print_events(&mut game);
        }
        last_record = Some(game.record());
    }

    if let (Some(path), Some(record)) = (&options.record, &last_record) {
        save_record(record, path)?;
        println!("record written to {}", path.display());
    }
    Ok(())
}
