use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use xo::{
    visualize_grid, Game, HeuristicAi, Player, PlayerKind, Players, RandomAi, ResultCode,
    Strategy, Symbol, Table, TableParams,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    Random,
    Heuristic,
}

impl StrategyKind {
    fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomAi::seeded(seed)),
            StrategyKind::Heuristic => Box::new(HeuristicAi::seeded(seed)),
        }
    }
}

#[derive(Parser)]
struct Args {
    /// The two contesting strategies
    #[clap(num_args(2), value_delimiter = ' ')]
    strategies: Vec<StrategyKind>,

    /// Board dimension N
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// How many cells in a row are needed to win (K)
    #[arg(short, long, default_value_t = 3)]
    run_length: usize,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    ties: usize,
}

enum GameOutcome {
    WonByContestant { contestant_idx: usize },
    Tie,
}

fn play_game(
    rng: &mut StdRng,
    strategies: &mut [Box<dyn Strategy>],
    params: TableParams,
) -> anyhow::Result<GameOutcome> {
    // Assign the marks and the starting player randomly
    let mut marks = [Symbol::Cross, Symbol::Nought];
    if rng.gen::<bool>() {
        marks.swap(0, 1);
    }

    let players = Players::new(vec![
        Player::new(marks[0], PlayerKind::Ai),
        Player::new(marks[1], PlayerKind::Ai),
    ]);
    let mut game = Game::new(players, Table::new(params)?);

    loop {
        let symbol = game.current_player().symbol();
        let contestant_idx = if symbol == marks[0] { 0 } else { 1 };
        let (row, column) = strategies[contestant_idx].get_step(
            symbol,
            game.table().grid(),
            game.table().combinations(),
        )?;
        let code = game.step_result(row, column, symbol)?.code();
        match code {
            ResultCode::InProgress => {
                game.set_get_next_player();
            }
            ResultCode::Winner => {
                trace!("final board:\n{}", visualize_grid(game.table().grid()));
                return Ok(GameOutcome::WonByContestant { contestant_idx });
            }
            ResultCode::AllCellsUsed => {
                trace!("final board:\n{}", visualize_grid(game.table().grid()));
                return Ok(GameOutcome::Tie);
            }
        }
    }
}

fn play_matchup(
    strategy_kinds: [StrategyKind; 2],
    params: TableParams,
    num_games: usize,
    rng: &mut StdRng,
) -> anyhow::Result<MatchScore> {
    let mut strategies: Vec<Box<dyn Strategy>> = strategy_kinds
        .iter()
        .map(|kind| kind.build(rng.gen()))
        .collect();
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        match play_game(rng, &mut strategies, params)? {
            GameOutcome::WonByContestant { contestant_idx } => {
                debug!(winner = ?strategy_kinds[contestant_idx], game_idx);
                match_score.wins[contestant_idx] += 1;
            }
            GameOutcome::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
        }
    }
    Ok(match_score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let params = TableParams {
        size: args.size,
        run_length: args.run_length,
    };
    let strategy_kinds = [args.strategies[0], args.strategies[1]];

    let match_score = play_matchup(strategy_kinds, params, args.num_games, &mut rng)?;

    eprintln!(
        "End result:\n- {} wins by {:?}\n- {} wins by {:?}\n- {} ties",
        match_score.wins[0],
        strategy_kinds[0],
        match_score.wins[1],
        strategy_kinds[1],
        match_score.ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
