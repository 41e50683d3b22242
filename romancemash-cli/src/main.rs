mod config;
mod output;
mod prompt;
mod store;

use clap::Parser;
use romancemash_core::constants::{DEFAULT_EXPORT_FILE_NAME, DEFAULT_TOP_N};
use romancemash_core::{BucketKey, Catalog, Category, Context, KeyValueStore, Session, Winner};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::prompt::{Choice, build_prompt, is_yes, parse_choice};
use crate::store::FileStore;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "romancemash", version, about = "Rank romance films by pairwise duels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: ~/.config/romancemash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved votes and rankings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create a default config file at ~/.config/romancemash/config.toml
    Init,
    /// List items, categories and contexts
    List,
    /// Interactive duels: pick the film you prefer, again and again
    Duel(BucketArgs),
    /// Record a single vote
    Vote(VoteArgs),
    /// Show the leaderboard for a category and context
    Top(TopArgs),
    /// Export the vote log as CSV
    Export(ExportArgs),
    /// Erase all rankings and votes
    Reset(ResetArgs),
}

#[derive(clap::Args)]
struct BucketArgs {
    /// Category code: CL, RC, DR, IN, CI
    #[arg(long)]
    category: Option<Category>,

    /// Context code: CITA, LLORAR, LIGERO, INOLV
    #[arg(long)]
    context: Option<Context>,
}

#[derive(clap::Args)]
struct VoteArgs {
    #[command(flatten)]
    bucket: BucketArgs,

    /// First item of the duel
    #[arg(long)]
    a: String,

    /// Second item of the duel
    #[arg(long)]
    b: String,

    /// Which side won: "a" or "b"
    #[arg(long)]
    winner: Winner,
}

#[derive(clap::Args)]
struct TopArgs {
    #[command(flatten)]
    bucket: BucketArgs,

    /// Number of rows to show
    #[arg(short)]
    n: Option<usize>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Output path (default: romancemash_votos.csv)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

/// Config merged with CLI flags (CLI wins).
struct Settings {
    data_dir: PathBuf,
    catalog: Catalog,
    category: Category,
    context: Context,
    top_n: usize,
}

impl Settings {
    fn resolve(cli: &Cli) -> Self {
        let config_path = cli.config.clone().unwrap_or_else(config::config_path);
        let cfg = config::load_config(&config_path);

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| cfg.data_dir.as_deref().map(config::expand_home))
            .unwrap_or_else(config::default_data_dir);

        let catalog = match cfg.items {
            Some(items) => Catalog::new(items).unwrap_or_else(|e| {
                bail(format!("Bad item list in {}: {e}", config_path.display()))
            }),
            None => Catalog::default(),
        };

        let category = match cfg.default_category.as_deref() {
            Some(code) => code.parse::<Category>().unwrap_or_else(|e| bail(e)),
            None => Category::default(),
        };
        let context = match cfg.default_context.as_deref() {
            Some(code) => code.parse::<Context>().unwrap_or_else(|e| bail(e)),
            None => Context::default(),
        };

        Settings {
            data_dir,
            catalog,
            category,
            context,
            top_n: cfg.top_n.unwrap_or(DEFAULT_TOP_N),
        }
    }

    fn bucket(&self, args: &BucketArgs) -> BucketKey {
        BucketKey::new(
            args.category.unwrap_or(self.category),
            args.context.unwrap_or(self.context),
        )
    }

    fn open_session(&self) -> Session<FileStore> {
        let backend = FileStore::open(&self.data_dir).unwrap_or_else(|e| {
            bail(format!("Failed to open data directory {}: {e}", self.data_dir.display()))
        });
        tracing::debug!(data_dir = %self.data_dir.display(), items = self.catalog.len(), "Opening session");
        Session::open(backend, self.catalog.clone())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Init => {
            let path = cli.config.clone().unwrap_or_else(config::config_path);
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your data directory, film list, defaults, etc.");
        }
        Commands::List => output::print_registries(&Settings::resolve(&cli).catalog),
        Commands::Duel(args) => {
            let settings = Settings::resolve(&cli);
            run_duel(&settings, settings.bucket(args));
        }
        Commands::Vote(args) => run_vote(&Settings::resolve(&cli), args),
        Commands::Top(args) => run_top(&Settings::resolve(&cli), args),
        Commands::Export(args) => run_export(&Settings::resolve(&cli), args),
        Commands::Reset(args) => run_reset(&Settings::resolve(&cli), args),
    }
}

fn read_line(stdin: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => bail(format!("Failed to read from stdin: {e}")),
    }
}

fn show_top<S: KeyValueStore>(session: &Session<S>, key: BucketKey, n: usize) {
    let rows = session.top_n(key.category, key.context, n);
    output::print_table(key, &rows, session.state().votes().len());
}

fn run_duel(settings: &Settings, key: BucketKey) {
    let mut session = settings.open_session();
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    println!("{} / {}", key.category.label(), key.context.label());

    let (a, b) = session.pick_pair();
    let (mut item_a, mut item_b) = (a.to_string(), b.to_string());

    loop {
        print!("{}", build_prompt(key.context, &item_a, &item_b));
        let _ = io::stdout().flush();

        let Some(line) = read_line(&mut stdin) else {
            println!();
            break;
        };

        match parse_choice(&line) {
            Some(Choice::Vote(winner)) => {
                session
                    .record_vote(key.category, key.context, &item_a, &item_b, winner)
                    .unwrap_or_else(|e| bail(format!("Failed to record vote: {e}")));
                println!();
                show_top(&session, key, settings.top_n);
            }
            Some(Choice::NewPair) => {}
            Some(Choice::ShowTop) => {
                println!();
                show_top(&session, key, settings.top_n);
                continue;
            }
            Some(Choice::Quit) => break,
            None => {
                eprintln!("Type a, b, n, t or q.");
                continue;
            }
        }

        let (a, b) = session.pick_pair();
        item_a = a.to_string();
        item_b = b.to_string();
    }
}

fn run_vote(settings: &Settings, args: &VoteArgs) {
    let key = settings.bucket(&args.bucket);
    let mut session = settings.open_session();

    let vote = session
        .record_vote(key.category, key.context, &args.a, &args.b, args.winner)
        .unwrap_or_else(|e| bail(format!("Failed to record vote: {e}")));
    println!("Recorded: {} beats {} ({key})", vote.winner, vote.loser);
}

fn run_top(settings: &Settings, args: &TopArgs) {
    let key = settings.bucket(&args.bucket);
    let n = args.n.unwrap_or(settings.top_n);
    let session = settings.open_session();
    let rows = session.top_n(key.category, key.context, n);
    let total_votes = session.state().votes().len();

    if args.json {
        println!("{}", output::format_json(key, &rows, total_votes));
    } else {
        output::print_table(key, &rows, total_votes);
    }
}

fn run_export(settings: &Settings, args: &ExportArgs) {
    let session = settings.open_session();
    let Some(csv) = session.export_csv() else {
        println!("No votes to export yet.");
        return;
    };

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
    std::fs::write(&path, csv)
        .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", path.display())));
    println!(
        "Exported {} votes to {}",
        session.state().votes().len(),
        path.display()
    );
}

fn run_reset(settings: &Settings, args: &ResetArgs) {
    if !args.yes {
        print!("This erases every ranking and vote saved in {}. Continue? [y/N] ", settings.data_dir.display());
        let _ = io::stdout().flush();
        let answer = read_line(&mut io::stdin().lock()).unwrap_or_default();
        if !is_yes(&answer) {
            println!("Nothing changed.");
            return;
        }
    }

    let mut session = settings.open_session();
    session
        .reset()
        .unwrap_or_else(|e| bail(format!("Failed to reset: {e}")));
    println!("All rankings and votes erased.");
}
