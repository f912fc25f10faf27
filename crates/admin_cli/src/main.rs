use std::error::Error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{BudgetType, Engine, EngineError, NewBudgetEntry, StatsFilter};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "budget_admin")]
#[command(about = "Admin utilities for the budget store (authors, entries, stats)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./budget.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Author(Author),
    Budget(Budget),
    /// Print the statistics of a year as JSON.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct Author {
    #[command(subcommand)]
    command: AuthorCommand,
}

#[derive(Subcommand, Debug)]
enum AuthorCommand {
    Create(AuthorCreateArgs),
}

#[derive(Args, Debug)]
struct AuthorCreateArgs {
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
struct Budget {
    #[command(subcommand)]
    command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    Add(BudgetAddArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    Income,
    Expense,
}

impl From<TypeArg> for BudgetType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Income => BudgetType::Income,
            TypeArg::Expense => BudgetType::Expense,
        }
    }
}

#[derive(Args, Debug)]
struct BudgetAddArgs {
    #[arg(long)]
    year: i32,
    #[arg(long, allow_hyphen_values = true)]
    month: i32,
    /// Amount in minor units.
    #[arg(long)]
    amount: i64,
    #[arg(long = "type", value_enum)]
    kind: TypeArg,
    #[arg(long)]
    author_id: Option<i32>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(long)]
    year: i32,
    #[arg(long)]
    author_name: Option<String>,
    #[arg(long, default_value_t = 100)]
    limit: u64,
    #[arg(long, default_value_t = 0)]
    offset: u64,
}

impl From<StatsArgs> for StatsFilter {
    fn from(args: StatsArgs) -> Self {
        let filter = StatsFilter::new(args.year, args.limit, args.offset);
        match args.author_name {
            Some(name) => filter.author_name(name),
            None => filter,
        }
    }
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Validation errors are the operator's fault: report them and exit 2.
fn exit_on_validation(err: EngineError) -> Box<dyn Error + Send + Sync> {
    if err.is_validation() {
        eprintln!("{err}");
        std::process::exit(2);
    }
    err.into()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Author(Author {
            command: AuthorCommand::Create(args),
        }) => {
            let author = engine
                .create_author(&args.name)
                .await
                .map_err(exit_on_validation)?;
            println!("created author: {} ({})", author.name, author.id);
        }
        Command::Budget(Budget {
            command: BudgetCommand::Add(args),
        }) => {
            let mut cmd = NewBudgetEntry::new(args.year, args.month, args.amount, args.kind.into());
            if let Some(author_id) = args.author_id {
                cmd = cmd.author_id(author_id);
            }
            let entry = match engine.create_budget_entry(cmd).await {
                Ok(entry) => entry,
                Err(EngineError::KeyNotFound(key)) => {
                    eprintln!("not found: {key}");
                    std::process::exit(1);
                }
                Err(err) => return Err(exit_on_validation(err)),
            };
            println!(
                "created entry {}: {}-{:02} {} {}",
                entry.id, entry.year, entry.month, entry.kind, entry.amount
            );
        }
        Command::Stats(args) => {
            let stats = engine.year_stats(&StatsFilter::from(args)).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
