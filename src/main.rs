use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;
use user_registration::application::registration::RegistrationService;
use user_registration::domain::client::Client;
use user_registration::domain::ports::{ClientDirectoryBox, UserStoreBox};
use user_registration::domain::validation::RegistrationPolicy;
use user_registration::infrastructure::clock::SystemClock;
use user_registration::infrastructure::in_memory::{
    InMemoryClientDirectory, InMemoryCreditScoring, InMemoryUserStore,
};
use user_registration::interfaces::csv::decision_writer::{DecisionRecord, DecisionWriter};
use user_registration::interfaces::csv::request_reader::RequestReader;
use user_registration::interfaces::csv::seed_reader::{read_clients, read_scores};

/// Registers users from a CSV file and prints one decision per request.
///
/// Output columns are `email,outcome,reason,credit_limit`. `outcome` is
/// `registered`, `rejected` (reason names the failed rule) or `error` (a
/// collaborator failed; reason holds the message). Rows that cannot be parsed
/// produce no output and are logged to stderr.
#[derive(Parser)]
#[command(author, version)]
struct Cli {
    /// Registration requests CSV file
    input: PathBuf,

    /// Clients CSV file (id,name,type)
    #[arg(long)]
    clients: PathBuf,

    /// Credit scores CSV file (last_name,score)
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Score used for last names missing from the scores file
    #[arg(long)]
    default_score: Option<i64>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Minimum age in full years
    #[arg(long)]
    minimum_age: Option<u32>,

    /// Credit limits below this value are rejected
    #[arg(long)]
    minimum_credit_limit: Option<Decimal>,
}

impl Cli {
    fn policy(&self) -> RegistrationPolicy {
        let defaults = RegistrationPolicy::default();
        RegistrationPolicy {
            minimum_age: self.minimum_age.unwrap_or(defaults.minimum_age),
            minimum_credit_limit: self
                .minimum_credit_limit
                .unwrap_or(defaults.minimum_credit_limit),
        }
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_stores(
    db_path: Option<&PathBuf>,
    clients: Vec<Client>,
) -> Result<(ClientDirectoryBox, UserStoreBox)> {
    use user_registration::infrastructure::rocksdb::RocksDBStore;

    match db_path {
        Some(path) => {
            let store = RocksDBStore::open(path).into_diagnostic()?;
            for client in &clients {
                store.put_client(client).into_diagnostic()?;
            }
            let directory: ClientDirectoryBox = Box::new(store.clone());
            let users: UserStoreBox = Box::new(store);
            Ok((directory, users))
        }
        None => Ok(in_memory_stores(clients)),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_stores(
    db_path: Option<&PathBuf>,
    clients: Vec<Client>,
) -> Result<(ClientDirectoryBox, UserStoreBox)> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(in_memory_stores(clients))
}

fn in_memory_stores(clients: Vec<Client>) -> (ClientDirectoryBox, UserStoreBox) {
    let directory: ClientDirectoryBox = Box::new(InMemoryClientDirectory::with_clients(clients));
    let users: UserStoreBox = Box::new(InMemoryUserStore::new());
    (directory, users)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let clients = read_clients(File::open(&cli.clients).into_diagnostic()?).into_diagnostic()?;
    let mut scoring = match &cli.scores {
        Some(path) => {
            let scores = read_scores(File::open(path).into_diagnostic()?).into_diagnostic()?;
            InMemoryCreditScoring::with_scores(scores)
        }
        None => InMemoryCreditScoring::new(),
    };
    if let Some(score) = cli.default_score {
        scoring = scoring.with_default_score(score);
    }

    let (directory, users) = open_stores(cli.db_path.as_ref(), clients)?;
    let service =
        RegistrationService::new(directory, Box::new(scoring), users, Box::new(SystemClock))
            .with_policy(cli.policy());

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock());

    let file = File::open(&cli.input).into_diagnostic()?;
    for request in RequestReader::new(file).requests() {
        match request {
            Ok(request) => match service.register(&request) {
                Ok(outcome) => writer
                    .write(&DecisionRecord::new(&request, &outcome))
                    .into_diagnostic()?,
                Err(e) => {
                    error!("Error registering {}: {}", request.email, e);
                    writer
                        .write(&DecisionRecord::failed(&request, &e))
                        .into_diagnostic()?;
                }
            },
            Err(e) => error!("Error reading request: {}", e),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
