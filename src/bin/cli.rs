//! jsonstore CLI
//!
//! Inspect and edit a store directory of arbitrary JSON values.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsonstore::{Storage, StoreConfig, StoreError};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// jsonstore CLI
#[derive(Parser, Debug)]
#[command(name = "jsonstore")]
#[command(about = "Inspect and edit a file-per-entry JSON store")]
#[command(version)]
struct Args {
    /// Store directory
    #[arg(short, long, default_value = jsonstore::config::DEFAULT_DIR)]
    dir: String,

    /// Pretty-print JSON written to disk
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// The key to get
        key: String,
    },

    /// Store a JSON value under a key
    Put {
        /// The key to set
        key: String,

        /// The value, as JSON text (e.g. '{"a":1}' or '"text"')
        value: String,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },

    /// Print every entry as key<TAB>value
    List,

    /// Print the file a key maps to
    Path {
        /// The key to locate
        key: String,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for values
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,jsonstore=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = StoreConfig::builder()
        .dir(&args.dir)
        .pretty(args.pretty)
        .build();
    let store: Storage<Value> = Storage::open(config);

    tracing::debug!("jsonstore v{} at {}", jsonstore::VERSION, args.dir);

    match run(&store, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(StoreError::NotExist(key)) => {
            tracing::error!("No such key: {}", key);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(store: &Storage<Value>, command: Commands) -> Result<(), StoreError> {
    match command {
        Commands::Get { key } => {
            let value = store.get(&key)?;
            println!("{}", value);
        }
        Commands::Put { key, value } => {
            let value: Value = match serde_json::from_str(&value) {
                Ok(v) => v,
                Err(e) => {
                    // Bare words are stored as strings
                    tracing::debug!("value is not JSON ({}), storing as string", e);
                    Value::String(value)
                }
            };
            store.put(&key, &value)?;
            tracing::info!("Stored {}", store.path_for(&key).display());
        }
        Commands::Delete { key } => {
            store.delete(&key)?;
        }
        Commands::List => {
            store.range(|key, value| {
                println!("{}\t{}", key, value);
                Ok::<(), StoreError>(())
            })?;
        }
        Commands::Path { key } => {
            println!("{}", store.path_for(&key).display());
        }
    }
    Ok(())
}
