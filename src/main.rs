//! Withdrawal wallet CLI
//!
//! Command-line interface over the local-key wallet: import a secret, check
//! the withdrawal balance, and produce the widget handoff parameters.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use withdraw_wallet::{Config, Result};

#[derive(Parser)]
#[command(name = "withdraw-wallet")]
#[command(about = "Wallet and balance service for hosted token withdrawals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a pasted secret key into the secret store
    ImportKey {
        /// Read the secret from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the wallet address resolved from the stored secret
    Address,

    /// Show the withdrawal token balance
    Balance {
        /// Mint to query (defaults to the configured withdrawal mint)
        #[arg(long)]
        mint: Option<String>,

        /// Skip the settle delay before the fetch
        #[arg(long)]
        no_wait: bool,
    },

    /// Print the widget handoff parameters for a withdrawal session
    Withdraw,

    /// Remove the stored secret
    ClearKey,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load config
    let config = if let Some(config_path) = cli.config {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| withdraw_wallet::Error::Config(e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| withdraw_wallet::Error::Config(e.to_string()))?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::ImportKey { file } => {
            run_import_key(&config, file)?;
        }
        Commands::Address => {
            run_address(&config)?;
        }
        Commands::Balance { mint, no_wait } => {
            run_balance(&config, mint, no_wait).await?;
        }
        Commands::Withdraw => {
            run_withdraw(&config)?;
        }
        Commands::ClearKey => {
            run_clear_key(&config)?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config).unwrap());
        }
    }

    Ok(())
}

/// Build the local-key wallet from the configured store and cluster.
fn local_wallet(config: &Config) -> Result<withdraw_wallet::LocalKeyWalletAdapter> {
    use withdraw_wallet::{LocalKeyWalletAdapter, RpcConfig, SecretStore};

    let store = SecretStore::open(&config.secret_store_path);
    let connection = RpcConfig::from_env().connection(config.cluster)?;

    Ok(LocalKeyWalletAdapter::new(store, connection))
}

fn run_import_key(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let mut wallet = local_wallet(config)?;

    match wallet.import_secret(text.trim())? {
        Some(address) => println!("Imported key for {}", address),
        None => println!("Secret not recognized; nothing was stored"),
    }

    Ok(())
}

fn run_address(config: &Config) -> Result<()> {
    use withdraw_wallet::WalletAdapter;

    let wallet = local_wallet(config)?;

    match wallet.public_key() {
        Some(address) => println!("{}", address),
        None => println!("Not connected - import a key first"),
    }

    Ok(())
}

async fn run_balance(config: &Config, mint: Option<String>, no_wait: bool) -> Result<()> {
    use solana_sdk::pubkey::Pubkey;
    use withdraw_wallet::{balance, tokens, WalletAdapter};

    let wallet = local_wallet(config)?;

    let Some(owner) = wallet.public_key() else {
        println!("Not connected - import a key first");
        return Ok(());
    };

    let mint = match mint {
        Some(raw) => Pubkey::from_str(&raw)
            .map_err(|e| withdraw_wallet::Error::InvalidArgument(format!("Invalid mint: {}", e)))?,
        None => config.withdraw_mint_pubkey()?,
    };

    let connection = wallet.connection();
    let amount = if no_wait {
        balance::token_balance(&connection, &owner, &mint).await
    } else {
        balance::settled_token_balance(&connection, &owner, &mint).await
    };

    let registry = tokens::registry();
    let symbol = registry
        .get(&mint)
        .map(|info| info.symbol)
        .unwrap_or("tokens");

    println!("{}", tokens::format_amount_label(amount, symbol));
    if registry.is_stablecoin(&mint) {
        println!("{}", tokens::format_currency(amount));
    }

    Ok(())
}

fn run_withdraw(config: &Config) -> Result<()> {
    use withdraw_wallet::WithdrawSession;

    let wallet = local_wallet(config)?;

    let Some(session) = WithdrawSession::start(&wallet, &config.widget) else {
        println!("Not connected - import a key first");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&session.params())?);
    Ok(())
}

fn run_clear_key(config: &Config) -> Result<()> {
    use withdraw_wallet::SecretStore;

    SecretStore::open(&config.secret_store_path).clear()?;
    println!("Secret store cleared");
    Ok(())
}
