//! Prime CLI - drive the transfer flows against a development node
//!
//! ```bash
//! prime accounts                     # Detect the authorized account
//! prime history                      # List recorded transfers
//! prime count                        # Cached and on-chain transfer count
//! prime connect                      # Request wallet accounts
//! prime send --to 0x... --amount 0.1 --message "lunch" --keyword pizza
//! ```
//!
//! The node must serve unlocked accounts (anvil, hardhat, ganache).
//! Settings come from `PRIME_RPC_URL`, `PRIME_CACHE_DIR` and `PRIME_POLL_MS`.

use std::rc::Rc;

use clap::{Parser, Subcommand};
use prime::eth::{Eip1193Contract, Eip1193Wallet, HttpTransport};
use prime::{
    Config, ConfigError, ConnectOutcome, FileCountCache, FormField, Notifier, SubmitOutcome,
    TransactionOrchestrator, CONTRACT_ADDRESS,
};

type NodeOrchestrator =
    TransactionOrchestrator<Eip1193Wallet<HttpTransport>, Eip1193Contract<HttpTransport>>;

#[derive(Parser)]
#[command(name = "prime")]
#[command(about = "Send ether and record transfers on the Prime transactions contract", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the authorized account
    Accounts,

    /// List recorded transfers
    History,

    /// Show cached and on-chain transfer count
    Count,

    /// Request wallet accounts
    Connect,

    /// Send ether and record the transfer
    Send {
        /// Recipient address
        #[arg(short, long)]
        to: String,

        /// Amount in ETH (e.g. 0.01)
        #[arg(short, long)]
        amount: String,

        /// Message stored with the transfer
        #[arg(short, long)]
        message: String,

        /// Keyword stored with the transfer
        #[arg(short, long)]
        keyword: String,
    },
}

/// Prints notices on stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn blocking_notice(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match Config::from_env() {
        Ok(config) => run(cli.command, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn build(config: &Config) -> Result<NodeOrchestrator, ConfigError> {
    let transport = Rc::new(HttpTransport::new(&config.rpc_url)?);
    Ok(TransactionOrchestrator::new(
        Eip1193Wallet::new(transport.clone()),
        Eip1193Contract::new(transport, CONTRACT_ADDRESS).with_poll_interval(config.poll_interval),
        FileCountCache::with_dir(&config.cache_dir),
        ConsoleNotifier,
    ))
}

async fn run(command: Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build(config)?;
    eprintln!("🔗 Node: {}", config.rpc_url);
    eprintln!("📄 Contract: {}", CONTRACT_ADDRESS.to_checksum(None));

    match command {
        Commands::Accounts => cmd_accounts(&orchestrator).await,
        Commands::History => cmd_history(&orchestrator).await,
        Commands::Count => cmd_count(&orchestrator).await,
        Commands::Connect => cmd_connect(&orchestrator).await,
        Commands::Send { to, amount, message, keyword } => {
            cmd_send(&orchestrator, &to, &amount, &message, &keyword).await
        }
    }
}

async fn cmd_accounts(orchestrator: &NodeOrchestrator) -> Result<(), Box<dyn std::error::Error>> {
    orchestrator.startup().await;
    match orchestrator.store().current_account() {
        Some(account) => println!("{}", account),
        None => eprintln!("No authorized account"),
    }
    Ok(())
}

async fn cmd_history(orchestrator: &NodeOrchestrator) -> Result<(), Box<dyn std::error::Error>> {
    orchestrator.startup().await;
    let state = orchestrator.store().snapshot();
    if state.current_account.is_none() {
        eprintln!("No authorized account, history not loaded");
        return Ok(());
    }

    for record in state.transactions.iter().rev() {
        println!(
            "{}  {} → {}  {} ETH  [{}] {}",
            record.timestamp,
            record.address_from.short(),
            record.address_to.short(),
            record.amount,
            record.keyword,
            record.message,
        );
    }
    eprintln!("✅ {} transfers", state.transactions.len());
    Ok(())
}

async fn cmd_count(orchestrator: &NodeOrchestrator) -> Result<(), Box<dyn std::error::Error>> {
    let cached = orchestrator.store().transaction_count();
    eprintln!(
        "   Cached: {}",
        cached.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string())
    );

    let count = orchestrator
        .prime_count()
        .await
        .ok_or("could not read the transfer count from the contract")?;
    println!("{}", count);
    Ok(())
}

async fn cmd_connect(orchestrator: &NodeOrchestrator) -> Result<(), Box<dyn std::error::Error>> {
    match orchestrator.connect().await? {
        ConnectOutcome::Connected(account) => println!("{}", account),
        ConnectOutcome::NoAccounts => eprintln!("The node returned no accounts"),
        ConnectOutcome::WalletMissing => {}
    }
    Ok(())
}

async fn cmd_send(
    orchestrator: &NodeOrchestrator,
    to: &str,
    amount: &str,
    message: &str,
    keyword: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let ConnectOutcome::NoAccounts = orchestrator.connect().await? {
        return Err("the node returned no accounts to send from".into());
    }

    orchestrator.set_field(FormField::AddressTo, to);
    orchestrator.set_field(FormField::Amount, amount);
    orchestrator.set_field(FormField::Message, message);
    orchestrator.set_field(FormField::Keyword, keyword);

    match orchestrator.submit_transfer().await? {
        SubmitOutcome::Confirmed { transfer_hash, record_hash, transaction_count } => {
            eprintln!("   Transfer: {}", transfer_hash);
            eprintln!("   Record:   {}", record_hash);
            if let Some(count) = transaction_count {
                println!("{}", count);
            }
        }
        SubmitOutcome::WalletMissing => {}
    }
    Ok(())
}
