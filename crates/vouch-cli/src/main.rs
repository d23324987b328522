//! Vouch CLI
//!
//! Command-line interface for the vouch credential registry.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "vouch")]
#[command(author, version, about = "Vouch: credential type & issuance registry", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Registry URL used by client commands
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:3000",
        env = "VOUCH_URL"
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry server
    Server {
        /// Address to bind to
        #[arg(short, long, default_value = "0.0.0.0:3000", env = "VOUCH_BIND")]
        bind: String,
    },

    /// Credential type operations
    Type {
        #[command(subcommand)]
        action: TypeAction,
    },

    /// Credential operations
    Credential {
        #[command(subcommand)]
        action: CredentialAction,
    },

    /// Identity helpers
    Identity {
        #[command(subcommand)]
        action: IdentityAction,
    },

    /// Show configuration and status
    Status,
}

#[derive(Subcommand)]
enum TypeAction {
    /// Register a new credential type
    Register {
        /// Display name of the type
        #[arg(short, long)]
        name: String,

        /// Creator identity (20-byte hex)
        #[arg(short, long)]
        creator: String,
    },

    /// Show a registered type
    Show {
        /// Type id (32-byte hex)
        type_id: String,
    },
}

#[derive(Subcommand)]
enum CredentialAction {
    /// Assign a credential to a recipient
    Assign {
        /// Recipient identity (20-byte hex)
        #[arg(short, long)]
        recipient: String,

        /// Type id of the credential (32-byte hex)
        #[arg(short, long)]
        type_id: String,

        /// Off-chain metadata reference (32-byte hex)
        #[arg(short, long)]
        metadata: String,

        /// Issuer identity (20-byte hex)
        #[arg(short, long)]
        issuer: String,
    },

    /// List a recipient's credentials in issuance order
    List {
        /// Owner identity (20-byte hex)
        owner: String,
    },
}

#[derive(Subcommand)]
enum IdentityAction {
    /// Mint a random identity
    New,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("vouch={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Server { bind } => {
            commands::server::run(bind).await?;
        }
        Commands::Type { action } => match action {
            TypeAction::Register { name, creator } => {
                commands::types::register(&cli.url, &name, &creator).await?;
            }
            TypeAction::Show { type_id } => {
                commands::types::show(&cli.url, &type_id).await?;
            }
        },
        Commands::Credential { action } => match action {
            CredentialAction::Assign {
                recipient,
                type_id,
                metadata,
                issuer,
            } => {
                commands::credential::assign(&cli.url, &recipient, &type_id, &metadata, &issuer)
                    .await?;
            }
            CredentialAction::List { owner } => {
                commands::credential::list(&cli.url, &owner).await?;
            }
        },
        Commands::Identity { action } => match action {
            IdentityAction::New => {
                commands::identity::new();
            }
        },
        Commands::Status => {
            commands::status::show(&cli.url).await?;
        }
    }

    Ok(())
}
