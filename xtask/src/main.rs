//! See <https://github.com/matklad/cargo-xtask/>
//!
//! This binary defines auxiliary commands that are not expressible with
//! just `cargo`. It is invoked through the `cargo xtask` alias in
//! `.cargo/config.toml`.

use clap::Parser;

mod dynamodb;
mod prelude;

/// Development tasks for the filedrop repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for filedrop", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage the DynamoDB records table
    Dynamodb(dynamodb::DynamodbCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dynamodb(dynamodb_cmd) => {
            dynamodb::run(dynamodb_cmd, cli.global).await?;
        }
    }

    Ok(())
}
