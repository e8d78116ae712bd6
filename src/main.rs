use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod auth;
use firescrypt::{HashConfig, SALT_LEN, ScryptCost, generate_salt};
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
struct HashArgs {
    /// Base64 encoded signer key of the project
    #[arg(long, value_name = "B64", env = "FIRESCRYPT_SIGNER_KEY", hide_env_values = true)]
    signer_key: String,

    /// Base64 encoded salt separator of the project
    #[arg(long, value_name = "B64", env = "FIRESCRYPT_SALT_SEPARATOR", hide_env_values = true)]
    salt_separator: String,

    /// scrypt rounds (default: 8)
    #[arg(long, env = "FIRESCRYPT_ROUNDS")]
    rounds: Option<u32>,

    /// scrypt memory cost exponent (default: 14)
    #[arg(long, env = "FIRESCRYPT_MEM_COST")]
    mem_cost: Option<u32>,
}

impl HashArgs {
    fn to_config(&self) -> Result<HashConfig> {
        let default = ScryptCost::default();

        HashConfig::try_new(
            &self.signer_key,
            &self.salt_separator,
            self.rounds.unwrap_or(default.rounds()),
            self.mem_cost.unwrap_or(default.mem_cost()),
        )
        .context("invalid hash configuration")
    }
}

#[derive(Debug, Parser)]
#[command(name = "firescrypt")]
#[command(
    version,
    about = "Hash and verify passwords with Firebase's modified scrypt."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password
    Hash {
        #[command(flatten)]
        config: HashArgs,

        /// Base64 encoded per-user salt
        #[arg(long, value_name = "B64")]
        salt: String,
    },

    /// Checks a password against a stored hash
    Verify {
        #[command(flatten)]
        config: HashArgs,

        /// Base64 encoded per-user salt
        #[arg(long, value_name = "B64")]
        salt: String,

        /// Base64 encoded stored hash
        #[arg(long, value_name = "B64")]
        hash: String,
    },

    /// Generates a random base64 encoded salt
    Salt {
        /// Salt length in bytes
        #[arg(long, default_value_t = SALT_LEN)]
        len: usize,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Hash { config, salt } => {
            let config = config.to_config()?;
            let password = auth::read_password()?;
            let hash = config
                .encode(&password, &salt)
                .context("failed to hash password")?;
            println!("{hash}");
        }
        Commands::Verify { config, salt, hash } => {
            let config = config.to_config()?;
            let password = auth::read_password()?;
            if config.verify(&password, &hash, &salt) {
                println!("password matches");
            } else {
                println!("password does not match");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Salt { len } => {
            println!("{}", generate_salt(len)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
