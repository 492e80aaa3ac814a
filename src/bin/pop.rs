use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use possession_proof::{
    DomainParameters, Identifier, KeyPair, Prover, ProtocolConfig, PublicKey, SecureRng, Verifier,
    WireProof, P256,
};
use sha2::Sha256;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "pop")]
#[command(about = "Proof of possession of a P-256 private key", long_about = None)]
#[command(version)]
struct Args {
    /// JSON protocol configuration file
    #[arg(short, long, env = "POP_CONFIG")]
    config: Option<PathBuf>,

    /// Longest identifier accepted, in bytes (overrides the config file)
    #[arg(long, env = "POP_MAX_IDENTIFIER_BYTES")]
    max_identifier_bytes: Option<usize>,

    /// Draws allowed when sampling a scalar (overrides the config file)
    #[arg(long, env = "POP_MAX_SAMPLING_ATTEMPTS")]
    max_sampling_attempts: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the curve domain parameters in decimal
    Params,
    /// Generate an ephemeral key pair and a proof bound to an identifier
    Prove {
        /// Identifier the proof is bound to
        #[arg(short, long)]
        identifier: String,
    },
    /// Verify a JSON wire proof
    Verify {
        /// Identifier the proof was bound to
        #[arg(short, long)]
        identifier: String,

        /// Expected public key, as its decimal x-coordinate
        #[arg(short, long)]
        public_key: String,

        /// Wire proof as a JSON object with R_x, s and public_key
        #[arg(long)]
        proof: String,
    },
}

fn print_colored(color: Color, text: &str) {
    let mut stdout = io::stdout();
    execute!(stdout, SetForegroundColor(color), Print(text), ResetColor).ok();
    stdout.flush().ok();
}

fn println_colored(color: Color, text: &str) {
    print_colored(color, text);
    println!();
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            println_colored(Color::Red, &format!("Error: {e}"));
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ProtocolConfig::from_file(path)?
        }
        None => ProtocolConfig::default(),
    };
    if let Some(max) = args.max_identifier_bytes {
        config.max_identifier_bytes = max;
    }
    if let Some(max) = args.max_sampling_attempts {
        config.max_sampling_attempts = max;
    }
    config.validate()?;
    let params = DomainParameters::<P256>::new();

    match args.command {
        Command::Params => {
            println_colored(Color::Cyan, &format!("Curve: {}", params.name()));
            println_colored(Color::White, &format!("  p  = {}", params.field_prime()));
            println_colored(Color::White, &format!("  n  = {}", params.order()));
            println_colored(Color::White, &format!("  Gx = {}", params.generator_x()));
            println_colored(Color::White, &format!("  Gy = {}", params.generator_y()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Prove { identifier } => {
            let identifier = Identifier::new(identifier)?;
            let mut rng = SecureRng::new();
            let (private_key, public_key) = KeyPair::<P256>::generate(&mut rng, &config)?.into_parts();

            let mut prover = Prover::<P256, _, Sha256>::with_config(params, private_key, rng, config)?;
            let wire = prover.prove_wire(&identifier)?;

            println_colored(
                Color::Cyan,
                &format!("public_key: {}", public_key.to_decimal_x(prover.codec())),
            );
            println!("{}", wire.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            identifier,
            public_key,
            proof,
        } => {
            let identifier = Identifier::new(identifier)?;
            let verifier = Verifier::<P256, Sha256>::with_config(params, config)?;
            let public_key = PublicKey::from_decimal_x(verifier.codec(), public_key.trim())?;
            let wire = WireProof::from_json(&proof)?;

            if verifier.verify(&public_key, &identifier, &wire)? {
                println_colored(Color::Green, "verified");
                Ok(ExitCode::SUCCESS)
            } else {
                println_colored(Color::Red, "rejected");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
