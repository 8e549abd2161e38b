use cipherworkshop::cli::{
    run_cipher, run_custom, run_hybrid, show_stats, CipherOptions, TextSource,
};
use cipherworkshop::config::Config;
use cipherworkshop::{CipherKind, Direction, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERWORKSHOP_VERSION");
const PROFILE: &str = env!("CIPHERWORKSHOP_PROFILE");
const GIT_HASH: &str = env!("CIPHERWORKSHOP_GIT_HASH");

#[derive(Parser)]
#[command(name = "cipherworkshop")]
#[command(author, about = "Classical cipher workshop: Caesar, ROT13, Vigenère, Atbash, Rail Fence, Beaufort", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with default shift/key/rails
    #[arg(long, global = true, env = "CIPHERWORKSHOP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct TextArgs {
    /// Text to transform (reads --input or stdin when omitted)
    #[arg(short, long)]
    text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ParamArgs {
    /// Caesar shift (any integer)
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Vigenère/Beaufort key
    #[arg(long)]
    key: Option<String>,

    /// Rail Fence rail count
    #[arg(long)]
    rails: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with a cipher
    #[command(alias = "e")]
    Encode {
        /// Cipher: caesar, rot13, vigenere, atbash, railfence, beaufort
        #[arg(value_parser = parse_kind)]
        cipher: CipherKind,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Decode text with a cipher
    #[command(alias = "d")]
    Decode {
        /// Cipher: caesar, rot13, vigenere, atbash, railfence, beaufort
        #[arg(value_parser = parse_kind)]
        cipher: CipherKind,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Encode text through a chain of ciphers
    #[command(alias = "h")]
    Hybrid {
        /// JSON file with the list of steps
        #[arg(long, required = true)]
        steps: PathBuf,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Encode text with a custom cipher definition
    #[command(alias = "c")]
    Custom {
        /// JSON file with the custom cipher
        #[arg(long = "cipher", required = true)]
        cipher: PathBuf,

        /// Append the cipher analysis report
        #[arg(long)]
        analysis: bool,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Show character counts, letter frequency and index of coincidence
    #[command(alias = "s")]
    Stats {
        #[command(flatten)]
        text: TextArgs,
    },
}

fn parse_kind(s: &str) -> std::result::Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "cipherworkshop=debug"
    } else {
        "cipherworkshop=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn run_transform(
    cipher: CipherKind,
    direction: Direction,
    params: ParamArgs,
    config: &Config,
    source: &TextSource,
) -> Result<String> {
    let options = CipherOptions {
        kind: cipher,
        params: config.parameters(params.shift, params.key, params.rails),
        direction,
    };
    run_cipher(&source.read()?, &options)
}

fn emit(output: Option<PathBuf>, result: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, result)?;
            tracing::debug!(path = %path.display(), "wrote output");
        }
        None => println!("{}", result),
    }
    Ok(())
}

fn run(command: Commands, config_path: Option<&PathBuf>) -> Result<()> {
    match command {
        Commands::Encode {
            cipher,
            params,
            text,
        } => {
            let config = load_config(config_path)?;
            let source = TextSource::from_args(text.text, text.input);
            let result = run_transform(cipher, Direction::Encode, params, &config, &source)?;
            emit(text.output, &result)
        }

        Commands::Decode {
            cipher,
            params,
            text,
        } => {
            let config = load_config(config_path)?;
            let source = TextSource::from_args(text.text, text.input);
            let result = run_transform(cipher, Direction::Decode, params, &config, &source)?;
            emit(text.output, &result)
        }

        Commands::Hybrid { steps, text } => {
            let source = TextSource::from_args(text.text, text.input);
            let result = run_hybrid(&source.read()?, &steps)?;
            emit(text.output, &result)
        }

        Commands::Custom {
            cipher,
            analysis,
            text,
        } => {
            let source = TextSource::from_args(text.text, text.input);
            let result = run_custom(&source.read()?, &cipher, analysis)?;
            emit(text.output, &result)
        }

        Commands::Stats { text } => {
            let source = TextSource::from_args(text.text, text.input);
            let report = show_stats(&source.read()?);
            match text.output {
                Some(path) => emit(Some(path), &report),
                None => {
                    print!("{}", report);
                    Ok(())
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("cipherworkshop {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    // Show help when no command provided
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(command, cli.config.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
