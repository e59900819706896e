use cipherlab::cli::{
    command_rng, encrypt_text, generate_key_text, list_algorithms, process_request, read_request,
    EncryptOptions, KeygenOptions,
};
use cipherlab::Algorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERLAB_VERSION");
const BUILD: &str = env!("CIPHERLAB_BUILD");
const PROFILE: &str = env!("CIPHERLAB_PROFILE");
const GIT_HASH: &str = env!("CIPHERLAB_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherlab")]
#[command(author, about = "Classical cipher engine preserving case and punctuation", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log engine internals to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    #[command(alias = "e")]
    Encrypt {
        /// Text to encrypt
        text: String,

        /// Cipher algorithm
        #[arg(short, long, default_value = "caesar", value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Caesar shift (default 3)
        #[arg(long, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Monoalphabetic map, 26 letters (default: random)
        #[arg(long)]
        mono_map: Option<String>,

        /// Playfair keyword (default KEY)
        #[arg(long)]
        play_key: Option<String>,

        /// Hill key matrix, e.g. "[[3,3],[2,5]]"
        #[arg(long)]
        hill_key: Option<String>,

        /// Vigenère key (default LEMON)
        #[arg(long)]
        vigenere_key: Option<String>,

        /// Columnar transposition key (default ZEBRAS)
        #[arg(long)]
        trans_key: Option<String>,

        /// Print the full result record as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,

        /// Explain each step of the transform
        #[arg(long)]
        explain: bool,

        /// Seed for random keys and pads
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Answer a JSON request document (file path or - for stdin)
    #[command(alias = "r")]
    Request {
        file: PathBuf,

        /// Seed for random keys and pads
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a random key
    #[command(alias = "k")]
    Keygen {
        /// Hill matrix size
        #[arg(long, default_value = "2")]
        size: usize,

        /// Generate a monoalphabetic map instead
        #[arg(long)]
        mono: bool,

        /// Seed for reproducible keys
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported algorithms
    #[command(alias = "l")]
    Algorithms,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cipherlab=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("cipherlab {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

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

    let result = match command {
        Commands::Encrypt {
            text,
            algorithm,
            shift,
            mono_map,
            play_key,
            hill_key,
            vigenere_key,
            trans_key,
            json,
            explain,
            seed,
        } => {
            let options = EncryptOptions {
                algorithm,
                shift,
                mono_map,
                play_key,
                hill_key,
                vigenere_key,
                trans_key,
                json,
                explain,
            };
            encrypt_text(&text, &options, &mut *command_rng(seed))
        }

        Commands::Request { file, seed } => read_request(&file)
            .and_then(|doc| process_request(&doc, &mut *command_rng(seed))),

        Commands::Keygen { size, mono, seed } => {
            let options = KeygenOptions { size, mono };
            generate_key_text(&options, &mut *command_rng(seed))
        }

        Commands::Algorithms => Ok(list_algorithms()),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
