use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dictrie::dictionary::Dictionary;
use dictrie::query::{LookupLine, Words, run_query_loop};
use dictrie::utils::{AppConfig, logging};
use dictrie::{output, query::Answer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dictrie")]
#[command(about = "Index a [keyword]definition dictionary and answer prefix queries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (read from the first word on stdin when omitted)
    file: Option<PathBuf>,

    /// Word that ends the query session
    #[arg(long, global = true)]
    sentinel: Option<String>,

    /// When to use colors
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one or more words
    Lookup {
        /// Dictionary file
        file: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Print one JSON object per word
        #[arg(long)]
        json: bool,
    },
    /// List stored keywords starting with a prefix
    Complete {
        /// Dictionary file
        file: PathBuf,

        /// Prefix to expand
        prefix: String,

        /// Maximum number of keywords to list
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show dictionary statistics
    Stats {
        /// Dictionary file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self, config: &AppConfig) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if config.color => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    logging::init(cli.verbose, &config.log_level);

    let choice = cli.color.choice(&config);
    let sentinel = cli.sentinel.unwrap_or_else(|| config.sentinel.clone());

    match cli.command {
        Some(Commands::Lookup { file, words, json }) => {
            let dictionary = load(&file)?;
            lookup(&dictionary, &words, json)?;
        }
        Some(Commands::Complete { file, prefix, limit }) => {
            let dictionary = load(&file)?;
            let entries: Vec<_> = dictionary
                .trie()
                .with_prefix(&prefix)
                .take(limit.unwrap_or(usize::MAX))
                .collect();
            debug!(prefix = %prefix, found = entries.len(), "completed prefix");
            output::print_entries(&entries, choice)?;
        }
        Some(Commands::Stats { file }) => {
            let dictionary = load(&file)?;
            output::print_stats(&dictionary, choice)?;
        }
        None => {
            interactive(cli.file, &sentinel)?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<Dictionary> {
    Dictionary::load_with_progress(path, false)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))
}

/// Query session on stdin. Without a file argument the first word read is
/// the dictionary path.
fn interactive(file: Option<PathBuf>, sentinel: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut words = Words::new(stdin.lock());

    let path = match file {
        Some(path) => path,
        None => match words.next() {
            Some(word) => {
                let word = word.context("Failed to read dictionary path")?;
                PathBuf::from(String::from_utf8_lossy(&word).into_owned())
            }
            None => bail!("No dictionary file given"),
        },
    };

    let dictionary = Dictionary::load(&path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let answered = run_query_loop(dictionary.trie(), &mut words, &mut out, sentinel)?;
    info!(answered, "query session finished");
    Ok(())
}

fn lookup(dictionary: &Dictionary, words: &[String], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for word in words {
        let result = dictionary.trie().find(word);
        if json {
            let line = LookupLine {
                query: word.clone(),
                result,
            };
            serde_json::to_writer(&mut out, &line).context("Failed to write JSON")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", Answer(result))?;
        }
    }
    out.flush()?;
    Ok(())
}
