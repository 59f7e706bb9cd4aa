use clap::Parser;
use orgabbrev::config::Config;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "orgabbrev", about = "Normalize organization names into a canonical abbreviated form")]
struct Cli {
    /// Organization name(s); reads one name per line from stdin if omitted
    names: Vec<String>,

    /// Language code selecting suffix and noise-word lexicons (default: en)
    #[arg(short, long)]
    language: Option<String>,

    /// Disable acronym synthesis
    #[arg(long)]
    no_acronym: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["orgabbrev.config.json", "config/orgabbrev.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(lang) = cli.language {
        config.language = lang;
    }
    if cli.no_acronym {
        config.synthesize_acronym = false;
    }

    // Collect input names
    let names: Vec<String> = if cli.names.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .map(|l| l.unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e))))
            .collect()
    } else {
        cli.names
    };

    for name in &names {
        println!("{}", orgabbrev::abbreviate(name, &config));
    }
}
