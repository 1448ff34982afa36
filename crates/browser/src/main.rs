//! Tabbed Browser - a tabbed browser shell over an embedded web engine.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use browser::console::Flow;
use browser::{Console, ShellConfig};
use ui::homepage::DEFAULT_HOMEPAGE;
use ui::navigation::SearchEngine;

/// Tabbed Browser - a tabbed browser shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL or search to load in the first tab
    url: Option<String>,

    /// Directory for history.json, bookmarks.json and custom_homepage.txt
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Homepage used until a custom one is set
    #[arg(long, default_value = DEFAULT_HOMEPAGE)]
    homepage_default: String,

    /// Search engine: Google, Bing or DuckDuckGo
    #[arg(long, default_value = "Google", value_parser = parse_search_engine)]
    search_engine: SearchEngine,

    /// Start in incognito mode
    #[arg(long)]
    incognito: bool,

    /// Seconds voice search waits for speech
    #[arg(long, default_value = "5")]
    voice_timeout_secs: u64,

    /// Directory downloads are saved to
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_search_engine(name: &str) -> Result<SearchEngine, String> {
    SearchEngine::from_name(name).ok_or_else(|| format!("unknown search engine: {}", name))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Tabbed Browser v{}", browser::VERSION);

    let config = ShellConfig::new()
        .with_data_dir(args.data_dir)
        .with_default_homepage(&args.homepage_default)
        .with_search_engine(args.search_engine)
        .with_incognito(args.incognito)
        .with_voice_timeout(Duration::from_secs(args.voice_timeout_secs))
        .with_download_dir(args.download_dir);

    let mut console = Console::new(&config);
    info!("{}", console.window().title());

    if let Some(url) = args.url {
        console.window_mut().submit_address(&url);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console.run_line(&line) {
            Flow::Continue(output) => {
                for line in output {
                    println!("{}", line);
                }
            }
            Flow::Quit => break,
        }
    }

    info!("Browser shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["tabbed-browser"]);
        assert!(args.url.is_none());
        assert_eq!(args.data_dir, PathBuf::from("."));
        assert_eq!(args.homepage_default, "https://www.google.com");
        assert_eq!(args.search_engine, SearchEngine::Google);
        assert!(!args.incognito);
        assert_eq!(args.voice_timeout_secs, 5);
    }

    #[test]
    fn test_args_with_url() {
        let args = Args::parse_from(["tabbed-browser", "https://example.com"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_args_search_engine() {
        let args = Args::parse_from(["tabbed-browser", "--search-engine", "bing", "--incognito"]);
        assert_eq!(args.search_engine, SearchEngine::Bing);
        assert!(args.incognito);

        assert!(Args::try_parse_from(["tabbed-browser", "--search-engine", "Lycos"]).is_err());
    }
}
