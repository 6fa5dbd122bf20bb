//! Command-line configuration, flattened into the binary's arguments

use std::path::PathBuf;
use std::time::Duration;

use crate::api::{Endpoints, DEFAULT_API_BASE};
use crate::detail::DEFAULT_LANGUAGE;
use crate::state::AppState;

#[derive(clap::Args, Clone, Debug, PartialEq)]
pub struct Config {
    /// PokeAPI root URL
    #[arg(long, env = "POKEDEX_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// How many entries to fetch up front
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: u64,

    /// Entries per page
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: u64,

    /// Language tag for descriptions and category labels
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Swap pages without the fade transition
    #[arg(long)]
    pub no_animation: bool,

    /// Write tracing output to this file
    #[arg(long, env = "POKEDEX_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.as_str())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn initial_state(&self) -> AppState {
        AppState::new(
            self.limit as usize,
            self.page_size as usize,
            !self.no_animation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn defaults_match_the_canonical_list() {
        let cli = Cli::try_parse_from(["pokedex"]).unwrap();
        let state = cli.config.initial_state();
        assert_eq!(state.fetch_limit, 100);
        assert_eq!(state.page_size, 10);
        assert!(state.animate_pages);
        assert_eq!(cli.config.language, "en");
        assert_eq!(cli.config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pokedex",
            "--api-base",
            "http://localhost:8080/api/v2/",
            "--limit",
            "10",
            "--page-size",
            "5",
            "--no-animation",
        ])
        .unwrap();
        assert_eq!(
            cli.config.endpoints().list(10),
            "http://localhost:8080/api/v2/pokemon?limit=10"
        );
        let state = cli.config.initial_state();
        assert_eq!(state.fetch_limit, 10);
        assert_eq!(state.page_size, 5);
        assert!(!state.animate_pages);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Cli::try_parse_from(["pokedex", "--page-size", "0"]).is_err());
    }
}
