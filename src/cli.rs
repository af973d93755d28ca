use crate::types::{Grouping, MatchMode};
use clap::Parser;

#[derive(Parser)]
#[command(name = "relstats")]
#[command(about = "Report download counts for GitHub release assets")]
#[command(version)]
pub struct Cli {
    /// Organization, or combined 'org/repo' form
    pub org: String,

    /// Repository name (optional when the combined form is used)
    pub repo: Option<String>,

    /// Username to authenticate as
    #[arg(short, long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Personal access token to authenticate with
    #[arg(short, long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Include prereleases and tags containing '-'
    #[arg(long)]
    pub prerelease: bool,

    /// Group similar versions together
    #[arg(long, value_enum, default_value = "none")]
    pub group: Grouping,

    /// Which kinds of assets to match
    #[arg(long = "match", value_enum, default_value = "binary")]
    pub match_mode: MatchMode,

    /// Output comma-separated values
    #[arg(long)]
    pub csv: bool,

    /// Print per-filename matched download counts to stderr
    #[arg(long)]
    pub debug: bool,

    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Split the positional arguments into org and repo, accepting either
/// `relstats org repo` or the combined `relstats org/repo` (split on the
/// first `/`).
pub fn split_org_repo(org: &str, repo: Option<&str>) -> Result<(String, String), String> {
    if let Some(repo) = repo {
        return Ok((org.to_string(), repo.to_string()));
    }

    match org.split_once('/') {
        Some((org, repo)) if !org.is_empty() && !repo.is_empty() => {
            Ok((org.to_string(), repo.to_string()))
        }
        _ => Err(format!(
            "'{}' does not name a repository; use 'org/repo' or pass org and repo separately",
            org
        )),
    }
}
