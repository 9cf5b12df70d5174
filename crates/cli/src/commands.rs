//! Command line definition and command handlers.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use drivescout_core::{
    parse_listing, Candidate, Config, MediaKind, MediaRequest, Resolver, StreamLabel,
};

#[derive(Parser)]
#[command(name = "drivescout", about = "Find and rank video files in a drive listing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the store submissions for a request, one per line
    Queries(RequestArgs),
    /// Rank a saved listing for a request and print the candidates as JSON
    Rank(RankArgs),
}

#[derive(Args)]
pub struct RequestArgs {
    /// Media kind: movie or series
    #[arg(long, default_value = "movie")]
    pub kind: String,
    /// Catalog stream id, e.g. tt0111161 or tt0903747:1:4
    #[arg(long)]
    pub id: String,
    /// Title variant; repeat for alternate titles
    #[arg(long = "title", required = true)]
    pub titles: Vec<String>,
    /// Release year
    #[arg(long)]
    pub year: Option<String>,
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub request: RequestArgs,
    /// JSON listing: an item array or a `{"files": [...]}` page
    #[arg(long)]
    pub listing: PathBuf,
}

impl RequestArgs {
    fn to_request(&self) -> Result<MediaRequest> {
        let kind: MediaKind = self.kind.parse().context("Invalid --kind")?;
        MediaRequest::from_stream_id(kind, &self.id, self.titles.iter().cloned(), self.year.as_deref())
            .context("Invalid request")
    }
}

/// Ranked candidate as printed by `rank`.
#[derive(Debug, Serialize)]
struct RankedOutput<'a> {
    #[serde(flatten)]
    candidate: &'a Candidate,
    label: StreamLabel,
}

pub fn print_queries(config: &Config, args: &RequestArgs) -> Result<()> {
    let request = args.to_request()?;
    let resolver = Resolver::new(config);

    for submission in resolver.submissions(&request) {
        println!("{}", submission);
    }
    Ok(())
}

pub fn print_ranked(config: &Config, args: &RankArgs) -> Result<()> {
    let request = args.request.to_request()?;
    let json = fs::read_to_string(&args.listing)
        .with_context(|| format!("Failed to read listing {:?}", args.listing))?;
    let items = parse_listing(&json).context("Failed to parse listing")?;

    let resolver = Resolver::new(config);
    let candidates = resolver.resolve(&request, items);
    info!(candidates = candidates.len(), "Ranked listing");

    println!("{}", render_ranked(&candidates)?);
    Ok(())
}

fn render_ranked(candidates: &[Candidate]) -> Result<String> {
    let output: Vec<RankedOutput<'_>> = candidates
        .iter()
        .map(|candidate| RankedOutput {
            candidate,
            label: StreamLabel::for_candidate(candidate),
        })
        .collect();
    serde_json::to_string_pretty(&output).context("Failed to serialize candidates")
}
