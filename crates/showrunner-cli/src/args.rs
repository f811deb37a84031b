use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Showrunner content planning tool
///
/// Showrunner generates a complete video production plan (hook, timed script
/// segments, publishing metadata, workflow checklists, post-publish actions)
/// from a handful of request parameters. The request starts from a built-in
/// default, can be loaded from a JSON file, and individual fields can be
/// overridden with flags.
#[derive(Parser)]
#[command(version, about, name = "sr")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Showrunner CLI
///
/// Running with no command generates a plan from the default request.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a content plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the default request as JSON, ready to edit
    Template,
    /// Print the JSON schema for request files
    Schema,
}

/// Request fields for plan generation.
///
/// Free-text flags are passed through as-is (blank values fall back to the
/// defaults during generation); enum flags are validated before any plan is
/// built and reject labels outside their domain with the accepted list.
#[derive(clap::Args, Default)]
pub struct GenerateArgs {
    /// Path to a JSON request file used as the base request
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// What the video is about
    #[arg(long)]
    pub topic: Option<String>,

    /// Who the video speaks to
    #[arg(long)]
    pub audience: Option<String>,

    /// The transformation the viewer is promised
    #[arg(long)]
    pub outcome: Option<String>,

    /// The offer positioned as the mechanism
    #[arg(long)]
    pub offer: Option<String>,

    /// Call to action
    #[arg(long)]
    pub cta: Option<String>,

    /// Comma-separated keyword list
    #[arg(long)]
    pub keywords: Option<String>,

    /// Delivery tone: educational, story, controversial, case-study,
    /// inspirational
    #[arg(long)]
    pub tone: Option<String>,

    /// Target runtime in minutes: 6, 8, 10, 15
    #[arg(long)]
    pub duration: Option<String>,

    /// Creator operating style: strategist, creator, operator, marketer
    #[arg(long)]
    pub persona: Option<String>,

    /// Distribution channel: youtube, shorts, tiktok, instagram, podcast
    #[arg(long)]
    pub platform: Option<String>,

    /// Monetization focus: affiliate, service, digital-product, community
    #[arg(long, value_name = "FOCUS")]
    pub monetization: Option<String>,

    /// Emit the plan as pretty-printed JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}
