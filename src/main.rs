//! therapist-discovery: command-line front end for the discovery client core.
//!
//! Activates the directory or community view against the configured
//! sources and prints the displayed list as JSON on stdout. Logs go to
//! stderr.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use therapist_discovery::adapters::{chains, NoOpEventCallback};
use therapist_discovery::application::{CommunityView, DirectoryView};
use therapist_discovery::config::{AppConfig, TelemetryConfig};
use therapist_discovery::domain::community::Category;
use therapist_discovery::domain::directory::{DisorderFilter, FilterCriteria, ALL_DISORDERS};
use therapist_discovery::domain::foundation::PostId;
use therapist_discovery::domain::session::SessionIdentity;

#[derive(Parser)]
#[command(name = "therapist-discovery")]
#[command(about = "Find child therapists and browse the parent community")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the therapist directory
    Directory {
        /// City, matched case-insensitively
        #[arg(long, default_value = "")]
        city: String,

        /// Postal code fragment
        #[arg(long, default_value = "")]
        pincode: String,

        /// Disorder focus label
        #[arg(long, default_value = ALL_DISORDERS)]
        disorder: DisorderFilter,
    },

    /// Browse, post to, and like the community forum
    Community {
        /// currently_dealing or already_solved
        #[arg(long, default_value = "currently_dealing")]
        category: Category,

        /// Title of a post to submit under the category
        #[arg(long, requires = "post_description")]
        post_title: Option<String>,

        /// Description of the post to submit
        #[arg(long, requires = "post_title")]
        post_description: Option<String>,

        /// Display name credited for the post
        #[arg(long, env = "THERAPIST_DISCOVERY_USER_NAME")]
        as_name: Option<String>,

        /// Role label used when no display name is set
        #[arg(long, default_value = "parent")]
        as_role: String,

        /// Post ids in the selected category to like, in order
        #[arg(long = "like")]
        likes: Vec<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.telemetry);
    config.validate().context("invalid configuration")?;

    let client = reqwest::Client::builder()
        .timeout(config.sources.request_timeout())
        .build()
        .context("failed to build HTTP client")?;
    let callback = Arc::new(NoOpEventCallback);

    match cli.command {
        Command::Directory {
            city,
            pincode,
            disorder,
        } => {
            let loader = chains::directory_loader(&config.sources, client, callback);
            info!(chain = ?loader.chain(), "Activating directory");

            let mut view =
                DirectoryView::new().with_min_loading_delay(config.view.directory_min_loading());
            view.set_criteria(
                FilterCriteria::new()
                    .with_city(city)
                    .with_pincode(pincode)
                    .with_disorder(disorder),
            );
            view.activate(&loader).await;

            info!("{}", view.results_summary());
            print_json(&serde_json::json!({
                "served_by": view.served_by(),
                "summary": view.results_summary(),
                "therapists": view.displayed(),
            }))?;
        }
        Command::Community {
            category,
            post_title,
            post_description,
            as_name,
            as_role,
            likes,
        } => {
            let loader = chains::community_loader(&config.sources, client, callback);
            info!(chain = ?loader.chain(), "Activating community");

            let mut view =
                CommunityView::new().with_min_loading_delay(config.view.community_min_loading());
            view.select_category(category);
            view.activate(&loader).await;

            if let (Some(title), Some(description)) = (post_title, post_description) {
                let identity = SessionIdentity::new(as_name, as_role);
                let id = view
                    .submit_post(&title, &description, &identity)
                    .context("post was not submitted")?;
                info!(post_id = %id, author = identity.display_name(), "Posted");
            }

            for id in likes {
                match view.like(PostId::new(id))? {
                    Some(count) => info!(post_id = id, likes = count, "Liked"),
                    None => tracing::warn!(post_id = id, "No post with this id"),
                }
            }

            print_json(&serde_json::json!({
                "served_by": view.served_by(),
                "category": view.category(),
                "prompt": view.prompt(),
                "posts": view.displayed(),
            }))?;
        }
    }

    Ok(())
}

fn init_tracing(telemetry: &TelemetryConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| telemetry.log_level.clone().into());

    let json = telemetry.json_logs;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
