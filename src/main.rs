//! Photofeed CLI
//!
//! Native host for the photo feed: the same repository the browser widget
//! uses, backed by a JSON file instead of `localStorage`.
//!
//! - List posts
//! - Like and comment
//! - Add posts
//! - Create and import share links

use anyhow::Context;
use clap::{Parser, Subcommand};
use photofeed::config::{generate_default_config, Config, LoggingConfig};
use photofeed::feed::{FeedError, FeedRepository, FileStore, ImportOutcome, Post, NO_COMMENTS};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "photofeed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local photo feed with likes, comments and share links")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/photofeed/config.toml or ./photofeed.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all posts
    List,

    /// Like a post
    Like {
        /// Post id
        id: u64,
    },

    /// Comment on a post
    Comment {
        /// Post id
        id: u64,
        /// Comment text
        text: String,
    },

    /// Add a new post
    Add {
        /// Path or URL of the image
        image_path: String,
        /// Caption
        caption: String,
    },

    /// Print a link carrying the whole feed
    Share {
        /// Page the link should point at (default: from config)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Replace the local feed with the one carried by a share link
    Import {
        /// Share link
        url: String,
    },

    /// Discard the stored feed and restore the sample posts
    Reset,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }

    init_logging(&config.logging);
    let store = FileStore::new(&config.storage.data_dir);
    let mut repo = FeedRepository::with_key(store, config.storage.key.clone());
    tracing::debug!(
        "Feed key '{}' in data directory {}",
        repo.key(),
        repo.store().data_dir().display()
    );

    match run(cli.command, &cli.format, &config, &mut repo) {
        Err(e) if is_corrupt(&e) => {
            eprintln!("{}", e);
            eprintln!("The stored feed cannot be read. Run `photofeed reset` to restore the sample posts.");
            std::process::exit(1);
        }
        other => other,
    }
}

fn run(
    command: Commands,
    format: &str,
    config: &Config,
    repo: &mut FeedRepository<FileStore>,
) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            let posts = repo.load()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                for post in &posts {
                    println!("{}", render_post(post));
                }
            }
        }

        Commands::Like { id } => match repo.toggle_like(id)? {
            Some(post) => println!("Post #{} now has {} like(s)", post.id, post.likes),
            None => println!("No post with id {}", id),
        },

        Commands::Comment { id, text } => match repo.add_comment(id, &text)? {
            Some(post) => println!("Comment added to post #{}", post.id),
            None if text.trim().is_empty() => println!("Empty comment ignored"),
            None => println!("No post with id {}", id),
        },

        Commands::Add {
            image_path,
            caption,
        } => match repo.add_post(&image_path, &caption) {
            Ok(post) => println!("Added post #{}", post.id),
            Err(FeedError::Validation(msg)) => {
                eprintln!("{}", msg);
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        },

        Commands::Share { base_url } => {
            let base = base_url.as_deref().unwrap_or(&config.share.base_url);
            let link = repo.share_link(base)?;
            println!("Copy this link to share your feed:");
            println!("{}", link);
            println!();
            println!("(Opening it replaces the recipient's feed.)");
        }

        Commands::Import { url } => match repo.import_from_url(&url) {
            Ok(ImportOutcome::Imported { posts }) => {
                println!("Shared feed loaded: {} post(s)", posts.len());
            }
            Ok(ImportOutcome::NoSharedData) => {
                println!("Link carries no shared data; nothing changed");
            }
            Err(e) => {
                tracing::error!("Failed to read shared data from link: {}", e);
                eprintln!("Could not load the shared data from that link.");
                std::process::exit(1);
            }
        },

        Commands::Reset => {
            let posts = repo.reset()?;
            println!("Feed reset ({} sample posts)", posts.len());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber (stderr, pretty or JSON)
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("photofeed={}", logging.level).into());

    let (json, pretty) = if logging.format == "json" {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

fn is_corrupt(err: &anyhow::Error) -> bool {
    err.downcast_ref::<FeedError>()
        .map(FeedError::is_recoverable_by_reset)
        .unwrap_or(false)
}

/// Text rendering of one post, mirroring the widget's card
fn render_post(post: &Post) -> String {
    let mut out = format!(
        "#{} [{}]\n  {}\n  Likes: {}\n  Comments:\n",
        post.id, post.image_path, post.caption, post.likes
    );
    if post.comments.is_empty() {
        out.push_str(&format!("    {}\n", NO_COMMENTS));
    } else {
        for comment in &post.comments {
            out.push_str(&format!("    {}: {}\n", comment.user, comment.text));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use photofeed::feed::Comment;

    #[test]
    fn test_render_post_without_comments() {
        let post = Post::new(1, "images/a.jpg", "hello");
        let text = render_post(&post);
        assert!(text.starts_with("#1 [images/a.jpg]\n  hello\n  Likes: 0\n"));
        assert!(text.contains(NO_COMMENTS));
    }

    #[test]
    fn test_render_post_lists_comments_in_order() {
        let mut post = Post::new(2, "b.png", "b");
        post.comments.push(Comment::local("one"));
        post.comments.push(Comment::local("two"));

        let text = render_post(&post);
        let one = text.find("one").unwrap();
        let two = text.find("two").unwrap();
        assert!(one < two);
        assert!(!text.contains(NO_COMMENTS));
    }

    #[test]
    fn test_corrupt_error_detection() {
        let corrupt = anyhow::Error::new(FeedError::Corrupt {
            key: "k".to_string(),
            reason: "eof".to_string(),
        });
        assert!(is_corrupt(&corrupt));
        assert!(!is_corrupt(&anyhow::anyhow!("other")));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["photofeed", "comment", "1", "nice one"]).unwrap();
        assert!(matches!(cli.command, Commands::Comment { id: 1, ref text } if text == "nice one"));

        let cli = Cli::try_parse_from(["photofeed", "--format", "json", "list"]).unwrap();
        assert_eq!(cli.format, "json");
    }
}
