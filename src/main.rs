//! Command-line front end for the board client.
//!
//! ```bash
//! # List the first two pages
//! board-client --email me@example.com --password hunter2 articles --pages 2
//!
//! # Show one question with its answers
//! board-client --email me@example.com --password hunter2 show 12
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use board_client::api::ApiClient;
use board_client::boundary::{Navigator, Notice, NoticeLevel, Notifier, Route};
use board_client::config::Config;
use board_client::logging::init_tracing;
use board_client::model::{Article, ItemId};
use board_client::Board;

#[derive(Parser)]
#[command(name = "board-client")]
#[command(about = "Browse and edit the Q&A board from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/board-client/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Sign in with this email before running the command
    #[arg(long, global = true, requires = "password")]
    email: Option<String>,

    #[arg(long, global = true, requires = "email")]
    password: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles, newest first
    Articles {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Show one article
    Show { id: ItemId },

    /// List the comments of an article
    Comments { id: ItemId },

    /// Create an article
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: ItemId,
    },

    /// Edit an article; omitted fields keep their current value
    Edit {
        id: ItemId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<ItemId>,
    },

    /// Delete an article
    Delete { id: ItemId },

    /// Comment on an article
    Comment { article_id: ItemId, text: String },

    /// Delete a comment
    Uncomment { id: ItemId },

    /// Create an account
    Register {
        /// Email of the new account
        #[arg(long = "new-email")]
        new_email: String,
        #[arg(long = "new-password")]
        new_password: String,
        #[arg(long)]
        nickname: String,
    },
}

struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Failure => eprintln!("{}", notice.message),
        }
    }
}

struct LogNavigator;

impl Navigator for LogNavigator {
    fn goto(&self, route: Route) {
        tracing::info!(route = route.path(), "Navigate");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let api = ApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let board = Board::new(api, Arc::new(PrintNotifier), Arc::new(LogNavigator));

    if matches!(cli.command, Commands::Register { .. }) {
        // Signing up needs no session.
    } else if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        board.login(email, password).await?;
    } else if board.refresh().await.is_err() {
        tracing::debug!("No session to refresh, continuing signed out");
    }

    match cli.command {
        Commands::Articles { pages } => {
            board.reset_articles();
            board.fetch_articles().await?;
            for page in 1..pages {
                if board.articles().get().is_last_page(page - 1) {
                    break;
                }
                board.next_page().await?;
            }
            let state = board.articles().get();
            for article in &state.content {
                print_summary(article);
            }
            println!(
                "-- {} shown, {} pages total",
                state.content.len(),
                state.total_pages
            );
        }
        Commands::Show { id } => {
            board.load_article(&id).await?;
            let article = board.detail().get().article;
            print_summary(&article);
            println!("{}", article.description);
            for answer in &article.answers {
                println!("  > [{}] {}", answer.id, answer.description);
            }
        }
        Commands::Comments { id } => {
            board.fetch_comments(&id).await?;
            for comment in board.comments().get().items {
                println!("[{}] {}", comment.id, comment.description);
            }
        }
        Commands::Post {
            title,
            description,
            category,
        } => {
            let created = board.add_article(&title, &description, category).await?;
            println!("Created article {}", created.id);
        }
        Commands::Edit {
            id,
            title,
            description,
            category,
        } => {
            board.load_article(&id).await?;
            let mut article = board.detail().get().article;
            if let Some(title) = title {
                article.title = title;
            }
            if let Some(description) = description {
                article.description = description;
            }
            if let Some(category) = category {
                article.category_id = category;
            }
            board.open_edit_mode(id);
            board.update_article(&article).await?;
        }
        Commands::Delete { id } => {
            board.delete_article(&id).await?;
            println!("Deleted article {}", id);
        }
        Commands::Comment { article_id, text } => {
            let comment = board.add_comment(&article_id, &text).await?;
            println!("Added comment {}", comment.id);
        }
        Commands::Uncomment { id } => {
            board.delete_comment(&id).await?;
        }
        Commands::Register {
            new_email,
            new_password,
            nickname,
        } => {
            board.register(&new_email, &new_password, &nickname).await?;
        }
    }

    Ok(())
}

fn print_summary(article: &Article) {
    println!(
        "#{} [{}] {} ({}, {})",
        article.id, article.category_name, article.title, article.nickname, article.created_at
    );
}
