use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use quill_core::{EditorSurface, KeyValueStore, MemoryEditor, Summarizer};
use quill_library::purge::PURGE_PERIOD;
use quill_library::{
    run_purge_timer, ArticlePatch, ArticleRepository, PreferenceStore, TrashBin,
};
use quill_session::{export, DocumentSession, Route};
use quill_store::{JsonFileStore, MemoryStore};
use quill_summary::{create_summarizer, Config};
use tracing::{info, Level};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal blogging and authoring tool", long_about = None)]
struct Cli {
    /// Data directory for the persisted collections. Defaults to the
    /// platform data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Keep state in memory only; nothing survives the process.
    #[arg(long)]
    ephemeral: bool,
    #[arg(
        long,
        default_value = "naive",
        help = "Summarizer backend. Available: naive (default, offline), openai, gateway"
    )]
    summarizer: String,
    /// API key for the openai summarizer. Falls back to OPENAI_API_KEY.
    #[arg(long)]
    api_key: Option<String>,
    /// Base URL for the gateway or openai summarizer. Falls back to
    /// QUILL_GATEWAY_URL.
    #[arg(long)]
    base_url: Option<Url>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List active articles, or the trash.
    List {
        #[arg(long)]
        trash: bool,
    },
    /// Create a new article.
    New {
        #[arg(long)]
        title: Option<String>,
    },
    /// Open an article, apply edits, and save.
    Write {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Content markup to load into the editor.
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read the content markup from a file instead.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print one article.
    Show { id: String },
    /// Resolve a deep-link address like /article/<id>.
    Open { path: String },
    /// Move an article to the trash.
    Trash { id: String },
    /// Restore an article from the trash.
    Restore { id: String },
    /// Permanently delete a trashed article.
    Delete { id: String },
    /// Purge expired trash items now.
    Purge,
    /// Export an article as a JSON artifact with a generated summary.
    Export {
        id: String,
        /// Output directory for the artifact.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Show or change UI preferences.
    Prefs {
        #[arg(long)]
        dark_mode: Option<bool>,
        #[arg(long)]
        sidebar_width: Option<u32>,
    },
    /// Run the summary gateway server.
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

fn open_store(data_dir: Option<PathBuf>, ephemeral: bool) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    if ephemeral {
        return Ok(Arc::new(MemoryStore::new()));
    }
    let dir = match data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .context("no platform data directory; pass --data-dir")?
            .join("quill"),
    };
    Ok(Arc::new(JsonFileStore::open(dir)?))
}

fn summarizer_config(api_key: Option<String>, base_url: Option<Url>) -> Config {
    let api_key = api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok());
    let base_url = base_url.or_else(|| {
        std::env::var("QUILL_GATEWAY_URL")
            .ok()
            .and_then(|raw| Url::parse(&raw).ok())
    });
    Config {
        api_key,
        base_url,
        ..Config::default()
    }
}

async fn serve(port: u16, summarizer: Arc<dyn Summarizer>) -> anyhow::Result<()> {
    let app = quill_web::create_app(quill_web::AppState { summarizer }).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Summary gateway listening on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let Cli {
        data_dir,
        ephemeral,
        summarizer,
        api_key,
        base_url,
        command,
    } = Cli::parse();

    let store = open_store(data_dir, ephemeral)?;
    let config = summarizer_config(api_key, base_url);

    match command {
        Commands::Serve { port } => {
            let backend = create_summarizer(&summarizer, &config)?;
            // The gateway is the long-lived process here, so it also keeps
            // the local trash on the hourly purge cadence.
            let trash = Arc::new(tokio::sync::Mutex::new(TrashBin::load(store.clone())));
            tokio::spawn(run_purge_timer(trash, PURGE_PERIOD));
            serve(port, backend).await?;
        }
        command => {
            let mut repo = ArticleRepository::load(store.clone());
            let mut trash = TrashBin::load(store.clone());
            // Session-start purge point.
            let purged_at_start = trash.purge_expired(Utc::now());

            match command {
                Commands::List { trash: show_trash } => {
                    if show_trash {
                        for item in trash.list() {
                            println!(
                                "{}  {}  (deleted {})",
                                item.id(),
                                item.article.title,
                                item.deleted_at.format("%Y-%m-%d %H:%M")
                            );
                        }
                    } else {
                        for article in repo.list() {
                            println!("{}  {}  ({})", article.id, article.title, article.date);
                        }
                    }
                }
                Commands::New { title } => {
                    let article = repo.create();
                    if let Some(title) = title {
                        repo.update(&article.id, ArticlePatch::title(title))?;
                    }
                    println!("Created {}", article.id);
                }
                Commands::Write {
                    id,
                    title,
                    content,
                    file,
                } => {
                    let mut session = DocumentSession::new(MemoryEditor::new());
                    session.select(&repo, &id)?;

                    if let Some(title) = title {
                        session.edit_title(&mut repo, &title)?;
                    }

                    let markup = match (content, file) {
                        (Some(content), _) => Some(content),
                        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
                        (None, None) => None,
                    };
                    if let Some(markup) = markup {
                        session.editor_mut().set_content(&markup);
                        session.content_edited();
                    }

                    let now = Utc::now();
                    if session.save(&mut repo, now) {
                        if let Some(notice) = session.notice(now) {
                            println!("{}", notice);
                        }
                    } else {
                        println!("Nothing to save");
                    }
                }
                Commands::Show { id } => {
                    let article = repo
                        .get(&id)
                        .with_context(|| format!("no article with id {}", id))?;
                    println!("id:      {}", article.id);
                    println!("title:   {}", article.title);
                    println!("date:    {}", article.date);
                    println!("summary: {}", article.summary);
                    println!();
                    println!("{}", article.content);
                }
                Commands::Open { path } => {
                    let mut session = DocumentSession::new(MemoryEditor::new());
                    match session.open_path(&repo, &path) {
                        Route::Article(id) => {
                            println!("{}  {}", id, session.current_title().unwrap_or_default())
                        }
                        Route::Root => println!("No article selected"),
                    }
                }
                Commands::Trash { id } => {
                    let article = repo.remove(&id)?;
                    let item = trash.move_in(article);
                    println!("Moved '{}' to trash", item.article.title);
                }
                Commands::Restore { id } => {
                    let article = trash.restore(&id)?;
                    let title = article.title.clone();
                    repo.insert_front(article);
                    println!("Restored '{}'", title);
                }
                Commands::Delete { id } => {
                    trash.purge(&id);
                    println!("Permanently deleted {}", id);
                }
                Commands::Purge => {
                    println!("Purged {} expired item(s)", purged_at_start);
                }
                Commands::Export { id, out } => {
                    let article = repo
                        .get(&id)
                        .with_context(|| format!("no article with id {}", id))?
                        .clone();
                    let backend = create_summarizer(&summarizer, &config)?;
                    let artifact =
                        export(&article, &article.content, backend.as_ref(), Utc::now()).await?;

                    let path = out.join(&artifact.file_name);
                    std::fs::write(&path, &artifact.bytes)?;
                    println!("Exported to {}", path.display());
                }
                Commands::Prefs {
                    dark_mode,
                    sidebar_width,
                } => {
                    let mut prefs = PreferenceStore::load(store.clone());
                    if let Some(on) = dark_mode {
                        prefs.set_dark_mode(on);
                    }
                    if let Some(width) = sidebar_width {
                        prefs.set_sidebar_width(width);
                    }
                    let current = prefs.get();
                    println!("dark mode:     {}", current.dark_mode);
                    println!("sidebar width: {}", current.sidebar_width);
                    println!("authenticated: {}", current.authenticated);
                }
                Commands::Serve { .. } => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
