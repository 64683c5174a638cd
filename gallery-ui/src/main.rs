//! gallery-ui - command-line gallery client
//!
//! Browses albums grouped by event or date, lists the album table, and
//! creates or deletes albums against the gallery REST API.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gallery_common::config::{ConfigResolver, LoggingConfig, TomlConfig};
use gallery_common::{time, Album, Comment};
use gallery_ui::api::{AlbumApi, GalleryClient, MediaApi, SortMode};
use gallery_ui::dispatcher::FetchOutcome;
use gallery_ui::editor::AlbumEditor;
use gallery_ui::filters::FilterState;
use gallery_ui::pagination::{PageRequest, SortOrder};
use gallery_ui::view::{GallerySnapshot, GalleryView};
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

/// Command-line arguments for gallery-ui
#[derive(Parser, Debug)]
#[command(name = "gallery-ui")]
#[command(about = "Photo gallery client")]
#[command(version)]
struct Args {
    /// Path to config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Gallery API base URL (overrides config and GALLERY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show albums grouped by event or by month
    Gallery {
        /// EVENT or DATE (defaults to the configured sort)
        #[arg(short, long)]
        sort: Option<SortMode>,
        #[arg(short, long)]
        keyword: Option<String>,
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        contributor: Option<String>,
    },
    /// Paged album table
    List {
        /// Page number (0-indexed)
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
        /// field[,asc|desc]
        #[arg(long, default_value = "id,asc")]
        sort: SortOrder,
    },
    /// Album details and comments
    Show { id: i64 },
    /// Create an album
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        event: Option<String>,
        /// Override date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Image file used as the album thumbnail
        #[arg(long)]
        thumbnail: Option<PathBuf>,
        /// MIME type of the thumbnail (guessed from the extension if omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete an album
    Delete { id: i64 },
    /// Values available for gallery filters
    FilterOptions,
    /// Comment on an album
    Comment { album_id: i64, text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args, std::io::stderr)?;
    init_tracing(&config.logging)?;

    info!(
        "Starting gallery-ui v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Gallery API: {}", config.api_base_url);

    let client = Arc::new(GalleryClient::from_config(&config)?);

    match args.command {
        Command::Gallery {
            sort,
            keyword,
            event,
            year,
            tag,
            contributor,
        } => {
            let sort = match sort {
                Some(sort) => sort,
                None => config.default_sort.parse().map_err(anyhow::Error::msg)?,
            };
            let mut filters = FilterState::new(sort);
            filters.set_keyword(keyword);
            filters.set_event(event);
            filters.set_year(year);
            filters.set_tag_name(tag);
            filters.set_contributor_login(contributor);

            let mut view = GalleryView::new(client, sort);
            let outcome = view.apply(filters).await;
            if let FetchOutcome::Failed { message, .. } = &outcome {
                bail!("Could not load albums: {}", message);
            }
            print_gallery(&view.snapshot().await, view.active_filter_count());
        }
        Command::List { page, size, sort } => {
            let request = PageRequest::new(page, size.unwrap_or(config.page_size)).sorted(sort);
            let mut editor = AlbumEditor::new(client, request.clone());
            editor.load_page(request).await?;
            print_table(&editor);
        }
        Command::Show { id } => {
            let album = client.get_album(id).await?;
            print_album_detail(&album);
            let comments = client.comments_for_album(id).await?;
            print_comments(&comments);
        }
        Command::Create {
            name,
            event,
            date,
            keywords,
            description,
            thumbnail,
            content_type,
        } => {
            let mut album = Album::new(name);
            album.event = event;
            album.keywords = keywords;
            album.description = description;
            album.override_date = date.as_deref().map(time::parse_timestamp).transpose()?;
            if let Some(path) = thumbnail {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("Failed to read thumbnail {}", path.display()))?;
                let content_type = match content_type.or_else(|| guess_content_type(&path)) {
                    Some(ct) => ct,
                    None => bail!("Cannot guess content type of {}; pass --content-type", path.display()),
                };
                album.thumbnail = Some(bytes);
                album.thumbnail_content_type = Some(content_type);
            }

            let mut editor = AlbumEditor::new(client, PageRequest::default());
            let created = editor.save(&album).await?;
            println!("Created album {} (id {})", created.name, display_id(created.id));
        }
        Command::Delete { id } => {
            let mut editor = AlbumEditor::new(client, PageRequest::default());
            editor.delete(id).await?;
            println!("Deleted album {}", id);
        }
        Command::FilterOptions => {
            let options = client.filter_options().await?;
            println!("Events:       {}", options.events.join(", "));
            let years: Vec<String> = options.years.iter().map(i32::to_string).collect();
            println!("Years:        {}", years.join(", "));
            println!("Tags:         {}", options.tags.join(", "));
            println!("Contributors: {}", options.contributors.join(", "));
        }
        Command::Comment { album_id, text } => {
            let comment = client.create_comment(&Comment::on_album(album_id, text)).await?;
            println!("Added comment {} to album {}", display_id(comment.id), album_id);
        }
    }

    Ok(())
}

/// Resolve configuration and apply `--api-url`
///
/// Runs before the global subscriber exists (its destination comes from the
/// config), so resolver messages go to a scoped subscriber on `writer`.
fn load_config<W>(args: &Args, writer: W) -> Result<TomlConfig>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();

    let mut config = tracing::subscriber::with_default(bootstrap, || {
        ConfigResolver::new("gallery-ui")
            .with_cli_path(args.config.clone())
            .load()
    })
    .context("Failed to load configuration")?;

    if let Some(url) = &args.api_url {
        config.api_base_url = url.clone();
    }
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn guess_content_type(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let ct = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => return None,
    };
    Some(ct.to_string())
}

fn display_id(id: Option<i64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_else(|| "?".to_string())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn format_date(album: &Album) -> String {
    album
        .effective_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn print_gallery(snapshot: &GallerySnapshot, active_filters: usize) {
    if active_filters > 0 {
        println!("({} active)", plural(active_filters, "filter"));
    }
    if snapshot.is_empty() {
        println!("No albums found.");
        return;
    }

    println!("{} ({} sort)\n", plural(snapshot.albums.total_items as usize, "album"), snapshot.sort);
    for (key, albums) in snapshot.groups() {
        println!("== {} ({})", key, plural(albums.len(), "album"));
        for album in albums {
            let tags: Vec<String> = album.tags.iter().map(|t| format!("#{}", t.name)).collect();
            println!(
                "  [{}] {}  {}  {}",
                display_id(album.id),
                album.name,
                format_date(album),
                tags.join(" ")
            );
        }
        println!();
    }
}

fn print_table<A: AlbumApi>(editor: &AlbumEditor<A>) {
    println!("{:>6}  {:<32} {:<20} {:<10}", "ID", "Name", "Event", "Date");
    for album in &editor.list().entities {
        println!(
            "{:>6}  {:<32} {:<20} {:<10}",
            display_id(album.id),
            album.name,
            album.event.as_deref().unwrap_or(""),
            format_date(album)
        );
    }

    let p = editor.pagination();
    println!(
        "\nShowing {} - {} of {} items (page {} of {})",
        p.first_item,
        p.last_item,
        p.total_items,
        p.page + 1,
        p.total_pages.max(1)
    );
}

fn print_album_detail(album: &Album) {
    println!("Album {}: {}", display_id(album.id), album.name);
    if let Some(event) = album.trimmed_event() {
        println!("  Event:       {}", event);
    }
    if let Some(created) = album.creation_date {
        println!("  Created:     {}", created.to_rfc3339());
    }
    if let Some(overridden) = album.override_date {
        println!("  Date:        {}", overridden.to_rfc3339());
    }
    if let Some(keywords) = &album.keywords {
        println!("  Keywords:    {}", keywords);
    }
    if let Some(description) = &album.description {
        println!("  Description: {}", description);
    }
    if let Some(login) = album.owner_login() {
        println!("  Owner:       {}", login);
    }
    if !album.tags.is_empty() {
        let tags: Vec<&str> = album.tags.iter().map(|t| t.name.as_str()).collect();
        println!("  Tags:        {}", tags.join(", "));
    }
    if let Some(ct) = &album.thumbnail_content_type {
        let size = album.thumbnail.as_ref().map_or(0, Vec::len);
        println!("  Thumbnail:   {} ({} bytes)", ct, size);
    }
}

fn print_comments(comments: &[Comment]) {
    println!("\n{}", plural(comments.len(), "comment"));
    for comment in comments {
        let author = comment
            .author
            .as_ref()
            .and_then(|a| a.login.as_deref())
            .unwrap_or("anonymous");
        let when = comment
            .created_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  {} ({}): {}", author, when, comment.content);
    }
}
