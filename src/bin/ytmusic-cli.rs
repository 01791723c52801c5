use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ytmusic_browse::{
    dump, parse_response, BrowseRequest, Entity, RetryPolicy, StartPage, YtMusic, YtMusicError,
};

#[derive(Parser)]
#[command(name = "ytmusic-cli")]
#[command(about = "CLI for ytmusic-browse - YouTube Music browse normalizer", long_about = None)]
struct Cli {
    /// Captured "Copy as cURL" request (can also be set via YTMUSIC_CURL_FILE env var)
    #[arg(long, env = "YTMUSIC_CURL_FILE")]
    curl_file: Option<PathBuf>,

    /// Total attempts per browse request
    #[arg(long, default_value_t = 5)]
    retries: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value_t = 1)]
    retry_delay_secs: u64,

    /// Directory to dump responses that fail to normalize
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// Print the entity as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Page {
    Home,
    Library,
    ListenAgain,
    MixedForYou,
    MoodsAndGenres,
    NewReleasesAlbums,
}

impl From<Page> for StartPage {
    fn from(p: Page) -> Self {
        match p {
            Page::Home => StartPage::Home,
            Page::Library => StartPage::Library,
            Page::ListenAgain => StartPage::ListenAgain,
            Page::MixedForYou => StartPage::MixedForYou,
            Page::MoodsAndGenres => StartPage::MoodsAndGenres,
            Page::NewReleasesAlbums => StartPage::NewReleasesAlbums,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a saved JSON response
    Parse {
        /// Path to the response body
        file: PathBuf,
    },
    /// Fetch and normalize a start page
    Start {
        #[arg(value_enum, default_value_t = Page::Home)]
        page: Page,
    },
    /// Fetch and normalize an arbitrary browse target
    Browse {
        /// Browse id (e.g. FEmusic_moods_and_genres_category)
        #[arg(long)]
        browse_id: Option<String>,

        /// Params token from a browse endpoint
        #[arg(long)]
        params: Option<String>,

        /// Playlist id
        #[arg(long)]
        playlist_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose {
        "ytmusic_browse=debug"
    } else {
        "ytmusic_browse=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw = match &cli.command {
        Commands::Parse { file } => {
            let text = std::fs::read_to_string(file)?;
            serde_json::from_str::<Value>(&text)?
        }
        Commands::Start { page } => {
            let yt = connect(&cli)?;
            let request = StartPage::from(*page).request();
            yt.browse_raw(&request).await?
        }
        Commands::Browse {
            browse_id,
            params,
            playlist_id,
        } => {
            let request = BrowseRequest {
                browse_id: browse_id.clone(),
                params: params.clone(),
                playlist_id: playlist_id.clone(),
            };
            if request.is_empty() {
                return Err("browse needs at least one of --browse-id, --params, --playlist-id".into());
            }
            let yt = connect(&cli)?;
            yt.browse_raw(&request).await?
        }
    };

    let entity = match parse_response(&raw) {
        Ok(entity) => entity,
        Err(e) => {
            if let Some(dir) = &cli.dump_dir {
                let path = dump::dump_payload(dir, &raw)?;
                eprintln!("Dump file saved to {}", path.display());
            }
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entity)?);
    } else {
        print_summary(&entity);
    }

    Ok(())
}

fn connect(cli: &Cli) -> Result<YtMusic, YtMusicError> {
    let curl_file: &Path = cli.curl_file.as_deref().ok_or_else(|| {
        YtMusicError::InvalidAuthFile("no curl file given (--curl-file or YTMUSIC_CURL_FILE)".to_string())
    })?;

    let mut yt = YtMusic::new(curl_file)?;
    yt.set_retry_policy(RetryPolicy::new(
        cli.retries,
        Duration::from_secs(cli.retry_delay_secs),
    ));
    Ok(yt)
}

fn print_summary(entity: &Entity) {
    match entity {
        Entity::Page(page) => {
            println!("Page: {}", page.title.as_deref().unwrap_or("(untitled)"));
            if let Some(browse_id) = page.browse_id() {
                println!("   Browse ID: {}", browse_id);
            }
            println!("   Items: {}", page.item_count());

            for (i, item) in page.entities().iter().enumerate() {
                let kind = match item {
                    Entity::Page(_) => "page",
                    Entity::Playlist(_) => "playlist",
                };
                println!(
                    "{}. [{}] {} {}",
                    i + 1,
                    kind,
                    item.title().unwrap_or("?"),
                    item.endpoint()
                        .and_then(|e| BrowseRequest::from_endpoint(e))
                        .and_then(|r| r.browse_id)
                        .map(|id| format!("(ID: {})", id))
                        .unwrap_or_default()
                );
            }
        }
        Entity::Playlist(playlist) => {
            println!("Playlist: {}", playlist.title.as_deref().unwrap_or("(untitled)"));
            if let Some(subtitle) = &playlist.subtitle {
                println!("   {}", subtitle);
            }
            if let Some(browse_id) = playlist.browse_id() {
                println!("   Browse ID: {}", browse_id);
            }
        }
    }
}
