use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use artistscope::{cli, config, error, types::AudioFeature};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch songs data and origin of an artist
    Explore(ExploreOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExploreOptions {
    /// Artist name to search for
    artist: String,

    /// Also show valence against this audio feature
    #[clap(long, value_enum)]
    feature: Option<AudioFeature>,

    /// Print the whole report as JSON instead of tables
    #[clap(long)]
    json: bool,

    /// Spotify client id (overrides SPOTIFY_API_AUTH_CLIENT_ID)
    #[clap(long)]
    client_id: Option<String>,

    /// Spotify client secret (overrides SPOTIFY_API_AUTH_CLIENT_SECRET)
    #[clap(long)]
    client_secret: Option<String>,

    /// OpenCage API key (overrides OPENCAGE_API_KEY)
    #[clap(long)]
    opencage_key: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Explore(opt) => {
            let overrides = config::Overrides {
                client_id: opt.client_id,
                client_secret: opt.client_secret,
                opencage_api_key: opt.opencage_key,
            };
            cli::explore(opt.artist, opt.feature, opt.json, overrides).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
