use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlist::{cli, config, error};

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
    /// Credential file to read and update (overrides SPOTLIST_CREDENTIALS_PATH)
    #[clap(long, global = true)]
    credentials: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API and store the credentials
    Auth(AuthOptions),

    /// Show the profile of the current user
    Me,

    /// Fetch all playlists of a user and write them to a JSON file
    Playlists(PlaylistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Seconds to wait for the authorization callback
    #[clap(long, default_value_t = 300)]
    timeout: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Spotify user id (defaults to SPOTIFY_USER_ID, then the current user)
    #[clap(long)]
    user_id: Option<String>,

    /// Output file for the playlist JSON
    #[clap(long)]
    output: Option<PathBuf>,
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

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };
    if let Some(path) = cli.credentials {
        config.credentials_path = path;
    }

    match cli.command {
        Command::Auth(opt) => cli::auth(&config, opt.timeout).await,
        Command::Me => cli::me(&config).await,
        Command::Playlists(opt) => cli::playlists(&config, opt.user_id, opt.output).await,
        Command::Completions(_) => {}
    }
}
