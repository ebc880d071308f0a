use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spofolcli::{cli, config, error};

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
    /// Path to the song folder
    #[clap(required_unless_present = "completions")]
    path: Option<PathBuf>,

    /// Playlist name to use. Defaults to the folder name
    #[clap(long)]
    playlist: Option<String>,

    /// Force generation of a new access token
    #[clap(long = "genaccesstoken")]
    gen_access_token: bool,

    /// Just print the matched song list. Don't add to Spotify
    #[clap(long)]
    preview: bool,

    /// Generate shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let Some(path) = cli.path else {
        error!("PATH is required");
    };

    cli::sync(path, cli.playlist, cli.gen_access_token, cli.preview).await;
}
