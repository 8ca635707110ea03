use anyhow::{Context, Result};
use clap::ArgMatches;
use commands::command_argument_builder;
use reellink::handlers::{handle_actor, handle_cast, handle_people, handle_play, handle_search};
use reellink::print_banner;
use reellink_tmdb::{ClientConfig, MovieDbClient};
use tracing::Level;
use tracing::debug;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_logging(chosen_command.get_count("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    if let Err(e) = run(&chosen_command, quiet).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(matches: &ArgMatches, quiet: bool) -> Result<()> {
    let client = MovieDbClient::new(client_config(matches)).context("Failed to build API client")?;

    match matches.subcommand() {
        Some(("search", sub)) => handle_search(&client, sub, quiet).await,
        Some(("people", sub)) => handle_people(&client, sub, quiet).await,
        Some(("cast", sub)) => handle_cast(&client, sub, quiet).await,
        Some(("actor", sub)) => handle_actor(&client, sub, quiet).await,
        Some(("play", sub)) => handle_play(&client, sub, quiet).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn client_config(matches: &ArgMatches) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        config.api_url = api_url.clone();
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(*timeout);
    }
    match matches.get_one::<String>("token") {
        Some(token) => config = config.with_token(token.as_str()),
        None => debug!("No API token set; requests will be unauthenticated"),
    }
    config
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
