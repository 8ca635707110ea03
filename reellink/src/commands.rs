use crate::CLAP_STYLING;
use clap::{arg, command};
use reellink_tmdb::config::DEFAULT_API_URL;

fn json_flag() -> clap::Arg {
    arg!(--"json")
        .required(false)
        .help("Print raw JSON instead of a listing")
        .action(clap::ArgAction::SetTrue)
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("reellink")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("reellink")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" ...)
                .required(false)
                .help("Increase log verbosity (-v debug, -vv trace)")
                .global(true),
        )
        .arg(
            arg!(--"token" <TOKEN>)
                .required(false)
                .help("Movie database API read access token")
                .env("TMDB_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            arg!(--"api-url" <URL>)
                .required(false)
                .help("Base URL of the movie database API")
                .env("TMDB_API_URL")
                .default_value(DEFAULT_API_URL)
                .global(true),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10")
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("search")
                .about("Search movies and people, ranked by popularity")
                .arg(arg!(<QUERY>).help("Title or name to look for"))
                .arg(json_flag()),
        )
        .subcommand(
            command!("people")
                .about("Search people only")
                .arg(arg!(<QUERY>).help("Name to look for"))
                .arg(json_flag()),
        )
        .subcommand(
            command!("cast")
                .about("List the cast of a movie")
                .arg(
                    arg!(<MOVIE_ID>)
                        .help("Movie id")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(json_flag()),
        )
        .subcommand(
            command!("actor")
                .about("Show one person's details")
                .arg(
                    arg!(<ACTOR_ID>)
                        .help("Person id")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(json_flag()),
        )
        .subcommand(
            command!("play")
                .about(
                    "Play a game connecting two actors. Reads commands from stdin; type 'help' \
                for the list.",
                )
                .arg(
                    arg!(-f --"from" <ACTOR_ID>)
                        .required(true)
                        .help("The first actor's id")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(
                    arg!(-t --"to" <ACTOR_ID>)
                        .required(true)
                        .help("The second actor's id")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Print the final board as JSON when the game ends")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}

