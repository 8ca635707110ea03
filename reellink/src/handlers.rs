use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reellink_core::report::describe_path;
use reellink_core::{BoardFormat, Game, GameError, MoveOutcome};
use reellink_tmdb::{Actor, CastMember, EntitySource, MediaType, Movie, SearchResult};
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// One line typed at the play prompt
#[derive(Debug, Clone, PartialEq)]
pub enum PlayCommand {
    Movie(u64),
    Actor(u64),
    Search(String),
    Pick(usize),
    Board,
    Path,
    Json,
    Reset,
    Help,
    Quit,
}

/// Parse a play prompt line. Blank lines yield `Ok(None)`.
pub fn parse_play_command(line: &str) -> Result<Option<PlayCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "movie" | "m" => PlayCommand::Movie(parse_id(rest)?),
        "actor" | "a" => PlayCommand::Actor(parse_id(rest)?),
        "search" | "s" | "/" => {
            if rest.is_empty() {
                return Err("search needs a query".to_string());
            }
            PlayCommand::Search(rest.to_string())
        }
        "pick" | "p" => {
            let index: usize = rest
                .parse()
                .map_err(|_| format!("'{}' is not a result number", rest))?;
            if index == 0 {
                return Err("results are numbered from 1".to_string());
            }
            PlayCommand::Pick(index)
        }
        "board" | "b" => PlayCommand::Board,
        "path" => PlayCommand::Path,
        "json" => PlayCommand::Json,
        "reset" => PlayCommand::Reset,
        "help" | "?" => PlayCommand::Help,
        "quit" | "exit" | "q" => PlayCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(Some(command))
}

/// Parse a positive numeric id
pub fn parse_id(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(format!("'{}' is not a valid id", raw.trim())),
        Ok(id) => Ok(id),
    }
}

pub const PLAY_HELP: &str = "\
Commands:
  search <query>   search movies and people (alias: s)
  pick <n>         add the n-th result of the last search (alias: p)
  movie <id>       add a movie by id (alias: m)
  actor <id>       add a person by id (alias: a)
  board            show the board
  path             show the best path
  json             print the board as JSON
  reset            start over with the same two actors
  quit             leave the game";

pub fn format_search_result(index: usize, result: &SearchResult) -> String {
    let kind = match result.media_type {
        MediaType::Person => "person",
        MediaType::Movie => "movie ",
        MediaType::Other => "other ",
    };
    format!(
        "{:>3}. [{}] {} (id {}, popularity {:.1})",
        index,
        kind,
        result.display_name(),
        result.id,
        result.popularity
    )
}

pub fn format_cast_member(member: &CastMember) -> String {
    match member.character.as_deref() {
        Some(character) if !character.is_empty() => {
            format!("{:>8}  {} as {}", member.id, member.name, character)
        }
        _ => format!("{:>8}  {}", member.id, member.name),
    }
}

pub fn format_actor(actor: &Actor) -> String {
    let mut line = format!("{} (id {}, popularity {:.1})", actor.name, actor.id, actor.popularity);
    if let Some(url) = actor.image_url() {
        line.push_str(&format!("\n  {}", url));
    }
    line
}

/// One-line status of the best path
pub fn format_path_summary(game: &Game) -> String {
    if !game.is_solved() {
        return "No path yet".to_string();
    }
    format!(
        "Best path: {} connection(s): {}",
        game.connection_count(),
        describe_path(&game.view())
    )
}

fn spinner(enabled: bool, message: String) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Some(pb)
}

/// Await a lookup behind a spinner
pub async fn with_spinner<T, F: Future<Output = T>>(enabled: bool, message: String, fut: F) -> T {
    let pb = spinner(enabled, message);
    let out = fut.await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    out
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn handle_search<S: EntitySource>(source: &S, args: &ArgMatches, quiet: bool) -> Result<()> {
    let query = required(args, "QUERY")?;
    let json = args.get_flag("json");
    let results = with_spinner(
        !quiet && !json,
        format!("Searching for '{}'...", query),
        source.search(query),
    )
    .await?;

    if json {
        return print_json(&results);
    }
    if results.is_empty() {
        println!("No results found.");
    }
    for (i, result) in results.iter().enumerate() {
        println!("{}", format_search_result(i + 1, result));
    }
    Ok(())
}

pub async fn handle_people<S: EntitySource>(source: &S, args: &ArgMatches, quiet: bool) -> Result<()> {
    let query = required(args, "QUERY")?;
    let json = args.get_flag("json");
    let people = with_spinner(
        !quiet && !json,
        format!("Searching people named '{}'...", query),
        source.search_people(query),
    )
    .await?;

    if json {
        return print_json(&people);
    }
    if people.is_empty() {
        println!("No results found.");
    }
    for (i, actor) in people.iter().enumerate() {
        println!("{:>3}. {}", i + 1, format_actor(actor));
    }
    Ok(())
}

pub async fn handle_cast<S: EntitySource>(source: &S, args: &ArgMatches, quiet: bool) -> Result<()> {
    let movie_id = id_arg(args, "MOVIE_ID")?;
    let json = args.get_flag("json");
    let cast = with_spinner(
        !quiet && !json,
        format!("Fetching cast of movie {}...", movie_id),
        source.movie_cast(movie_id),
    )
    .await?;

    if json {
        return print_json(&cast);
    }
    println!("{} cast member(s)", cast.len());
    for member in &cast {
        println!("{}", format_cast_member(member));
    }
    Ok(())
}

pub async fn handle_actor<S: EntitySource>(source: &S, args: &ArgMatches, quiet: bool) -> Result<()> {
    let actor_id = id_arg(args, "ACTOR_ID")?;
    let json = args.get_flag("json");
    let actor = with_spinner(
        !quiet && !json,
        format!("Fetching actor {}...", actor_id),
        source.actor_details(actor_id),
    )
    .await?;

    if json {
        return print_json(&actor);
    }
    println!("{}", format_actor(&actor));
    Ok(())
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing <{}>", name))
}

fn id_arg(args: &ArgMatches, name: &str) -> Result<u64> {
    args.get_one::<u64>(name)
        .copied()
        .with_context(|| format!("missing <{}>", name))
}

/// Interactive play loop state
pub struct PlaySession {
    pub game: Game,
    pub last_results: Vec<SearchResult>,
    pub show_spinner: bool,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl PlaySession {
    pub fn new(game: Game, show_spinner: bool) -> Self {
        Self {
            game,
            last_results: Vec::new(),
            show_spinner,
        }
    }

    /// Run one command to completion, returning the lines to print
    pub async fn execute<S: EntitySource>(
        &mut self,
        source: &S,
        command: PlayCommand,
    ) -> (Flow, Vec<String>) {
        let lines = match command {
            PlayCommand::Quit => return (Flow::Stop, vec!["Bye!".to_string()]),
            PlayCommand::Help => vec![PLAY_HELP.to_string()],
            PlayCommand::Board => vec![self.render(BoardFormat::Text)],
            PlayCommand::Json => vec![self.render(BoardFormat::Json)],
            PlayCommand::Path => vec![format_path_summary(&self.game)],
            PlayCommand::Reset => {
                self.game.reset();
                self.last_results.clear();
                vec!["Board cleared.".to_string()]
            }
            PlayCommand::Search(query) => self.search(source, &query).await,
            PlayCommand::Pick(index) => match index
                .checked_sub(1)
                .and_then(|i| self.last_results.get(i))
                .cloned()
            {
                Some(result) => {
                    let label = result.display_name().to_string();
                    let outcome = with_spinner(
                        self.show_spinner,
                        format!("Checking {}...", label),
                        self.game.select(source, &result),
                    )
                    .await;
                    self.describe_outcome(&label, outcome)
                }
                None => vec![format!("No result #{} (run a search first)", index)],
            },
            PlayCommand::Movie(id) => {
                let movie = self.known_movie(id);
                let outcome = with_spinner(
                    self.show_spinner,
                    format!("Fetching cast of movie {}...", id),
                    self.game.select_movie(source, &movie),
                )
                .await;
                self.describe_outcome(&format!("movie {}", id), outcome)
            }
            PlayCommand::Actor(id) => {
                let outcome = with_spinner(
                    self.show_spinner,
                    format!("Fetching actor {}...", id),
                    Self::select_actor_by_id(&mut self.game, source, id),
                )
                .await;
                self.describe_outcome(&format!("actor {}", id), outcome)
            }
        };
        (Flow::Continue, lines)
    }

    /// Title and poster from the last search when available, otherwise a bare id
    pub fn known_movie(&self, id: u64) -> Movie {
        self.last_results
            .iter()
            .filter(|r| r.media_type == MediaType::Movie && r.id == id)
            .find_map(SearchResult::as_movie)
            .unwrap_or_else(|| Movie::new(id, format!("Movie {}", id)))
    }

    async fn select_actor_by_id<S: EntitySource>(
        game: &mut Game,
        source: &S,
        id: u64,
    ) -> Result<MoveOutcome, GameError> {
        let actor = source.actor_details(id).await?;
        game.select_actor(source, &actor).await
    }

    async fn search<S: EntitySource>(&mut self, source: &S, query: &str) -> Vec<String> {
        let results = with_spinner(
            self.show_spinner,
            format!("Searching for '{}'...", query),
            source.search(query),
        )
        .await;

        match results {
            Ok(results) => {
                self.last_results = self.game.filter_search_results(results);
                if self.last_results.is_empty() {
                    return vec!["No results found.".to_string()];
                }
                self.last_results
                    .iter()
                    .enumerate()
                    .map(|(i, r)| format_search_result(i + 1, r))
                    .collect()
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                vec![format!("{} Search failed: {}", "✗".red(), e)]
            }
        }
    }

    fn render(&self, format: BoardFormat) -> String {
        match self.game.view().render(format) {
            Ok(text) => text,
            Err(e) => format!("{} Could not render board: {}", "✗".red(), e),
        }
    }

    fn describe_outcome(
        &self,
        label: &str,
        outcome: Result<MoveOutcome, GameError>,
    ) -> Vec<String> {
        match outcome {
            Ok(MoveOutcome::Connected { summary, newly_connected }) => {
                debug!("{} added {:?}", label, summary);
                let mut lines = vec![format!(
                    "{} Added {} ({} new link(s), {} newly connected actor(s))",
                    "✓".green().bold(),
                    label,
                    summary.edges_added,
                    newly_connected
                )];
                lines.push(format_path_summary(&self.game));
                if self.game.is_solved() {
                    lines.push(format!("{}", "Connected! Keep going to find a shorter path.".bright_green()));
                }
                lines
            }
            Ok(MoveOutcome::NoConnection) => vec![format!(
                "{} No connection found: {} doesn't feature anyone currently on your board. Try a different one.",
                "⚠".yellow(),
                label
            )],
            Err(GameError::Lookup(e)) => vec![format!(
                "{} Could not fetch {}: {}. Try again.",
                "✗".red(),
                label,
                e
            )],
            Err(e) => vec![format!("{} {}", "✗".red(), e)],
        }
    }
}

/// Read commands from stdin until EOF or `quit`
pub async fn handle_play<S: EntitySource>(source: &S, args: &ArgMatches, quiet: bool) -> Result<()> {
    let from = id_arg(args, "from")?;
    let to = id_arg(args, "to")?;
    if from == to {
        bail!("--from and --to must be different actors");
    }

    let game = with_spinner(
        !quiet,
        "Loading both actors...".to_string(),
        Game::start(source, from, to),
    )
    .await?;

    let (a, b) = game.seeds();
    println!(
        "Connect {} and {}",
        a.name.bright_cyan().bold(),
        b.name.bright_cyan().bold()
    );
    if !quiet {
        println!("Type 'help' for available commands, 'quit' to exit.");
    }

    let mut session = PlaySession::new(game, !quiet);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_play_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{} {}", "⚠".yellow(), msg);
                continue;
            }
        };

        let (flow, output) = session.execute(source, command).await;
        for out in output {
            println!("{}", out);
        }
        if flow == Flow::Stop {
            break;
        }
    }

    if args.get_flag("json") {
        println!("{}", session.game.view().to_json()?);
    }
    Ok(())
}
