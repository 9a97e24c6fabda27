use std::io::{self, BufRead, Write};

use clap::Parser;

use browse::{DetailLookup, OmdbService, SearchSession, Status, TypeFilter};

mod render;

#[derive(Parser)]
#[command(name = "moviefind")]
#[command(about = "Search movies on OMDb from the terminal", long_about = None)]
struct Cli {
    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY")]
    api_key: String,
}

const HELP: &str = "\
Commands:
  /search <query>   search for a title (bare text works too)
  /more             load the next page of results
  /filter <t>       show only results of one type (or `all`)
  /open <n>         show details for the n-th visible result
  /clear            drop the current search
  /quit             exit";

/// One line of user input, parsed. Bare text is a search; unknown slash
/// commands are rejected rather than sent to the service as a query.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    More,
    Filter(&'a str),
    Open(usize),
    Clear,
    Quit,
    Help,
    Empty,
    Invalid(&'static str),
}

fn parse_command(input: &str) -> Command<'_> {
    let (head, rest) = input
        .split_once(' ')
        .map_or((input, ""), |(c, r)| (c, r.trim()));
    match head {
        "/quit" | "/q" => Command::Quit,
        "/help" => Command::Help,
        "/clear" => Command::Clear,
        "/more" => Command::More,
        "/search" => {
            if rest.is_empty() {
                Command::Invalid("Usage: /search <query>")
            } else {
                Command::Search(rest)
            }
        }
        "/filter" => {
            if rest.is_empty() {
                Command::Invalid("Usage: /filter <type|all>")
            } else {
                Command::Filter(rest)
            }
        }
        "/open" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Open(n),
            _ => Command::Invalid("Usage: /open <n>"),
        },
        "" => Command::Empty,
        head if head.starts_with('/') => Command::Invalid("Unknown command. /help lists commands."),
        _ => Command::Search(input),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let http_client = reqwest::Client::new();
    let service = OmdbService::new(omdb::OmdbClient::with_client(http_client, cli.api_key));

    let mut session = SearchSession::new();

    println!("{}", HELP);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;

        match parse_command(line.trim()) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Clear => {
                session.clear();
                println!("Cleared.");
            }
            Command::More => {
                session.load_more(&service).await;
                render::session(&session);
            }
            Command::Filter(name) => {
                session.set_filter(TypeFilter::parse(name));
                render::session(&session);
            }
            Command::Open(n) => open_detail(&session, &service, n).await,
            Command::Empty => {
                // An emptied query drops the previous results.
                if session.total_results() > 0 {
                    session.clear();
                    println!("Cleared.");
                }
            }
            Command::Search(query) => {
                session.search(&service, query).await;
                render::session(&session);
            }
            Command::Invalid(usage) => println!("{}", usage),
        }
    }

    Ok(())
}

async fn open_detail(session: &SearchSession, service: &OmdbService, index: usize) {
    let visible = session.visible_results();
    let Some(movie) = visible.get(index - 1) else {
        println!("No result #{} on screen.", index);
        return;
    };

    let mut lookup = DetailLookup::new();
    lookup.fetch(service, &movie.imdb_id).await;

    match lookup.status() {
        Status::Success => {
            if let Some(detail) = lookup.detail() {
                render::detail(detail);
            }
        }
        Status::Error { message } => println!("{}", message),
        _ => {}
    }
}
