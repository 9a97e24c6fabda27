//! Plain-text snapshots of the session state.

use browse::{SearchSession, Status};
use omdb::MovieDetail;

pub fn session(session: &SearchSession) {
    match session.status() {
        Status::Idle => {
            println!("Type a title to search.");
            return;
        }
        Status::Loading => {
            println!("Searching...");
            return;
        }
        Status::Error { message } => {
            println!("{}", message);
            return;
        }
        Status::LoadingMore | Status::Success => {}
    }

    let filters: Vec<String> = session
        .available_filters()
        .iter()
        .map(|f| {
            if f == session.active_filter() {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect();
    println!("Filter: {}", filters.join(" "));

    let visible = session.visible_results();
    if visible.is_empty() {
        println!(
            "No results for type \"{}\".",
            session.active_filter()
        );
    }
    for (i, movie) in visible.iter().enumerate() {
        println!("{:3}. {} ({}) [{}]", i + 1, movie.title, movie.year, movie.kind);
    }
    println!(
        "Showing {} of {} for \"{}\"{}",
        session.results().len(),
        session.total_results(),
        session.query(),
        if session.can_load_more() {
            " - /more for the next page"
        } else {
            ""
        }
    );
}

pub fn detail(detail: &MovieDetail) {
    println!("{}", detail.title);

    let sub: Vec<&str> = [
        detail.field(&detail.year),
        detail.field(&detail.rated),
        detail.field(&detail.runtime),
        detail.field(&detail.kind),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !sub.is_empty() {
        println!("{}", sub.join(" | "));
    }

    let genres = detail.genres();
    if !genres.is_empty() {
        println!("Genre: {}", genres.join(", "));
    }
    if let Some(plot) = detail.plot_text() {
        println!("\n{}\n", plot);
    }

    let rows = [
        ("Director", &detail.director),
        ("Writer", &detail.writer),
        ("Actors", &detail.actors),
        ("Awards", &detail.awards),
        ("Released", &detail.released),
        ("Language", &detail.language),
        ("Country", &detail.country),
        ("BoxOffice", &detail.box_office),
        ("DVD Release", &detail.dvd),
        ("Production", &detail.production),
        ("Website", &detail.website),
    ];
    for (label, value) in rows {
        if let Some(value) = detail.field(value) {
            println!("{}: {}", label, value);
        }
    }

    if !detail.ratings.is_empty() {
        println!();
        for rating in &detail.ratings {
            let votes = if rating.source == "Internet Movie Database" {
                detail
                    .field(&detail.imdb_votes)
                    .map(|v| format!(" ({} votes)", v))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            println!("{}: {}{}", rating.source, rating.value, votes);
        }
    }
}
