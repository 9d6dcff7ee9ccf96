// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CineMood command-line client
//!
//! Drives the session and recommendation core against a running backend:
//!
//! ```text
//! cinemood-client register <username> <password>
//! cinemood-client login <username> <password>
//! cinemood-client guest
//! cinemood-client logout
//! cinemood-client whoami
//! cinemood-client mood <mood>
//! cinemood-client resume
//! cinemood-client open <path>
//! ```

use cinemood_client::{
    config::Config,
    models::{RecommendationState, NO_RECOMMENDATIONS},
    routes::Navigation,
    store::FileStore,
    CineMood,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = Config::from_env()?;
    let store = Arc::new(FileStore::open(&config.store_path)?);
    tracing::info!(backend = %config.backend_url, store = %config.store_path.display(), "Starting CineMood client");

    let app = CineMood::new(config, store)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["register", username, password] => report_login(app.auth.register(username, password).await),
        ["login", username, password] => report_login(app.auth.login(username, password).await),
        ["guest"] => report_login(app.auth.login_guest().await),
        ["logout"] => {
            app.logout().await;
            println!("Logged out.");
        }
        ["whoami"] => {
            println!("{}", serde_json::to_string_pretty(&app.sessions.session())?);
        }
        ["mood", mood] => match app.navigate("/recommendations") {
            Navigation::Render(_) => match app.recommendations.select_mood(mood).await {
                Ok(state) => print_state(&state),
                Err(e) => println!("{}", e.user_message()),
            },
            Navigation::Redirect(to) => println!("Please log in first (redirect to {}).", to),
        },
        ["resume"] => match app.recommendations.resume().await {
            Some(state) => print_state(&state),
            None => println!("Select your mood to get recommendations."),
        },
        ["open", path] => match app.navigate(path) {
            Navigation::Render(route) => println!("render {}", route),
            Navigation::Redirect(route) => println!("redirect {}", route),
        },
        _ => {
            eprintln!("usage: cinemood-client <register|login|guest|logout|whoami|mood|resume|open> [args]");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn report_login(result: cinemood_client::error::Result<cinemood_client::models::Session>) {
    match result {
        Ok(session) => println!("Welcome, {}!", session.subject().unwrap_or("guest")),
        Err(e) => println!("{}", e.user_message()),
    }
}

fn print_state(state: &RecommendationState) {
    match state {
        RecommendationState::Success { mood, items } if items.is_empty() => {
            println!("Recommended Movies for Mood: {}", mood.label());
            println!("{}", NO_RECOMMENDATIONS);
        }
        RecommendationState::Success { mood, items } => {
            println!("Recommended Movies for Mood: {}", mood.label());
            for (index, movie) in items.iter().enumerate() {
                let year = movie
                    .release_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                let key = movie.id.map_or_else(|| format!("#{}", index + 1), |id| id.to_string());
                println!("  [{}] {} ({})", key, movie.display_title(), year);
            }
        }
        RecommendationState::Failed { message, .. } => println!("{}", message),
        RecommendationState::Loading { .. } => println!("Loading recommendations..."),
        RecommendationState::Idle => println!("Select your mood to get recommendations."),
    }
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cinemood_client=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
