//! Terminal frontend for the directory: cascading state → city selection on
//! the home view, city detail behind the `/city/<slug>` route, and the
//! not-found view for everything else.

use std::io::{self, Write as _};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use askmycity::render;
use askmycity::resolver::{LocationResolver, Resolution};
use askmycity::routing::Route;
use askmycity::selector::{CascadingSelector, Fetch};
use askmycity::{CatalogClient, DirectoryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("askmycity=info")),
        )
        .init();

    let config = DirectoryConfig::from_env().context("invalid configuration")?;
    let client = CatalogClient::new(&config)?;

    println!("AskMyCity — India's Essential Service Directory");

    // Returning from a city view remounts the selector at its initial state.
    while let Some(route) = run_home(&client).await? {
        run_city_view(&client, &route).await?;
    }

    Ok(())
}

/// Drive the home view. Returns the submitted route, or `None` to quit.
async fn run_home(client: &CatalogClient) -> Result<Option<Route>> {
    let mut selector = CascadingSelector::new();
    selector.load_states(client).await;

    let Fetch::Ready(states) = selector.states() else {
        // Failed state load is terminal for this session.
        println!("{}", render::states_placeholder(selector.states()));
        return Ok(None);
    };
    let states = states.clone();

    loop {
        println!("\nState / Union Territory");
        for (index, state) in states.iter().enumerate() {
            println!("  {}. {}", index + 1, state.name);
        }

        let line = prompt("Select state (number, q to quit): ")?;
        if line == "q" {
            return Ok(None);
        }
        let Some(state) = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| states.get(i))
        else {
            println!("Unrecognized choice.");
            continue;
        };

        selector.change_state(client, Some(state.clone())).await;
        if selector.cities().is_failed() {
            // Re-selecting the state is the retry path.
            println!("{}", render::cities_placeholder(true, selector.cities()));
            continue;
        }

        let options = selector.city_options().to_vec();
        if options.is_empty() {
            println!("No cities listed for {} yet.", state.name);
            continue;
        }

        println!("\nCity");
        for (index, city) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, city.name);
        }

        let line = prompt("Select city (number, b to go back, q to quit): ")?;
        if line == "q" {
            return Ok(None);
        }
        if line == "b" {
            continue;
        }
        let Some(city) = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        else {
            println!("Unrecognized choice.");
            continue;
        };

        selector.select_city(&city.slug);
        if let Some(route) = selector.submit() {
            // Navigation goes through the path, as the routing contract does.
            return Ok(Some(Route::parse(&route.path())));
        }
    }
}

/// Drive the city detail view for a routed identifier, with inline retry on
/// transient failures.
async fn run_city_view(client: &CatalogClient, route: &Route) -> Result<()> {
    let Route::City(slug) = route else {
        println!("{}", render::not_found_page());
        prompt("Press Enter to go back home: ")?;
        return Ok(());
    };

    let mut resolver = LocationResolver::new();
    resolver.resolve(client, slug).await;

    loop {
        match resolver.outcome().clone() {
            Resolution::Ready(detail) => {
                println!("{}", render::city_page(&detail));
                prompt("Press Enter to go back home: ")?;
                return Ok(());
            }
            Resolution::NotFound => {
                println!("{}", render::not_found_page());
                prompt("Press Enter to go back home: ")?;
                return Ok(());
            }
            Resolution::TransientError(message) => {
                println!("{}", render::transient_error_page(&message));
                let line = prompt("Press r to retry, or Enter to go back home: ")?;
                if line != "r" {
                    return Ok(());
                }
                if let Some(request) = resolver.retry() {
                    let result = client.city_detail(request.city_slug()).await;
                    resolver.apply(&request, result);
                }
            }
            Resolution::Pending => return Ok(()),
        }
    }
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
