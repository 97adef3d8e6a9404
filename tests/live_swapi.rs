//! Runs the catalog against https://swapi.dev. Needs network access:
//! `cargo test --test live_swapi -- --ignored`

use swapi_smoke::scenarios;
use swapi_smoke::SwapiClient;

async fn check(name: &str) {
    let scenario = scenarios::find(name).expect("scenario exists");
    let client = SwapiClient::default();
    if let Err(e) = scenario.run(&client).await {
        panic!("{} failed: {}", name, e);
    }
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn root_lists_categories() {
    check("root_lists_categories").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn invalid_term_is_rejected() {
    check("invalid_term_is_rejected").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn search_returns_single_match() {
    check("search_returns_single_match").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn search_returns_no_match() {
    check("search_returns_no_match").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn search_returns_multiple_matches() {
    check("search_returns_multiple_matches").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn empty_search_returns_all_people() {
    check("empty_search_returns_all_people").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn film_by_id() {
    check("film_by_id").await;
}

#[tokio::test]
#[ignore = "hits the live swapi.dev service"]
async fn missing_planet_is_not_found() {
    check("missing_planet_is_not_found").await;
}
