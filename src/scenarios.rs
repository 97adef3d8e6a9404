//! Fixed smoke checks against SWAPI.
//!
//! Expected values were taken from https://swapi.dev and will drift if the
//! live dataset changes.

use serde_json::Value;
use std::fmt;

use crate::assertions::{
    expect_empty, expect_eq, expect_failure, expect_non_empty, expect_object, expect_present,
    AssertionError,
};
use crate::client::{ErrorKind, SwapiClient};

pub type Check = fn(&Value) -> Result<(), AssertionError>;

#[derive(Clone, Copy)]
pub enum Expectation {
    Succeeds(Check),
    Fails(ErrorKind),
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Succeeds(_) => f.write_str("Succeeds(..)"),
            Expectation::Fails(kind) => f.debug_tuple("Fails").field(kind).finish(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub term: &'static str,
    pub search: &'static str,
    pub expect: Expectation,
}

impl Scenario {
    /// Issue the request and hold the result against the expectation.
    pub async fn run(&self, client: &SwapiClient) -> Result<(), AssertionError> {
        let result = client.request(self.term, self.search).await;
        match self.expect {
            Expectation::Succeeds(check) => check(&result?),
            Expectation::Fails(kind) => expect_failure(result, kind),
        }
    }
}

pub const CATEGORIES: [&str; 6] = [
    "people",
    "planets",
    "films",
    "species",
    "vehicles",
    "starships",
];

pub const NOT_FOUND: ErrorKind = ErrorKind::Status(404);

pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "root_lists_categories",
            term: "",
            search: "",
            expect: Expectation::Succeeds(root_lists_categories),
        },
        Scenario {
            name: "invalid_term_is_rejected",
            term: "/$/asde",
            search: "",
            expect: Expectation::Fails(NOT_FOUND),
        },
        Scenario {
            name: "search_returns_single_match",
            term: "people",
            search: "luke",
            expect: Expectation::Succeeds(single_match),
        },
        Scenario {
            name: "search_returns_no_match",
            term: "people",
            search: "A new hope",
            expect: Expectation::Succeeds(no_match),
        },
        Scenario {
            name: "search_returns_multiple_matches",
            term: "people",
            search: "skywalker",
            expect: Expectation::Succeeds(multiple_matches),
        },
        Scenario {
            name: "empty_search_returns_all_people",
            term: "people",
            search: "",
            expect: Expectation::Succeeds(all_people),
        },
        Scenario {
            name: "film_by_id",
            term: "films/1",
            search: "",
            expect: Expectation::Succeeds(a_new_hope),
        },
        Scenario {
            name: "missing_planet_is_not_found",
            term: "planets/72",
            search: "",
            expect: Expectation::Fails(NOT_FOUND),
        },
    ]
}

pub fn find(name: &str) -> Option<Scenario> {
    catalog().into_iter().find(|scenario| scenario.name == name)
}

fn root_lists_categories(body: &Value) -> Result<(), AssertionError> {
    expect_object(body)?;
    for category in CATEGORIES {
        expect_present(body, &format!("/{}", category))?;
    }
    Ok(())
}

fn single_match(body: &Value) -> Result<(), AssertionError> {
    expect_eq(body, "/count", 1)?;
    expect_present(body, "/results")?;
    expect_eq(body, "/results/0/name", "Luke Skywalker")
}

fn no_match(body: &Value) -> Result<(), AssertionError> {
    expect_eq(body, "/count", 0)?;
    expect_empty(body, "/results")
}

fn multiple_matches(body: &Value) -> Result<(), AssertionError> {
    expect_eq(body, "/count", 3)?;
    expect_non_empty(body, "/results")
}

fn all_people(body: &Value) -> Result<(), AssertionError> {
    expect_eq(body, "/count", 82)?;
    expect_present(body, "/results")
}

fn a_new_hope(body: &Value) -> Result<(), AssertionError> {
    expect_eq(body, "/title", "A New Hope")?;
    expect_eq(body, "/episode_id", 4)?;
    expect_eq(body, "/director", "George Lucas")?;
    expect_eq(
        body,
        "/planets",
        vec![
            "https://swapi.dev/api/planets/1/",
            "https://swapi.dev/api/planets/2/",
            "https://swapi.dev/api/planets/3/",
        ],
    )
}
