//! Smoke checks for the Star Wars API (https://swapi.dev).
//!
//! [`client::SwapiClient`] builds a URL from a term and an optional search
//! and returns the decoded JSON body. [`scenarios::catalog`] holds the fixed
//! checks, and [`runner::run`] drives them and collects a [`runner::Report`].

pub mod assertions;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod logging;
pub mod output;
pub mod runner;
pub mod scenarios;

pub use client::{ErrorKind, RequestError, SwapiClient};
pub use endpoint::{build_url, Endpoint};
