//! macro_indicators
//!
//! A small synchronous Rust client for the Macroeconomy Indicators API, which
//! serves World Bank macroeconomic series (broad money, GDP, inflation, ...).
//!
//! ### Features
//! - List countries (ISO3 codes, optionally with names) and available indicators
//! - Fetch yearly observations of one indicator for one country
//! - Typed errors: [`Error::BadRequest`] (400), [`Error::NotFound`] (404),
//!   [`Error::Api`] (everything else, including network failures)
//!
//! ### Example
//! ```no_run
//! use macro_indicators::{Client, Error};
//!
//! let client = Client::default();
//! let names = client.get_countries_with_names()?;
//! println!("SWE = {}", names["SWE"]);
//!
//! match client.get_country_data("SWE", "M2_LCU", 1990, 2015) {
//!     Err(Error::BadRequest { message }) => eprintln!("bad years: {message}"),
//!     other => println!("{:#?}", other?),
//! }
//! # Ok::<(), macro_indicators::Error>(())
//! ```
//!
//! The crate-level functions ([`root`], [`get_indicators`], ...) build a
//! client from the environment on each call; set `MACRO_INDICATORS_BASE_URL`
//! to point them at another host.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
mod response;

pub use api::Client;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use models::{CountryData, CountryNames, Indicator, Welcome};

/// See [`Client::root`].
pub fn root() -> Result<Welcome> {
    Client::from_env()?.root()
}

/// See [`Client::get_country_codes`].
pub fn get_country_codes() -> Result<Vec<String>> {
    Client::from_env()?.get_country_codes()
}

/// See [`Client::get_countries_with_names`].
pub fn get_countries_with_names() -> Result<CountryNames> {
    Client::from_env()?.get_countries_with_names()
}

/// See [`Client::get_indicators`].
pub fn get_indicators() -> Result<Vec<Indicator>> {
    Client::from_env()?.get_indicators()
}

/// See [`Client::get_country_data`].
pub fn get_country_data(
    country_code: &str,
    indicator: &str,
    start_year: i32,
    end_year: i32,
) -> Result<CountryData> {
    Client::from_env()?.get_country_data(country_code, indicator, start_year, end_year)
}
