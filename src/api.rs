//! Synchronous client for the **Macroeconomy Indicators API**.
//!
//! Every operation is a single blocking `GET` against the configured base URL.
//! Non-2xx responses are translated into [`Error`]:
//! - `400` → [`Error::BadRequest`] (e.g. years out of bounds)
//! - `404` → [`Error::NotFound`] (unknown country or indicator)
//! - anything else, including transport failures → [`Error::Api`]
//!
//! There are no retries and no caching. The client only holds immutable
//! configuration, so a single instance can be shared across threads.
//!
//! Typical usage:
//! ```no_run
//! # use macro_indicators::Client;
//! let client = Client::from_env()?;
//! let data = client.get_country_data("SWE", "M2_LCU", 2010, 2015)?;
//! for (year, value) in data.observations() {
//!     println!("{year}: {value:?}");
//! }
//! # Ok::<(), macro_indicators::Error>(())
//! ```
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{CountryData, CountryNames, Indicator, Welcome};
use crate::response::Reply;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default()).expect("reqwest client build")
    }
}

// Allow -, _, . unescaped in values (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// `base + path`, followed by percent-encoded `key=value` pairs.
fn build_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base, path);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    percent_encoding::utf8_percent_encode(k, SAFE),
                    percent_encoding::utf8_percent_encode(v, SAFE)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

impl Client {
    /// Build a client from `config`: timeouts, user agent and a redirect cap of 5.
    ///
    /// ### Errors
    /// [`Error::Api`] without a status code if the HTTP client (TLS backend)
    /// cannot be initialised.
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(5))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Api {
                message: format!("failed to build HTTP client: {e}"),
                status_code: None,
                source: Some(Box::new(e)),
            })?;
        Ok(Self { config, http })
    }

    /// Client with default settings, honouring `MACRO_INDICATORS_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Welcome message from the API root.
    pub fn root(&self) -> Result<Welcome> {
        self.fetch("/", &[])?.json("root")
    }

    /// All available ISO3 country codes, in server order.
    pub fn get_country_codes(&self) -> Result<Vec<String>> {
        self.fetch("/country-codes", &[])?.json("country codes")
    }

    /// ISO3 code → country name.
    pub fn get_countries_with_names(&self) -> Result<CountryNames> {
        self.fetch("/countries", &[])?.json("countries")
    }

    /// All indicators the server knows about.
    pub fn get_indicators(&self) -> Result<Vec<Indicator>> {
        self.fetch("/indicators", &[])?.json("indicators")
    }

    /// Observations of `indicator` (an [`Indicator::name`]) for `country_code`
    /// over `start_year..=end_year`.
    ///
    /// The years are sent as given; range checks (>= 2000, start <= end) are
    /// the server's and come back as [`Error::BadRequest`].
    ///
    /// ### Errors
    /// - [`Error::NotFound`] for an unknown country or indicator
    /// - [`Error::BadRequest`] for invalid years
    /// - [`Error::Api`] if `years` and `values` differ in length
    pub fn get_country_data(
        &self,
        country_code: &str,
        indicator: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<CountryData> {
        let params = [
            ("country_code", country_code.to_string()),
            ("indicator", indicator.to_string()),
            ("start_year", start_year.to_string()),
            ("end_year", end_year.to_string()),
        ];
        let reply = self.fetch("/data", &params)?;
        let data: CountryData = reply.json("country data")?;
        if !data.is_aligned() {
            return Err(Error::malformed(
                reply.status,
                format!(
                    "malformed country data response: {} years but {} values",
                    data.years.len(),
                    data.values.len()
                ),
                None,
            ));
        }
        Ok(data)
    }

    /// Untyped GET. JSON bodies are returned as-is, anything else as
    /// `{"raw": "<body>"}`. Errors follow the same policy as the typed calls.
    pub fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        self.fetch(path, params)?.into_value()
    }

    fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Reply> {
        let url = build_url(&self.config.base_url, path, params);
        log::debug!("GET {}", url);

        let resp = self.http.get(&url).send().map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            Error::transport(&url, e)
        })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.text().map_err(|e| {
            log::warn!("GET {} failed reading body: {}", url, e);
            Error::transport(&url, e)
        })?;
        log::debug!("GET {} -> {}", url, status);

        Reply::new(status, content_type, body).error_for_status()
    }
}
