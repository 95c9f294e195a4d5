//! In-process stand-in for the Macroeconomy Indicators API.
//!
//! Serves a small fixed dataset on a random local port, with the same
//! validation the real service applies to `/data` (FastAPI-style
//! `{"detail": ...}` bodies). A few extra routes produce failure modes
//! used by the error-translation tests.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use macro_indicators::{Client, Config};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2024;

const COUNTRIES: &[(&str, &str)] = &[
    ("AFG", "Afghanistan"),
    ("ALB", "Albania"),
    ("DZA", "Algeria"),
    ("SWE", "Sweden"),
];

const INDICATORS: &[(&str, &str, &str, &str)] = &[
    (
        "M2_LCU",
        "FM.LBL.BMNY.CN",
        "Broad money (M2), current local currency units",
        "LCU",
    ),
    (
        "GDP_USD",
        "NY.GDP.MKTP.CD",
        "GDP (current US$)",
        "USD",
    ),
    (
        "INFLATION",
        "FP.CPI.TOTL.ZG",
        "Inflation, consumer prices (annual %)",
        "%",
    ),
    // Served with misaligned years/values
    ("BROKEN", "XX.BROKEN", "Deliberately inconsistent series", "n/a"),
];

fn detail(status: StatusCode, msg: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": msg })))
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Macroeconomy Indicators API" }))
}

async fn country_codes() -> Json<Vec<&'static str>> {
    Json(COUNTRIES.iter().map(|(c, _)| *c).collect())
}

async fn countries() -> Json<Value> {
    let map: serde_json::Map<String, Value> = COUNTRIES
        .iter()
        .map(|(c, n)| (c.to_string(), Value::from(*n)))
        .collect();
    Json(Value::Object(map))
}

async fn indicators() -> Json<Value> {
    Json(Value::Array(
        INDICATORS
            .iter()
            .map(|(name, code, description, unit)| {
                json!({ "name": name, "code": code, "description": description, "unit": unit })
            })
            .collect(),
    ))
}

#[derive(Deserialize)]
struct DataQuery {
    country_code: String,
    indicator: String,
    start_year: i32,
    end_year: i32,
}

/// Deterministic series; 2012 is always missing.
fn value(country: &str, year: i32) -> Option<f64> {
    if year == 2012 {
        return None;
    }
    let base = (country.bytes().map(u64::from).sum::<u64>() as f64) * 1e10;
    Some(base + f64::from(year - MIN_YEAR) * 1e9)
}

async fn data(Query(q): Query<DataQuery>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Some((code, name)) = COUNTRIES.iter().find(|(c, _)| *c == q.country_code) else {
        return Err(detail(StatusCode::NOT_FOUND, "Country not found"));
    };
    let Some((ind, _, description, unit)) = INDICATORS.iter().find(|i| i.0 == q.indicator) else {
        return Err(detail(StatusCode::NOT_FOUND, "Indicator not found"));
    };
    if q.start_year < MIN_YEAR {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            &format!("start_year must be >= {MIN_YEAR}"),
        ));
    }
    if q.end_year > MAX_YEAR {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            &format!("end_year must be <= {MAX_YEAR}"),
        ));
    }
    if q.start_year > q.end_year {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            "start_year must be <= end_year",
        ));
    }

    let years: Vec<i32> = (q.start_year..=q.end_year).collect();
    let mut values: Vec<Option<f64>> = years.iter().map(|y| value(code, *y)).collect();
    if *ind == "BROKEN" {
        values.pop();
    }
    Ok(Json(json!({
        "country": code,
        "country_name": name,
        "indicator": ind,
        "description": description,
        "unit": unit,
        "years": years,
        "values": values,
    })))
}

async fn internal_error() -> (StatusCode, Json<Value>) {
    detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal failure")
}

async fn plain_text() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "pong")
}

async fn bad_gateway_html() -> impl IntoResponse {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "text/html")],
        "<h1>Bad Gateway</h1>",
    )
}

async fn not_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{not json")
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({ "message": "late" }))
}

async fn user_agent(headers: HeaderMap) -> Json<Value> {
    let ua = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Json(json!({ "user_agent": ua }))
}

/// Redirects to itself forever.
async fn redirect_loop() -> Redirect {
    Redirect::temporary("/loop")
}

/// `n` redirects, then the welcome message.
async fn hop(Path(n): Path<u32>) -> Response {
    if n == 0 {
        welcome().await.into_response()
    } else {
        Redirect::temporary(&format!("/hop/{}", n - 1)).into_response()
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/country-codes", get(country_codes))
        .route("/countries", get(countries))
        .route("/indicators", get(indicators))
        .route("/data", get(data))
        .route("/boom", get(internal_error))
        .route("/ping", get(plain_text))
        .route("/gateway", get(bad_gateway_html))
        .route("/garbled", get(not_json))
        .route("/slow", get(slow))
        .route("/user-agent", get(user_agent))
        .route("/loop", get(redirect_loop))
        .route("/hop/{n}", get(hop))
}

/// Start the fixture server on a random port and return its base URL.
pub fn spawn() -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Fixture server plus a client pointed at it.
pub fn client() -> Client {
    Client::new(Config::default().with_base_url(spawn())).unwrap()
}

/// Base URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
