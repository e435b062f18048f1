//! aqmon_service — backend for the climate/air-quality dashboard.
//!
//! A small proxy service in front of a handful of third-party REST APIs
//! (NASA EONET, GIBS imagery links, POWER temperature data, DONKI space
//! weather, OpenWeather air pollution), plus the single source of truth
//! for AQI classification shared with the dashboard display.
//!
//! Module map:
//! - `aqi` — the classification threshold table (two scales, never merged).
//! - `model` — shared domain types and the error taxonomy.
//! - `config` — process configuration, read from the environment once.
//! - `sources` — registry of proxied upstream sources.
//! - `ingest` — the one-shot upstream HTTP adapter and per-source clients.
//! - `web` — axum router and proxy handlers.
//! - `samples` — sample datasets the dashboard renders without live data.

pub mod aqi;
pub mod config;
pub mod ingest;
pub mod model;
pub mod samples;
pub mod sources;
pub mod web;
