/// Upstream ingest layer for the air-quality dashboard service.
///
/// Submodules:
/// - `client` — the generic one-shot HTTP adapter every proxy handler uses.
/// - `openweather` — OpenWeather Air Pollution API: URL builder, response
///   structs, and the flattening reshape.
/// - `nasa` — NASA EONET / GIBS / POWER / DONKI URL builders and the local
///   TEMPO service passthrough URL.

pub mod client;
pub mod nasa;
pub mod openweather;
