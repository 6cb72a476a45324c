//! Best-effort city geocoding via the Nominatim search endpoint.
//!
//! One attempt per form submit, no retry policy: any transport or decode
//! failure surfaces to the caller, which shows it to the user.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("city not found")]
    NotFound,
    #[error("unable to reach the geocoding service")]
    Network,
}

/// Resolved coordinates plus the geocoder's display name for the result.
#[derive(Clone, Debug)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

/// Look up a free-text query; `NotFound` when the result set is empty,
/// `Network` on transport or decode failure.
pub async fn lookup(query: &str) -> Result<Location, GeocodeError> {
    let window = web::window().ok_or(GeocodeError::Network)?;
    let encoded = js_sys::encode_uri_component(query);
    let url = format!("{SEARCH_URL}?q={encoded}&format=json&limit=1");

    let resp_value = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| GeocodeError::Network)?;
    let resp: web::Response = resp_value.dyn_into().map_err(|_| GeocodeError::Network)?;
    if !resp.ok() {
        return Err(GeocodeError::Network);
    }
    let text_promise = resp.text().map_err(|_| GeocodeError::Network)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| GeocodeError::Network)?
        .as_string()
        .ok_or(GeocodeError::Network)?;

    let places: Vec<Place> = serde_json::from_str(&text).map_err(|_| GeocodeError::Network)?;
    let place = places.into_iter().next().ok_or(GeocodeError::NotFound)?;
    let lat = place.lat.parse().map_err(|_| GeocodeError::Network)?;
    let lon = place.lon.parse().map_err(|_| GeocodeError::Network)?;
    Ok(Location {
        lat,
        lon,
        display_name: place.display_name,
    })
}
