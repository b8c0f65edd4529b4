use crate::domain::DecoratedEstate;
use maud::{html, Markup};
use serde::Serialize;

/// One pin, read by `/static/map.js` from the `data-markers` attribute.
/// `popup` is already-escaped HTML.
#[derive(Debug, Serialize)]
struct Marker {
    lat: f64,
    lng: f64,
    popup: String,
}

fn markers(estates: &[DecoratedEstate<'_>]) -> Vec<Marker> {
    estates
        .iter()
        .filter_map(|e| {
            let (lat, lng) = e.coordinates()?;
            Some(Marker {
                lat,
                lng,
                popup: popup(e).into_string(),
            })
        })
        .collect()
}

fn popup(estate: &DecoratedEstate<'_>) -> Markup {
    let address = if estate.display_street_and_number.is_empty() {
        estate.display_zip_code.clone()
    } else {
        format!("{}, {}", estate.display_street_and_number, estate.display_zip_code)
    };

    html! {
        @if let Some(image) = estate.cover_image() {
            img src=(image) width="160" alt="";
            br;
        }
        strong { (estate.display_price) }
        br;
        (address)
        br;
        a href=(estate.listing_url()) target="_blank" rel="noopener" { "open listing" }
    }
}

pub fn map_results(estates: Option<&[DecoratedEstate<'_>]>, is_loading: bool) -> Markup {
    let estates = estates.unwrap_or_default();
    let markers = markers(estates);
    let unplaced = estates.len() - markers.len();
    let markers_json = serde_json::to_string(&markers).unwrap_or_else(|_| "[]".to_string());

    html! {
        div class="map-results" {
            @if is_loading {
                p class="loading" { "Loading map…" }
            }
            div class="estate-map" data-markers=(markers_json) {}
            @if unplaced > 0 {
                p class="muted" {
                    (unplaced) " estate" @if unplaced >= 2 { "s" } " without a location not shown."
                }
            }
        }
    }
}
