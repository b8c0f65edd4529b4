use crate::domain::DecoratedEstate;
use maud::{html, Markup};

const SKELETON_CARDS: usize = 6;

/// Card grid. `fetch_next` is the URL of the next page; the "load more"
/// control only shows while fewer than `total_count` estates are on screen.
pub fn grid_results(
    estates: Option<&[DecoratedEstate<'_>]>,
    is_loading: bool,
    fetch_next: Option<&str>,
    total_count: Option<u64>,
) -> Markup {
    html! {
        @match estates {
            None if is_loading => (skeleton_grid()),
            None => div class="empty" { "No estates to show." },
            Some([]) => div class="empty" { "No estates match." },
            Some(estates) => {
                div class="estate-grid" aria-busy=(if is_loading { "true" } else { "false" }) {
                    (grid_chunk(estates, fetch_next.filter(|_| has_more(estates.len(), total_count))))
                }
            }
        }
    }
}

/// Cards followed by the control that swaps itself for the next chunk.
pub fn grid_chunk(estates: &[DecoratedEstate<'_>], fetch_next: Option<&str>) -> Markup {
    html! {
        @for estate in estates {
            (estate_card(estate))
        }
        @if let Some(url) = fetch_next {
            div class="load-more" {
                button
                    type="button"
                    hx-get=(url)
                    hx-target="closest .load-more"
                    hx-swap="outerHTML"
                    hx-disabled-elt="this"
                { "Load more" }
            }
        }
    }
}

fn has_more(shown: usize, total_count: Option<u64>) -> bool {
    total_count.map_or(true, |total| (shown as u64) < total)
}

fn skeleton_grid() -> Markup {
    html! {
        div class="estate-grid" aria-busy="true" {
            @for _ in 0..SKELETON_CARDS {
                article class="estate-card skeleton" {
                    div class="cover" {}
                    div class="card-body" {
                        p class="line wide" {}
                        p class="line" {}
                        p class="line short" {}
                    }
                }
            }
        }
    }
}

pub fn estate_card(estate: &DecoratedEstate<'_>) -> Markup {
    html! {
        article.estate-card.sold[estate.is_sold].visited[estate.is_visited] id=(format!("estate-{}", estate.immoweb_code)) {
            a class="cover" href=(estate.listing_url()) title=[estate.description.as_deref()] target="_blank" rel="noopener" {
                @if let Some(src) = estate.cover_image() {
                    img src=(src) loading="lazy" alt=(estate.display_zip_code);
                } @else {
                    div class="no-image" { "🏠" }
                }
            }
            div class="card-body" {
                p class="price" { (estate.display_price) }
                div class="badges" {
                    @if estate.is_sold { span class="badge sold" { "Sold" } }
                    @if estate.is_under_option { span class="badge option" { "Under option" } }
                    @if estate.is_liked { span class="badge liked" { "❤ Liked" } }
                    @if estate.is_visited { span class="badge visited" { "Visited" } }
                }
                @if !estate.display_street_and_number.is_empty() {
                    p class="street" { (estate.display_street_and_number) }
                }
                p class="zip" { (estate.display_zip_code) }
                p class="facts" {
                    @if let Some(area) = estate.living_area { span { "🏠 " (area) " m²" } }
                    @if let Some(beds) = estate.bedroom_count { span { "🛏 " (beds) } }
                    @if estate.has_garden == Some(true) {
                        span { "🌳 " (estate.garden_area.map(|a| format!("{a} m²")).unwrap_or_else(|| "garden".into())) }
                    }
                }
                @if let Some(agency) = &estate.agency_name {
                    p class="agency" {
                        @if let Some(logo) = &estate.agency_logo {
                            img class="agency-logo" src=(logo) alt="" loading="lazy";
                        }
                        (agency)
                    }
                }
                p class="modified" { "Modified " (estate.display_modification_date) }
                @if let Some(history) = &estate.price_history {
                    @if !history.is_empty() {
                        details class="price-history" {
                            summary { "Price history (" (history.len()) ")" }
                            ul {
                                @for point in history {
                                    li { time datetime=(point.date.to_rfc3339()) { (point.date.format("%d/%m/%Y").to_string()) } " " (point.price) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
