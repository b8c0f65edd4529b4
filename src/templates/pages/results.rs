use crate::domain::{decorate_all, DisplayFormat, Estate, FetchError, SortSpec};
use crate::templates::components::{
    error_surface, grid_results, map_results, sort_selector, table_results, tabs, ErrorSurface,
    ViewTab,
};
use crate::templates::{desktop_layout, layouts::desktop::NavItem};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Multi-view results. Owns no fetching: whoever fetched hands over the
/// outcome, the current sort and where the next page lives.
#[derive(Debug)]
pub struct ResultViewer<'a> {
    pub loading: bool,
    pub error: Option<&'a FetchError>,
    pub count: u64,
    pub results: Option<&'a [Estate]>,
    pub sort: SortSpec,
    pub only_liked: bool,
    /// URL of the next page, if there is one.
    pub fetch_next: Option<String>,
    pub active_tab: ViewTab,
    /// Where sort/filter changes are sent.
    pub action: &'a str,
}

impl ResultViewer<'_> {
    pub fn render(&self, fmt: &dyn DisplayFormat, now: DateTime<Utc>) -> Markup {
        if let Some(err) = self.error {
            return error_surface(&ErrorSurface::from(err));
        }

        let decorated = self.results.map(|r| decorate_all(r, fmt, now));
        let estates = decorated.as_deref();

        let selector = sort_selector(
            self.action,
            self.sort,
            self.only_liked,
            estates.map(|_| self.count),
        );

        tabs(
            self.active_tab,
            selector,
            [
                grid_results(estates, self.loading, self.fetch_next.as_deref(), Some(self.count)),
                map_results(estates, self.loading),
                table_results(estates, self.loading),
            ],
        )
    }
}

/// Search page shell. The results area loads itself through htmx.
pub fn search_page(initial: &ResultViewer<'_>, results_url: &str, export_url: &str, fmt: &dyn DisplayFormat) -> Markup {
    desktop_layout(
        "Search",
        NavItem::Search,
        html! {
            div class="page-head" {
                h1 { "Search results" }
                a class="btn secondary" href=(export_url) { "Download .xlsx" }
            }
            div id="results" hx-get=(results_url) hx-trigger="load" hx-swap="innerHTML" {
                (initial.render(fmt, Utc::now()))
            }
        },
    )
}
