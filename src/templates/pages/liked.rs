use crate::domain::{decorate_all, DisplayFormat, Estate, FetchState};
use crate::templates::components::{error_surface, grid_results, ErrorSurface};
use crate::templates::{desktop_layout, layouts::desktop::NavItem};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// The liked estates view for whatever state the fetch is in.
pub fn liked_estates(
    state: &FetchState<Vec<Estate>>,
    fmt: &dyn DisplayFormat,
    now: DateTime<Utc>,
) -> Markup {
    match state {
        FetchState::Failed(err) => error_surface(&ErrorSurface::from(err)),
        FetchState::Loading => grid_results(None, true, None, None),
        FetchState::Loaded(estates) => {
            let decorated = decorate_all(estates, fmt, now);
            grid_results(Some(&decorated), false, None, None)
        }
    }
}

/// Page shell: shows the loading grid and asks for the real one right away.
pub fn liked_page(fmt: &dyn DisplayFormat) -> Markup {
    desktop_layout(
        "Liked estates",
        NavItem::Liked,
        html! {
            div class="page-head" {
                h1 { "❤ Liked estates" }
                a class="btn secondary" href="/liked/export.xlsx" { "Download .xlsx" }
            }
            div hx-get="/liked/results" hx-trigger="load" hx-swap="innerHTML" {
                (liked_estates(&FetchState::Loading, fmt, Utc::now()))
            }
        },
    )
}
