use maud::{html, Markup};

pub mod error;
pub mod grid;
pub mod map;
pub mod sort_selector;
pub mod table;
pub mod tabs;

pub use error::{error_surface, ErrorSurface};
pub use grid::{grid_chunk, grid_results};
pub use map::map_results;
pub use sort_selector::sort_selector;
pub use table::table_results;
pub use tabs::{tabs, ViewTab};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
