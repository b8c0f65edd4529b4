// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout, layouts::desktop::NavItem};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        NavItem::Home,
        html! {
            h1 { "Estate viewer" }

            div class="cards" {
                (card("Search", html! {
                    p { "Browse every listing as a grid, on a map or in a table, sorted the way you like." }
                    a class="btn" href="/search" { "Open search" }
                }))

                (card("Liked estates", html! {
                    p { "The estates you marked as liked, with their price history." }
                    a class="btn" href="/liked" { "Show liked" }
                }))
            }
        },
    )
}
