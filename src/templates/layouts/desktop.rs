use maud::{html, Markup, DOCTYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Search,
    Liked,
}

pub fn desktop_layout(title: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Estate viewer" }
                link rel="stylesheet" href="/static/main.css";
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}
                script src="/static/map.js" defer {}
            }
            body {
                header class="topbar" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Estate viewer" }
                    nav {
                        ul {
                            li.active[active == NavItem::Home] { a href="/" { "Home" } }
                            li.active[active == NavItem::Search] { a href="/search" { "Search" } }
                            li.active[active == NavItem::Liked] { a href="/liked" { "❤ Liked" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
