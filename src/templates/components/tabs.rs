use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Grid,
    Map,
    Table,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Grid, ViewTab::Map, ViewTab::Table];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewTab::Grid => "grid",
            ViewTab::Map => "map",
            ViewTab::Table => "table",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Grid => "Grid results",
            ViewTab::Map => "Map results",
            ViewTab::Table => "Table results",
        }
    }
}

/// Tab bar switched with radio inputs and CSS, so changing tabs never goes
/// back to the server. `panes` must be given in `ViewTab::ALL` order.
pub fn tabs(active: ViewTab, extra: Markup, panes: [Markup; 3]) -> Markup {
    html! {
        div class="result-tabs" {
            @for tab in ViewTab::ALL {
                input
                    type="radio"
                    class="tab-toggle"
                    name="view"
                    id=(format!("tab-{}", tab.as_str()))
                    value=(tab.as_str())
                    checked[tab == active];
            }
            div class="tab-bar" {
                nav {
                    @for tab in ViewTab::ALL {
                        label for=(format!("tab-{}", tab.as_str())) { (tab.label()) }
                    }
                }
                div class="tab-extra" { (extra) }
            }
            div class="tab-panes" {
                @for (tab, pane) in ViewTab::ALL.into_iter().zip(panes) {
                    section class=(format!("tab-pane pane-{}", tab.as_str())) {
                        (pane)
                    }
                }
            }
        }
    }
}
