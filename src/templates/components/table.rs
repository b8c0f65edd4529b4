use crate::domain::DecoratedEstate;
use maud::{html, Markup};

const COLUMNS: [&str; 8] = [
    "Code", "Price", "Address", "Living area", "Bedrooms", "Garden", "Status", "Modified",
];

pub fn table_results(estates: Option<&[DecoratedEstate<'_>]>, is_loading: bool) -> Markup {
    html! {
        div class="table-results" {
            table {
                thead {
                    tr {
                        @for col in COLUMNS {
                            th scope="col" { (col) }
                        }
                    }
                }
                tbody {
                    @match estates {
                        None | Some([]) => {
                            tr {
                                td colspan=(COLUMNS.len()) class="empty" {
                                    @if is_loading { "Loading…" } @else { "No estates." }
                                }
                            }
                        }
                        Some(estates) => {
                            @for estate in estates {
                                (estate_row(estate))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn estate_row(estate: &DecoratedEstate<'_>) -> Markup {
    html! {
        tr.sold[estate.is_sold] {
            td { a href=(estate.listing_url()) target="_blank" rel="noopener" { (estate.immoweb_code) } }
            td class="num" { (estate.display_price) }
            td {
                @if !estate.display_street_and_number.is_empty() {
                    (estate.display_street_and_number) br;
                }
                (estate.display_zip_code)
            }
            td class="num" { (optional_area(estate.living_area)) }
            td class="num" { (estate.bedroom_count.map(|b| b.to_string()).unwrap_or_default()) }
            td class="num" {
                @if estate.has_garden == Some(true) {
                    (estate.garden_area.map(|a| format!("{a} m²")).unwrap_or_else(|| "yes".into()))
                }
            }
            td { (status_text(estate)) }
            td { (estate.display_modification_date) }
        }
    }
}

fn optional_area(area: Option<i64>) -> String {
    area.map(|a| format!("{a} m²")).unwrap_or_default()
}

pub fn status_text(estate: &DecoratedEstate<'_>) -> String {
    let mut flags = Vec::new();
    if estate.is_sold {
        flags.push("sold");
    }
    if estate.is_under_option {
        flags.push("under option");
    }
    if estate.is_liked {
        flags.push("liked");
    }
    if estate.is_visited {
        flags.push("visited");
    }
    flags.join(", ")
}
