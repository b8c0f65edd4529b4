use crate::domain::sort::{SortSpec, SORT_GROUPS};
use maud::{html, Markup};

/// "(1 result)", "(2 results)".
pub fn result_count_text(count: u64) -> String {
    format!("({count} result{})", if count >= 2 { "s" } else { "" })
}

/// Sort dropdown plus the liked-only filter. Changing either re-requests
/// `action`; the current sort rides along so an empty pick keeps it.
pub fn sort_selector(action: &str, current: SortSpec, only_liked: bool, count: Option<u64>) -> Markup {
    let current_value = current.value();

    html! {
        form
            class="sort-selector"
            hx-get=(action)
            hx-trigger="change"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-include="[name='view']:checked"
        {
            input type="hidden" name="current" value=(current_value);
            select name="sort" aria-label="sort results by" {
                option value="" disabled { "sort results by..." }
                @for group in SORT_GROUPS {
                    optgroup label=(group.label) {
                        @for opt in group.options {
                            option value=(opt.spec.value()) selected[opt.spec == current] { (opt.label) }
                        }
                    }
                }
            }
            label class="liked-filter" {
                input type="checkbox" name="liked" value="true" checked[only_liked];
                " ❤ liked only"
            }
            @if let Some(count) = count {
                span class="result-count" { (result_count_text(count)) }
            }
        }
    }
}
