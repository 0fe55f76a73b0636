//! List controls: keyword search, date range, sort order.

use dioxus::prelude::*;
use store::{DateRange, SortOrder};

use crate::i18n::Text;
use crate::icons::{FaArrowDownWideShort, FaArrowUpWideShort, FaCalendar, FaMagnifyingGlass, FaXmark};
use crate::preferences::use_language;
use crate::Icon;

/// Keyword box. Every keystroke is reported; the caller owns the value.
#[component]
pub fn SearchInput(keyword: String, placeholder: String, on_search: EventHandler<String>) -> Element {
    let language = use_language();
    let has_keyword = !keyword.is_empty();

    rsx! {
        div {
            class: "search-input",
            span { class: "search-icon", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{keyword}",
                oninput: move |evt| on_search.call(evt.value()),
            }
            if has_keyword {
                button {
                    class: "search-clear",
                    title: Text::ClearSearch.get(language()),
                    onclick: move |_| on_search.call(String::new()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}

/// Collapsible from/to date inputs. Apply reports the parsed range (`None` when
/// both inputs are empty); Reset clears the inputs and reports `None`.
#[component]
pub fn DateFilter(active: bool, on_filter: EventHandler<Option<DateRange>>) -> Element {
    let language = use_language();
    let mut open = use_signal(|| false);
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let lang = language();

    rsx! {
        div {
            class: "date-filter",
            button {
                class: if active { "filter-toggle filter-active" } else { "filter-toggle" },
                onclick: move |_| open.toggle(),
                Icon { icon: FaCalendar, width: 14, height: 14 }
                span { {Text::FilterByDate.get(lang)} }
            }
            if open() {
                div {
                    class: "date-filter-panel",
                    label {
                        {Text::FromDate.get(lang)}
                        input {
                            r#type: "date",
                            value: "{start}",
                            oninput: move |evt| start.set(evt.value()),
                        }
                    }
                    label {
                        {Text::ToDate.get(lang)}
                        input {
                            r#type: "date",
                            value: "{end}",
                            oninput: move |evt| end.set(evt.value()),
                        }
                    }
                    div {
                        class: "date-filter-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                on_filter.call(DateRange::from_inputs(&start(), &end()));
                                open.set(false);
                            },
                            {Text::ApplyFilter.get(lang)}
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                start.set(String::new());
                                end.set(String::new());
                                on_filter.call(None);
                            },
                            {Text::Reset.get(lang)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SortToggle(order: SortOrder, on_toggle: EventHandler<SortOrder>) -> Element {
    let language = use_language();
    let lang = language();
    let (label, hint) = match order {
        SortOrder::Newest => (Text::NewestFirst, Text::SortByOldest),
        SortOrder::Oldest => (Text::OldestFirst, Text::SortByNewest),
    };

    rsx! {
        button {
            class: "sort-toggle",
            title: hint.get(lang),
            onclick: move |_| on_toggle.call(order.toggled()),
            if order == SortOrder::Newest {
                Icon { icon: FaArrowDownWideShort, width: 14, height: 14 }
            } else {
                Icon { icon: FaArrowUpWideShort, width: 14, height: 14 }
            }
            span { {label.get(lang)} }
        }
    }
}
