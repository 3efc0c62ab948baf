/// Reusable UI components

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::{HistoryEntry, LIMIT_OPTIONS};

#[derive(Properties, PartialEq)]
pub struct LimitSelectProps {
    pub value: u32,
    pub on_change: Callback<u32>,
}

/// Discrete result-count selector; only the documented options are offered.
#[function_component(LimitSelect)]
pub fn limit_select(props: &LimitSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(limit) = select.value().parse::<u32>() {
                    on_change.emit(limit);
                }
            }
        })
    };

    html! {
        <select class="limit-select" {onchange}>
            {for LIMIT_OPTIONS.iter().map(|limit| html! {
                <option
                    key={limit.to_string()}
                    value={limit.to_string()}
                    selected={*limit == props.value}
                >
                    {limit.to_string()}
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub entries: Vec<HistoryEntry>,
}

/// Read-only list of past lookups, rendered in the order given.
#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="history-empty">{"No history available."}</p>
        };
    }

    html! {
        <ul class="history-list">
            {for props.entries.iter().map(|entry| html! {
                <li key={format!("{}-{}", entry.domain, entry.timestamp)}>
                    {format!("{} — {}", entry.domain, entry.timestamp)}
                </li>
            })}
        </ul>
    }
}
