//! Horizontal bar breakdown for aggregated series.
//!
//! Takes the `(label, value)` groups produced by the aggregation
//! pipeline and renders them as plain-markup bars, optionally with each
//! group's share of the total.

use contracts::shared::aggregation::{percent_of_total, sum_values, GroupTotal};
use leptos::prelude::*;

use super::COLOR_PALETTE;
use crate::shared::format_utils::format_percent;

/// Renders grouped totals as bars scaled to the largest value.
#[component]
pub fn BarList(
    #[prop(into)]
    items: Signal<Vec<GroupTotal>>,
    /// Formats the numeric value shown next to each bar
    format_value: fn(f64) -> String,
    /// Also show each item's share of the total
    #[prop(optional)]
    show_percent: bool,
) -> impl IntoView {
    view! {
        <div class="bar-list">
            {move || {
                let items = items.get();
                let total = sum_values(&items);
                let max = items
                    .iter()
                    .map(|(_, v)| *v)
                    .fold(0.0_f64, f64::max);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let width = percent_of_total(value, max);
                        let share = percent_of_total(value, total);
                        let color = COLOR_PALETTE[i % COLOR_PALETTE.len()];
                        view! {
                            <div class="bar-list__row">
                                <span class="bar-list__label" title=label.clone()>{label.clone()}</span>
                                <div class="bar-list__track">
                                    <div
                                        class="bar-list__bar"
                                        style=format!("width: {:.1}%; background: {};", width, color)
                                    ></div>
                                </div>
                                <span class="bar-list__value">{format_value(value)}</span>
                                {show_percent.then(|| view! {
                                    <span class="bar-list__percent">{format_percent(share)}</span>
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
