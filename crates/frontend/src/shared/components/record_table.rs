//! Dynamic table over flexible-shape records.
//!
//! Columns come from the aggregation pipeline's column inference; the
//! component only renders and sorts. Combined columns sort on their
//! designated underlying field.

use contracts::shared::columns::{compare_records, display_value, Column, ColumnKind};
use contracts::shared::records::{FieldValue, Record};
use leptos::prelude::*;

use crate::shared::format_utils::{format_currency, format_number};
use crate::shared::list_utils::get_sort_indicator;

fn cell_content(record: &Record, column: &Column) -> (String, bool) {
    if let ColumnKind::Combined { .. } = column.kind {
        return (display_value(record, column), false);
    }
    match record.get(&column.id) {
        Some(FieldValue::Number(n)) => {
            // Large integral values on these reports are peso amounts.
            let text = if *n > 1000.0 && n.fract() == 0.0 {
                format_currency(Some(*n))
            } else {
                let decimals = if n.fract() == 0.0 { 0 } else { 2 };
                format_number(Some(*n), decimals)
            };
            (text, true)
        }
        Some(FieldValue::Null) | None => ("N/A".to_string(), false),
        Some(value) => (value.to_string(), false),
    }
}

/// Sortable table over records with inferred or synthesized columns.
#[component]
pub fn RecordTable(
    #[prop(into)]
    records: Signal<Vec<Record>>,
    #[prop(into)]
    columns: Signal<Vec<Column>>,
) -> impl IntoView {
    let (sort_column, set_sort_column) = signal(None::<String>);
    let (sort_ascending, set_sort_ascending) = signal(true);

    let sorted = Memo::new(move |_| {
        let mut rows = records.get();
        if let Some(col_id) = sort_column.get() {
            let cols = columns.get();
            if let Some(col) = cols.iter().find(|c| c.id == col_id) {
                let ascending = sort_ascending.get();
                rows.sort_by(|a, b| {
                    let cmp = compare_records(a, b, col);
                    if ascending {
                        cmp
                    } else {
                        cmp.reverse()
                    }
                });
            }
        }
        rows
    });

    view! {
        <div class="record-table__wrap">
            <table class="record-table">
                <thead>
                    <tr>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|col| {
                                    let id = col.id.clone();
                                    let id_for_click = col.id.clone();
                                    let indicator = move || {
                                        get_sort_indicator(
                                            sort_column.get().as_deref().unwrap_or(""),
                                            &id,
                                            sort_ascending.get(),
                                        )
                                    };
                                    view! {
                                        <th on:click=move |_| {
                                            let same = sort_column.get_untracked().as_deref()
                                                == Some(id_for_click.as_str());
                                            if same {
                                                set_sort_ascending.update(|v| *v = !*v);
                                            } else {
                                                set_sort_column.set(Some(id_for_click.clone()));
                                                set_sort_ascending.set(true);
                                            }
                                        }>
                                            {col.id.clone()}
                                            {indicator}
                                        </th>
                                    }
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let cols = columns.get();
                        sorted
                            .get()
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        {cols
                                            .iter()
                                            .map(|col| {
                                                let (text, numeric) = cell_content(&record, col);
                                                view! {
                                                    <td class=if numeric { "num" } else { "" }>{text}</td>
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || records.get().is_empty().then(|| view! {
                <div class="record-table__empty">"Sin datos para mostrar"</div>
            })}
        </div>
    }
}
