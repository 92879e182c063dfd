use leptos::prelude::*;

/// Summary indicator card.
///
/// The value arrives pre-formatted; `None` renders the loading dash.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Signal<Option<String>>,
    /// Render in error style
    #[prop(optional, into)]
    has_error: Signal<bool>,
) -> impl IntoView {
    let card_class = move || {
        if has_error.get() {
            "stat-card stat-card--error"
        } else {
            "stat-card"
        }
    };

    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
            {subtitle_view}
        </div>
    }
}
