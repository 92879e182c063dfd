use leptos::prelude::*;

/// Page title block with an optional description line.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {(!subtitle.is_empty()).then(|| view! {
                <p class="page-header__subtitle">{subtitle}</p>
            })}
        </div>
    }
}
