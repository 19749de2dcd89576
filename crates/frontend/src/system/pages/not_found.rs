use crate::routes::routes::LANDING_PATH;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=LANDING_PATH class="back-button">"Back to Home"</a>
        </div>
    }
}
