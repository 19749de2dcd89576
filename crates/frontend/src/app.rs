use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_app_config, provide_app_config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the site configuration (upload endpoint etc.) to the whole app
    provide_app_config(load_app_config());

    view! {
        <AppRoutes />
    }
}
