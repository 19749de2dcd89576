use crate::shared::api_utils::fetch_health;
use chrono::Datelike;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServiceStatus {
    Online,
    Offline,
    Checking,
}

impl ServiceStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "Service: Online",
            ServiceStatus::Offline => "Service may be unavailable right now",
            ServiceStatus::Checking => "Service: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "status-online",
            ServiceStatus::Offline => "status-offline",
            ServiceStatus::Checking => "status-checking",
        }
    }
}

/// Site footer. With `health_url` it also shows whether the service answers;
/// the probe never blocks anything.
#[component]
pub fn Footer(#[prop(optional, into)] health_url: Option<String>) -> impl IntoView {
    let year = chrono::Local::now().year();
    let status = RwSignal::new(ServiceStatus::Checking);
    let show_status = health_url.is_some();

    // Probe once on mount
    Effect::new(move |_| {
        let Some(url) = health_url.clone() else {
            return;
        };
        spawn_local(async move {
            let next = match fetch_health(&url).await {
                Ok(health) if health.is_healthy() => ServiceStatus::Online,
                Ok(health) => {
                    log::warn!("Service reports status {:?}", health.status);
                    ServiceStatus::Offline
                }
                Err(e) => {
                    log::warn!("{}", e);
                    ServiceStatus::Offline
                }
            };
            let _ = status.try_set(next);
        });
    });

    view! {
        <footer class="site-footer">
            <div class="footer-links">
                <a href="#">"Privacy Policy"</a>
                <a href="#">"Terms of Service"</a>
                <a href="#">"Contact Us"</a>
            </div>
            <div class="footer-copyright">
                {format!("© {} WorkAlert. All rights reserved.", year)}
            </div>
            <Show when=move || show_status>
                <span class=move || format!("status-bar {}", status.get().css_class())>
                    {move || status.get().display_text()}
                </span>
            </Show>
        </footer>
    }
}
