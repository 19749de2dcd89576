use crate::domain::a001_job_alert_intake::ui::details::JobAlertIntake;
use crate::system::pages::{LandingPage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub const LANDING_PATH: &str = "/";
pub const INTAKE_PATH: &str = "/chat";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/chat") view=JobAlertIntake />
            </Routes>
        </Router>
    }
}
