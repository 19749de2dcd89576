//! Job Alert Intake - View Component

use super::model::GlooUploadTransport;
use super::view_model::JobAlertIntakeVm;
use crate::layout::footer::Footer;
use crate::routes::routes::LANDING_PATH;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::config::use_intake_config;
use crate::shared::icons::icon;
use contracts::domain::a001_job_alert_intake::{submit_draft, SubmitReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexAlign, FlexGap};
use web_sys::AbortController;

const FILE_INPUT_ID: &str = "cv-upload";

#[component]
#[allow(non_snake_case)]
pub fn JobAlertIntake() -> impl IntoView {
    let config = use_intake_config();
    let vm = JobAlertIntakeVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let abort = StoredValue::new_local(None::<AbortController>);

    // Clear the native file input whenever the draft drops its file
    Effect::new(move |prev: Option<u64>| {
        let epoch = vm.file_input_epoch();
        if prev.is_some_and(|p| p != epoch) {
            if let Some(input) = file_input_ref.get() {
                input.set_value("");
            }
        }
        epoch
    });

    // A response that arrives after unmount must not touch anything
    on_cleanup(move || {
        vm.abandon();
        let _ = abort.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    let endpoint = config.endpoint.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Keep the controller of the request already running
        if vm.form.with_untracked(|f| f.status().is_in_flight()) {
            return;
        }

        let controller = AbortController::new().ok();
        let transport =
            GlooUploadTransport::new(endpoint.clone(), controller.as_ref().map(|c| c.signal()));
        abort.set_value(controller);

        spawn_local(async move {
            match submit_draft(&vm, &transport).await {
                SubmitReport::Completed(status) => {
                    log::info!("intake submission finished: {}", status.as_str())
                }
                SubmitReport::Rejected(e) => log::debug!("intake draft rejected: {}", e),
                SubmitReport::Busy => log::debug!("intake submission already in flight"),
                SubmitReport::Stale | SubmitReport::Detached => {
                    log::debug!("intake response discarded")
                }
            }
        });
    };

    let accept = config.accept_attribute();
    let file_hint = config.file_hint();
    let health_url = config.health_url();

    view! {
        <div class="chat-container">
            <a href=LANDING_PATH class="back-button">
                {icon("arrow-left")}
                " Back to Home"
            </a>

            <div class="chat-content">
                <div class="chat-header">
                    <h1>"Ready to get started?"</h1>
                    <p>"Upload your CV or type your skills or both. We'll do the rest."</p>
                </div>

                <form class="chat-form" on:submit=on_submit>
                    <div class="form-sections">
                        <section class="form-section">
                            <h2>"Upload Your CV"</h2>
                            <div class="form__group file-upload">
                                <label for=FILE_INPUT_ID>
                                    <div class=move || {
                                        if vm.file_name().is_some() { "upload-area has-file" } else { "upload-area" }
                                    }>
                                        <span class="upload-icon">
                                            {move || if vm.file_name().is_some() { icon("check") } else { icon("document") }}
                                        </span>
                                        <span class="upload-text">
                                            {move || match vm.file_name() {
                                                Some(name) => view! {
                                                    <div class="file-info">
                                                        <span class="file-name">{name}</span>
                                                        <button
                                                            type="button"
                                                            class="remove-file"
                                                            title="Remove file"
                                                            on:click=move |ev| {
                                                                ev.prevent_default();
                                                                ev.stop_propagation();
                                                                vm.clear_file();
                                                            }
                                                        >
                                                            {icon("close")}
                                                        </button>
                                                    </div>
                                                }.into_any(),
                                                None => view! {
                                                    <span>"Drop your CV here or click to browse"</span>
                                                }.into_any(),
                                            }}
                                        </span>
                                    </div>
                                    <input
                                        id=FILE_INPUT_ID
                                        node_ref=file_input_ref
                                        type="file"
                                        accept=accept
                                        class="hidden-input"
                                        on:change=move |ev| {
                                            let input: web_sys::HtmlInputElement = event_target(&ev);
                                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                                vm.select_file(file);
                                            }
                                        }
                                    />
                                </label>
                                <span class="file-types">{file_hint}</span>
                            </div>
                        </section>

                        <div class="divider">
                            <span>"and / or"</span>
                        </div>

                        <section class="form-section">
                            <h2>"List Your Skills"</h2>
                            <Textarea
                                id="skills"
                                value=Signal::derive(move || vm.skills())
                                on_input=Callback::new(move |text: String| vm.update_skills(text))
                                placeholder="e.g. React, Python, Project Management, Team Leadership..."
                                rows=4
                                help="Separate multiple skills with commas"
                            />
                        </section>

                        <section class="form-section">
                            <h2>"How Should We Reach You?"</h2>
                            <Flex gap=FlexGap::Large style="flex-wrap: wrap;">
                                <Input
                                    id="whatsapp"
                                    label="WhatsApp Number"
                                    input_type="tel"
                                    value=Signal::derive(move || vm.whatsapp())
                                    on_input=Callback::new(move |text: String| vm.update_whatsapp(text))
                                    placeholder="+1234567890"
                                    help="Include country code"
                                    class="input-icon whatsapp"
                                />
                                <Input
                                    id="email"
                                    label="Email Address"
                                    input_type="email"
                                    value=Signal::derive(move || vm.email())
                                    on_input=Callback::new(move |text: String| vm.update_email(text))
                                    placeholder="you@example.com"
                                    class="input-icon email"
                                />
                            </Flex>
                        </section>
                    </div>

                    <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Medium class="submit-row">
                        <Button
                            button_type="submit"
                            class="submit-button"
                            disabled=Signal::derive(move || vm.is_in_flight())
                        >
                            {move || if vm.is_in_flight() { "Submitting..." } else { "Start Getting Job Alerts" }}
                            {icon("arrow-right")}
                        </Button>

                        {move || {
                            let status = vm.status();
                            status
                                .tone()
                                .zip(status.message().map(str::to_string))
                                .map(|(tone, message)| {
                                    view! {
                                        <div class=tone.css_class() role="status">
                                            {message}
                                        </div>
                                    }
                                })
                        }}
                    </Flex>
                </form>
            </div>

            <Footer health_url=health_url />
        </div>
    }
}
