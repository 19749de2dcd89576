use leptos::prelude::*;

/// Input component with label and help text
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "tel", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Small hint under the input
    #[prop(optional, into)]
    help: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// CSS classes of the wrapper around the input
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let wrapper_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class=wrapper_class>
                <input
                    id=input_id
                    class="form__input"
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
            </div>
            {move || help.get().map(|h| view! { <span class="form-help">{h}</span> })}
        </div>
    }
}
