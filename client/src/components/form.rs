//! Declarative form renderer.
//!
//! DESIGN
//! ======
//! `Form` holds no state. Values are read from the owner's `FormValues`
//! signal, and every edit and submit is forwarded to the owner's callbacks
//! unchanged.
//!
//! Controls are keyed by their `FieldDescriptor`, so when `rows` changes
//! (say a select's options arrive) only the fields that differ are rebuilt
//! and the rest keep focus and cursor.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::form::{FieldChange, FieldDescriptor, FormRows, FormValues, InputType};

/// Render `rows` of fields bound to `data`.
#[component]
pub fn Form(
    #[prop(into)] rows: Signal<FormRows>,
    #[prop(into)] data: Signal<FormValues>,
    on_change: Callback<FieldChange>,
    on_submit: Callback<()>,
    #[prop(default = "info")] color: &'static str,
    #[prop(default = "Submit")] submit_label: &'static str,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="volops-form" on:submit=on_form_submit>
            <For
                each=move || 0..rows.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="form-row">
                            <For
                                each=move || rows.with(|r| r.get(index).cloned().unwrap_or_default())
                                key=FieldDescriptor::clone
                                children=move |field| {
                                    view! {
                                        <div class="form-group col">
                                            <FieldControl field=field data=data on_change=on_change/>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                }
            />
            <button type="submit" class=format!("btn btn-{color}") disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}

/// One labelled control.
#[component]
fn FieldControl(field: FieldDescriptor, data: Signal<FormValues>, on_change: Callback<FieldChange>) -> impl IntoView {
    let id = field_id(&field.name);
    let label = field.label.clone();
    let name = field.name.clone();
    let value = {
        let name = name.clone();
        move || data.with(|d| d.get(&name).to_owned())
    };
    let emit = {
        let name = name.clone();
        move |value: String| on_change.run(FieldChange { name: name.clone(), value })
    };

    let control = match field.input_type {
        InputType::TextArea => view! {
            <textarea class="form-control" id=id.clone() name=name rows="4" prop:value=value on:input=move |ev| emit(event_target_value(&ev))></textarea>
        }
        .into_any(),
        InputType::Select => {
            // Selection is set per option: a `value` on the select itself
            // would be applied before its options exist.
            let placeholder_selected = {
                let name = name.clone();
                move || data.with(|d| d.is_selected(&name, ""))
            };
            let options = field
                .options
                .into_iter()
                .map(|option| {
                    let selected = {
                        let name = name.clone();
                        let option = option.clone();
                        move || data.with(|d| d.is_selected(&name, &option))
                    };
                    let option_value = option.clone();
                    view! {
                        <option value=option_value prop:selected=selected>
                            {option}
                        </option>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <select class="form-control" id=id.clone() name=name on:change=move |ev| emit(event_target_value(&ev))>
                    <option value="" prop:selected=placeholder_selected>"Choose..."</option>
                    {options}
                </select>
            }
            .into_any()
        }
        other => view! {
            <input
                class="form-control"
                id=id.clone()
                name=name
                type=other.as_html()
                prop:value=value
                on:input=move |ev| emit(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label for=id>{label}</label>
        {control}
    }
}

fn field_id(name: &str) -> String {
    format!("field-{name}")
}
