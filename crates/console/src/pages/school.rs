//! School page: staff list plus the single head-count record

use crate::components::{ErrorBanner, Modal, ResourceManager};
use crate::context::use_client;
use gloo::dialogs::alert;
use panchayat_console_common::resources::{FormValues, SchoolCount, SchoolStaff};
use panchayat_console_common::services::SchoolCountService;
use panchayat_console_common::{Spinner, SpinnerSize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COUNT_FIELDS: &[(&str, &str, &str)] = &[
    ("girls", "Girls", "number"),
    ("boys", "Boys", "number"),
    ("totalTeacher", "Total Teachers", "number"),
    ("contact", "Contact", "text"),
];

#[function_component(SchoolInfo)]
pub fn school_info() -> Html {
    html! {
        <div class="space-y-6">
            <SchoolCountPanel />
            <ResourceManager<SchoolStaff> />
        </div>
    }
}

#[function_component(SchoolCountPanel)]
fn school_count_panel() -> Html {
    let client = use_client();
    let service = use_memo(client, |client| SchoolCountService::new(client.clone()));

    let count = use_state(SchoolCount::default);
    let is_loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let draft = use_state(|| Option::<FormValues>::None);
    let is_saving = use_state(|| false);

    {
        let service = service.clone();
        let count = count.clone();
        let is_loading = is_loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match service.get().await {
                    Ok(loaded) => count.set(loaded),
                    Err(error) => {
                        tracing::error!(%error, "failed to load school counts");
                        if !error.is_auth_expired() {
                            load_error.set(Some(format!(
                                "Failed to load school counts: {}",
                                error.user_message()
                            )));
                        }
                    }
                }
                is_loading.set(false);
            });
        });
    }

    let on_edit = {
        let count = count.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(Some(count.values())))
    };

    let on_close = {
        let draft = draft.clone();
        Callback::from(move |()| draft.set(None))
    };

    let on_submit = {
        let service = service.clone();
        let count = count.clone();
        let draft = draft.clone();
        let is_saving = is_saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = (*draft).clone() else {
                return;
            };
            let service = service.clone();
            let count = count.clone();
            let draft = draft.clone();
            let is_saving = is_saving.clone();

            is_saving.set(true);
            spawn_local(async move {
                let result = service.save(&values).await;
                is_saving.set(false);
                match result {
                    Ok(saved) => {
                        count.set(saved);
                        draft.set(None);
                    }
                    Err(error) => {
                        tracing::error!(%error, "failed to save school counts");
                        if !error.is_auth_expired() {
                            alert(&format!("Could not save school counts: {}", error.user_message()));
                        }
                    }
                }
            });
        })
    };

    let stats = [
        ("Girls", count.girls.to_string()),
        ("Boys", count.boys.to_string()),
        ("Total Students", count.total_students().to_string()),
        ("Total Teachers", count.total_teacher.to_string()),
        ("Contact", if count.contact.is_empty() { "N/A".to_string() } else { count.contact.clone() }),
    ];

    html! {
        <div class="rounded-2xl border border-gray-200 bg-white">
            <div class="flex items-center justify-between px-6 py-4">
                <h3 class="text-lg font-semibold text-gray-800">{"School Information"}</h3>
                <button
                    onclick={on_edit}
                    disabled={*is_loading}
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 rounded-lg"
                >
                    {"Edit Counts"}
                </button>
            </div>

            if let Some(message) = (*load_error).clone() {
                <div class="px-6"><ErrorBanner message={message} /></div>
            }

            if *is_loading {
                <Spinner text="Loading school counts..." />
            } else {
                <dl class="grid gap-4 px-6 pb-6 sm:grid-cols-3 lg:grid-cols-5">
                    { for stats.into_iter().map(|(label, value)| html! {
                        <div class="p-4 rounded-xl bg-gray-50">
                            <dt class="text-xs text-gray-500">{label}</dt>
                            <dd class="mt-1 text-lg font-semibold text-gray-800">{value}</dd>
                        </div>
                    }) }
                </dl>
            }

            if let Some(values) = (*draft).clone() {
                <Modal title="Edit School Counts" on_close={on_close.clone()}>
                    <form onsubmit={on_submit} class="space-y-4">
                        { for COUNT_FIELDS.iter().map(|&(name, label, input_type)| {
                            let draft = draft.clone();
                            let oninput = Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                if let Some(current) = (*draft).clone() {
                                    draft.set(Some(current.with(name, input.value())));
                                }
                            });
                            html! {
                                <label class="block">
                                    <span class="block mb-1 text-sm font-medium text-gray-700">{label}</span>
                                    <input
                                        type={input_type}
                                        min={(input_type == "number").then_some("0")}
                                        class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm"
                                        value={values.get(name).to_string()}
                                        {oninput}
                                    />
                                </label>
                            }
                        }) }
                        <div class="flex justify-end gap-3 pt-2">
                            <button
                                type="button"
                                onclick={on_close.reform(|_: MouseEvent| ())}
                                class="px-4 py-2 text-sm text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                            >
                                {"Cancel"}
                            </button>
                            <button
                                type="submit"
                                disabled={*is_saving}
                                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 rounded-lg"
                            >
                                if *is_saving {
                                    <Spinner size={SpinnerSize::Small} text="Saving..." />
                                } else {
                                    {"Save"}
                                }
                            </button>
                        </div>
                    </form>
                </Modal>
            }
        </div>
    }
}
