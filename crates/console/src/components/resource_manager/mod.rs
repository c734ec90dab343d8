//! One CRUD screen reused for every managed record type

mod form;
mod table;

pub use form::{ResourceForm, ResourceFormProps};
pub use table::{ResourceTable, ResourceTableProps};

use super::shared::{ErrorBanner, Modal};
use crate::context::use_client;
use gloo::dialogs::{alert, confirm};
use panchayat_console_common::resources::{FormValues, Resource};
use panchayat_console_common::services::ResourceService;
use panchayat_console_common::{ClientError, Spinner};
use std::marker::PhantomData;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceManagerProps<R: Resource> {
    #[prop_or_default]
    pub marker: PhantomData<R>,
}

/// Record being edited in the modal; `id` is `None` when adding
#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    values: FormValues,
    file_url: Option<AttrValue>,
}

fn report<R: Resource>(action: &str, error: &ClientError) {
    tracing::error!(resource = R::PATH, action, %error, "request failed");
    // A rejected token already sent the user to sign-in
    if !error.is_auth_expired() {
        alert(&format!(
            "Could not {action} {}: {}",
            R::SINGULAR.to_lowercase(),
            error.user_message()
        ));
    }
}

#[function_component(ResourceManager)]
pub fn resource_manager<R: Resource>(_props: &ResourceManagerProps<R>) -> Html {
    let client = use_client();
    let service = use_memo(client, |client| ResourceService::<R>::new(client.clone()));

    let records = use_state(|| Rc::new(Vec::<R>::new()));
    let is_loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let editing = use_state(|| Option::<Editing>::None);
    let is_saving = use_state(|| false);

    let reload = {
        let service = service.clone();
        let records = records.clone();
        let is_loading = is_loading.clone();
        let load_error = load_error.clone();

        Callback::from(move |()| {
            let service = service.clone();
            let records = records.clone();
            let is_loading = is_loading.clone();
            let load_error = load_error.clone();

            spawn_local(async move {
                match service.list().await {
                    Ok(list) => {
                        records.set(Rc::new(list));
                        load_error.set(None);
                    }
                    Err(error) => {
                        tracing::error!(resource = R::PATH, %error, "failed to load records");
                        if !error.is_auth_expired() {
                            load_error.set(Some(format!(
                                "Failed to load {}: {}",
                                R::TITLE.to_lowercase(),
                                error.user_message()
                            )));
                        }
                    }
                }
                is_loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |()| reload.emit(()));
    }

    let on_add = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(Some(Editing {
                id: None,
                values: FormValues::new(),
                file_url: None,
            }));
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |record: R| {
            editing.set(Some(Editing {
                id: Some(record.id().to_string()),
                values: record.values(),
                file_url: record.file_url().map(|url| AttrValue::from(url.to_string())),
            }));
        })
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };

    let on_submit = {
        let service = service.clone();
        let records = records.clone();
        let editing = editing.clone();
        let is_saving = is_saving.clone();
        let reload = reload.clone();

        Callback::from(move |values: FormValues| {
            let Some(id) = (*editing).as_ref().map(|current| current.id.clone()) else {
                return;
            };
            let service = service.clone();
            let existing = (*records).clone();
            let editing = editing.clone();
            let is_saving = is_saving.clone();
            let reload = reload.clone();

            is_saving.set(true);
            spawn_local(async move {
                let result = match &id {
                    Some(id) => service.update(id, &values, &existing).await,
                    None => service.create(&values, &existing).await,
                };
                is_saving.set(false);
                match result {
                    Ok(()) => {
                        editing.set(None);
                        reload.emit(());
                    }
                    // The modal stays open with what was typed
                    Err(error) => report::<R>("save", &error),
                }
            });
        })
    };

    let on_toggle = {
        let service = service.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let service = service.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match service.toggle(&id).await {
                    Ok(()) => reload.emit(()),
                    Err(error) => report::<R>("update the status of", &error),
                }
            });
        })
    };

    let on_delete = {
        let service = service.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            if !confirm(&format!(
                "Are you sure you want to delete this {}?",
                R::SINGULAR.to_lowercase()
            )) {
                return;
            }
            let service = service.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match service.delete(&id).await {
                    Ok(()) => reload.emit(()),
                    Err(error) => report::<R>("delete", &error),
                }
            });
        })
    };

    html! {
        <div class="rounded-2xl border border-gray-200 bg-white">
            <div class="flex items-center justify-between px-6 py-4">
                <h3 class="text-lg font-semibold text-gray-800">{R::TITLE}</h3>
                <button
                    onclick={on_add}
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                >
                    {format!("Add {}", R::SINGULAR)}
                </button>
            </div>

            if let Some(message) = (*load_error).clone() {
                <div class="px-6"><ErrorBanner message={message} /></div>
            }

            if *is_loading {
                <Spinner text={format!("Loading {}...", R::TITLE.to_lowercase())} />
            } else {
                <ResourceTable<R>
                    records={(*records).clone()}
                    on_edit={on_edit}
                    on_toggle={on_toggle}
                    on_delete={on_delete}
                />
            }

            if let Some(current) = (*editing).clone() {
                <Modal
                    title={format!("{} {}", if current.id.is_some() { "Edit" } else { "Add" }, R::SINGULAR)}
                    on_close={on_close.clone()}
                >
                    <ResourceForm<R>
                        initial={current.values}
                        file_url={current.file_url}
                        is_editing={current.id.is_some()}
                        is_saving={*is_saving}
                        on_submit={on_submit}
                        on_cancel={on_close}
                    />
                </Modal>
            }
        </div>
    }
}
