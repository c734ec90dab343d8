use panchayat_console_common::resources::{Field, FieldKind, FormValues, Resource};
use panchayat_console_common::{Spinner, SpinnerSize, Upload};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const CUSTOM_CHOICE: &str = "Custom";

const INPUT_CLASS: &str = "w-full border border-gray-300 rounded-lg px-3 py-2 text-sm focus:outline-none focus:ring-1 focus:ring-blue-500";

#[derive(Clone, PartialEq)]
struct FormState {
    values: FormValues,
    reading_file: bool,
    file_error: Option<String>,
}

enum FormAction {
    Set(&'static str, String),
    Reading,
    Picked(Upload),
    ReadFailed(String),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(name, value) => next.values.set(name, value),
            FormAction::Reading => {
                next.reading_file = true;
                next.file_error = None;
            }
            FormAction::Picked(upload) => {
                next.reading_file = false;
                next.values.upload = Some(upload);
            }
            FormAction::ReadFailed(message) => {
                next.reading_file = false;
                next.file_error = Some(message);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourceFormProps<R: Resource> {
    pub initial: FormValues,
    /// File already stored on the server, shown while editing
    #[prop_or_default]
    pub file_url: Option<AttrValue>,
    pub is_editing: bool,
    pub is_saving: bool,
    pub on_submit: Callback<FormValues>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub marker: std::marker::PhantomData<R>,
}

/// Choice fields start on their first option
fn seeded<R: Resource>(initial: &FormValues) -> FormValues {
    let mut values = initial.clone();
    for field in R::FIELDS {
        if let FieldKind::Choice(options) = field.kind {
            if values.get(field.name).is_empty() {
                if let Some(first) = options.first() {
                    values.set(field.name, *first);
                }
            }
        }
    }
    values
}

fn field_input(field: &Field, value: &str, form: &UseReducerDispatcher<FormState>) -> Html {
    let name = field.name;

    match field.kind {
        FieldKind::LongText => {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Set(name, input.value()));
                })
            };
            html! {
                <textarea
                    name={name}
                    rows="3"
                    class={INPUT_CLASS}
                    value={value.to_string()}
                    {oninput}
                />
            }
        }
        FieldKind::Choice(options) => {
            let is_custom = !options.contains(&value);
            let onchange = {
                let form = form.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let picked = select.value();
                    let value = if picked == CUSTOM_CHOICE { String::new() } else { picked };
                    form.dispatch(FormAction::Set(name, value));
                })
            };
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Set(name, input.value()));
                })
            };
            html! {
                <div class="space-y-2">
                    <select name={name} class={INPUT_CLASS} {onchange}>
                        { for options.iter().map(|option| html! {
                            <option value={*option} selected={*option == value}>{*option}</option>
                        }) }
                        <option value={CUSTOM_CHOICE} selected={is_custom}>{CUSTOM_CHOICE}</option>
                    </select>
                    if is_custom {
                        <input
                            type="text"
                            class={INPUT_CLASS}
                            placeholder={format!("Enter custom {}", field.label.to_lowercase())}
                            value={value.to_string()}
                            {oninput}
                        />
                    }
                </div>
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Date => "date",
                FieldKind::Number => "number",
                FieldKind::Url => "url",
                _ => "text",
            };
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Set(name, input.value()));
                })
            };
            html! {
                <input
                    type={input_type}
                    name={name}
                    step={(kind == FieldKind::Number).then_some("any")}
                    class={INPUT_CLASS}
                    placeholder={field.label}
                    value={value.to_string()}
                    {oninput}
                />
            }
        }
    }
}

/// Add/edit form for one record; validation happens in the service on submit
#[function_component(ResourceForm)]
pub fn resource_form<R: Resource>(props: &ResourceFormProps<R>) -> Html {
    let initial = seeded::<R>(&props.initial);
    let state = use_reducer(move || FormState {
        values: initial,
        reading_file: false,
        file_error: None,
    });
    let form = state.dispatcher();

    let on_file = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(picked) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo::file::File::from(picked);
            let form = form.clone();
            form.dispatch(FormAction::Reading);
            spawn_local(async move {
                match gloo::file::futures::read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let mime = Some(file.raw_mime_type()).filter(|mime| !mime.is_empty());
                        form.dispatch(FormAction::Picked(Upload::new(file.name(), mime, bytes)));
                    }
                    Err(error) => {
                        tracing::warn!(%error, "could not read the selected file");
                        form.dispatch(FormAction::ReadFailed(format!(
                            "Could not read {}: {error}",
                            file.name()
                        )));
                    }
                }
            });
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(state.values.clone());
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let busy = props.is_saving || state.reading_file;

    html! {
        <form {onsubmit} class="space-y-4">
            { for R::FIELDS.iter().map(|field| html! {
                <label class="block">
                    <span class="block mb-1 text-sm font-medium text-gray-700">
                        {field.label}
                        if field.required {
                            <span class="text-red-500">{" *"}</span>
                        }
                    </span>
                    { field_input(field, state.values.get(field.name), &form) }
                </label>
            }) }

            if let Some(file) = R::FILE {
                <label class="block">
                    <span class="block mb-1 text-sm font-medium text-gray-700">{file.label}</span>
                    <input
                        type="file"
                        name={file.name}
                        accept={file.kind.accept()}
                        onchange={on_file}
                        class="w-full text-sm"
                    />
                    if props.is_editing && state.values.upload.is_none() {
                        if let Some(url) = props.file_url.clone() {
                            <a href={url} target="_blank" rel="noopener noreferrer" class="mt-1 inline-block text-xs text-blue-500 underline">
                                {"Current file (kept unless you choose a new one)"}
                            </a>
                        }
                    }
                    if let Some(message) = state.file_error.clone() {
                        <p class="mt-1 text-xs text-red-600">{message}</p>
                    }
                </label>
            }

            <div class="flex justify-end gap-3 pt-2">
                <button
                    type="button"
                    onclick={on_cancel}
                    class="px-4 py-2 text-sm text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    disabled={busy}
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 rounded-lg"
                >
                    if busy {
                        <Spinner size={SpinnerSize::Small} text={if props.is_saving { "Saving..." } else { "Reading file..." }} />
                    } else if props.is_editing {
                        {"Update"}
                    } else {
                        {"Save"}
                    }
                </button>
            </div>
        </form>
    }
}
