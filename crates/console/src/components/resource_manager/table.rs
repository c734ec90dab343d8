use crate::components::shared::{EmptyState, FilePreview, StatusBadge};
use panchayat_console_common::resources::{external_href, FieldKind, Resource};
use std::rc::Rc;
use yew::prelude::*;

const SNIPPET_CHARS: usize = 80;

#[derive(Properties, PartialEq)]
pub struct ResourceTableProps<R: Resource> {
    pub records: Rc<Vec<R>>,
    pub on_edit: Callback<R>,
    pub on_toggle: Callback<String>,
    pub on_delete: Callback<String>,
}

fn cell(kind: FieldKind, value: &str) -> Html {
    if value.is_empty() {
        return html! { <span class="text-gray-400">{"N/A"}</span> };
    }
    match kind {
        FieldKind::Url => html! {
            <a href={external_href(value)} target="_blank" rel="noopener noreferrer" class="text-blue-500 underline">
                {"Visit"}
            </a>
        },
        FieldKind::LongText if value.chars().count() > SNIPPET_CHARS => {
            let snippet: String = value.chars().take(SNIPPET_CHARS).collect();
            html! { <span title={value.to_string()}>{format!("{snippet}…")}</span> }
        }
        _ => html! { { value.to_string() } },
    }
}

#[function_component(ResourceTable)]
pub fn resource_table<R: Resource>(props: &ResourceTableProps<R>) -> Html {
    if props.records.is_empty() {
        return html! {
            <EmptyState
                title={format!("No {} added yet", R::TITLE.to_lowercase())}
                description={format!("Use \"Add {}\" to create the first one.", R::SINGULAR)}
            />
        };
    }

    let header = |label: &str| {
        html! {
            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                {label.to_string()}
            </th>
        }
    };

    html! {
        <div class="max-w-full overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        { header("No.") }
                        if let Some(file) = R::FILE {
                            { header(file.label) }
                        }
                        { for R::FIELDS.iter().map(|field| header(field.label)) }
                        if R::TOGGLE {
                            { header("Status") }
                        }
                        { header("Actions") }
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    { for props.records.iter().enumerate().map(|(index, record)| {
                        let id = record.id().to_string();
                        let values = record.values();

                        let on_edit = {
                            let record = record.clone();
                            props.on_edit.reform(move |_: MouseEvent| record.clone())
                        };
                        let on_toggle = {
                            let id = id.clone();
                            props.on_toggle.reform(move |_: MouseEvent| id.clone())
                        };
                        let on_delete = {
                            let id = id.clone();
                            props.on_delete.reform(move |_: MouseEvent| id.clone())
                        };

                        html! {
                            <tr key={id}>
                                <td class="px-6 py-4 text-sm text-gray-500">{(index + 1).to_string()}</td>
                                if let Some(file) = R::FILE {
                                    <td class="px-6 py-4">
                                        <FilePreview
                                            url={record.file_url().map(|url| AttrValue::from(url.to_string()))}
                                            kind={file.kind}
                                            alt={R::SINGULAR}
                                        />
                                    </td>
                                }
                                { for R::FIELDS.iter().map(|field| html! {
                                    <td class="px-6 py-4 text-sm text-gray-800">
                                        { cell(field.kind, values.get(field.name)) }
                                    </td>
                                }) }
                                if R::TOGGLE {
                                    <td class="px-6 py-4">
                                        <StatusBadge active={record.is_active()} onclick={on_toggle} />
                                    </td>
                                }
                                <td class="px-6 py-4 text-sm font-medium">
                                    <div class="flex items-center gap-3">
                                        <button onclick={on_edit} class="text-blue-600 hover:text-blue-900">
                                            {"Edit"}
                                        </button>
                                        <button onclick={on_delete} class="text-red-600 hover:text-red-900">
                                            {"Delete"}
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
