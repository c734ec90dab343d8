//! Citizen inquiries with their status workflow

use crate::components::{EmptyState, ErrorBanner};
use crate::context::use_client;
use gloo::dialogs::alert;
use panchayat_console_common::resources::{Inquiry, InquiryStatus};
use panchayat_console_common::services::InquiryService;
use panchayat_console_common::Spinner;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

fn status_class(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::Pending => "bg-yellow-50 text-yellow-800 border-yellow-200",
        InquiryStatus::InProgress => "bg-blue-50 text-blue-800 border-blue-200",
        InquiryStatus::Completed => "bg-green-50 text-green-800 border-green-200",
    }
}

#[function_component(ContactList)]
pub fn contact_list() -> Html {
    let client = use_client();
    let service = use_memo(client, |client| InquiryService::new(client.clone()));

    let inquiries = use_state(|| Rc::new(Vec::<Inquiry>::new()));
    let is_loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);

    let reload = {
        let service = service.clone();
        let inquiries = inquiries.clone();
        let is_loading = is_loading.clone();
        let load_error = load_error.clone();

        Callback::from(move |()| {
            let service = service.clone();
            let inquiries = inquiries.clone();
            let is_loading = is_loading.clone();
            let load_error = load_error.clone();

            spawn_local(async move {
                match service.list().await {
                    Ok(list) => {
                        inquiries.set(Rc::new(list));
                        load_error.set(None);
                    }
                    Err(error) => {
                        tracing::error!(%error, "failed to load inquiries");
                        if !error.is_auth_expired() {
                            load_error.set(Some(format!(
                                "Failed to load inquiries: {}",
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

    let on_status = {
        let service = service.clone();
        Callback::from(move |(inquiry, status): (Inquiry, InquiryStatus)| {
            let service = service.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match service.set_status(&inquiry, status).await {
                    Ok(()) => reload.emit(()),
                    Err(error) => {
                        tracing::error!(id = %inquiry.id, %error, "failed to change inquiry status");
                        if !error.is_auth_expired() {
                            alert(&format!("Could not update the status: {}", error.user_message()));
                        }
                        // Put the select back to the stored status
                        reload.emit(());
                    }
                }
            });
        })
    };

    let body = if *is_loading {
        html! { <Spinner text="Loading inquiries..." /> }
    } else if inquiries.is_empty() {
        html! { <EmptyState title="No inquiries yet" /> }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">{"No."}</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">{"Name"}</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">{"Phone"}</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">{"Message"}</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        { for inquiries.iter().enumerate().map(|(index, inquiry)| {
                            let onchange = {
                                let on_status = on_status.clone();
                                let inquiry = inquiry.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    if let Some(status) = InquiryStatus::parse(&select.value()) {
                                        on_status.emit((inquiry.clone(), status));
                                    }
                                })
                            };
                            html! {
                                <tr key={inquiry.id.clone()}>
                                    <td class="px-4 py-3 text-gray-500">{(index + 1).to_string()}</td>
                                    <td class="px-4 py-3 text-gray-800">{&inquiry.name}</td>
                                    <td class="px-4 py-3 text-gray-800">{&inquiry.phone}</td>
                                    <td class="px-4 py-3 text-gray-600 max-w-md whitespace-pre-wrap">{&inquiry.message}</td>
                                    <td class="px-4 py-3">
                                        <select
                                            disabled={inquiry.status.is_final()}
                                            {onchange}
                                            class={classes!("px-2", "py-1", "rounded-lg", "border", "text-xs", status_class(inquiry.status))}
                                        >
                                            { for InquiryStatus::ALL.iter().map(|status| html! {
                                                <option value={status.as_str()} selected={*status == inquiry.status}>
                                                    {status.as_str()}
                                                </option>
                                            }) }
                                        </select>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="rounded-2xl border border-gray-200 bg-white">
            <div class="px-6 py-4">
                <h3 class="text-lg font-semibold text-gray-800">{"Inquiries"}</h3>
            </div>
            if let Some(message) = (*load_error).clone() {
                <div class="px-6"><ErrorBanner message={message} /></div>
            }
            { body }
        </div>
    }
}
