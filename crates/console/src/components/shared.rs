//! Small presentational pieces shared by the management screens

use panchayat_console_common::resources::{is_video, FileKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub active: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Active/inactive pill; clickable when a toggle handler is given
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let (class, text) = if props.active {
        ("bg-green-100 text-green-800 hover:bg-green-200", "Active")
    } else {
        ("bg-red-100 text-red-800 hover:bg-red-200", "Inactive")
    };

    html! {
        <button
            type="button"
            disabled={props.onclick.is_none()}
            onclick={props.onclick.clone()}
            class={classes!("inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium", class)}
        >
            {text}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-12">
            <h3 class="text-sm font-medium text-gray-900">{&props.title}</h3>
            if let Some(description) = &props.description {
                <p class="mt-1 text-sm text-gray-500">{description}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="mb-4 p-4 bg-red-50 border border-red-200 rounded-md">
            <p class="text-red-700">{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
            <div class="w-full max-w-lg bg-white rounded-2xl shadow-xl">
                <div class="px-6 py-4 flex items-center justify-between border-b border-gray-200">
                    <h3 class="text-lg font-semibold text-gray-800">{&props.title}</h3>
                    <button type="button" onclick={on_close} class="text-gray-400 hover:text-gray-600">
                        {"✕"}
                    </button>
                </div>
                <div class="p-6">{ props.children.clone() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilePreviewProps {
    pub url: Option<AttrValue>,
    pub kind: FileKind,
    pub alt: AttrValue,
}

/// Thumbnail for images and video, a link for PDFs
#[function_component(FilePreview)]
pub fn file_preview(props: &FilePreviewProps) -> Html {
    let Some(url) = props.url.clone() else {
        return html! { <span class="text-gray-400">{"N/A"}</span> };
    };

    match props.kind {
        FileKind::Pdf => html! {
            <a href={url} target="_blank" rel="noopener noreferrer" class="text-blue-500 underline">
                {"View PDF"}
            </a>
        },
        FileKind::Media if is_video(&url) => html! {
            <video src={url} class="h-16 w-24 object-cover rounded-lg border" controls=true />
        },
        FileKind::Image | FileKind::Media => html! {
            <img src={url} alt={props.alt.clone()} class="h-16 w-16 object-cover rounded-lg border" />
        },
    }
}
