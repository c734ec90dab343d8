//! Loading spinner component

use yew::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Inside a button
    Small,
    #[default]
    Page,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or_default]
    pub size: SpinnerSize,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    match props.size {
        SpinnerSize::Small => html! {
            <span class="inline-flex items-center gap-2">
                <span class="w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin"></span>
                if let Some(text) = &props.text {
                    <span>{text}</span>
                }
            </span>
        },
        SpinnerSize::Page => html! {
            <div class="text-center p-10">
                <div class="w-10 h-10 border-4 border-gray-200 border-t-blue-500 rounded-full animate-spin mx-auto mb-5"></div>
                if let Some(text) = &props.text {
                    <p class="text-gray-600 text-sm m-0">{text}</p>
                }
            </div>
        },
    }
}
