use super::AUTH_INPUT_CLASS;
use crate::context::{use_api, use_session};
use crate::routes::Route;
use gloo::dialogs::alert;
use panchayat_console_common::services::{AuthService, SignUp};
use panchayat_console_common::{Spinner, SpinnerSize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let api = use_api();
    let store = use_session();
    let navigator = use_navigator();

    let details = use_state(SignUp::default);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_input = |apply: fn(&mut SignUp, String)| {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*details).clone();
            apply(&mut next, input.value());
            details.set(next);
        })
    };
    let on_name = on_input(|details, value| details.name = value);
    let on_email = on_input(|details, value| details.email = value);
    let on_password = on_input(|details, value| details.password = value);

    let on_submit = {
        let auth = AuthService::new(api.public, store);
        let details = details.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let details = (*details).clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            error.set(None);
            spawn_local(async move {
                match auth.sign_up(&details).await {
                    Ok(()) => {
                        alert("Registration successful. Please sign in.");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::SignIn);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "sign-up failed");
                        error.set(Some(err.user_message()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-sm border border-gray-200 p-8">
                <h2 class="text-2xl font-bold mb-6 text-gray-800">{"Sign Up"}</h2>

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Name"}</label>
                        <input type="text" class={AUTH_INPUT_CLASS} value={details.name.clone()} oninput={on_name} required=true />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Email"}</label>
                        <input type="email" class={AUTH_INPUT_CLASS} value={details.email.clone()} oninput={on_email} required=true />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Password"}</label>
                        <input type="password" class={AUTH_INPUT_CLASS} value={details.password.clone()} oninput={on_password} required=true />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="p-3 bg-red-50 rounded-lg">
                            <p class="text-sm text-red-800">{message}</p>
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full px-4 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        if *is_submitting {
                            <Spinner size={SpinnerSize::Small} text="Creating account..." />
                        } else {
                            {"Sign up"}
                        }
                    </button>
                </form>

                <p class="mt-6 text-sm text-center text-gray-600">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn} classes={classes!("text-blue-600", "hover:underline")}>{"Sign In"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
