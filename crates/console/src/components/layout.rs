//! Sidebar and header around every protected screen

use crate::context::{use_api, use_session};
use crate::routes::Route;
use panchayat_console_common::services::AuthService;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let api = use_api();
    let store = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let on_logout = {
        let auth = AuthService::new(api.public, store);
        Callback::from(move |_: MouseEvent| {
            auth.sign_out();
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::SignIn);
            }
        })
    };

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <aside class="w-64 shrink-0 bg-white border-r border-gray-200">
                <div class="px-6 py-5 border-b border-gray-200">
                    <h1 class="text-lg font-bold text-gray-900">{"पळसुन ग्रामपंचायत"}</h1>
                    <p class="text-xs text-gray-500">{"Admin Console"}</p>
                </div>
                <nav class="p-3 space-y-1">
                    { for Route::MENU.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <Link<Route>
                                to={route.clone()}
                                classes={classes!(
                                    "block", "px-3", "py-2", "rounded-lg", "text-sm",
                                    if active {
                                        "bg-blue-50 text-blue-700 font-medium"
                                    } else {
                                        "text-gray-700 hover:bg-gray-100"
                                    }
                                )}
                            >
                                {*label}
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </aside>
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 px-6 flex items-center justify-end bg-white border-b border-gray-200">
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors"
                    >
                        {"Logout"}
                    </button>
                </header>
                <main class="flex-1 p-6 overflow-y-auto">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
