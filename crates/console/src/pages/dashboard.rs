use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Landing screen: one card per managed section
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div>
            <h2 class="mb-1 text-xl font-semibold text-gray-800">{"Dashboard"}</h2>
            <p class="mb-6 text-sm text-gray-500">{"Choose a section to manage the website content."}</p>
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-3">
                { for Route::MENU.iter().filter(|(route, _)| *route != Route::Dashboard).map(|(route, label)| html! {
                    <Link<Route>
                        to={route.clone()}
                        classes={classes!("block", "p-5", "bg-white", "border", "border-gray-200", "rounded-2xl", "hover:border-blue-300", "hover:shadow-sm")}
                    >
                        <span class="text-sm font-medium text-gray-800">{*label}</span>
                    </Link<Route>>
                }) }
            </div>
        </div>
    }
}
