use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::session::use_session;

const NAV: [(Route, &str); 5] = [
    (Route::BiddingSessions, "Bidding sessions"),
    (Route::Bookings, "Bookings"),
    (Route::Taxes, "Taxes"),
    (Route::BiddingConfig, "Bidding settings"),
    (Route::CdwSettings, "CDW"),
];

#[function_component]
pub fn Header() -> Html {
    let session = use_session();
    let current_route = use_route::<Route>();
    let navigator = use_navigator();

    let Some(current) = session.current() else {
        return html! {
            <header class="bg-white border-b border-neutral-200">
                <div class="max-w-7xl mx-auto px-4 h-16 flex items-center">
                    <h1 class="text-xl font-semibold text-neutral-900">
                        {"Operator Portal"}
                    </h1>
                </div>
            </header>
        };
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        session.log_out();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let company = current
        .operator
        .company_name
        .clone()
        .unwrap_or_else(|| "Operator Portal".to_string());

    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16 gap-6">
                    <h1 class="text-xl font-semibold text-neutral-900">
                        {company}
                    </h1>
                    <nav class="flex items-center gap-4 text-sm">
                        {for NAV.iter().map(|(route, label)| {
                            let active = current_route.as_ref() == Some(route);
                            let class = if active {
                                "font-semibold text-neutral-900"
                            } else {
                                "text-neutral-600 hover:text-neutral-900"
                            };
                            html! {
                                <Link<Route> to={route.clone()} classes={class}>
                                    {*label}
                                </Link<Route>>
                            }
                        })}
                    </nav>
                    <div class="flex items-center gap-3 text-sm">
                        <span class="text-neutral-600">
                            {current.operator.display_name()}
                        </span>
                        <button
                            onclick={on_logout}
                            class="text-neutral-600 hover:text-neutral-900 underline"
                        >
                            {"Log out"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
