use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::State;

use components::{RequireAuth, ToastContainer, layout::MainLayout};
use contexts::session::{Session, SessionProvider};
use contexts::toast::ToastProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/bidding-sessions")]
    BiddingSessions,
    #[at("/bookings")]
    Bookings,
    #[at("/taxes")]
    Taxes,
    #[at("/settings/bidding")]
    BiddingConfig,
    #[at("/settings/cdw")]
    CdwSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <ToastContainer />
                    <Switch<Route> render={switch} />
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <pages::LoginPage /> },
        Route::Home => {
            return html! { <Redirect<Route> to={Route::BiddingSessions} /> };
        }
        Route::NotFound => {
            return html! {
                <MainLayout>
                    <pages::NotFoundPage />
                </MainLayout>
            };
        }
        Route::BiddingSessions => Callback::from(|session: Rc<Session>| {
            html! { <pages::BiddingSessionsPage {session} /> }
        }),
        Route::Bookings => Callback::from(|session: Rc<Session>| {
            html! { <pages::BookingsPage {session} /> }
        }),
        Route::Taxes => Callback::from(|session: Rc<Session>| {
            html! { <pages::CompanyTaxesPage {session} /> }
        }),
        Route::BiddingConfig => Callback::from(|session: Rc<Session>| {
            html! { <pages::BiddingConfigPage {session} /> }
        }),
        Route::CdwSettings => Callback::from(|session: Rc<Session>| {
            html! { <pages::CdwSettingsPage {session} /> }
        }),
    };

    html! {
        <MainLayout>
            <RequireAuth render={page} />
        </MainLayout>
    }
}
