use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::session::{Session, use_session};

/// Renders its page only with a logged in operator, handing the session to
/// it explicitly. Without one the operator is sent to the login page.
///
/// Pages behind this component can call their data hooks unconditionally.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub render: Callback<Rc<Session>, Html>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    match use_session().current() {
        Some(session) => props.render.emit(session),
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
