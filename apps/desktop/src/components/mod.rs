mod form;

pub use form::{RegistrationPage, TextInput};

use dioxus::prelude::*;
use nwatch::domain::config::ClientConfig;
use nwatch::domain::constants::{LANDING_ROUTE, REGISTER_ROUTE};
use nwatch::features::registration::{HttpUserGateway, RegistrationController};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::mpsc;

/// The registration controller shared with the page through context.
pub type Form = RegistrationController<HttpUserGateway>;

type RouteFeed = Rc<RefCell<Option<mpsc::UnboundedReceiver<String>>>>;

/// Root component: a two-route shell around the registration page.
///
/// The controller navigates through a channel because signals cannot leave the
/// UI thread.
#[component]
pub fn App() -> Element {
    let config = use_context::<ClientConfig>();
    let mut route = use_signal(|| REGISTER_ROUTE.to_owned());

    let (form, routes) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel();
        let form = nwatch::registration_form(&config, tx).map_err(|e| Rc::<str>::from(e.to_string()));
        (form, RouteFeed::new(RefCell::new(Some(rx))))
    });

    use_future(move || {
        let routes = Rc::clone(&routes);
        async move {
            let Some(mut feed) = routes.borrow_mut().take() else {
                return;
            };
            while let Some(next) = feed.recv().await {
                tracing::info!(route = %next, "Route changed");
                route.set(next);
            }
        }
    });

    match form {
        Err(message) => rsx! {
            div { class: "alert alert-danger", {setup_error(&message)} }
        },
        Ok(form) => {
            use_context_provider(|| form);
            if route() == LANDING_ROUTE {
                rsx! { Landing { on_register: move |()| route.set(REGISTER_ROUTE.to_owned()) } }
            } else {
                rsx! { RegistrationPage {} }
            }
        },
    }
}

/// Banner text when the controller cannot be built from the config.
pub(crate) fn setup_error(message: &str) -> String {
    format!("Registration service is misconfigured: {message}")
}

#[component]
fn Landing(on_register: EventHandler<()>) -> Element {
    rsx! {
        main { class: "landing",
            h1 { "NeoWatch" }
            p { "Asteroid alerts are on their way." }
            button { r#type: "button", onclick: move |_| on_register.call(()), "Register another user" }
        }
    }
}
