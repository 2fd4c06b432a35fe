use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod leads;
mod submission;
mod timers;
mod webhook;
mod components {
    pub mod notification;
}
mod pages {
    pub mod contact;
    pub mod form_style;
    pub mod home;
    pub mod initialize;
}

use components::notification::Toaster;
use pages::{contact::Contact, home::Home, initialize::Initialize};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/initialize")]
    Initialize,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Initialize => {
            info!("Rendering Initialize page");
            html! { <Initialize /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <Toaster>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </Toaster>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/initialize"), Some(Route::Initialize));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn paths_for_routes() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Contact.to_path(), "/contact");
        assert_eq!(Route::Initialize.to_path(), "/initialize");
    }
}
