use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod context;
mod error;
mod head;
mod lifecycle;
mod opacity;
mod reveal;
mod sections;
mod session;
mod styles;
#[cfg(test)]
mod test_support;
mod pages {
    pub mod home;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod header;
    pub mod hero;
    pub mod services;
}

use config::SiteConfig;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.site.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed, which keeps working.
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        warn!("error initializing log: {}", e);
    }

    let site = SiteConfig::embedded().unwrap_or_else(|e| {
        error!("{}", e);
        SiteConfig::default()
    });

    // The registry keeps the sheet mounted for the lifetime of the page.
    if let Err(e) = styles::mount_global_styles() {
        warn!("{}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
}
