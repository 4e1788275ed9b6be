use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod models;
mod auth {
    pub mod signup;
}
mod components {
    pub mod navbar;
    pub mod footer;
    pub mod toast;
    pub mod pricing;
    pub mod faq;
    pub mod upload;
    pub mod results;
}
mod pages {
    pub mod landing;
    pub mod dashboard;
    pub mod contact;
}
mod utils {
    pub mod api;
}

use auth::signup::login::Login;
use auth::signup::register::Register;
use pages::contact::Contact;
use pages::dashboard::Dashboard;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! {
            <div style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
                <h1>{"404"}</h1>
                <p>{"That page doesn't exist."}</p>
                <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
