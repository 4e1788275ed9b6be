use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;
use crate::utils::api;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let logged_in = api::is_logged_in();

    let on_logout = Callback::from(move |_: MouseEvent| {
        api::clear_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    });

    let nav_css = r#"
        .navbar {
            position: sticky;
            top: 0;
            z-index: 100;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 2rem;
            background: rgba(15, 17, 21, 0.85);
            backdrop-filter: blur(10px);
            border-bottom: 1px solid rgba(46, 196, 130, 0.15);
        }
        .nav-logo {
            font-size: 1.3rem;
            font-weight: 700;
            text-decoration: none;
            background: linear-gradient(45deg, #fff, #2EC482);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }
        .nav-links a {
            color: #ccc;
            text-decoration: none;
            font-size: 0.95rem;
            transition: color 0.2s ease;
        }
        .nav-links a:hover { color: #2EC482; }
        .nav-cta {
            background: #2EC482;
            color: #0f1115 !important;
            padding: 0.5rem 1.1rem;
            border-radius: 8px;
            font-weight: 600;
        }
        .nav-logout {
            background: none;
            border: 1px solid rgba(255, 255, 255, 0.2);
            color: #ccc;
            padding: 0.45rem 1rem;
            border-radius: 8px;
            cursor: pointer;
        }
        .nav-logout:hover { border-color: #ef4444; color: #ef4444; }
        @media (max-width: 768px) {
            .navbar { padding: 1rem; }
            .nav-links { gap: 0.8rem; }
        }
    "#;

    html! {
        <nav class="navbar">
            <style>{nav_css}</style>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"ScalpSense"}
            </Link<Route>>
            <div class="nav-links">
                <a href="/#analyze">{"Analyze"}</a>
                <a href="/#pricing">{"Pricing"}</a>
                <a href="/#faq">{"FAQ"}</a>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                {
                    if logged_in {
                        html! {
                            <>
                                <Link<Route> to={Route::Dashboard} classes="nav-cta">{"Dashboard"}</Link<Route>>
                                <button class="nav-logout" onclick={on_logout}>{"Log out"}</button>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                                <Link<Route> to={Route::Register} classes="nav-cta">{"Get Started"}</Link<Route>>
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}
