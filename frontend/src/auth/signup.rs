pub mod login {
    use yew::prelude::*;
    use web_sys::HtmlInputElement;
    use serde::{Deserialize, Serialize};
    use yew_router::components::Link;
    use crate::Route;
    use crate::utils::api::{self, Api};
    use gloo_console::log;

    #[derive(Serialize)]
    pub struct LoginRequest {
        email: String,
        password: String,
    }

    #[derive(Deserialize)]
    pub struct TokenResponse {
        pub token: String,
    }

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    pub const AUTH_CSS: &str = r#"
        .auth-wrap {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 2rem;
        }
        .auth-container {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(46, 196, 130, 0.15);
            border-radius: 16px;
            padding: 3rem;
            width: 100%;
            max-width: 440px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
        }
        .auth-container h1 {
            font-size: 2rem;
            margin-bottom: 1.5rem;
            text-align: center;
            background: linear-gradient(45deg, #fff, #2EC482);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .auth-container label {
            display: block;
            font-size: 0.9rem;
            color: #ccc;
            margin-bottom: 0.4rem;
        }
        .auth-container input {
            width: 100%;
            background: rgba(15, 17, 21, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.12);
            border-radius: 10px;
            color: #fff;
            padding: 0.75rem 0.9rem;
            margin-bottom: 1.1rem;
            font-size: 1rem;
        }
        .auth-container input:focus { outline: none; border-color: #2EC482; }
        .auth-submit {
            width: 100%;
            background: #2EC482;
            color: #0f1115;
            border: none;
            padding: 0.85rem;
            font-size: 1rem;
            font-weight: 700;
            border-radius: 10px;
            cursor: pointer;
            margin-top: 0.4rem;
        }
        .auth-error {
            background: rgba(239, 68, 68, 0.12);
            border: 1px solid rgba(239, 68, 68, 0.4);
            color: #fca5a5;
            border-radius: 8px;
            padding: 0.7rem 0.9rem;
            margin-bottom: 1rem;
            font-size: 0.9rem;
        }
        .auth-redirect {
            margin-top: 1.6rem;
            text-align: center;
            color: rgba(255, 255, 255, 0.6);
            font-size: 0.9rem;
        }
        .auth-redirect a { color: #2EC482; text-decoration: none; margin-left: 0.25rem; }
        .auth-redirect a:hover { text-decoration: underline; }
    "#;

    #[function_component]
    pub fn Login() -> Html {
        let email = use_state(String::new);
        let password = use_state(String::new);
        let error = use_state(|| None::<String>);

        let onsubmit = {
            let email = email.clone();
            let password = password.clone();
            let error_setter = error.clone();

            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let email = (*email).clone();
                let password = (*password).clone();
                let error_setter = error_setter.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let request = match Api::post("/api/login").json(&LoginRequest { email, password }) {
                        Ok(request) => request,
                        Err(_) => {
                            error_setter.set(Some("Login failed".to_string()));
                            return;
                        }
                    };
                    match request.send().await {
                        Ok(response) => {
                            if response.ok() {
                                match response.json::<TokenResponse>().await {
                                    Ok(body) => {
                                        api::store_token(&body.token);
                                        error_setter.set(None);
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.location().set_href("/dashboard");
                                        }
                                    }
                                    Err(_) => {
                                        error_setter.set(Some("Login failed".to_string()));
                                    }
                                }
                            } else {
                                log!("Login request failed with status:", response.status());
                                match response.json::<ErrorResponse>().await {
                                    Ok(error_response) => error_setter.set(Some(error_response.error)),
                                    Err(_) => error_setter.set(Some("Login failed".to_string())),
                                }
                            }
                        }
                        Err(e) => {
                            log!("Network request failed:", e.to_string());
                            error_setter.set(Some(format!("Request failed: {}", e)));
                        }
                    }
                });
            })
        };

        html! {
            <div class="auth-wrap">
                <style>{AUTH_CSS}</style>
                <div class="auth-container">
                    <h1>{"Welcome Back"}</h1>
                    {
                        if let Some(message) = (*error).clone() {
                            html! { <div class="auth-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={onsubmit}>
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                        <button type="submit" class="auth-submit">{"Log In"}</button>
                    </form>
                    <p class="auth-redirect">
                        {"Don't have an account?"}
                        <Link<Route> to={Route::Register}>{"Sign up"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}

pub mod register {
    use yew::prelude::*;
    use web_sys::HtmlInputElement;
    use serde::{Deserialize, Serialize};
    use yew_router::components::Link;
    use crate::Route;
    use crate::utils::api::{self, Api};
    use super::login::{TokenResponse, AUTH_CSS};

    #[derive(Serialize)]
    struct RegisterRequest {
        email: String,
        password: String,
    }

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    #[function_component]
    pub fn Register() -> Html {
        let email = use_state(String::new);
        let password = use_state(String::new);
        let error = use_state(|| None::<String>);

        let onsubmit = {
            let email = email.clone();
            let password = password.clone();
            let error_setter = error.clone();

            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let email = (*email).clone();
                let password = (*password).clone();
                let error_setter = error_setter.clone();

                if password.len() < 8 {
                    error_setter.set(Some("Password must be 8+ characters".to_string()));
                    return;
                }

                wasm_bindgen_futures::spawn_local(async move {
                    let request = match Api::post("/api/register").json(&RegisterRequest { email, password }) {
                        Ok(request) => request,
                        Err(_) => {
                            error_setter.set(Some("Registration failed".to_string()));
                            return;
                        }
                    };
                    match request.send().await {
                        Ok(response) => {
                            if response.ok() {
                                match response.json::<TokenResponse>().await {
                                    Ok(body) => {
                                        api::store_token(&body.token);
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.location().set_href("/dashboard");
                                        }
                                    }
                                    Err(_) => {
                                        error_setter.set(Some("Registration failed".to_string()));
                                    }
                                }
                            } else {
                                match response.json::<ErrorResponse>().await {
                                    Ok(error_response) => error_setter.set(Some(error_response.error)),
                                    Err(_) => error_setter.set(Some("Registration failed".to_string())),
                                }
                            }
                        }
                        Err(e) => {
                            error_setter.set(Some(format!("Request failed: {}", e)));
                        }
                    }
                });
            })
        };

        html! {
            <div class="auth-wrap">
                <style>{AUTH_CSS}</style>
                <div class="auth-container">
                    <h1>{"Create Your Account"}</h1>
                    {
                        if let Some(message) = (*error).clone() {
                            html! { <div class="auth-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={onsubmit}>
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="At least 8 characters"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                        <button type="submit" class="auth-submit">{"Sign Up"}</button>
                    </form>
                    <p class="auth-redirect">
                        {"Already have an account?"}
                        <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}
