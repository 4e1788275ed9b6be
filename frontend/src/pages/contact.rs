use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::Toast;
use crate::models::ErrorResponse;
use crate::utils::api::Api;

#[derive(Serialize, Clone)]
struct ContactRequest {
    name: String,
    email: String,
    subject: String,
    message: String,
}

struct ContactInfo {
    title: &'static str,
    value: &'static str,
    description: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email",
        value: "support@scalpsense.app",
        description: "For general inquiries",
    },
    ContactInfo {
        title: "Live Chat",
        value: "Available 24/7",
        description: "Instant support in-app",
    },
    ContactInfo {
        title: "Response Time",
        value: "Within 24 hours",
        description: "Usually much faster",
    },
    ContactInfo {
        title: "Office",
        value: "Helsinki, FI",
        description: "By appointment only",
    },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let is_sending = use_state(|| false);
    let toast_message = use_state(|| None::<String>);
    let toast_is_error = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let is_sending = is_sending.clone();
        let toast_message = toast_message.clone();
        let toast_is_error = toast_is_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let is_sending = is_sending.clone();
            let toast_message = toast_message.clone();
            let toast_is_error = toast_is_error.clone();

            is_sending.set(true);
            spawn_local(async move {
                let request = match Api::post("/api/contact").json(&payload) {
                    Ok(request) => request,
                    Err(_) => {
                        toast_is_error.set(true);
                        toast_message.set(Some("Failed to send message.".to_string()));
                        is_sending.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) => {
                        if response.ok() {
                            toast_is_error.set(false);
                            toast_message.set(Some(
                                "Message sent! We'll get back to you within 24 hours.".to_string(),
                            ));
                            name.set(String::new());
                            email.set(String::new());
                            subject.set(String::new());
                            message.set(String::new());
                        } else {
                            let body = response
                                .json::<ErrorResponse>()
                                .await
                                .map(|b| b.error)
                                .unwrap_or_else(|_| "Failed to send message.".to_string());
                            toast_is_error.set(true);
                            toast_message.set(Some(body));
                        }
                    }
                    Err(e) => {
                        toast_is_error.set(true);
                        toast_message.set(Some(format!("Request failed: {}", e)));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let on_toast_clear = {
        let toast_message = toast_message.clone();
        Callback::from(move |_| toast_message.set(None))
    };

    let contact_css = r#"
        .contact-main {
            max-width: 1000px;
            margin: 0 auto;
            padding: 4rem 2rem;
        }
        .contact-main h1 { font-size: 2.6rem; text-align: center; margin-bottom: 0.6rem; }
        .contact-main .sub { text-align: center; color: #999; margin-bottom: 2.5rem; }
        .contact-grid { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; }
        .contact-form-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            padding: 2rem;
        }
        .contact-form-card h2 { font-size: 1.3rem; margin-bottom: 1.2rem; }
        .contact-form-card label { display: block; font-size: 0.9rem; color: #ccc; margin-bottom: 0.35rem; }
        .contact-form-card input, .contact-form-card textarea {
            width: 100%;
            background: rgba(15, 17, 21, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.12);
            border-radius: 10px;
            color: #fff;
            padding: 0.7rem 0.9rem;
            margin-bottom: 1rem;
            font-size: 0.95rem;
            font-family: inherit;
        }
        .contact-form-card input:focus, .contact-form-card textarea:focus {
            outline: none;
            border-color: #2EC482;
        }
        .contact-submit {
            width: 100%;
            background: #2EC482;
            color: #0f1115;
            border: none;
            padding: 0.85rem;
            font-weight: 700;
            font-size: 1rem;
            border-radius: 10px;
            cursor: pointer;
        }
        .contact-submit:disabled { opacity: 0.6; cursor: wait; }
        .info-grid { display: grid; grid-template-columns: 1fr; gap: 0.9rem; }
        .info-card {
            background: rgba(30, 33, 40, 0.6);
            border: 1px solid rgba(255, 255, 255, 0.06);
            border-radius: 12px;
            padding: 1.1rem;
        }
        .info-card h3 { font-size: 0.95rem; }
        .info-card .value { color: #2EC482; font-weight: 600; font-size: 0.95rem; }
        .info-card .desc { color: #888; font-size: 0.85rem; }
        @media (max-width: 820px) {
            .contact-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div>
            <style>{contact_css}</style>
            <Navbar />
            <main class="contact-main">
                <h1>{"Get in Touch"}</h1>
                <p class="sub">{"Have questions about ScalpSense? We'd love to hear from you."}</p>
                <div class="contact-grid">
                    <div class="contact-form-card">
                        <h2>{"Send us a Message"}</h2>
                        <form onsubmit={onsubmit}>
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                placeholder="Your name"
                                required=true
                                value={(*name).clone()}
                                oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    })
                                }}
                            />
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                required=true
                                value={(*email).clone()}
                                oninput={{
                                    let email = email.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    })
                                }}
                            />
                            <label for="subject">{"Subject"}</label>
                            <input
                                id="subject"
                                placeholder="How can we help?"
                                required=true
                                value={(*subject).clone()}
                                oninput={{
                                    let subject = subject.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        subject.set(input.value());
                                    })
                                }}
                            />
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                rows="5"
                                placeholder="Tell us more about your inquiry..."
                                required=true
                                value={(*message).clone()}
                                oninput={{
                                    let message = message.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        message.set(input.value());
                                    })
                                }}
                            />
                            <button type="submit" class="contact-submit" disabled={*is_sending}>
                                { if *is_sending { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                    <div class="info-grid">
                        {
                            for CONTACT_INFO.iter().map(|info| html! {
                                <div class="info-card">
                                    <h3>{info.title}</h3>
                                    <p class="value">{info.value}</p>
                                    <p class="desc">{info.description}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </main>
            <Footer />
            <Toast message={(*toast_message).clone()} is_error={*toast_is_error} on_clear={on_toast_clear} />
        </div>
    }
}
