use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    #[prop_or(false)]
    pub is_error: bool,
    pub on_clear: Callback<()>,
}

/// Fixed-position toast that dismisses itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_clear = props.on_clear.clone();
        use_effect_with_deps(
            move |message: &Option<String>| {
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(4_000, move || {
                        on_clear.emit(());
                    })
                });
                move || {
                    if let Some(timeout) = timeout {
                        timeout.cancel();
                    }
                }
            },
            props.message.clone(),
        );
    }

    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let background = if props.is_error { "#7f1d1d" } else { "#14532d" };
    let border = if props.is_error { "#ef4444" } else { "#22c55e" };

    html! {
        <div style={format!(
            "position: fixed; bottom: 2rem; right: 2rem; z-index: 1000; \
             background: {}; border: 1px solid {}; color: #fff; \
             padding: 0.9rem 1.2rem; border-radius: 10px; max-width: 320px; \
             box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4); font-size: 0.95rem;",
            background, border
        )}>
            { message }
        </div>
    }
}
