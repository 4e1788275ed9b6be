use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_css = r#"
        .site-footer {
            border-top: 1px solid rgba(255, 255, 255, 0.08);
            padding: 3rem 2rem 2rem;
            margin-top: 4rem;
            color: #999;
        }
        .footer-grid {
            display: grid;
            grid-template-columns: 2fr 1fr 1fr;
            gap: 2rem;
            max-width: 1100px;
            margin: 0 auto;
        }
        .footer-grid h4 { color: #eee; margin-bottom: 0.8rem; font-size: 1rem; }
        .footer-grid ul { list-style: none; }
        .footer-grid li { margin-bottom: 0.5rem; }
        .footer-grid a { color: #999; text-decoration: none; font-size: 0.9rem; }
        .footer-grid a:hover { color: #2EC482; }
        .footer-note {
            max-width: 1100px;
            margin: 2rem auto 0;
            padding-top: 1.5rem;
            border-top: 1px solid rgba(255, 255, 255, 0.06);
            font-size: 0.8rem;
            color: #666;
        }
        @media (max-width: 768px) {
            .footer-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-grid">
                <div>
                    <h4>{"ScalpSense"}</h4>
                    <p style="font-size: 0.9rem; max-width: 320px;">
                        {"AI-powered scalp and hair health analysis. Upload a photo, get a detailed assessment in seconds."}
                    </p>
                </div>
                <div>
                    <h4>{"Product"}</h4>
                    <ul>
                        <li><a href="/#analyze">{"Analyze"}</a></li>
                        <li><a href="/#pricing">{"Pricing"}</a></li>
                        <li><a href="/#faq">{"FAQ"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Dashboard}>{"Scan History"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="footer-note">
                <p>
                    {"ScalpSense provides informational analysis only and is not a substitute for professional medical advice. Consult a dermatologist for diagnosis and treatment."}
                </p>
                <p style="margin-top: 0.5rem;">{"© 2025 ScalpSense. All rights reserved."}</p>
            </div>
        </footer>
    }
}
