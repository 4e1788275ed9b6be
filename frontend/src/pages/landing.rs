use yew::prelude::*;
use yew_router::components::Link;

use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::pricing::PricingSection;
use crate::components::upload::UploadSection;
use crate::Route;

struct Step {
    number: &'static str,
    title: &'static str,
    text: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "1",
        title: "Upload a Photo",
        text: "Take a clear photo of your scalp in good lighting, or drag an existing image into the analyzer.",
    },
    Step {
        number: "2",
        title: "AI Analysis",
        text: "Our AI examines the image for dandruff, dryness, thinning, redness and a dozen other signals.",
    },
    Step {
        number: "3",
        title: "Get Your Plan",
        text: "Receive a health score, detected conditions, likely causes and a personalized care routine.",
    },
];

struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Instant Health Score",
        text: "A 0-100 score summarizing your scalp condition, tracked across every scan.",
    },
    Feature {
        title: "Condition Detection",
        text: "Identifies 20+ conditions from dandruff to early thinning, each with severity.",
    },
    Feature {
        title: "Personalized Routines",
        text: "Daily, weekly and monthly care routines tailored to what the AI actually sees.",
    },
    Feature {
        title: "PDF Reports",
        text: "Export any analysis as a clean multi-page report to share with your dermatologist.",
    },
    Feature {
        title: "Progress Tracking",
        text: "Your scan history shows trends over time so you know what's working.",
    },
    Feature {
        title: "Private by Default",
        text: "Uploaded images are deleted from our servers within 24 hours.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .hero {
            text-align: center;
            padding: 6rem 2rem 4rem;
            max-width: 820px;
            margin: 0 auto;
        }
        .hero h1 {
            font-size: 3rem;
            line-height: 1.15;
            margin-bottom: 1.2rem;
            background: linear-gradient(45deg, #fff, #2EC482);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero p.sub {
            font-size: 1.2rem;
            color: #aaa;
            margin-bottom: 2rem;
        }
        .hero-cta {
            display: inline-block;
            background: #2EC482;
            color: #0f1115;
            font-size: 1.05rem;
            font-weight: 700;
            padding: 0.9rem 2rem;
            border-radius: 12px;
            text-decoration: none;
        }
        .hero-secondary {
            display: inline-block;
            margin-left: 1rem;
            color: #ccc;
            text-decoration: none;
            padding: 0.9rem 1.2rem;
        }
        .hero-secondary:hover { color: #2EC482; }
        .steps-section, .features-section {
            padding: 3rem 2rem;
            max-width: 1000px;
            margin: 0 auto;
            text-align: center;
        }
        .steps-section h2, .features-section h2 { font-size: 2.2rem; margin-bottom: 2rem; }
        .steps-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
        .step-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            padding: 1.8rem 1.4rem;
            text-align: left;
        }
        .step-number {
            display: inline-flex;
            width: 38px;
            height: 38px;
            align-items: center;
            justify-content: center;
            border-radius: 50%;
            background: rgba(46, 196, 130, 0.15);
            color: #2EC482;
            font-weight: 800;
            margin-bottom: 0.9rem;
        }
        .step-card h3 { margin-bottom: 0.4rem; font-size: 1.05rem; }
        .step-card p { color: #999; font-size: 0.9rem; }
        .features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.2rem; }
        .feature-card {
            background: rgba(30, 33, 40, 0.6);
            border: 1px solid rgba(255, 255, 255, 0.06);
            border-radius: 14px;
            padding: 1.4rem;
            text-align: left;
        }
        .feature-card h3 { font-size: 1rem; margin-bottom: 0.4rem; color: #2EC482; }
        .feature-card p { color: #999; font-size: 0.88rem; }
        @media (max-width: 900px) {
            .hero h1 { font-size: 2.2rem; }
            .steps-grid, .features-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <Navbar />
            <header class="hero">
                <h1>{"Understand Your Scalp in Seconds"}</h1>
                <p class="sub">
                    {"Upload a photo and let our AI assess your scalp health, detect conditions, and build a care routine that actually fits you."}
                </p>
                <a class="hero-cta" href="#analyze">{"Analyze My Scalp"}</a>
                <Link<Route> to={Route::Dashboard} classes="hero-secondary">{"View Scan History"}</Link<Route>>
            </header>

            <section class="steps-section">
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    {
                        for STEPS.iter().map(|step| html! {
                            <div class="step-card">
                                <span class="step-number">{step.number}</span>
                                <h3>{step.title}</h3>
                                <p>{step.text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="features-section">
                <h2>{"Everything Your Hair Needs"}</h2>
                <div class="features-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <UploadSection />
            <PricingSection />
            <FaqSection />
            <Footer />
        </div>
    }
}
