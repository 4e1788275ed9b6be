use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: "Free",
        period: "",
        description: "Perfect for trying out our AI analysis",
        features: &[
            "1 scalp scan per month",
            "Basic health score",
            "General recommendations",
            "Email support",
        ],
        cta: "Start Free",
        popular: false,
    },
    Plan {
        name: "Premium",
        price: "$9.99",
        period: "/month",
        description: "Complete hair care solution",
        features: &[
            "Unlimited scalp scans",
            "Detailed health reports",
            "Personalized treatment plans",
            "Progress tracking",
            "Product recommendations",
            "Priority support",
            "Before/after comparison",
        ],
        cta: "Get Premium",
        popular: true,
    },
    Plan {
        name: "Professional",
        price: "$29.99",
        period: "/month",
        description: "For clinics and professionals",
        features: &[
            "Everything in Premium",
            "Multiple user profiles",
            "API access",
            "White-label reports",
            "Dedicated account manager",
            "Custom integrations",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let pricing_css = r#"
        .pricing-section {
            padding: 4rem 2rem;
            max-width: 1100px;
            margin: 0 auto;
            text-align: center;
        }
        .pricing-section h2 {
            font-size: 2.2rem;
            margin-bottom: 0.5rem;
        }
        .pricing-section .section-sub {
            color: #999;
            margin-bottom: 2.5rem;
        }
        .pricing-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            align-items: stretch;
        }
        .pricing-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            padding: 2rem 1.5rem;
            text-align: left;
            display: flex;
            flex-direction: column;
        }
        .pricing-card.popular {
            border-color: #2EC482;
            box-shadow: 0 0 30px rgba(46, 196, 130, 0.15);
            position: relative;
        }
        .popular-badge {
            position: absolute;
            top: -12px;
            left: 50%;
            transform: translateX(-50%);
            background: #2EC482;
            color: #0f1115;
            font-size: 0.75rem;
            font-weight: 700;
            padding: 0.2rem 0.8rem;
            border-radius: 99px;
        }
        .pricing-card .price {
            font-size: 2.2rem;
            font-weight: 800;
            margin: 0.8rem 0 0.2rem;
        }
        .pricing-card .period { color: #999; font-size: 1rem; font-weight: 400; }
        .pricing-card .desc { color: #999; font-size: 0.9rem; margin-bottom: 1.2rem; }
        .pricing-card ul { list-style: none; margin-bottom: 1.5rem; flex: 1; }
        .pricing-card li {
            font-size: 0.9rem;
            color: #ccc;
            margin-bottom: 0.55rem;
            padding-left: 1.4rem;
            position: relative;
        }
        .pricing-card li::before {
            content: "✓";
            color: #2EC482;
            position: absolute;
            left: 0;
        }
        .plan-cta {
            display: block;
            text-align: center;
            text-decoration: none;
            padding: 0.7rem 1rem;
            border-radius: 10px;
            font-weight: 600;
            border: 1px solid rgba(46, 196, 130, 0.5);
            color: #2EC482;
        }
        .plan-cta.popular-cta {
            background: #2EC482;
            color: #0f1115;
            border: none;
        }
        @media (max-width: 900px) {
            .pricing-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <section id="pricing" class="pricing-section">
            <style>{pricing_css}</style>
            <h2>{"Simple, Transparent Pricing"}</h2>
            <p class="section-sub">{"Choose the plan that fits your hair care journey"}</p>
            <div class="pricing-grid">
                {
                    for PLANS.iter().map(|plan| {
                        let card_class = if plan.popular { "pricing-card popular" } else { "pricing-card" };
                        let cta_class = if plan.popular { "plan-cta popular-cta" } else { "plan-cta" };
                        html! {
                            <div class={card_class}>
                                { if plan.popular { html! { <span class="popular-badge">{"Most Popular"}</span> } } else { html! {} } }
                                <h3>{plan.name}</h3>
                                <div class="price">
                                    {plan.price}
                                    <span class="period">{plan.period}</span>
                                </div>
                                <p class="desc">{plan.description}</p>
                                <ul>
                                    { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <Link<Route> to={Route::Register} classes={cta_class}>
                                    {plan.cta}
                                </Link<Route>>
                            </div>
                        }
                    })
                }
            </div>
        </section>
    }
}
