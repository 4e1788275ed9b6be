use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let faq_css = r#"
        .faq-section {
            padding: 4rem 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        .faq-section h2 {
            font-size: 2.2rem;
            text-align: center;
            margin-bottom: 2rem;
        }
        .faq-item {
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 12px;
            margin-bottom: 0.8rem;
            background: rgba(30, 33, 40, 0.6);
        }
        .faq-item.open { border-color: rgba(46, 196, 130, 0.4); }
        .faq-question {
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: none;
            border: none;
            color: #eee;
            font-size: 1rem;
            font-weight: 600;
            padding: 1.1rem 1.3rem;
            cursor: pointer;
            text-align: left;
        }
        .toggle-icon { color: #2EC482; font-size: 1.3rem; }
        .faq-answer {
            padding: 0 1.3rem 1.1rem;
            color: #aaa;
            font-size: 0.95rem;
        }
    "#;

    html! {
        <section id="faq" class="faq-section">
            <style>{faq_css}</style>
            <h2>{"Frequently Asked Questions"}</h2>
            <FaqItem question="How accurate is the AI scalp analysis?">
                <p>{"Our AI has been trained on millions of scalp images and achieves high accuracy in detecting common scalp conditions. However, please note this is not a medical diagnosis and should be used for informational purposes only."}</p>
            </FaqItem>
            <FaqItem question="Is my data and images secure?">
                <p>{"Absolutely. All data transfers are encrypted, your images are analyzed in real time and automatically deleted from our servers within 24 hours, and we never share or sell your personal data."}</p>
            </FaqItem>
            <FaqItem question="What conditions can ScalpSense detect?">
                <p>{"Our AI can identify over 20 scalp conditions including dandruff, dryness, oiliness, hair thinning, bald patches, scalp redness, fungal infections, and overall hair health metrics."}</p>
            </FaqItem>
            <FaqItem question="Can I use this instead of seeing a dermatologist?">
                <p>{"ScalpSense is designed to help you understand your scalp health and is not a replacement for professional medical advice. For serious concerns, we always recommend consulting with a qualified dermatologist."}</p>
            </FaqItem>
            <FaqItem question="How often should I scan my scalp?">
                <p>{"We recommend weekly scans to track progress and monitor changes. With our Premium plan, you get unlimited scans and can see your improvement over time with the tracking dashboard."}</p>
            </FaqItem>
            <FaqItem question="Do you offer refunds?">
                <p>{"Yes! We offer a 14-day money-back guarantee on all paid plans. If you're not satisfied with our service, contact our support team for a full refund."}</p>
            </FaqItem>
            <FaqItem question="What image quality do I need?">
                <p>{"For best results, use a smartphone camera in good lighting. The image should be clear, well-lit, and taken from about 6-8 inches away with your scalp clearly visible through parted hair."}</p>
            </FaqItem>
        </section>
    }
}
