use chrono::Utc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::models::{score_color, severity_color, ScalpAnalysis};
use crate::utils::api::{self, Api};

#[derive(Properties, PartialEq)]
pub struct AnalysisResultsProps {
    pub analysis: ScalpAnalysis,
}

fn recommendation_label(kind: &str) -> String {
    kind.replace('_', " ")
}

/// Fetches the server-rendered PDF with the bearer token and hands it to the
/// browser as a blob download.
async fn download_pdf(scan_id: i32) -> Result<(), String> {
    let response = Api::get(&format!("/api/scans/{}/pdf", scan_id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err("Failed to generate PDF. Please try again.".to_string());
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read PDF: {}", e))?;

    let blob = gloo_file::Blob::new_with_options(bytes.as_slice(), Some("application/pdf"));
    let object_url = gloo_file::ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create link")?
        .dyn_into()
        .map_err(|_| "Failed to create link")?;
    anchor.set_href(&object_url);
    anchor.set_download(&format!(
        "scalp-analysis-{}.pdf",
        Utc::now().format("%Y-%m-%d")
    ));
    anchor.click();
    Ok(())
}

#[function_component(AnalysisResults)]
pub fn analysis_results(props: &AnalysisResultsProps) -> Html {
    let analysis = props.analysis.clone();
    let toast_message = use_state(|| None::<String>);
    let toast_is_error = use_state(|| false);

    let on_download = {
        let toast_message = toast_message.clone();
        let toast_is_error = toast_is_error.clone();
        let scan_id = analysis.scan_id;
        Callback::from(move |_: MouseEvent| {
            let Some(scan_id) = scan_id else {
                return;
            };
            let toast_message = toast_message.clone();
            let toast_is_error = toast_is_error.clone();
            spawn_local(async move {
                match download_pdf(scan_id).await {
                    Ok(()) => {
                        toast_is_error.set(false);
                        toast_message.set(Some("PDF downloaded successfully!".to_string()));
                    }
                    Err(message) => {
                        toast_is_error.set(true);
                        toast_message.set(Some(message));
                    }
                }
            });
        })
    };

    let on_toast_clear = {
        let toast_message = toast_message.clone();
        Callback::from(move |_| toast_message.set(None))
    };

    let results_css = r#"
        .results-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            padding: 1.5rem;
            margin-bottom: 1.2rem;
        }
        .results-card h3 { font-size: 1.15rem; margin-bottom: 1rem; }
        .score-row { display: flex; align-items: center; gap: 1.5rem; }
        .score-value { font-size: 3rem; font-weight: 800; }
        .score-track {
            flex: 1;
            height: 14px;
            background: rgba(255, 255, 255, 0.08);
            border-radius: 99px;
            overflow: hidden;
        }
        .score-fill { height: 100%; border-radius: 99px; transition: width 1s ease; }
        .download-btn {
            float: right;
            background: none;
            border: 1px solid rgba(46, 196, 130, 0.5);
            color: #2EC482;
            padding: 0.45rem 1rem;
            border-radius: 8px;
            cursor: pointer;
            font-weight: 600;
        }
        .download-btn:hover { background: rgba(46, 196, 130, 0.1); }
        .condition-item {
            display: flex;
            gap: 0.8rem;
            align-items: flex-start;
            background: rgba(255, 255, 255, 0.03);
            border-radius: 10px;
            padding: 0.8rem;
            margin-bottom: 0.6rem;
        }
        .severity-badge {
            font-size: 0.75rem;
            font-weight: 700;
            padding: 0.15rem 0.6rem;
            border-radius: 6px;
            border: 1px solid;
            text-transform: capitalize;
            white-space: nowrap;
        }
        .condition-item p.name { font-weight: 600; }
        .condition-item p.desc, .cause-item p, .rec-item p.desc { color: #999; font-size: 0.9rem; }
        .causes-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.6rem; }
        .cause-item {
            background: rgba(255, 255, 255, 0.03);
            border-radius: 10px;
            padding: 0.8rem;
        }
        .cause-item .category {
            font-size: 0.75rem;
            text-transform: uppercase;
            color: #2EC482;
            font-weight: 700;
        }
        .rec-item {
            background: rgba(255, 255, 255, 0.03);
            border-radius: 10px;
            padding: 0.9rem;
            margin-bottom: 0.6rem;
        }
        .rec-item p.title { font-weight: 600; }
        .rec-item .rec-kind { color: #2EC482; font-size: 0.8rem; }
        .routine-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.8rem; }
        .routine-col { border-radius: 10px; padding: 0.9rem; }
        .routine-col h4 { margin-bottom: 0.5rem; }
        .routine-col ul { list-style: none; }
        .routine-col li { font-size: 0.85rem; margin-bottom: 0.35rem; }
        .dos-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.2rem; }
        .dos-grid ul { list-style: none; }
        .dos-grid li { font-size: 0.9rem; margin-bottom: 0.45rem; }
        .disclaimer {
            font-size: 0.8rem;
            color: #888;
            text-align: center;
            background: rgba(255, 255, 255, 0.03);
            border-radius: 10px;
            padding: 0.9rem;
        }
        @media (max-width: 700px) {
            .causes-grid, .routine-grid, .dos-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div class="analysis-results">
            <style>{results_css}</style>

            // Health score
            <div class="results-card">
                {
                    if analysis.scan_id.is_some() && api::is_logged_in() {
                        html! {
                            <button class="download-btn" onclick={on_download}>{"Download PDF"}</button>
                        }
                    } else {
                        html! {}
                    }
                }
                <h3>{"Hair Health Score"}</h3>
                <div class="score-row">
                    <span class="score-value" style={format!("color: {};", score_color(analysis.health_score))}>
                        {format!("{}%", analysis.health_score)}
                    </span>
                    <div class="score-track">
                        <div
                            class="score-fill"
                            style={format!(
                                "width: {}%; background: {};",
                                analysis.health_score.clamp(0, 100),
                                score_color(analysis.health_score)
                            )}
                        />
                    </div>
                </div>
                {
                    if !analysis.overall_assessment.is_empty() {
                        html! { <p style="margin-top: 1rem; color: #aaa;">{&analysis.overall_assessment}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if !analysis.conditions.is_empty() {
                    html! {
                        <div class="results-card">
                            <h3>{"Detected Conditions"}</h3>
                            {
                                for analysis.conditions.iter().map(|condition| {
                                    let color = severity_color(&condition.severity);
                                    html! {
                                        <div class="condition-item">
                                            <span class="severity-badge" style={format!("color: {c}; border-color: {c};", c = color)}>
                                                {&condition.severity}
                                            </span>
                                            <div>
                                                <p class="name">{&condition.name}</p>
                                                <p class="desc">{&condition.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if !analysis.causes.is_empty() {
                    html! {
                        <div class="results-card">
                            <h3>{"Possible Causes"}</h3>
                            <div class="causes-grid">
                                {
                                    for analysis.causes.iter().map(|cause| html! {
                                        <div class="cause-item">
                                            <span class="category">{&cause.category}</span>
                                            <p>{&cause.description}</p>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if !analysis.recommendations.is_empty() {
                    html! {
                        <div class="results-card">
                            <h3>{"Recommendations"}</h3>
                            {
                                for analysis.recommendations.iter().map(|rec| html! {
                                    <div class="rec-item">
                                        <p class="title">
                                            {&rec.title}
                                            {" "}
                                            <span class="rec-kind">{format!("({})", recommendation_label(&rec.kind))}</span>
                                        </p>
                                        <p class="desc">{&rec.description}</p>
                                    </div>
                                })
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="results-card">
                <h3>{"Hair Care Routine"}</h3>
                <div class="routine-grid">
                    <div class="routine-col" style="background: rgba(34, 197, 94, 0.08);">
                        <h4 style="color: #22c55e;">{"Daily"}</h4>
                        <ul>{ for analysis.hair_care_routine.daily.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }</ul>
                    </div>
                    <div class="routine-col" style="background: rgba(59, 130, 246, 0.08);">
                        <h4 style="color: #3b82f6;">{"Weekly"}</h4>
                        <ul>{ for analysis.hair_care_routine.weekly.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }</ul>
                    </div>
                    <div class="routine-col" style="background: rgba(168, 85, 247, 0.08);">
                        <h4 style="color: #a855f7;">{"Monthly"}</h4>
                        <ul>{ for analysis.hair_care_routine.monthly.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }</ul>
                    </div>
                </div>
            </div>

            <div class="dos-grid" style="margin-bottom: 1.2rem;">
                <div class="results-card" style="margin-bottom: 0;">
                    <h3 style="color: #22c55e;">{"Do's"}</h3>
                    <ul>{ for analysis.dos_and_donts.dos.iter().map(|item| html! { <li>{format!("✓ {}", item)}</li> }) }</ul>
                </div>
                <div class="results-card" style="margin-bottom: 0;">
                    <h3 style="color: #ef4444;">{"Don'ts"}</h3>
                    <ul>{ for analysis.dos_and_donts.donts.iter().map(|item| html! { <li>{format!("✗ {}", item)}</li> }) }</ul>
                </div>
            </div>

            <p class="disclaimer">
                <strong>{"Disclaimer: "}</strong>
                {"This analysis is for informational purposes only and is not a substitute for professional medical advice. Please consult a dermatologist for proper diagnosis and treatment."}
            </p>

            <Toast message={(*toast_message).clone()} is_error={*toast_is_error} on_clear={on_toast_clear} />
        </div>
    }
}
