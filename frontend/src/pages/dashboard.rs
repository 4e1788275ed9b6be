use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::results::AnalysisResults;
use crate::components::toast::Toast;
use crate::config;
use crate::models::{format_timestamp, score_color, trend_at, ScalpAnalysis, ScanRecord, Trend};
use crate::utils::api::{self, Api};

fn image_url(path: &str) -> String {
    format!("{}{}", config::get_backend_url(), path)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let scans = use_state(Vec::<ScanRecord>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<ScanRecord>);
    let toast_message = use_state(|| None::<String>);

    // Redirect anonymous visitors to login, otherwise fetch the history.
    {
        let scans = scans.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                if !api::is_logged_in() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                } else {
                    spawn_local(async move {
                        match Api::get("/api/scans").send().await {
                            Ok(response) if response.ok() => {
                                match response.json::<Vec<ScanRecord>>().await {
                                    Ok(list) => scans.set(list),
                                    Err(_) => gloo_console::log!("Failed to parse scan list"),
                                }
                            }
                            Ok(response) => {
                                gloo_console::log!("Scan list request failed:", response.status());
                                if response.status() == 401 {
                                    api::clear_token();
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.location().set_href("/login");
                                    }
                                }
                            }
                            Err(e) => gloo_console::log!("Network error:", e.to_string()),
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_back = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let on_delete = {
        let scans = scans.clone();
        let selected = selected.clone();
        let toast_message = toast_message.clone();
        Callback::from(move |scan_id: i32| {
            let scans = scans.clone();
            let selected = selected.clone();
            let toast_message = toast_message.clone();
            spawn_local(async move {
                match Api::delete(&format!("/api/scans/{}", scan_id)).send().await {
                    Ok(response) if response.ok() => {
                        let remaining: Vec<ScanRecord> = (*scans)
                            .iter()
                            .filter(|s| s.id != scan_id)
                            .cloned()
                            .collect();
                        scans.set(remaining);
                        selected.set(None);
                        toast_message.set(Some("Scan deleted.".to_string()));
                    }
                    _ => {
                        toast_message.set(Some("Failed to delete scan.".to_string()));
                    }
                }
            });
        })
    };

    let on_toast_clear = {
        let toast_message = toast_message.clone();
        Callback::from(move |_| toast_message.set(None))
    };

    let dashboard_css = r#"
        .dash-main { max-width: 900px; margin: 0 auto; padding: 2.5rem 2rem; }
        .dash-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 2rem;
        }
        .dash-header h1 { font-size: 1.8rem; }
        .dash-header .count { color: #999; font-size: 0.9rem; }
        .new-scan-btn {
            background: #2EC482;
            color: #0f1115;
            text-decoration: none;
            font-weight: 700;
            padding: 0.6rem 1.3rem;
            border-radius: 10px;
        }
        .stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2rem; }
        .stat-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 14px;
            padding: 1.3rem;
        }
        .stat-card .label { color: #999; font-size: 0.85rem; margin-bottom: 0.4rem; }
        .stat-card .value { font-size: 2rem; font-weight: 800; }
        .scan-row {
            display: flex;
            align-items: center;
            gap: 1rem;
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 14px;
            padding: 1rem;
            margin-bottom: 0.8rem;
            cursor: pointer;
            transition: border-color 0.2s ease;
        }
        .scan-row:hover { border-color: rgba(46, 196, 130, 0.5); }
        .scan-thumb {
            width: 64px;
            height: 64px;
            border-radius: 12px;
            object-fit: cover;
            background: rgba(255, 255, 255, 0.05);
        }
        .scan-thumb.placeholder {
            display: flex;
            align-items: center;
            justify-content: center;
            color: #666;
            font-size: 1.4rem;
        }
        .scan-row .score { font-size: 1.5rem; font-weight: 800; }
        .scan-row .meta { color: #999; font-size: 0.85rem; }
        .trend { font-size: 1rem; margin-left: 0.3rem; }
        .empty-state { text-align: center; padding: 4rem 1rem; color: #999; }
        .empty-state h2 { color: #eee; margin-bottom: 0.5rem; }
        .back-btn, .delete-btn {
            background: none;
            border: 1px solid rgba(255, 255, 255, 0.2);
            color: #ccc;
            padding: 0.5rem 1.1rem;
            border-radius: 8px;
            cursor: pointer;
            margin-bottom: 1.2rem;
        }
        .delete-btn { border-color: rgba(239, 68, 68, 0.5); color: #ef4444; margin-left: 0.6rem; }
        .detail-head { display: flex; gap: 1.5rem; margin-bottom: 1.5rem; align-items: flex-start; }
        .detail-head img { width: 220px; border-radius: 14px; object-fit: cover; }
        @media (max-width: 700px) {
            .stats-grid { grid-template-columns: 1fr; }
            .detail-head { flex-direction: column; }
        }
    "#;

    let body = if *loading {
        html! { <div class="empty-state">{"Loading..."}</div> }
    } else if let Some(scan) = (*selected).clone() {
        let scan_id = scan.id;
        let delete = {
            let on_delete = on_delete.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(scan_id))
        };
        let analysis: ScalpAnalysis = scan.clone().into();
        html! {
            <>
                <button class="back-btn" onclick={on_back}>{"← Back to History"}</button>
                <button class="delete-btn" onclick={delete}>{"Delete Scan"}</button>
                <div class="detail-head">
                    {
                        if let Some(path) = scan.image_path.as_ref() {
                            html! { <img src={image_url(path)} alt="Scalp scan" /> }
                        } else {
                            html! {}
                        }
                    }
                    <div>
                        <p class="meta">{format_timestamp(scan.created_at)}</p>
                        <p style={format!("font-size: 2.6rem; font-weight: 800; color: {};", score_color(scan.health_score))}>
                            {format!("{}%", scan.health_score)}
                        </p>
                        <p class="meta">{"Health Score"}</p>
                    </div>
                </div>
                <AnalysisResults {analysis} />
            </>
        }
    } else if scans.is_empty() {
        html! {
            <div class="empty-state">
                <h2>{"No Scans Yet"}</h2>
                <p>{"Start your first scalp analysis to track your hair health"}</p>
                <p style="margin-top: 1.2rem;">
                    <a class="new-scan-btn" href="/#analyze">{"Start Your First Scan"}</a>
                </p>
            </div>
        }
    } else {
        let latest = scans.first().map(|s| s.health_score).unwrap_or(0);
        let best = scans.iter().map(|s| s.health_score).max().unwrap_or(0);
        html! {
            <>
                <div class="stats-grid">
                    <div class="stat-card">
                        <p class="label">{"Latest Score"}</p>
                        <p class="value" style={format!("color: {};", score_color(latest))}>{format!("{}%", latest)}</p>
                    </div>
                    <div class="stat-card">
                        <p class="label">{"Best Score"}</p>
                        <p class="value" style="color: #22c55e;">{format!("{}%", best)}</p>
                    </div>
                    <div class="stat-card">
                        <p class="label">{"Total Scans"}</p>
                        <p class="value">{scans.len()}</p>
                    </div>
                </div>
                {
                    for scans.iter().enumerate().map(|(index, scan)| {
                        let trend = trend_at(&scans, index);
                        let scan_clone = scan.clone();
                        let selected = selected.clone();
                        let on_select = Callback::from(move |_: MouseEvent| {
                            selected.set(Some(scan_clone.clone()));
                        });
                        html! {
                            <div class="scan-row" onclick={on_select}>
                                {
                                    if let Some(path) = scan.image_path.as_ref() {
                                        html! { <img class="scan-thumb" src={image_url(path)} alt="Scan preview" /> }
                                    } else {
                                        html! { <div class="scan-thumb placeholder">{"—"}</div> }
                                    }
                                }
                                <div style="flex: 1;">
                                    <span class="score" style={format!("color: {};", score_color(scan.health_score))}>
                                        {format!("{}%", scan.health_score)}
                                    </span>
                                    {
                                        match trend {
                                            Some(Trend::Up) => html! { <span class="trend" style="color: #22c55e;">{"▲"}</span> },
                                            Some(Trend::Down) => html! { <span class="trend" style="color: #ef4444;">{"▼"}</span> },
                                            Some(Trend::Same) => html! { <span class="trend" style="color: #999;">{"–"}</span> },
                                            None => html! {},
                                        }
                                    }
                                    <p class="meta">{format_timestamp(scan.created_at)}</p>
                                    {
                                        if !scan.conditions.is_empty() {
                                            html! {
                                                <p class="meta">
                                                    {format!("{} condition{} detected", scan.conditions.len(), if scan.conditions.len() > 1 { "s" } else { "" })}
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <span style="color: #666;">{"›"}</span>
                            </div>
                        }
                    })
                }
            </>
        }
    };

    html! {
        <div>
            <style>{dashboard_css}</style>
            <Navbar />
            <main class="dash-main">
                <div class="dash-header">
                    <div>
                        <h1>{"Scan History"}</h1>
                        <p class="count">{format!("{} scans", scans.len())}</p>
                    </div>
                    <a class="new-scan-btn" href="/#analyze">{"New Scan"}</a>
                </div>
                { body }
            </main>
            <Footer />
            <Toast message={(*toast_message).clone()} is_error={false} on_clear={on_toast_clear} />
        </div>
    }
}
