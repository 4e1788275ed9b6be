use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::results::AnalysisResults;
use crate::components::toast::Toast;
use crate::models::{ErrorResponse, ScalpAnalysis};
use crate::utils::api::Api;

fn read_file(
    file: web_sys::File,
    preview: UseStateHandle<Option<String>>,
    selected: UseStateHandle<Option<(String, f64)>>,
    error: UseStateHandle<Option<String>>,
) {
    if !file.type_().starts_with("image/") {
        error.set(Some(
            "Invalid file type: please upload an image file (JPG, PNG, etc.)".to_string(),
        ));
        return;
    }
    let name = file.name();
    let size_mb = file.size() / 1024.0 / 1024.0;
    let blob = gloo_file::Blob::from(file);
    spawn_local(async move {
        match gloo_file::futures::read_as_data_url(&blob).await {
            Ok(data_url) => {
                selected.set(Some((name, size_mb)));
                preview.set(Some(data_url));
            }
            Err(e) => {
                error.set(Some(format!("Failed to read file: {}", e)));
            }
        }
    });
}

#[function_component(UploadSection)]
pub fn upload_section() -> Html {
    let preview = use_state(|| None::<String>);
    let selected = use_state(|| None::<(String, f64)>);
    let drag_active = use_state(|| false);
    let is_analyzing = use_state(|| false);
    let error = use_state(|| None::<String>);
    let result = use_state(|| None::<ScalpAnalysis>);
    let input_ref = use_node_ref();

    let on_drag_over = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(true);
        })
    };
    let on_drag_leave = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
        })
    };
    let on_drop = {
        let drag_active = drag_active.clone();
        let preview = preview.clone();
        let selected = selected.clone();
        let error = error.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                read_file(file, preview.clone(), selected.clone(), error.clone());
            }
        })
    };

    let on_file_input = {
        let preview = preview.clone();
        let selected = selected.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                read_file(file, preview.clone(), selected.clone(), error.clone());
            }
        })
    };

    let on_browse_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_clear = {
        let preview = preview.clone();
        let selected = selected.clone();
        let result = result.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            preview.set(None);
            selected.set(None);
            result.set(None);
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_analyze = {
        let preview = preview.clone();
        let is_analyzing = is_analyzing.clone();
        let error = error.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(data_url) = (*preview).clone() else {
                return;
            };
            let is_analyzing = is_analyzing.clone();
            let error = error.clone();
            let result = result.clone();
            is_analyzing.set(true);
            spawn_local(async move {
                let request = match Api::post("/api/analyze").json(&json!({"image_base64": data_url})) {
                    Ok(request) => request,
                    Err(e) => {
                        error.set(Some(format!("Failed to build request: {}", e)));
                        is_analyzing.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) => {
                        if response.ok() {
                            match response.json::<ScalpAnalysis>().await {
                                Ok(analysis) => {
                                    result.set(Some(analysis));
                                    error.set(None);
                                }
                                Err(_) => {
                                    error.set(Some("Failed to read analysis result".to_string()));
                                }
                            }
                        } else {
                            let message = response
                                .json::<ErrorResponse>()
                                .await
                                .map(|body| body.error)
                                .unwrap_or_else(|_| "Analysis failed. Please try again.".to_string());
                            error.set(Some(message));
                        }
                    }
                    Err(e) => {
                        error.set(Some(format!("Request failed: {}", e)));
                    }
                }
                is_analyzing.set(false);
            });
        })
    };

    let on_toast_clear = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    let upload_css = r#"
        .upload-section {
            padding: 4rem 2rem;
            max-width: 720px;
            margin: 0 auto;
            text-align: center;
        }
        .upload-section h2 { font-size: 2.2rem; margin-bottom: 0.5rem; }
        .upload-section .section-sub { color: #999; margin-bottom: 2rem; }
        .upload-card {
            background: rgba(30, 33, 40, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 20px;
            padding: 1.8rem;
            text-align: left;
        }
        .dropzone {
            border: 2px dashed rgba(255, 255, 255, 0.2);
            border-radius: 14px;
            padding: 3rem 1.5rem;
            text-align: center;
            cursor: pointer;
            transition: border-color 0.2s ease, background 0.2s ease;
            background: rgba(255, 255, 255, 0.02);
        }
        .dropzone.active {
            border-color: #2EC482;
            background: rgba(46, 196, 130, 0.08);
        }
        .dropzone p.main { font-size: 1.1rem; font-weight: 600; margin-bottom: 0.3rem; }
        .dropzone p.sub { color: #999; font-size: 0.9rem; margin-bottom: 1rem; }
        .browse-btn {
            background: #2EC482;
            color: #0f1115;
            border: none;
            padding: 0.6rem 1.4rem;
            border-radius: 10px;
            font-weight: 600;
            cursor: pointer;
        }
        .preview-wrap { position: relative; }
        .preview-wrap img {
            width: 100%;
            max-height: 340px;
            object-fit: cover;
            border-radius: 14px;
        }
        .clear-btn {
            position: absolute;
            top: 10px;
            right: 10px;
            background: rgba(15, 17, 21, 0.85);
            color: #fff;
            border: none;
            width: 32px;
            height: 32px;
            border-radius: 50%;
            cursor: pointer;
        }
        .file-meta {
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: rgba(255, 255, 255, 0.04);
            border-radius: 10px;
            padding: 0.8rem 1rem;
            margin-top: 1rem;
            font-size: 0.9rem;
            color: #ccc;
        }
        .analyze-btn {
            width: 100%;
            margin-top: 1.2rem;
            background: #2EC482;
            color: #0f1115;
            border: none;
            padding: 0.9rem;
            font-size: 1.05rem;
            font-weight: 700;
            border-radius: 12px;
            cursor: pointer;
        }
        .analyze-btn:disabled { opacity: 0.6; cursor: wait; }
        .upload-tips {
            margin-top: 1.3rem;
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.06);
            border-radius: 10px;
            padding: 1rem;
            font-size: 0.85rem;
            color: #999;
        }
        .upload-tips ul { margin-top: 0.4rem; padding-left: 1.1rem; }
    "#;

    let analyzing = *is_analyzing;

    html! {
        <section id="analyze" class="upload-section">
            <style>{upload_css}</style>
            <h2>{"Analyze Your Scalp"}</h2>
            <p class="section-sub">{"Upload a clear image of your scalp for instant AI-powered analysis"}</p>
            <div class="upload-card">
                <input
                    ref={input_ref}
                    type="file"
                    accept="image/*"
                    onchange={on_file_input}
                    style="display: none;"
                />
                {
                    if let Some(data_url) = (*preview).clone() {
                        let (name, size_mb) = (*selected).clone().unwrap_or_default();
                        html! {
                            <>
                                <div class="preview-wrap">
                                    <img src={data_url} alt="Scalp preview" />
                                    <button class="clear-btn" onclick={on_clear.clone()}>{"✕"}</button>
                                </div>
                                <div class="file-meta">
                                    <span>{name}</span>
                                    <span>{format!("{:.2} MB", size_mb)}</span>
                                </div>
                                <button class="analyze-btn" onclick={on_analyze} disabled={analyzing}>
                                    { if analyzing { "Analyzing your scalp..." } else { "Start AI Analysis" } }
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <div
                                class={classes!("dropzone", if *drag_active { "active" } else { "" })}
                                ondragover={on_drag_over.clone()}
                                ondragenter={on_drag_over}
                                ondragleave={on_drag_leave}
                                ondrop={on_drop}
                                onclick={on_browse_click}
                            >
                                <p class="main">
                                    { if *drag_active { "Drop your image here" } else { "Drop your scalp image here" } }
                                </p>
                                <p class="sub">{"or click to browse"}</p>
                                <button class="browse-btn">{"Choose File"}</button>
                            </div>
                        }
                    }
                }
                <div class="upload-tips">
                    <strong>{"Tips for best results:"}</strong>
                    <ul>
                        <li>{"Ensure good lighting on your scalp"}</li>
                        <li>{"Take the photo from 6-8 inches away"}</li>
                        <li>{"Part your hair to expose the scalp clearly"}</li>
                    </ul>
                </div>
            </div>
            {
                if let Some(analysis) = (*result).clone() {
                    html! {
                        <div style="margin-top: 2.5rem; text-align: left;">
                            <AnalysisResults {analysis} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <Toast message={(*error).clone()} is_error={true} on_clear={on_toast_clear} />
        </section>
    }
}
