//! Bank Page
//!
//! Single estimates plus the spreadsheet batch workflow: template download,
//! file upload, summary and per-application review.

use js_sys::Uint8Array;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use loanlens::download::download_template;
use loanlens::workflow::RequestGeneration;
use loanlens::{BatchPredictor, UploadFile};

use crate::api::js_error;
use crate::components::{BatchViewer, InlineLoading, ProfileForm};
use crate::download::BrowserDownloads;
use crate::state::AppContext;

#[component]
pub fn Bank() -> impl IntoView {
    view! {
        <section class="space-y-8">
            <h1 class="text-3xl font-extrabold tracking-tight text-slate-900">"Bank workspace"</h1>

            <div class="grid lg:grid-cols-2 gap-6">
                <ProfileForm
                    title="Client details"
                    submit_label="Predict"
                    grid_class="grid md:grid-cols-2 gap-4"
                />
                <BatchCard />
            </div>
        </section>
    }
}

#[component]
fn BatchCard() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let batch = create_rw_signal(BatchPredictor::new());
    // File reads are async; only the latest pick may land in the form
    let picks = store_value(RequestGeneration::new());

    let busy = create_memo(move |_| batch.with(BatchPredictor::is_busy));
    let can_submit = create_memo(move |_| batch.with(BatchPredictor::can_submit));

    let reader_context = context.clone();
    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        batch.update(BatchPredictor::clear_file);
        let Some(generation) = picks.try_update_value(RequestGeneration::advance) else {
            return;
        };
        let Some(file) = file else {
            return;
        };

        let context = reader_context.clone();
        spawn_local(async move {
            match read_file(file).await {
                Ok(upload) => {
                    let latest = picks
                        .try_with_value(|p| p.is_current(generation))
                        .unwrap_or(false);
                    if latest {
                        let _ = batch.try_update(|b| b.select_file(upload));
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read the selected file: {}", e);
                    context.show_error("Could not read the selected file");
                }
            }
        });
    };

    let client = context.client.clone();
    let on_predict_file = move |_| {
        let Some(ticket) = batch.try_update(BatchPredictor::begin_submit).flatten() else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let (generation, file) = ticket.into_parts();
            let outcome = client.predict_batch(&file).await;
            let _ = batch.try_update(|b| b.complete(generation, outcome));
        });
    };

    let on_template = move |_| {
        let context = context.clone();
        spawn_local(async move {
            if let Err(e) = download_template(&context.client, &BrowserDownloads).await {
                context.show_error(&e.message());
            }
        });
    };

    view! {
        <div class="bg-white p-6 rounded-2xl shadow space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Spreadsheet (CSV/XLSX)"</h2>
                <button on:click=on_template class="text-blue-600 hover:underline">
                    "Download the template"
                </button>
            </div>

            <input
                type="file"
                accept=".csv,.xlsx,.xls"
                on:change=on_file_change
                class="block w-full border rounded-xl p-2"
            />

            <button
                on:click=on_predict_file
                disabled=move || !can_submit.get()
                class="bg-blue-600 hover:bg-blue-700 text-white font-semibold px-5 py-2 rounded-xl
                       transition disabled:opacity-50 flex items-center space-x-2"
            >
                {move || if busy.get() {
                    view! {
                        <InlineLoading />
                        <span>"Analysing…"</span>
                    }.into_view()
                } else {
                    view! { <span>"Predict the file"</span> }.into_view()
                }}
            </button>

            {move || batch.with(|b| b.error().map(str::to_string)).map(|message| view! {
                <p class="text-rose-600 text-sm">{message}</p>
            })}

            <BatchViewer batch=batch />
        </div>
    }
}

async fn read_file(file: web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let upload = UploadFile::new(file.name(), Uint8Array::new(&buffer).to_vec());

    let content_type = file.type_();
    Ok(if content_type.is_empty() {
        upload
    } else {
        upload.with_content_type(content_type)
    })
}
