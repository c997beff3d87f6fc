use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::content::PortfolioDocument;
#[cfg(feature = "hydrate")]
use crate::store::browser_store;

#[cfg(feature = "hydrate")]
const EXPORT_FILE_NAME: &str = "portfolio-data.json";
const NOTICE_MS: u64 = 3000;

const ADMIN_TABS: [(&str, &str, &str); 6] = [
    (
        "about",
        "About",
        "Edit your personal information, introduction, and KPIs.",
    ),
    (
        "experience",
        "Experience",
        "Add, edit, or remove your work experience entries.",
    ),
    (
        "skills",
        "Skills",
        "Manage your skills and proficiency levels.",
    ),
    (
        "projects",
        "Projects",
        "Add, edit, or remove your portfolio projects.",
    ),
    (
        "awards",
        "Awards",
        "Manage your awards, certifications, and trainings.",
    ),
    (
        "contact",
        "Contact",
        "Update your contact information and social links.",
    ),
];

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    is_err: bool,
}

/// Hidden admin page, reachable via the logo gesture. Exports the persisted
/// document as a pretty-printed JSON download and imports any JSON file
/// wholesale; a failed import changes nothing.
#[component]
pub fn AdminPage() -> impl IntoView {
    let (portfolio, set_portfolio) = signal(None::<PortfolioDocument>);
    let (notice, set_notice) = signal(None::<Notice>);
    let (active_tab, set_active_tab) = signal("about");
    let file_ref = NodeRef::<html::Input>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(store) = browser_store() {
            set_portfolio(Some(store.load()));
        }
    });

    let show_notice = move |text: String, is_err: bool| {
        set_notice(Some(Notice { text, is_err }));
        set_timeout(
            move || set_notice(None),
            std::time::Duration::from_millis(NOTICE_MS),
        );
    };

    #[cfg(feature = "hydrate")]
    let handle_download = move |_: leptos::ev::MouseEvent| {
        let Some(store) = browser_store() else {
            show_notice("Local storage is not available".to_string(), true);
            return;
        };
        // re-load so the export always reflects the persisted record
        let doc = store.load();
        set_portfolio(Some(doc.clone()));
        match download_json(&store.export_pretty(&doc)) {
            Ok(()) => show_notice("Portfolio data downloaded".to_string(), false),
            Err(e) => show_notice(e, true),
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let handle_download = move |_: leptos::ev::MouseEvent| {
        show_notice("Export is only available in the browser".to_string(), true);
    };

    #[cfg(feature = "hydrate")]
    let handle_upload = move |_: leptos::ev::Event| {
        let Some(input) = file_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            show_notice("Could not read the selected file".to_string(), true);
            return;
        };

        // read-to-completion with a single onload callback
        let result_reader = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
            move |_: web_sys::ProgressEvent| {
                let text = result_reader
                    .result()
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                let Some(store) = browser_store() else {
                    show_notice("Local storage is not available".to_string(), true);
                    return;
                };
                match store.import_from_slice(text.as_bytes()) {
                    Ok(doc) => {
                        set_portfolio(Some(doc));
                        show_notice("Portfolio data uploaded".to_string(), false);
                    }
                    Err(e) => show_notice(e.to_string(), true),
                }
            },
        );
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if reader.read_as_text(&file).is_err() {
            show_notice("Could not read the selected file".to_string(), true);
        }
        // allow re-selecting the same file
        input.set_value("");
    };
    #[cfg(not(feature = "hydrate"))]
    let handle_upload = move |_: leptos::ev::Event| {
        show_notice("Import is only available in the browser".to_string(), true);
    };

    view! {
        <Title text="Admin" />
        <div class="min-h-screen p-6">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-wrap items-center justify-between mb-8 gap-4">
                    <div class="flex items-center gap-4">
                        <A href="/" attr:class="text-muted hover:text-primary">
                            "← Back to Portfolio"
                        </A>
                        <h1 class="text-3xl font-bold gradient-text">"Admin Panel"</h1>
                    </div>

                    <div class="flex gap-3">
                        <button
                            class="px-4 py-2 rounded-md border border-muted/30 hover:bg-muted/20"
                            on:click=handle_download
                        >
                            "⬇ Download Data"
                        </button>
                        <label class="px-4 py-2 rounded-md bg-primary text-background cursor-pointer hover:opacity-90">
                            "⬆ Upload Data"
                            <input
                                node_ref=file_ref
                                type="file"
                                accept=".json"
                                class="hidden"
                                on:change=handle_upload
                            />
                        </label>
                    </div>
                </div>

                {move || {
                    notice()
                        .map(|n| {
                            view! {
                                <div class=if n.is_err {
                                    "mb-6 p-4 rounded-md bg-red-500/10 text-red-500"
                                } else {
                                    "mb-6 p-4 rounded-md bg-green-500/10 text-green-500"
                                }>{n.text}</div>
                            }
                        })
                }}

                <div class="glass-card p-8 rounded-lg">
                    <div class="grid grid-cols-3 md:grid-cols-6 gap-2 mb-6">
                        {ADMIN_TABS
                            .into_iter()
                            .map(|(id, label, _)| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab() == id {
                                                "px-3 py-2 rounded-md bg-primary/10 text-primary font-medium"
                                            } else {
                                                "px-3 py-2 rounded-md text-muted hover:text-primary"
                                            }
                                        }
                                        on:click=move |_| set_active_tab(id)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        let tab = active_tab();
                        ADMIN_TABS
                            .into_iter()
                            .find(|(id, _, _)| *id == tab)
                            .map(|(_, label, blurb)| {
                                view! {
                                    <div class="space-y-4">
                                        <h2 class="text-2xl font-bold">{label} " Section"</h2>
                                        <p class="text-muted">{blurb}</p>
                                        <div class="p-8 bg-muted/20 rounded-lg text-center">
                                            <p class="text-muted">
                                                "Content management UI will be implemented here"
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>

                {move || {
                    portfolio()
                        .map(|doc| {
                            view! {
                                <details class="mt-8 text-sm text-muted">
                                    <summary class="cursor-pointer">"Raw document"</summary>
                                    <pre class="mt-2 p-4 rounded-md bg-muted/10 overflow-x-auto whitespace-pre-wrap">
                                        {doc.to_pretty()}
                                    </pre>
                                </details>
                            }
                        })
                }}
            </div>
        </div>
    }
}

/// Offers `json` as a `portfolio-data.json` download via a temporary object
/// URL and a synthetic anchor click.
#[cfg(feature = "hydrate")]
fn download_json(json: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|e| format!("could not build download blob: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("could not create object URL: {e:?}"))?;

    let anchor = document()
        .create_element("a")
        .map_err(|e| format!("could not create download link: {e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
