// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod chain_status;
pub mod compat;
pub mod components;
pub mod freshness;
pub mod hooks;
pub mod i18n;
pub mod readout;
#[cfg(test)]
mod test_util;

use app_state::AppState;
use chain_status::use_chain_status_provider;
use components::pico::Container;
use components::polling::PollingIndicator;
use hooks::use_demo_feed::use_demo_feed;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-background-color);
    }

    .app-main-container header {
        padding: 1rem 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move {
        let prefs = api::status_prefs().await?;
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        Ok::<_, api::ApiError>(prefs)
    })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => rsx! {
            LoadedApp {
                app_state: AppState::new(prefs.clone()),
            }
        },
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // the chain id comes from deployment config, blocks and gas from the feed.
    let chain_id = app_state.prefs.chain_id();
    let status = use_chain_status_provider(Some(chain_id));
    use_demo_feed(status, app_state.prefs.demo_feed().cloned());

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    h3 {
                        style: "margin-bottom: 0;",
                        "Network Status"
                    }
                    small {
                        "Chain {chain_id}"
                    }
                }
            }
            PollingIndicator {}
        }
    }
}
