use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::diagnostics::Probe;
use crate::store::rest::RestStore;

/// Floating store diagnostics. Only compiled with the `debug-panel` feature.
#[function_component(DebugPanel)]
pub fn debug_panel() -> Html {
    let is_loading = use_state(|| false);
    let result = use_state(String::new);

    let run = |probe: Probe| {
        let is_loading = is_loading.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let is_loading = is_loading.clone();
            let result = result.clone();
            is_loading.set(true);
            result.set(probe.progress().to_string());
            spawn_local(async move {
                let report = probe.run(&RestStore::from_env()).await;
                result.set(report.text);
                is_loading.set(false);
            });
        })
    };

    let button = |probe: Probe, class: &'static str| {
        html! {
            <button class={classes!("debug-panel__button", class)} onclick={run(probe)} disabled={*is_loading}>
                {probe.label()}
            </button>
        }
    };

    html! {
        <div class="debug-panel">
            <style>
                {r#"
                .debug-panel {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                    max-width: 28rem;
                    padding: 1rem;
                    background: #ffffff;
                    color: #1f2937;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    z-index: 50;
                }
                .debug-panel__button {
                    display: block;
                    width: 100%;
                    margin-bottom: 0.5rem;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.25rem;
                    color: #ffffff;
                    cursor: pointer;
                }
                .debug-panel__button:disabled { opacity: 0.5; cursor: default; }
                .debug-panel__button.connection { background: #3b82f6; }
                .debug-panel__button.insert { background: #22c55e; }
                .debug-panel__button.recent { background: #a855f7; }
                .debug-panel pre {
                    white-space: pre-wrap;
                    max-height: 10rem;
                    overflow: auto;
                    background: #f3f4f6;
                    padding: 0.75rem;
                    border-radius: 0.25rem;
                    font-size: 0.8rem;
                }
                "#}
            </style>
            <h3>{"🔧 Store Test Panel"}</h3>
            {button(Probe::Connection, "connection")}
            {button(Probe::Insert, "insert")}
            {button(Probe::Recent, "recent")}
            if !result.is_empty() {
                <pre>{(*result).clone()}</pre>
            }
        </div>
    }
}
