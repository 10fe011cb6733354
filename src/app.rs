use leptos::*;

use crate::{
    application::{
        FormSignals, MessageBlock, ReplayPresenter, ReplayRequestController, ResultsContent,
        ResultsView, EMPTY_HINT, EMPTY_TITLE,
    },
    config::ReplayConfig,
    domain::{
        logging::{LogComponent, get_logger},
        replay::KnownExchange,
    },
    event_utils::on_page_load,
    infrastructure::HttpReplayRepository,
    view_state::ViewState,
};

/// Replay viewer page
#[component]
pub fn App(config: ReplayConfig) -> impl IntoView {
    let form = FormSignals::new(&config.defaults);
    let results = ResultsView::new();
    let controller =
        ReplayRequestController::new(HttpReplayRepository::new(&config), form, results);

    let on_fetch = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.trigger())
    };

    on_page_load(move || {
        get_logger().info(
            LogComponent::Presentation("App"),
            "Page loaded, fetching initial replay",
        );
        controller.trigger();
    });

    view! {
        <style>
            {r#"
            .replay-viewer {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                max-width: 1200px;
                margin: 0 auto;
                padding: 20px;
            }

            .controls {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 15px;
                margin-bottom: 20px;
            }

            .field label {
                display: block;
                font-size: 13px;
                margin-bottom: 5px;
            }

            .field input {
                width: 100%;
                padding: 8px;
                box-sizing: border-box;
            }

            #fetchBtn {
                padding: 10px 20px;
                cursor: pointer;
            }

            #fetchBtn:disabled {
                cursor: not-allowed;
                opacity: 0.6;
            }

            .status {
                padding: 10px;
                border-radius: 5px;
                margin-bottom: 15px;
            }

            .status.loading { background: #fff3cd; color: #856404; }
            .status.success { background: #d4edda; color: #155724; }
            .status.error { background: #f8d7da; color: #721c24; }

            .message {
                border: 1px solid #ddd;
                border-radius: 5px;
                margin-bottom: 10px;
            }

            .message-header {
                background: #f5f5f5;
                padding: 8px 12px;
                font-weight: 600;
            }

            .message-data {
                padding: 12px;
                font-family: 'Courier New', monospace;
                font-size: 12px;
                white-space: pre;
                overflow-x: auto;
            }

            .empty-state {
                text-align: center;
                padding: 40px;
                color: #666;
            }
            "#}
        </style>
        <div class="replay-viewer">
            <h1>"Exchange Data Replay"</h1>
            <ReplayForm form=form fetch_enabled=results.fetch_enabled on_fetch=on_fetch />
            <StatusRegion state=results.state />
            <ResultsRegion state=results.state />
        </div>
    }
}

#[component]
fn ReplayForm(
    form: FormSignals,
    fetch_enabled: RwSignal<bool>,
    on_fetch: Callback<()>,
) -> impl IntoView {
    let exchanges = KnownExchange::ids();

    view! {
        <div class="controls">
            <FormField id="exchange" label="Exchange" kind="text" value=form.exchange list="exchange-options" />
            <datalist id="exchange-options">
                {exchanges
                    .into_iter()
                    .map(|id| view! { <option value=id /> })
                    .collect_view()}
            </datalist>
            <FormField id="fromDate" label="From" kind="datetime-local" value=form.from_date />
            <FormField id="toDate" label="To" kind="datetime-local" value=form.to_date />
            <FormField id="symbols" label="Symbols (comma separated)" kind="text" value=form.symbols />
            <FormField id="limit" label="Limit" kind="number" value=form.limit />
            <div class="field">
                <button
                    id="fetchBtn"
                    prop:disabled=move || !fetch_enabled.get()
                    on:click=move |_| on_fetch.call(())
                >
                    "Fetch Data"
                </button>
            </div>
        </div>
    }
}

/// Labelled input two-way bound to a form signal
#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] list: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                list=list
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn StatusRegion(state: RwSignal<ViewState>) -> impl IntoView {
    let status = create_memo(move |_| state.with(ReplayPresenter::status));

    view! {
        <div
            id="status"
            class=move || status.with(|s| s.kind.css_class())
            aria-busy=move || state.with(|s| s.is_loading().to_string())
        >
            {move || status.with(|s| s.text.clone())}
        </div>
    }
}

#[component]
fn ResultsRegion(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div id="results">
            {move || match state.with(ReplayPresenter::results) {
                ResultsContent::Nothing => ().into_view(),
                ResultsContent::Empty => view! {
                    <div class="empty-state">
                        <p>{EMPTY_TITLE}</p>
                        <p style="margin-top: 10px; font-size: 14px;">{EMPTY_HINT}</p>
                    </div>
                }
                .into_view(),
                ResultsContent::Blocks(blocks) => blocks
                    .into_iter()
                    .map(|block| view! { <MessageCard block=block /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn MessageCard(block: MessageBlock) -> impl IntoView {
    view! {
        <div class="message">
            <div class="message-header">{block.header}</div>
            <div class="message-data">{block.body}</div>
        </div>
    }
}
