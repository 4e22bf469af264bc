/// "My Tools" page: the member's published tools

use crate::api::{BackendClient, PublishedTool};
use crate::auth::{require_token, AuthHandle};
use crate::embed::{format_tool_title, iframe_embed};
use crate::ui::components::CopyButton;
use crate::ui::tool_preview::FRAME_SANDBOX;
use patternfly_yew::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub client: BackendClient,
    pub auth: AuthHandle,
    pub on_copy: Callback<Result<(), String>>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = use_state(|| ViewState::Loading);
    let tools = use_state(Vec::<PublishedTool>::new);
    let reload = use_state(|| 0u32);

    // Load on mount and whenever refresh is clicked
    {
        let state = state.clone();
        let tools = tools.clone();
        let client = props.client.clone();
        let auth = props.auth.clone();

        use_effect_with(*reload, move |_| {
            state.set(ViewState::Loading);
            spawn_local(async move {
                match load_tools(&client, &auth).await {
                    Ok(loaded) => {
                        log::info!("Loaded {} published tools", loaded.len());
                        tools.set(loaded);
                        state.set(ViewState::Idle);
                    }
                    Err(e) => {
                        log::warn!("Failed to fetch tools: {}", e);
                        state.set(ViewState::Error("Failed to fetch your tools".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    html! {
        <div class="dashboard">
            <div class="header">
                <h2 class="main-title">{"Your Tools"}</h2>
                <Button onclick={on_refresh} variant={ButtonVariant::Secondary} disabled={*state == ViewState::Loading}>
                    {"Refresh"}
                </Button>
            </div>

            {match &*state {
                ViewState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading your tools..."}</p>
                    </div>
                },
                ViewState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                ViewState::Idle => html! {}
            }}

            if *state == ViewState::Idle && tools.is_empty() {
                <div class="empty-state">
                    <p>{"No tools yet"}</p>
                    <p class="empty-state-hint">{"Create your first interactive tool to see it here"}</p>
                </div>
            } else {
                <div class="tools-grid">
                    {for tools.iter().map(|tool| html! {
                        <ToolCard key={tool.url.clone()} tool={tool.clone()} on_copy={props.on_copy.clone()} />
                    })}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToolCardProps {
    tool: PublishedTool,
    on_copy: Callback<Result<(), String>>,
}

#[function_component(ToolCard)]
fn tool_card(props: &ToolCardProps) -> Html {
    let tool = &props.tool;

    html! {
        <div class="tool-card">
            <h3 class="tool-card-title">{format_tool_title(&tool.name)}</h3>
            if let Some(created) = &tool.created_at {
                <p class="tool-card-date">{format_created(created)}</p>
            }
            <iframe
                src={tool.url.clone()}
                title={tool.name.clone()}
                class="tool-card-frame"
                sandbox={FRAME_SANDBOX}
            />
            <div class="tool-card-actions">
                <CopyButton text={iframe_embed(&tool.url)} label="Copy Embed" on_result={props.on_copy.clone()} />
                <a href={tool.url.clone()} target="_blank" rel="noopener noreferrer" class="pf-v5-c-button pf-m-link">
                    {"Open Tool"}
                </a>
            </div>
        </div>
    }
}

// Helper functions

/// ISO timestamp from the backend, shown as the browser's locale date
fn format_created(created: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(created));
    if date.get_time().is_nan() {
        return created.to_string();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

async fn load_tools(client: &BackendClient, auth: &AuthHandle) -> Result<Vec<PublishedTool>, String> {
    let token = require_token(auth.service())
        .await
        .map_err(|e| format!("Failed to get member token: {}", e))?;

    client
        .recent_tools(&token)
        .await
        .map_err(|e| format!("Failed to load tools: {}", e))
}
