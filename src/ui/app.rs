/// Main app: content in, tool ideas, preview, feedback, publish

use crate::api::{BackendClient, PublishedTool};
use crate::auth::{require_token, AuthHandle, AuthState, MemberstackAuth};
use crate::config::AppConfig;
use crate::content::{ContentKind, Submission};
use crate::embed::{iframe_embed, suggest_tool_name};
use crate::notifications::{Notification, NotificationKind, Notifications};
use crate::renderer::assemble_document;
use crate::sanitizer::parse;
use crate::ui::auth_panel::{AccountBar, AuthPrompt};
use crate::ui::components::{EmbedCode, LoadingIndicator, NotificationList};
use crate::ui::content_input::ContentInput;
use crate::ui::dashboard::Dashboard;
use crate::ui::tool_preview::ToolPreview;
use crate::workflow::{Phase, Workflow};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RootProps {
    pub config: Rc<AppConfig>,
    pub auth: AuthHandle,
}

/// Provides config and the auth service to everything below
#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <ContextProvider<AuthHandle> context={props.auth.clone()}>
                <App />
            </ContextProvider<AuthHandle>>
        </ContextProvider<Rc<AppConfig>>>
    }
}

pub enum WorkflowAction {
    Begin(ContentKind),
    ContentExtracted,
    IdeasReady(String, Vec<String>),
    SelectIdea(String),
    ToolReady(String),
    SetFeedback(String),
    BeginUpdate,
    FeedbackApplied(String),
    BeginPublish,
    Published(PublishedTool),
    ShowOtherIdeas,
    Fail,
}

impl Reducible for Workflow {
    type Action = WorkflowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WorkflowAction::Begin(kind) => next.begin_submission(kind),
            WorkflowAction::ContentExtracted => next.content_extracted(),
            WorkflowAction::IdeasReady(content, ideas) => next.ideas_ready(content, ideas),
            WorkflowAction::SelectIdea(idea) => next.select_idea(&idea),
            WorkflowAction::ToolReady(tool) => next.tool_ready(tool),
            WorkflowAction::SetFeedback(text) => next.set_feedback(text),
            WorkflowAction::BeginUpdate => {
                next.begin_update();
            }
            WorkflowAction::FeedbackApplied(tool) => next.feedback_applied(tool),
            WorkflowAction::BeginPublish => {
                next.begin_publish();
            }
            WorkflowAction::Published(tool) => next.published(tool),
            WorkflowAction::ShowOtherIdeas => next.show_other_ideas(),
            WorkflowAction::Fail => next.fail(),
        }
        Rc::new(next)
    }
}

pub enum NotificationAction {
    Push(Notification),
    Dismiss(Uuid),
}

impl Reducible for Notifications {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push(note) => next.push(note),
            NotificationAction::Dismiss(id) => {
                next.dismiss(id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy)]
enum AuthModal {
    SignIn,
    SignUp,
}

#[derive(Clone, PartialEq)]
enum ActiveTab {
    Create,
    MyTools,
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let auth = use_context::<AuthHandle>().unwrap_or_else(|| AuthHandle::new(MemberstackAuth));
    let client = BackendClient::new(&config.backend_url);

    let workflow = use_reducer(Workflow::new);
    let notifications = use_reducer(Notifications::new);
    let auth_state = use_state(|| AuthState::Checking);
    let active_tab = use_state(|| ActiveTab::Create);

    let notify = {
        let notifications = notifications.dispatcher();
        Callback::from(move |(kind, message): (NotificationKind, String)| {
            notifications.dispatch(NotificationAction::Push(Notification::new(kind, message)));
        })
    };

    let on_dismiss = {
        let notifications = notifications.dispatcher();
        Callback::from(move |id: Uuid| notifications.dispatch(NotificationAction::Dismiss(id)))
    };

    let on_copy = {
        let notify = notify.clone();
        Callback::from(move |result: Result<(), String>| match result {
            Ok(()) => notify.emit((NotificationKind::Success, "Copied to clipboard".to_string())),
            Err(e) => {
                log::warn!("{}", e);
                notify.emit((NotificationKind::Error, "Could not copy to the clipboard".to_string()));
            }
        })
    };

    // Check for an existing member session on mount
    {
        let auth = auth.clone();
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match auth.service().get_current_member().await {
                    Ok(member) => auth_state.set(AuthState::from_member(member)),
                    Err(e) => {
                        log::warn!("Could not read member session: {}", e);
                        auth_state.set(AuthState::SignedOut);
                    }
                }
            });
            || ()
        });
    }

    let open_auth = {
        let auth = auth.clone();
        let auth_state = auth_state.clone();
        let notify = notify.clone();
        move |modal: AuthModal| {
            let auth = auth.clone();
            let auth_state = auth_state.clone();
            let notify = notify.clone();
            Callback::from(move |_: ()| {
                let auth = auth.clone();
                let auth_state = auth_state.clone();
                let notify = notify.clone();
                spawn_local(async move {
                    let result = match modal {
                        AuthModal::SignIn => auth.service().sign_in().await,
                        AuthModal::SignUp => auth.service().sign_up().await,
                    };
                    match result {
                        Ok(Some(member)) => {
                            log::info!("Signed in as {}", member.id);
                            notify.emit((NotificationKind::Success, format!("Welcome, {}", member.display_name())));
                            auth_state.set(AuthState::SignedIn(member));
                        }
                        Ok(None) => auth_state.set(AuthState::SignedOut),
                        Err(e) => {
                            log::warn!("Auth failed: {}", e);
                            notify.emit((NotificationKind::Error, "An error occurred. Please try again.".to_string()));
                        }
                    }
                });
            })
        }
    };
    let on_sign_in = open_auth(AuthModal::SignIn);
    let on_sign_up = open_auth(AuthModal::SignUp);

    let on_sign_out = {
        let auth = auth.clone();
        let auth_state = auth_state.clone();
        let active_tab = active_tab.clone();
        let notify = notify.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            let auth_state = auth_state.clone();
            let active_tab = active_tab.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match auth.service().sign_out().await {
                    Ok(()) => {
                        auth_state.set(AuthState::SignedOut);
                        active_tab.set(ActiveTab::Create);
                    }
                    Err(e) => {
                        log::warn!("Sign out failed: {}", e);
                        notify.emit((NotificationKind::Error, "Failed to sign out.".to_string()));
                    }
                }
            });
        })
    };

    // Content submitted: (extract →) ideas
    let on_submit = {
        let workflow = workflow.dispatcher();
        let client = client.clone();
        let notify = notify.clone();

        Callback::from(move |submission: Submission| {
            let kind = match &submission {
                Submission::Text(_) => ContentKind::Text,
                Submission::Url(_) => ContentKind::Url,
            };
            workflow.dispatch(WorkflowAction::Begin(kind));

            let workflow = workflow.clone();
            let client = client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match fetch_ideas(&client, submission, &workflow).await {
                    Ok((content, ideas)) => {
                        log::info!("Got {} tool ideas", ideas.len());
                        if ideas.is_empty() {
                            notify.emit((NotificationKind::Warning, "No tool ideas came back for that content.".to_string()));
                        }
                        workflow.dispatch(WorkflowAction::IdeasReady(content, ideas));
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        workflow.dispatch(WorkflowAction::Fail);
                        notify.emit((NotificationKind::Error, "Failed to generate tool ideas. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    // Idea picked: generate the tool
    let on_select_idea = {
        let workflow_state = workflow.clone();
        let workflow = workflow.dispatcher();
        let client = client.clone();
        let notify = notify.clone();

        Callback::from(move |idea: String| {
            let content = workflow_state.content.clone();
            workflow.dispatch(WorkflowAction::SelectIdea(idea.clone()));

            let workflow = workflow.clone();
            let client = client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match client.generate_tool(&content, &idea).await {
                    Ok(tool) => workflow.dispatch(WorkflowAction::ToolReady(tool)),
                    Err(e) => {
                        log::warn!("Tool generation failed: {}", e);
                        workflow.dispatch(WorkflowAction::Fail);
                        notify.emit((NotificationKind::Error, "Failed to generate tool. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_feedback_input = {
        let workflow = workflow.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                workflow.dispatch(WorkflowAction::SetFeedback(input.value()));
            }
        })
    };

    // Feedback submitted: revise the current tool
    let on_update = {
        let workflow_state = workflow.clone();
        let workflow = workflow.dispatcher();
        let client = client.clone();
        let notify = notify.clone();

        Callback::from(move |_: MouseEvent| {
            if !workflow_state.can_update() {
                return;
            }
            let content = workflow_state.content.clone();
            let current = workflow_state.tool.clone();
            let feedback = workflow_state.feedback.trim().to_string();
            workflow.dispatch(WorkflowAction::BeginUpdate);

            let workflow = workflow.clone();
            let client = client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match client.update_tool(&content, &current, &feedback).await {
                    Ok(tool) => {
                        workflow.dispatch(WorkflowAction::FeedbackApplied(tool));
                        notify.emit((NotificationKind::Success, "Tool updated".to_string()));
                    }
                    Err(e) => {
                        log::warn!("Tool update failed: {}", e);
                        workflow.dispatch(WorkflowAction::Fail);
                        notify.emit((NotificationKind::Error, "Failed to update tool. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_other_ideas = {
        let workflow = workflow.dispatcher();
        Callback::from(move |_: MouseEvent| workflow.dispatch(WorkflowAction::ShowOtherIdeas))
    };

    // Publish the assembled document to static hosting
    let on_publish = {
        let workflow_state = workflow.clone();
        let workflow = workflow.dispatcher();
        let client = client.clone();
        let auth = auth.clone();
        let notify = notify.clone();
        let render = config.render;

        Callback::from(move |_: MouseEvent| {
            if workflow_state.tool.is_empty() || workflow_state.phase.is_busy() {
                return;
            }
            let name = suggest_tool_name(workflow_state.selected_idea.as_deref());
            let document = assemble_document(&parse(&workflow_state.tool), &render);
            workflow.dispatch(WorkflowAction::BeginPublish);

            let workflow = workflow.clone();
            let client = client.clone();
            let auth = auth.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match publish(&client, &auth, &name, &document).await {
                    Ok(published) => {
                        log::info!("Published {} at {}", published.name, published.url);
                        workflow.dispatch(WorkflowAction::Published(published));
                        notify.emit((NotificationKind::Success, "Tool published".to_string()));
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        workflow.dispatch(WorkflowAction::Fail);
                        notify.emit((NotificationKind::Error, "Failed to publish tool. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_tab_click = {
        let active_tab = active_tab.clone();
        move |tab: ActiveTab| {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| {
                active_tab.set(tab.clone());
            })
        }
    };

    let tab_class = |tab: ActiveTab| {
        if *active_tab == tab {
            "pf-v5-c-tabs__item pf-m-current"
        } else {
            "pf-v5-c-tabs__item"
        }
    };

    let is_busy = workflow.phase.is_busy();
    let signed_in = auth_state.is_signed_in();

    let idea_list = |ideas: Vec<String>| {
        html! {
            <ul class="idea-list">
                {for ideas.into_iter().map(|idea| {
                    let onclick = on_select_idea.reform({
                        let idea = idea.clone();
                        move |_: MouseEvent| idea.clone()
                    });
                    html! {
                        <li key={idea.clone()}>
                            <button class="idea-button" onclick={onclick} disabled={is_busy}>{idea.clone()}</button>
                        </li>
                    }
                })}
            </ul>
        }
    };

    let other_ideas: Vec<String> = workflow.other_ideas().into_iter().map(str::to_string).collect();

    html! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">{"Interactive Content Generator"}</h1>
                <AccountBar
                    state={(*auth_state).clone()}
                    on_sign_in={on_sign_in.clone()}
                    on_sign_up={on_sign_up.clone()}
                    on_sign_out={on_sign_out}
                />
            </header>

            if !notifications.is_empty() {
                <NotificationList notifications={notifications.iter().cloned().collect::<Vec<_>>()} on_dismiss={on_dismiss} />
            }

            // Tab navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    <li class={tab_class(ActiveTab::Create)}>
                        <button class="pf-v5-c-tabs__link" onclick={on_tab_click(ActiveTab::Create)}>
                            <span class="pf-v5-c-tabs__item-text">{"Create"}</span>
                        </button>
                    </li>
                    <li class={tab_class(ActiveTab::MyTools)}>
                        <button class="pf-v5-c-tabs__link" onclick={on_tab_click(ActiveTab::MyTools)}>
                            <span class="pf-v5-c-tabs__item-text">{"My Tools"}</span>
                        </button>
                    </li>
                </ul>
            </div>

            <main class="tab-pane-content">
                {match &*active_tab {
                    ActiveTab::Create => html! {
                        <div class="flex-column-gap">
                            <ContentInput on_submit={on_submit} disabled={is_busy} />

                            <LoadingIndicator phase={workflow.phase} />

                            if workflow.show_idea_picker() {
                                <div class="card">
                                    <h4 class="card-subtitle">{"Choose an Interactive Tool Idea"}</h4>
                                    {idea_list(workflow.ideas.clone())}
                                </div>
                            }

                            if workflow.has_tool() {
                                <ToolPreview tool={workflow.tool.clone()} options={config.render} />

                                <div class="action-row">
                                    <Button
                                        onclick={on_other_ideas}
                                        variant={ButtonVariant::Secondary}
                                        disabled={is_busy || other_ideas.is_empty()}
                                    >
                                        {"Try a different idea"}
                                    </Button>
                                </div>

                                if workflow.show_other_ideas && !other_ideas.is_empty() {
                                    <div class="card">
                                        <h4 class="card-subtitle">{"Choose Another Idea"}</h4>
                                        {idea_list(other_ideas.clone())}
                                    </div>
                                }

                                <div class="card">
                                    <h4 class="card-subtitle">{"Request a Change or Edit"}</h4>
                                    <textarea
                                        class="feedback-textarea"
                                        rows="3"
                                        placeholder="Describe what you want to change or add (e.g., 'Add a pie chart', 'Change color to green')"
                                        value={workflow.feedback.clone()}
                                        oninput={on_feedback_input}
                                        disabled={is_busy}
                                    />
                                    <Button onclick={on_update} disabled={!workflow.can_update()}>
                                        {if workflow.phase == Phase::Updating { "Updating..." } else { "Update Tool" }}
                                    </Button>
                                </div>

                                <div class="card">
                                    <h4 class="card-subtitle">{"Publish & Embed"}</h4>
                                    if signed_in {
                                        <Button onclick={on_publish} disabled={is_busy}>
                                            {"Publish Tool"}
                                        </Button>
                                        if let Some(published) = &workflow.published {
                                            <EmbedCode
                                                label="Embed Code"
                                                code={iframe_embed(&published.url)}
                                                on_copy={on_copy.clone()}
                                            />
                                            <a href={published.url.clone()} target="_blank" rel="noopener noreferrer">
                                                {"Open published tool"}
                                            </a>
                                        }
                                    } else {
                                        <AuthPrompt
                                            message="Sign in to publish this tool and get an embed code."
                                            on_sign_in={on_sign_in.clone()}
                                            on_sign_up={on_sign_up.clone()}
                                        />
                                    }
                                    <EmbedCode
                                        label="Standalone HTML"
                                        code={assemble_document(&parse(&workflow.tool), &config.render)}
                                        on_copy={on_copy.clone()}
                                    />
                                </div>
                            }
                        </div>
                    },
                    ActiveTab::MyTools => html! {
                        <>
                        if signed_in {
                            <Dashboard client={client.clone()} auth={auth.clone()} on_copy={on_copy.clone()} />
                        } else {
                            <AuthPrompt
                                message="Sign in to see the tools you've published."
                                on_sign_in={on_sign_in.clone()}
                                on_sign_up={on_sign_up.clone()}
                                busy={*auth_state == AuthState::Checking}
                            />
                        }
                        </>
                    },
                }}
            </main>

            <p class="footer-app">
                {"Interactive Content Generator v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn fetch_ideas(
    client: &BackendClient,
    submission: Submission,
    workflow: &UseReducerDispatcher<Workflow>,
) -> Result<(String, Vec<String>), String> {
    let content = match submission {
        Submission::Text(text) => text,
        Submission::Url(url) => {
            let content = client
                .extract_content(url.as_str())
                .await
                .map_err(|e| format!("Failed to extract content: {}", e))?;
            workflow.dispatch(WorkflowAction::ContentExtracted);
            content
        }
    };

    let ideas = client
        .generate_ideas(&content)
        .await
        .map_err(|e| format!("Failed to generate ideas: {}", e))?;

    Ok((content, ideas))
}

async fn publish(
    client: &BackendClient,
    auth: &AuthHandle,
    name: &str,
    document: &str,
) -> Result<PublishedTool, String> {
    let token = require_token(auth.service())
        .await
        .map_err(|e| format!("Failed to get member token: {}", e))?;

    client
        .publish_tool(&token, name, document)
        .await
        .map_err(|e| format!("Publish failed: {}", e))
}
