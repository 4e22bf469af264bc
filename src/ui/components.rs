/// Reusable UI components

use crate::loading::{LoadingMessages, ROTATE_INTERVAL_MS};
use crate::notifications::{Notification, NotificationKind, AUTO_DISMISS_MS};
use crate::workflow::Phase;
use gloo_timers::callback::{Interval, Timeout};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = copyToClipboard)]
    async fn js_copy_to_clipboard(text: &str) -> Result<(), JsValue>;
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    js_copy_to_clipboard(text)
        .await
        .map_err(|e| format!("Copy failed: {:?}", e))
}

// Notification banners

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Notification,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let note = &props.notification;

    {
        let on_dismiss = props.on_dismiss.clone();
        let auto_dismiss = note.kind.auto_dismiss();
        use_effect_with(note.id, move |id| {
            let id = *id;
            let timeout = auto_dismiss.then(|| Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(id)));
            move || drop(timeout)
        });
    }

    let alert_type = match note.kind {
        NotificationKind::Info => AlertType::Info,
        NotificationKind::Success => AlertType::Success,
        NotificationKind::Warning => AlertType::Warning,
        NotificationKind::Error => AlertType::Danger,
    };
    let on_close = {
        let id = note.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <div class="notification-banner">
            <Alert r#type={alert_type} title={note.message.clone()} inline={true}>
            </Alert>
            <button class="notification-close" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationListProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(NotificationList)]
pub fn notification_list(props: &NotificationListProps) -> Html {
    html! {
        <div class="notification-list">
            {for props.notifications.iter().map(|note| html! {
                <NotificationBanner
                    key={note.id.to_string()}
                    notification={note.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

// Loading indicator with rotating messages

pub enum LoadingAction {
    Advance,
    Reset(Phase),
}

impl Reducible for LoadingMessages {
    type Action = LoadingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoadingAction::Advance => {
                let mut next = (*self).clone();
                next.advance();
                Rc::new(next)
            }
            LoadingAction::Reset(phase) => Rc::new(LoadingMessages::for_phase(phase)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    pub phase: Phase,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    let phase = props.phase;
    let messages = use_reducer(move || LoadingMessages::for_phase(phase));

    {
        let messages = messages.dispatcher();
        use_effect_with(props.phase, move |phase| {
            messages.dispatch(LoadingAction::Reset(*phase));
            let interval = phase.is_busy().then(|| {
                Interval::new(ROTATE_INTERVAL_MS, move || messages.dispatch(LoadingAction::Advance))
            });
            move || drop(interval)
        });
    }

    match messages.current() {
        Some(msg) => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{msg}</p>
            </div>
        },
        None => html! {},
    }
}

// Copy-to-clipboard button

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: String,
    #[prop_or(AttrValue::Static("Copy to Clipboard"))]
    pub label: AttrValue,
    pub on_result: Callback<Result<(), String>>,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let onclick = {
        let text = props.text.clone();
        let on_result = props.on_result.clone();
        Callback::from(move |_: MouseEvent| {
            let text = text.clone();
            let on_result = on_result.clone();
            spawn_local(async move {
                on_result.emit(copy_to_clipboard(&text).await);
            });
        })
    };

    html! {
        <Button onclick={onclick} variant={ButtonVariant::Secondary}>
            {props.label.to_string()}
        </Button>
    }
}

// Read-only code box with a copy button underneath

#[derive(Properties, PartialEq)]
pub struct EmbedCodeProps {
    pub label: AttrValue,
    pub code: String,
    pub on_copy: Callback<Result<(), String>>,
}

#[function_component(EmbedCode)]
pub fn embed_code(props: &EmbedCodeProps) -> Html {
    html! {
        <div class="embed-code">
            <label class="embed-code-label">{props.label.to_string()}</label>
            <textarea class="embed-code-text" rows="4" readonly={true} value={props.code.clone()} />
            <CopyButton text={props.code.clone()} on_result={props.on_copy.clone()} />
        </div>
    }
}
