/// Sign-in prompt and account bar

use crate::auth::AuthState;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthPromptProps {
    pub message: AttrValue,
    pub on_sign_in: Callback<()>,
    pub on_sign_up: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
}

#[function_component(AuthPrompt)]
pub fn auth_prompt(props: &AuthPromptProps) -> Html {
    html! {
        <div class="auth-prompt">
            <p class="auth-prompt-text">{props.message.to_string()}</p>
            <div class="auth-prompt-actions">
                <Button onclick={props.on_sign_in.reform(|_| ())} disabled={props.busy}>
                    {"Sign In"}
                </Button>
                <Button onclick={props.on_sign_up.reform(|_| ())} variant={ButtonVariant::Secondary} disabled={props.busy}>
                    {"Create Account"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountBarProps {
    pub state: AuthState,
    pub on_sign_in: Callback<()>,
    pub on_sign_up: Callback<()>,
    pub on_sign_out: Callback<()>,
}

#[function_component(AccountBar)]
pub fn account_bar(props: &AccountBarProps) -> Html {
    match &props.state {
        AuthState::Checking => html! {
            <div class="account-bar">
                <span class="account-status">{"Checking sign-in..."}</span>
            </div>
        },
        AuthState::SignedOut => html! {
            <div class="account-bar">
                <Button onclick={props.on_sign_in.reform(|_| ())} variant={ButtonVariant::Link}>
                    {"Sign In"}
                </Button>
                <Button onclick={props.on_sign_up.reform(|_| ())} variant={ButtonVariant::Secondary}>
                    {"Sign Up"}
                </Button>
            </div>
        },
        AuthState::SignedIn(member) => html! {
            <div class="account-bar">
                <span class="account-status">{member.display_name()}</span>
                <Button onclick={props.on_sign_out.reform(|_| ())} variant={ButtonVariant::Secondary}>
                    {"Sign Out"}
                </Button>
            </div>
        },
    }
}
