/// Content submission form: paste text or give a URL

use crate::content::{validate_submission, ContentKind, Submission};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentInputProps {
    pub on_submit: Callback<Submission>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(ContentInput)]
pub fn content_input(props: &ContentInputProps) -> Html {
    let kind = use_state(ContentKind::default);
    let value = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_kind = {
        let kind = kind.clone();
        let error = error.clone();
        move |next: ContentKind| {
            let kind = kind.clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                kind.set(next);
                error.set(None);
            })
        }
    };

    let on_text_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                value.set(input.value());
            }
        })
    };

    let on_url_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                value.set(input.value());
            }
        })
    };

    let on_submit = {
        let kind = kind.clone();
        let value = value.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_submission(*kind, &value) {
                Ok(submission) => {
                    error.set(None);
                    on_submit.emit(submission);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let kind_class = |k: ContentKind| {
        if *kind == k {
            "kind-toggle kind-toggle-active"
        } else {
            "kind-toggle"
        }
    };

    html! {
        <div class="card">
            <h3 class="card-title">{"Input Your Content"}</h3>
            <p class="card-hint">
                {"Enter your blog post content or URL to generate an interactive tool."}
            </p>
            <form onsubmit={on_submit} class="content-form">
                <div class="kind-toggles">
                    <button type="button" class={kind_class(ContentKind::Text)} onclick={on_kind(ContentKind::Text)}>
                        {ContentKind::Text.label()}
                    </button>
                    <button type="button" class={kind_class(ContentKind::Url)} onclick={on_kind(ContentKind::Url)}>
                        {ContentKind::Url.label()}
                    </button>
                </div>

                if *kind == ContentKind::Text {
                    <textarea
                        class="content-textarea"
                        rows="6"
                        placeholder={kind.placeholder()}
                        value={(*value).clone()}
                        oninput={on_text_input}
                        disabled={props.disabled}
                    />
                } else {
                    <input
                        type="url"
                        class="content-url"
                        placeholder={kind.placeholder()}
                        value={(*value).clone()}
                        oninput={on_url_input}
                        disabled={props.disabled}
                    />
                }

                if let Some(msg) = (*error).clone() {
                    <p class="input-error">{msg}</p>
                }

                <button type="submit" class="pf-v5-c-button pf-m-primary submit-button" disabled={props.disabled}>
                    {"Generate Tool"}
                </button>
            </form>
        </div>
    }
}
