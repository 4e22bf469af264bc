/// Sandboxed preview of a generated tool, with a drag handle to resize it

use crate::error::RenderError;
use crate::frame_size::{DragStart, FrameSize};
use crate::renderer::{render, RenderOptions, RenderTarget};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;
use yew::prelude::*;

/// Scripts may run, but the frame gets an opaque origin: no access to the host page
pub const FRAME_SANDBOX: &str = "allow-scripts allow-forms allow-modals allow-popups";

/// The preview `<iframe>`; each write swaps in a brand-new document via `srcdoc`
pub struct FrameTarget {
    frame: Option<HtmlIFrameElement>,
}

impl FrameTarget {
    pub fn new(frame: Option<HtmlIFrameElement>) -> FrameTarget {
        FrameTarget { frame }
    }

    pub fn from_node(node: &NodeRef) -> FrameTarget {
        FrameTarget::new(node.cast::<HtmlIFrameElement>())
    }
}

impl RenderTarget for FrameTarget {
    fn replace_document(&self, html: &str) -> Result<(), RenderError> {
        let frame = self.frame.as_ref().ok_or(RenderError::NotReady)?;
        frame
            .set_attribute("srcdoc", html)
            .map_err(|e| RenderError::Write(format!("{:?}", e)))
    }
}

/// Window listeners for one drag; only attached while the mouse is down
struct DragListeners {
    on_move: Closure<dyn Fn(MouseEvent)>,
    on_up: Closure<dyn Fn(MouseEvent)>,
}

impl DragListeners {
    fn attach(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
            let _ = window.add_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        }
    }

    fn detach(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
            let _ = window.remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolPreviewProps {
    /// Raw blob straight from the backend
    pub tool: String,
    #[prop_or_default]
    pub options: RenderOptions,
}

#[function_component(ToolPreview)]
pub fn tool_preview(props: &ToolPreviewProps) -> Html {
    let frame_ref = use_node_ref();
    let size = use_state(FrameSize::default);
    let dragging = use_state(|| false);
    let listeners: Rc<RefCell<Option<DragListeners>>> = use_mut_ref(|| None);

    // Rebuild the frame document whenever the blob changes
    {
        let frame_ref = frame_ref.clone();
        use_effect_with((props.tool.clone(), props.options), move |(tool, options)| {
            render(tool, &FrameTarget::from_node(&frame_ref), options);
            || ()
        });
    }

    // Never leave window listeners behind on unmount
    {
        let listeners = listeners.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(old) = listeners.borrow_mut().take() {
                    old.detach();
                }
            }
        });
    }

    let on_drag_start = {
        let size = size.clone();
        let dragging = dragging.clone();
        let listeners = listeners.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(old) = listeners.borrow_mut().take() {
                old.detach();
            }

            let start = DragStart::new(e.client_x(), e.client_y(), *size);

            let on_move = {
                let size = size.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    size.set(start.resize(e.client_x(), e.client_y()));
                }) as Box<dyn Fn(MouseEvent)>)
            };

            let on_up = {
                let dragging = dragging.clone();
                let listeners = listeners.clone();
                Closure::wrap(Box::new(move |_: MouseEvent| {
                    // Detach only; the closures are dropped at the next drag or on unmount
                    if let Some(active) = listeners.borrow().as_ref() {
                        active.detach();
                    }
                    dragging.set(false);
                }) as Box<dyn Fn(MouseEvent)>)
            };

            let active = DragListeners { on_move, on_up };
            active.attach();
            *listeners.borrow_mut() = Some(active);
            dragging.set(true);
        })
    };

    let on_reset = {
        let size = size.clone();
        Callback::from(move |_: MouseEvent| size.set(FrameSize::default()))
    };

    // The frame would swallow mousemove events mid-drag
    let frame_style = if *dragging {
        format!("{} pointer-events: none;", size.css())
    } else {
        size.css()
    };

    html! {
        <div class="card">
            <h3 class="card-title">{"Generated Tool Preview"}</h3>
            <p class="card-hint">
                {"Here's your generated interactive tool. Drag the corner to try it at different sizes."}
            </p>
            <div class="preview-box">
                <iframe
                    ref={frame_ref}
                    title="Tool Preview"
                    class="tool-frame"
                    sandbox={FRAME_SANDBOX}
                    style={frame_style}
                />
                <div class="resize-handle" onmousedown={on_drag_start} title="Drag to resize"></div>
            </div>
            <div class="preview-footer">
                <span class="preview-size">{format!("{} × {}", size.width, size.height)}</span>
                <button type="button" class="link-button" onclick={on_reset}>{"Reset size"}</button>
            </div>
        </div>
    }
}
