//! Browser tests for the preview frame: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use interactive_content::renderer::{render, RenderOptions, CONTAINER_CLASS};
use interactive_content::ui::tool_preview::{FrameTarget, FRAME_SANDBOX};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlIFrameElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mounted_frame() -> HtmlIFrameElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let frame: HtmlIFrameElement = document.create_element("iframe").unwrap().dyn_into().unwrap();
    frame.set_attribute("sandbox", FRAME_SANDBOX).unwrap();
    document.body().unwrap().append_child(&frame).unwrap();
    frame
}

#[wasm_bindgen_test]
fn test_render_writes_srcdoc() {
    let frame = mounted_frame();
    let target = FrameTarget::new(Some(frame.clone()));

    render(
        "```html\n<div>Hi</div><script>console.log(1)</script>\n```",
        &target,
        &RenderOptions::default(),
    );

    let doc = frame.get_attribute("srcdoc").unwrap();
    assert!(doc.contains(&format!(r#"<div class="{}"><div>Hi</div></div>"#, CONTAINER_CLASS)));
    assert!(doc.contains("<script>console.log(1)</script>"));
}

#[wasm_bindgen_test]
fn test_render_replaces_previous_document() {
    let frame = mounted_frame();
    let target = FrameTarget::new(Some(frame.clone()));

    render("<p>first</p>", &target, &RenderOptions::default());
    render("<p>second</p>", &target, &RenderOptions::default());

    let doc = frame.get_attribute("srcdoc").unwrap();
    assert!(!doc.contains("first"));
    assert!(doc.contains("<p>second</p>"));
}

#[wasm_bindgen_test]
fn test_render_without_frame_is_noop() {
    render("<p>nothing</p>", &FrameTarget::new(None), &RenderOptions::default());
}
