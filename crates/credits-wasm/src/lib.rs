//! Credits WASM - Browser bindings for the credits roll
//!
//! Once the page has fully loaded (images and fonts included, so layout is
//! final) the container and viewport are measured, the scroll is planned by
//! `credits-core` and handed to `Element.animate` as an endlessly repeating
//! two-keyframe `top` animation.

use credits_core::{
    AnimationPlan, CreditsError, CreditsScroller, Measurements, ScrollConfig, ScrollVariant,
    ViewportMeasurement, CONTAINER_ID,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, KeyframeAnimationOptions, Window};

/// Attribute on the container selecting the scroll variant.
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

/// Hook the credits roll onto the window load event
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The bundle is instantiated asynchronously and may finish after load.
    if document.ready_state() == "complete" {
        report(roll_credits(None));
        return Ok(());
    }

    let on_load = Closure::once_into_js(move || report(roll_credits(None)));
    window.add_event_listener_with_callback("load", on_load.unchecked_ref())?;

    Ok(())
}

/// Measure the page and start the scroll animation
///
/// `variant` overrides the container's `data-variant` attribute.
#[wasm_bindgen]
pub fn roll_credits(variant: Option<String>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let viewport = DomViewport::new(window);

    let attribute = viewport
        .container
        .as_ref()
        .and_then(|el| el.get_attribute(VARIANT_ATTRIBUTE));
    let variant = resolve_variant(variant.or(attribute).as_deref()).map_err(to_js)?;

    let scroller = CreditsScroller::new(ScrollConfig { variant });
    let plan = scroller.plan(&viewport).map_err(to_js)?;

    if let Some(message) = end_position_message(&plan) {
        console::log_1(&JsValue::from_str(&message));
    }

    // plan() only succeeds when the container was found
    if let Some(container) = viewport.container.as_ref() {
        animate(container, &plan)?;
    }

    Ok(())
}

/// Compute the scroll plan for explicit heights without touching the DOM
#[wasm_bindgen]
pub fn scroll_parameters(
    content_height: f64,
    viewport_height: f64,
    variant: Option<String>,
) -> Result<JsValue, JsValue> {
    let variant = resolve_variant(variant.as_deref()).map_err(to_js)?;
    let params = variant
        .compute(Measurements::new(content_height, viewport_height))
        .map_err(to_js)?;
    let plan = AnimationPlan::new(variant, params);

    // Plain objects rather than JS Maps for the keyframes
    plan.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Measures the live document
pub struct DomViewport {
    window: Window,
    container: Option<Element>,
}

impl DomViewport {
    pub fn new(window: Window) -> Self {
        let container = window
            .document()
            .and_then(|document| document.get_element_by_id(CONTAINER_ID));
        Self { window, container }
    }
}

impl ViewportMeasurement for DomViewport {
    fn container_height(&self) -> credits_core::Result<f64> {
        let container = self
            .container
            .as_ref()
            .ok_or_else(|| CreditsError::ContainerNotFound(CONTAINER_ID.to_string()))?;
        Ok(container.get_bounding_client_rect().height())
    }

    fn viewport_height(&self) -> credits_core::Result<f64> {
        self.window
            .inner_height()
            .map_err(js_error)?
            .as_f64()
            .ok_or_else(|| CreditsError::Host("innerHeight is not a number".to_string()))
    }
}

fn animate(element: &Element, plan: &AnimationPlan) -> Result<(), JsValue> {
    let keyframes = js_sys::Array::new();
    for frame in plan.keyframes() {
        let object = js_sys::Object::new();
        for (property, value) in frame.iter() {
            js_sys::Reflect::set(&object, &JsValue::from_str(property), &JsValue::from_str(value))?;
        }
        keyframes.push(&object);
    }

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(plan.duration_ms()),
    )?;
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("iterations"),
        &JsValue::from_f64(plan.iterations().as_f64()),
    )?;
    let options: KeyframeAnimationOptions = options.unchecked_into();

    let keyframes: &js_sys::Object = &keyframes;
    let _animation = element.animate_with_keyframe_animation_options(Some(keyframes), &options);

    Ok(())
}

/// Pick the scroll variant from an optional name, falling back to the default
pub fn resolve_variant(name: Option<&str>) -> credits_core::Result<ScrollVariant> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.parse(),
        None => Ok(ScrollVariant::default()),
    }
}

/// Diagnostic line logged for variants that report their end position
pub fn end_position_message(plan: &AnimationPlan) -> Option<String> {
    plan.variant
        .logs_end_position()
        .then(|| format!("credits end position: {}", plan.params.end_position()))
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        console::error_1(&e);
    }
}

fn to_js(err: CreditsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn js_error(value: JsValue) -> CreditsError {
    CreditsError::Host(format!("{:?}", value))
}
