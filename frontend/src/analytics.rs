use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// Funnel moments reported to the ad pixel.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversionEvent {
    CtaClick,
    VideoView,
    LeadStarted,
    RegistrationComplete { content_name: &'static str },
}

impl ConversionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ConversionEvent::CtaClick => "InitiateCheckout",
            ConversionEvent::VideoView => "ViewContent",
            ConversionEvent::LeadStarted => "Lead",
            ConversionEvent::RegistrationComplete { .. } => "CompleteRegistration",
        }
    }

    pub fn properties(&self) -> Option<Value> {
        match self {
            ConversionEvent::CtaClick => Some(json!({
                "content_name": "Main CTA Button",
                "content_category": "Registration",
            })),
            ConversionEvent::VideoView => Some(json!({
                "content_name": "Webinar Preview Video",
                "content_type": "video",
            })),
            ConversionEvent::LeadStarted => None,
            ConversionEvent::RegistrationComplete { content_name } => Some(json!({
                "content_name": content_name,
                "status": "success",
            })),
        }
    }
}

/// Fire-and-forget sink for conversion events. Failures never reach the caller.
pub trait ConversionTracker {
    fn track(&self, event: &ConversionEvent);
}

pub struct NoopTracker;

impl ConversionTracker for NoopTracker {
    fn track(&self, _event: &ConversionEvent) {}
}

/// The Meta pixel's global `fbq`, if the page loaded it.
pub struct MetaPixel {
    fbq: Function,
}

impl MetaPixel {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let fbq = Reflect::get(&window, &JsValue::from_str("fbq")).ok()?;
        fbq.dyn_into::<Function>().ok().map(|fbq| Self { fbq })
    }
}

impl ConversionTracker for MetaPixel {
    fn track(&self, event: &ConversionEvent) {
        let action = JsValue::from_str("track");
        let name = JsValue::from_str(event.name());
        let _ = match event.properties().as_ref().and_then(pixel_properties) {
            Some(props) => self.fbq.call3(&JsValue::NULL, &action, &name, &props),
            None => self.fbq.call2(&JsValue::NULL, &action, &name),
        };
    }
}

/// `fbq` only reads own enumerable keys, so properties must arrive as a plain object, not a `Map`.
fn pixel_properties(props: &Value) -> Option<JsValue> {
    props
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .ok()
}

/// Shared handle passed down through Yew context.
#[derive(Clone)]
pub struct Tracker(Rc<dyn ConversionTracker>);

impl Tracker {
    pub fn new(inner: Rc<dyn ConversionTracker>) -> Self {
        Self(inner)
    }

    /// Uses the pixel when present, otherwise swallows every event.
    pub fn detect() -> Self {
        match MetaPixel::detect() {
            Some(pixel) => {
                log::info!("Meta pixel detected, conversion tracking enabled");
                Self(Rc::new(pixel))
            }
            None => Self::default(),
        }
    }

    pub fn track(&self, event: ConversionEvent) {
        self.0.track(&event);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self(Rc::new(NoopTracker))
    }
}

impl PartialEq for Tracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tracker")
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::Map;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn pixel_properties_are_plain_objects() {
        let props = ConversionEvent::CtaClick.properties().unwrap();
        let value = pixel_properties(&props).unwrap();

        assert!(value.is_object());
        assert!(!value.is_instance_of::<Map>());
        let name = Reflect::get(&value, &JsValue::from_str("content_name")).unwrap();
        assert_eq!(name.as_string().as_deref(), Some("Main CTA Button"));
        let category = Reflect::get(&value, &JsValue::from_str("content_category")).unwrap();
        assert_eq!(category.as_string().as_deref(), Some("Registration"));
    }

    #[wasm_bindgen_test]
    fn registration_properties_keep_the_status() {
        let event = ConversionEvent::RegistrationComplete {
            content_name: "Webinar MVP Registration",
        };
        let value = pixel_properties(&event.properties().unwrap()).unwrap();

        let status = Reflect::get(&value, &JsValue::from_str("status")).unwrap();
        assert_eq!(status.as_string().as_deref(), Some("success"));
    }
}
