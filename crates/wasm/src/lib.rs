use std::collections::HashMap;

use lil_core::{ImageAttributes, ImageDescriptor, LazyImageLoader, LoaderConfig};
use lil_protocol::{ImageId, NodeBox, SrcAssignment, Viewport, ViewportEvent};
use wasm_bindgen::prelude::*;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a JS millisecond count into a throttle interval; anything
/// unusable selects the default.
fn throttle_ms(value: Option<f64>) -> u64 {
    match value {
        Some(ms) if ms.is_finite() && ms >= 1.0 => ms as u64,
        _ => 0,
    }
}

/// A lazy image loader owned by the page script.
///
/// The script registers elements, keeps element geometry current with
/// `set_node_box`, forwards scroll/resize events to `notify`, and calls
/// `tick` from a timer. Render results are JSON arrays of
/// `{"image": id, "src": "..."}`.
#[wasm_bindgen]
pub struct Loader {
    inner: LazyImageLoader,
    layout: HashMap<ImageId, NodeBox>,
}

#[wasm_bindgen]
impl Loader {
    #[wasm_bindgen(constructor)]
    pub fn new(throttle: Option<f64>) -> Loader {
        Self::with_config(LoaderConfig::with_throttle_ms(throttle_ms(throttle)))
    }

    /// Build a loader from TOML config text.
    pub fn from_config(toml: &str) -> Result<Loader, JsError> {
        let config =
            LoaderConfig::from_toml_str(toml).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Register an element by its attribute values. Returns its handle, or
    /// `undefined` when the element has no usable image set.
    pub fn register(
        &mut self,
        image_set: Option<String>,
        fallback_src: Option<String>,
        src: Option<String>,
    ) -> Option<u32> {
        let attributes = ImageAttributes {
            image_set,
            fallback_src,
            src,
        };
        self.inner.register(&attributes).map(|id| id.0)
    }

    /// Names of the attributes the loader reads, as `[image_set, fallback]`.
    pub fn attribute_names(&self) -> Vec<String> {
        let config = self.inner.config();
        vec![
            config.image_set_attribute.clone(),
            config.fallback_src_attribute.clone(),
        ]
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Record the document-space geometry of a registered element.
    pub fn set_node_box(&mut self, image: u32, top: f64, height: f64) {
        self.layout.insert(ImageId(image), NodeBox::new(top, height));
    }

    pub fn clear_layout(&mut self) {
        self.layout.clear();
    }

    /// Compute sources for the visible images now.
    pub fn render(
        &self,
        scroll_y: f64,
        inner_height: f64,
        inner_width: Option<f64>,
        device_pixel_ratio: Option<f64>,
    ) -> Result<String, JsError> {
        let viewport = Viewport::from_host(scroll_y, inner_height, inner_width, device_pixel_ratio);
        to_json(&self.assignments(&viewport))
    }

    /// Forward a `scroll` or `resize` event. Returns `true` when it armed a
    /// new re-render.
    pub fn notify(&mut self, event: &str, now_ms: f64) -> Result<bool, JsError> {
        let event: ViewportEvent = event
            .parse()
            .map_err(|e: lil_protocol::UnknownEvent| JsError::new(&e.to_string()))?;
        Ok(self.inner.notify(event, now_ms))
    }

    /// Clock reading at which the pending re-render is due, for scheduling
    /// the next `tick`. `undefined` when nothing is pending.
    pub fn pending_deadline(&self) -> Option<f64> {
        self.inner.pending_deadline()
    }

    /// Drop a scheduled re-render. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel_pending()
    }

    /// Run the pending re-render if it is due. Returns the JSON assignments,
    /// or `undefined` when nothing ran.
    pub fn tick(
        &mut self,
        now_ms: f64,
        scroll_y: f64,
        inner_height: f64,
        inner_width: Option<f64>,
        device_pixel_ratio: Option<f64>,
    ) -> Result<Option<String>, JsError> {
        let viewport = Viewport::from_host(scroll_y, inner_height, inner_width, device_pixel_ratio);
        let layout = &self.layout;
        self.inner
            .tick(now_ms, &viewport, |id| layout.get(&id).copied())
            .map(|out| to_json(&out))
            .transpose()
    }
}

impl Loader {
    fn with_config(config: LoaderConfig) -> Self {
        Self {
            inner: LazyImageLoader::new(config),
            layout: HashMap::new(),
        }
    }

    fn assignments(&self, viewport: &Viewport) -> Vec<SrcAssignment> {
        self.inner.render(viewport, |id| self.layout.get(&id).copied())
    }
}

/// Parse an image-set attribute. Returns the descriptor as JSON, or
/// `undefined` when no entry is valid.
#[wasm_bindgen]
pub fn parse_image_set(raw: &str, fallback_src: Option<String>) -> Result<Option<String>, JsError> {
    ImageDescriptor::parse(raw, fallback_src.unwrap_or_default())
        .map(|d| to_json(&d))
        .transpose()
}

/// Parse an image-set attribute and pick the source for the given device.
#[wasm_bindgen]
pub fn select_source(
    raw: &str,
    fallback_src: Option<String>,
    device_pixel_ratio: Option<f64>,
    viewport_width: Option<f64>,
) -> Option<String> {
    let viewport = Viewport::from_host(0.0, 0.0, viewport_width, device_pixel_ratio);
    ImageDescriptor::parse(raw, fallback_src.unwrap_or_default()).map(|d| {
        d.select_source(viewport.device_pixel_ratio, viewport.width)
            .to_string()
    })
}
