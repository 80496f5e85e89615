use lil_protocol::{ImageId, NodeBox, SrcAssignment, Viewport, ViewportEvent};

use crate::attributes::ImageAttributes;
use crate::config::LoaderConfig;
use crate::model::ImageDescriptor;
use crate::throttle::Throttle;
use crate::visibility::is_visible;

/// An image the loader manages.
#[derive(Debug, Clone)]
pub struct LazyImage {
    pub id: ImageId,
    pub descriptor: ImageDescriptor,
}

/// Lazy image loader instance.
///
/// Owns the parsed descriptors of every registered image and the throttle
/// that paces re-renders. The host feeds in viewport snapshots, element
/// geometry and clock readings, and applies the returned [`SrcAssignment`]s.
///
/// Typical host loop:
///
/// 1. `register` every candidate element, then call `render` once.
/// 2. On each scroll/resize, call `notify`.
/// 3. From a timer, call `tick`; apply the assignments it returns.
#[derive(Debug, Clone)]
pub struct LazyImageLoader {
    config: LoaderConfig,
    images: Vec<LazyImage>,
    throttle: Throttle,
}

impl LazyImageLoader {
    pub fn new(config: LoaderConfig) -> Self {
        let throttle = Throttle::new(config.throttle_interval_ms());
        Self {
            config,
            images: Vec::new(),
            throttle,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Parse an element's attributes and start managing it.
    ///
    /// Returns `None` when the element has no usable image set; the host
    /// should leave such elements untouched.
    pub fn register(&mut self, attributes: &ImageAttributes) -> Option<ImageId> {
        let descriptor = attributes.to_descriptor()?;
        let Ok(index) = u32::try_from(self.images.len()) else {
            tracing::warn!("image registry full, ignoring element");
            return None;
        };
        let id = ImageId(index);
        tracing::debug!(
            %id,
            candidates = descriptor.candidates().len(),
            fallback = descriptor.fallback_src(),
            "registered lazy image"
        );
        self.images.push(LazyImage { id, descriptor });
        Some(id)
    }

    /// Register an element from its raw `(name, value)` attribute pairs.
    pub fn register_pairs<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Option<ImageId> {
        let attributes = ImageAttributes::from_pairs(pairs, &self.config);
        self.register(&attributes)
    }

    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }

    pub fn image(&self, id: ImageId) -> Option<&LazyImage> {
        self.images.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Compute sources for every visible image.
    ///
    /// `layout` reports the current geometry of an image's element; images
    /// it has no geometry for are skipped.
    pub fn render<F>(&self, viewport: &Viewport, layout: F) -> Vec<SrcAssignment>
    where
        F: Fn(ImageId) -> Option<NodeBox>,
    {
        let viewport = viewport.normalized();
        let assignments: Vec<_> = self
            .images
            .iter()
            .filter(|image| layout(image.id).is_some_and(|node| is_visible(&node, &viewport)))
            .map(|image| SrcAssignment {
                image: image.id,
                src: image
                    .descriptor
                    .select_source(viewport.device_pixel_ratio, viewport.width)
                    .to_string(),
            })
            .collect();
        tracing::trace!(
            visible = assignments.len(),
            total = self.images.len(),
            "render pass"
        );
        assignments
    }

    /// Schedule a throttled re-render. Returns `true` if a new one was armed.
    pub fn notify(&mut self, event: ViewportEvent, now_ms: f64) -> bool {
        let armed = self.throttle.notify(now_ms);
        tracing::trace!(?event, armed, "viewport event");
        armed
    }

    /// Clock reading at which the pending re-render becomes due, if any.
    /// Hosts can use it to schedule their next `tick`.
    pub fn pending_deadline(&self) -> Option<f64> {
        self.throttle.deadline()
    }

    /// Drop a scheduled re-render, e.g. when the host tears the page down.
    /// Returns `true` if one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        let pending = self.throttle.is_pending();
        self.throttle.cancel();
        pending
    }

    /// Run the pending re-render if its deadline has passed.
    pub fn tick<F>(
        &mut self,
        now_ms: f64,
        viewport: &Viewport,
        layout: F,
    ) -> Option<Vec<SrcAssignment>>
    where
        F: Fn(ImageId) -> Option<NodeBox>,
    {
        if !self.throttle.poll(now_ms) {
            return None;
        }
        Some(self.render(viewport, layout))
    }
}

impl Default for LazyImageLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
