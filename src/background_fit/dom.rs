//! Browser-side implementations of the fit pass seams.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use super::cache::ImageSizeLoader;
use super::evaluator::FitFlagSink;
use super::scheduler::FrameSource;
use super::{NaturalSize, RegionBox, RegionSnapshot};
use crate::config::FitConfig;
use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Reads photo sections straight from layout and computed style.
pub struct DomRegionSource {
    window: Window,
    document: Document,
    selector: &'static str,
    url_property: &'static str,
}

impl DomRegionSource {
    pub fn new(config: &FitConfig) -> Result<Self, DomError> {
        let window = window()?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self {
            window,
            document,
            selector: config.section_selector,
            url_property: config.url_property,
        })
    }

    pub fn has_sections(&self) -> Result<bool, DomError> {
        Ok(self.document.query_selector(self.selector)?.is_some())
    }

    pub fn snapshot(&self) -> Result<Vec<RegionSnapshot>, DomError> {
        let nodes = self.document.query_selector_all(self.selector)?;
        let mut regions = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(section) = nodes.item(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            regions.push(self.read_section(&section)?);
        }
        Ok(regions)
    }

    fn read_section(&self, section: &HtmlElement) -> Result<RegionSnapshot, DomError> {
        let rect = section.get_bounding_client_rect();
        let computed = self
            .window
            .get_computed_style(section)?
            .ok_or(DomError::MissingElement("computed style"))?;

        // Inline declaration first, then whatever the stylesheet cascades in.
        let mut declaration = section.style().get_property_value(self.url_property)?;
        if declaration.trim().is_empty() {
            declaration = computed.get_property_value(self.url_property)?;
        }

        Ok(RegionSnapshot {
            label: section.id(),
            bounds: RegionBox {
                width: rect.width(),
                height: rect.height(),
            },
            background_declaration: Some(declaration).filter(|value| !value.trim().is_empty()),
            background_size: computed.get_property_value("background-size")?,
            background_position: computed.get_property_value("background-position")?,
        })
    }
}

/// Decodes images through an off-document `<img>` and reports natural size.
pub struct HtmlImageLoader;

impl ImageSizeLoader for HtmlImageLoader {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Option<NaturalSize>> {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                warn!("Could not create image element: {}", DomError::from(e));
                return futures::future::ready(None).boxed_local();
            }
        };

        let (tx, rx) = oneshot::channel::<Option<NaturalSize>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_load = {
            let tx = tx.clone();
            let image = image.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(NaturalSize::from_pixels(image.natural_width(), image.natural_height()));
                }
            })
        };
        let on_error = {
            let url = url.to_string();
            Closure::<dyn FnMut()>::new(move || {
                warn!("Background image {} failed to load", url);
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(None);
                }
            })
        };

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(url);

        async move {
            let size = rx.await.ok().flatten();
            image.set_onload(None);
            image.set_onerror(None);
            drop((on_load, on_error));
            size
        }
        .boxed_local()
    }
}

/// Writes the flag as a class on `<html>`, where the stylesheet picks it up.
pub struct DocumentClassFlag {
    root: Element,
    class_name: &'static str,
}

impl DocumentClassFlag {
    pub fn new(config: &FitConfig) -> Result<Self, DomError> {
        let root = document()?
            .document_element()
            .ok_or(DomError::MissingElement("document element"))?;
        Ok(Self {
            root,
            class_name: config.disabled_class,
        })
    }
}

impl FitFlagSink for DocumentClassFlag {
    fn apply(&self, backgrounds_disabled: bool) {
        if let Err(e) = self
            .root
            .class_list()
            .toggle_with_force(self.class_name, backgrounds_disabled)
        {
            warn!("Failed to toggle {}: {}", self.class_name, DomError::from(e));
        }
    }
}

/// A requested animation frame. The closure must outlive the request.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

pub struct WindowFrameSource {
    window: Window,
}

impl WindowFrameSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameSource for WindowFrameSource {
    type Handle = Option<AnimationFrame>;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let callback = Closure::once(callback);
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(AnimationFrame {
                id,
                _callback: callback,
            }),
            Err(e) => {
                warn!("requestAnimationFrame failed: {}", DomError::from(e));
                None
            }
        }
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        if let Some(frame) = handle {
            if let Err(e) = self.window.cancel_animation_frame(frame.id) {
                warn!("cancelAnimationFrame failed: {}", DomError::from(e));
            }
        }
    }
}
