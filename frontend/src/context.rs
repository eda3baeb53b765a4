//! DOM capability handed to the page instead of reaching for `window()` directly.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::{dom_error, PageError};
use crate::head::{MetaKey, PageMeta};

pub type ListenerId = u32;

/// Callback run on every scroll event.
pub struct ScrollHandler(Box<dyn FnMut()>);

impl ScrollHandler {
    pub fn new(handler: impl FnMut() + 'static) -> Self {
        Self(Box::new(handler))
    }

    pub fn call(&mut self) {
        (self.0)()
    }

    pub fn into_inner(self) -> Box<dyn FnMut()> {
        self.0
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PageContext {
    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> Result<f64, PageError>;

    fn has_element(&self, id: &str) -> bool;

    /// Requests a smooth scroll that brings the element with `id` into view.
    fn smooth_scroll_to(&self, id: &str) -> Result<(), PageError>;

    fn add_scroll_listener(&self, handler: ScrollHandler) -> Result<ListenerId, PageError>;

    fn remove_scroll_listener(&self, id: ListenerId);

    fn apply_metadata(&self, meta: &PageMeta) -> Result<(), PageError>;
}

pub struct BrowserContext {
    window: Window,
    document: Document,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
    next_id: Cell<ListenerId>,
}

impl BrowserContext {
    /// Returns `None` when running without a window or document.
    pub fn detect() -> Option<Rc<Self>> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Rc::new(Self {
            window,
            document,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }))
    }

    fn upsert_meta(&self, key: MetaKey, content: &str) -> Result<(), PageError> {
        let (attribute, value) = key.attribute();
        let selector = format!("meta[{}=\"{}\"]", attribute, value);
        let existing = self
            .document
            .query_selector(&selector)
            .map_err(dom_error("query meta tag"))?;
        let tag: Element = match existing {
            Some(tag) => tag,
            None => {
                let head = self.document.head().ok_or(PageError::MissingDocument)?;
                let tag = self
                    .document
                    .create_element("meta")
                    .map_err(dom_error("create meta tag"))?;
                tag.set_attribute(attribute, value)
                    .map_err(dom_error("set meta key"))?;
                head.append_child(&tag).map_err(dom_error("append meta tag"))?;
                tag
            }
        };
        tag.set_attribute("content", content)
            .map_err(dom_error("set meta content"))
    }

    /// Unregisters `callback`. If the browser refuses, the closure is leaked
    /// rather than freed while still attached.
    fn detach(&self, callback: Closure<dyn FnMut()>) -> bool {
        let removed = self
            .window
            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(dom_error("remove scroll listener"));
        release(removed, callback, Closure::forget)
    }
}

/// Drops `callback` once it is detached; otherwise hands it to `leak`.
fn release<C>(removed: Result<(), PageError>, callback: C, leak: impl FnOnce(C)) -> bool {
    match removed {
        Ok(()) => {
            drop(callback);
            true
        }
        Err(e) => {
            warn!("{}", e);
            leak(callback);
            false
        }
    }
}

impl Drop for BrowserContext {
    fn drop(&mut self) {
        // A closure freed while still attached would throw on the next scroll.
        let listeners = std::mem::take(self.listeners.get_mut());
        for (_, callback) in listeners {
            self.detach(callback);
        }
    }
}

impl PageContext for BrowserContext {
    fn scroll_y(&self) -> Result<f64, PageError> {
        self.window.scroll_y().map_err(dom_error("read scroll offset"))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn smooth_scroll_to(&self, id: &str) -> Result<(), PageError> {
        let Some(section) = self.document.get_element_by_id(id) else {
            return Ok(());
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn add_scroll_listener(&self, handler: ScrollHandler) -> Result<ListenerId, PageError> {
        let callback = Closure::wrap(handler.into_inner());
        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(dom_error("add scroll listener"))?;

        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.listeners.borrow_mut().insert(id, callback);
        debug!("Registered scroll listener {}", id);
        Ok(id)
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        let Some(callback) = self.listeners.borrow_mut().remove(&id) else {
            return;
        };
        if self.detach(callback) {
            debug!("Removed scroll listener {}", id);
        }
    }

    fn apply_metadata(&self, meta: &PageMeta) -> Result<(), PageError> {
        self.document.set_title(&meta.title);
        for tag in meta.tags() {
            self.upsert_meta(tag.key, &tag.content)?;
        }
        Ok(())
    }
}
