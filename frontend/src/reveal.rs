//! Scroll-triggered entrance animations.
//!
//! Elements carrying the box class (`wow`) are hidden on start and revealed,
//! with their animate.css animation, the first time they enter the viewport.
//! Per-element timing comes from `data-wow-duration`, `data-wow-delay` and
//! `data-wow-iteration`.

use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MutationObserver, MutationObserverInit,
};

use crate::error::{dom_error, PageError};

/// Set on every element the engine has taken over.
pub const BOUND_ATTR: &str = "data-reveal-bound";

const MOBILE_AGENTS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

#[cfg_attr(test, mockall::automock)]
pub trait AnimationEngine {
    /// Starts watching tagged elements. Returns how many were bound immediately.
    fn start(&mut self) -> Result<usize, PageError>;

    fn stop(&mut self);
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub box_class: String,
    pub animate_class: String,
    /// Distance in px an element must travel into the viewport before it reveals.
    pub offset: u32,
    pub mobile: bool,
    /// Also bind tagged elements rendered after `start`.
    pub live: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            box_class: "wow".to_string(),
            animate_class: "animate__animated".to_string(),
            offset: 0,
            mobile: true,
            live: true,
        }
    }
}

impl RevealConfig {
    pub fn unbound_selector(&self) -> String {
        format!(".{}:not([{}])", self.box_class, BOUND_ATTR)
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.offset)
    }
}

pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_AGENTS.iter().any(|agent| user_agent.contains(agent))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxState {
    Hidden,
    Visible,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxTiming {
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub iteration: Option<String>,
}

impl BoxTiming {
    pub fn read(element: &Element) -> Self {
        Self {
            duration: element.get_attribute("data-wow-duration"),
            delay: element.get_attribute("data-wow-delay"),
            iteration: element.get_attribute("data-wow-iteration"),
        }
    }

    /// Inline style changes for a box in `state`. `None` removes the property.
    pub fn declarations(&self, state: BoxState) -> Vec<(&'static str, Option<String>)> {
        let mut declarations = Vec::with_capacity(5);
        let timing = [
            ("animation-duration", &self.duration),
            ("animation-delay", &self.delay),
            ("animation-iteration-count", &self.iteration),
        ];
        for (property, value) in timing {
            if let Some(value) = value {
                declarations.push((property, Some(value.clone())));
            }
        }
        match state {
            BoxState::Hidden => {
                declarations.push(("visibility", Some("hidden".to_string())));
                declarations.push(("animation-name", Some("none".to_string())));
            }
            BoxState::Visible => {
                declarations.push(("visibility", Some("visible".to_string())));
                declarations.push(("animation-name", None));
            }
        }
        declarations
    }
}

fn apply_state(element: &HtmlElement, state: BoxState) -> Result<(), PageError> {
    let style = element.style();
    for (property, value) in BoxTiming::read(element).declarations(state) {
        match value {
            Some(value) => style
                .set_property(property, &value)
                .map_err(dom_error("set animation style"))?,
            None => {
                style
                    .remove_property(property)
                    .map_err(dom_error("clear animation style"))?;
            }
        }
    }
    Ok(())
}

fn reveal(target: &Element, animate_class: &str) -> Result<(), PageError> {
    let element = target
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| PageError::Dom {
            action: "reveal element",
            message: "target is not an HTML element".to_string(),
        })?;
    apply_state(element, BoxState::Visible)?;
    element
        .class_list()
        .add_1(animate_class)
        .map_err(dom_error("add animate class"))
}

fn bind_boxes(
    document: &Document,
    observer: &IntersectionObserver,
    config: &RevealConfig,
) -> Result<usize, PageError> {
    let boxes = document
        .query_selector_all(&config.unbound_selector())
        .map_err(dom_error("query animation boxes"))?;
    let mut bound = 0;
    for index in 0..boxes.length() {
        let Some(node) = boxes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        element
            .set_attribute(BOUND_ATTR, "")
            .map_err(dom_error("mark animation box"))?;
        apply_state(&element, BoxState::Hidden)?;
        observer.observe(&element);
        bound += 1;
    }
    Ok(bound)
}

pub struct RevealEngine {
    config: RevealConfig,
    intersection: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)>,
    mutation: Option<(MutationObserver, Closure<dyn FnMut(Array, MutationObserver)>)>,
}

impl RevealEngine {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            intersection: None,
            mutation: None,
        }
    }

    fn watch_for_new_boxes(
        &mut self,
        document: &Document,
        observer: &IntersectionObserver,
    ) -> Result<(), PageError> {
        let body = document.body().ok_or(PageError::MissingDocument)?;
        let callback = {
            let document = document.clone();
            let observer = observer.clone();
            let config = self.config.clone();
            Closure::<dyn FnMut(Array, MutationObserver)>::new(
                move |_records: Array, _: MutationObserver| {
                    match bind_boxes(&document, &observer, &config) {
                        Ok(0) => {}
                        Ok(count) => debug!("Bound {} new animation boxes", count),
                        Err(e) => warn!("Failed to bind new animation boxes: {}", e),
                    }
                },
            )
        };
        let mutation = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(dom_error("create mutation observer"))?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        mutation
            .observe_with_options(&body, &options)
            .map_err(dom_error("observe document body"))?;
        self.mutation = Some((mutation, callback));
        Ok(())
    }
}

impl AnimationEngine for RevealEngine {
    fn start(&mut self) -> Result<usize, PageError> {
        self.stop();
        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        if !self.config.mobile {
            let user_agent = window.navigator().user_agent().unwrap_or_default();
            if is_mobile_agent(&user_agent) {
                debug!("Entrance animations disabled on mobile");
                return Ok(0);
            }
        }
        let document = window.document().ok_or(PageError::MissingDocument)?;

        let animate_class = self.config.animate_class.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if let Err(e) = reveal(&target, &animate_class) {
                        warn!("Failed to reveal animation box: {}", e);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_root_margin(&self.config.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(dom_error("create intersection observer"))?;

        self.intersection = Some((observer.clone(), callback));
        let bound = bind_boxes(&document, &observer, &self.config)?;
        if self.config.live {
            if let Err(e) = self.watch_for_new_boxes(&document, &observer) {
                warn!("Entrance animations will not pick up new elements: {}", e);
            }
        }
        debug!("Entrance animations started with {} boxes", bound);
        Ok(bound)
    }

    fn stop(&mut self) {
        if let Some((observer, _callback)) = self.mutation.take() {
            observer.disconnect();
        }
        if let Some((observer, _callback)) = self.intersection.take() {
            observer.disconnect();
        }
    }
}

impl Drop for RevealEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
