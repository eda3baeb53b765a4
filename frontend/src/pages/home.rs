use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, header::SiteHeader, hero::Hero, services::Services,
};
use crate::config::{self, SiteConfig};
use crate::context::{BrowserContext, PageContext};
use crate::head::PageMeta;
use crate::lifecycle::{gate, Lifecycle};
use crate::opacity::HeaderOpacity;
use crate::reveal::RevealEngine;
use crate::sections::{scroll_to_section, Section};
use crate::session::activate;

#[function_component]
pub fn Home() -> Html {
    let site = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let lifecycle = use_state(Lifecycle::default);
    let opacity = use_state(HeaderOpacity::default);
    let page_context = use_state(|| None::<Rc<dyn PageContext>>);

    // Runs once after the first (empty) render; the session is released on unmount.
    {
        let site = site.clone();
        let lifecycle = lifecycle.clone();
        let opacity = opacity.clone();
        let page_context = page_context.clone();
        use_effect_with_deps(
            move |_| {
                let ctx = BrowserContext::detect().map(|browser| browser as Rc<dyn PageContext>);
                let meta = PageMeta::from_config(&site, config::get_site_url());
                let engine = Box::new(RevealEngine::new(site.reveal.clone()));
                let on_opacity: Rc<dyn Fn(HeaderOpacity)> =
                    Rc::new(move |value| opacity.set(value));
                let session = activate(ctx.clone(), &meta, engine, on_opacity);
                if session.is_some() {
                    page_context.set(ctx);
                    lifecycle.set((*lifecycle).mount());
                }

                move || drop(session)
            },
            (),
        );
    }

    let on_navigate = {
        let page_context = page_context.clone();
        Callback::from(move |section: Section| {
            if let Some(ctx) = (*page_context).as_ref() {
                scroll_to_section(ctx.as_ref(), section.id());
            }
        })
    };

    gate(*lifecycle, || {
        html! {
            <div class="bg-black text-white">
                <SiteHeader
                    opacity={*opacity}
                    logo={AttrValue::from(site.assets.logo.clone())}
                    {on_navigate}
                />
                <Hero background={AttrValue::from(site.assets.hero_background.clone())} />
                <About illustration={AttrValue::from(site.assets.about_illustration.clone())} />
                <Services />
                <Contact />
            </div>
        }
    })
}
