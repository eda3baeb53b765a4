use yew::prelude::*;

use crate::opacity::HeaderOpacity;
use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub opacity: HeaderOpacity,
    pub logo: AttrValue,
    pub on_navigate: Callback<Section>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { opacity, logo, on_navigate } = props;

    html! {
        <header
            class="fixed top-0 left-0 w-full px-6 py-4 flex items-center justify-between z-50 transition-all duration-300"
            style={opacity.background_style()}
        >
            <div class="text-2xl font-bold flex items-center space-x-2">
                <img src={logo.clone()} alt="Logo" class="w-[150px]" />
            </div>
            <nav>
                <ul class="flex space-x-6">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, on_navigate)) }
                </ul>
            </nav>
        </header>
    }
}

fn nav_link(section: Section, on_navigate: &Callback<Section>) -> Html {
    // Anchor hrefs stay for no-JS fallback; the click is handled as a smooth scroll.
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <li>
            <a href={section.href()} {onclick} class="hover:text-gray-400">
                { section.label() }
            </a>
        </li>
    }
}
