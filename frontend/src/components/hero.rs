use yew::prelude::*;

use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub background: AttrValue,
}

pub fn hero_style(background: &str) -> String {
    format!("background-image: url({});", background)
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    hero_section(&props.background)
}

pub fn hero_section(background: &str) -> Html {
    html! {
        <section
            id={Section::Home.id()}
            class="h-screen flex flex-col items-center justify-center bg-cover bg-center transition-all duration-300"
            style={hero_style(background)}
        >
            <h1 class="text-4xl sm:text-5xl font-bold wow animate__animated animate__fadeInUp">
                {"DRIVING DIGITAL TRANSFORMATION"}
            </h1>
            <p class="mt-4 text-lg text-center max-w-xl wow animate__animated animate__fadeInUp">
                {"Beyond software development, we offer expert consulting services to guide you through the entire software development process."}
            </p>
        </section>
    }
}
