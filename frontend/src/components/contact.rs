use yew::prelude::*;

use crate::sections::Section;

#[function_component(Contact)]
pub fn contact() -> Html {
    contact_section()
}

pub fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.id()} class="h-screen flex items-center justify-center bg-[#000000]">
            <h2 class="text-3xl sm:text-4xl">{"Contact"}</h2>
        </section>
    }
}
