use yew::prelude::*;

use crate::sections::Section;

const WELCOME: [&str; 4] = [
    "Welcome to Senstech, where innovation converges with expertise, and technology becomes a tool for transformation.",
    "At Senstech, we don't just understand technology, we speak its language. From robust software development to seamless IT infrastructure, our suite of services is designed to elevate your business.",
    "Our commitment to excellence is reflected in every line of code we write, every system we optimize, and every challenge we embrace.",
    "Join us on a journey where innovation knows no bounds, and together, let's shape a future where your business thrives in the ever-evolving world of IT.",
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub illustration: AttrValue,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    about_section(&props.illustration)
}

pub fn about_section(illustration: &AttrValue) -> Html {
    let last = WELCOME.len() - 1;

    html! {
        <section id={Section::About.id()} class="h-screen flex items-center justify-center bg-[#000000]">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-center text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold uppercase mb-3">{"About Us"}</h2>
                    <p class="mb-8">
                        {"We're a dynamic team of tech enthusiasts and multimedia experts dedicated to crafting immersive experiences and cutting-edge solutions."}
                    </p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-8">
                        <div class="flex justify-center wow animate__animated animate__fadeInLeft">
                            <img src={illustration.clone()} alt="About" class="w-[350px] sm:w-[400px]" />
                        </div>
                        <div class="text-left wow animate__animated animate__fadeInRight">
                            <h3 class="text-2xl font-bold mb-3 uppercase">{"Welcome to Senstech"}</h3>
                            {
                                for WELCOME.iter().enumerate().map(|(i, paragraph)| html! {
                                    <p class={classes!((i < last).then_some("mb-4"))}>{ *paragraph }</p>
                                })
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_same_markup_for_the_same_illustration() {
        let illustration = AttrValue::from("/images/main/banner/about.png");
        let first = about_section(&illustration);
        assert!(first != Html::default());
        assert!(first == about_section(&illustration));
    }
}
