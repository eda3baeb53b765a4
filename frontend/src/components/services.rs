use yew::prelude::*;

use crate::sections::Section;

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "WEB DEVELOPMENT",
        summary: "Boost your digital presence with our top-notch web development services. We create stunning, responsive websites that drive traffic and engage your audience.",
    },
    Service {
        title: "SOFTWARE DEVELOPMENT",
        summary: "Unlock the potential of your business with our cutting-edge software development services. From concept to launch, we create innovative solutions tailored to your needs.",
    },
    Service {
        title: "UX/UI Design",
        summary: "Elevate your digital presence with our UX/UI design services. From intuitive interfaces to delightful user experiences, we create designs that engage and inspire.",
    },
];

pub fn service_card(service: &Service) -> Html {
    html! {
        <div class="wow animate__animated animate__fadeInUp text-left bg-[#212121] p-6 border-t-8 border-[#EA30CA] shadow-lg w-full md:w-80">
            <h3 class="text-xl font-semibold text-white">{ service.title }</h3>
            <p class="mt-2 text-white">{ service.summary }</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="h-screen flex items-center justify-center bg-[#000000]">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-center text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold uppercase mb-3 text-white">{"Our Services"}</h2>
                    <p class="mb-8 text-white">
                        {"Unlock the potential of technology and creativity with our comprehensive range of services. Explore our services below and let's embark on a journey of digital transformation together."}
                    </p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8">
                        { for SERVICES.iter().map(service_card) }
                    </div>
                    <p class="mt-8 text-white">
                        {"From concept to execution, we provide expert guidance and support every step of the way."}
                        <br />
                        {"Contact us to learn more about our services and how we can tailor a solution to meet your specific needs."}
                    </p>
                </div>
            </div>
        </section>
    }
}
