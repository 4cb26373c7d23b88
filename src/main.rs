use yew::prelude::*;
use log::info;

mod config;
mod error;
mod hooks;
mod reveal {
    pub mod context;
    pub mod controller;
    pub mod easing;
    pub mod geometry;
    pub mod hover;
    pub mod observer;
    pub mod section;
    pub mod style;
    pub mod target;
    pub mod timeline;
    #[cfg(test)]
    pub mod testing;
}
mod dom {
    pub mod frame;
    pub mod observer;
    pub mod scope;
}
mod components {
    pub mod contact;
    pub mod services;
    pub mod testimonials;
}

use components::contact::Contact;
use components::services::Services;
use components::testimonials::Testimonials;
use config::SiteConfig;

#[function_component]
pub fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <main class="site">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0f1e;
                        color: white;
                        font-family: 'Inter', system-ui, sans-serif;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #2563eb, #10b981);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                "#}
            </style>
            <Services spec={config.section("services")} />
            <Testimonials spec={config.section("testimonials")} />
            <Contact spec={config.section("contact")} />
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
