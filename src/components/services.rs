use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::{use_in_view, use_reveal, use_tilt};
use crate::reveal::hover::TiltHover;
use crate::reveal::section::{markers, SectionSpec};

struct Service {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Custom Websites",
        description: "Bespoke website development tailored to your brand and business goals with modern design.",
        icon: "🌐",
    },
    Service {
        title: "Web Applications",
        description: "Scalable web apps built with cutting-edge technology for exceptional performance.",
        icon: "</>",
    },
    Service {
        title: "WordPress Development",
        description: "Custom WordPress sites with powerful themes, plugins, and seamless content management.",
        icon: "📱",
    },
    Service {
        title: "Shopify E-Commerce",
        description: "Complete Shopify stores optimized for conversions and stunning shopping experiences.",
        icon: "🛒",
    },
    Service {
        title: "Website Maintenance",
        description: "Ongoing support, updates, and optimization to keep your site running at peak performance.",
        icon: "🔧",
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub spec: Rc<SectionSpec>,
}

#[function_component]
pub fn Services(props: &ServicesProps) -> Html {
    let node = use_node_ref();
    let armed = use_in_view(node.clone(), props.spec.id.clone(), props.spec.observe);
    use_reveal(node.clone(), props.spec.clone(), armed);

    html! {
        <section ref={node} id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        position: relative;
                        padding: 6rem 0;
                        background: #0a0f1e;
                        overflow: hidden;
                    }
                    .services-section::before {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(rgba(37, 99, 235, 0.03) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(37, 99, 235, 0.03) 1px, transparent 1px);
                        background-size: 50px 50px;
                        pointer-events: none;
                    }
                    .services-container {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .services-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .services-heading h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .services-heading p {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        perspective: 1000px;
                    }
                    .service-card .card-surface {
                        position: relative;
                        background: #f8fafc;
                        border-radius: 1rem;
                        padding: 2rem;
                        cursor: pointer;
                        transform-style: preserve-3d;
                    }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #2563eb, #3b82f6);
                        color: white;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 0.75rem;
                        transition: color 0.3s;
                    }
                    .service-card:hover h3 {
                        color: #2563eb;
                    }
                    .service-card p {
                        color: #4b5563;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .learn-more {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #10b981;
                        opacity: 0;
                        transition: opacity 0.3s, transform 0.3s;
                    }
                    .service-card:hover .learn-more {
                        opacity: 1;
                        transform: translateX(0.5rem);
                    }
                "#}
            </style>
            <div class="services-container">
                <div class={markers::SERVICES_HEADING}>
                    <h2><span class="gradient-text">{"Our Services"}</span></h2>
                    <p>{"Professional web development solutions to bring your vision to life"}</p>
                </div>
                <div class={markers::SERVICES_GRID}>
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard
                            key={service.title}
                            title={service.title}
                            description={service.description}
                            icon={service.icon}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

/// The outer element belongs to the reveal; the tilt runs on the surface
/// inside it so the two never write the same `transform`.
#[function_component]
fn ServiceCard(props: &ServiceCardProps) -> Html {
    let surface = use_node_ref();
    let icon = use_node_ref();
    let (on_enter, on_leave) = use_tilt(surface.clone(), TiltHover::service_card());
    let (on_icon_enter, on_icon_leave) = use_tilt(icon.clone(), TiltHover::service_icon());

    html! {
        <div class={markers::SERVICE_CARD}>
            <div ref={surface} class="card-surface" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div ref={icon} class="service-icon" onmouseenter={on_icon_enter} onmouseleave={on_icon_leave}>
                    {props.icon}
                </div>
                <h3>{props.title}</h3>
                <p>{props.description}</p>
                <div class="learn-more">{"Learn More →"}</div>
            </div>
        </div>
    }
}
