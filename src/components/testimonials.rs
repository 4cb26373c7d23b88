use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::{use_in_view, use_reveal, use_tilt};
use crate::reveal::hover::TiltHover;
use crate::reveal::section::{markers, SectionSpec};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechCorp",
        content: "Working with this agency transformed our digital presence. Their attention to detail and creative vision exceeded all expectations.",
        avatar: "https://i.pravatar.cc/150?img=1",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder, StartupXYZ",
        content: "The team delivered exceptional results on time and within budget. Their professionalism and expertise are unmatched.",
        avatar: "https://i.pravatar.cc/150?img=3",
    },
    Testimonial {
        name: "Emily Davis",
        role: "Marketing Director, BrandCo",
        content: "Absolutely phenomenal work! They took our vision and elevated it beyond what we imagined was possible.",
        avatar: "https://i.pravatar.cc/150?img=5",
    },
];

const CLIENTS: &[&str] = &["TechCorp", "StartupXYZ", "BrandCo", "InnovateCo", "DesignHub", "CloudSys"];

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub spec: Rc<SectionSpec>,
}

#[function_component]
pub fn Testimonials(props: &TestimonialsProps) -> Html {
    let node = use_node_ref();
    let armed = use_in_view(node.clone(), props.spec.id.clone(), props.spec.observe);
    use_reveal(node.clone(), props.spec.clone(), armed);

    html! {
        <section ref={node} id="testimonials" class="testimonials-section">
            <style>
                {r#"
                    .testimonials-section {
                        position: relative;
                        padding: 6rem 0;
                        background: #0a0f1e;
                        overflow: hidden;
                    }
                    .testimonials-section::before {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 50%, rgba(37, 99, 235, 0.05), transparent 70%);
                        pointer-events: none;
                    }
                    .testimonials-container {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .testimonials-title {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .testimonials-title h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .testimonials-title p {
                        color: #94a3b8;
                        font-size: 1.125rem;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-bottom: 5rem;
                        perspective: 1000px;
                    }
                    .testimonial-card .card-surface {
                        position: relative;
                        background: #f8fafc;
                        border-radius: 1rem;
                        padding: 2rem;
                        transform-style: preserve-3d;
                    }
                    .testimonial-quote {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        font-size: 4rem;
                        line-height: 1;
                        color: #2563eb;
                        opacity: 0.1;
                        transition: opacity 0.3s;
                    }
                    .testimonial-card:hover .testimonial-quote {
                        opacity: 0.2;
                    }
                    .testimonial-stars {
                        color: #10b981;
                        letter-spacing: 0.25rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-content {
                        position: relative;
                        color: #374151;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .testimonial-author img {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        border: 2px solid rgba(37, 99, 235, 0.3);
                        transition: border-color 0.3s;
                    }
                    .testimonial-card:hover .testimonial-author img {
                        border-color: #10b981;
                    }
                    .testimonial-name {
                        color: #0f172a;
                        font-weight: 700;
                    }
                    .testimonial-role {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .clients-caption {
                        text-align: center;
                        color: #94a3b8;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        margin-bottom: 2rem;
                    }
                    .clients-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                        gap: 2rem;
                    }
                    .client-logo .card-surface {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 5rem;
                        background: #f8fafc;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        color: #9ca3af;
                        font-size: 1.125rem;
                        font-weight: 700;
                        transition: color 0.3s;
                    }
                    .client-logo:hover .card-surface {
                        color: #2563eb;
                    }
                "#}
            </style>
            <div class="testimonials-container">
                <div class="testimonials-title">
                    <h2><span class="gradient-text">{"Client Testimonials"}</span></h2>
                    <p>{"Don't just take our word for it - hear what our clients have to say"}</p>
                </div>
                <div class={markers::TESTIMONIALS_GRID}>
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <TestimonialCard
                            key={testimonial.name}
                            name={testimonial.name}
                            role={testimonial.role}
                            content={testimonial.content}
                            avatar={testimonial.avatar}
                        />
                    }) }
                </div>
                <div class={markers::CLIENTS_SECTION}>
                    <p class="clients-caption">{"Trusted by Leading Brands"}</p>
                    <div class="clients-grid">
                        { for CLIENTS.iter().map(|client| html! {
                            <ClientLogo key={*client} name={*client} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    avatar: &'static str,
}

#[function_component]
fn TestimonialCard(props: &TestimonialCardProps) -> Html {
    let surface = use_node_ref();
    let (on_enter, on_leave) = use_tilt(surface.clone(), TiltHover::testimonial_card());

    html! {
        <div class={markers::TESTIMONIAL_CARD}>
            <div ref={surface} class="card-surface" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="testimonial-quote">{"”"}</div>
                <div class="testimonial-stars">{"★★★★★"}</div>
                <p class="testimonial-content">{format!("\"{}\"", props.content)}</p>
                <div class="testimonial-author">
                    <img src={props.avatar} alt={props.name} />
                    <div>
                        <div class="testimonial-name">{props.name}</div>
                        <div class="testimonial-role">{props.role}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClientLogoProps {
    name: &'static str,
}

#[function_component]
fn ClientLogo(props: &ClientLogoProps) -> Html {
    let surface = use_node_ref();
    let (on_enter, on_leave) = use_tilt(surface.clone(), TiltHover::client_logo());

    html! {
        <div class={markers::CLIENT_LOGO}>
            <div ref={surface} class="card-surface" onmouseenter={on_enter} onmouseleave={on_leave}>
                {props.name}
            </div>
        </div>
    }
}
