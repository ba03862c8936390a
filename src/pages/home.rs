use yew::prelude::*;
use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;

use crate::config;
use crate::scroll;
use crate::shop::SHOP;
use crate::testimonials::Rotation;

const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

const QUICK_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

const HERO_FEATURES: &[(&str, &str)] = &[
    ("Personal Training", "One-on-one sessions with expert trainers"),
    ("Group Classes", "Dynamic group workouts for all levels"),
    ("Modern Equipment", "State-of-the-art fitness technology"),
    ("24/7 Access", "Work out on your schedule"),
];

const HERO_STATS: &[(&str, &str)] = &[
    ("500+", "Active Members"),
    ("20+", "Expert Trainers"),
    ("50+", "Weekly Classes"),
    ("24/7", "Access"),
];

const SERVICE_NOTES: &[(&str, &str)] = &[
    (
        "Duration",
        "Each session is tailored to your fitness goals and schedule.",
    ),
    (
        "Quality",
        "We maintain premium equipment and facilities to ensure the best results for every member.",
    ),
    (
        "Experience",
        "Our certified trainers have years of experience helping members reach their goals.",
    ),
];

const MAPS_EMBED_URL: &str = "https://www.google.com/maps?q=Albany,+NY&output=embed";
const MAPS_SEARCH_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=Albany+NY+United+States";

/// Builds a click handler that closes the mobile menu and smooth-scrolls to
/// the given section anchor.
fn scroll_link(menu_open: &UseStateHandle<bool>, id: &'static str) -> Callback<MouseEvent> {
    let menu_open = menu_open.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::navigate_to_section(|| menu_open.set(false), scroll::scroll_to_section, id);
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let show_scroll_top = use_state(|| false);
    let testimonial = use_state(|| Rotation::new(SHOP.testimonials.len()));

    {
        let is_scrolled = is_scrolled.clone();
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                document.set_title(config::PAGE_TITLE);
                if let Ok(Some(meta)) = document.query_selector("meta[name='description']") {
                    let _ = meta.set_attribute("content", config::PAGE_DESCRIPTION);
                }

                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll::header_is_solid(scroll_y));
                    show_scroll_top.set(scroll::scroll_top_visible(scroll_y));
                    scroll::reveal_sections(&window_clone, &document);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so above-the-fold sections reveal on load
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_scroll_top = Callback::from(move |_: MouseEvent| {
        scroll::scroll_to_top();
    });

    let open_directions = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(MAPS_SEARCH_URL, "_blank");
        }
    });

    // Controls for the testimonial block; the block itself is not mounted
    // yet, so the rotation only changes through these handlers once it lands.
    let _next_testimonial = {
        let testimonial = testimonial.clone();
        Callback::from(move |_: MouseEvent| testimonial.set((*testimonial).next()))
    };
    let _prev_testimonial = {
        let testimonial = testimonial.clone();
        Callback::from(move |_: MouseEvent| testimonial.set((*testimonial).prev()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let tel_href = format!("tel:{}", SHOP.phone);
    let year = chrono::Utc::now().year();

    html! {
        <main class="landing-page">
            <div class="top-accent"></div>

            <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#home" class="nav-logo" onclick={scroll_link(&menu_open, "home")}>
                        {SHOP.name}
                    </a>

                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        {
                            NAV_LINKS.iter().map(|&(id, label)| html! {
                                <button key={id} class="nav-link" onclick={scroll_link(&menu_open, id)}>
                                    {label}
                                </button>
                            }).collect::<Html>()
                        }
                        <a href={tel_href.clone()} class="nav-call-button">
                            {"Call Us"}
                        </a>
                        <button class="nav-book-button" onclick={scroll_link(&menu_open, "contact")}>
                            {"Book Now"}
                        </button>
                    </div>
                </div>
            </header>

            <section id="home" class="hero reveal">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <div class="hero-text">
                        <div class="hero-badge">
                            <span class="pulse-dot"></span>
                            <span>{format!("Welcome to {}", SHOP.name)}</span>
                        </div>
                        <h1>
                            {"Transform Your"}
                            <span class="hero-highlight">{"Body & Mind"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Join Albany's premier fitness destination. State-of-the-art equipment, expert trainers, and a supportive community await you."}
                        </p>
                        <div class="hero-cta-group">
                            <a href={tel_href.clone()} class="hero-cta">
                                {"Start Your Journey"}
                            </a>
                            <button class="hero-secondary-cta" onclick={scroll_link(&menu_open, "services")}>
                                {"Explore Programs"}
                            </button>
                        </div>
                        <div class="hero-stats">
                            {
                                HERO_STATS.iter().map(|&(value, label)| html! {
                                    <div key={label} class="stat-card">
                                        <div class="stat-value">{value}</div>
                                        <div class="stat-label">{label}</div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="hero-features">
                        {
                            HERO_FEATURES.iter().map(|&(title, description)| html! {
                                <div key={title} class="hero-feature-card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="scroll-indicator">
                    <span>{"Scroll to explore"}</span>
                    <div class="scroll-indicator-arrow">{"\u{25BC}"}</div>
                </div>
            </section>

            <section id="about" class="about reveal">
                <div class="section-inner">
                    <div class="section-header">
                        <span class="section-badge">{"About Us"}</span>
                        <h2>{"Building "}<span class="accent">{"Strength"}</span>{" Since 2010"}</h2>
                        <div class="section-rule"></div>
                    </div>
                    <div class="about-grid">
                        <div class="about-image">
                            <img
                                src="https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?q=80&w=1000&auto=format&fit=crop"
                                alt="Trainer working with a client"
                                loading="lazy"
                            />
                            <div class="about-image-caption">
                                <p class="caption-title">{"10+ Years of Excellence"}</p>
                                <p>{"Serving the Albany community with pride"}</p>
                            </div>
                            <div class="about-image-badge">
                                <p class="badge-value">{"5000+"}</p>
                                <p>{"Happy Clients"}</p>
                            </div>
                        </div>
                        <div class="about-text">
                            <h3>{"Albany's Premier Fitness Experience"}</h3>
                            <p>
                                {format!("At {}, we focus on effective training, modern equipment, and top-tier local customer service. Our coaches combine proven programming with a welcoming atmosphere to help you reach your goals.", SHOP.name)}
                            </p>
                            <ul class="about-highlights">
                                <li>
                                    <h4>{"Premium Quality"}</h4>
                                    <p>{"Top-tier service guaranteed with attention to detail"}</p>
                                </li>
                                <li>
                                    <h4>{"Expert Trainers"}</h4>
                                    <p>{"Skilled professionals with years of experience"}</p>
                                </li>
                                <li>
                                    <h4>{"Convenient Hours"}</h4>
                                    <p>{"Flexible scheduling to fit your busy lifestyle"}</p>
                                </li>
                            </ul>
                            <button class="section-cta" onclick={scroll_link(&menu_open, "services")}>
                                {"Explore Our Services"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section id="services" class="services reveal">
                <div class="section-inner">
                    <div class="section-header">
                        <span class="section-badge dark">{"Our Services"}</span>
                        <h2>{"Premium "}<span class="accent">{"Fitness"}</span>{" Services"}</h2>
                        <p class="section-subtitle">
                            {"Experience the perfect blend of expert coaching and modern training"}
                        </p>
                        <div class="section-rule"></div>
                    </div>
                    <div class="services-grid">
                        {
                            SHOP.services.iter().map(|service| html! {
                                <div key={service.name} class="service-card">
                                    <div class="service-image">
                                        <img src={service.img} alt={service.name} loading="lazy" />
                                        <div class="service-overlay">
                                            <h3>{service.name}</h3>
                                            <p class="service-price">{service.price}</p>
                                        </div>
                                    </div>
                                    <div class="service-body">
                                        <p>{service.description}</p>
                                        <button class="service-cta" onclick={scroll_link(&menu_open, "contact")}>
                                            {"Book Now"}
                                        </button>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="services-info-grid">
                        {
                            SERVICE_NOTES.iter().map(|&(title, note)| html! {
                                <div key={title} class="services-info-card">
                                    <h3>{title}</h3>
                                    <p>{note}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="gallery" class="gallery reveal">
                <div class="section-inner">
                    <div class="section-header">
                        <span class="section-badge">{"Our Gallery"}</span>
                        <h2>{"Showcase of Our "}<span class="accent">{"Facility"}</span></h2>
                        <p class="section-subtitle">
                            {"Browse through our training floor, classes, and community"}
                        </p>
                        <div class="section-rule"></div>
                    </div>
                    <div class="gallery-grid">
                        {
                            SHOP.gallery.iter().zip(SHOP.services.iter()).map(|(&label, service)| html! {
                                <div key={label} class="gallery-tile">
                                    <img src={service.img} alt={label} loading="lazy" />
                                    <div class="gallery-tile-overlay">
                                        <h3>{label}</h3>
                                        <p>{service.price}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="gallery-social-proof">
                        <div class="avatar-stack">
                            {
                                (b'A'..=b'C').map(|letter| html! {
                                    <div class="avatar">{char::from(letter).to_string()}</div>
                                }).collect::<Html>()
                            }
                        </div>
                        <p>{"Join our satisfied customers"}</p>
                    </div>
                    <div class="gallery-cta">
                        <button class="section-cta" onclick={scroll_link(&menu_open, "contact")}>
                            {"Book Your Session Today"}
                        </button>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact reveal">
                <div class="section-inner">
                    <h2>{"Get in Touch"}</h2>
                    <p class="section-subtitle">
                        {"Visit us today and start training with Albany's best"}
                    </p>
                    <div class="contact-grid">
                        <div class="contact-card">
                            <h3>{"Location"}</h3>
                            <p>{SHOP.address}</p>
                        </div>
                        <div class="contact-card">
                            <h3>{"Phone"}</h3>
                            <a href={tel_href.clone()}>{SHOP.phone}</a>
                        </div>
                    </div>
                    <a href={tel_href.clone()} class="hero-cta">
                        {"Call Now"}
                    </a>
                </div>
            </section>

            <section class="map-section">
                <iframe
                    src={MAPS_EMBED_URL}
                    title="Map"
                    style="border: 0;"
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
                <div class="map-overlay">
                    <h3>{"Visit Us Today"}</h3>
                    <button class="section-cta" onclick={open_directions}>
                        {"Get Directions"}
                    </button>
                </div>
            </section>

            <footer class="site-footer">
                <div class="section-inner">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <div class="footer-logo">
                                <h3>{SHOP.name}</h3>
                                <p class="footer-est">{"EST. 2010"}</p>
                            </div>
                            <p class="footer-blurb">
                                {format!("Premium {} services in {}. Expert coaching, modern equipment, and top-tier customer service.", SHOP.category.to_lowercase(), SHOP.location)}
                            </p>
                            <div class="footer-socials">
                                <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                                    {"Instagram"}
                                </a>
                                <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                                    {"Facebook"}
                                </a>
                            </div>
                        </div>
                        <div class="footer-links">
                            <h3>{"Quick Links"}</h3>
                            <ul>
                                {
                                    QUICK_LINKS.iter().map(|&(id, label)| html! {
                                        <li key={id}>
                                            <button onclick={scroll_link(&menu_open, id)}>{label}</button>
                                        </li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                        <div class="footer-contact">
                            <h3>{"Contact Info"}</h3>
                            <ul>
                                <li>
                                    <p class="footer-label">{"Phone"}</p>
                                    <a href={tel_href}>{SHOP.phone}</a>
                                </li>
                                <li>
                                    <p class="footer-label">{"Address"}</p>
                                    <p>{SHOP.location}</p>
                                </li>
                                <li>
                                    <p class="footer-label">{"Hours"}</p>
                                    <p>{format!("Mon-Fri: {}", SHOP.hours.weekdays)}</p>
                                    <p>{format!("Saturday: {}", SHOP.hours.saturday)}</p>
                                    <p>{format!("Sunday: {}", SHOP.hours.sunday)}</p>
                                </li>
                            </ul>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{format!("\u{a9} {} {}. All rights reserved.", year, SHOP.name)}</p>
                    </div>
                </div>
            </footer>

            <button
                class={classes!("scroll-top", (*show_scroll_top).then(|| "visible"))}
                onclick={on_scroll_top}
                aria-label="Scroll to top"
            >
                {"\u{2191}"}
            </button>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_page() -> String {
        yew::ServerRenderer::<Home>::new().render().await
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[tokio::test]
    async fn renders_one_hero_four_services_and_four_gallery_tiles() {
        let html = render_page().await;

        assert_eq!(count(&html, "class=\"hero reveal\""), 1);
        assert_eq!(count(&html, "class=\"service-card\""), 4);
        assert_eq!(count(&html, "class=\"gallery-tile\""), 4);
    }

    #[tokio::test]
    async fn renders_the_fixed_contact_details() {
        let html = render_page().await;

        assert!(html.contains("tel:+15184230155"));
        assert!(html.contains("Albany, NY"));
        // hours in the footer: weekdays, saturday, sunday
        assert_eq!(count(&html, "Not specified"), 3);
    }

    #[tokio::test]
    async fn renders_service_notes_and_social_proof() {
        let html = render_page().await;

        for (title, _) in SERVICE_NOTES {
            assert!(html.contains(title));
        }
        assert!(html.contains("Join our satisfied customers"));
    }
}
