use log::info;
use yew::prelude::*;

use crate::background_fit::use_background_fit;
use crate::components::contact::ContactForm;
use crate::config::FitConfig;
use crate::content::{
    NetworkPartner, ARRANGING_FINANCING, CONTACT_BACKGROUND, FUND_MANAGEMENT, HERO_BACKGROUND,
    NETWORK_PARTNERS, OUR_WORK, TRACK_BACKGROUND, TRACK_STATS,
};

/// Inline custom properties read by the `.photo-section` rules below and by
/// the background-fit pass.
fn photo_style(url: &str, size: Option<&str>, position: Option<&str>) -> String {
    let mut style = format!("--section-bg-url: url(\"{}\");", url);
    if let Some(size) = size {
        style.push_str(&format!(" --section-bg-size: {};", size));
    }
    if let Some(position) = position {
        style.push_str(&format!(" --section-bg-position: {};", position));
    }
    style
}

fn arrow_item(class: &'static str, text: &'static str) -> Html {
    html! {
        <article class={class} key={text}>
            <span class={format!("{}__icon", class)} aria-hidden="true">
                <span>{"➜"}</span>
            </span>
            <p>{text}</p>
        </article>
    }
}

fn partner_line(partner: &NetworkPartner) -> Html {
    html! {
        <li class="network-list__item">
            <span class="network-list__icon" aria-hidden="true">
                <span>{"➜"}</span>
            </span>
            <p>
                {partner.prefix}
                {
                    match partner.link {
                        Some((text, href)) => html! {
                            <a href={href} target="_blank" rel="noreferrer">{text}</a>
                        },
                        None => html! {},
                    }
                }
                {partner.suffix}
            </p>
        </li>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Home page mounted");
            || ()
        },
        (),
    );

    use_background_fit(FitConfig::default());

    html! {
        <main>
            <section id="about" class="hero photo-section" style={photo_style(HERO_BACKGROUND, None, None)}>
                <div class="section-inner hero-inner">
                    <p class="eyebrow">{"WHO WE ARE"}</p>
                    <h1>{"VMP is a Polish financing advisory boutique."}</h1>
                    <p>
                        {"VMP’s owner is Piotr Lemieszek – a Polish financial advisor with over 20 years international experience in arranging financing, investment management, business advisory services."}
                    </p>
                    <p>
                        {"Piotr’s professional track record includes several years in Arthur Andersen, 13 years fund management for IFU (www.ifu.dk) – a European development finance fund, 4 years investment management of closed-end-fund investing in PV, 10 years in arranging financing as freelance consultant with a global list of clients"}
                    </p>
                    <p>{"Piotr holds Executive MBA (2001) from Warsaw University-University of Illinois and Urbana"}</p>
                </div>
            </section>

            <section id="services" class="our-work section-with-inner">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"SERVICES"}</h2>
                    </div>
                    <div class="work-list">
                        { for OUR_WORK.iter().map(|item| arrow_item("work-item", *item)) }
                    </div>
                </div>
            </section>

            <section
                id="track"
                class="track-record section-with-inner photo-section has-image"
                style={photo_style(TRACK_BACKGROUND, Some("100% auto"), Some("center top"))}
            >
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"TRACK RECORD"}</h2>
                    </div>
                    <div class="track-stats">
                        { for TRACK_STATS.iter().map(|stat| html! {
                            <div class="track-stat" key={*stat}>{*stat}</div>
                        }) }
                    </div>

                    <div class="track-subsection">
                        <h3>{"FUND MANAGEMENT"}</h3>
                        <div class="track-list">
                            { for FUND_MANAGEMENT.iter().map(|item| arrow_item("track-item", *item)) }
                        </div>
                    </div>

                    <div class="track-subsection">
                        <h3>{"ARRANGING FINANCING"}</h3>
                        <div class="track-list">
                            { for ARRANGING_FINANCING.iter().map(|item| arrow_item("track-item", *item)) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="network" class="network section-with-inner">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"OUR NETWORK"}</h2>
                    </div>
                    <p class="network-intro">
                        {"VMP co-operates with similar consulting and capital sourcing companies, including:"}
                    </p>
                    <ul class="network-list">
                        { for NETWORK_PARTNERS.iter().map(partner_line) }
                    </ul>
                </div>
            </section>

            <section
                id="contact"
                class="contact-section photo-section has-image"
                style={photo_style(CONTACT_BACKGROUND, Some("100% auto"), Some("center top"))}
            >
                <div class="contact-container">
                    <h2>{"Contact us"}</h2>
                    <ContactForm />
                </div>
            </section>

            <style>
                {r#"
                section[id] {
                    scroll-margin-top: var(--sticky-header-offset, 0px);
                }

                .photo-section {
                    position: relative;
                    background-color: #1d2b3a;
                    background-image: var(--section-bg-url);
                    background-size: var(--section-bg-size, cover);
                    background-position: var(--section-bg-position, center);
                    background-repeat: no-repeat;
                    color: #ffffff;
                }

                .background-images-disabled .photo-section.has-image {
                    background-image: none;
                }

                .section-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                }

                .hero-inner {
                    background: rgba(29, 43, 58, 0.65);
                    border-radius: 6px;
                }

                .hero h1 {
                    font-size: 2.6rem;
                    margin: 0.5rem 0 1.5rem;
                }

                .hero p {
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                .eyebrow {
                    letter-spacing: 0.2em;
                    font-size: 0.85rem;
                    color: #a8d5b9;
                }

                .section-heading h2 {
                    font-size: 2rem;
                    letter-spacing: 0.1em;
                    margin-bottom: 2rem;
                }

                .work-list,
                .track-list {
                    display: grid;
                    gap: 1.25rem;
                }

                .work-item,
                .track-item,
                .network-list__item {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .work-item__icon,
                .track-item__icon,
                .network-list__icon {
                    color: #2f7d4f;
                    font-weight: 700;
                    padding-top: 0.15rem;
                }

                .work-item p,
                .track-item p,
                .network-list__item p {
                    margin: 0;
                    line-height: 1.6;
                    overflow-wrap: anywhere;
                }

                .track-record .section-inner {
                    background: rgba(29, 43, 58, 0.7);
                }

                .track-stats {
                    display: flex;
                    gap: 2rem;
                    flex-wrap: wrap;
                    margin-bottom: 2.5rem;
                }

                .track-stat {
                    font-size: 1.6rem;
                    font-weight: 600;
                    padding: 1rem 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                }

                .track-subsection h3 {
                    letter-spacing: 0.08em;
                    margin: 2rem 0 1rem;
                }

                .network-list {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1rem;
                }

                .network-list a {
                    color: #2f7d4f;
                }

                .contact-section {
                    padding: 5rem 2rem;
                }

                .contact-container {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 2.5rem;
                    background: rgba(29, 43, 58, 0.75);
                    border-radius: 6px;
                }

                @media (max-width: 768px) {
                    .section-inner {
                        padding: 3rem 1rem;
                    }

                    .hero h1 {
                        font-size: 1.9rem;
                    }

                    .track-stat {
                        font-size: 1.2rem;
                    }

                    .contact-container {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::photo_style;
    use crate::background_fit::url::resolve_image_url;
    use crate::content::{CONTACT_BACKGROUND, TRACK_BACKGROUND};
    use std::path::Path;

    #[test]
    fn photo_style_round_trips_through_url_resolution() {
        let style = photo_style("/wind.png", Some("100% auto"), Some("center top"));
        assert_eq!(
            style,
            "--section-bg-url: url(\"/wind.png\"); --section-bg-size: 100% auto; --section-bg-position: center top;"
        );

        let declaration = style.split(';').next().unwrap().trim_start_matches("--section-bg-url:");
        assert_eq!(resolve_image_url(declaration).as_deref(), Some("/wind.png"));
    }

    #[test]
    fn photo_section_images_ship_in_public_dir() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for url in [TRACK_BACKGROUND, CONTACT_BACKGROUND] {
            let bytes = std::fs::read(public.join(url.trim_start_matches('/')))
                .unwrap_or_else(|e| panic!("{} is not in public/: {}", url, e));
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a PNG", url);
        }
    }
}
