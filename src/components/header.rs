use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::background_fit::dom::{document, window};
use crate::config::NAV_COLLAPSE_BREAKPOINT_PX;
use crate::content::{LOGO_URL, NAV_LINKS};
use crate::error::DomError;
use crate::Route;

/// Publishes the header height as `--sticky-header-offset` so anchored
/// sections don't slide under the sticky header.
fn publish_header_offset(header: &NodeRef) -> Result<(), DomError> {
    let Some(header) = header.cast::<HtmlElement>() else {
        return Ok(());
    };
    let height = header.get_bounding_client_rect().height().ceil();
    let root = document()?
        .document_element()
        .ok_or(DomError::MissingElement("document element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::MissingElement("html element"))?;
    root.style()
        .set_property("--sticky-header-offset", &format!("{}px", height))?;
    Ok(())
}

fn viewport_is_wide() -> bool {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map_or(false, |width| width >= NAV_COLLAPSE_BREAKPOINT_PX)
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let header_ref = use_node_ref();
    let nav_open = use_state(|| false);

    let on_layout_change = {
        let header_ref = header_ref.clone();
        let nav_open = nav_open.clone();
        move || {
            if let Err(e) = publish_header_offset(&header_ref) {
                warn!("Could not publish header offset: {}", e);
            }
            if viewport_is_wide() {
                nav_open.set(false);
            }
        }
    };

    {
        let on_layout_change = on_layout_change.clone();
        use_effect_with_deps(
            move |_| {
                on_layout_change();
                || ()
            },
            (),
        );
    }

    use_event_with_window("resize", move |_: Event| on_layout_change());

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav_open.set(!*nav_open);
        })
    };

    let close_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| nav_open.set(false))
    };

    html! {
        <header class="site-header" ref={header_ref}>
            <Link<Route> to={Route::Home} classes="logo-block">
                <img src={LOGO_URL} alt="Logo firmy VMP" width="130" height="43" />
            </Link<Route>>
            <button
                type="button"
                class="nav-toggle"
                aria-label="Toggle navigation"
                aria-expanded={(*nav_open).to_string()}
                aria-controls="primary-nav"
                onclick={toggle_nav}
            >
                <span class="nav-toggle__bar" aria-hidden="true"></span>
                <span class="nav-toggle__bar" aria-hidden="true"></span>
                <span class="nav-toggle__bar" aria-hidden="true"></span>
            </button>
            <nav id="primary-nav" class={classes!("primary-nav", (*nav_open).then(|| "is-open"))}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_nav.clone()}>{*label}</a>
                }) }
            </nav>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 2rem;
                    background: #ffffff;
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }

                .logo-block img {
                    display: block;
                }

                .primary-nav {
                    display: flex;
                    gap: 2rem;
                }

                .primary-nav a {
                    color: #1d2b3a;
                    text-decoration: none;
                    font-weight: 500;
                    letter-spacing: 0.02em;
                }

                .primary-nav a:hover {
                    color: #2f7d4f;
                }

                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .nav-toggle__bar {
                    width: 24px;
                    height: 2px;
                    background: #1d2b3a;
                }

                @media (max-width: 899px) {
                    .site-header {
                        flex-wrap: wrap;
                        padding: 0.75rem 1rem;
                    }

                    .nav-toggle {
                        display: flex;
                    }

                    .primary-nav {
                        display: none;
                        flex-direction: column;
                        width: 100%;
                        gap: 1rem;
                        padding: 1rem 0;
                    }

                    .primary-nav.is-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
