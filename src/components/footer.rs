use yew::prelude::*;

use crate::content::{LINKEDIN_ICON, LINKEDIN_URL};

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-links">
                    <a href={LINKEDIN_URL} target="_blank" rel="noreferrer" aria-label="LinkedIn">
                        <img src={LINKEDIN_ICON} alt="LinkedIn" width="20" height="20" />
                    </a>
                </div>
                <p>{"©2022 by VMP. Built with Yew."}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #1d2b3a;
                    color: #c9d3dc;
                    padding: 2rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.9rem;
                }

                .footer-links img {
                    display: block;
                }
                "#}
            </style>
        </footer>
    }
}
