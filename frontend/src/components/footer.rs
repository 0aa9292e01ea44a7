//! Footer component

use leptos::*;

use crate::config::{CONTACT_EMAIL, LOGO_PATH, NAV_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-top">
                <img src=LOGO_PATH alt="logo" class="footer-logo"/>
                <div class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <p class="footer-link">{*link}</p> })
                        .collect_view()}
                </div>
            </div>
            <div class="footer-contact">
                <p>"Come Join Us!"</p>
                <p>{CONTACT_EMAIL}</p>
            </div>
            <div class="footer-rule"></div>
            <div class="footer-bottom">
                <p>"Prime Crypto 2022"</p>
                <p>"All Rights Reserved"</p>
            </div>
        </footer>
    }
}
