use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{Icon, CONTACT};

/// Floating quick-contact button that opens the messaging deep link.
#[function_component(ContactFab)]
pub fn contact_fab() -> Html {
    html! {
        <a
            href={CONTACT.whatsapp}
            target="_blank"
            rel="noopener noreferrer"
            class="contact-fab"
            aria-label="Message on WhatsApp"
        >
            <IconGlyph icon={Icon::Message} />
            <style>
                {r#"
                .contact-fab {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    padding: 1rem;
                    background: var(--emerald);
                    border-radius: 9999px;
                    border: 1px solid rgba(52, 211, 153, 0.3);
                    color: #ffffff;
                    font-size: 1.25rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    transition: transform 150ms ease;
                }
                .contact-fab:hover { transform: scale(1.1); }
                .contact-fab:active { transform: scale(0.9); }
                "#}
            </style>
        </a>
    }
}
