use yew::prelude::*;

use crate::content::{anchors, CONTACT, REGISTRATION_NO};
use crate::theme::ThemedProps;

#[function_component(Footer)]
pub fn footer(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <footer id={anchors::CONTACT} class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <h2 class={classes!("site-footer__title", tokens.primary_text)}>{"Let's_Build."}</h2>
                    <a href={CONTACT.mailto()} class="site-footer__email">{CONTACT.email}</a>
                    <p class={classes!("site-footer__phone", tokens.secondary_text)}>{CONTACT.phone_display}</p>
                </div>
                <div class="site-footer__meta">
                    <div class="site-footer__social">
                        <a href={CONTACT.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={CONTACT.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                    <p class="site-footer__id">{format!("ID: {}", REGISTRATION_NO)}</p>
                    <p class="site-footer__dept">{"Mount Kigali University | BBICT Dept"}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: rgba(17, 24, 39, 0.5);
                    padding: 4rem 0;
                    margin-top: 5rem;
                    border-top: 1px solid var(--gray-800);
                    text-align: center;
                }
                .site-footer__grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .site-footer__title {
                    font-size: 2.25rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    margin: 0 0 1.5rem;
                }
                .site-footer__email {
                    display: block;
                    font-size: 1.25rem;
                    font-weight: 700;
                    font-style: italic;
                    color: var(--emerald);
                    text-decoration: underline;
                    word-break: break-all;
                    margin-bottom: 1rem;
                }
                .site-footer__email:hover { color: var(--emerald-strong); }
                .site-footer__phone {
                    font-size: 1.125rem;
                    font-family: var(--font-mono);
                    letter-spacing: -0.05em;
                    margin: 0;
                }
                .site-footer__meta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .site-footer__social {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .site-footer__social a {
                    color: #6b7280;
                    font-size: 0.875rem;
                    font-weight: 700;
                    transition: color var(--transition);
                }
                .site-footer__social a:hover { color: var(--emerald); }
                .site-footer__id {
                    font-family: var(--font-mono);
                    font-size: 9px;
                    color: #374151;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    margin: 0;
                }
                .site-footer__dept {
                    font-size: 10px;
                    color: var(--gray-800);
                    font-style: italic;
                    font-weight: 700;
                    margin: 0.5rem 0 0;
                }
                @media (min-width: 640px) {
                    .site-footer { padding: 6rem 0; }
                    .site-footer__title { font-size: 3rem; }
                    .site-footer__email { font-size: 1.5rem; }
                }
                @media (min-width: 768px) {
                    .site-footer { text-align: left; }
                    .site-footer__grid { grid-template-columns: repeat(2, 1fr); }
                    .site-footer__meta { align-items: flex-end; }
                }
                "#}
            </style>
        </footer>
    }
}
