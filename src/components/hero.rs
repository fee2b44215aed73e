use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::config;
use crate::content::{anchors, Icon, OWNER_NAME, PROFILE_IMAGE, REGISTRATION_NO};
use crate::theme::ThemedProps;

#[function_component(Hero)]
pub fn hero(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <section id={anchors::HOME} class="hero">
            <div class="hero__content">
                <div class="hero__tagline">
                    <IconGlyph icon={Icon::Sparkles} />
                    {" Bridging Business Logic & Technical Architecture"}
                </div>
                <h1 class={classes!("hero__title", tokens.primary_text)}>
                    {"Engineering "}<span class="accent">{"VALUE."}</span>
                </h1>
                <h2 class={classes!("hero__name", tokens.primary_text)}>{format!("{}.", OWNER_NAME)}</h2>
                <p class={classes!("hero__intro", tokens.secondary_text)}>
                    {"Final-year BBICT student at Mount Kigali University. Architecting "}
                    <span class={classes!("hero__strong", tokens.primary_text)}>{"Scalable Backend Systems"}</span>
                    {" and "}
                    <span class={classes!("hero__strong", tokens.primary_text)}>{"Enterprise Solutions"}</span>
                    {"."}
                </p>
                <div class="hero__actions">
                    <a href="#projects" class="hero__cta">{"View Work"}</a>
                    <div class="hero__note">
                        <IconGlyph icon={Icon::TrendingUp} class={classes!("accent")} />
                        <span class={classes!("hero__note-text", tokens.secondary_text)}>
                            {"Forex Strategy & QuickBooks Proficient"}
                        </span>
                    </div>
                </div>
            </div>

            <div class="hero__portrait">
                <div class="hero__glow"></div>
                <div class="hero__frame">
                    <img src={config::asset_url(PROFILE_IMAGE)} alt="Alain Ingabire" />
                </div>
                <div class="hero__badge glass-effect">
                    <span class="hero__badge-icon"><IconGlyph icon={Icon::Shield} /></span>
                    <div>
                        <p class="hero__badge-label">{"Reg No"}</p>
                        <p class={classes!("hero__badge-value", tokens.primary_text)}>{REGISTRATION_NO}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    padding: 8rem 0 5rem;
                }
                .hero__content {
                    flex: 1;
                    text-align: center;
                    order: 2;
                }
                .hero__tagline {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.2);
                    color: var(--emerald);
                    font-size: 10px;
                    font-weight: 700;
                    font-style: italic;
                    letter-spacing: 0.1em;
                }
                .hero__title {
                    font-size: 2.25rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    line-height: 1.25;
                    margin: 0 0 1.5rem;
                }
                .hero__name {
                    font-size: 1.875rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin: 0 0 1.5rem;
                }
                .hero__intro {
                    font-size: 1rem;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .hero__strong { font-weight: 500; }
                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .hero__cta {
                    width: 100%;
                    padding: 1rem 2.5rem;
                    background: var(--emerald);
                    color: #ffffff;
                    border-radius: 1rem;
                    font-weight: 700;
                    box-shadow: 0 20px 25px -5px rgba(16, 185, 129, 0.2);
                    transition: transform var(--transition);
                }
                .hero__cta:hover { transform: scale(1.05); }
                .hero__note {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0 1rem;
                    border-left: 1px solid var(--gray-800);
                }
                .hero__note-text {
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .hero__portrait {
                    position: relative;
                    order: 1;
                    width: 14rem;
                    height: 18rem;
                }
                .hero__glow {
                    position: absolute;
                    inset: 0;
                    background: rgba(16, 185, 129, 0.2);
                    border-radius: var(--radius-lg);
                    filter: blur(40px);
                    animation: pulse 2s ease-in-out infinite;
                }
                .hero__frame {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    background: var(--gray-900);
                    border-radius: var(--radius-lg);
                    border: 2px solid rgba(16, 185, 129, 0.3);
                    overflow: hidden;
                }
                .hero__frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: top;
                    filter: grayscale(1);
                    transition: filter 700ms ease-in-out;
                }
                .hero__frame img:hover { filter: grayscale(0); }
                .hero__badge {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    animation: float 3s ease-in-out infinite;
                }
                .hero__badge-icon {
                    padding: 0.375rem;
                    background: var(--emerald);
                    border-radius: 0.5rem;
                    color: #ffffff;
                }
                .hero__badge p { margin: 0; }
                .hero__badge-label {
                    font-size: 8px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--emerald);
                }
                .hero__badge-value {
                    font-size: 10px;
                    font-family: var(--font-mono);
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @media (min-width: 640px) {
                    .hero__title { font-size: 3.75rem; }
                    .hero__name { font-size: 3.75rem; }
                    .hero__intro { font-size: 1.125rem; }
                    .hero__actions { flex-direction: row; }
                    .hero__cta { width: auto; }
                    .hero__portrait { width: 18rem; height: 20rem; }
                    .hero__badge { bottom: -1.5rem; right: -1.5rem; padding: 1rem; }
                }
                @media (min-width: 768px) {
                    .hero__portrait { width: 24rem; height: 28rem; }
                }
                @media (min-width: 1024px) {
                    .hero { flex-direction: row; gap: 4rem; }
                    .hero__content { text-align: left; order: 1; }
                    .hero__intro { margin-left: 0; font-size: 1.25rem; }
                    .hero__actions { justify-content: flex-start; }
                    .hero__title { font-size: 6rem; }
                    .hero__portrait { order: 2; }
                }
                "#}
            </style>
        </section>
    }
}
