use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::scroll_progress::ScrollProgress;
use crate::content::{anchors, Icon, NAV_ITEMS};
use crate::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: ViewState,
    pub on_action: Callback<ViewAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { state, on_action } = props;
    let tokens = state.tokens();

    let toggle_dark_mode = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ViewAction::ToggleDarkMode);
        })
    };

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ViewAction::ToggleMenu);
        })
    };

    // Anchor navigation still happens; we only close the drawer.
    let close_menu = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ViewAction::CloseMenu);
        })
    };

    let on_offset = {
        let on_action = on_action.clone();
        Callback::from(move |offset: f64| {
            on_action.emit(ViewAction::Scroll(offset));
        })
    };

    let (theme_icon, theme_tone, theme_label) = if state.dark_mode {
        (Icon::Sun, "theme-icon--sun", "Switch to light mode")
    } else {
        (Icon::Moon, "theme-icon--moon", "Switch to dark mode")
    };

    html! {
        <nav class={classes!("top-nav", state.nav_elevated().then(|| "top-nav--elevated glass-effect"))}>
            <div class="container nav-content">
                <a href={format!("#{}", anchors::HOME)} class="nav-logo">
                    <span class="nav-logo__badge"><IconGlyph icon={Icon::Rocket} /></span>
                    <span class={classes!("nav-logo__text", tokens.primary_text)}>
                        {"Mr"}<span class="accent">{" INGABIRE"}</span>
                    </span>
                </a>

                <div class="nav-right">
                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.id} href={item.href()} class={classes!("nav-link", tokens.secondary_text)}>
                                {item.label}
                            </a>
                        }) }
                    </div>

                    <button
                        class={classes!("theme-toggle", tokens.toggle_background)}
                        onclick={toggle_dark_mode}
                        aria-label={theme_label}
                    >
                        <IconGlyph icon={theme_icon} class={classes!(theme_tone)} />
                    </button>

                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="Toggle navigation"
                        aria-expanded={state.menu_open.to_string()}
                    >
                        <IconGlyph icon={if state.menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
            </div>

            {
                if state.menu_open {
                    html! {
                        <div class="mobile-drawer">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a key={item.id} href={item.href()} class="mobile-drawer__link" onclick={close_menu.clone()}>
                                    {item.label}
                                </a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <ScrollProgress on_offset={on_offset} />

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 300ms ease;
                }
                .top-nav--elevated {
                    padding: 0.75rem 0;
                    background: rgba(3, 7, 18, 0.75);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-logo__badge {
                    padding: 0.375rem;
                    background: var(--emerald);
                    border-radius: 0.5rem;
                    color: #ffffff;
                    font-size: 0.9rem;
                }
                .nav-logo__text {
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-links {
                    display: none;
                    gap: 1.5rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 10px;
                    font-weight: 700;
                }
                .nav-link:hover { color: var(--emerald); }
                .theme-toggle {
                    padding: 0.5rem;
                    border-radius: 9999px;
                    transition: background-color 300ms ease;
                }
                .theme-icon--sun { color: #facc15; }
                .theme-icon--moon { color: #059669; }
                .burger-menu {
                    padding: 0.5rem;
                    color: var(--emerald);
                    font-size: 1.5rem;
                }
                .mobile-drawer {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: rgba(3, 7, 18, 0.95);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid var(--gray-800);
                    animation: drawerOpen 200ms ease-out;
                }
                .mobile-drawer__link {
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--gray-400);
                }
                .mobile-drawer__link:hover { color: var(--emerald); }
                @keyframes drawerOpen {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (min-width: 768px) {
                    .nav-right { gap: 2rem; }
                }
                @media (min-width: 1024px) {
                    .nav-links { display: flex; }
                    .burger-menu, .mobile-drawer { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}
