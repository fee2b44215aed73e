use yew::prelude::*;

use crate::components::{
    certifications::Certifications,
    contact_fab::ContactFab,
    experience::Experience,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    projects::Projects,
    skills::Skills,
};
use crate::view_state::{ViewAction, ViewState};

/// The whole site. Owns the view state and hands snapshots down to the sections.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let state = use_reducer(ViewState::default);

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: ViewAction| dispatcher.dispatch(action))
    };

    let view = *state;
    let tokens = view.tokens();

    html! {
        <div class={classes!("page", tokens.page)}>
            <ContactFab />
            <Nav state={view} on_action={on_action} />

            <main class="container">
                <Hero tokens={tokens} />
                <Skills tokens={tokens} />
                <Certifications tokens={tokens} />
                <Projects tokens={tokens} />
                <Experience tokens={tokens} />
            </main>

            <Footer tokens={tokens} />
        </div>
    }
}
