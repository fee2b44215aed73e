use yew::prelude::*;

use crate::scroll::use_scroll_observer;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    /// Receives every observed scroll offset.
    pub on_offset: Callback<f64>,
}

/// Progress bar under the nav. Owns the progress value, so scroll ticks only
/// re-render this bar and not the page.
#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let progress = use_scroll_observer(props.on_offset.clone());

    html! {
        <div class="scroll-progress" style={format!("transform: scaleX({});", progress)}>
            <style>
                {r#"
                .scroll-progress {
                    height: 2px;
                    background: var(--emerald);
                    transform-origin: left;
                }
                "#}
            </style>
        </div>
    }
}
