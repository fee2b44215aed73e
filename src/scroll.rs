use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

/// Fraction of the page that has been scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(offset: f64, max_offset: f64) -> f64 {
    if max_offset <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0)
}

// (offset, max offset) of the root scrolling element
fn read_position(window: &Window) -> Option<(f64, f64)> {
    let offset = window.scroll_y().ok()?;
    let root = window.document()?.document_element()?;
    let max_offset = f64::from(root.scroll_height() - root.client_height());
    Some((offset, max_offset))
}

/// Listens to window scroll events for the lifetime of the calling component.
///
/// `on_offset` receives every observed vertical offset and is captured once on
/// mount, so pass a stable callback (a reducer dispatcher works). Returns the
/// current scroll progress for the nav progress bar.
#[hook]
pub fn use_scroll_observer(on_offset: Callback<f64>) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(move |_| {
            let listener = match web_sys::window() {
                Some(window) => {
                    let observe = {
                        let window = window.clone();
                        move || {
                            if let Some((offset, max_offset)) = read_position(&window) {
                                on_offset.emit(offset);
                                progress.set(scroll_progress(offset, max_offset));
                            }
                        }
                    };
                    // The page can load already scrolled (e.g. opened on #projects).
                    observe();

                    let scroll_callback = Closure::wrap(Box::new(observe) as Box<dyn FnMut()>);
                    match window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some((window, scroll_callback)),
                        Err(err) => {
                            log::warn!("could not attach scroll listener: {:?}", err);
                            None
                        }
                    }
                }
                None => {
                    log::warn!("no window available, scroll tracking disabled");
                    None
                }
            };

            move || {
                if let Some((window, scroll_callback)) = listener {
                    if let Err(err) = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("could not detach scroll listener: {:?}", err);
                    }
                }
            }
        }, ());
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_max() {
        assert_eq!(scroll_progress(0.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(250.0, 1000.0), 0.25);
        assert_eq!(scroll_progress(1000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        // Overscroll on touch devices reports offsets outside the range.
        assert_eq!(scroll_progress(-40.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 1000.0), 1.0);
    }

    #[test]
    fn unscrollable_page_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(30.0, -5.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 100.0), 0.0);
    }
}
