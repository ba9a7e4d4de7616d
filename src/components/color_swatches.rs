//! Color Swatch Row Component
//!
//! Fixed-palette color picker shared by the input row, the per-item color
//! popover, the history customization panel, and the AI panel.

use leptos::prelude::*;

use crate::models::COLORS;

/// Row of selectable color dots
#[component]
pub fn ColorSwatches(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_pick: Callback<String>,
    /// Smaller dots for popovers
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <div class=if compact { "color-swatches compact" } else { "color-swatches" }>
            {COLORS
                .iter()
                .map(|(value, label)| {
                    let value = *value;
                    let is_selected = move || selected.get() == value;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "swatch selected" } else { "swatch" }
                            style=format!("background-color: {};", value)
                            title=*label
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_pick.run(value.to_string());
                            }
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
