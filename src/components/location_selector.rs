//! Location Selector Component
//!
//! Entry screen: pick which site's shopping list to open.

use leptos::prelude::*;

use crate::models::LocationId;

#[component]
pub fn LocationSelector(#[prop(into)] on_select: Callback<LocationId>) -> impl IntoView {
    view! {
        <div class="location-selector">
            <div class="location-selector-header">
                <h1>"おかいもの"</h1>
                <p class="location-selector-sub">"Shopping List"</p>
            </div>

            <div class="location-buttons">
                {LocationId::ALL
                    .iter()
                    .map(|&loc| {
                        view! {
                            <button
                                class="location-btn"
                                style=format!("border-color: {}; color: {};", loc.theme_color(), loc.theme_color())
                                on:click=move |_| on_select.run(loc)
                            >
                                <span class="location-caption">{loc.caption()}</span>
                                <span class="location-name">{loc.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
