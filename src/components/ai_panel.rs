//! AI Suggestion Panel Component
//!
//! Review panel for suggested ingredients: every suggestion starts selected,
//! amounts are editable per row, one card color applies to the whole batch.

use leptos::prelude::*;

use crate::ai::Suggestion;
use crate::components::ColorSwatches;

#[component]
pub fn AiPanel(
    suggestions: ReadSignal<Vec<Suggestion>>,
    set_suggestions: WriteSignal<Vec<Suggestion>>,
    ai_color: ReadSignal<String>,
    set_ai_color: WriteSignal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="ai-panel">
            <div class="ai-panel-header">
                <span>"予測食材（個数編集可）"</span>
                <button class="ai-panel-close" on:click=move |_| set_suggestions.set(Vec::new())>
                    "×"
                </button>
            </div>

            <div class="ai-suggestions">
                <For
                    each=move || { suggestions.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(index, _)| *index
                    children=move |(index, suggestion): (usize, Suggestion)| {
                        let selected = Signal::derive(move || {
                            suggestions.with(|all| all.get(index).map(|s| s.selected).unwrap_or(false))
                        });

                        view! {
                            <div class=move || {
                                if selected.get() { "ai-suggestion selected" } else { "ai-suggestion" }
                            }>
                                <button
                                    class="ai-suggestion-check"
                                    on:click=move |_| {
                                        set_suggestions.update(|all| {
                                            if let Some(s) = all.get_mut(index) {
                                                s.selected = !s.selected;
                                            }
                                        });
                                    }
                                >
                                    {move || if selected.get() { "✓" } else { "" }}
                                </button>
                                <span class="ai-suggestion-name">{suggestion.name.clone()}</span>
                                <input
                                    type="text"
                                    class="ai-suggestion-quantity"
                                    placeholder="分量"
                                    prop:value=move || {
                                        suggestions.with(|all| {
                                            all.get(index).map(|s| s.quantity.clone()).unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_suggestions.update(|all| {
                                            if let Some(s) = all.get_mut(index) {
                                                s.quantity = value.clone();
                                            }
                                        });
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>

            <div class="ai-panel-footer">
                <div class="ai-color-row">
                    <span>"カードの色:"</span>
                    <ColorSwatches
                        selected=ai_color
                        on_pick=Callback::new(move |value| set_ai_color.set(value))
                        compact=true
                    />
                </div>
                <button class="ai-confirm" on:click=move |_| on_confirm.run(())>
                    "選択した食材を追加"
                </button>
            </div>
        </div>
    }
}
