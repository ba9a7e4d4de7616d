//! History Modal Component
//!
//! Bottom sheet over the history ledger: tap an entry to customize color and
//! amount before adding it back to the list, long-press drag to reorder,
//! trash to drop an entry.

use leptos::prelude::*;
use leptos_sortable::{make_on_row_mousedown, make_on_row_mouseenter, SortSignals};

use crate::components::ColorSwatches;
use crate::context::use_actions;
use crate::models::{HistoryItem, NewItem};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryModal(sort: SortSignals, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let actions = use_actions();

    let history = Memo::new(move |_| store.master_history().get());

    // Which entry is expanded for customization
    let (selected_name, set_selected_name) = signal(None::<String>);
    let (temp_color, set_temp_color) = signal(String::new());
    let (temp_quantity, set_temp_quantity) = signal(String::new());

    let confirm_add = move |_| {
        let Some(name) = selected_name.get_untracked() else {
            return;
        };
        actions.add.run(NewItem {
            name,
            color: temp_color.get_untracked(),
            quantity: temp_quantity.get_untracked(),
        });
        set_selected_name.set(None);
        on_close.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="history-sheet">
                <div class="history-header">
                    <h3>"買い物履歴"</h3>
                    <button class="history-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="history-list">
                    <For
                        each=move || { history.get().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(index, entry)| format!("{}-{}", entry.name, index)
                        children=move |(index, entry): (usize, HistoryItem)| {
                            let row_color = entry.color.clone();
                            let toggle_name = entry.name.clone();
                            let toggle_color = entry.color.clone();
                            let delete_name = StoredValue::new(entry.name.clone());
                            let display_name = entry.name.clone();

                            let sel_name = entry.name.clone();
                            let is_selected =
                                Signal::derive(move || selected_name.get().as_deref() == Some(sel_name.as_str()));

                            view! {
                                <div class="history-entry">
                                    <div
                                        class=move || if is_selected.get() { "history-row selected" } else { "history-row" }
                                        class:dragging=move || sort.dragging_read.get() == Some(index)
                                        class=("drop-target", move || {
                                            sort.dragging_read.get().is_some() && sort.hover_read.get() == Some(index)
                                        })
                                        style=format!("border-left: 6px solid {};", row_color)
                                        on:mousedown=make_on_row_mousedown(sort, index)
                                        on:mouseenter=make_on_row_mouseenter(sort, index)
                                        on:click=move |_| {
                                            // A finished drag lands here as a click; swallow it
                                            if sort.just_ended_read.get_untracked() {
                                                return;
                                            }
                                            if is_selected.get_untracked() {
                                                set_selected_name.set(None);
                                            } else {
                                                set_selected_name.set(Some(toggle_name.clone()));
                                                set_temp_color.set(toggle_color.clone());
                                                set_temp_quantity.set(String::new());
                                            }
                                        }
                                    >
                                        <span class="history-name">{display_name}</span>
                                        <Show when=move || !is_selected.get()>
                                            <button
                                                class="history-delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    actions.delete_history.run(delete_name.get_value());
                                                }
                                            >
                                                "🗑"
                                            </button>
                                        </Show>
                                    </div>

                                    <Show when=move || is_selected.get()>
                                        <div class="history-detail" on:mousedown=move |ev| ev.stop_propagation()>
                                            <div class="history-detail-colors">
                                                <span>"カードの色を選ぶ"</span>
                                                <ColorSwatches
                                                    selected=temp_color
                                                    on_pick=Callback::new(move |value| set_temp_color.set(value))
                                                    compact=true
                                                />
                                            </div>
                                            <div class="history-detail-row">
                                                <input
                                                    type="text"
                                                    placeholder="個数・単位を入力 (例: 2個)"
                                                    prop:value=move || temp_quantity.get()
                                                    on:input=move |ev| set_temp_quantity.set(event_target_value(&ev))
                                                />
                                                <button class="history-add" on:click=confirm_add>"追加"</button>
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }
                    />

                    <Show when=move || history.get().is_empty()>
                        <p class="history-empty">"履歴はまだありません"</p>
                    </Show>
                </div>

                <div class="history-footer">
                    <p>"タップで詳細を入力 / 長押しで並び替え"</p>
                </div>
            </div>
        </div>
    }
}
