//! Shopping List View Component
//!
//! Main screen for one site: input row (color, amount, voice, AI mode), the
//! draggable item list, the history modal, the settings menu, and the danger
//! confirmations.

use chrono::{Datelike, Local, LocalResult, TimeZone};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{make_on_row_mousedown, make_on_row_mouseenter, SortSignals};

use crate::ai::{self, Suggestion};
use crate::components::{AiPanel, ColorSwatches, ConfirmDialog, DangerOp, HistoryModal};
use crate::context::{use_actions, AppContext};
use crate::models::{LocationId, NewItem, ShoppingItem, DEFAULT_COLOR};
use crate::ops::ItemPatch;
use crate::speech;
use crate::store::{use_app_store, AppStateStoreFields};

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// `M/D` label for an item's creation time
fn format_created(ms: f64) -> String {
    match Local.timestamp_millis_opt(ms as i64) {
        LocalResult::Single(dt) => format!("{}/{}", dt.month(), dt.day()),
        _ => String::new(),
    }
}

#[component]
pub fn ShoppingListView(
    location: LocationId,
    list_sort: SortSignals,
    history_sort: SortSignals,
) -> impl IntoView {
    let store = use_app_store();
    let actions = use_actions();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let items = Memo::new(move |_| store.lists().read().get(location).to_vec());

    // Input row state
    let (input_value, set_input_value) = signal(String::new());
    let (quantity_value, set_quantity_value) = signal(String::new());
    let (selected_color, set_selected_color) = signal(DEFAULT_COLOR.to_string());

    // Voice input
    let (listening, set_listening) = signal(false);
    let recognizer = StoredValue::new_local(speech::create(
        move |transcript| set_input_value.set(transcript),
        move |active| set_listening.set(active),
    ));

    // Panels
    let (show_history, set_show_history) = signal(false);
    let (show_settings, set_show_settings) = signal(false);
    let (confirm, set_confirm) = signal(None::<DangerOp>);

    // AI mode
    let (ai_mode, set_ai_mode) = signal(false);
    let (ai_loading, set_ai_loading) = signal(false);
    let (suggestions, set_suggestions) = signal(Vec::<Suggestion>::new());
    let (ai_color, set_ai_color) = signal(DEFAULT_COLOR.to_string());

    // Per-item inline editing
    let (editing_color_id, set_editing_color_id) = signal(None::<String>);
    let (editing_quantity_id, set_editing_quantity_id) = signal(None::<String>);
    let (temp_quantity, set_temp_quantity) = signal(String::new());

    let handle_voice = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        recognizer.with_value(|rec| match rec {
            None => alert("音声入力に対応していません"),
            Some(rec) => {
                if let Err(err) = speech::toggle(rec, listening.get_untracked()) {
                    web_sys::console::error_1(&format!("音声入力の開始に失敗: {err}").into());
                    set_listening.set(false);
                }
            }
        });
    };

    let run_ai = move || {
        let dish = input_value.get_untracked();
        if dish.trim().is_empty() {
            return;
        }
        if !ai::available() {
            alert("AI予測は現在利用できません");
            return;
        }
        set_ai_loading.set(true);
        set_suggestions.set(Vec::new());
        spawn_local(async move {
            match ai::suggest(&dish).await {
                Ok(found) => set_suggestions.set(found),
                Err(err) => {
                    web_sys::console::error_1(&format!("AI予測失敗: {err}").into());
                    alert("食材の予測に失敗しました。時間をおいて再度お試しください。");
                }
            }
            set_ai_loading.set(false);
        });
    };

    let handle_add = move |_| {
        if ai_mode.get_untracked() {
            run_ai();
            return;
        }
        let name = input_value.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        actions.add.run(NewItem {
            name,
            color: selected_color.get_untracked(),
            quantity: quantity_value.get_untracked().trim().to_string(),
        });
        set_input_value.set(String::new());
        set_quantity_value.set(String::new());
        set_selected_color.set(DEFAULT_COLOR.to_string());
    };

    let confirm_ai = move |_| {
        let batch: Vec<NewItem> = suggestions
            .get_untracked()
            .into_iter()
            .filter(|s| s.selected)
            .map(|s| NewItem {
                name: s.name,
                color: ai_color.get_untracked(),
                quantity: s.quantity,
            })
            .collect();
        if !batch.is_empty() {
            actions.add_many.run(batch);
        }
        set_suggestions.set(Vec::new());
        set_input_value.set(String::new());
        set_ai_mode.set(false);
    };

    let theme = location.theme_color();

    view! {
        <div
            class="list-screen"
            on:click=move |_| {
                set_editing_color_id.set(None);
                set_editing_quantity_id.set(None);
            }
        >
            <header class="list-header">
                <div class="header-left">
                    <button class="back-btn" on:click=move |_| actions.set_location.run(None)>
                        "‹"
                    </button>
                    <Show when=move || ctx.syncing.get()>
                        <span class="sync-indicator">"☁"</span>
                    </Show>
                </div>
                <h2 style=format!("color: {};", theme)>{location.label()}</h2>
                <div class="header-right">
                    <button
                        class="clear-list-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm.set(Some(DangerOp::ClearList));
                        }
                    >
                        "カゴ消去"
                    </button>
                    <div class="settings-wrap">
                        <button
                            class="settings-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_show_settings.update(|v| *v = !*v);
                            }
                        >
                            "⋮"
                        </button>
                        <Show when=move || show_settings.get()>
                            <div class="settings-dropdown">
                                <button on:click=move |_| {
                                    set_confirm.set(Some(DangerOp::ClearHistory));
                                    set_show_settings.set(false);
                                }>
                                    "履歴リストを空にする"
                                </button>
                                <button
                                    class="danger"
                                    on:click=move |_| {
                                        set_confirm.set(Some(DangerOp::FactoryReset));
                                        set_show_settings.set(false);
                                    }
                                >
                                    "全初期化"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </header>

            <div class="input-panel" on:click=move |ev| ev.stop_propagation()>
                <div class="input-panel-top">
                    <ColorSwatches
                        selected=selected_color
                        on_pick=Callback::new(move |value| set_selected_color.set(value))
                    />
                    <button
                        class=move || if ai_mode.get() { "ai-toggle on" } else { "ai-toggle" }
                        on:click=move |_| {
                            set_ai_mode.update(|v| *v = !*v);
                            set_suggestions.set(Vec::new());
                            set_input_value.set(String::new());
                        }
                    >
                        {move || if ai_mode.get() { "AIモードON" } else { "AIモード" }}
                    </button>
                </div>

                <div class="input-row">
                    <div class="name-input-wrap">
                        <input
                            type="text"
                            class="name-input"
                            placeholder=move || {
                                if ai_mode.get() {
                                    "作りたいメニューと何人前か入力"
                                } else {
                                    "何を買いますか？"
                                }
                            }
                            prop:value=move || input_value.get()
                            on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        />
                        <button
                            class=move || if listening.get() { "mic-btn listening" } else { "mic-btn" }
                            on:click=handle_voice
                        >
                            "🎤"
                        </button>
                    </div>
                    <button
                        class="add-btn"
                        style=move || {
                            format!("background-color: {};", if ai_mode.get() { "#a855f7" } else { theme })
                        }
                        prop:disabled=move || ai_loading.get()
                        on:click=handle_add
                    >
                        {move || {
                            if ai_loading.get() {
                                "…"
                            } else if ai_mode.get() {
                                "検索"
                            } else {
                                "＋"
                            }
                        }}
                    </button>
                </div>

                <Show when=move || !ai_mode.get()>
                    <input
                        type="text"
                        class="quantity-input"
                        placeholder="個数を入力（任意）"
                        prop:value=move || quantity_value.get()
                        on:input=move |ev| set_quantity_value.set(event_target_value(&ev))
                    />
                </Show>

                <Show when=move || !suggestions.get().is_empty()>
                    <AiPanel
                        suggestions=suggestions
                        set_suggestions=set_suggestions
                        ai_color=ai_color
                        set_ai_color=set_ai_color
                        on_confirm=Callback::new(confirm_ai)
                    />
                </Show>

                <button class="history-open-btn" on:click=move |_| set_show_history.set(true)>
                    "履歴リストから選ぶ"
                </button>
            </div>

            <div class="item-list">
                <Show when=move || items.get().is_empty()>
                    <div class="empty-list">
                        <p>"買い物依頼はありません"</p>
                    </div>
                </Show>
                <For
                    each=move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| (index, item.id.clone()))
                            .collect::<Vec<_>>()
                    }
                    key=|(index, id)| (*index, id.clone())
                    children=move |(index, id)| {
                        view! {
                            <ItemCard
                                index=index
                                id=id
                                items=items
                                sort=list_sort
                                editing_color_id=editing_color_id
                                set_editing_color_id=set_editing_color_id
                                editing_quantity_id=editing_quantity_id
                                set_editing_quantity_id=set_editing_quantity_id
                                temp_quantity=temp_quantity
                                set_temp_quantity=set_temp_quantity
                            />
                        }
                    }
                />
            </div>

            {move || {
                confirm
                    .get()
                    .map(|op| {
                        view! {
                            <ConfirmDialog
                                op=op
                                on_confirm=Callback::new(move |_| {
                                    match op {
                                        DangerOp::ClearList => actions.clear_list.run(()),
                                        DangerOp::ClearHistory => actions.clear_history.run(()),
                                        DangerOp::FactoryReset => actions.factory_reset.run(()),
                                    }
                                    set_confirm.set(None);
                                })
                                on_cancel=Callback::new(move |_| set_confirm.set(None))
                            />
                        }
                    })
            }}

            <Show when=move || show_history.get()>
                <HistoryModal
                    sort=history_sort
                    on_close=Callback::new(move |_| set_show_history.set(false))
                />
            </Show>

            <Show when=move || show_settings.get()>
                <div class="settings-backdrop" on:click=move |_| set_show_settings.set(false)></div>
            </Show>
        </div>
    }
}

/// One draggable item card. Fields are read reactively out of the list by
/// index so in-place edits show up without re-keying the row.
#[component]
fn ItemCard(
    index: usize,
    id: String,
    items: Memo<Vec<ShoppingItem>>,
    sort: SortSignals,
    editing_color_id: ReadSignal<Option<String>>,
    set_editing_color_id: WriteSignal<Option<String>>,
    editing_quantity_id: ReadSignal<Option<String>>,
    set_editing_quantity_id: WriteSignal<Option<String>>,
    temp_quantity: ReadSignal<String>,
    set_temp_quantity: WriteSignal<String>,
) -> impl IntoView {
    let actions = use_actions();
    let id = StoredValue::new(id);

    let name = Signal::derive(move || {
        items.with(|v| v.get(index).map(|i| i.name.clone()).unwrap_or_default())
    });
    let quantity = Signal::derive(move || {
        items.with(|v| v.get(index).map(|i| i.quantity.clone()).unwrap_or_default())
    });
    let color = Signal::derive(move || {
        items.with(|v| {
            v.get(index)
                .map(|i| i.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string())
        })
    });
    let completed = Signal::derive(move || {
        items.with(|v| v.get(index).map(|i| i.completed).unwrap_or(false))
    });
    let created_at = Signal::derive(move || {
        items.with(|v| v.get(index).map(|i| i.created_at).unwrap_or(0.0))
    });

    let is_editing_quantity = Signal::derive(move || {
        id.with_value(|id| editing_quantity_id.get().as_deref() == Some(id.as_str()))
    });
    let is_editing_color = Signal::derive(move || {
        id.with_value(|id| editing_color_id.get().as_deref() == Some(id.as_str()))
    });

    let save_quantity = move || {
        actions.update.run((
            id.get_value(),
            ItemPatch {
                quantity: Some(temp_quantity.get_untracked()),
                ..ItemPatch::default()
            },
        ));
        set_editing_quantity_id.set(None);
        set_temp_quantity.set(String::new());
    };

    view! {
        <div
            class="item-card"
            class:completed=move || completed.get()
            class:dragging=move || sort.dragging_read.get() == Some(index)
            class=("drop-target", move || {
                sort.dragging_read.get().is_some() && sort.hover_read.get() == Some(index)
            })
            style=move || format!("background-color: {};", color.get())
            on:mousedown=make_on_row_mousedown(sort, index)
            on:mouseenter=make_on_row_mouseenter(sort, index)
        >
            <button
                class="item-toggle"
                on:click=move |ev| {
                    ev.stop_propagation();
                    actions.toggle.run(id.get_value());
                }
            >
                {move || if completed.get() { "✓" } else { "" }}
            </button>

            {move || {
                if is_editing_quantity.get() {
                    view! {
                        <div class="item-quantity-edit" on:click=move |ev| ev.stop_propagation()>
                            <input
                                type="text"
                                autofocus=true
                                prop:value=move || temp_quantity.get()
                                on:input=move |ev| set_temp_quantity.set(event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        save_quantity();
                                    }
                                }
                                on:blur=move |_| {
                                    if is_editing_quantity.get_untracked() {
                                        save_quantity();
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="item-body">
                            <span class="item-name">
                                {move || name.get()}
                                {move || {
                                    let q = quantity.get();
                                    (!q.is_empty()).then(|| view! { <span class="item-quantity">{q}</span> })
                                }}
                            </span>
                            <span class="item-date">{move || format_created(created_at.get())}</span>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="item-actions">
                <button
                    class="item-action"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_temp_quantity.set(quantity.get_untracked());
                        set_editing_quantity_id.set(Some(id.get_value()));
                    }
                >
                    "✎"
                </button>
                <div class="item-color-wrap">
                    <button
                        class="item-action"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if is_editing_color.get_untracked() {
                                set_editing_color_id.set(None);
                            } else {
                                set_editing_color_id.set(Some(id.get_value()));
                            }
                        }
                    >
                        "🎨"
                    </button>
                    <Show when=move || is_editing_color.get()>
                        <div class="item-color-popover" on:click=move |ev| ev.stop_propagation()>
                            <ColorSwatches
                                selected=color
                                on_pick=Callback::new(move |value| {
                                    actions.update.run((
                                        id.get_value(),
                                        ItemPatch {
                                            color: Some(value),
                                            ..ItemPatch::default()
                                        },
                                    ));
                                    set_editing_color_id.set(None);
                                })
                                compact=true
                            />
                        </div>
                    </Show>
                </div>
                <button
                    class="item-action delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        actions.delete.run(id.get_value());
                    }
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
