//! Application Root
//!
//! Owns the state store, the cloud subscription, and every mutation
//! dispatcher. Each successful mutation replaces the local state and fires a
//! best-effort whole-document write; the standing subscription replaces the
//! shared branches on every remote snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{apply_move, bind_global_handlers, create_sort_signals};
use reactive_stores::Store;

use crate::auth;
use crate::cloud::{self, Snapshot};
use crate::components::{LocationSelector, LoginScreen, ShoppingListView};
use crate::context::{AppContext, ListActions};
use crate::models::{NewItem, SharedDocument};
use crate::ops;
use crate::store::{
    store_apply_document, store_replace, store_snapshot, AppState, AppStateStoreFields,
};

/// Fire-and-forget whole-document write. Failures are logged and dropped;
/// the optimistic local state stands until the next successful round-trip.
fn push_document(ctx: AppContext, doc: SharedDocument) {
    if !cloud::available() {
        return;
    }
    ctx.set_syncing(true);
    spawn_local(async move {
        if let Err(err) = cloud::write_document(&doc).await {
            web_sys::console::error_1(&format!("保存失敗: {err}").into());
        }
        ctx.set_syncing(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (unlocked, set_unlocked) = signal(auth::is_unlocked());

    let ctx = AppContext::new(signal(false));
    provide_context(ctx);

    // Apply a pure state transition: replace local state, then sync.
    // `None` means the operation was a no-op.
    let dispatch = move |next: Option<AppState>| {
        let Some(next) = next else { return };
        let doc = next.document();
        store_replace(&store, next);
        push_document(ctx, doc);
    };

    let actions = ListActions {
        set_location: Callback::new(move |loc| store.current_location().set(loc)),
        add: Callback::new(move |input: NewItem| {
            dispatch(ops::add_items(&store_snapshot(&store), std::slice::from_ref(&input)));
        }),
        add_many: Callback::new(move |batch: Vec<NewItem>| {
            dispatch(ops::add_items(&store_snapshot(&store), &batch));
        }),
        update: Callback::new(move |(id, patch): (String, ops::ItemPatch)| {
            dispatch(ops::update_item(&store_snapshot(&store), &id, patch));
        }),
        toggle: Callback::new(move |id: String| {
            dispatch(ops::toggle_item(&store_snapshot(&store), &id));
        }),
        delete: Callback::new(move |id: String| {
            dispatch(ops::delete_item(&store_snapshot(&store), &id));
        }),
        reorder: Callback::new(move |items| {
            dispatch(ops::reorder_items(&store_snapshot(&store), items));
        }),
        clear_list: Callback::new(move |_| {
            dispatch(ops::clear_list(&store_snapshot(&store)));
        }),
        reorder_history: Callback::new(move |history| {
            dispatch(ops::reorder_history(&store_snapshot(&store), history));
        }),
        delete_history: Callback::new(move |name: String| {
            dispatch(ops::delete_history_entry(&store_snapshot(&store), &name));
        }),
        clear_history: Callback::new(move |_| {
            dispatch(ops::clear_history(&store_snapshot(&store)));
        }),
        factory_reset: Callback::new(move |_| {
            let next = AppState::default();
            let doc = next.document();
            store_replace(&store, next);
            push_document(ctx, doc);
            auth::clear_session();
            set_unlocked.set(false);
        }),
    };
    provide_context(actions);

    // Drag controllers for the item list and the history modal. Bound once;
    // App itself never remounts.
    let list_sort = create_sort_signals();
    bind_global_handlers(list_sort, move |from, to| {
        let state = store_snapshot(&store);
        let Some(loc) = state.current_location else { return };
        actions.reorder.run(apply_move(state.lists.get(loc), from, to));
    });

    let history_sort = create_sort_signals();
    bind_global_handlers(history_sort, move |from, to| {
        let history = store.master_history().get_untracked();
        actions.reorder_history.run(apply_move(&history, from, to));
    });

    // Standing subscription on the shared document, opened once after
    // unlock. Every snapshot replaces lists and history verbatim and leaves
    // the current location alone; a missing document is bootstrapped with
    // the empty default.
    let subscribed = StoredValue::new(false);
    Effect::new(move |_| {
        if !unlocked.get() || subscribed.get_value() {
            return;
        }
        if !cloud::available() {
            return;
        }
        subscribed.set_value(true);
        ctx.set_syncing(true);
        cloud::subscribe(
            move |snapshot| match snapshot {
                Snapshot::Document(doc) => {
                    store_apply_document(&store, doc);
                    ctx.set_syncing(false);
                }
                Snapshot::Missing => {
                    push_document(ctx, SharedDocument::default());
                }
            },
            move |err| {
                web_sys::console::error_1(&format!("同期エラー: {err}").into());
                ctx.set_syncing(false);
            },
        );
    });

    view! {
        <div class="app-shell">
            {move || {
                if !unlocked.get() {
                    view! { <LoginScreen on_login=Callback::new(move |_| set_unlocked.set(true)) /> }
                        .into_any()
                } else {
                    match store.current_location().get() {
                        None => {
                            view! {
                                <LocationSelector on_select=Callback::new(move |loc| {
                                    actions.set_location.run(Some(loc));
                                }) />
                            }
                                .into_any()
                        }
                        Some(loc) => {
                            view! {
                                <ShoppingListView
                                    location=loc
                                    list_sort=list_sort
                                    history_sort=history_sort
                                />
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
