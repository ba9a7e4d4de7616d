//! List Mutations
//!
//! Pure state transitions for the shopping lists and the history ledger.
//! Every function maps `(previous state, arguments)` to a fresh state;
//! `None` means no-op (nothing to re-render, nothing to sync). Operations on
//! "the current list" are no-ops while no site is selected.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{HistoryItem, NewItem, ShoppingItem, DEFAULT_COLOR};
use crate::store::AppState;

/// The history ledger keeps at most this many entries
pub const HISTORY_CAP: usize = 100;

/// Field patch for a single item; `None` fields are left as they are
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub color: Option<String>,
    pub quantity: Option<String>,
}

/// Move `name` to the front of the ledger, dropping any older entry with the
/// same name
fn touch_history(history: &mut Vec<HistoryItem>, name: &str, color: &str) {
    history.retain(|h| h.name != name);
    history.insert(
        0,
        HistoryItem {
            name: name.to_string(),
            color: color.to_string(),
        },
    );
}

/// Add a batch of items to the front of the current list, preserving batch
/// order, and fold the batch into the history ledger. Blank names are
/// filtered out; an entirely blank batch is a no-op.
pub fn add_items(state: &AppState, batch: &[NewItem]) -> Option<AppState> {
    let loc = state.current_location?;

    let new_items: Vec<ShoppingItem> = batch
        .iter()
        .filter(|d| !d.name.trim().is_empty())
        .map(|d| ShoppingItem {
            id: Uuid::new_v4().to_string(),
            name: d.name.trim().to_string(),
            completed: false,
            created_at: Utc::now().timestamp_millis() as f64,
            color: if d.color.is_empty() {
                DEFAULT_COLOR.to_string()
            } else {
                d.color.clone()
            },
            quantity: d.quantity.clone(),
        })
        .collect();

    if new_items.is_empty() {
        return None;
    }

    let mut next = state.clone();
    for item in &new_items {
        touch_history(&mut next.master_history, &item.name, &item.color);
    }
    next.master_history.truncate(HISTORY_CAP);
    let list = next.lists.get_mut(loc);
    let tail = std::mem::take(list);
    *list = new_items;
    list.extend(tail);
    Some(next)
}

/// Single-item convenience over [`add_items`]
pub fn add_item(state: &AppState, name: &str, color: &str, quantity: &str) -> Option<AppState> {
    add_items(
        state,
        &[NewItem {
            name: name.to_string(),
            color: color.to_string(),
            quantity: quantity.to_string(),
        }],
    )
}

/// Patch fields of one item on the current list
pub fn update_item(state: &AppState, id: &str, patch: ItemPatch) -> Option<AppState> {
    let loc = state.current_location?;
    let mut next = state.clone();
    if let Some(item) = next.lists.get_mut(loc).iter_mut().find(|i| i.id == id) {
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        if let Some(color) = patch.color {
            item.color = color;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
    }
    Some(next)
}

/// Flip the completed flag of one item; unknown ids are a no-op
pub fn toggle_item(state: &AppState, id: &str) -> Option<AppState> {
    let loc = state.current_location?;
    let completed = state.lists.get(loc).iter().find(|i| i.id == id)?.completed;
    update_item(
        state,
        id,
        ItemPatch {
            completed: Some(!completed),
            ..ItemPatch::default()
        },
    )
}

/// Remove one item from the current list
pub fn delete_item(state: &AppState, id: &str) -> Option<AppState> {
    let loc = state.current_location?;
    let mut next = state.clone();
    next.lists.get_mut(loc).retain(|i| i.id != id);
    Some(next)
}

/// Replace the current list with a caller-supplied permutation. The caller is
/// trusted to pass a true reordering; the only caller is the drag control.
pub fn reorder_items(state: &AppState, items: Vec<ShoppingItem>) -> Option<AppState> {
    let loc = state.current_location?;
    let mut next = state.clone();
    *next.lists.get_mut(loc) = items;
    Some(next)
}

/// Empty the current list; a no-op when it is already empty
pub fn clear_list(state: &AppState) -> Option<AppState> {
    let loc = state.current_location?;
    if state.lists.get(loc).is_empty() {
        return None;
    }
    let mut next = state.clone();
    next.lists.get_mut(loc).clear();
    Some(next)
}

/// Replace the ledger with a caller-supplied permutation (drag control)
pub fn reorder_history(state: &AppState, history: Vec<HistoryItem>) -> Option<AppState> {
    let mut next = state.clone();
    next.master_history = history;
    Some(next)
}

/// Drop every ledger entry with this name (at most one, by the dedup
/// invariant)
pub fn delete_history_entry(state: &AppState, name: &str) -> Option<AppState> {
    let mut next = state.clone();
    next.master_history.retain(|h| h.name != name);
    Some(next)
}

/// Empty the history ledger
pub fn clear_history(state: &AppState) -> Option<AppState> {
    if state.master_history.is_empty() {
        return None;
    }
    let mut next = state.clone();
    next.master_history.clear();
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationId;

    fn state_at(loc: LocationId) -> AppState {
        AppState {
            current_location: Some(loc),
            ..AppState::default()
        }
    }

    fn names(state: &AppState, loc: LocationId) -> Vec<&str> {
        state.lists.get(loc).iter().map(|i| i.name.as_str()).collect()
    }

    fn named(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            ..NewItem::default()
        }
    }

    #[test]
    fn test_add_single_item() {
        let state = state_at(LocationId::Site1);
        let next = add_item(&state, "Bread", "#ffecf0", "2 loaves").unwrap();

        let list = next.lists.get(LocationId::Site1);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Bread");
        assert!(!list[0].completed);
        assert_eq!(list[0].color, "#ffecf0");
        assert_eq!(list[0].quantity, "2 loaves");

        assert_eq!(next.master_history.len(), 1);
        assert_eq!(next.master_history[0].name, "Bread");
        assert_eq!(next.master_history[0].color, "#ffecf0");
    }

    #[test]
    fn test_add_blank_name_is_noop() {
        let state = state_at(LocationId::Site1);
        assert!(add_item(&state, "", "#ffffff", "").is_none());
        assert!(add_item(&state, "   ", "#ffffff", "").is_none());
    }

    #[test]
    fn test_add_trims_name() {
        let state = state_at(LocationId::Site1);
        let next = add_item(&state, "  たまご  ", "#ffffff", "").unwrap();
        assert_eq!(next.lists.get(LocationId::Site1)[0].name, "たまご");
    }

    #[test]
    fn test_add_without_location_is_noop() {
        let state = AppState::default();
        assert!(add_item(&state, "Bread", "#ffffff", "").is_none());
        assert!(toggle_item(&state, "x").is_none());
        assert!(delete_item(&state, "x").is_none());
        assert!(clear_list(&state).is_none());
    }

    #[test]
    fn test_add_many_filters_blanks_and_keeps_order() {
        let state = state_at(LocationId::Site1);
        let batch = vec![named("A"), named("B"), named("")];
        let next = add_items(&state, &batch).unwrap();
        assert_eq!(names(&next, LocationId::Site1), vec!["A", "B"]);
    }

    #[test]
    fn test_add_many_prepends_batch() {
        let state = state_at(LocationId::Site1);
        let state = add_item(&state, "Old", "#ffffff", "").unwrap();
        let next = add_items(&state, &[named("A"), named("B")]).unwrap();
        assert_eq!(names(&next, LocationId::Site1), vec!["A", "B", "Old"]);
    }

    #[test]
    fn test_history_dedup_most_recent_wins() {
        let state = state_at(LocationId::Site1);
        let batch = vec![
            named("Milk"),
            named("Eggs"),
            named("Milk"),
        ];
        let next = add_items(&state, &batch).unwrap();

        let history: Vec<&str> = next.master_history.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(history, vec!["Milk", "Eggs"]);

        // Same outcome when added sequentially
        let mut state = state_at(LocationId::Site1);
        for name in ["Milk", "Eggs", "Milk"] {
            state = add_item(&state, name, "#ffffff", "").unwrap();
        }
        let history: Vec<&str> = state.master_history.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(history, vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_history_cap() {
        let mut state = state_at(LocationId::Site1);
        for i in 0..HISTORY_CAP {
            state = add_item(&state, &format!("item-{i}"), "#ffffff", "").unwrap();
        }
        assert_eq!(state.master_history.len(), HISTORY_CAP);
        assert_eq!(state.master_history.last().unwrap().name, "item-0");

        // The 101st distinct name drops the oldest entry
        state = add_item(&state, "one-more", "#ffffff", "").unwrap();
        assert_eq!(state.master_history.len(), HISTORY_CAP);
        assert_eq!(state.master_history[0].name, "one-more");
        assert_eq!(state.master_history.last().unwrap().name, "item-1");
    }

    #[test]
    fn test_toggle_and_update() {
        let state = state_at(LocationId::Site1);
        let state = add_item(&state, "Bread", "#ffffff", "").unwrap();
        let id = state.lists.get(LocationId::Site1)[0].id.clone();

        let state = toggle_item(&state, &id).unwrap();
        assert!(state.lists.get(LocationId::Site1)[0].completed);
        let state = toggle_item(&state, &id).unwrap();
        assert!(!state.lists.get(LocationId::Site1)[0].completed);

        let state = update_item(
            &state,
            &id,
            ItemPatch {
                color: Some("#e3f2fd".to_string()),
                quantity: Some("3個".to_string()),
                ..ItemPatch::default()
            },
        )
        .unwrap();
        let item = &state.lists.get(LocationId::Site1)[0];
        assert_eq!(item.color, "#e3f2fd");
        assert_eq!(item.quantity, "3個");
        assert_eq!(item.name, "Bread");
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let state = state_at(LocationId::Site1);
        let state = add_item(&state, "Bread", "#ffffff", "").unwrap();
        assert!(toggle_item(&state, "no-such-id").is_none());
    }

    #[test]
    fn test_delete_item() {
        let state = state_at(LocationId::Site1);
        let state = add_items(&state, &[named("A"), named("B")]).unwrap();
        let id = state.lists.get(LocationId::Site1)[0].id.clone();

        let state = delete_item(&state, &id).unwrap();
        assert_eq!(names(&state, LocationId::Site1), vec!["B"]);
        // History keeps both entries; deleting a list item is not a ledger op
        assert_eq!(state.master_history.len(), 2);
    }

    #[test]
    fn test_operation_sequence_composes() {
        let mut state = state_at(LocationId::Site2);
        state = add_items(
            &state,
            &[named("A"), named("B"), named("C")],
        )
        .unwrap();

        let b_id = state.lists.get(LocationId::Site2)[1].id.clone();
        state = toggle_item(&state, &b_id).unwrap();

        let a_id = state.lists.get(LocationId::Site2)[0].id.clone();
        state = delete_item(&state, &a_id).unwrap();

        let reversed: Vec<_> = state.lists.get(LocationId::Site2).iter().rev().cloned().collect();
        state = reorder_items(&state, reversed).unwrap();

        assert_eq!(names(&state, LocationId::Site2), vec!["C", "B"]);
        let survivors = state.lists.get(LocationId::Site2);
        assert!(!survivors[0].completed);
        assert!(survivors[1].completed);
        // The other site is untouched throughout
        assert!(state.lists.get(LocationId::Site1).is_empty());
    }

    #[test]
    fn test_clear_list_only_touches_current_site() {
        let state = state_at(LocationId::Site1);
        let state = add_items(
            &state,
            &[named("A"), named("B"), named("C")],
        )
        .unwrap();
        let mut other = state.clone();
        other.current_location = Some(LocationId::Site2);
        let other = add_item(&other, "X", "#ffffff", "").unwrap();

        let mut back = other.clone();
        back.current_location = Some(LocationId::Site1);
        let cleared = clear_list(&back).unwrap();

        assert!(cleared.lists.get(LocationId::Site1).is_empty());
        assert_eq!(names(&cleared, LocationId::Site2), vec!["X"]);
        assert_eq!(cleared.master_history.len(), 4);
    }

    #[test]
    fn test_clear_empty_list_is_noop() {
        let state = state_at(LocationId::Site1);
        assert!(clear_list(&state).is_none());
    }

    #[test]
    fn test_history_delete_and_reorder() {
        let state = state_at(LocationId::Site1);
        let state = add_items(
            &state,
            &[named("A"), named("B"), named("C")],
        )
        .unwrap();

        let state = delete_history_entry(&state, "B").unwrap();
        let history: Vec<&str> = state.master_history.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(history, vec!["C", "A"]);

        let reversed: Vec<_> = state.master_history.iter().rev().cloned().collect();
        let state = reorder_history(&state, reversed).unwrap();
        let history: Vec<&str> = state.master_history.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(history, vec!["A", "C"]);
    }

    #[test]
    fn test_clear_history() {
        let state = state_at(LocationId::Site1);
        assert!(clear_history(&state).is_none());

        let state = add_item(&state, "A", "#ffffff", "").unwrap();
        let state = clear_history(&state).unwrap();
        assert!(state.master_history.is_empty());
        // The list itself is untouched
        assert_eq!(names(&state, LocationId::Site1), vec!["A"]);
    }
}
