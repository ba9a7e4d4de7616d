//! Flat-List Sort Utilities
//!
//! Pointer-drag reordering for flat vertical lists in Leptos.
//! Uses a movement threshold to distinguish click from drag, and reports
//! drops as (from, to) index pairs.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels before a pending press becomes a drag
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks stay suppressed after a drop, in milliseconds
const CLICK_SUPPRESS_MS: u32 = 120;

/// Sort state signals for one sortable list
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Row index currently being dragged (None = not dragging)
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Row index the pointer is currently over while dragging
    pub hover_read: ReadSignal<Option<usize>>,
    pub hover_write: WriteSignal<Option<usize>>,
    /// Row index pressed down but not yet past the threshold
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Press position for threshold detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// True for a short window after a drop, so click handlers can bail out
    pub just_ended_read: ReadSignal<bool>,
    pub just_ended_write: WriteSignal<bool>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (hover_read, hover_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (just_ended_read, just_ended_write) = signal(false);
    SortSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        just_ended_read,
        just_ended_write,
    }
}

/// Move one element of `items` from index `from` to index `to`,
/// shifting everything in between (remove-then-insert semantics).
/// Out-of-range indices return the input order unchanged.
pub fn apply_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next: Vec<T> = items.to_vec();
    if from >= next.len() || to >= next.len() {
        return next;
    }
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// End the current drag and open the click-suppression window
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_write.set(None);
    sort.hover_write.set(None);
    sort.pending_write.set(None);
    sort.just_ended_write.set(true);

    let clear = sort.just_ended_write;
    Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Mousedown handler for a sortable row: records a pending press.
/// Presses on inputs and buttons inside the row are ignored so that
/// row controls keep working.
pub fn make_on_row_mousedown(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        sort.pending_write.set(Some(index));
        sort.start_x_write.set(ev.client_x());
        sort.start_y_write.set(ev.client_y());
    }
}

/// Mouseenter handler for a sortable row: tracks the drop position
pub fn make_on_row_mouseenter(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.hover_write.set(Some(index));
        }
    }
}

fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();
        if pending.is_some() && sort.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - sort.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - sort.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind the document-level listeners that drive one sortable list.
/// Call once per `SortSignals` bundle. `on_drop(from, to)` fires only for
/// real drags that end over a row other than where they started.
pub fn bind_global_handlers<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = sort.dragging_read.get_untracked();
        let hover = sort.hover_read.get_untracked();

        sort.pending_write.set(None);

        if let (Some(from), Some(to)) = (dragging, hover) {
            end_drag(&sort);
            if from != to {
                on_drop(from, to);
            }
        } else if dragging.is_some() {
            end_drag(&sort);
        } else {
            // Plain click; let it through untouched
            sort.hover_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(sort);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(apply_move(&items, 0, 2), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(apply_move(&items, 3, 1), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_to_same_index_is_identity() {
        let items = vec![1, 2, 3];
        assert_eq!(apply_move(&items, 1, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_identity() {
        let items = vec![1, 2, 3];
        assert_eq!(apply_move(&items, 5, 0), vec![1, 2, 3]);
        assert_eq!(apply_move(&items, 0, 9), vec![1, 2, 3]);
    }
}
