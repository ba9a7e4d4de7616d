//! Frontend Entry Point

mod ai;
mod app;
mod auth;
mod cloud;
mod components;
mod context;
mod models;
mod ops;
mod speech;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
