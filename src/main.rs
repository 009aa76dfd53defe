//! Schedule Builder Entry Point
//!
//! Browser front-end for the portal's weekly schedule builder.

mod api;
mod app;
mod components;
mod context;
mod dialog;
mod models;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
