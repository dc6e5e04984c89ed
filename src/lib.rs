//! snowfall-overlay: animated snowfall effect for web pages.
//!
//! This crate provides a WASM-based overlay component that renders a
//! perpetual snowfall on a full-viewport, pointer-transparent canvas above
//! the host content, driven by the browser's animation-frame scheduler.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::snowfall::{Color, SnowConfig, SnowfallCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("snowfall: logging initialized");
}

/// Load tunables from a script element with id="snow-config".
/// Expected format: JSON with any subset of the [`SnowConfig`] fields.
fn load_snow_config() -> Option<SnowConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("snow-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SnowConfig>(&json_text) {
		Ok(config) => {
			info!("snowfall: loaded config ({} flakes)", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("snowfall: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads tunables from the DOM and renders the snowfall overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_snow_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Snowfall" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SnowfallCanvas config=config />
	}
}

/// Mount the overlay application, deferring until a document body exists.
///
/// When the body is not yet attachable the attempt is logged and retried once
/// the window `load` event fires. Each failed attempt registers a fresh
/// listener and retries are not otherwise bounded.
pub fn start() {
	let has_body = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
		.is_some();

	if !has_body {
		error!("snowfall: document.body is not yet available, retrying on window load");
		if let Some(window) = web_sys::window() {
			let retry = Closure::<dyn FnMut()>::new(|| start());
			let _ =
				window.add_event_listener_with_callback("load", retry.as_ref().unchecked_ref());
			// The listener stays registered for the page lifetime.
			retry.forget();
		}
		return;
	}

	mount_to_body(|| view! { <App /> });
}
