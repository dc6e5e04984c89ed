//! Leptos component wrapping the snowfall canvas.
//!
//! The component creates a fixed-position, pointer-transparent canvas that
//! covers the viewport. An animation loop runs via `requestAnimationFrame`,
//! advancing and drawing the particle pool each frame; a window resize
//! handler resizes the surface and rebuilds the pool at the same count.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Math;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::SnowConfig;
use super::particles::ParticlePool;
use super::render;

/// Bundles the particle pool with the tunables the frame loop reads.
struct SnowContext {
	pool: ParticlePool,
	config: SnowConfig,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}

/// Renders an animated snowfall overlay on a full-viewport canvas element.
///
/// The canvas sits above the host content and never intercepts pointer
/// input. The pool is seeded once on mount; resizing the window resizes the
/// surface and rebuilds the pool. The frame loop reschedules itself forever;
/// there is no stop operation short of page unload.
#[component]
pub fn SnowfallCanvas(#[prop(default = SnowConfig::default())] config: SnowConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SnowContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let config = config.clone();
		let seed = (Math::random() * u32::MAX as f64) as u32;
		*context_init.borrow_mut() = Some(SnowContext {
			pool: ParticlePool::new(&config, w, h, seed),
			config,
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.pool.resize(&c.config, nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.pool.update(&c.config);
				render::render(&c.pool, &ctx, &c.config);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="snowfall-canvas"
			style="display: block; position: fixed; top: 0; left: 0; z-index: 1000; pointer-events: none; background-color: transparent;"
		/>
	}
}
