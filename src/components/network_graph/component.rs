use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, ResizeObserver};

use super::render;
use super::state::{LayoutParams, NetworkState};
use super::types::SelectionEvent;
use crate::content::PortfolioContent;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type PointerClosure = Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>>;

/// Canvas size follows its container; falls back to 800x600 when detached.
fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Everything the animation loop holds on to, released on unmount.
struct Simulation {
	state: Rc<RefCell<Option<NetworkState>>>,
	running: Rc<Cell<bool>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: FrameClosure,
	resize_cb: FrameClosure,
	pointer_cb: PointerClosure,
	observer: Rc<RefCell<Option<ResizeObserver>>>,
}

impl Simulation {
	fn stop(self) {
		self.running.set(false);
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *self.pointer_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
		if let Some(observer) = self.observer.borrow_mut().take() {
			observer.disconnect();
		}
		self.animate.borrow_mut().take();
		self.resize_cb.borrow_mut().take();
		self.pointer_cb.borrow_mut().take();
		self.state.borrow_mut().take();
		debug!("Network simulation stopped");
	}
}

/// Drifting network of the anchor, projects and topics.
///
/// Reads `selected` once per frame for highlighting and reports clicks on
/// the anchor or a project through `on_select`.
#[component]
pub fn NetworkGraph(
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<SelectionEvent>,
	#[prop(default = PortfolioContent::builtin())] content: PortfolioContent,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let animate: FrameClosure = Rc::new(RefCell::new(None));
	let resize_cb: FrameClosure = Rc::new(RefCell::new(None));
	let running = Rc::new(Cell::new(true));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let pointer_cb: PointerClosure = Rc::new(RefCell::new(None));
	let observer: Rc<RefCell<Option<ResizeObserver>>> = Rc::new(RefCell::new(None));

	let simulation = SendWrapper::new(Simulation {
		state: state.clone(),
		running: running.clone(),
		frame_id: frame_id.clone(),
		animate: animate.clone(),
		resize_cb: resize_cb.clone(),
		pointer_cb: pointer_cb.clone(),
		observer: observer.clone(),
	});
	on_cleanup(move || simulation.take().stop());

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			error!("No window available, network disabled");
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas has no 2d context, network disabled");
			return;
		};
		*state_init.borrow_mut() = Some(NetworkState::new(
			&content,
			w,
			h,
			LayoutParams::default(),
			&mut || js_sys::Math::random(),
		));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
			debug!("Network canvas resized to {nw}x{nh}");
		}));
		// Follows the container, not just the window.
		if let (Some(cb), Some(parent)) = (&*resize_cb.borrow(), canvas.parent_element()) {
			match ResizeObserver::new(cb.as_ref().unchecked_ref()) {
				Ok(obs) => {
					obs.observe(&parent);
					*observer.borrow_mut() = Some(obs);
				}
				Err(_) => error!("ResizeObserver unavailable, canvas keeps its initial size"),
			}
		}

		// Pointer x is tracked window-wide so leaving the canvas to the right
		// still selects the fine drift.
		let (state_pointer, canvas_pointer) = (state_init.clone(), canvas.clone());
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let (x, _) = pointer_position(&canvas_pointer, &ev);
			if let Some(ref mut s) = *state_pointer.borrow_mut() {
				s.set_pointer(x);
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, running_anim, frame_anim) = (
			state_init.clone(),
			animate.clone(),
			running.clone(),
			frame_id.clone(),
		);
		*animate.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				let active = selected.try_get_untracked().flatten();
				render::render(s, &ctx, active.as_deref());
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				frame_anim.set(
					web_sys::window()
						.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()),
				);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		let events = state_md
			.borrow()
			.as_ref()
			.map(|s| s.hit_test(x, y))
			.unwrap_or_default();
		for event in events {
			on_select.run(event);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousedown=on_mousedown
			style="display: block; cursor: pointer;"
		/>
	}
}
