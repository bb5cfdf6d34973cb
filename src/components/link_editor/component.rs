use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::EditorConfig;
use super::error::CanvasError;
use super::geometry::Point;
use super::gesture::PointerEvent;
use super::render;
use super::state::EditorState;
use super::types::{EditorStatus, GraphData};

struct Surface {
	state: EditorState,
	ctx: CanvasRenderingContext2d,
}

type SharedSurface = Rc<RefCell<Option<Surface>>>;

fn browser_window() -> Result<Window, CanvasError> {
	web_sys::window().ok_or(CanvasError::NoWindow)
}

fn window_size(window: &Window) -> Result<(f64, f64), CanvasError> {
	let w = window
		.inner_width()?
		.as_f64()
		.ok_or(CanvasError::BadDimension("innerWidth"))?;
	let h = window
		.inner_height()?
		.as_f64()
		.ok_or(CanvasError::BadDimension("innerHeight"))?;
	Ok((w, h))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NoContext)
}

fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn surface_size(
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> Result<(f64, f64), CanvasError> {
	if fullscreen {
		return window_size(&browser_window()?);
	}
	Ok((
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(900.0)
		}),
	))
}

/// Runs `f` against the editor at the event's canvas-local position and
/// redraws when it reports a change. Returns the new status in that case.
fn dispatch(
	surface: &SharedSurface,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	cursor: RwSignal<&'static str>,
	ev: &MouseEvent,
	f: impl FnOnce(&mut EditorState, Point) -> bool,
) -> Option<EditorStatus> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let p = local_point(&canvas, ev);
	let mut guard = surface.borrow_mut();
	let s = guard.as_mut()?;
	let changed = f(&mut s.state, p);
	if changed {
		render::render(&s.state, &s.ctx);
	}
	cursor.set(s.state.cursor_at(p));
	changed.then(|| s.state.status())
}

#[component]
pub fn LinkEditorCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] on_change: Option<Callback<EditorStatus>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cursor = RwSignal::new("default");
	let surface: SharedSurface = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (surface_init, resize_cb_init) = (surface.clone(), resize_cb.clone());

	let notify = move |status: Option<EditorStatus>| {
		if let (Some(status), Some(cb)) = (status, on_change) {
			cb.run(status);
		}
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let setup = || -> Result<EditorStatus, CanvasError> {
			let (w, h) = surface_size(&canvas, fullscreen, width, height)?;
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			let ctx = context_2d(&canvas)?;
			let state = EditorState::new(&data.get(), config.clone(), w, h);
			render::render(&state, &ctx);
			let status = state.status();
			*surface_init.borrow_mut() = Some(Surface { state, ctx });
			Ok(status)
		};
		match setup() {
			Ok(status) => {
				info!("link editor ready with {} links", status.links.len());
				notify(Some(status));
			}
			Err(e) => {
				error!("link editor setup failed: {e}");
				return;
			}
		}

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (surface_resize, canvas_resize) = (surface_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let (nw, nh) = match browser_window().and_then(|w| window_size(&w)) {
					Ok(size) => size,
					Err(e) => {
						error!("resize failed: {e}");
						return;
					}
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *surface_resize.borrow_mut() {
					s.state.resize(nw, nh);
					render::render(&s.state, &s.ctx);
				}
			}));
			if let (Ok(window), Some(cb)) = (browser_window(), resize_cb_init.borrow().as_ref()) {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let surface_md = surface.clone();
	let on_mousedown = move |ev: MouseEvent| {
		dispatch(&surface_md, canvas_ref, cursor, &ev, |s, p| {
			s.pointer(PointerEvent::Down(p))
		});
	};

	let surface_mm = surface.clone();
	let on_mousemove = move |ev: MouseEvent| {
		dispatch(&surface_mm, canvas_ref, cursor, &ev, |s, p| {
			s.pointer(PointerEvent::Move(p))
		});
	};

	let surface_mu = surface.clone();
	let on_mouseup = move |ev: MouseEvent| {
		notify(dispatch(&surface_mu, canvas_ref, cursor, &ev, |s, p| {
			s.pointer(PointerEvent::Up(p))
		}));
	};

	let surface_ml = surface.clone();
	let on_mouseleave = move |ev: MouseEvent| {
		dispatch(&surface_ml, canvas_ref, cursor, &ev, |s, _| {
			s.pointer(PointerEvent::Leave)
		});
	};

	let surface_cl = surface.clone();
	let on_click = move |ev: MouseEvent| {
		notify(dispatch(&surface_cl, canvas_ref, cursor, &ev, |s, p| s.click(p)));
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="link-editor-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			style=move || format!("display: block; cursor: {};", cursor.get())
		/>
	}
}
