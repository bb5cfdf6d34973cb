use log::{debug, info};

use super::config::EditorConfig;
use super::geometry::{NodeGeometry, Point, distance_to_segment};
use super::gesture::{Drag, Effect, GestureContext, GestureState, PointerEvent, transition};
use super::layout::Layout;
use super::palette::Palette;
use super::render::{LinkSegment, project_links};
use super::store::LinkStore;
use super::types::{EditorStatus, GraphData, LinkType, Role};

/// Something a click can act on.
#[derive(Clone, Debug, PartialEq)]
enum ClickTarget {
	Swatch(LinkType),
	Link { source: String, target: String },
}

pub struct EditorState {
	pub config: EditorConfig,
	pub layout: Layout,
	pub links: LinkStore,
	pub palette: Palette,
	pub gesture: GestureState,
	pub width: f64,
	pub height: f64,
	/// Where the current press started; cleared when the pointer leaves.
	pressed: Option<Point>,
	/// Set when a drag resolves; the click the browser fires next is not a
	/// line or palette click.
	swallow_click: bool,
}

impl EditorState {
	pub fn new(data: &GraphData, config: EditorConfig, width: f64, height: f64) -> Self {
		Self {
			layout: Layout::new(&data.nodes, &config),
			links: LinkStore::from_links(data.links.iter().cloned()),
			palette: Palette::new(config.default_link_type),
			gesture: GestureState::Idle,
			width,
			height,
			pressed: None,
			swallow_click: false,
			config,
		}
	}

	/// Feeds a pointer event through the gesture machine. Returns whether the
	/// canvas needs redrawing.
	pub fn pointer(&mut self, event: PointerEvent) -> bool {
		match event {
			PointerEvent::Down(p) => self.pressed = Some(p),
			PointerEvent::Leave => self.pressed = None,
			PointerEvent::Move(_) | PointerEvent::Up(_) => {}
		}

		let was_dragging = self.gesture.drag().is_some();
		let ctx = GestureContext {
			geometry: &self.layout,
			selected: self.palette.current(),
			allow_self_links: self.config.allow_self_links,
		};
		let (next, effects) = transition(std::mem::take(&mut self.gesture), event, &ctx);
		self.gesture = next;
		if was_dragging && matches!(event, PointerEvent::Up(_)) {
			self.swallow_click = true;
		}

		let redraw = !effects.is_empty();
		for effect in effects {
			self.apply(effect);
		}
		redraw
	}

	fn apply(&mut self, effect: Effect) {
		match effect {
			Effect::AddLink {
				source,
				target,
				link_type,
			} => {
				let replaced = self.links.add(&source, &target, link_type);
				debug!(
					"link {} -> {} ({}){}",
					source,
					target,
					link_type,
					if replaced.is_some() { ", replaced" } else { "" }
				);
			}
			// Rendering is immediate-mode; the caller redraws everything.
			Effect::Redraw => {}
		}
	}

	/// The drag whose guide line is currently shown, if any.
	pub fn guide(&self) -> Option<&Drag> {
		self.gesture.drag()
	}

	fn click_target(&self, point: Point) -> Option<ClickTarget> {
		if let Some(link_type) = self.layout.swatch_at(point) {
			return Some(ClickTarget::Swatch(link_type));
		}
		self.link_at(point)
			.map(|(source, target)| ClickTarget::Link { source, target })
	}

	/// Handles a click on the surface. Only acts when the press and the
	/// release both hit the same palette swatch or link line.
	pub fn click(&mut self, point: Point) -> bool {
		let pressed = self.pressed.take();
		if std::mem::take(&mut self.swallow_click) {
			return false;
		}
		let Some(target) = self.click_target(point) else {
			return false;
		};
		if pressed.and_then(|p| self.click_target(p)).as_ref() != Some(&target) {
			return false;
		}
		match target {
			ClickTarget::Swatch(link_type) => {
				info!("selected link type {}", link_type);
				self.palette.select(link_type);
			}
			ClickTarget::Link { source, target } => {
				info!("removing link {} -> {}", source, target);
				self.links.remove_by_endpoints(&source, &target);
			}
		}
		true
	}

	/// Endpoints of the topmost link whose line passes under `point`.
	pub fn link_at(&self, point: Point) -> Option<(String, String)> {
		let reach = self.config.link_width / 2.0 + self.config.link_hit_tolerance;
		self.segments()
			.into_iter()
			.rev()
			.find(|seg| distance_to_segment(point, seg.from, seg.tip) <= reach)
			.map(|seg| (seg.source, seg.target))
	}

	pub fn segments(&self) -> Vec<LinkSegment> {
		project_links(&self.links, &self.layout)
	}

	/// CSS cursor for the given position.
	pub fn cursor_at(&self, point: Point) -> &'static str {
		if self.gesture.drag().is_some() {
			return "crosshair";
		}
		let over_start = self
			.layout
			.resolve_node_at(point)
			.is_some_and(|b| b.role == Role::Start);
		if over_start || self.click_target(point).is_some() {
			"pointer"
		} else {
			"default"
		}
	}

	pub fn status(&self) -> EditorStatus {
		EditorStatus {
			active: self.palette.current(),
			links: self.links.list().to_vec(),
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
