use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{NodeGeometry, Point};
use super::palette::Palette;
use super::state::EditorState;
use super::store::LinkStore;
use super::types::{LinkType, Role};

/// Screen geometry of one stored link, keyed by `(source, target)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSegment {
	pub source: String,
	pub target: String,
	pub link_type: LinkType,
	/// Centre of the source box.
	pub from: Point,
	/// Centre of the target box; the part inside the box is covered by it.
	pub to: Point,
	/// Arrow tip, on the border of the target box.
	pub tip: Point,
}

/// Projects the store onto the layout in list order. Links whose endpoints are
/// not laid out are skipped.
pub fn project_links<G: NodeGeometry + ?Sized>(store: &LinkStore, geometry: &G) -> Vec<LinkSegment> {
	store
		.list()
		.iter()
		.filter_map(|link| {
			let source = geometry.node_box(&link.source, Role::Start);
			let target = geometry.node_box(&link.target, Role::End);
			let (Some(source), Some(target)) = (source, target) else {
				warn!(
					"skipping link {} -> {}: endpoint not laid out",
					link.source, link.target
				);
				return None;
			};
			let from = source.rect.center();
			Some(LinkSegment {
				source: link.source.clone(),
				target: link.target.clone(),
				link_type: link.link_type,
				from,
				to: target.rect.center(),
				tip: target.rect.boundary_toward(from),
			})
		})
		.collect()
}

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.config.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_palette(state, ctx);
	draw_guide(state, ctx);
}

fn draw_arrow(ctx: &CanvasRenderingContext2d, from: Point, tip: Point, size: f64, color: &str) {
	let (dx, dy) = (tip.x - from.x, tip.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let (back_x, back_y) = (tip.x - ux * size, tip.y - uy * size);
	let (px, py) = (-uy * size * 0.6, ux * size * 0.6);
	ctx.set_fill_style_str(color);
	ctx.begin_path();
	ctx.move_to(tip.x, tip.y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_links(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let width = state.config.link_width;
	for seg in state.segments() {
		let color = Palette::color_of(seg.link_type);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(seg.from.x, seg.from.y);
		ctx.line_to(seg.to.x, seg.to.y);
		ctx.stroke();
		draw_arrow(ctx, seg.from, seg.tip, width * 2.5, color);
	}
}

fn draw_nodes(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	ctx.set_font(&format!("{}px sans-serif", config.label_font_px));
	for node in state.layout.node_boxes() {
		let fill = match node.role {
			Role::Start => &config.start_fill,
			Role::End => &config.end_fill,
		};
		let r = node.rect;
		ctx.set_fill_style_str(fill);
		ctx.fill_rect(r.x, r.y, r.width, r.height);
		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&node.name, r.x + config.label_dx, r.y + config.label_dy);
	}
}

fn draw_palette(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	for swatch in state.layout.swatches() {
		let (x, y) = (swatch.center.x, swatch.center.y);
		ctx.begin_path();
		let _ = ctx.arc(x, y, swatch.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(Palette::color_of(swatch.link_type));
		ctx.fill();

		if state.palette.is_active(swatch.link_type) {
			ctx.set_stroke_style_str(&config.active_ring_color);
			ctx.set_line_width(config.active_ring_width);
			ctx.stroke();
		}
	}
}

fn draw_guide(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let Some(guide) = state.guide() else {
		return;
	};
	let width = state.config.link_width;
	let color = Palette::color_of(guide.link_type);
	let (dash, gap) = (width * 2.0, width);

	ctx.set_stroke_style_str(color);
	ctx.set_line_width(width);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.begin_path();
	ctx.move_to(guide.anchor.x, guide.anchor.y);
	ctx.line_to(guide.pointer.x, guide.pointer.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	draw_arrow(ctx, guide.anchor, guide.pointer, width * 2.5, color);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::link_editor::config::EditorConfig;
	use crate::components::link_editor::layout::Layout;
	use crate::components::link_editor::types::GraphNode;

	fn layout() -> Layout {
		let nodes = vec![GraphNode::new("a", "A"), GraphNode::new("b", "B")];
		Layout::new(&nodes, &EditorConfig::default())
	}

	#[test]
	fn segments_join_box_centres() {
		let mut store = LinkStore::new();
		store.add("a", "b", LinkType::Necessary);
		let segs = project_links(&store, &layout());

		assert_eq!(segs.len(), 1);
		let seg = &segs[0];
		assert_eq!((seg.source.as_str(), seg.target.as_str()), ("a", "b"));
		assert_eq!(seg.from, Point::new(150.0, 50.0));
		assert_eq!(seg.to, Point::new(550.0, 160.0));
		assert_eq!(seg.link_type, LinkType::Necessary);
	}

	#[test]
	fn arrow_tip_sits_on_target_border() {
		let mut store = LinkStore::new();
		store.add("a", "a", LinkType::Useful);
		let segs = project_links(&store, &layout());
		let seg = &segs[0];
		// Horizontal link, tip on the left edge of the end box.
		assert_eq!(seg.tip, Point::new(500.0, 50.0));
	}

	#[test]
	fn dangling_links_are_skipped() {
		let mut store = LinkStore::new();
		store.add("a", "zz", LinkType::Useful);
		store.add("zz", "b", LinkType::Useful);
		store.add("b", "a", LinkType::Synonym);

		let segs = project_links(&store, &layout());
		let keys: Vec<_> = segs
			.iter()
			.map(|s| (s.source.as_str(), s.target.as_str()))
			.collect();
		assert_eq!(keys, vec![("b", "a")]);
	}
}
