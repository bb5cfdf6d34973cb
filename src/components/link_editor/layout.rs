//! Fixed two-column layout plus the palette row.

use super::config::EditorConfig;
use super::geometry::{NodeBox, NodeGeometry, Point, Rect};
use super::types::{GraphNode, LinkType, Role};

/// A clickable palette entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
	pub link_type: LinkType,
	pub center: Point,
	pub radius: f64,
}

impl Swatch {
	/// Inclusive of the rim.
	pub fn contains(&self, p: Point) -> bool {
		let (dx, dy) = (p.x - self.center.x, p.y - self.center.y);
		dx * dx + dy * dy <= self.radius * self.radius
	}
}

/// Node boxes for both columns and the palette swatches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	boxes: Vec<NodeBox>,
	swatches: Vec<Swatch>,
}

impl Layout {
	/// Stacks `nodes` top to bottom in each column and lays the palette out
	/// in a row.
	pub fn new(nodes: &[GraphNode], config: &EditorConfig) -> Self {
		let column = |role: Role, x: f64| {
			nodes.iter().enumerate().map(move |(i, node)| NodeBox {
				id: node.id.clone(),
				name: node.name.clone(),
				role,
				rect: Rect::new(
					x,
					config.column_top + i as f64 * (config.node_height + config.node_spacing),
					config.node_width,
					config.node_height,
				),
			})
		};
		let boxes = column(Role::Start, config.start_column_x)
			.chain(column(Role::End, config.end_column_x))
			.collect();

		let pitch = config.swatch_radius * 2.0 + config.swatch_spacing;
		let swatches = LinkType::ALL
			.iter()
			.enumerate()
			.map(|(i, &link_type)| Swatch {
				link_type,
				center: Point::new(config.palette_x + i as f64 * pitch, config.palette_y),
				radius: config.swatch_radius,
			})
			.collect();

		Self { boxes, swatches }
	}

	/// Swatches in palette order.
	pub fn swatches(&self) -> &[Swatch] {
		&self.swatches
	}

	/// Link type of the swatch under `point`.
	pub fn swatch_at(&self, point: Point) -> Option<LinkType> {
		self.swatches
			.iter()
			.find(|s| s.contains(point))
			.map(|s| s.link_type)
	}
}

impl NodeGeometry for Layout {
	fn node_boxes(&self) -> &[NodeBox] {
		&self.boxes
	}
}
