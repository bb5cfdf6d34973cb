//! Hit-testing primitives over laid-out node boxes.

use super::types::Role;

/// A position in surface-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	/// Rectangle at `(x, y)` with the given size.
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Inclusive on all four edges.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
	}

	/// Midpoint of the rectangle.
	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Where the segment from the centre towards `from` leaves the rectangle.
	/// Returns `from` itself when it lies inside.
	pub fn boundary_toward(&self, from: Point) -> Point {
		let c = self.center();
		let (dx, dy) = (from.x - c.x, from.y - c.y);
		let tx = if dx.abs() > f64::EPSILON {
			(self.width / 2.0) / dx.abs()
		} else {
			f64::INFINITY
		};
		let ty = if dy.abs() > f64::EPSILON {
			(self.height / 2.0) / dy.abs()
		} else {
			f64::INFINITY
		};
		let t = tx.min(ty);
		if !t.is_finite() || t >= 1.0 {
			return from;
		}
		Point::new(c.x + dx * t, c.y + dy * t)
	}
}

/// Shortest distance from `p` to the segment `a`–`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < 1e-9 {
		0.0
	} else {
		(((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (a.x + dx * t, a.y + dy * t);
	((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// A rendered node in one of the two columns.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
	pub id: String,
	pub name: String,
	pub role: Role,
	pub rect: Rect,
}

/// Anything that can enumerate rendered node boxes in surface-local space.
pub trait NodeGeometry {
	/// All boxes in document order: start column first, then end column.
	fn node_boxes(&self) -> &[NodeBox];

	/// First box containing `point`, if any.
	fn resolve_node_at(&self, point: Point) -> Option<&NodeBox> {
		self.node_boxes().iter().find(|b| b.rect.contains(point))
	}

	/// Box for the node `id` in the given column.
	fn node_box(&self, id: &str, role: Role) -> Option<&NodeBox> {
		self.node_boxes()
			.iter()
			.find(|b| b.role == role && b.id == id)
	}
}

impl NodeGeometry for Vec<NodeBox> {
	fn node_boxes(&self) -> &[NodeBox] {
		self
	}
}
