use super::types::LinkType;

/// Layout and style settings for the editor canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub node_width: f64,
	pub node_height: f64,
	/// Vertical gap between stacked node boxes.
	pub node_spacing: f64,
	pub start_column_x: f64,
	pub end_column_x: f64,
	pub column_top: f64,
	pub start_fill: String,
	pub end_fill: String,
	pub label_font_px: f64,
	pub label_dx: f64,
	pub label_dy: f64,
	pub link_width: f64,
	/// Extra pixels around a line that still count as clicking it.
	pub link_hit_tolerance: f64,
	pub swatch_radius: f64,
	pub swatch_spacing: f64,
	pub palette_x: f64,
	pub palette_y: f64,
	pub active_ring_color: String,
	pub active_ring_width: f64,
	pub background: String,
	pub default_link_type: LinkType,
	/// Permit a start node to link to its own end box.
	pub allow_self_links: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			node_width: 100.0,
			node_height: 100.0,
			node_spacing: 10.0,
			start_column_x: 100.0,
			end_column_x: 500.0,
			column_top: 0.0,
			start_fill: "red".into(),
			end_fill: "blue".into(),
			label_font_px: 30.0,
			label_dx: 40.0,
			label_dy: 60.0,
			link_width: 8.0,
			link_hit_tolerance: 4.0,
			swatch_radius: 20.0,
			swatch_spacing: 10.0,
			palette_x: 250.0,
			palette_y: 800.0,
			active_ring_color: "red".into(),
			active_ring_width: 5.0,
			background: "#ffffff".into(),
			default_link_type: LinkType::Useful,
			allow_self_links: false,
		}
	}
}
