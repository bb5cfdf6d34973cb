use std::fmt;

/// A node record from the static input list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
}

impl GraphNode {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}
}

/// Relationship category carried by a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkType {
	#[default]
	Useful,
	Important,
	Necessary,
	LogicallyConnected,
	Generalization,
	Synonym,
}

impl LinkType {
	/// Every link type in palette order.
	pub const ALL: [LinkType; 6] = [
		LinkType::Useful,
		LinkType::Important,
		LinkType::Necessary,
		LinkType::LogicallyConnected,
		LinkType::Generalization,
		LinkType::Synonym,
	];

	pub fn name(self) -> &'static str {
		match self {
			LinkType::Useful => "Useful",
			LinkType::Important => "Important",
			LinkType::Necessary => "Necessary",
			LinkType::LogicallyConnected => "Logically Connected",
			LinkType::Generalization => "Generalization",
			LinkType::Synonym => "Synonym",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			LinkType::Useful => "#b03d17",
			LinkType::Important => "#b8f27a",
			LinkType::Necessary => "#32a852",
			LinkType::LogicallyConnected => "#110dde",
			LinkType::Generalization => "#00f4fc",
			LinkType::Synonym => "#bd00fc",
		}
	}
}

impl fmt::Display for LinkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A directed, typed edge from a start-role node to an end-role node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub link_type: LinkType,
}

impl GraphLink {
	pub fn connects(&self, source: &str, target: &str) -> bool {
		self.source == source && self.target == target
	}
}

/// Which column a rendered node box belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	Start,
	End,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Snapshot handed to `on_change` listeners after every edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorStatus {
	pub active: LinkType,
	pub links: Vec<GraphLink>,
}
