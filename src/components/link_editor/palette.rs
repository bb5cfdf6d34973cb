use super::types::LinkType;

/// The relationship palette: fixed colors plus the single active selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
	selected: LinkType,
}

impl Palette {
	pub fn new(initial: LinkType) -> Self {
		Self { selected: initial }
	}

	pub fn select(&mut self, link_type: LinkType) {
		self.selected = link_type;
	}

	pub fn current(&self) -> LinkType {
		self.selected
	}

	pub fn color_of(link_type: LinkType) -> &'static str {
		link_type.color()
	}

	pub fn is_active(&self, link_type: LinkType) -> bool {
		self.selected == link_type
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exactly_one_entry_is_active() {
		let mut palette = Palette::default();
		assert_eq!(palette.current(), LinkType::Useful);

		palette.select(LinkType::Important);
		let active: Vec<_> = LinkType::ALL
			.into_iter()
			.filter(|t| palette.is_active(*t))
			.collect();
		assert_eq!(active, vec![LinkType::Important]);
	}

	#[test]
	fn colors_match_the_fixed_table() {
		assert_eq!(Palette::color_of(LinkType::Useful), "#b03d17");
		assert_eq!(Palette::color_of(LinkType::LogicallyConnected), "#110dde");
		assert_eq!(LinkType::LogicallyConnected.to_string(), "Logically Connected");
	}
}
