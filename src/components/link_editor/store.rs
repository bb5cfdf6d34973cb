//! Ordered collection of links with one-link-per-pair semantics.

use super::types::{GraphLink, LinkType};

/// Stored links, at most one per ordered `(source, target)` pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkStore {
	links: Vec<GraphLink>,
}

impl LinkStore {
	/// An empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store by adding each link in turn, so duplicate pairs collapse
	/// onto the last one.
	pub fn from_links<I: IntoIterator<Item = GraphLink>>(links: I) -> Self {
		let mut store = Self::new();
		for link in links {
			store.add(&link.source, &link.target, link.link_type);
		}
		store
	}

	/// Appends a link, first removing any link for the same ordered pair.
	/// Returns the link that was replaced.
	pub fn add(&mut self, source: &str, target: &str, link_type: LinkType) -> Option<GraphLink> {
		let replaced = self.remove_by_endpoints(source, target);
		self.links.push(GraphLink {
			source: source.to_owned(),
			target: target.to_owned(),
			link_type,
		});
		replaced
	}

	/// Removes the link at `index`. Out-of-range indices are ignored.
	pub fn remove_at(&mut self, index: usize) -> Option<GraphLink> {
		if index < self.links.len() {
			Some(self.links.remove(index))
		} else {
			None
		}
	}

	/// Removes the first link matching both endpoints exactly.
	pub fn remove_by_endpoints(&mut self, source: &str, target: &str) -> Option<GraphLink> {
		let index = self.position(source, target)?;
		self.remove_at(index)
	}

	/// Index of the link for the ordered pair, if stored.
	pub fn position(&self, source: &str, target: &str) -> Option<usize> {
		self.links.iter().position(|l| l.connects(source, target))
	}

	/// Links in insertion order; replacements sit at the end.
	pub fn list(&self) -> &[GraphLink] {
		&self.links
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn link(source: &str, target: &str, link_type: LinkType) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			link_type,
		}
	}

	#[test]
	fn add_replaces_existing_pair() {
		let mut store = LinkStore::new();
		assert_eq!(store.add("a", "c", LinkType::Useful), None);
		let replaced = store.add("a", "c", LinkType::Important);

		assert_eq!(replaced, Some(link("a", "c", LinkType::Useful)));
		assert_eq!(store.list(), &[link("a", "c", LinkType::Important)]);
	}

	#[test]
	fn replacement_moves_to_the_end() {
		let mut store = LinkStore::new();
		store.add("a", "c", LinkType::Useful);
		store.add("b", "d", LinkType::Useful);
		store.add("a", "c", LinkType::Synonym);

		assert_eq!(
			store.list(),
			&[
				link("b", "d", LinkType::Useful),
				link("a", "c", LinkType::Synonym)
			]
		);
	}

	#[test]
	fn pair_is_ordered() {
		let mut store = LinkStore::new();
		store.add("a", "b", LinkType::Useful);
		store.add("b", "a", LinkType::Necessary);
		assert_eq!(
			store.list(),
			&[link("a", "b", LinkType::Useful), link("b", "a", LinkType::Necessary)]
		);
		assert_eq!(store.position("b", "a"), Some(1));
	}

	#[test]
	fn removing_missing_links_is_a_no_op() {
		let mut store = LinkStore::new();
		store.add("a", "b", LinkType::Useful);
		let before = store.clone();

		assert_eq!(store.remove_by_endpoints("a", "c"), None);
		assert_eq!(store.remove_by_endpoints("c", "b"), None);
		assert_eq!(store.remove_at(5), None);
		assert_eq!(store, before);
	}

	#[test]
	fn remove_by_endpoints_requires_both_fields() {
		let mut store = LinkStore::new();
		store.add("a", "b", LinkType::Useful);
		store.add("a", "c", LinkType::Useful);
		store.add("d", "b", LinkType::Useful);

		store.remove_by_endpoints("a", "b");
		assert_eq!(
			store.list(),
			&[link("a", "c", LinkType::Useful), link("d", "b", LinkType::Useful)]
		);
	}

	#[test]
	fn remove_at_removes_exactly_one() {
		let mut store = LinkStore::new();
		store.add("a", "b", LinkType::Useful);
		store.add("c", "d", LinkType::Useful);

		assert_eq!(store.remove_at(0), Some(link("a", "b", LinkType::Useful)));
		assert_eq!(store.list(), &[link("c", "d", LinkType::Useful)]);
	}

	#[test]
	fn seeding_collapses_duplicates() {
		let store = LinkStore::from_links([
			link("a", "b", LinkType::Useful),
			link("a", "b", LinkType::Generalization),
		]);
		assert_eq!(store.list(), &[link("a", "b", LinkType::Generalization)]);
	}
}
