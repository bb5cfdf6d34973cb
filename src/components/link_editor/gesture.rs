//! Drag-to-link gesture as an explicit state machine.
//!
//! `transition` is pure: it reads geometry and the palette selection through
//! [`GestureContext`] and reports what should happen as a list of [`Effect`]s.
//! While a [`Drag`] is live it also describes the transient guide line.

use super::geometry::{NodeGeometry, Point};
use super::types::{LinkType, Role};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down(Point),
	Move(Point),
	Up(Point),
	/// Pointer left the surface.
	Leave,
}

/// An in-flight gesture. `link_type` is fixed when the drag starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag {
	pub subject: String,
	pub link_type: LinkType,
	/// Centre of the subject box, where the guide line starts.
	pub anchor: Point,
	/// Live pointer position, where the guide line ends.
	pub pointer: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
	#[default]
	Idle,
	Dragging(Drag),
}

impl GestureState {
	pub fn drag(&self) -> Option<&Drag> {
		match self {
			GestureState::Dragging(drag) => Some(drag),
			GestureState::Idle => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
	AddLink {
		source: String,
		target: String,
		link_type: LinkType,
	},
	Redraw,
}

pub struct GestureContext<'a, G: NodeGeometry + ?Sized> {
	pub geometry: &'a G,
	pub selected: LinkType,
	pub allow_self_links: bool,
}

pub fn transition<G: NodeGeometry + ?Sized>(
	state: GestureState,
	event: PointerEvent,
	ctx: &GestureContext<'_, G>,
) -> (GestureState, Vec<Effect>) {
	match (state, event) {
		(GestureState::Idle, PointerEvent::Down(p)) => match ctx.geometry.resolve_node_at(p) {
			Some(subject) if subject.role == Role::Start => {
				let drag = Drag {
					subject: subject.id.clone(),
					link_type: ctx.selected,
					anchor: subject.rect.center(),
					pointer: p,
				};
				(GestureState::Dragging(drag), vec![Effect::Redraw])
			}
			_ => (GestureState::Idle, Vec::new()),
		},
		(GestureState::Idle, _) => (GestureState::Idle, Vec::new()),

		(GestureState::Dragging(mut drag), PointerEvent::Move(p)) => {
			drag.pointer = p;
			(GestureState::Dragging(drag), vec![Effect::Redraw])
		}
		// A second press while dragging cannot happen with a single pointer.
		(state @ GestureState::Dragging(_), PointerEvent::Down(_)) => (state, Vec::new()),
		(GestureState::Dragging(drag), PointerEvent::Up(p)) => {
			let mut effects = Vec::with_capacity(2);
			if let Some(target) = ctx.geometry.resolve_node_at(p) {
				let accepted = target.role == Role::End
					&& (ctx.allow_self_links || target.id != drag.subject);
				if accepted {
					effects.push(Effect::AddLink {
						source: drag.subject,
						target: target.id.clone(),
						link_type: drag.link_type,
					});
				}
			}
			effects.push(Effect::Redraw);
			(GestureState::Idle, effects)
		}
		(GestureState::Dragging(_), PointerEvent::Leave) => (GestureState::Idle, vec![Effect::Redraw]),
	}
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

	fn ctx(layout: &Layout, selected: LinkType) -> GestureContext<'_, Layout> {
		GestureContext {
			geometry: layout,
			selected,
			allow_self_links: false,
		}
	}

	const START_A: Point = Point { x: 150.0, y: 50.0 };
	const END_B: Point = Point { x: 550.0, y: 160.0 };
	const END_A: Point = Point { x: 550.0, y: 50.0 };
	const START_B: Point = Point { x: 150.0, y: 160.0 };
	const EMPTY: Point = Point { x: 320.0, y: 400.0 };

	fn start_drag(layout: &Layout, selected: LinkType) -> GestureState {
		let (state, effects) = transition(
			GestureState::Idle,
			PointerEvent::Down(START_A),
			&ctx(layout, selected),
		);
		assert_eq!(effects, vec![Effect::Redraw]);
		state
	}

	#[test]
	fn press_on_start_node_begins_a_drag() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let drag = state.drag().expect("expected a drag");
		assert_eq!(drag.subject, "a");
		assert_eq!(drag.link_type, LinkType::Useful);
		assert_eq!(drag.anchor, Point::new(150.0, 50.0));
		assert_eq!(drag.pointer, START_A);
	}

	#[test]
	fn press_elsewhere_stays_idle() {
		let l = layout();
		for p in [END_B, EMPTY] {
			let (state, effects) =
				transition(GestureState::Idle, PointerEvent::Down(p), &ctx(&l, LinkType::Useful));
			assert_eq!(state, GestureState::Idle);
			assert!(effects.is_empty());
		}
	}

	#[test]
	fn idle_ignores_move_up_and_leave() {
		let l = layout();
		let c = ctx(&l, LinkType::Useful);
		for ev in [PointerEvent::Move(END_B), PointerEvent::Up(END_B), PointerEvent::Leave] {
			assert_eq!(transition(GestureState::Idle, ev, &c), (GestureState::Idle, vec![]));
		}
	}

	#[test]
	fn move_tracks_the_pointer() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let (state, effects) =
			transition(state, PointerEvent::Move(EMPTY), &ctx(&l, LinkType::Useful));
		assert_eq!(effects, vec![Effect::Redraw]);
		assert_eq!(state.drag().map(|d| d.pointer), Some(EMPTY));
	}

	#[test]
	fn release_on_end_node_adds_a_link() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let (state, effects) =
			transition(state, PointerEvent::Up(END_B), &ctx(&l, LinkType::Useful));
		assert_eq!(state, GestureState::Idle);
		assert_eq!(
			effects,
			vec![
				Effect::AddLink {
					source: "a".into(),
					target: "b".into(),
					link_type: LinkType::Useful,
				},
				Effect::Redraw,
			]
		);
	}

	#[test]
	fn selection_is_captured_at_drag_start() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let (_, effects) = transition(state, PointerEvent::Up(END_B), &ctx(&l, LinkType::Synonym));
		assert!(effects.contains(&Effect::AddLink {
			source: "a".into(),
			target: "b".into(),
			link_type: LinkType::Useful,
		}));
	}

	#[test]
	fn rejected_drops_only_clean_up() {
		let l = layout();
		for p in [EMPTY, START_B, START_A, END_A] {
			let state = start_drag(&l, LinkType::Useful);
			let (state, effects) = transition(state, PointerEvent::Up(p), &ctx(&l, LinkType::Useful));
			assert_eq!(state, GestureState::Idle);
			assert_eq!(effects, vec![Effect::Redraw]);
		}
	}

	#[test]
	fn self_links_can_be_enabled() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let permissive = GestureContext {
			geometry: &l,
			selected: LinkType::Useful,
			allow_self_links: true,
		};
		let (_, effects) = transition(state, PointerEvent::Up(END_A), &permissive);
		assert_eq!(effects.len(), 2);
		assert!(matches!(&effects[0], Effect::AddLink { target, .. } if target == "a"));
	}

	#[test]
	fn leaving_cancels_the_drag() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let (state, effects) = transition(state, PointerEvent::Leave, &ctx(&l, LinkType::Useful));
		assert_eq!(state, GestureState::Idle);
		assert_eq!(effects, vec![Effect::Redraw]);
	}

	#[test]
	fn second_press_is_ignored() {
		let l = layout();
		let state = start_drag(&l, LinkType::Useful);
		let (next, effects) =
			transition(state.clone(), PointerEvent::Down(START_B), &ctx(&l, LinkType::Useful));
		assert_eq!(next, state);
		assert!(effects.is_empty());
	}
}
