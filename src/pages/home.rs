use leptos::prelude::*;

use crate::components::link_editor::{
	EditorConfig, EditorStatus, GraphData, GraphNode, LinkEditorCanvas,
};

/// The fixed node set shown in both columns.
fn default_nodes() -> GraphData {
	let nodes = ["A", "B", "C", "D", "E", "F", "G"]
		.into_iter()
		.map(|name| GraphNode::new(name.to_lowercase(), name))
		.collect();

	GraphData {
		nodes,
		links: Vec::new(),
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(default_nodes);
	let status = RwSignal::new(EditorStatus::default());
	let on_change = Callback::new(move |s: EditorStatus| status.set(s));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<LinkEditorCanvas
					data=graph_data
					config=EditorConfig::default()
					fullscreen=true
					on_change=on_change
				/>
				<div class="graph-overlay">
					<h1>"Link Editor"</h1>
					<p class="subtitle">
						"Drag from a red box to a blue box to link them. Click a line to delete it."
					</p>
					<p>"Active type: " {move || status.with(|s| s.active.name())}</p>
					<ul>
						{move || {
							status
								.get()
								.links
								.into_iter()
								.map(|l| {
									view! {
										<li style=format!("color: {}", l.link_type.color())>
											{format!("{} → {} ({})", l.source, l.target, l.link_type)}
										</li>
									}
								})
								.collect_view()
						}}
					</ul>
				</div>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_nodes_are_a_through_g() {
		let data = default_nodes();
		let ids: Vec<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f", "g"]);
		assert_eq!(data.nodes[0].name, "A");
		assert!(data.links.is_empty());
	}
}
