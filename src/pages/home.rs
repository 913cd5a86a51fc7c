use leptos::prelude::*;
use log::debug;

use crate::components::chat::ChatWidget;
use crate::components::content_panel::ContentPanel;
use crate::components::network_graph::{NetworkGraph, SelectionEvent};
use crate::content::PortfolioContent;

/// Network on the left (top on narrow screens), project detail beside it,
/// chat floating above both.
#[component]
pub fn Home() -> impl IntoView {
	let content = PortfolioContent::builtin();
	let selected = RwSignal::new(None::<String>);

	let on_select = Callback::new(move |event: SelectionEvent| {
		selected.maybe_update(|current| {
			let changed = event.apply(current);
			if changed {
				debug!("Selection changed to {current:?}");
			}
			changed
		});
	});

	let active_project = Signal::derive(move || {
		selected.with(|id| id.as_deref().and_then(|id| content.project_by_id(id)))
	});

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

			<div class="portfolio">
				<div class="network-region">
					<NetworkGraph selected=selected on_select=on_select content=content />
				</div>
				<div class="content-region">
					<ContentPanel project=active_project />
				</div>
				<ChatWidget content=content />
			</div>
		</ErrorBoundary>
	}
}
