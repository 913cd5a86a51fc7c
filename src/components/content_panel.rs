use leptos::prelude::*;

use crate::content::{ANCHOR_LABEL, BIOGRAPHY, INSTRUCTIONS, PHILOSOPHY_QUOTE, Project};

fn project_detail(project: &'static Project) -> impl IntoView {
	view! {
		<div class="project-detail">
			<div class="project-image">
				<img src=project.img alt=project.label />
			</div>
			<h1 class="project-title">{project.label}</h1>
			<div class="project-text">
				<p>{project.text}</p>
				<p class="philosophy-quote">{PHILOSOPHY_QUOTE}</p>
			</div>
		</div>
	}
}

fn biography() -> impl IntoView {
	view! {
		<div class="biography">
			<h1 class="biography-title">{ANCHOR_LABEL}</h1>
			<div class="biography-text">
				{BIOGRAPHY.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
				<div class="instructions">
					<p>{INSTRUCTIONS}</p>
				</div>
			</div>
		</div>
	}
}

/// Detail of the selected project, or the biography when nothing is selected.
#[component]
pub fn ContentPanel(#[prop(into)] project: Signal<Option<&'static Project>>) -> impl IntoView {
	view! {
		<div class="content-panel">
			{move || match project.get() {
				Some(p) => project_detail(p).into_any(),
				None => biography().into_any(),
			}}
		</div>
	}
}
