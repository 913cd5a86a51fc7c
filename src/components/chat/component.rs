use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::service::generate_reply;
use super::transcript::{Role, Transcript, Turn};
use crate::config::ChatConfig;
use crate::content::PortfolioContent;

fn turn_view(turn: &Turn) -> impl IntoView + use<> {
	let (row, bubble) = match turn.role {
		Role::User => ("chat-row chat-row-user", "chat-bubble chat-bubble-user"),
		Role::Assistant => ("chat-row", "chat-bubble"),
	};
	view! {
		<div class=row>
			<div class=bubble>{turn.text.clone()}</div>
		</div>
	}
}

/// Floating assistant answering questions about the portfolio.
#[component]
pub fn ChatWidget(
	#[prop(optional)] config: Option<ChatConfig>,
	#[prop(default = PortfolioContent::builtin())] content: PortfolioContent,
) -> impl IntoView {
	let config = StoredValue::new(config.unwrap_or_default());
	let (open, set_open) = signal(false);
	let (input, set_input) = signal(String::new());
	let transcript = RwSignal::new(Transcript::default());
	let end_ref = NodeRef::<leptos::html::Div>::new();

	// Keep the newest turn in view.
	Effect::new(move |_| {
		transcript.track();
		open.track();
		if let Some(end) = end_ref.get() {
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			end.scroll_into_view_with_scroll_into_view_options(&options);
		}
	});

	let can_send = move || {
		let text = input.get();
		transcript.with(|t| t.accepts(&text))
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let text = input.get_untracked();
		if !transcript.with_untracked(|t| t.accepts(&text)) {
			return;
		}
		let mut pending = None;
		transcript.update(|t| pending = t.submit(&text));
		let Some(request) = pending else {
			return;
		};
		set_input.set(String::new());

		let config = config.get_value();
		debug!("Chat submission: {} prior turns", request.history.len());
		spawn_local(async move {
			let reply = generate_reply(&config, &content, &request).await;
			let _ = transcript.try_update(|t| t.resolve(reply));
		});
	};

	view! {
		<div class="chat-widget">
			<Show when=move || open.get()>
				<div class="chat-panel">
					<div class="chat-header">
						<h3>"AI ASSISTANT"</h3>
						<button class="chat-close" on:click=move |_| set_open.set(false)>
							"×"
						</button>
					</div>

					<div class="chat-messages">
						{move || {
							transcript.with(|t| t.turns().iter().map(turn_view).collect_view())
						}}
						<Show when=move || transcript.with(|t| t.is_awaiting())>
							<div class="chat-row">
								<div class="chat-bubble chat-pending">
									<span class="dot"></span>
									<span class="dot"></span>
									<span class="dot"></span>
								</div>
							</div>
						</Show>
						<div node_ref=end_ref></div>
					</div>

					<form class="chat-form" on:submit=on_submit>
						<input
							type="text"
							placeholder="Ask about Alina's work..."
							prop:value=move || input.get()
							on:input=move |ev| set_input.set(event_target_value(&ev))
						/>
						<button type="submit" disabled=move || !can_send()>
							"➤"
						</button>
					</form>
				</div>
			</Show>

			<button
				class=move || if open.get() { "chat-toggle chat-toggle-open" } else { "chat-toggle" }
				on:click=move |_| set_open.update(|o| *o = !*o)
			>
				{move || if open.get() { "×" } else { "…" }}
			</button>
		</div>
	}
}
