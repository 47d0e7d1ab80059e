use html::{component, html};

/// A collapsible section that shows `summary` and reveals its children when expanded.
#[component]
pub fn Details(open: Option<bool>, summary: String) {
	html! {
		<details class="details" open={open}>
			<summary class="details-summary" role="button">
				{summary}
			</summary>
			<div class="details-content">
				{children}
			</div>
		</details>
	}
}
