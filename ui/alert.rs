use html::{component, html};

#[derive(Clone)]
pub enum Level {
	Info,
	Success,
	Warning,
	Danger,
}

#[component]
pub fn Alert(level: Level, title: Option<String>) {
	let level_class = match level {
		Level::Info => "alert-level-info",
		Level::Success => "alert-level-success",
		Level::Warning => "alert-level-warning",
		Level::Danger => "alert-level-danger",
	};
	html! {
		<div class={format!("alert-wrapper {}", level_class)} role="alert">
			{title.map(|title| html! {
				<div class="alert-title">{title}</div>
			})}
			{children}
		</div>
	}
}

#[test]
fn test_alert() {
	let html = html! {
		<Alert level={Level::Danger} title={None}>
			{"Gagal membaca fail 'svm_results.csv'"}
		</Alert>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="alert-wrapper alert-level-danger" role="alert">Gagal membaca fail &apos;svm_results.csv&apos;</div>"###);
}
