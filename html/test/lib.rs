use html::{classes, component, html};

#[component]
fn Test() {
	return html!(
	  <div>{"Hello World"}</div>
	);
}

#[component]
fn Heading(level: usize, title: String) {
	let class = classes!("heading", if level == 1 { Some("heading-large") } else { None });
	html! {
		<div class={class}>
			<span>{title}</span>
			{children}
		</div>
	}
}

#[test]
fn test() {
	let html = html!(<Test />).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_component_with_children() {
	let html = html! {
		<Heading level={1} title={"Ringkasan".to_owned()}>
			<p>{"isi"}</p>
		</Heading>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="heading heading-large"><span>Ringkasan</span><p>isi</p></div>"#
	);
}

#[test]
fn test_text_and_attributes_are_escaped() {
	let value = r#"a "quoted" <value>"#.to_owned();
	let html = html! {
		<span data-value={value.clone()}>{value}</span>
	}
	.render_to_string();
	assert_eq!(
		html,
		"<span data-value=\"a &quot;quoted&quot; &lt;value&gt;\">a &quot;quoted&quot; &lt;value&gt;</span>"
	);
}

#[test]
fn test_optional_attributes() {
	let id: Option<String> = None;
	let html = html! {
		<input disabled={Some(true)} id={id} required={Some(false)} type="text" />
	}
	.render_to_string();
	assert_eq!(html, r#"<input disabled type="text" />"#);
}

#[test]
fn test_style_and_raw() {
	use html::{raw, style};
	let color: Option<String> = None;
	let style = style! {
		"width" => "50%",
		"background-color" => color,
		"stroke-width" => 2.to_string(),
	};
	assert_eq!(style, "width: 50%; stroke-width: 2;");
	let html = html! {
		<script>{raw!("if (a < b) {}")}</script>
	}
	.render_to_string();
	assert_eq!(html, "<script>if (a < b) {}</script>");
}

#[test]
fn test_fragments_and_lists() {
	let items = vec!["satu", "dua"];
	let html = html! {
		<>
			<ul>
				{items.iter().map(|item| html! { <li>{item.to_string()}</li> }).collect::<Vec<_>>()}
			</ul>
			{None::<String>}
		</>
	}
	.render_to_string();
	assert_eq!(html, "<ul><li>satu</li><li>dua</li></ul>");
}
