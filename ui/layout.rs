use html::{component, html, style};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn S2() {
	html! {
		<div class="s2">{children}</div>
	}
}

#[component]
pub fn H1(center: Option<bool>) {
	html! {
		<h1 class={
			if center.unwrap_or(false) {
				"h1 center"
			} else {
				"h1"
		}}>
			{children}
		</h1>
	}
}

#[component]
pub fn H2(center: Option<bool>) {
	html! {
		<h2 class={
			if center.unwrap_or(false) {
				"h2 center"
			} else {
				"h2"
		}}>
			{children}
		</h2>
	}
}

#[component]
pub fn H3() {
	html! {
		<h3 class="h3">{children}</h3>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}

/// Lay out the children side by side. `columns` is a css grid template such as `1fr 2fr`. The columns stack on narrow screens.
#[component]
pub fn Columns(columns: Option<String>) {
	let style = style! {
		"grid-template-columns" => columns,
	};
	html! {
		<div class="columns" style={style}>{children}</div>
	}
}

#[test]
fn test_columns() {
	let html = html! {
		<Columns columns={Some("1fr 2fr".to_owned())}>
			<H3>{"SVM"}</H3>
			<P>{"Ringkasan"}</P>
		</Columns>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="columns" style="grid-template-columns: 1fr 2fr;"><h3 class="h3">SVM</h3><p class="p">Ringkasan</p></div>"###);
}
