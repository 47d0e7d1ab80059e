use html::{classes, component, html, style};

#[component]
pub fn Table(width: Option<String>) {
	let style = style! {
		"width" => width.unwrap_or_else(|| "auto".into()),
	};
	html! {
		<div class="table-wrapper">
			<table class="table" style={style}>
				{children}
			</table>
		</div>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">
		{children}
		</thead>
	}
}

#[component]
pub fn TableBody() {
	html! { <tbody>{children}</tbody> }
}

#[component]
pub fn TableRow() {
	html! {
		<tr>
			{children}
		</tr>
	}
}

#[derive(Clone)]
pub enum TextAlign {
	Left,
	Center,
	Right,
}

fn text_align_class(text_align: Option<TextAlign>) -> &'static str {
	text_align
		.map(|text_align| match text_align {
			TextAlign::Left => "table-align-left",
			TextAlign::Right => "table-align-right",
			TextAlign::Center => "table-align-center",
		})
		.unwrap_or("table-align-left")
}

#[component]
pub fn TableHeaderCell(text_align: Option<TextAlign>) {
	let th_class = classes!("table-header-cell", text_align_class(text_align));
	html! {
		<th class={th_class}>
			{children}
		</th>
	}
}

#[component]
pub fn TableCell(text_align: Option<TextAlign>) {
	let td_class = classes!("table-cell", text_align_class(text_align));
	html! {
		<td class={td_class}>
			{children}
		</td>
	}
}

#[test]
fn test_table() {
	let html = html! {
		<Table width={Some("100%".to_owned())}>
			<TableHeader>
				<TableRow>
					<TableHeaderCell text_align={None}>{"Model"}</TableHeaderCell>
					<TableHeaderCell text_align={Some(TextAlign::Right)}>{"Ketepatan"}</TableHeaderCell>
				</TableRow>
			</TableHeader>
			<TableBody>
				<TableRow>
					<TableCell text_align={None}>{"SVM"}</TableCell>
					<TableCell text_align={Some(TextAlign::Right)}>{"0.82"}</TableCell>
				</TableRow>
			</TableBody>
		</Table>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="table-wrapper"><table class="table" style="width: 100%;"><thead class="table-header"><tr><th class="table-header-cell table-align-left">Model</th><th class="table-header-cell table-align-right">Ketepatan</th></tr></thead><tbody><tr><td class="table-cell table-align-left">SVM</td><td class="table-cell table-align-right">0.82</td></tr></tbody></table></div>"###);
}
