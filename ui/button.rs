use html::{component, html};

#[derive(Clone)]
pub enum ButtonType {
	Submit,
	Button,
	Reset,
}

/// A button, or a link styled as a button when `href` is set.
#[component]
pub fn Button(
	button_type: ButtonType,
	disabled: Option<bool>,
	href: Option<String>,
	id: Option<String>,
) {
	let button_type = match button_type {
		ButtonType::Submit => "submit",
		ButtonType::Button => "button",
		ButtonType::Reset => "reset",
	};
	if let Some(href) = href {
		html! {
			<a class="button" href={href} id={id}>
				{children}
			</a>
		}
	} else {
		html! {
			<button class="button" disabled={disabled} id={id} type={button_type}>
				{children}
			</button>
		}
	}
}

#[test]
fn test_button() {
	let link = html! {
		<Button
			button_type={ButtonType::Button}
			disabled={None}
			href={Some("/Keputusan_Analisis_Mengikut_Fasa".to_owned())}
			id={None}
		>
			{"Lihat Keputusan Mengikut Fasa"}
		</Button>
	}
	.render_to_string();
	assert_eq!(
		link,
		r#"<a class="button" href="/Keputusan_Analisis_Mengikut_Fasa">Lihat Keputusan Mengikut Fasa</a>"#
	);
	let button = html! {
		<Button button_type={ButtonType::Submit} disabled={None} href={None} id={None}>
			{"Tapis"}
		</Button>
	}
	.render_to_string();
	assert_eq!(button, r#"<button class="button" type="submit">Tapis</button>"#);
}
