use html::{component, html};

#[derive(Clone)]
pub struct TopbarItem {
	pub href: String,
	pub title: String,
}

#[component]
pub fn Topbar(
	active_href: Option<String>,
	items: Vec<TopbarItem>,
	logo_href: Option<String>,
	title: Option<String>,
) {
	html! {
		<div class="topbar-wrapper">
			<TopbarBrand logo_href={logo_href} title={title} />
			<TopbarItemsWrapper>
				{items.iter().map(|item| {
					let current = if active_href.as_ref() == Some(&item.href) {
						Some("page")
					} else {
						None
					};
					html! {
						<a aria-current={current} class="topbar-link" href={item.href.clone()}>
							{item.title.clone()}
						</a>
					}
				}).collect::<Vec<_>>()}
			</TopbarItemsWrapper>
			<details class="topbar-details">
				<summary class="topbar-details-summary">
					<TopbarHamburger />
				</summary>
				<TopbarDropdown items={items} />
			</details>
		</div>
	}
}

#[component]
fn TopbarBrand(logo_href: Option<String>, title: Option<String>) {
	html! {
		<a class="topbar-link" href={logo_href.unwrap_or_else(|| "/".to_owned())}>
			<div class="topbar-brand-wrapper">
				{title.map(|title| html! {
					<div class="topbar-brand-title">
						{title}
					</div>
				})}
			</div>
		</a>
	}
}

#[component]
fn TopbarItemsWrapper() {
	html! { <nav class="topbar-items-wrapper">{children}</nav> }
}

#[component]
fn TopbarHamburger() {
	html! {
		<div class="topbar-hamburger">
			<svg
				class="topbar-hamburger-icon"
				height="15px"
				overflow="visible"
				viewBox="0 0 1 1"
				width="15px"
			>
				{[0.0, 0.5, 1.0].iter().map(|y| html!(
					<line
						stroke="currentColor"
						stroke-linecap="round"
						stroke-width="0.2"
						x1="0"
						x2="1"
						y1={y.to_string()}
						y2={y.to_string()}
					/>
				)).collect::<Vec<_>>()}
			</svg>
			<svg
				class="topbar-x-icon"
				height="15px"
				overflow="visible"
				viewBox="0 0 1 1"
				width="15px"
			>
				<line
					stroke="currentColor"
					stroke-linecap="round"
					stroke-width="0.2"
					x1="0"
					x2="1"
					y1="0"
					y2="1"
				/>
				<line
					stroke="currentColor"
					stroke-linecap="round"
					stroke-width="0.2"
					x1="1"
					x2="0"
					y1="0"
					y2="1"
				/>
			</svg>
		</div>
	}
}

#[component]
fn TopbarDropdown(items: Vec<TopbarItem>) {
	html! {
		<div class="topbar-dropdown-wrapper">
			{items.into_iter().map(|item| html! {
				<a class="topbar-dropdown-link" href={item.href}>
					<div class="topbar-dropdown-item">
						{item.title}
					</div>
				</a>
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[test]
fn test_topbar_marks_active_item() {
	let html = html! {
		<Topbar
			active_href={Some("/Keputusan_Analisis_Keseluruhan".to_owned())}
			items={vec![
				TopbarItem { href: "/".to_owned(), title: "Utama".to_owned() },
				TopbarItem {
					href: "/Keputusan_Analisis_Keseluruhan".to_owned(),
					title: "Keputusan Analisis Keseluruhan".to_owned(),
				},
			]}
			logo_href={None}
			title={Some("Analisis Sentimen Buli".to_owned())}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<a class="topbar-link" href="/">Utama</a>"#));
	assert!(html.contains(
		r#"<a aria-current="page" class="topbar-link" href="/Keputusan_Analisis_Keseluruhan">Keputusan Analisis Keseluruhan</a>"#
	));
	assert_eq!(html.matches("topbar-dropdown-link").count(), 2);
}
