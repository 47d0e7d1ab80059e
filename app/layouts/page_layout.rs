use super::document::{Document, PageInfo};
use buli_ui as ui;
use html::{component, html};

pub const BANNER_TITLE: &str = "Sistem Analisis Sentimen Mengenai Isu Buli Di IPTA";
pub const FOOTER_TEXT: &str =
	"© 2025 Rifhan Ilyani — Final Year Project | Universiti Kebangsaan Malaysia";

pub const INDEX_PATH: &str = "/";
pub const OVERALL_PATH: &str = "/Keputusan_Analisis_Keseluruhan";
pub const PHASES_PATH: &str = "/Keputusan_Analisis_Mengikut_Fasa";

fn topbar_items() -> Vec<ui::TopbarItem> {
	vec![
		ui::TopbarItem {
			href: INDEX_PATH.to_owned(),
			title: "Halaman Utama".to_owned(),
		},
		ui::TopbarItem {
			href: OVERALL_PATH.to_owned(),
			title: "Keputusan Analisis Keseluruhan".to_owned(),
		},
		ui::TopbarItem {
			href: PHASES_PATH.to_owned(),
			title: "Keputusan Analisis Mengikut Fasa".to_owned(),
		},
	]
}

#[component]
pub fn PageLayout(page_info: PageInfo) {
	let active_href = Some(page_info.path.clone());
	html! {
		<Document page_info={page_info}>
			<div class="page-layout-topbar-grid">
				<ui::Topbar
					active_href={active_href}
					items={topbar_items()}
					logo_href={None}
					title={Some("Analisis Sentimen Buli".to_owned())}
				/>
				<main class="page-layout">
					<div class="page-layout-banner">{BANNER_TITLE}</div>
					{children}
					<hr class="page-layout-rule" />
					<footer class="page-layout-footer">{FOOTER_TEXT}</footer>
				</main>
			</div>
		</Document>
	}
}

#[test]
fn test_page_layout() {
	let html = html! {
		<PageLayout
			page_info={PageInfo {
				path: PHASES_PATH.to_owned(),
				title: "Keputusan Analisis Sentimen Mengikut Fasa".to_owned(),
			}}
		>
			<p>{"isi"}</p>
		</PageLayout>
	}
	.render_to_string();
	assert!(html.starts_with(r#"<html lang="ms"><head><meta charset="utf-8" />"#));
	assert!(html.contains("<title>Keputusan Analisis Sentimen Mengikut Fasa</title>"));
	assert!(html.contains(&format!(
		r#"<a aria-current="page" class="topbar-link" href="{}">"#,
		PHASES_PATH
	)));
	assert!(html.contains(
		r#"<div class="page-layout-banner">Sistem Analisis Sentimen Mengenai Isu Buli Di IPTA</div><p>isi</p>"#
	));
	assert!(html.contains(
		"<footer class=\"page-layout-footer\">© 2025 Rifhan Ilyani — Final Year Project | Universiti Kebangsaan Malaysia</footer>"
	));
}
