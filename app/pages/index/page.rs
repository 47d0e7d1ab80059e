use super::props::Props;
use crate::layouts::{
	document::PageInfo,
	page_layout::{PageLayout, OVERALL_PATH},
};
use buli_ui as ui;
use html::{component, html};

const ISSUE_TEXT: &str = "Isu buli di Institusi Pengajian Tinggi Awam (IPTA) sering berlaku pada masa ini dan kebanyakannya turut menjadi kes jenayah kerana melibatkan penderaan secara fizikal dan berakhir dengan kehilangan nyawa. Kejadian-kejadian ini bukan sahaja memberi kesan negatif kepada mangsa dari segi fizikal dan emosi, tetapi juga mencerminkan masalah yang lebih besar dalam ekosistem pendidikan dan sosial. Kes ini telah pun menarik perhatian negara tetapi juga menimbulkan persoalan mendalam tentang isu buli dan penderaan yang berlaku di institusi pendidikan. Ia juga mendorong kepada perbincangan tentang langkah-langkah yang perlu diambil untuk menangani jenayah buli dalam kalangan pelajar di negara ini, serta bagaimana sistem sosial dan pendidikan dapat memainkan peranan penting dalam mencegah kejadian serupa.";

const ISSUE_TRANSLATION: &str = "Bullying at public universities (IPTA) happens often today, and many cases become criminal because they involve physical abuse that ends in the loss of life. These incidents harm victims physically and emotionally, and they reflect a larger problem in the educational and social ecosystem. The cases have drawn national attention and raised deep questions about bullying and abuse in educational institutions. They have also prompted discussion of the steps needed to tackle bullying among students in this country, and of the role the social and education systems can play in preventing similar incidents.";

const SYSTEM_TEXT: &str = "Sebagai respons terhadap kejadian-kejadian ini, sistem analisis sentimen ini dibangunkan untuk menganalisis pendapat dan reaksi awam terhadap isu buli yang kebanyakannya berlaku di IPTA, terutamanya dalam kalangan pengguna aplikasi X. Sistem ini bertujuan untuk memahami perasaan umum mengenai kes ini, sama ada positif, negatif, atau neutral, dengan mengklasifikasikan tweet–tweet dan perbincangan dalam talian. Melalui analisis sentimen ini, diharapkan kita dapat memahami pasti tahap kesedaran masyarakat mengenai isu buli serta langkah-langkah pencegahan yang dapat diambil untuk menanganinya.";

const SYSTEM_TRANSLATION: &str = "In response to these incidents, this sentiment analysis system was built to analyse public opinion and reaction to bullying, mostly at IPTA, especially among users of the X app. The system aims to understand the general feeling about these cases, whether positive, negative or neutral, by classifying tweets and online discussions. Through this analysis we hope to understand the level of public awareness of bullying and the preventive steps that can be taken to address it.";

pub fn render(props: Props, page_info: PageInfo) -> String {
	let html = html! {
		<PageLayout page_info={page_info}>
			<ui::S1>
				<ui::Columns columns={Some("1fr 2fr".to_owned())}>
					<div>
						{props.landing_image.map(|src| html! {
							<ui::Img
								alt={"Buli di IPTA".to_owned()}
								caption={Some("Sumber: Google Images".to_owned())}
								src={src}
							/>
						})}
					</div>
					<ui::S2>
						<Section
							title={"Buli Di Institusi Pengajian Tinggi Awam (IPTA)".to_owned()}
							text={ISSUE_TEXT}
							translation={ISSUE_TRANSLATION}
						/>
						<Section
							title={"Sistem Analisis Sentimen Mengenai Isu Buli di IPTA".to_owned()}
							text={SYSTEM_TEXT}
							translation={SYSTEM_TRANSLATION}
						/>
					</ui::S2>
				</ui::Columns>
				<ui::Button
					button_type={ui::ButtonType::Button}
					disabled={None}
					href={Some(OVERALL_PATH.to_owned())}
					id={None}
				>
					{"📊 Papar Hasil Analisis Keseluruhan"}
				</ui::Button>
			</ui::S1>
		</PageLayout>
	};
	format!("<!doctype html>{}", html.render_to_string())
}

#[component]
fn Section(title: String, text: &'static str, translation: &'static str) {
	html! {
		<ui::S2>
			<ui::H3>{title}</ui::H3>
			<ui::P>{text}</ui::P>
			<p class="p p-translation" lang="en">{translation}</p>
		</ui::S2>
	}
}

#[test]
fn test_landing_page() {
	let page_info = || PageInfo {
		path: "/".to_owned(),
		title: "Sistem Analisis Sentimen Buli".to_owned(),
	};
	let html = render(
		Props {
			landing_image: Some("/buli_ipta.jpg".to_owned()),
		},
		page_info(),
	);
	assert!(html.starts_with("<!doctype html><html"));
	assert!(html.contains(
		r#"<figure class="image"><img alt="Buli di IPTA" class="image-img" src="/buli_ipta.jpg" /><figcaption class="image-caption">Sumber: Google Images</figcaption></figure>"#
	));
	assert!(html.contains(
		r#"<a class="button" href="/Keputusan_Analisis_Keseluruhan">📊 Papar Hasil Analisis Keseluruhan</a>"#
	));
	assert!(html.contains("Buli Di Institusi Pengajian Tinggi Awam (IPTA)"));
	let without_image = render(
		Props {
			landing_image: None,
		},
		page_info(),
	);
	assert!(!without_image.contains("<figure"));
}
