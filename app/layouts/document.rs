use html::{component, html};

#[derive(Clone)]
pub struct PageInfo {
	/// The route of the page, used to highlight its link in the topbar.
	pub path: String,
	pub title: String,
}

#[component]
pub fn Document(page_info: PageInfo) {
	html! {
		<html lang="ms">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				<title>{page_info.title}</title>
				<link href="/styles.css" rel="stylesheet" />
				<meta
					content="Analisis sentimen awam mengenai isu buli di IPTA menggunakan model SVM dan BERT"
					name="description"
				/>
			</head>
			<body>
				{children}
			</body>
		</html>
	}
}
