use html::{component, html};

#[component]
pub fn Img(alt: String, caption: Option<String>, src: String) {
	html! {
		<figure class="image">
			<img alt={alt} class="image-img" src={src} />
			{caption.map(|caption| html! {
				<figcaption class="image-caption">{caption}</figcaption>
			})}
		</figure>
	}
}
