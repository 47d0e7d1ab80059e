use crate::{static_files::image_href, Context};

pub struct Props {
	/// The href of the landing image, when it is present in the data directory.
	pub landing_image: Option<String>,
}

pub fn props(context: &Context) -> Props {
	Props {
		landing_image: image_href(context, &context.options.files.landing_image),
	}
}
