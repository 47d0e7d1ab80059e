use html::{component, html};

#[component]
pub fn Form(action: Option<String>, id: Option<String>, post: Option<bool>) {
	html! {
		<form
			action={action}
			class="form"
			id={id}
			method={
				if post.unwrap_or(false) {
					"post"
				} else {
					"get"
				}
			}
		>
			{children}
		</form>
	}
}
