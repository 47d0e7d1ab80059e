use super::FieldLabel;
use html::{component, html};

#[derive(Clone)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

/// A select field. The option whose value equals `value` is selected. When `submit_on_change` is set, choosing an option submits the enclosing form.
#[component]
pub fn SelectField(
	disabled: Option<bool>,
	id: Option<String>,
	label: Option<String>,
	name: Option<String>,
	options: Vec<SelectFieldOption>,
	required: Option<bool>,
	submit_on_change: Option<bool>,
	value: Option<String>,
) {
	let onchange = if submit_on_change.unwrap_or(false) {
		Some("this.form.submit()")
	} else {
		None
	};
	html! {
		<FieldLabel html_for={id.clone()}>
			{label}
			<select
				class="form-select"
				disabled={disabled}
				id={id}
				name={name}
				onchange={onchange}
				required={required}
			>
				{
					options.into_iter().map(|option| {
						let selected = value.as_ref() == Some(&option.value);
						html! {
							<option selected={selected} value={option.value}>
								{option.text}
							</option>
						}
					}).collect::<Vec<_>>()
				}
			</select>
		</FieldLabel>
	}
}

#[test]
fn test_select_field() {
	let html = html! {
		<SelectField
			disabled={None}
			id={Some("svm_category".to_owned())}
			label={Some("Pilih kategori".to_owned())}
			name={Some("svm_category".to_owned())}
			options={vec![
				SelectFieldOption { text: "negative".to_owned(), value: "negative".to_owned() },
				SelectFieldOption { text: "positive".to_owned(), value: "positive".to_owned() },
			]}
			required={None}
			submit_on_change={Some(true)}
			value={Some("positive".to_owned())}
		/>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<label class="field-label" for="svm_category">Pilih kategori<select class="form-select" id="svm_category" name="svm_category" onchange="this.form.submit()"><option value="negative">negative</option><option selected value="positive">positive</option></select></label>"###);
}
