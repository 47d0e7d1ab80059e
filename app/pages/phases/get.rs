use super::{page::render, props::props};
use crate::{
	layouts::{document::PageInfo, page_layout::PHASES_PATH},
	Context,
};
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

pub async fn get(context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let props = props(context)?;
	let page_info = PageInfo {
		path: PHASES_PATH.to_owned(),
		title: "Keputusan Analisis Sentimen Mengikut Fasa".to_owned(),
	};
	let html = render(props, page_info);
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
