use self::{common::error::Error, context::Context};
use anyhow::Result;
use backtrace::Backtrace;
use futures::FutureExt;
use hyper::{
	service::{make_service_fn, service_fn},
	Body, Method, Request, Response, StatusCode,
};
use std::{
	cell::RefCell, collections::BTreeMap, convert::Infallible, net::SocketAddr,
	panic::AssertUnwindSafe, path::PathBuf, sync::Arc,
};

pub use self::config::{Config, DataFiles, PhaseOrder};

pub mod check;
pub mod common;
pub mod config;
mod layouts;
mod pages;
mod static_files;

pub struct Options {
	pub data_dir: PathBuf,
	pub files: DataFiles,
	pub host: std::net::IpAddr,
	pub phase_order: PhaseOrder,
	pub port: u16,
}

mod context {
	use std::path::PathBuf;

	pub struct Context {
		pub options: super::Options,
	}

	impl Context {
		/// The path of an artifact in the data directory.
		pub fn data_path(&self, file: &str) -> PathBuf {
			self.options.data_dir.join(file)
		}
	}
}

fn text_response(status: StatusCode, body: impl Into<Body>) -> Response<Body> {
	let mut response = Response::new(body.into());
	*response.status_mut() = status;
	response
}

async fn handle(request: Request<Body>, context: Arc<Context>) -> Response<Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path = uri.path();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let search_params: Option<BTreeMap<String, String>> = uri.query().map(|search_params| {
		url::form_urlencoded::parse(search_params.as_bytes())
			.into_owned()
			.collect()
	});
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &["health"]) => self::pages::health::get(&context, request).await,
		(&Method::GET, &["styles.css"]) => self::static_files::styles(),
		(&Method::GET, &[""]) => self::pages::index::get(&context, request).await,
		(&Method::GET, &["Keputusan_Analisis_Keseluruhan"]) => {
			self::pages::overall::get(&context, request, search_params).await
		}
		(&Method::GET, &["Keputusan_Analisis_Mengikut_Fasa"]) => {
			self::pages::phases::get(&context, request).await
		}
		(&Method::GET, &[file_name]) if self::static_files::is_image(file_name) => {
			self::static_files::image(&context, file_name).await
		}
		(_, &["health"])
		| (_, &["styles.css"])
		| (_, &[""])
		| (_, &["Keputusan_Analisis_Keseluruhan"])
		| (_, &["Keputusan_Analisis_Mengikut_Fasa"]) => Err(Error::MethodNotAllowed.into()),
		_ => Err(Error::NotFound.into()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			if let Some(error) = error.downcast_ref::<Error>() {
				match error {
					Error::BadRequest => text_response(StatusCode::BAD_REQUEST, "bad request"),
					Error::NotFound => text_response(StatusCode::NOT_FOUND, "not found"),
					Error::MethodNotAllowed => {
						text_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
					}
				}
			} else {
				log::error!("{:#}", error);
				let body = if cfg!(debug_assertions) {
					format!("{:#}", error)
				} else {
					"internal server error".to_owned()
				};
				text_response(StatusCode::INTERNAL_SERVER_ERROR, body)
			}
		}
	};
	log::info!("{} {} {}", method, path, response.status().as_u16());
	response
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		// Panics outside of a request have no task local to record into.
		PANIC_MESSAGE_AND_BACKTRACE
			.try_with(|panic_message_and_backtrace| {
				panic_message_and_backtrace.borrow_mut().replace(value);
			})
			.ok();
	}));
	let context = Arc::new(Context { options });
	let service = make_service_fn(|_| {
		let context = context.clone();
		async move {
			Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
				let method = request.method().to_owned();
				let path = request.uri().path().to_owned();
				let context = context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					let response = AssertUnwindSafe(handle(request, context))
						.catch_unwind()
						.await
						.unwrap_or_else(|_| {
							let body = PANIC_MESSAGE_AND_BACKTRACE
								.with(|panic_message_and_backtrace| {
									panic_message_and_backtrace
										.borrow()
										.as_ref()
										.map(|(message, backtrace)| {
											format!("{}\n{:?}", message, backtrace)
										})
								})
								.unwrap_or_else(|| "internal server error".to_owned());
							log::error!("{}", body);
							log::info!("{} {} 500", method, path);
							text_response(StatusCode::INTERNAL_SERVER_ERROR, body)
						});
					Ok::<_, Infallible>(response)
				})
			}))
		}
	});
	let addr = SocketAddr::new(context.options.host, context.options.port);
	let server = hyper::Server::try_bind(&addr)?.serve(service);
	log::info!("serving on port {}", context.options.port);
	server
		.with_graceful_shutdown(async {
			tokio::signal::ctrl_c().await.ok();
		})
		.await?;
	std::panic::set_hook(hook);
	Ok(())
}

#[cfg(test)]
fn test_context(data_dir: &std::path::Path) -> Arc<Context> {
	Arc::new(Context {
		options: Options {
			data_dir: data_dir.to_owned(),
			files: DataFiles::default(),
			host: std::net::IpAddr::from([127, 0, 0, 1]),
			phase_order: PhaseOrder::default(),
			port: 8501,
		},
	})
}

#[cfg(test)]
fn test_request(method: Method, uri: &str) -> Request<Body> {
	let mut request = Request::new(Body::empty());
	*request.method_mut() = method;
	*request.uri_mut() = uri.parse().unwrap();
	request
}

#[tokio::test]
async fn test_routes() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("buli_ipta.jpg"), b"jpeg").unwrap();
	let context = test_context(dir.path());
	let status = |response: Response<Body>| response.status();
	let get = |uri: &str| handle(test_request(Method::GET, uri), context.clone());
	assert_eq!(status(get("/health").await), StatusCode::OK);
	assert_eq!(status(get("/").await), StatusCode::OK);
	assert_eq!(status(get("/Keputusan_Analisis_Keseluruhan").await), StatusCode::OK);
	assert_eq!(
		status(get("/Keputusan_Analisis_Keseluruhan?svm_category=positive").await),
		StatusCode::OK
	);
	assert_eq!(status(get("/Keputusan_Analisis_Mengikut_Fasa").await), StatusCode::OK);
	assert_eq!(status(get("/styles.css").await), StatusCode::OK);
	assert_eq!(status(get("/buli_ipta.jpg").await), StatusCode::OK);
	assert_eq!(status(get("/missing.png").await), StatusCode::NOT_FOUND);
	assert_eq!(status(get("/.hidden.png").await), StatusCode::BAD_REQUEST);
	assert_eq!(status(get("/data/buli_ipta.jpg").await), StatusCode::NOT_FOUND);
	assert_eq!(status(get("/svm_results.csv").await), StatusCode::NOT_FOUND);
	assert_eq!(status(get("/tiada").await), StatusCode::NOT_FOUND);
	let post = handle(test_request(Method::POST, "/"), context.clone()).await;
	assert_eq!(post.status(), StatusCode::METHOD_NOT_ALLOWED);
}
