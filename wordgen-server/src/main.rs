use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::info;
use serde::Deserialize;
use wordgen_core::{CorpusConfig, CorpusSource, DEFAULT_LENGTH, Error, WordGenerator, WordRequest};

/// Built-in sample corpus, used when no file is given or the file is unreadable.
const DEFAULT_CORPUS: &str = include_str!("../../data/default_corpus.txt");

/// Serve pronounceable random words over HTTP.
#[derive(Parser, Debug)]
#[command(name = "wordgen-server", version)]
struct Args {
	/// Corpus file (defaults to a built-in speech)
	#[arg(short, long)]
	file: Option<PathBuf>,

	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Load or write a binary snapshot of the corpus table next to the file
	#[arg(long)]
	cache: bool,
}

/// Query parameters of the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	count: Option<usize>,
}

impl GenerateParams {
	/// One word of the default length unless asked otherwise.
	fn request(&self) -> wordgen_core::Result<WordRequest> {
		WordRequest::new(self.length.unwrap_or(DEFAULT_LENGTH), self.count.unwrap_or(1))
	}
}

/// Maps a library error to the response sent to the client.
fn error_response(err: &Error) -> HttpResponse {
	let status = match err {
		Error::InvalidLength { .. } => StatusCode::BAD_REQUEST,
		Error::GenerationExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
		_ => StatusCode::INTERNAL_SERVER_ERROR,
	};
	HttpResponse::build(status).body(err.to_string())
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` words of `length` characters, one per line.
/// The generator is shared read-only, so no lock is taken.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<WordGenerator>, query: web::Query<GenerateParams>) -> impl Responder {
	let request = match query.request() {
		Ok(request) => request,
		Err(e) => return error_response(&e),
	};

	match data.generate_many(&request) {
		Ok(words) => HttpResponse::Ok().body(words.join("\n")),
		Err(e) => error_response(&e),
	}
}

#[get("/v1/inspect")]
async fn get_inspect(data: web::Data<WordGenerator>) -> impl Responder {
	HttpResponse::Ok().body(data.inspect())
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<WordGenerator>) -> impl Responder {
	HttpResponse::Ok().json(data.stats())
}

fn build_generator(args: &Args) -> wordgen_core::Result<WordGenerator> {
	let source = match &args.file {
		Some(path) => CorpusSource::File(path.clone()),
		None => CorpusSource::Text(DEFAULT_CORPUS.to_owned()),
	};
	let config = CorpusConfig::new(source)
		.with_fallback(DEFAULT_CORPUS)
		.with_cache(args.cache);
	WordGenerator::from_config(&config)
}

/// Main entry point for the server.
///
/// Builds the generator once and shares it between all workers.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let generator = build_generator(&args).map_err(std::io::Error::other)?;
	let shared_generator = web::Data::new(generator);

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(get_inspect)
			.service(get_stats)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
