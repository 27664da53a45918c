//! Subcommand implementations. Output goes to the given writer.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use stickyard_config::Config;
use stickyard_editor::{SearchPage, package_combobox};
use stickyard_search::{Library, parse_search, sql};

use crate::cli::Command;

pub async fn run(command: &Command, config: &Config, library: Option<&Path>, out: &mut impl Write) -> Result<()> {
	match command {
		Command::Search { query, page } => search(config, library, query, *page, out).await,
		Command::Suggest { text } => suggest(config, library, text, out).await,
		Command::Sql { query, page, count } => print_sql(config, query, *page, *count, out),
	}
}

fn load_library(config: &Config, path: Option<&Path>) -> Result<Arc<Library>> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => config
			.library_path()
			.context("no library location; pass --library or set library.sticker-dir")?,
	};
	let library = Library::load(&path)?.with_page_size(config.search.page_size);
	Ok(Arc::new(library))
}

async fn search(config: &Config, library: Option<&Path>, query: &str, page: usize, out: &mut impl Write) -> Result<()> {
	parse_search(query).with_context(|| format!("invalid search '{query}'"))?;
	let library = load_library(config, library)?;
	let pages = library.count_pages(query)?;

	let mut view = SearchPage::new(Arc::clone(&library));
	view.set_search_input(query);
	view.set_page(page);
	tokio::time::timeout(config.query.timeout(), view.settle())
		.await
		.context("search timed out")?;

	for sticky in view.stickies() {
		let fav = if sticky.fav { "\t*" } else { "" };
		writeln!(out, "{}\t{}\t{}\t{}{fav}", sticky.id, sticky.name, sticky.package, sticky.kind)?;
	}
	writeln!(out, "page {}/{pages}", page + 1)?;
	Ok(())
}

async fn suggest(config: &Config, library: Option<&Path>, text: &str, out: &mut impl Write) -> Result<()> {
	let mut packages = package_combobox(load_library(config, library)?);
	packages.set_input(text);
	packages.open();
	tokio::time::timeout(config.query.timeout(), packages.settle())
		.await
		.context("package lookup timed out")?;

	for (index, item) in packages.candidates().iter().enumerate() {
		let marker = if packages.highlighted() == Some(index) { '>' } else { ' ' };
		writeln!(out, "{marker} {}", item.label)?;
	}
	Ok(())
}

fn print_sql(config: &Config, query: &str, page: usize, count: bool, out: &mut impl Write) -> Result<()> {
	let search = parse_search(query).with_context(|| format!("invalid search '{query}'"))?;
	let stmt = if count {
		sql::build_count_sql(&search)
	} else {
		sql::build_search_sql(&search, page, config.search.page_size)
	};
	writeln!(out, "{stmt}")?;
	Ok(())
}
