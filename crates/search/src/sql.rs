//! SQLite statements for a persisted sticky store.
//!
//! Schema: `sticker(id, name, package, type, create_date, modify_date, ...)`,
//! `package(id, name)`, `tag(id, namespace, value)`, `sticker_tag(sticker, tag)`.
//! Every literal goes through [`quote`]; date bounds are validated integers.

use itertools::Itertools;

use crate::parse::{MetaKey, ParsedTag, Search, SortField};

/// Single-quoted SQL string literal.
fn quote(value: &str) -> String {
	format!("'{}'", value.replace('\'', "''"))
}

/// `LIKE` pattern matching `value` as a literal substring. Pair with `ESCAPE '\'`.
fn contains_pattern(value: &str) -> String {
	let mut pattern = String::with_capacity(value.len() + 2);
	pattern.push('%');
	for ch in value.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			pattern.push('\\');
		}
		pattern.push(ch);
	}
	pattern.push('%');
	pattern
}

fn tag_condition(tag: &ParsedTag) -> String {
	format!(
		"(tag.namespace = {} AND tag.value = {})",
		quote(tag.tag.namespace()),
		quote(tag.tag.value())
	)
}

/// Subquery selecting stickies that carry every wanted tag and none of the
/// excluded ones. `None` when the search has no tag filters.
fn build_tag_subquery(tags: &[ParsedTag]) -> Option<String> {
	if tags.is_empty() {
		return None;
	}
	let (none_of, has_all): (Vec<&ParsedTag>, Vec<&ParsedTag>) = tags.iter().partition(|t| t.not);
	// The HAVING count compares against distinct tags.
	let has_all: Vec<&ParsedTag> = has_all.into_iter().unique_by(|t| t.tag.clone()).collect();

	let none_of_cond = (!none_of.is_empty()).then(|| {
		format!(
			"sticker.id NOT IN (SELECT sticker_tag.sticker FROM sticker_tag JOIN tag ON sticker_tag.tag = tag.id WHERE {})",
			none_of.iter().map(|t| tag_condition(t)).collect::<Vec<_>>().join(" OR ")
		)
	});

	if has_all.is_empty() {
		return none_of_cond.map(|cond| format!("SELECT sticker.* FROM sticker WHERE {cond}"));
	}

	let mut stmt = format!(
		"SELECT sticker.* FROM sticker JOIN sticker_tag ON sticker.id = sticker_tag.sticker WHERE sticker_tag.tag IN (SELECT id FROM tag WHERE {}) GROUP BY sticker.id HAVING COUNT(DISTINCT sticker_tag.tag) = {}",
		has_all.iter().map(|t| tag_condition(t)).collect::<Vec<_>>().join(" OR "),
		has_all.len()
	);
	if let Some(cond) = none_of_cond {
		stmt.push_str(" AND ");
		stmt.push_str(&cond);
	}
	Some(stmt)
}

fn build_main_stem(src_table: &str, search: &Search, count: bool) -> String {
	let mut sources = vec![format!("{src_table} AS inp")];
	let mut conds = Vec::new();

	for kwd in &search.keywords {
		conds.push(format!(
			"inp.name {} {} ESCAPE '\\'",
			if kwd.not { "NOT LIKE" } else { "LIKE" },
			quote(&contains_pattern(&kwd.value))
		));
	}

	for meta in search.unique_meta() {
		match meta.key {
			MetaKey::Package => {
				sources.push("JOIN package ON inp.package = package.id".to_string());
				conds.push(format!("package.name {} {}", if meta.not { "<>" } else { "=" }, quote(&meta.value)));
			}
			MetaKey::Ty => {
				conds.push(format!("inp.type {} {}", if meta.not { "<>" } else { "=" }, quote(&meta.value)));
			}
			MetaKey::After => {
				if let Some(bound) = search.date_bound(MetaKey::After) {
					conds.push(format!("inp.modify_date >= {bound}"));
				}
			}
			MetaKey::Before => {
				if let Some(bound) = search.date_bound(MetaKey::Before) {
					conds.push(format!("inp.modify_date <= {bound}"));
				}
			}
			MetaKey::Sort | MetaKey::Order => {}
		}
	}

	let mut stmt = format!(
		"SELECT {} FROM {}",
		if count { "COUNT(inp.id)" } else { "inp.*" },
		sources.join(" ")
	);
	if !conds.is_empty() {
		stmt.push_str(" WHERE ");
		stmt.push_str(&conds.join(" AND "));
	}
	if !count && let Some(field) = search.sort_field() {
		let column = match field {
			SortField::Name => "inp.name",
			SortField::Create => "inp.create_date",
			SortField::Modify => "inp.modify_date",
		};
		stmt.push_str(&format!(" ORDER BY {column} {}", if search.descending() { "DESC" } else { "ASC" }));
	}
	stmt
}

fn build_stmt(search: &Search, count: bool) -> String {
	match build_tag_subquery(&search.tags) {
		Some(tagged) => format!("WITH tagged_sticker AS ({tagged}) {}", build_main_stem("tagged_sticker", search, count)),
		None => build_main_stem("sticker", search, count),
	}
}

/// One page of matching stickies.
pub fn build_search_sql(search: &Search, page: usize, page_size: usize) -> String {
	let mut stmt = build_stmt(search, false);
	stmt.push_str(&format!(" LIMIT {page_size} OFFSET {};", page.saturating_mul(page_size)));
	stmt
}

/// Total number of matching stickies.
pub fn build_count_sql(search: &Search) -> String {
	let mut stmt = build_stmt(search, true);
	stmt.push(';');
	stmt
}

/// Number of pages needed to show `total` rows; an empty result still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
	if page_size == 0 {
		return 1;
	}
	total.div_ceil(page_size).max(1)
}
