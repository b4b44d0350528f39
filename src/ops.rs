use crate::utf8::text_size;

/// Kind of a single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Delete,
	Equal,
	Insert,
}

/// One edit operation: a kind plus the UTF-8 text it carries.
///
/// An edit script is an ordered `Vec<Diff>`. Empty-text operations are legal
/// only transiently; `cleanup_merge` removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
	pub op: Op,
	pub text: String,
}

impl Diff {
	pub fn new(op: Op, text: impl Into<String>) -> Self {
		Self { op, text: text.into() }
	}

	pub fn equal(text: impl Into<String>) -> Self {
		Self::new(Op::Equal, text)
	}

	pub fn insert(text: impl Into<String>) -> Self {
		Self::new(Op::Insert, text)
	}

	pub fn delete(text: impl Into<String>) -> Self {
		Self::new(Op::Delete, text)
	}

	pub fn is_equal(&self) -> bool {
		self.op == Op::Equal
	}

	/// True for `Insert` and `Delete`.
	pub fn is_edit(&self) -> bool {
		self.op != Op::Equal
	}
}

// region:    --- Readers

/// Rebuilds the source text (equal + delete operations).
pub fn source_text(script: &[Diff]) -> String {
	let mut text = String::new();
	for d in script {
		if d.op != Op::Insert {
			text.push_str(&d.text);
		}
	}
	text
}

/// Rebuilds the destination text (equal + insert operations).
pub fn destination_text(script: &[Diff]) -> String {
	let mut text = String::new();
	for d in script {
		if d.op != Op::Delete {
			text.push_str(&d.text);
		}
	}
	text
}

/// Edit distance of the script, in codepoints.
///
/// Each run of edits between equalities costs the larger of its inserted and
/// deleted codepoint counts.
pub fn levenshtein(script: &[Diff]) -> usize {
	let mut distance = 0;
	let mut inserted = 0;
	let mut deleted = 0;
	for d in script {
		match d.op {
			Op::Insert => inserted += text_size(&d.text),
			Op::Delete => deleted += text_size(&d.text),
			Op::Equal => {
				distance += inserted.max(deleted);
				inserted = 0;
				deleted = 0;
			}
		}
	}
	distance + inserted.max(deleted)
}

/// Renders the script as an HTML fragment with inline ins/del styling.
pub fn pretty_html(script: &[Diff]) -> String {
	let mut html = String::new();
	for d in script {
		let text = d
			.text
			.replace('&', "&amp;")
			.replace('<', "&lt;")
			.replace('>', "&gt;")
			.replace('\n', "&para;<br>");
		match d.op {
			Op::Insert => html.push_str(&format!("<ins style='background:#e6ffe6;'>{text}</ins>")),
			Op::Delete => html.push_str(&format!("<del style='background:#ffe6e6;'>{text}</del>")),
			Op::Equal => html.push_str(&format!("<span>{text}</span>")),
		}
	}
	html
}

/// Swaps insert and delete kinds, turning an `a -> b` script into `b -> a`.
pub fn invert(script: &[Diff]) -> Vec<Diff> {
	script
		.iter()
		.map(|d| match d.op {
			Op::Equal => Diff::equal(d.text.clone()),
			Op::Insert => Diff::delete(d.text.clone()),
			Op::Delete => Diff::insert(d.text.clone()),
		})
		.collect()
}

// endregion: --- Readers
