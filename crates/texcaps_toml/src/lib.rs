//! Minimal TOML reader, used for the texcaps configuration files
//!
//! Supports tables, dotted keys, arrays of tables, inline tables, arrays, strings, integers, floats and booleans.

use core::fmt;
use std::collections::HashMap;

mod str_parser;
pub use str_parser::{StrParser, ParserError};

/// TOML parsing error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TomlParseError(pub ParserError);

impl fmt::Display for TomlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse toml at {}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
	Comment(String),
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
	Array(Vec<Item>),
	Table(Table),
}

/// Toml table that preserves comments and insertion order
#[derive(Clone, Default, PartialEq)]
pub struct Table {
	/// Actual items (including comments)
	items   : Vec<Item>,
	/// Mapping from key to an index
	mapping : HashMap<String, usize>,
	/// Keys in insertion order
	keys    : Vec<String>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a str, &'a Item);
    type IntoIter = TableIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Table {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an item to the table, returns `false` if the key already exists
	pub fn push(&mut self, key: String, item: Item) -> bool {
		if self.mapping.contains_key(&key) {
			return false;
		}

		let idx = self.items.len();
		self.items.push(item);
		self.mapping.insert(key.clone(), idx);
		self.keys.push(key);
		true
	}

	/// Append an item with a dotted key to the table
	///
	/// # Error
	///
	/// If an item could not be added, as one of the sub-keys points to a non-table, an error with the index of the key the push failed at is returned
	pub fn push_multi_key(&mut self, keys: &[String], item: Item) -> Result<(), usize> {
		match keys {
			[] => Err(0),
			[key] => if self.push(key.clone(), item) { Ok(()) } else { Err(0) },
			[key, rest @ ..] => self.get_or_add_single_table(key)
				.map_err(|_| 0usize)?
				.push_multi_key(rest, item)
				.map_err(|idx| idx + 1),
		}
	}

	/// Push a comment into the table
	pub fn push_comment(&mut self, comment: String) {
		self.items.push(Item::Comment(comment))
	}

	/// Get an element from the table
	pub fn get_item(&self, key: &str) -> Option<&Item> {
		self.mapping.get(key).map(|idx| &self.items[*idx])
	}

	/// Get an element of a specific type from the table
	pub fn get<T: FromTomlItem + ?Sized>(&self, key: &str) -> Option<&T> {
		self.get_item(key).and_then(T::from_item)
	}

	/// Get a mutable element from the table
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Item> {
		self.mapping.get(key).map(|idx| &mut self.items[*idx])
	}

	/// Number of keyed items in the table
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Comments in this table, in the order they were encountered
	pub fn comments(&self) -> impl Iterator<Item = &str> {
		self.items.iter().filter_map(|item| match item {
			Item::Comment(comment) => Some(comment.as_str()),
			_ => None,
		})
	}

	fn get_or_add_table(&mut self, keys: &[String]) -> Result<&mut Table, ()> {
		match keys {
			[] => Ok(self),
			[key, rest @ ..] => self.get_or_add_single_table(key)?.get_or_add_table(rest),
		}
	}

	fn add_array_table(&mut self, keys: &[String]) -> Result<&mut Table, ()> {
		match keys {
			[] => Err(()),
			[key] => {
				if !self.mapping.contains_key(key) {
					self.push(key.clone(), Item::Array(Vec::new()));
				}
				let arr = match self.get_mut(key) {
					Some(Item::Array(arr)) => arr,
					_ => return Err(()),
				};
				arr.push(Item::Table(Table::new()));
				match arr.last_mut() {
					Some(Item::Table(table)) => Ok(table),
					_ => Err(()),
				}
			},
			[key, rest @ ..] => self.get_or_add_single_table(key)?.add_array_table(rest),
		}
	}

	fn get_or_add_single_table(&mut self, key: &String) -> Result<&mut Table, ()> {
		if !self.mapping.contains_key(key) {
			self.push(key.clone(), Item::Table(Table::new()));
		}

		match self.get_mut(key) {
			Some(Item::Table(table)) => Ok(table),
			// Arrays of tables extend the last table
			Some(Item::Array(arr)) => match arr.last_mut() {
				Some(Item::Table(table)) => Ok(table),
				_ => Err(()),
			},
			// Non table item, so we can't add this
			_ => Err(()),
		}
	}

	/// Create a new toml from this table
	pub fn to_toml(self) -> Toml {
		Toml { table: self }
	}

	pub fn iter(&self) -> TableIter<'_> {
		TableIter { table: self, iter: self.keys.iter() }
	}
}

pub struct TableIter<'a> {
	table: &'a Table,
	iter: core::slice::Iter<'a, String>,
}

impl<'a> Iterator for TableIter<'a> {
    type Item = (&'a str, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.iter.next()?;
		let item = self.table.get_item(key)?;
		Some((key.as_str(), item))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toml {
	table : Table,
}

impl Toml {
	/// Create a new toml
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse toml from a string
	pub fn parse(source: &str) -> Result<Self, TomlParseError> {
		let mut parser = Parser::new(source);
		parser.parse()
	}

	/// Get the root table
	pub fn table(&self) -> &Table {
		&self.table
	}

	/// Get an element from the toml
	pub fn get(&self, key: &str) -> Option<&Item> {
		self.table.get_item(key)
	}

	/// Get a sub-table from the toml
	pub fn get_table(&self, key: &str) -> Option<&Table> {
		self.table.get::<Table>(key)
	}

	/// Get a mutable element from the toml
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Item> {
		self.table.get_mut(key)
	}
}

struct Parser<'a> {
	parser : StrParser<'a>,
}

impl<'a> Parser<'a> {
	fn new(source: &'a str) -> Self {
		Self { parser: StrParser::new(source) }
	}

	fn parse(&mut self) -> Result<Toml, TomlParseError> {
		let mut toml = Toml::new();
		// Path of the table that is currently being filled
		let mut current = Vec::new();

		// Consume all whitespace so we have something to parse
		self.parser.consume_whitespace(true);

		while self.parser.can_parse() {
			// Now we should either have a comment, a table header, or a key-item pair
			if self.parser.string.starts_with('#') {
				let comment = self.parse_comment();
				self.current_table(&mut toml, &current)?.push_comment(comment);
			} else if self.parser.consume_str("[[") {
				current = self.parse_keys()?;
				if toml.table.add_array_table(&current).is_err() {
					return Err(self.error_and_skip_to_eol("Path does not point to an array of tables"));
				}
				if !self.parser.consume_str("]]") {
					return Err(self.error_and_skip_to_eol("Table is not closed"));
				}
			} else if self.parser.consume_char('[') {
				current = self.parse_keys()?;
				if toml.table.get_or_add_table(&current).is_err() {
					return Err(self.error_and_skip_to_eol("Path does not point to a table"));
				}
				if !self.parser.consume_char(']') {
					return Err(self.error_and_skip_to_eol("Table is not closed"));
				}
			} else {
				let (keys, item) = self.parse_key_item()?;
				let table = self.current_table(&mut toml, &current)?;
				if table.push_multi_key(&keys, item).is_err() {
					return Err(self.error_and_skip_to_eol("Duplicate key"));
				}
			}

			self.parser.consume_whitespace(false);
			if self.parser.string.starts_with('#') {
				let comment = self.parse_comment();
				self.current_table(&mut toml, &current)?.push_comment(comment);
			}
			if self.parser.can_parse() && !self.parser.string.starts_with(['\n', '\r']) {
				return Err(self.error_and_skip_to_eol("Expected a newline"));
			}

			// Consume all whitespace for the next iteration
			self.parser.consume_whitespace(true);
		}
		Ok(toml)
	}

	// Arrays of tables resolve to their last entry, so `[[a]]` and `[a]` headers share this lookup
	fn current_table<'t>(&mut self, toml: &'t mut Toml, path: &[String]) -> Result<&'t mut Table, TomlParseError> {
		match toml.table.get_or_add_table(path) {
			Ok(table) => Ok(table),
			Err(_) => Err(self.error_and_skip_to_eol("Path does not point to a table")),
		}
	}

	fn parse_key_item(&mut self) -> Result<(Vec<String>, Item), TomlParseError> {
		let keys = self.parse_keys()?;
		if !self.parser.consume_char('=') {
			return Err(self.error_and_skip_to_eol("Key is not followed by an `=`"));
		}
		self.parser.consume_whitespace(false);
		let item = self.parse_item()?;
		Ok((keys, item))
	}

	fn parse_keys(&mut self) -> Result<Vec<String>, TomlParseError> {
		let mut arr = Vec::new();
		loop {
			self.parser.consume_whitespace(false);
			let key = if self.parser.string.starts_with('"') {
				match self.parser.extract_string("\"", "\"", false) {
					Some(s) => s.to_string(),
					None => return Err(self.error_and_skip_to_eol("Invalid key")),
				}
			} else {
				let key = self.parser.extract_until(|ch: char| !ch.is_alphanumeric() && ch != '-' && ch != '_');
				if key.is_empty() {
					return Err(self.error_and_skip_to_eol("Empty key"));
				}
				key.to_string()
			};
			arr.push(key);

			self.parser.consume_whitespace(false);
			if !self.parser.consume_char('.') {
				return Ok(arr);
			}
		}
	}

	fn parse_keyword(&mut self, keyword: &str) -> bool {
		let is_keyword = self.parser.string.starts_with(keyword) &&
			self.parser.string[keyword.len()..].chars().next().map_or(true, |ch| !ch.is_alphanumeric());
		if is_keyword {
			self.parser.consume_count(keyword.len());
		}
		is_keyword
	}

	fn parse_item(&mut self) -> Result<Item, TomlParseError> {
		if self.parse_keyword("true") {
			return Ok(Item::Boolean(true));
		} else if self.parse_keyword("false") {
			return Ok(Item::Boolean(false));
		}

		let first = match self.parser.string.chars().next() {
			Some(ch) => ch,
			None => return Err(self.error_and_terminate("End of file")),
		};

		match first {
			// TOML basic strings
			'"' => {
				let delim = if self.parser.string.starts_with("\"\"\"") { "\"\"\"" } else { "\"" };
				match self.parser.extract_string(delim, delim, delim.len() == 3) {
					Some(string) => Ok(Item::String(unescape(string))),
					None => Err(self.error_and_skip_to_eol("Invalid string")),
				}
			},
			// TOML literal strings
			'\'' => {
				let delim = if self.parser.string.starts_with("'''") { "'''" } else { "'" };
				match self.parser.extract_string(delim, delim, delim.len() == 3) {
					Some(string) => Ok(Item::String(string.to_string())),
					None => Err(self.error_and_skip_to_eol("Invalid string")),
				}
			},
			'[' => self.parse_array(),
			'{' => self.parse_inline_table(),
			ch if ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == 'i' || ch == 'n' => self.parse_number(),
			_ => Err(self.error_and_skip_to_eol("Invalid item")),
		}
	}

	fn parse_number(&mut self) -> Result<Item, TomlParseError> {
		let raw = self.parser.extract_until(|ch: char| !ch.is_alphanumeric() && ch != '-' && ch != '+' && ch != '_' && ch != '.');
		let mut s = raw.to_string();
		s.retain(|ch| ch != '_');

		let (negative, unsigned) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s.strip_prefix('+').unwrap_or(s.as_str())),
		};
		let sign = if negative { -1.0 } else { 1.0 };

		let radix = if unsigned.starts_with("0x") {
			Some((16, "Invalid hexadecimal literal"))
		} else if unsigned.starts_with("0o") {
			Some((8, "Invalid octal literal"))
		} else if unsigned.starts_with("0b") {
			Some((2, "Invalid binary literal"))
		} else {
			None
		};

		if unsigned == "inf" {
			Ok(Item::Float(sign * f64::INFINITY))
		} else if unsigned == "nan" {
			Ok(Item::Float(f64::NAN))
		} else if let Some((radix, msg)) = radix {
			match i64::from_str_radix(&unsigned[2..], radix) {
				Ok(val) if negative => Ok(Item::Integer(-val)),
				Ok(val) => Ok(Item::Integer(val)),
				Err(_) => Err(self.error_and_skip_to_eol(msg)),
			}
		} else if unsigned.contains(['.', 'e', 'E']) {
			match s.parse::<f64>() {
				Ok(fp) => Ok(Item::Float(fp)),
				Err(_) => Err(self.error_and_skip_to_eol("Invalid float literal")),
			}
		} else {
			match s.parse::<i64>() {
				Ok(val) => Ok(Item::Integer(val)),
				Err(_) => Err(self.error_and_skip_to_eol("Invalid integer literal")),
			}
		}
	}

	fn parse_array(&mut self) -> Result<Item, TomlParseError> {
		let valid = self.parser.consume_char('[');
		debug_assert!(valid);

		let mut arr = Vec::new();
		loop {
			self.skip_array_whitespace();
			if self.parser.consume_char(']') {
				return Ok(Item::Array(arr));
			}

			arr.push(self.parse_item()?);
			self.skip_array_whitespace();

			if !self.parser.consume_char(',') {
				self.skip_array_whitespace();
				return if self.parser.consume_char(']') {
					Ok(Item::Array(arr))
				} else {
					Err(self.error_and_skip_to_eol("Array was not ended correctly"))
				};
			}
		}
	}

	// Arrays may span multiple lines and contain comments
	fn skip_array_whitespace(&mut self) {
		loop {
			self.parser.consume_whitespace(true);
			if self.parser.string.starts_with('#') {
				self.parser.consume_to_eol();
			} else {
				break;
			}
		}
	}

	fn parse_inline_table(&mut self) -> Result<Item, TomlParseError> {
		let valid = self.parser.consume_char('{');
		debug_assert!(valid);

		self.parser.consume_whitespace(false);
		let mut table = Table::new();
		if self.parser.consume_char('}') {
			return Ok(Item::Table(table));
		}

		loop {
			let (keys, item) = self.parse_key_item()?;
			if table.push_multi_key(&keys, item).is_err() {
				return Err(self.error_and_skip_to_eol("Duplicate key"));
			}
			self.parser.consume_whitespace(false);
			if !self.parser.consume_char(',') {
				break;
			}
			self.parser.consume_whitespace(false);
		}

		if self.parser.consume_char('}') {
			Ok(Item::Table(table))
		} else {
			Err(self.error_and_skip_to_eol("Inline table was not ended correctly"))
		}
	}

	fn parse_comment(&mut self) -> String {
		let valid_comment = self.parser.consume_char('#');
		debug_assert!(valid_comment);

		let comment = self.parser.extract_until(|ch| ch == '\n');
		comment.strip_suffix('\r').unwrap_or(comment).to_string()
	}

	fn error_and_skip_to_eol(&mut self, msg: &'static str) -> TomlParseError {
		let err = TomlParseError(self.parser.error(msg));
		self.parser.consume_to_eol();
		err
	}

	fn error_and_terminate(&mut self, msg: &'static str) -> TomlParseError {
		let err = TomlParseError(self.parser.error(msg));
		self.parser.end();
		err
	}
}

fn unescape(s: &str) -> String {
	let mut res = String::with_capacity(s.len());
	let mut chars = s.chars();
	while let Some(ch) = chars.next() {
		if ch != '\\' {
			res.push(ch);
			continue;
		}
		match chars.next() {
			Some('n') => res.push('\n'),
			Some('t') => res.push('\t'),
			Some('r') => res.push('\r'),
			Some('"') => res.push('"'),
			Some('\\') => res.push('\\'),
			Some(other) => {
				res.push('\\');
				res.push(other);
			},
			None => res.push('\\'),
		}
	}
	res
}

pub trait FromTomlItem {
	fn from_item(item: &Item) -> Option<&Self>;
}

impl FromTomlItem for Item {
    fn from_item(item: &Item) -> Option<&Self> {
        Some(item)
    }
}

impl FromTomlItem for str {
	fn from_item(item: &Item) -> Option<&Self> {
		match item {
			Item::String(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

macro_rules! impl_from_toml_item {
	($ty:ty => $iden:ident) => {
		impl FromTomlItem for $ty {
			fn from_item(item: &Item) -> Option<&Self> {
				if let Item::$iden(s) = item {
					Some(s)
				} else {
					None
				}
			}
		}
	};
}
impl_from_toml_item!(String => String);
impl_from_toml_item!(i64 => Integer);
impl_from_toml_item!(f64 => Float);
impl_from_toml_item!(bool => Boolean);
impl_from_toml_item!(Vec<Item> => Array);
impl_from_toml_item!(Table => Table);
