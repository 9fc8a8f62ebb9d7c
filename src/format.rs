//! The flat text directory format.
//!
//! Both input and output use the same whitespace-delimited encoding:
//!
//! ```text
//! <N>
//! <family_1>
//! <given_1>
//! <country_1> <area_1> <number_1>
//! ...
//! ```
//!
//! The reader tokenizes on any whitespace, so line breaks are cosmetic on
//! input; the writer always emits the three-lines-per-contact shape above,
//! with country and area codes zero-padded to four digits. Query files are
//! a count followed by one key token per query.
//!
//! Parsing is strict: a malformed count, a short record, a non-numeric
//! phone field, or an over-long name aborts the load with an error naming
//! the file. Nothing is skipped or repaired.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::DirectoryError;
use crate::search::MatchWindow;
use crate::types::{Contact, Directory, Name, PhoneNumber, MAX_NAME_BYTES};

/// Read a directory file: a contact count, then that many records.
///
/// The resulting [`Directory`] carries the identity view (file order).
pub fn load_directory(path: impl AsRef<Path>) -> Result<Directory, DirectoryError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| DirectoryError::io(path, e))?;
    parse_directory(&raw, path)
}

fn parse_directory(raw: &str, path: &Path) -> Result<Directory, DirectoryError> {
    let mut tokens = raw.split_whitespace();
    let count = count_field(&mut tokens, path, "contact count")?;

    let mut contacts: Vec<Contact> = Vec::new();
    contacts
        .try_reserve_exact(count)
        .map_err(|_| DirectoryError::Alloc {
            path: path.to_path_buf(),
            count,
        })?;

    for record in 0..count {
        let family = name_field(&mut tokens, path, record, "family")?;
        let given = name_field(&mut tokens, path, record, "given")?;
        let country: u16 = numeric_field(&mut tokens, path, record, "country code")?;
        let area: u16 = numeric_field(&mut tokens, path, record, "area code")?;
        let number: i64 = numeric_field(&mut tokens, path, record, "subscriber number")?;

        contacts.push(Contact {
            name: Name { family, given },
            phone: PhoneNumber {
                country,
                area,
                number,
            },
        });
    }

    Ok(Directory::new(contacts))
}

/// Read a query file: a query count, then that many key tokens.
pub fn load_queries(path: impl AsRef<Path>) -> Result<Vec<String>, DirectoryError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| DirectoryError::io(path, e))?;

    let mut tokens = raw.split_whitespace();
    let count = count_field(&mut tokens, path, "query count")?;

    let mut keys: Vec<String> = Vec::new();
    keys.try_reserve_exact(count)
        .map_err(|_| DirectoryError::Alloc {
            path: path.to_path_buf(),
            count,
        })?;
    for i in 0..count {
        let key = tokens.next().ok_or_else(|| {
            DirectoryError::parse(path, format!("expected {} queries, found {}", count, i))
        })?;
        keys.push(key.to_string());
    }
    Ok(keys)
}

/// Write the directory in current view order to `path`.
pub fn save_directory(
    directory: &Directory,
    path: impl AsRef<Path>,
) -> Result<(), DirectoryError> {
    let path = path.as_ref();
    let file = fs::File::create(path).map_err(|e| DirectoryError::io(path, e))?;
    let mut out = BufWriter::new(file);

    write_directory(directory, &mut out)
        .and_then(|_| out.flush())
        .map_err(|e| DirectoryError::io(path, e))
}

/// Emit the count line followed by every contact in view order.
pub fn write_directory<W: Write>(directory: &Directory, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", directory.len())?;
    for contact in directory.iter() {
        write_contact(contact, out)?;
    }
    Ok(())
}

/// The 3-line per-contact encoding shared by snapshots and query results.
pub fn write_contact<W: Write>(contact: &Contact, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", contact.name.family)?;
    writeln!(out, "{}", contact.name.given)?;
    writeln!(
        out,
        "{:04} {:04} {}",
        contact.phone.country, contact.phone.area, contact.phone.number
    )
}

/// Emit one query's result block: the matched contacts in view order, a
/// `<count> contacts found` summary, and the separator line.
pub fn write_query_result<W: Write>(
    directory: &Directory,
    window: Option<MatchWindow>,
    out: &mut W,
) -> io::Result<()> {
    let mut found = 0;
    if let Some(window) = window {
        for pos in window.first..=window.last {
            write_contact(directory.at(pos), out)?;
        }
        found = window.count();
    }
    writeln!(out, "{} contacts found", found)?;
    writeln!(out, "=====")
}

fn count_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    what: &str,
) -> Result<usize, DirectoryError> {
    let token = tokens
        .next()
        .ok_or_else(|| DirectoryError::parse(path, format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| DirectoryError::parse(path, format!("invalid {} '{}'", what, token)))
}

fn name_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    record: usize,
    field: &'static str,
) -> Result<String, DirectoryError> {
    let token = tokens.next().ok_or_else(|| {
        DirectoryError::parse(path, format!("contact {}: missing {} name", record, field))
    })?;
    if token.len() > MAX_NAME_BYTES {
        return Err(DirectoryError::NameTooLong {
            path: path.to_path_buf(),
            field,
            len: token.len(),
        });
    }
    Ok(token.to_string())
}

fn numeric_field<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    record: usize,
    field: &str,
) -> Result<T, DirectoryError> {
    let token = tokens.next().ok_or_else(|| {
        DirectoryError::parse(path, format!("contact {}: missing {}", record, field))
    })?;
    token.parse().map_err(|_| {
        DirectoryError::parse(
            path,
            format!("contact {}: invalid {} '{}'", record, field, token),
        )
    })
}
