//! Text codec: INI document text to [`ConfigStore`] and back.
//!
//! Parsing is lenient and single-pass. Lines end at `\n`, `\r\n` or a lone
//! `\r`. Blank lines, `;`/`#` comments, lines without a usable `=` and
//! key-value lines before the first `[section]` header are dropped without
//! error. There is no quoting or escaping: a value
//! is everything after the first `=`, trimmed.
//!
//! Rendering is deterministic for a given store: each section becomes a
//! `[name]` header, its `key = value` lines, and one blank line. Comments are
//! not data and do not survive a parse/render cycle.

use crate::store::ConfigStore;

/// Parse a whole document. Never fails; malformed lines are skipped.
pub fn parse(text: &str) -> ConfigStore {
    let mut store = ConfigStore::new();
    let mut current_section: Option<String> = None;
    let mut skipped = 0usize;

    // The empty piece between `\r` and `\n` is skipped as a blank line.
    for raw in text.split(['\r', '\n']) {
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            store.ensure_section(name);
            current_section = Some(name.to_string());
            continue;
        }

        let section = match current_section.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => {
                log::trace!("outside any section, skipped: {line}");
                skipped += 1;
                continue;
            }
        };

        match line.find('=') {
            Some(pos) if pos > 0 => {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim();
                store.set(section, key, value);
            }
            _ => {
                log::trace!("no key-value pair, skipped: {line}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} malformed line(s) while parsing config");
    }
    store
}

/// Render a store back to document text.
pub fn render(store: &ConfigStore) -> String {
    let mut out = String::new();
    for section in store.sections() {
        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");
        for (key, value) in section.iter() {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
