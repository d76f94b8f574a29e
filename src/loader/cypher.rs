use std::io::Write;

use super::{index_statement, GraphSink};
use crate::error::Result;

/// Sink that writes a cypher-shell script instead of talking to a server.
///
/// Parameters are inlined as quoted string literals, and transactions map
/// to `:begin` / `:commit` so the script can be replayed with
/// `cypher-shell -f`.
pub struct CypherScriptSink<W: Write> {
    writer: W,
}

impl<W: Write> CypherScriptSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GraphSink for CypherScriptSink<W> {
    fn create_index(&mut self, label: &str, property: &str) -> Result<()> {
        writeln!(self.writer, "{};", index_statement(label, property))?;
        Ok(())
    }

    fn begin(&mut self) -> Result<()> {
        writeln!(self.writer, ":begin")?;
        Ok(())
    }

    fn run(&mut self, statement: &str, source: &str, destination: &str) -> Result<()> {
        let bound = bind_params(statement, &[("src", source), ("dest", destination)]);
        writeln!(self.writer, "{};", bound)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        writeln!(self.writer, ":commit")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Quote `value` as a single-quoted Cypher string literal.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Replace each `$name` in `statement` with the quoted value bound to it in
/// one pass, so values that themselves contain `$name` stay untouched.
fn bind_params(statement: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(statement.len());
    let mut rest = statement;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(&quote_literal(value)),
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }
    out.push_str(rest);
    out
}
