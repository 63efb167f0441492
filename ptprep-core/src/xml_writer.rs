use std::{borrow::Cow, io::Write};

/// element name plus ordered attributes, built up before being handed to an
/// [`XmlWriter`].
#[derive(Debug, Clone)]
pub struct XmlTag<'a> {
    name: &'a str,
    attributes: Vec<(&'a str, String)>,
}

impl<'a> XmlTag<'a> {
    pub fn new(name: &'a str) -> XmlTag<'a> {
        XmlTag {
            name,
            attributes: vec![],
        }
    }

    pub fn attr<V: ToString>(mut self, key: &'a str, value: V) -> XmlTag<'a> {
        self.attributes.push((key, value.to_string()));
        self
    }

    /// adds the attribute only when a value is present
    pub fn attr_opt<V: ToString>(self, key: &'a str, value: Option<V>) -> XmlTag<'a> {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

/// minimal indenting XML writer. callers are responsible for balancing
/// [`XmlWriter::start`] and [`XmlWriter::end`] calls.
pub struct XmlWriter<W: Write> {
    inner: W,
    depth: usize,
}

impl<W: Write> XmlWriter<W> {
    const INDENT: &'static str = "\t";

    pub fn new(inner: W) -> XmlWriter<W> {
        XmlWriter { inner, depth: 0 }
    }

    pub fn declaration(&mut self) -> std::io::Result<()> {
        writeln!(self.inner, r#"<?xml version="1.0" encoding="UTF-8"?>"#)
    }

    pub fn doctype(&mut self, root: &str, system_id: &str) -> std::io::Result<()> {
        writeln!(self.inner, r#"<!DOCTYPE {root} SYSTEM "{system_id}">"#)
    }

    pub fn start(&mut self, tag: &XmlTag) -> std::io::Result<()> {
        self.open(tag, ">")?;
        writeln!(self.inner)?;
        self.depth += 1;
        Ok(())
    }

    pub fn empty(&mut self, tag: &XmlTag) -> std::io::Result<()> {
        self.open(tag, "/>")?;
        writeln!(self.inner)
    }

    /// writes `<name ...>text</name>` on a single line
    pub fn text(&mut self, tag: &XmlTag, text: &str) -> std::io::Result<()> {
        self.open(tag, ">")?;
        writeln!(self.inner, "{}</{}>", escape(text), tag.name())
    }

    /// writes a text run on its own indented line, between `start` and `end`
    pub fn text_line(&mut self, text: &str) -> std::io::Result<()> {
        self.indent()?;
        writeln!(self.inner, "{}", escape(text))
    }

    pub fn end(&mut self, name: &str) -> std::io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        writeln!(self.inner, "</{name}>")
    }

    pub fn blank_line(&mut self) -> std::io::Result<()> {
        writeln!(self.inner)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn open(&mut self, tag: &XmlTag, close: &str) -> std::io::Result<()> {
        self.indent()?;
        write!(self.inner, "<{}", tag.name)?;
        for (key, value) in tag.attributes.iter() {
            write!(self.inner, r#" {key}="{}""#, escape(value))?;
        }
        write!(self.inner, "{close}")
    }

    fn indent(&mut self) -> std::io::Result<()> {
        for _ in 0..self.depth {
            self.inner.write_all(Self::INDENT.as_bytes())?;
        }
        Ok(())
    }
}

/// escapes the five XML special characters, borrowing when there is nothing
/// to replace.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
