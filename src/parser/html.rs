//! Stack-based parser from HTML-shaped markup to a node forest.

use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{Element, Node};
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use unicode_normalization::UnicodeNormalization;

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Markup parser.
///
/// Unlike a browser, the parser never repairs its input: an end tag that
/// does not close the innermost open element, text outside of any element
/// or an element left open at the end all fail the whole parse.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse markup into its root-level nodes.
    pub fn parse(&self, markup: &str) -> Result<Vec<Node>> {
        let mut reader = Reader::from_str(markup);
        let config = reader.config_mut();
        // End tags are matched by the tree builder.
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.expand_empty_elements = false;

        let mut builder = TreeBuilder::new(&self.options);

        loop {
            let position = reader.buffer_position();
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = read_element(&reader, &start)?;
                    builder.flush_text(position)?;
                    if is_void(&element.tag) {
                        builder.attach(element);
                    } else {
                        builder.open(element)?;
                    }
                }
                Event::Empty(start) => {
                    let element = read_element(&reader, &start)?;
                    builder.flush_text(position)?;
                    builder.attach(element);
                }
                Event::End(end) => {
                    let name = decode(&reader, end.name().as_ref())?.to_ascii_lowercase();
                    builder.flush_text(position)?;
                    builder.close(&name, position)?;
                }
                Event::Text(text) => builder.push_text(&decode(&reader, &text)?),
                Event::CData(data) => builder.push_text(&decode(&reader, &data)?),
                Event::GeneralRef(reference) => {
                    builder.push_text(&resolve_reference(&reader, &reference)?)
                }
                Event::Eof => break,
                // Comments, declarations, processing instructions, doctype
                _ => {}
            }
        }

        builder.finish(reader.buffer_position())
    }
}

fn decode(reader: &Reader<&[u8]>, bytes: &[u8]) -> Result<String> {
    let text = reader
        .decoder()
        .decode(bytes)
        .map_err(quick_xml::Error::from)?;
    Ok(text.into_owned())
}

fn read_element(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<Element> {
    let tag = decode(reader, start.name().as_ref())?.to_ascii_lowercase();
    let mut element = Element::new(tag);

    for attr in start.html_attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = decode(reader, attr.key.as_ref())?.to_ascii_lowercase();
        let value = attr.decode_and_unescape_value_with(reader.decoder(), resolve_html5_entity)?;
        // First occurrence wins, as in HTML
        element.attrs.entry(key).or_insert_with(|| value.into_owned());
    }

    Ok(element)
}

fn resolve_reference(reader: &Reader<&[u8]>, reference: &BytesRef) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }

    let name = decode(reader, reference)?;
    resolve_html5_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedDocument(format!("unknown entity `&{};`", name)))
}

/// Accumulates the forest while events arrive.
struct TreeBuilder<'a> {
    options: &'a ParseOptions,
    roots: Vec<Node>,
    stack: Vec<Element>,
    pending: String,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            roots: Vec::new(),
            stack: Vec::new(),
            pending: String::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    /// Turn the text collected since the last tag into a node.
    fn flush_text(&mut self, position: u64) -> Result<()> {
        let trimmed = self.pending.trim();
        if trimmed.is_empty() {
            self.pending.clear();
            return Ok(());
        }

        let data: String = if self.options.normalize_unicode {
            trimmed.nfc().collect()
        } else {
            trimmed.to_string()
        };
        self.pending.clear();

        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(Node::text(data));
                Ok(())
            }
            None => Err(Error::MalformedDocument(format!(
                "text outside of any element at byte {}",
                position
            ))),
        }
    }

    fn open(&mut self, element: Element) -> Result<()> {
        if self.stack.len() >= self.options.max_depth {
            return Err(Error::RecursionLimit(self.options.max_depth));
        }
        self.stack.push(element);
        Ok(())
    }

    fn close(&mut self, tag: &str, position: u64) -> Result<()> {
        match self.stack.last() {
            Some(top) if top.tag == tag => {
                if let Some(element) = self.stack.pop() {
                    self.attach(element);
                }
                Ok(())
            }
            _ if is_void(tag) => Ok(()),
            Some(top) => Err(Error::MalformedDocument(format!(
                "expected </{}> but found </{}> at byte {}",
                top.tag, tag, position
            ))),
            None => Err(Error::MalformedDocument(format!(
                "unexpected </{}> at byte {}",
                tag, position
            ))),
        }
    }

    /// Append a finished element to the innermost open element or the roots.
    fn attach(&mut self, element: Element) {
        let node = Node::Element(element);
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self, position: u64) -> Result<Vec<Node>> {
        self.flush_text(position)?;
        if let Some(open) = self.stack.last() {
            return Err(Error::MalformedDocument(format!(
                "unclosed <{}> at end of input",
                open.tag
            )));
        }
        Ok(self.roots)
    }
}
