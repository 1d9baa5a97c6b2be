//! Rendering turn content for display surfaces.
//!
//! Assistant replies are CommonMark. They are converted through
//! `pulldown-cmark` with raw HTML escaped and unsafe link schemes
//! neutralized; the service's output is never trusted as HTML. User turns
//! are always literal text.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::store::{Snapshot, Turn};
use crate::Role;

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert assistant markup to HTML that is safe to insert into a page.
pub fn render_html(content: &str) -> String {
    let events = Parser::new_ext(content, parser_options()).map(sanitize_event);
    let mut out = String::with_capacity(content.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut out, events);
    out
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative references and http(s)/mailto URLs are allowed.
pub(crate) fn is_safe_destination(dest: &str) -> bool {
    let cleaned: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => SAFE_SCHEMES.contains(&&cleaned[..i]),
        _ => true,
    }
}

/// Escape text for literal inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML for one turn: user text literal, assistant text rendered.
pub fn render_turn_html(turn: &Turn) -> String {
    match turn.role() {
        Role::User => format!(
            "<div class=\"message user\"><div class=\"message-content\">{}</div></div>",
            escape_html(turn.content())
        ),
        Role::Assistant => format!(
            "<div class=\"message assistant\"><div class=\"message-content markdown-body\">{}</div></div>",
            render_html(turn.content())
        ),
    }
}

/// A standalone HTML document for a whole transcript.
pub fn transcript_html(snapshot: &Snapshot, title: &str) -> String {
    let mut body = String::new();
    for turn in snapshot {
        body.push_str(&render_turn_html(turn));
        body.push('\n');
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div class=\"chat-history\">\n{body}</div>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Render assistant markup as plain text for a terminal.
///
/// Raw HTML is dropped, link targets are shown after the link text, and
/// control characters other than newlines and tabs are removed.
pub fn render_plain(content: &str) -> String {
    let mut out = PlainWriter::default();
    for event in Parser::new_ext(content, parser_options()) {
        out.event(event);
    }
    out.finish()
}

#[derive(Default)]
struct PlainWriter {
    buf: String,
    /// One entry per open list: the next ordinal, or `None` for bullets.
    lists: Vec<Option<u64>>,
    links: Vec<String>,
    in_code_block: bool,
    cell_index: usize,
}

impl PlainWriter {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    for line in text.split_inclusive('\n') {
                        self.buf.push_str("    ");
                        self.push_clean(line);
                    }
                } else {
                    self.push_clean(&text);
                }
            }
            Event::Code(code) => {
                self.buf.push('`');
                self.push_clean(&code);
                self.buf.push('`');
            }
            Event::SoftBreak | Event::HardBreak => self.buf.push('\n'),
            Event::Rule => {
                self.block_break();
                self.buf.push_str("---\n\n");
            }
            Event::TaskListMarker(done) => self.buf.push_str(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.block_break();
                self.buf.push_str(&"#".repeat(heading_depth(level)));
                self.buf.push(' ');
            }
            Tag::Paragraph if self.lists.is_empty() => self.block_break(),
            Tag::CodeBlock(_) => {
                self.block_break();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.block_break();
                } else {
                    self.line_break();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.line_break();
                let depth = self.lists.len().saturating_sub(1);
                self.buf.push_str(&"  ".repeat(depth));
                match self.lists.last_mut() {
                    Some(Some(n)) => {
                        self.buf.push_str(&format!("{n}. "));
                        *n += 1;
                    }
                    _ => self.buf.push_str("- "),
                }
            }
            Tag::Table(_) => self.block_break(),
            Tag::TableRow | Tag::TableHead => self.cell_index = 0,
            Tag::TableCell => {
                if self.cell_index > 0 {
                    self.buf.push_str(" | ");
                }
                self.cell_index += 1;
            }
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.links.push(dest_url.to_string());
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::Paragraph => self.buf.push('\n'),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.line_break();
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.line_break();
            }
            TagEnd::TableRow | TagEnd::TableHead => self.buf.push('\n'),
            TagEnd::Link | TagEnd::Image => {
                if let Some(url) = self.links.pop() {
                    if !url.is_empty() && !self.buf.ends_with(url.as_str()) {
                        self.buf.push_str(" (");
                        self.push_clean(&url);
                        self.buf.push(')');
                    }
                }
            }
            _ => {}
        }
    }

    /// Start a new block separated by one blank line.
    fn block_break(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        while !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }

    fn line_break(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
    }

    fn push_clean(&mut self, text: &str) {
        self.buf.extend(
            text.chars()
                .filter(|c| !c.is_control() || *c == '\n' || *c == '\t'),
        );
    }

    fn finish(self) -> String {
        self.buf.trim_end().to_string()
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
