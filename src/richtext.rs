//! Rich-text article bodies
//!
//! Article bodies are small HTML fragments compiled into the binary. They are
//! treated as trusted: there is no sanitization, tags we don't know are
//! simply dropped and their text kept.

/// A block of laid-out article content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `<h1>`..`<h6>`, level 1-6
    Heading { level: u8, text: String },
    Paragraph(String),
    /// `<li>` item
    Bullet(String),
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph(text) | Block::Bullet(text) => text,
        }
    }
}

/// What kind of block the text being collected belongs to
#[derive(Clone, Copy)]
enum Open {
    Heading(u8),
    Paragraph,
    Bullet,
}

/// Parse an HTML fragment into display blocks
pub fn parse(fragment: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open = Open::Paragraph;
    let mut buf = String::new();
    let mut rest = fragment;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                let Some(end) = rest.find('>') else {
                    // Unterminated tag: keep it as text
                    buf.push_str(rest);
                    break;
                };
                let tag = rest[1..end].trim();
                rest = &rest[end + 1..];

                let closing = tag.starts_with('/');
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();

                match name.as_str() {
                    "br" => buf.push('\n'),
                    "p" | "div" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                        flush(&mut blocks, open, &mut buf);
                        open = if closing {
                            Open::Paragraph
                        } else {
                            match name.as_str() {
                                "li" => Open::Bullet,
                                h if h.len() == 2 && h.starts_with('h') => {
                                    Open::Heading(h.as_bytes()[1] - b'0')
                                }
                                _ => Open::Paragraph,
                            }
                        };
                    }
                    _ => {}
                }
            }
            Some(i) => {
                buf.push_str(&rest[..i]);
                rest = &rest[i..];
            }
            None => {
                buf.push_str(rest);
                break;
            }
        }
    }
    flush(&mut blocks, open, &mut buf);
    blocks
}

fn flush(blocks: &mut Vec<Block>, open: Open, buf: &mut String) {
    let text = collapse_whitespace(&decode_entities(buf));
    buf.clear();
    if text.is_empty() {
        return;
    }
    blocks.push(match open {
        Open::Heading(level) => Block::Heading { level, text },
        Open::Paragraph => Block::Paragraph(text),
        Open::Bullet => Block::Bullet(text),
    });
}

/// Collapse runs of whitespace to single spaces, keeping explicit `<br>` breaks
fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
