//! Typed model of `svn log --xml` output.
//!
//! Only the fields the changelog needs are modelled. Everything else svn
//! emits (`author`, `date`, `paths`, ...) is skipped while reading.

use std::fmt::Display;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::warn;

use crate::error::LogError;

/// Root `<log>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvnLog {
    pub entries: Vec<SvnLogEntry>,
}

/// One `<logentry>` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvnLogEntry {
    /// `revision="N"` attribute, as svn writes it.
    pub revision_attr: Option<String>,

    /// `<revision>N</revision>` child, accepted from hand-made logs.
    pub revision_child: Option<String>,

    /// Raw `<msg>` text, whitespace and line breaks untouched.
    pub msg: Option<String>,
}

impl SvnLogEntry {
    /// Revision identifier, preferring the attribute over the child element.
    pub fn revision(&self) -> Option<&str> {
        self.revision_attr
            .as_deref()
            .or(self.revision_child.as_deref())
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

impl SvnLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Child elements of `<logentry>` whose text is kept.
#[derive(Debug, Clone, Copy)]
enum Field {
    Msg,
    Revision,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"msg" => Some(Self::Msg),
            b"revision" => Some(Self::Revision),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Msg => "msg",
            Self::Revision => "revision",
        }
    }
}

/// A `<logentry>` being read.
struct EntryBuilder {
    entry: SvnLogEntry,
    /// Element depth of the `<logentry>` tag itself.
    depth: usize,
    duplicate: Option<Field>,
}

impl EntryBuilder {
    fn start(start: &BytesStart<'_>, depth: usize) -> Result<Self, LogError> {
        let revision_attr = start
            .try_get_attribute("revision")
            .map_err(malformed)?
            .map(|attr| attr.unescape_value().map(|v| v.into_owned()))
            .transpose()
            .map_err(malformed)?;

        Ok(Self {
            entry: SvnLogEntry {
                revision_attr,
                ..SvnLogEntry::default()
            },
            depth,
            duplicate: None,
        })
    }

    fn set(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Msg => &mut self.entry.msg,
            Field::Revision => &mut self.entry.revision_child,
        };
        if slot.is_some() {
            self.duplicate = Some(field);
        } else {
            *slot = Some(text);
        }
    }

    /// The finished entry, or `None` if it repeated a field.
    fn finish(self) -> Option<SvnLogEntry> {
        match self.duplicate {
            Some(field) => {
                warn!(
                    "Skipping log entry {} with more than one <{}> element",
                    self.entry.revision().unwrap_or("without revision"),
                    field.as_str()
                );
                None
            }
            None => Some(self.entry),
        }
    }
}

fn malformed(e: impl Display) -> LogError {
    LogError::MalformedInput(e.to_string())
}

/// Parse the XML produced by `svn log --xml`.
///
/// `<msg>` text is kept verbatim (entities unescaped, no trimming), so the
/// first line of a message is exactly what the committer wrote.
pub fn parse_log(xml: &str) -> Result<SvnLog, LogError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut log = SvnLog::default();
    let mut saw_root = false;
    let mut depth = 0usize;
    let mut entry: Option<EntryBuilder> = None;
    let mut capture: Option<(Field, String)> = None;

    loop {
        let event = reader.read_event().map_err(malformed)?;
        let entry_depth = entry.as_ref().map(|b| b.depth);

        match event {
            Event::Start(start) => {
                depth += 1;
                match entry_depth {
                    None if depth == 1 => saw_root = true,
                    None if depth == 2 && start.local_name().as_ref() == b"logentry" => {
                        entry = Some(EntryBuilder::start(&start, depth)?);
                    }
                    Some(d) if depth == d + 1 => {
                        capture = Field::from_name(start.local_name().as_ref())
                            .map(|field| (field, String::new()));
                    }
                    _ => {}
                }
            }
            Event::Empty(start) => match (entry.as_mut(), depth) {
                (None, 0) => saw_root = true,
                (None, 1) if start.local_name().as_ref() == b"logentry" => {
                    if let Some(done) = EntryBuilder::start(&start, depth + 1)?.finish() {
                        log.entries.push(done);
                    }
                }
                (Some(builder), d) if d == builder.depth => {
                    if let Some(field) = Field::from_name(start.local_name().as_ref()) {
                        builder.set(field, String::new());
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some((_, buf)) = capture.as_mut() {
                    buf.push_str(&text.unescape().map_err(malformed)?);
                }
            }
            Event::CData(data) => {
                if let Some((_, buf)) = capture.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                match entry_depth {
                    Some(d) if depth == d + 1 => {
                        if let (Some(builder), Some((field, text))) = (entry.as_mut(), capture.take())
                        {
                            builder.set(field, text);
                        }
                    }
                    Some(d) if depth == d => {
                        if let Some(done) = entry.take().and_then(EntryBuilder::finish) {
                            log.entries.push(done);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(LogError::MalformedInput(
            "unexpected end of input inside an open element".to_string(),
        ));
    }
    if !saw_root {
        return Err(LogError::MalformedInput("no <log> root element".to_string()));
    }

    Ok(log)
}
