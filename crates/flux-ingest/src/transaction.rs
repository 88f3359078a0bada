//! Transaction log parsing: comma-separated metadata with an embedded JSON
//! array of line items.
//!
//! A transaction line has six comma fields; only the first five commas split,
//! so the JSON payload in the sixth field keeps its embedded commas:
//!
//! ```text
//! <ignored>,<timestamp>,<ignored>,<owner_id>,<ignored>,<json payload>
//! ```
//!
//! Each payload item with a present, non-null integer `qty` becomes one
//! [`QuantityEvent`]; items without a `qty` are skipped. An absent `sku`
//! propagates as `None`.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::Deserialize;

use flux_core::event::QuantityEvent;

use crate::error::IngestError;

/// Comma fields per transaction line.
const TRANSACTION_FIELDS: usize = 6;

/// One item of the embedded JSON payload.
///
/// `qty` stays a raw JSON value so a present-but-non-integer quantity can be
/// reported as [`IngestError::QtyType`] instead of a generic decode failure.
#[derive(Debug, Deserialize)]
struct LineItem {
    sku: Option<String>,
    qty: Option<serde_json::Value>,
}

/// Parse one transaction line into its quantity events.
///
/// `line_no` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `IngestError` on fewer than six comma fields, an undecodable
/// payload, or a present non-integer quantity.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<QuantityEvent>, IngestError> {
    let fields: Vec<&str> = line.splitn(TRANSACTION_FIELDS, ',').collect();
    if fields.len() < TRANSACTION_FIELDS {
        return Err(IngestError::MalformedLine {
            line_no,
            fields: fields.len(),
        });
    }
    let timestamp = fields[1];
    let owner_id = fields[3];
    let payload = fields[5];

    let items: Vec<LineItem> =
        serde_json::from_str(payload).map_err(|source| IngestError::PayloadDecode {
            line: line.to_owned(),
            source,
        })?;

    let mut events = Vec::with_capacity(items.len());
    for item in items {
        let Some(raw_qty) = item.qty else {
            continue;
        };
        let qty = raw_qty.as_i64().ok_or_else(|| IngestError::QtyType {
            line_no,
            value: raw_qty.to_string(),
        })?;
        events.push(QuantityEvent {
            timestamp: timestamp.to_owned(),
            owner_id: owner_id.to_owned(),
            sku: item.sku,
            qty,
        });
    }
    Ok(events)
}

/// Lazy iterator of quantity events over a buffered reader.
///
/// Lines are parsed one at a time and their events yielded in order, so the
/// log never has to fit in memory. The iterator fuses after the first error.
pub struct EventReader<R> {
    lines: Lines<R>,
    line_no: usize,
    pending: VecDeque<QuantityEvent>,
    failed: bool,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            pending: VecDeque::new(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<QuantityEvent, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }
            match self.lines.next() {
                None => return None,
                Some(Err(err)) => {
                    self.failed = true;
                    return Some(Err(IngestError::Io(err)));
                }
                Some(Ok(line)) => {
                    self.line_no += 1;
                    match parse_line(&line, self.line_no) {
                        Ok(events) => self.pending = VecDeque::from(events),
                        Err(err) => {
                            self.failed = true;
                            return Some(Err(err));
                        }
                    }
                }
            }
        }
    }
}

/// Read a whole transaction log file into events.
///
/// # Errors
///
/// Returns `IngestError` if the file cannot be read or any line fails to
/// parse; a missing file surfaces as [`IngestError::Io`] with kind
/// `NotFound`.
pub fn read_log_file(path: &Path) -> Result<Vec<QuantityEvent>, IngestError> {
    let file = File::open(path)?;
    let events: Vec<QuantityEvent> =
        EventReader::new(BufReader::new(file)).collect::<Result<_, _>>()?;
    tracing::debug!("parsed {} events from {}", events.len(), path.display());
    Ok(events)
}
