//! JSON Lines message feed. Each line is one of:
//!
//!   {"sender_or_title": "27888", "body": "...", "channel": "sms"}     already-assembled message
//!   {"sender": "27888", "parts": ["BRADESCO CARTOES: ...", "..."]}   multipart SMS segments
//!   {"package": "com.savemoney.bank", "title": "...", "big_text": "..."}   posted notification

use anyhow::Result;
use gasto_core::{IncomingMessage, Notification, Transaction};
use gasto_ingest::classify;
use serde::Deserialize;
use std::io::BufRead;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub read: usize,
    pub expenses: usize,
    pub incomes: usize,
    pub unmatched: usize,
    pub invalid_lines: usize,
    /// Notifications from a package outside the filter, or with no text
    pub ignored_notifications: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: Option<&Transaction>) {
        self.read += 1;
        match outcome {
            Some(Transaction::Expense(_)) => self.expenses += 1,
            Some(Transaction::Income(_)) => self.incomes += 1,
            None => self.unmatched += 1,
        }
    }
}

// `package` is required, so plain message lines fall through to the later variants
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedLine {
    Notification(Notification),
    SmsParts {
        #[serde(default)]
        sender: String,
        parts: Vec<String>,
    },
    Message(IncomingMessage),
}

/// Parse every non-blank line into a message. Lines that are not valid UTF-8 or
/// not a known shape are logged, counted and skipped; only I/O errors abort.
pub fn read_messages<R: BufRead>(
    reader: R,
    package_filter: &str,
    summary: &mut Summary,
) -> Result<Vec<IncomingMessage>> {
    let mut messages = Vec::new();

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let line = match String::from_utf8(chunk?) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping non UTF-8 line");
                summary.invalid_lines += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<FeedLine>(&line) {
            Ok(FeedLine::Message(m)) => messages.push(m),
            Ok(FeedLine::SmsParts { sender, parts }) => {
                messages.push(IncomingMessage::sms_from_parts(sender, &parts));
            }
            Ok(FeedLine::Notification(n)) => {
                let package = n.package.clone();
                match n.into_message(package_filter) {
                    Some(m) => messages.push(m),
                    None => {
                        debug!(line = line_no, package = %package, "ignoring notification");
                        summary.ignored_notifications += 1;
                    }
                }
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping invalid message line");
                summary.invalid_lines += 1;
            }
        }
    }

    Ok(messages)
}

/// Classify a batch, keeping only recognized records.
pub fn classify_all(messages: &[IncomingMessage], summary: &mut Summary) -> Vec<Transaction> {
    let mut out = Vec::new();
    for m in messages {
        let outcome = classify(m);
        summary.record(outcome.as_ref());
        out.extend(outcome);
    }
    out
}
