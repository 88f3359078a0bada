use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use flux_core::event::QuantityEvent;

/// Write one report entry per line via its `Display` impl.
///
/// An empty slice still produces the file, just with no lines.
pub fn write_lines<T: Display>(path: &Path, entries: &[T]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file at {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the intermediate parsed-events dump, one event per line.
pub fn write_parsed_events(path: &Path, events: &[QuantityEvent]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create parsed events file at {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for event in events {
        writeln!(writer, "{}", event.render_parsed_line())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use flux_core::event::QuantityEvent;
    use pretty_assertions::assert_eq;

    use super::{write_lines, write_parsed_events};

    #[test]
    fn write_lines_appends_newline_per_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");

        write_lines(&path, &["first", "second"]).expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn write_lines_with_no_entries_creates_empty_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");

        write_lines::<String>(&path, &[]).expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "");
    }

    #[test]
    fn write_lines_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("report.txt");

        let error = write_lines(&path, &["x"]).expect_err("write should fail");
        assert!(error.to_string().contains("failed to create report file"));
    }

    #[test]
    fn parsed_events_render_one_line_per_event() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("parsed_events.txt");
        let events = vec![
            QuantityEvent {
                timestamp: "2024-01-01T00:00:00".to_string(),
                owner_id: "77".to_string(),
                sku: Some("AAA".to_string()),
                qty: 10,
            },
            QuantityEvent {
                timestamp: "2024-01-02T00:00:00".to_string(),
                owner_id: "77".to_string(),
                sku: None,
                qty: 3,
            },
        ];

        write_parsed_events(&path, &events).expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(
            contents,
            "Date: 2024-01-01T00:00:00, seller_id: 77, qty: 10, sku: AAA\n\
             Date: 2024-01-02T00:00:00, seller_id: 77, qty: 3, sku: \n"
        );
    }
}
