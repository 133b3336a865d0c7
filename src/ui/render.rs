//! Plain-text and JSON rendering of a [`Snapshot`].

use std::fmt::Write;

use super::snapshot::Snapshot;

/// Width of the right-aligned display area.
const DISPLAY_WIDTH: usize = 24;

/// Render the display panel: the pending-operation preview above the entry,
/// both right-aligned, and the memory register when it is in use.
///
/// ```text
///                     12 ×
///                        3
/// M                    2.5
/// ```
pub fn render_display(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let preview = snapshot.preview.as_deref().unwrap_or("");

    let _ = writeln!(out, "{:>width$}", preview, width = DISPLAY_WIDTH);
    let _ = writeln!(out, "{:>width$}", snapshot.display, width = DISPLAY_WIDTH);
    if snapshot.has_memory {
        let _ = writeln!(
            out,
            "M{:>width$}",
            snapshot.memory,
            width = DISPLAY_WIDTH - 1
        );
    }

    out
}

/// Render the history list, newest first.
pub fn render_history(snapshot: &Snapshot) -> String {
    if snapshot.history.is_empty() {
        return "No calculations yet\n".to_string();
    }

    snapshot
        .history
        .iter()
        .map(|entry| format!("  {}\n", entry))
        .collect()
}

/// Render the whole snapshot as a single JSON line.
pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(display: &str, preview: Option<&str>, history: &[&str], memory: f64) -> Snapshot {
        Snapshot {
            display: display.to_string(),
            preview: preview.map(str::to_string),
            history: history.iter().map(|entry| entry.to_string()).collect(),
            memory: memory.to_string(),
            has_memory: memory != 0.0,
        }
    }

    #[test]
    fn test_display_right_aligned() {
        let text = render_display(&snapshot("3", Some("12 ×"), &[], 0.0));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), DISPLAY_WIDTH);
        assert!(lines[0].ends_with("12 ×"));
        assert!(lines[1].ends_with(" 3"));
    }

    #[test]
    fn test_memory_line_only_when_set() {
        let text = render_display(&snapshot("0", None, &[], 2.5));
        let last = text.lines().last().unwrap_or_default();
        assert!(last.starts_with('M'));
        assert!(last.ends_with("2.5"));
    }

    #[test]
    fn test_history_rendering() {
        assert_eq!(
            render_history(&snapshot("0", None, &[], 0.0)),
            "No calculations yet\n"
        );
        assert_eq!(
            render_history(&snapshot("0", None, &["2 + 2 = 4", "1 + 1 = 2"], 0.0)),
            "  2 + 2 = 4\n  1 + 1 = 2\n"
        );
    }

    #[test]
    fn test_json_fields() {
        let json = render_json(&snapshot("56", None, &["7 × 8 = 56"], 0.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["display"], "56");
        assert_eq!(value["preview"], serde_json::Value::Null);
        assert_eq!(value["history"][0], "7 × 8 = 56");
        assert_eq!(value["has_memory"], false);
    }
}
