//! Terminal output helpers

use jana_core::EmbeddingRecord;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a section heading in bold
pub fn print_heading(text: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    let _ = writeln!(stdout, "{}", text);
    let _ = stdout.reset();
}

/// Print an error line in red to stderr
pub fn print_error(text: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(stderr, "{}", text);
    let _ = stderr.reset();
}

/// One-line summary of a stored record
pub fn format_record(record: &EmbeddingRecord) -> String {
    let content_id = record.content_id.as_deref().unwrap_or("-");
    format!(
        "#{} [{}/{}] {} ({} dims, model {})",
        record.id,
        record.content_type,
        content_id,
        snippet(&record.text, 60),
        record.dimension,
        record.model
    )
}

/// Result line for a nearest-neighbor hit
pub fn format_similar_record(record: &EmbeddingRecord) -> String {
    let similarity = record.similarity().unwrap_or_default();
    format!("{:>5.1}% {}", similarity * 100.0, format_record(record))
}

fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EmbeddingRecord {
        EmbeddingRecord {
            id: 7,
            content_type: "note".to_string(),
            content_id: None,
            text: "short text".to_string(),
            model: "test-model".to_string(),
            dimension: 3,
            vector: vec![0.1, 0.2, 0.3],
            created_at: "2025-03-25T18:33:30Z".to_string(),
            updated_at: "2025-03-25T18:33:30Z".to_string(),
            distance: Some(0.25),
        }
    }

    #[test]
    fn record_line_includes_id_and_type() {
        let line = format_record(&record());
        assert!(line.contains("#7"));
        assert!(line.contains("[note/-]"));
        assert!(line.contains("3 dims"));
    }

    #[test]
    fn similar_line_shows_similarity_percent() {
        let line = format_similar_record(&record());
        assert!(line.contains("75.0%"));
    }

    #[test]
    fn long_text_is_snipped() {
        let long = "x".repeat(100);
        assert!(snippet(&long, 10).ends_with("..."));
        assert_eq!(snippet("short", 10), "short");
    }
}
