use crate::analysis::report;

/// Statistics report for `text`. Blank text is allowed and simply reports
/// zero counts.
pub fn show_stats(text: &str) -> String {
    report(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_stats() {
        let output = show_stats("Attack at dawn");
        assert!(output.contains("Text Statistics"));
        assert!(output.contains("Counts: 14 characters, 3 words"));
        assert!(output.contains("A:     4 (33.3%)"));
    }
}
