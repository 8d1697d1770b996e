//! `remora topics`: print the built-in decks.

use crate::cards::{builtin_topics, Topic};
use anyhow::{Context, Result};
use std::fmt::Write as _;

pub fn print(json: bool) -> Result<()> {
    let output = if json {
        serde_json::to_string_pretty(builtin_topics()).context("Failed to serialize topics")?
    } else {
        render_plain(builtin_topics())
    };
    println!("{}", output);
    Ok(())
}

fn render_plain(topics: &[Topic]) -> String {
    let mut out = String::new();
    for topic in topics {
        let _ = writeln!(out, "📖 {} ({} cards)", topic.name, topic.cards.len());
        for (question, answer) in topic.cards {
            let _ = writeln!(out, "   Q: {}", question);
            let _ = writeln!(out, "   A: {}", answer);
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_listing() {
        let text = render_plain(builtin_topics());
        assert!(text.starts_with("📖 Mathematics (2 cards)"));
        assert!(text.contains("   A: 1945"));
    }

    #[test]
    fn test_json_listing() {
        let value = serde_json::to_value(builtin_topics()).unwrap();
        assert_eq!(value[2]["name"], "History");
        assert_eq!(value[2]["cards"][0][1], "1945");
    }
}
