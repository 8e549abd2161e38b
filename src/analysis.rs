//! Text statistics for plaintext and classical ciphertext.

use std::fmt;

/// Index of coincidence of uniformly random letters (1/26)
pub const IC_RANDOM: f64 = 1.0 / 26.0;
/// Typical index of coincidence of English text
pub const IC_ENGLISH: f64 = 0.0667;

/// Character and word counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.characters,
            if self.characters == 1 { "character" } else { "characters" },
            self.words,
            if self.words == 1 { "word" } else { "words" }
        )
    }
}

/// Occurrences of `A`..=`Z`, case-folded. Non-letters are ignored.
pub fn letter_frequencies(text: &str) -> [usize; 26] {
    let mut freq = [0usize; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        freq[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
    }
    freq
}

/// Probability that two letters drawn at random from `text` are equal.
/// Returns 0.0 when there are fewer than two letters.
pub fn index_of_coincidence(text: &str) -> f64 {
    let freq = letter_frequencies(text);
    let total: usize = freq.iter().sum();
    if total < 2 {
        return 0.0;
    }
    let numerator: usize = freq
        .iter()
        .map(|&c| if c > 1 { c * (c - 1) } else { 0 })
        .sum();
    numerator as f64 / (total * (total - 1)) as f64
}

fn interpret_ic(ic: f64) -> &'static str {
    if ic == 0.0 {
        "Not enough letters"
    } else if ic > 0.060 {
        "Close to natural language (plaintext or monoalphabetic cipher)"
    } else if ic > 0.045 {
        "Between language and random (short polyalphabetic key?)"
    } else {
        "Close to random (polyalphabetic cipher with a long key?)"
    }
}

/// Formatted statistics block for `text`
pub fn report(text: &str) -> String {
    let stats = TextStats::of(text);
    let freq = letter_frequencies(text);
    let letters: usize = freq.iter().sum();
    let ic = index_of_coincidence(text);

    let mut output = String::new();
    output.push_str("Text Statistics\n");
    output.push_str("===============\n\n");
    output.push_str(&format!("Counts: {}\n", stats));
    output.push_str(&format!("Letters: {}\n\n", letters));

    output.push_str(&format!("Index of Coincidence: {:.4}\n", ic));
    output.push_str(&format!(
        "  Reference: English ~{:.4}, random ~{:.4}\n",
        IC_ENGLISH, IC_RANDOM
    ));
    output.push_str(&format!("  Interpretation: {}\n\n", interpret_ic(ic)));

    output.push_str("Letter Frequency:\n");
    if letters == 0 {
        output.push_str("  No letters\n");
        return output;
    }
    let mut ranked: Vec<(char, usize)> = freq
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(i, &count)| ((b'A' + i as u8) as char, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (letter, count) in ranked {
        output.push_str(&format!(
            "  {}: {:>5} ({:.1}%)\n",
            letter,
            count,
            (count as f64 / letters as f64) * 100.0
        ));
    }

    output
}
