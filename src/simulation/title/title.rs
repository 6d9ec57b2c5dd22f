//! Menu title split into individually animated letters.

pub const TITLE_TEXT: &str = "GLOW FLOW";

/// Stagger between consecutive letters
pub const LETTER_DELAY_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleLetter {
    /// Empty for spaces, so the gap keeps its slot in the stagger
    pub text: String,
    pub delay_ms: u32,
}

impl TitleLetter {
    /// Value for the CSS `animation-delay` property, e.g. `0.3s`.
    pub fn css_delay(&self) -> String {
        format!("{:.1}s", f64::from(self.delay_ms) / 1000.0)
    }
}

pub fn explode_title(text: &str) -> Vec<TitleLetter> {
    text.chars()
        .enumerate()
        .map(|(i, c)| TitleLetter {
            text: if c == ' ' { String::new() } else { c.to_string() },
            delay_ms: i as u32 * LETTER_DELAY_MS,
        })
        .collect()
}
