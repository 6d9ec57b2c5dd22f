/// Longest single pulse ever sent to the device
pub const MAX_PULSE_MS: u32 = 100;

/// Intensity used when the stored setting is missing or garbage
pub const DEFAULT_INTENSITY: u32 = 50;

/// A single pulse or an on/off sequence, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Vibration {
    Pulse(u32),
    Sequence(Vec<u32>),
}

impl Vibration {
    /// Scale every duration by `intensity / 100` and clamp each to
    /// `MAX_PULSE_MS`. Fractions are truncated, matching the platform's
    /// conversion to whole milliseconds.
    pub fn scaled(&self, intensity: u32) -> Vibration {
        match self {
            Vibration::Pulse(ms) => Vibration::Pulse(scale_pulse(*ms, intensity)),
            Vibration::Sequence(seq) => {
                Vibration::Sequence(seq.iter().map(|ms| scale_pulse(*ms, intensity)).collect())
            }
        }
    }
}

#[inline]
pub fn scale_pulse(ms: u32, intensity: u32) -> u32 {
    let scaled = f64::from(ms) * f64::from(intensity) / 100.0;
    scaled.min(f64::from(MAX_PULSE_MS)) as u32
}

/// Named interactions and their base vibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Button,
    Collision,
    Explosion,
    Score,
    GameOver,
    Menu,
    Error,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Button,
        Pattern::Collision,
        Pattern::Explosion,
        Pattern::Score,
        Pattern::GameOver,
        Pattern::Menu,
        Pattern::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Button => "button",
            Pattern::Collision => "collision",
            Pattern::Explosion => "explosion",
            Pattern::Score => "score",
            Pattern::GameOver => "gameOver",
            Pattern::Menu => "menu",
            Pattern::Error => "error",
        }
    }

    pub fn from_name(name: &str) -> Option<Pattern> {
        Pattern::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn vibration(self) -> Vibration {
        match self {
            Pattern::Button => Vibration::Pulse(15),
            Pattern::Collision => Vibration::Pulse(20),
            Pattern::Explosion => Vibration::Sequence(vec![30, 10, 30]),
            Pattern::Score => Vibration::Sequence(vec![50, 10, 50]),
            Pattern::GameOver => Vibration::Sequence(vec![40, 10, 40, 10, 40]),
            Pattern::Menu => Vibration::Pulse(10),
            Pattern::Error => Vibration::Sequence(vec![100, 50, 100]),
        }
    }
}

/// Read a stored intensity the lenient way: leading whitespace is skipped,
/// an optional sign and the leading digits are used, anything after them is
/// ignored. No digits at all (or no value) means `DEFAULT_INTENSITY`.
/// The result is clamped into 0..=100.
pub fn parse_intensity(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_INTENSITY;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return DEFAULT_INTENSITY;
    }
    if negative {
        return 0;
    }
    // Anything too long to parse is far above the ceiling anyway
    digits[..end].parse::<u32>().map_or(100, |v| v.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_keeps_short_pulses() {
        assert_eq!(Pattern::Button.vibration().scaled(100), Vibration::Pulse(15));
    }

    #[test]
    fn pulses_are_clamped_to_one_hundred_ms() {
        assert_eq!(Vibration::Pulse(500).scaled(100), Vibration::Pulse(100));
        assert_eq!(
            Pattern::Error.vibration().scaled(100),
            Vibration::Sequence(vec![100, 50, 100])
        );
    }

    #[test]
    fn half_intensity_halves_each_step() {
        assert_eq!(
            Pattern::GameOver.vibration().scaled(50),
            Vibration::Sequence(vec![20, 5, 20, 5, 20])
        );
        // 15 * 0.5 = 7.5 truncates to 7
        assert_eq!(Pattern::Button.vibration().scaled(50), Vibration::Pulse(7));
    }

    #[test]
    fn names_round_trip() {
        for p in Pattern::ALL {
            assert_eq!(Pattern::from_name(p.name()), Some(p));
        }
        assert_eq!(Pattern::from_name("gameover"), None);
    }

    #[test]
    fn intensity_parsing_is_lenient() {
        assert_eq!(parse_intensity(None), DEFAULT_INTENSITY);
        assert_eq!(parse_intensity(Some("")), DEFAULT_INTENSITY);
        assert_eq!(parse_intensity(Some("loud")), DEFAULT_INTENSITY);
        assert_eq!(parse_intensity(Some("75")), 75);
        assert_eq!(parse_intensity(Some("  80%")), 80);
        assert_eq!(parse_intensity(Some("0")), 0);
        assert_eq!(parse_intensity(Some("-5")), 0);
        assert_eq!(parse_intensity(Some("250")), 100);
        assert_eq!(parse_intensity(Some("99999999999999")), 100);
    }
}
