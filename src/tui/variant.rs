use ratatui::style::Color;
use std::str::FromStr;

use crate::utils::WaitlistError;

/// The four visual variants of the signup widget. They differ only in palette
/// and copy; all of them drive the same submission controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Black background, white button
    #[default]
    Midnight,
    /// Light background, dark text
    Paper,
    /// Purple gradient look
    Aurora,
    /// Green-on-black console look
    Terminal,
}

/// Colors used by a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub button: Color,
    pub button_text: Color,
    pub error: Color,
    pub success: Color,
}

/// Marketing copy used by a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wording {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
    pub confirmation: &'static str,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Self::Midnight, Self::Paper, Self::Aurora, Self::Terminal];

    /// Cycle to the next variant
    pub fn cycle(&self) -> Self {
        match self {
            Self::Midnight => Self::Paper,
            Self::Paper => Self::Aurora,
            Self::Aurora => Self::Terminal,
            Self::Terminal => Self::Midnight,
        }
    }

    /// Cycle to the previous variant
    pub fn cycle_reverse(&self) -> Self {
        match self {
            Self::Midnight => Self::Terminal,
            Self::Terminal => Self::Aurora,
            Self::Aurora => Self::Paper,
            Self::Paper => Self::Midnight,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Midnight => "Midnight",
            Self::Paper => "Paper",
            Self::Aurora => "Aurora",
            Self::Terminal => "Terminal",
        }
    }

    /// Name used in config files and on the command line
    pub fn to_str(&self) -> &str {
        match self {
            Self::Midnight => "midnight",
            Self::Paper => "paper",
            Self::Aurora => "aurora",
            Self::Terminal => "terminal",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Midnight => Palette {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::Rgb(161, 161, 170),
                border: Color::Rgb(39, 39, 42),
                button: Color::White,
                button_text: Color::Black,
                error: Color::Red,
                success: Color::Green,
            },
            Self::Paper => Palette {
                background: Color::Rgb(250, 250, 249),
                foreground: Color::Rgb(28, 25, 23),
                muted: Color::Rgb(120, 113, 108),
                border: Color::Rgb(214, 211, 209),
                button: Color::Rgb(28, 25, 23),
                button_text: Color::White,
                error: Color::Rgb(220, 38, 38),
                success: Color::Rgb(22, 163, 74),
            },
            Self::Aurora => Palette {
                background: Color::Rgb(30, 27, 75),
                foreground: Color::Rgb(237, 233, 254),
                muted: Color::Rgb(167, 139, 250),
                border: Color::Rgb(109, 40, 217),
                button: Color::Rgb(236, 72, 153),
                button_text: Color::White,
                error: Color::Rgb(251, 113, 133),
                success: Color::Rgb(52, 211, 153),
            },
            Self::Terminal => Palette {
                background: Color::Black,
                foreground: Color::Green,
                muted: Color::DarkGray,
                border: Color::Green,
                button: Color::Green,
                button_text: Color::Black,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }

    pub fn wording(&self) -> Wording {
        match self {
            Self::Midnight => Wording {
                headline: "Join the waitlist",
                tagline: "Be the first to experience something new",
                placeholder: "Enter your email",
                button: "Join Now →",
                confirmation: "You're on the waitlist! We'll notify you when we launch.",
            },
            Self::Paper => Wording {
                headline: "Get early access",
                tagline: "Sign up and we'll save you a seat",
                placeholder: "you@example.com",
                button: "Request access",
                confirmation: "Thanks! Your spot is saved. Watch your inbox.",
            },
            Self::Aurora => Wording {
                headline: "Something bright is coming",
                tagline: "Be among the first to see it",
                placeholder: "Your best email",
                button: "Count me in ✦",
                confirmation: "You're in! We'll light up your inbox at launch.",
            },
            Self::Terminal => Wording {
                headline: "$ waitlist --join",
                tagline: "# early access, no spam",
                placeholder: "email>",
                button: "[ENTER]",
                confirmation: "OK: added to queue. Notification pending launch.",
            },
        }
    }

    /// Line showing how many people already signed up
    pub fn count_line(&self, count: usize) -> String {
        let count = format_count(count);
        match self {
            Self::Midnight => format!("Join {} others waiting in line", count),
            Self::Paper => format!("{} people are already waiting", count),
            Self::Aurora => format!("Join {} early explorers", count),
            Self::Terminal => format!("queue.length = {}", count),
        }
    }
}

impl FromStr for Variant {
    type Err = WaitlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midnight" | "dark" => Ok(Self::Midnight),
            "paper" | "light" => Ok(Self::Paper),
            "aurora" | "gradient" => Ok(Self::Aurora),
            "terminal" | "term" | "mono" => Ok(Self::Terminal),
            other => Err(WaitlistError::Config(format!(
                "Unknown variant '{}' (expected midnight, paper, aurora or terminal)",
                other
            ))),
        }
    }
}

/// Format a count with thousands separators, e.g. `12,345`
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
