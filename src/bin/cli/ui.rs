use clap::ValueEnum;
use nu_ansi_term::{Color, Style};
use std::fmt::Display;
use std::io::IsTerminal;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Theme {
    Auto,
    Light,
    Dark,
    Plain,
}

#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Key,
    Accent,
    Good,
    Bad,
}

/// Text-mode renderer for command reports. Styles are `None` when output is
/// not a terminal or the plain theme was requested.
pub struct Ui {
    styles: Option<Styles>,
}

struct Styles {
    heading: Style,
    key: Style,
    accent: Style,
    good: Style,
    bad: Style,
}

impl Styles {
    fn for_theme(theme: Theme) -> Option<Self> {
        let (heading, key, accent) = match theme {
            Theme::Plain => return None,
            Theme::Light => (Color::Blue, Color::Black, Color::Purple),
            Theme::Dark | Theme::Auto => (Color::Cyan, Color::LightBlue, Color::LightCyan),
        };
        Some(Self {
            heading: heading.bold(),
            key: key.normal(),
            accent: accent.normal(),
            good: Color::Green.bold(),
            bad: Color::Red.bold(),
        })
    }

    fn get(&self, tone: Tone) -> Style {
        match tone {
            Tone::Heading => self.heading,
            Tone::Key => self.key,
            Tone::Accent => self.accent,
            Tone::Good => self.good,
            Tone::Bad => self.bad,
        }
    }
}

impl Ui {
    pub fn new(theme: Theme) -> Self {
        let styles = if std::io::stdout().is_terminal() {
            Styles::for_theme(theme)
        } else {
            None
        };

        #[cfg(windows)]
        if styles.is_some() {
            let _ = nu_ansi_term::enable_ansi_support();
        }

        Self { styles }
    }

    fn tint(&self, tone: Tone, text: impl Into<String>) -> String {
        let text = text.into();
        match &self.styles {
            Some(styles) => styles.get(tone).paint(text).to_string(),
            None => text,
        }
    }

    /// Aligned `key: value` rows under a heading; nothing is printed for an
    /// empty section.
    pub fn section<'a, I, V>(&self, title: &str, rows: I)
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let rows: Vec<(&str, String)> = rows
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        if rows.is_empty() {
            return;
        }
        println!("{}", self.tint(Tone::Heading, format!("# {title}")));
        let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        for (key, value) in rows {
            println!("  {} {value}", self.tint(Tone::Key, format!("{key:>width$}:")));
        }
    }

    pub fn list<I>(&self, title: &str, entries: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return;
        }
        println!("{}", self.tint(Tone::Heading, format!("# {title}")));
        for entry in entries {
            println!("  {} {entry}", self.tint(Tone::Accent, "-"));
        }
    }

    pub fn info(&self, message: &str) {
        println!("{} {message}", self.tint(Tone::Accent, "info:"));
    }

    pub fn success(&self, message: &str) {
        println!("{} {message}", self.tint(Tone::Good, "ok:"));
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {message}", self.tint(Tone::Bad, "warning:"));
    }
}
