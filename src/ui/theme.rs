use crate::ui::action_style::{Accent, Tone};
use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub read_only: Style,
    pub disabled: Style,
    pub banner: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().bold(),
            label: Style::new().bold(),
            value: Style::new(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            placeholder: Style::new().color(Color::DarkGrey),
            read_only: Style::new().color(Color::DarkGrey).dim(),
            disabled: Style::new().color(Color::DarkGrey).dim(),
            banner: Style::new().color(Color::White).background(Color::Red).bold(),
        }
    }

    pub fn accent(&self, accent: Accent) -> Style {
        Style::new().color(accent.color()).bold()
    }

    pub fn tone(&self, tone: Tone) -> Style {
        Style::new().color(tone.color())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
