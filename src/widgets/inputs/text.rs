use crate::core::schema::FieldSpec;
use crate::ui::span::Span;
use crate::widgets::base::FieldBase;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Plain,
    Password,
}

/// Single-line control for text, email, number and password fields.
pub struct TextInput<'a> {
    base: FieldBase<'a>,
    mode: TextMode,
}

impl<'a> TextInput<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
        Self {
            base: FieldBase::new(spec),
            mode: TextMode::Plain,
        }
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    fn display_value(&self, raw: &str) -> String {
        match self.mode {
            TextMode::Plain => raw.to_string(),
            TextMode::Password => "*".repeat(raw.chars().count()),
        }
    }
}

impl Drawable for TextInput<'_> {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput {
        let spec = self.base.spec();
        let raw = ctx.value(self.id()).map(|value| value.display()).unwrap_or_default();

        let mut line = self.base.label_spans(ctx);
        if raw.is_empty() {
            let placeholder = spec.placeholder.clone().unwrap_or_default();
            line.push(Span::styled(placeholder, ctx.theme.placeholder).no_wrap());
        } else {
            let style = if spec.read_only {
                ctx.theme.read_only
            } else {
                self.base.control_style(ctx, ctx.theme.value)
            };
            line.push(Span::styled(self.display_value(&raw), style).no_wrap());
        }
        if spec.read_only {
            line.push(Span::styled(" (read-only)", ctx.theme.hint).no_wrap());
        }

        let mut lines = vec![line];
        lines.extend(self.base.footer_line(ctx));
        DrawOutput { lines }
    }
}
