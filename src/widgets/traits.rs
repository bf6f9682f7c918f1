use crate::core::validation::{FieldErrors, FormValues};
use crate::core::value::Value;
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

/// Everything a field needs to draw itself for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub values: &'a FormValues,
    pub errors: &'a FieldErrors,
    pub theme: &'a Theme,
    /// Display width of the label column, including padding.
    pub label_width: usize,
    /// Controls are drawn inert while a submission is in flight.
    pub disabled: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(values: &'a FormValues, errors: &'a FieldErrors, theme: &'a Theme) -> Self {
        Self {
            values,
            errors,
            theme,
            label_width: 0,
            disabled: false,
        }
    }

    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self, id: &str) -> Option<&'a Value> {
        self.values.get(id)
    }

    pub fn error(&self, id: &str) -> Option<&'a str> {
        self.errors.get(id).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

impl DrawOutput {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Drawable: every field strategy can draw itself
// ---------------------------------------------------------------------------

pub trait Drawable {
    fn id(&self) -> &str;
    fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput;
}
