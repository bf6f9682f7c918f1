use crate::core::schema::FieldSpec;
use crate::ui::span::Span;
use crate::widgets::base::FieldBase;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

pub const EMPTY_VALUE: &str = "—";

/// Read-only label and value. Never shows a validation error.
pub struct DisplayText<'a> {
    base: FieldBase<'a>,
}

impl<'a> DisplayText<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
        Self {
            base: FieldBase::new(spec),
        }
    }

    fn text(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let current = ctx.value(self.id()).filter(|value| !value.is_blank());
        let fallback = self
            .base
            .spec()
            .default_value
            .as_ref()
            .filter(|value| !value.is_blank());
        current.or(fallback).map(|value| value.display())
    }
}

impl Drawable for DisplayText<'_> {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput {
        let mut line = self.base.label_spans(ctx);
        match self.text(ctx) {
            Some(text) => line.push(Span::styled(text, ctx.theme.value).no_wrap()),
            None => line.push(Span::styled(EMPTY_VALUE, ctx.theme.placeholder).no_wrap()),
        }
        DrawOutput { lines: vec![line] }
    }
}
