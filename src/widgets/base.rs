use crate::core::schema::FieldSpec;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use crate::widgets::traits::RenderContext;
use unicode_width::UnicodeWidthStr;

const REQUIRED_MARKER: &str = " *";

/// Shared layout for one field row: a padded label column followed by the
/// control, then an optional error or helper line under the control.
#[derive(Debug, Clone, Copy)]
pub struct FieldBase<'a> {
    spec: &'a FieldSpec,
}

impl<'a> FieldBase<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &'a FieldSpec {
        self.spec
    }

    pub fn id(&self) -> &'a str {
        self.spec.name.as_str()
    }

    pub fn label(&self) -> &'a str {
        self.spec.label.as_str()
    }

    /// Width of the label text as drawn, marker included.
    pub fn label_width(spec: &FieldSpec) -> usize {
        let marker = if spec.is_validated_required() {
            REQUIRED_MARKER.width()
        } else {
            0
        };
        spec.label.width() + marker
    }

    pub fn label_spans(&self, ctx: &RenderContext<'_>) -> SpanLine {
        let mut spans = vec![Span::styled(self.label(), ctx.theme.label).no_wrap()];
        if self.spec.is_validated_required() {
            spans.push(Span::styled(REQUIRED_MARKER, ctx.theme.error).no_wrap());
        }
        let used = Self::label_width(self.spec);
        let pad = ctx.label_width.saturating_sub(used).max(1);
        spans.push(Span::new(" ".repeat(pad)).no_wrap());
        spans
    }

    /// Blank span lining continuation lines up with the control column.
    pub fn indent(&self, ctx: &RenderContext<'_>) -> Span {
        let width = ctx.label_width.max(Self::label_width(self.spec) + 1);
        Span::new(" ".repeat(width)).no_wrap()
    }

    pub fn control_style(&self, ctx: &RenderContext<'_>, base: Style) -> Style {
        if ctx.disabled { ctx.theme.disabled } else { base }
    }

    /// Inline error when present, otherwise the helper text, if any.
    pub fn footer_line(&self, ctx: &RenderContext<'_>) -> Option<SpanLine> {
        if let Some(error) = ctx.error(self.id()) {
            return Some(vec![
                self.indent(ctx),
                Span::styled(format!("! {error}"), ctx.theme.error),
            ]);
        }
        self.spec
            .helper_text
            .as_ref()
            .map(|text| vec![self.indent(ctx), Span::styled(text.clone(), ctx.theme.hint)])
    }
}
