use crate::core::schema::FieldSpec;
use crate::ui::span::Span;
use crate::widgets::base::FieldBase;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

const EMPTY_SELECTION: &str = "Select…";

/// Drop-down style control showing the active option between chevrons.
pub struct SelectInput<'a> {
    base: FieldBase<'a>,
}

impl<'a> SelectInput<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
        Self {
            base: FieldBase::new(spec),
        }
    }

    fn selected_text(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let raw = ctx.value(self.id())?.to_text_scalar()?;
        if raw.trim().is_empty() {
            return None;
        }
        // Out-of-set values are shown as-is.
        let label = self.base.spec().option_label(&raw).map(str::to_string);
        Some(label.unwrap_or(raw))
    }
}

impl Drawable for SelectInput<'_> {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput {
        let mut line = self.base.label_spans(ctx);
        match self.selected_text(ctx) {
            Some(text) => {
                let style = self.base.control_style(ctx, ctx.theme.value);
                line.push(Span::styled(format!("‹ {text} ›"), style).no_wrap());
            }
            None => {
                line.push(
                    Span::styled(format!("‹ {EMPTY_SELECTION} ›"), ctx.theme.placeholder)
                        .no_wrap(),
                );
            }
        }

        let mut lines = vec![line];
        lines.extend(self.base.footer_line(ctx));
        DrawOutput { lines }
    }
}
