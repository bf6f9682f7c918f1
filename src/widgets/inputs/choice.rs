use crate::core::schema::FieldSpec;
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::FieldBase;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

/// Radio group. `row` lays the options out on one line, otherwise one per line.
pub struct ChoiceInput<'a> {
    base: FieldBase<'a>,
}

impl<'a> ChoiceInput<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
        Self {
            base: FieldBase::new(spec),
        }
    }

    fn option_spans(&self, ctx: &RenderContext<'_>, label: &str, selected: bool) -> Vec<Span> {
        let (bullet, bullet_style, text_style) = if selected {
            (
                "●",
                Style::new().color(Color::Green).bold(),
                Style::new().color(Color::Cyan).bold(),
            )
        } else {
            ("○", ctx.theme.hint, ctx.theme.hint)
        };
        vec![
            Span::styled(bullet, self.base.control_style(ctx, bullet_style)).no_wrap(),
            Span::new(" ").no_wrap(),
            Span::styled(label, self.base.control_style(ctx, text_style)).no_wrap(),
        ]
    }
}

impl Drawable for ChoiceInput<'_> {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput {
        let spec = self.base.spec();
        let current = ctx
            .value(self.id())
            .and_then(|value| value.to_text_scalar())
            .unwrap_or_default();

        let mut lines = Vec::new();
        let mut line = self.base.label_spans(ctx);
        for (index, option) in spec.options.iter().enumerate() {
            if index > 0 {
                if spec.row {
                    line.push(Span::new("  ").no_wrap());
                } else {
                    lines.push(std::mem::replace(&mut line, vec![self.base.indent(ctx)]));
                }
            }
            line.extend(self.option_spans(ctx, &option.label, option.value == current));
        }
        lines.push(line);
        lines.extend(self.base.footer_line(ctx));

        DrawOutput { lines }
    }
}
