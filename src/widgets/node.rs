use crate::core::schema::{FieldKind, FieldSpec, Schema};
use crate::ui::span::SpanLine;
use crate::widgets::base::FieldBase;
use crate::widgets::inputs::choice::ChoiceInput;
use crate::widgets::inputs::select::SelectInput;
use crate::widgets::inputs::text::{TextInput, TextMode};
use crate::widgets::outputs::text::DisplayText;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

const LABEL_GAP: usize = 2;

/// Draw strategy chosen for one field spec.
pub enum Node<'a> {
    /// Bound to an editable value and may show an inline error.
    Input(Box<dyn Drawable + 'a>),
    /// Read-only, excluded from validation.
    Output(Box<dyn Drawable + 'a>),
}

impl<'a> Node<'a> {
    /// `None` for unsupported kinds: they render nothing, and the miss is
    /// logged so a misconfigured schema shows up in test output.
    pub fn for_field(spec: &'a FieldSpec) -> Option<Self> {
        let node = match &spec.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Number => {
                Self::Input(Box::new(TextInput::new(spec)))
            }
            FieldKind::Password => {
                Self::Input(Box::new(TextInput::new(spec).with_mode(TextMode::Password)))
            }
            FieldKind::Select => Self::Input(Box::new(SelectInput::new(spec))),
            FieldKind::Radio => Self::Input(Box::new(ChoiceInput::new(spec))),
            FieldKind::Display => Self::Output(Box::new(DisplayText::new(spec))),
            FieldKind::Unsupported(tag) => {
                tracing::warn!(field = %spec.name, tag = %tag, "unsupported field type, skipping");
                return None;
            }
        };
        Some(node)
    }

    pub fn draw(&self, ctx: &RenderContext<'_>) -> DrawOutput {
        match self {
            Self::Input(w) | Self::Output(w) => w.draw(ctx),
        }
    }
}

pub fn render_field(spec: &FieldSpec, ctx: &RenderContext<'_>) -> DrawOutput {
    Node::for_field(spec)
        .map(|node| node.draw(ctx))
        .unwrap_or_default()
}

/// Label column wide enough for the longest label plus a gap.
pub fn label_column_width(schema: &Schema) -> usize {
    schema
        .iter()
        .filter(|spec| !matches!(spec.kind, FieldKind::Unsupported(_)))
        .map(FieldBase::label_width)
        .max()
        .map(|width| width + LABEL_GAP)
        .unwrap_or(0)
}

pub fn render_fields(schema: &Schema, ctx: &RenderContext<'_>) -> Vec<SpanLine> {
    schema
        .iter()
        .flat_map(|spec| render_field(spec, ctx).lines)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Node, label_column_width, render_field, render_fields};
    use crate::core::FieldId;
    use crate::core::schema::{FieldKind, FieldOption, FieldSpec, Schema};
    use crate::core::validation::{FieldErrors, FormValues};
    use crate::core::value::Value;
    use crate::ui::span::line_text;
    use crate::ui::theme::Theme;
    use crate::widgets::traits::RenderContext;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(name, value)| (FieldId::from(*name), Value::text(*value)))
            .collect()
    }

    fn texts(lines: &[Vec<crate::ui::span::Span>]) -> Vec<String> {
        lines.iter().map(|line| line_text(line)).collect()
    }

    #[test]
    fn text_field_shows_value_and_inline_error() {
        let theme = Theme::default();
        let spec = FieldSpec::text("reason", "Reason").required();
        let values = values(&[("reason", "")]);
        let mut errors = FieldErrors::new();
        errors.insert("reason".into(), "this field is required".to_string());
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(10);

        let out = render_field(&spec, &ctx);
        assert_eq!(
            texts(&out.lines),
            vec!["Reason *  ".to_string(), "          ! this field is required".to_string()]
        );
    }

    #[test]
    fn password_is_masked() {
        let theme = Theme::default();
        let spec = FieldSpec::password("pin", "PIN");
        let values = values(&[("pin", "1234")]);
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(5);

        let out = render_field(&spec, &ctx);
        assert_eq!(texts(&out.lines), vec!["PIN  ****".to_string()]);
    }

    #[test]
    fn read_only_text_is_marked() {
        let theme = Theme::default();
        let spec = FieldSpec::text("guest", "Guest").read_only();
        let values = values(&[("guest", "Ana")]);
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(7);

        let out = render_field(&spec, &ctx);
        assert_eq!(texts(&out.lines), vec!["Guest  Ana (read-only)".to_string()]);
    }

    #[test]
    fn select_shows_option_label() {
        let theme = Theme::default();
        let spec = FieldSpec::select(
            "room",
            "Room",
            vec![FieldOption::new("101", "101 · Deluxe"), FieldOption::from("102")],
        );
        let values = values(&[("room", "101")]);
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(6);

        let out = render_field(&spec, &ctx);
        assert_eq!(texts(&out.lines), vec!["Room  ‹ 101 · Deluxe ›".to_string()]);
    }

    #[test]
    fn radio_layout_follows_row_hint() {
        let theme = Theme::default();
        let options = vec![FieldOption::from("cash"), FieldOption::from("card")];
        let values = values(&[("pay", "card")]);
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(5);

        let stacked = render_field(&FieldSpec::radio("pay", "Pay", options.clone()), &ctx);
        assert_eq!(
            texts(&stacked.lines),
            vec!["Pay  ○ cash".to_string(), "     ● card".to_string()]
        );

        let inline = render_field(&FieldSpec::radio("pay", "Pay", options).inline_row(), &ctx);
        assert_eq!(texts(&inline.lines), vec!["Pay  ○ cash  ● card".to_string()]);
    }

    #[test]
    fn display_field_falls_back_and_never_shows_errors() {
        let theme = Theme::default();
        let values = values(&[("room", ""), ("rate", "")]);
        let mut errors = FieldErrors::new();
        errors.insert("room".into(), "ignored".to_string());
        let ctx = RenderContext::new(&values, &errors, &theme).with_label_width(6);

        let empty = render_field(&FieldSpec::display("room", "Room"), &ctx);
        assert_eq!(texts(&empty.lines), vec!["Room  —".to_string()]);

        let defaulted = render_field(&FieldSpec::display("rate", "Rate").with_default("120"), &ctx);
        assert_eq!(texts(&defaulted.lines), vec!["Rate  120".to_string()]);
    }

    #[test]
    fn unsupported_kind_renders_nothing() {
        let theme = Theme::default();
        let spec = FieldSpec::new("sig", "Signature", FieldKind::from("signature"));
        let values = FormValues::new();
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme);

        assert!(Node::for_field(&spec).is_none());
        assert!(render_field(&spec, &ctx).is_empty());
    }

    #[test]
    fn label_column_aligns_all_fields() {
        let schema = Schema::new(vec![
            FieldSpec::text("a", "Guest name").required(),
            FieldSpec::display("b", "Room"),
            FieldSpec::new("c", "A very long unsupported label", FieldKind::from("map")),
        ]);
        assert_eq!(label_column_width(&schema), 14);

        let theme = Theme::default();
        let values = values(&[("a", "Ana"), ("b", "204")]);
        let errors = FieldErrors::new();
        let ctx = RenderContext::new(&values, &errors, &theme)
            .with_label_width(label_column_width(&schema));
        assert_eq!(
            texts(&render_fields(&schema, &ctx)),
            vec!["Guest name *  Ana".to_string(), "Room          204".to_string()]
        );
    }
}
