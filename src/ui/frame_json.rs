use crate::ui::span::{SpanLine, WrapMode};
use crate::ui::style::Color;

pub fn frame_to_json(lines: &[SpanLine]) -> serde_json::Value {
    let lines = lines
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.iter()
                    .map(|span| {
                        let wrap_mode = match span.wrap_mode {
                            WrapMode::NoWrap => "no_wrap",
                            WrapMode::Wrap => "wrap",
                        };
                        serde_json::json!({
                            "text": span.text,
                            "wrap_mode": wrap_mode,
                            "style": {
                                "color": span.style.color.map(color_to_json),
                                "background": span.style.background.map(color_to_json),
                                "bold": span.style.bold,
                                "dim": span.style.dim,
                            }
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({ "lines": lines })
}

fn color_to_json(color: Color) -> serde_json::Value {
    match color {
        Color::Reset => serde_json::json!("reset"),
        Color::Black => serde_json::json!("black"),
        Color::DarkGrey => serde_json::json!("dark_grey"),
        Color::Red => serde_json::json!("red"),
        Color::Green => serde_json::json!("green"),
        Color::Yellow => serde_json::json!("yellow"),
        Color::Blue => serde_json::json!("blue"),
        Color::Magenta => serde_json::json!("magenta"),
        Color::Cyan => serde_json::json!("cyan"),
        Color::White => serde_json::json!("white"),
        Color::Rgb(r, g, b) => serde_json::json!({
            "rgb": [r, g, b]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::frame_to_json;
    use crate::ui::span::Span;
    use crate::ui::style::{Color, Style};

    #[test]
    fn spans_carry_text_and_style() {
        let lines = vec![vec![
            Span::styled("Check-in", Style::new().color(Color::Green).bold()).no_wrap(),
        ]];
        let json = frame_to_json(&lines);
        let span = &json["lines"][0][0];
        assert_eq!(span["text"], "Check-in");
        assert_eq!(span["wrap_mode"], "no_wrap");
        assert_eq!(span["style"]["color"], "green");
        assert_eq!(span["style"]["bold"], true);
        assert!(span["style"]["background"].is_null());
    }
}
