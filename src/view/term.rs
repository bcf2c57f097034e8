use super::types::{ErrorCard, FieldMark, ResultCard, ResultVariant};
use super::FormView;

/// Renders the form panels as plain text on stdout. The panel is always the
/// last thing printed, which is this view's equivalent of scrolling the
/// result into view.
pub struct TerminalView;

impl FormView for TerminalView {
    fn set_submitting(&self) {
        println!("Analyzing...");
    }

    fn set_idle(&self) {}

    fn mark_field(&self, name: &str, mark: FieldMark, message: Option<&str>) {
        match mark {
            FieldMark::Valid => println!("  {name}: ok"),
            FieldMark::Error => {
                println!("  {name}: {}", message.unwrap_or("invalid"));
            }
        }
    }

    fn clear_field_mark(&self, _name: &str) {}

    fn show_result(&self, card: &ResultCard) {
        let headline = match card.variant {
            ResultVariant::Positive => "✓ Positive prediction",
            ResultVariant::Negative => "✗ Negative prediction",
        };

        println!();
        println!("{headline}");
        println!("  {}", card.label);
        println!("  Confidence:  {} ({})", card.confidence_pct, card.level);
        println!("  Probability: {}", card.probability_pct);
        println!(
            "  Rendered at: {}",
            card.rendered_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    fn show_error(&self, card: &ErrorCard) {
        println!();
        println!("Prediction failed: {}", card.message);
        println!("Suggestions:");
        for suggestion in card.suggestions {
            println!("  - {suggestion}");
        }
    }

    fn reset(&self) {
        println!("Form cleared.");
    }
}
