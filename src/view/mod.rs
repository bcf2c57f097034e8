pub mod render;
mod term;
mod types;

pub use term::TerminalView;
pub use types::*;

/// View binding for the prediction form: the one place the controller
/// touches presentation. Element handles are resolved once by the concrete
/// view; the controller only calls these operations.
pub trait FormView: Send + Sync {
    /// Submit control enters the working state (disabled, progress label).
    fn set_submitting(&self);

    /// Submit control back to its idle presentation. Called unconditionally
    /// at the end of every submission.
    fn set_idle(&self);

    /// Marks a field valid or invalid after blur validation; an error mark
    /// replaces any prior inline message.
    fn mark_field(&self, name: &str, mark: FieldMark, message: Option<&str>);

    /// Strips the mark from a field while it is being edited.
    fn clear_field_mark(&self, name: &str);

    /// Replaces the result panel with a prediction card.
    fn show_result(&self, card: &ResultCard);

    /// Replaces the result panel with an error card.
    fn show_error(&self, card: &ErrorCard);

    /// Hides the result panel and strips every field mark.
    fn reset(&self);
}
