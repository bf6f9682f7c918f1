use crate::core::validation::{
    CustomValidators, FieldErrors, FormValues, option_errors, validate,
};
use crate::core::value::Value;
use crate::state::context::{ActionContext, DialogOptions, SubmitPolicy};
use crate::state::form_state::{FormError, FormState};
use crate::ui::action_style::{ActionStyle, StatusChip, action_style, status_chip};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::widgets::node::{label_column_width, render_fields};
use crate::widgets::traits::RenderContext;
use thiserror::Error;

pub type SubmitHandler = Box<dyn FnMut(&FormValues)>;
pub type CloseHandler = Box<dyn FnMut()>;

const CANCEL_LABEL: &str = "Cancel";
const PROCESSING_LABEL: &str = "Processing…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Editing,
    /// Caller reports a submission in progress (`loading`).
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CancelButton,
    DismissIcon,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// `on_close` was invoked; the caller is expected to sync `open = false`.
    Requested,
    /// Ignored because a submission is in flight.
    Suppressed,
    NotOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    NotOpen,
    Loading,
    /// A previous submit has not been resolved by the caller yet.
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// `on_submit` was invoked with these values.
    Submitted(FormValues),
    /// Local validation failed; errors are now shown on the fields.
    Invalid(FieldErrors),
    Blocked(SubmitBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("dialog is not open")]
    NotOpen,
    #[error("a submission is in progress")]
    Busy,
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Reusable action dialog: seeds a form when opened, validates on submit and
/// hands the values to the caller, then mirrors the caller's loading/error
/// flags until it is closed again.
pub struct ActionDialog {
    ctx: ActionContext,
    options: DialogOptions,
    validators: CustomValidators,
    session: Option<FormState>,
    submit_pending: bool,
    on_submit: SubmitHandler,
    on_close: CloseHandler,
}

impl ActionDialog {
    pub fn new(
        on_submit: impl FnMut(&FormValues) + 'static,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        Self {
            ctx: ActionContext::default(),
            options: DialogOptions::default(),
            validators: CustomValidators::new(),
            session: None,
            submit_pending: false,
            on_submit: Box::new(on_submit),
            on_close: Box::new(on_close),
        }
    }

    pub fn with_options(mut self, options: DialogOptions) -> Self {
        self.options = options;
        self
    }

    /// Validators consulted on submit under [`SubmitPolicy::Full`].
    pub fn with_validators(mut self, validators: CustomValidators) -> Self {
        self.validators = validators;
        self
    }

    /// Applies the caller's latest props. A closed→open transition seeds a
    /// fresh form; open→closed discards it. A changed field list while open
    /// re-keys the form without touching values of surviving fields.
    pub fn sync(&mut self, next: ActionContext) {
        let was_open = self.session.is_some();

        if next.open && !was_open {
            self.session = Some(FormState::seed(&next.fields, &next.data));
            self.submit_pending = false;
            tracing::debug!(title = %next.title, action = next.action.as_str(), "dialog opened");
        } else if !next.open && was_open {
            self.session = None;
            self.submit_pending = false;
            tracing::debug!(title = %self.ctx.title, "dialog closed");
        } else {
            if next.fields != self.ctx.fields {
                if let Some(session) = self.session.as_mut() {
                    session.reconcile(&next.fields, &next.data);
                    tracing::debug!(title = %next.title, fields = next.fields.len(), "dialog fields changed");
                }
            }
            if self.submit_pending && self.caller_resolved(&next) {
                self.submit_pending = false;
            }
        }

        self.ctx = next;
    }

    fn caller_resolved(&self, next: &ActionContext) -> bool {
        let finished_loading = self.ctx.loading && !next.loading;
        let new_error = next.error.is_some() && next.error != self.ctx.error;
        finished_loading || new_error
    }

    pub fn open(&mut self, ctx: ActionContext) {
        self.sync(ctx.opened());
    }

    /// Caller-side close, equivalent to syncing `open = false`.
    pub fn close(&mut self) {
        let ctx = self.ctx.clone().closed();
        self.sync(ctx);
    }

    /// Sets loading and leaves the rest of the props as they are.
    pub fn set_loading(&mut self, loading: bool) {
        let ctx = self.ctx.clone().with_loading(loading);
        self.sync(ctx);
    }

    /// Reports a failed remote action; also ends loading. Any reported error
    /// resolves a pending submit, even one repeating the current message.
    pub fn set_server_error(&mut self, error: Option<String>) {
        let failed = error.is_some();
        let mut ctx = self.ctx.clone().with_loading(false);
        ctx.error = error;
        self.sync(ctx);
        if failed {
            self.submit_pending = false;
        }
    }

    /// Lets a caller that never drives `loading` accept submits again.
    pub fn release_submit(&mut self) {
        self.submit_pending = false;
    }

    pub fn phase(&self) -> DialogPhase {
        match (&self.session, self.ctx.loading) {
            (None, _) => DialogPhase::Closed,
            (Some(_), true) => DialogPhase::Submitting,
            (Some(_), false) => DialogPhase::Editing,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_submit_pending(&self) -> bool {
        self.submit_pending
    }

    pub fn context(&self) -> &ActionContext {
        &self.ctx
    }

    pub fn options(&self) -> DialogOptions {
        self.options
    }

    pub fn form(&self) -> Option<&FormState> {
        self.session.as_ref()
    }

    pub fn server_error(&self) -> Option<&str> {
        self.ctx.error.as_deref()
    }

    pub fn style(&self) -> ActionStyle {
        action_style(&self.ctx.action)
    }

    pub fn status_chip(&self) -> Option<StatusChip> {
        self.ctx.status().map(|status| status_chip(&status))
    }

    pub fn edit(&mut self, name: &str, value: impl Into<Value>) -> Result<(), DialogError> {
        let loading = self.ctx.loading;
        let session = self.session.as_mut().ok_or(DialogError::NotOpen)?;
        if loading {
            return Err(DialogError::Busy);
        }
        if session.edit(&self.ctx.fields, name, value)? {
            tracing::trace!(field = name, "cleared field error on edit");
        }
        // Changed input is a new submission, not a repeat of the pending one.
        self.submit_pending = false;
        Ok(())
    }

    fn submit_errors(&self, session: &FormState) -> FieldErrors {
        let schema = &self.ctx.fields;
        let values = session.values();
        let mut errors = match self.options.submit_policy {
            SubmitPolicy::RequiredOnly => session.check_required(schema),
            SubmitPolicy::Full => validate(values, &schema.required_names(), &self.validators),
        };
        if self.options.enforce_options {
            for (name, message) in option_errors(schema, values) {
                errors.entry(name).or_insert(message);
            }
        }
        errors
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(session) = self.session.as_ref() else {
            return SubmitOutcome::Blocked(SubmitBlock::NotOpen);
        };
        if self.ctx.loading {
            return SubmitOutcome::Blocked(SubmitBlock::Loading);
        }
        if self.options.submit_guard && self.submit_pending {
            tracing::debug!(title = %self.ctx.title, "submit ignored, previous one pending");
            return SubmitOutcome::Blocked(SubmitBlock::Pending);
        }

        let errors = self.submit_errors(session);
        let values = session.values().clone();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submit blocked by validation");
            if let Some(session) = self.session.as_mut() {
                session.set_errors(errors.clone());
            }
            return SubmitOutcome::Invalid(errors);
        }

        if let Some(session) = self.session.as_mut() {
            session.clear_errors();
        }
        self.submit_pending = self.options.submit_guard;
        (self.on_submit)(&values);
        SubmitOutcome::Submitted(values)
    }

    pub fn request_close(&mut self, reason: CloseReason) -> CloseOutcome {
        if self.session.is_none() {
            return CloseOutcome::NotOpen;
        }
        if self.ctx.loading {
            tracing::debug!(?reason, "close suppressed while loading");
            return CloseOutcome::Suppressed;
        }
        (self.on_close)();
        CloseOutcome::Requested
    }

    /// Draws the open dialog: title and status, description, server error
    /// banner, fields, then the button row. Nothing when closed.
    pub fn render(&self, theme: &Theme) -> Vec<SpanLine> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let style = self.style();
        let mut lines = Vec::new();

        let mut title = vec![Span::styled(self.ctx.title.clone(), theme.accent(style.accent))];
        if let Some(chip) = self.status_chip() {
            title.push(Span::new("  ").no_wrap());
            title.push(Span::styled(format!("[{}]", chip.label), theme.tone(chip.tone)).no_wrap());
        }
        lines.push(title);

        if let Some(description) = self.ctx.description_text() {
            lines.push(vec![Span::styled(description, theme.hint)]);
        }

        if let Some(error) = self.server_error() {
            lines.push(vec![Span::styled(format!(" ! {error} "), theme.banner)]);
        }

        lines.push(Vec::new());
        let ctx = RenderContext::new(session.values(), session.errors(), theme)
            .with_label_width(label_column_width(&self.ctx.fields))
            .with_disabled(self.ctx.loading);
        lines.extend(render_fields(&self.ctx.fields, &ctx));
        lines.push(Vec::new());

        lines.push(self.button_row(theme, style));
        lines
    }

    fn button_row(&self, theme: &Theme, style: ActionStyle) -> SpanLine {
        let loading = self.ctx.loading;
        let cancel_style = if loading { theme.disabled } else { theme.value };
        let (submit_text, submit_style) = if loading {
            (PROCESSING_LABEL, theme.disabled)
        } else {
            (style.submit_label, theme.accent(style.accent))
        };
        vec![
            Span::styled(format!("[ {CANCEL_LABEL} ]"), cancel_style).no_wrap(),
            Span::new("  ").no_wrap(),
            Span::styled(format!("[ {submit_text} ]"), submit_style).no_wrap(),
        ]
    }
}
