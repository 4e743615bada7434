use thiserror::Error;

/// The four required contact-form fields. No format validation beyond
/// non-empty; the transport is the place to care about address syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed {
        reason: String,
    },
}

/// What the message transport eventually reports back, exactly once per
/// accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    Success,
    Failure(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("all fields are required")]
    IncompleteForm,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Drives the contact form through its life cycle.
///
/// ```text
/// Idle --submit--> Submitting --Success--> Succeeded --edit--> Idle
///                      |
///                      +-------Failure--> Failed --edit or resubmit-->
/// ```
///
/// There are no terminal states; the form is always re-enterable.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    form: ContactForm,
    status: SubmissionStatus,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Plain field assignment, allowed in any status. Editing after a
    /// settled outcome re-arms the machine to `Idle`; the outcome banner
    /// disappears once the visitor starts typing again.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Subject => self.form.subject = value,
            Field::Message => self.form.message = value,
        }
        if matches!(
            self.status,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed { .. }
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Begin a submission. On success the machine is `Submitting` and the
    /// returned snapshot is what the caller must hand to the transport; the
    /// transport's eventual outcome comes back through [`Self::resolve`],
    /// exactly once.
    ///
    /// A submit while one is already in flight is rejected, never queued.
    pub fn submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.form.is_complete() {
            return Err(SubmitError::IncompleteForm);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.form.clone())
    }

    /// Settle the in-flight submission. Success clears the form; failure
    /// keeps it intact so the visitor can retry. An outcome arriving while
    /// nothing is in flight is a protocol violation and is dropped.
    pub fn resolve(&mut self, outcome: TransportOutcome) {
        if self.status != SubmissionStatus::Submitting {
            log::warn!(
                "ignoring transport outcome {:?} while {:?}",
                outcome,
                self.status
            );
            return;
        }
        match outcome {
            TransportOutcome::Success => {
                self.form = ContactForm::default();
                self.status = SubmissionStatus::Succeeded;
            }
            TransportOutcome::Failure(reason) => {
                self.status = SubmissionStatus::Failed { reason };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionFlow {
        let mut flow = SubmissionFlow::new();
        flow.update_field(Field::Name, "A".to_string());
        flow.update_field(Field::Email, "a@b.com".to_string());
        flow.update_field(Field::Subject, "S".to_string());
        flow.update_field(Field::Message, "M".to_string());
        flow
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let flow = SubmissionFlow::new();
        assert_eq!(*flow.status(), SubmissionStatus::Idle);
        assert_eq!(*flow.form(), ContactForm::default());
        assert!(!flow.form().is_complete());
    }

    #[test]
    fn test_submit_takes_snapshot_and_enters_submitting() {
        let mut flow = filled();
        let snapshot = flow.submit().unwrap();
        assert_eq!(snapshot.name, "A");
        assert_eq!(snapshot.email, "a@b.com");
        assert_eq!(snapshot.subject, "S");
        assert_eq!(snapshot.message, "M");
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_submit_rejects_incomplete_form() {
        let mut flow = filled();
        flow.update_field(Field::Message, "".to_string());
        assert_eq!(flow.submit(), Err(SubmitError::IncompleteForm));
        assert_eq!(*flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let mut flow = filled();
        flow.update_field(Field::Subject, "   ".to_string());
        assert_eq!(flow.submit(), Err(SubmitError::IncompleteForm));
    }

    #[test]
    fn test_double_submit_yields_one_transport_invocation() {
        let mut flow = filled();
        let mut invocations = 0;

        if flow.submit().is_ok() {
            invocations += 1;
        }
        // second attempt before the first resolves
        let second = flow.submit();
        if second.is_ok() {
            invocations += 1;
        }

        assert_eq!(second, Err(SubmitError::AlreadySubmitting));
        assert_eq!(invocations, 1);
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut flow = filled();
        flow.submit().unwrap();
        flow.resolve(TransportOutcome::Success);

        assert_eq!(*flow.status(), SubmissionStatus::Succeeded);
        assert_eq!(*flow.form(), ContactForm::default());
    }

    #[test]
    fn test_failure_preserves_fields_and_reason() {
        let mut flow = filled();
        let snapshot = flow.submit().unwrap();
        flow.resolve(TransportOutcome::Failure("network error".to_string()));

        assert_eq!(
            *flow.status(),
            SubmissionStatus::Failed {
                reason: "network error".to_string()
            }
        );
        assert_eq!(*flow.form(), snapshot);
    }

    #[test]
    fn test_edit_after_success_rearms_to_idle() {
        let mut flow = filled();
        flow.submit().unwrap();
        flow.resolve(TransportOutcome::Success);

        flow.update_field(Field::Name, "B".to_string());
        assert_eq!(*flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.form().name, "B");
    }

    #[test]
    fn test_resubmit_straight_from_failed() {
        let mut flow = filled();
        flow.submit().unwrap();
        flow.resolve(TransportOutcome::Failure("timeout".to_string()));

        // fields were preserved, so a retry needs no editing
        let snapshot = flow.submit().unwrap();
        assert_eq!(snapshot.name, "A");
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_out_of_state_outcome_is_ignored() {
        let mut flow = filled();
        flow.resolve(TransportOutcome::Success);
        assert_eq!(*flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.form().name, "A");

        flow.submit().unwrap();
        flow.resolve(TransportOutcome::Success);
        // a stray duplicate outcome after settling changes nothing
        flow.resolve(TransportOutcome::Failure("late".to_string()));
        assert_eq!(*flow.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_edit_during_flight_does_not_change_status() {
        let mut flow = filled();
        let snapshot = flow.submit().unwrap();

        flow.update_field(Field::Message, "edited mid-flight".to_string());
        assert!(flow.is_submitting());
        // the transport got the snapshot, not the edit
        assert_eq!(snapshot.message, "M");
    }
}
