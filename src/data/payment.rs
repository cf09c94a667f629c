use thiserror::Error;

/// The four free-text inputs of the payment form. Nothing here is validated
/// beyond presence; this is a simulated payment, not a gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
    Name,
}

impl PaymentField {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "card number",
            PaymentField::Expiry => "expiry date",
            PaymentField::Cvv => "CVV",
            PaymentField::Name => "name on card",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Please enter your {}", .0.label())]
    MissingField(PaymentField),
    #[error("No booking is selected for payment")]
    NoSelection,
}

/// Transient card details, alive only while the payment modal is open.
/// Never persisted, never attached to a booking record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub name: String,
}

impl PaymentDraft {
    pub fn set(&mut self, field: PaymentField, value: String) {
        match field {
            PaymentField::CardNumber => self.card_number = value,
            PaymentField::Expiry => self.expiry = value,
            PaymentField::Cvv => self.cvv = value,
            PaymentField::Name => self.name = value,
        }
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        let fields = [
            (PaymentField::CardNumber, &self.card_number),
            (PaymentField::Expiry, &self.expiry),
            (PaymentField::Cvv, &self.cvv),
            (PaymentField::Name, &self.name),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(PaymentError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Tracks which booking, if any, a payment is in progress for, together with
/// the draft card fields. It never touches the booking collection itself;
/// a successful `submit` hands the target id back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentModal {
    selected: Option<String>,
    draft: PaymentDraft,
}

impl PaymentModal {
    /// Selects a booking and shows the modal with a blank draft. The id is
    /// taken on trust; the list only wires this up for unpaid bookings.
    pub fn open(&mut self, booking_id: String) {
        self.selected = Some(booking_id);
        self.draft = PaymentDraft::default();
    }

    /// Clears selection and draft. Closing an already-closed modal is fine.
    pub fn close(&mut self) {
        self.selected = None;
        self.draft = PaymentDraft::default();
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: PaymentField, value: String) {
        self.draft.set(field, value);
    }

    /// Required-field check over the draft. On success returns the selected
    /// booking id so the caller can run the paid transition and close; the
    /// modal state itself is untouched either way.
    pub fn submit(&self) -> Result<&str, PaymentError> {
        self.draft.validate()?;
        self.selected.as_deref().ok_or(PaymentError::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(modal: &mut PaymentModal) {
        modal.set_field(PaymentField::CardNumber, "4111 1111 1111 1111".into());
        modal.set_field(PaymentField::Expiry, "12/27".into());
        modal.set_field(PaymentField::Cvv, "123".into());
        modal.set_field(PaymentField::Name, "A. Guest".into());
    }

    #[test]
    fn open_resets_the_draft() {
        let mut modal = PaymentModal::default();
        modal.open("b1".to_string());
        modal.set_field(PaymentField::CardNumber, "4111".into());

        modal.open("b2".to_string());
        assert_eq!(modal.selected(), Some("b2"));
        assert_eq!(*modal.draft(), PaymentDraft::default());
    }

    #[test]
    fn close_clears_selection_and_draft() {
        let mut modal = PaymentModal::default();
        modal.open("b1".to_string());
        modal.set_field(PaymentField::CardNumber, "4111".into());
        modal.close();

        assert!(!modal.is_open());
        assert_eq!(modal.selected(), None);
        assert_eq!(*modal.draft(), PaymentDraft::default());

        // Idempotent.
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn set_field_replaces_only_that_field() {
        let mut modal = PaymentModal::default();
        modal.open("b1".to_string());
        filled(&mut modal);
        modal.set_field(PaymentField::Cvv, "999".into());

        assert_eq!(modal.draft().cvv, "999");
        assert_eq!(modal.draft().card_number, "4111 1111 1111 1111");
        assert_eq!(modal.draft().expiry, "12/27");
        assert_eq!(modal.draft().name, "A. Guest");
    }

    #[test]
    fn submit_rejects_any_empty_field() {
        let mut modal = PaymentModal::default();
        modal.open("b1".to_string());
        filled(&mut modal);
        modal.set_field(PaymentField::Expiry, "  ".into());

        assert_eq!(
            modal.submit(),
            Err(PaymentError::MissingField(PaymentField::Expiry))
        );
        // Still open, draft intact.
        assert!(modal.is_open());
        assert_eq!(modal.draft().card_number, "4111 1111 1111 1111");
    }

    #[test]
    fn submit_yields_the_selected_id_when_complete() {
        let mut modal = PaymentModal::default();
        modal.open("b1".to_string());
        filled(&mut modal);

        assert_eq!(modal.submit(), Ok("b1"));
    }

    #[test]
    fn submit_without_a_selection_is_rejected() {
        let mut modal = PaymentModal::default();
        filled(&mut modal);
        assert_eq!(modal.submit(), Err(PaymentError::NoSelection));
    }

    #[test]
    fn validation_error_reads_like_a_user_message() {
        let err = PaymentError::MissingField(PaymentField::Name);
        assert_eq!(err.to_string(), "Please enter your name on card");
    }
}
