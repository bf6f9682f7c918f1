//! Ready-made dialogs for the front-desk booking actions.

use crate::core::schema::{FieldOption, FieldSpec, Schema};
use crate::state::context::ActionContext;
use crate::ui::action_style::ActionType;

fn options(pairs: &[(&str, &str)]) -> Vec<FieldOption> {
    pairs
        .iter()
        .map(|(value, label)| FieldOption::new(*value, *label))
        .collect()
}

pub fn check_in_fields(rooms: Vec<FieldOption>) -> Schema {
    Schema::new(vec![
        FieldSpec::display("guestName", "Guest"),
        FieldSpec::display("status", "Status"),
        FieldSpec::select("roomNumber", "Room", rooms).required(),
        FieldSpec::radio(
            "idType",
            "ID type",
            options(&[("passport", "Passport"), ("national_id", "National ID"), ("license", "Driver's license")]),
        )
        .required()
        .inline_row(),
        FieldSpec::text("idNumber", "ID number").required(),
        FieldSpec::text("notes", "Notes").with_placeholder("Optional"),
    ])
}

pub fn check_out_fields() -> Schema {
    Schema::new(vec![
        FieldSpec::display("guestName", "Guest"),
        FieldSpec::display("roomNumber", "Room"),
        FieldSpec::number("extraCharges", "Extra charges").with_default("0"),
        FieldSpec::radio(
            "paymentMethod",
            "Payment",
            options(&[("card", "Card"), ("cash", "Cash"), ("transfer", "Bank transfer")]),
        )
        .required(),
        FieldSpec::email("receiptEmail", "Receipt email")
            .with_helper_text("Leave empty to skip the e-mail receipt"),
    ])
}

pub fn cancel_fields() -> Schema {
    Schema::new(vec![
        FieldSpec::display("bookingId", "Booking"),
        FieldSpec::select(
            "reason",
            "Reason",
            options(&[
                ("guest_request", "Guest request"),
                ("no_show", "No-show"),
                ("overbooking", "Overbooking"),
                ("payment_failed", "Payment failed"),
            ]),
        )
        .required(),
        FieldSpec::text("comment", "Comment"),
    ])
}

pub fn confirm_fields() -> Schema {
    Schema::new(vec![
        FieldSpec::display("guestName", "Guest"),
        FieldSpec::display("checkIn", "Arrival"),
        FieldSpec::display("checkOut", "Departure"),
        FieldSpec::password("staffPin", "Staff PIN").required(),
    ])
}

/// Closed context for `action` with its preset fields.
pub fn preset(action: ActionType) -> ActionContext {
    let (title, fields) = match &action {
        ActionType::CheckIn => ("Check-in guest", check_in_fields(Vec::new())),
        ActionType::CheckOut => ("Check-out guest", check_out_fields()),
        ActionType::Cancel => ("Cancel booking", cancel_fields()),
        ActionType::Confirm => ("Confirm booking", confirm_fields()),
        ActionType::Complete | ActionType::Other(_) => ("Complete action", Schema::default()),
    };
    ActionContext::new(title, action, fields)
}

#[cfg(test)]
mod tests {
    use super::{cancel_fields, check_in_fields, check_out_fields, confirm_fields, preset};
    use crate::core::schema::FieldOption;
    use crate::ui::action_style::{ActionType, action_style};

    #[test]
    fn presets_have_no_schema_issues() {
        let rooms = vec![FieldOption::new("204", "204 · Double")];
        for schema in [check_in_fields(rooms), check_out_fields(), cancel_fields(), confirm_fields()] {
            assert!(schema.issues().is_empty(), "{:?}", schema.issues());
        }
    }

    #[test]
    fn preset_title_matches_action_style() {
        let ctx = preset(ActionType::Cancel);
        assert_eq!(ctx.title, "Cancel booking");
        assert_eq!(action_style(&ctx.action).submit_label, "Cancel Booking");
        assert!(!ctx.open);
    }

    #[test]
    fn check_in_without_rooms_is_flagged() {
        let issues = check_in_fields(Vec::new()).issues();
        assert_eq!(issues.len(), 1);
    }
}
