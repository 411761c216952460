use super::*;

const BASE: &str = "https://localhost:7001/api/probabilities";

fn filled_form(a: &str, b: &str) -> CalculatorForm {
    let mut form = CalculatorForm::new(BASE);
    form.set_probability_a(a);
    form.set_probability_b(b);
    form
}

fn dispatch(form: &mut CalculatorForm) -> (Ticket, RequestDescriptor) {
    match form.submit() {
        SubmitAction::Dispatch { ticket, request } => (ticket, request),
        other => panic!("expected dispatch, got {other:?}"),
    }
}

#[test]
fn starts_idle_with_combined_with_selected() {
    let form = CalculatorForm::new(BASE);
    assert_eq!(form.outcome(), &Outcome::Idle);
    assert_eq!(form.input(), &InputState::default());
    assert!(form.is_selected(Operation::CombinedWith));
    assert!(!form.is_selected(Operation::Either));
    assert!(form.can_submit());
}

#[test]
fn selecting_either_unpresses_combined_with() {
    let mut form = CalculatorForm::new(BASE);
    form.select_operation(Operation::Either);
    assert!(form.is_selected(Operation::Either));
    assert!(!form.is_selected(Operation::CombinedWith));
}

#[test]
fn empty_submit_fails_without_dispatch() {
    let mut form = CalculatorForm::new(BASE);
    assert_eq!(
        form.submit(),
        SubmitAction::Rejected(ValidationError::MissingInput)
    );
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please enter values for both probabilities.")
    );
    assert!(form.can_submit());
}

#[test]
fn out_of_range_a_is_rejected() {
    let mut form = filled_form("1.5", "0.5");
    assert_eq!(
        form.submit(),
        SubmitAction::Rejected(ValidationError::ProbabilityAOutOfRange)
    );
    assert_eq!(
        form.error_message().as_deref(),
        Some("Probability A must be between 0 and 1.")
    );
}

#[test]
fn valid_submit_enters_loading_and_blocks_resubmit() {
    let mut form = filled_form("0.5", "0.5");
    let (_, request) = dispatch(&mut form);
    assert_eq!(request.url, format!("{BASE}/combinedwith"));
    assert!(form.is_loading());
    assert!(!form.can_submit());
    assert_eq!(form.submit(), SubmitAction::Busy);
    assert!(form.is_loading());
}

#[test]
fn successful_completion_records_summary() {
    let mut form = filled_form("0.5", "0.5");
    let (ticket, _) = dispatch(&mut form);

    assert!(form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.25}"#)));

    let summary = form.success().expect("success");
    assert_eq!(summary.result, 0.25);
    assert_eq!(summary.formatted_result(), "0.2500");
    assert_eq!(summary.formula(), "P(A) * P(B) = 0.50 * 0.50");
    assert!(form.error_message().is_none());
    assert!(form.can_submit());
}

#[test]
fn either_summary_keeps_inputs_from_submit_time() {
    let mut form = filled_form("0.2", "0.3");
    form.select_operation(Operation::Either);
    let (ticket, request) = dispatch(&mut form);
    assert!(request.url.ends_with("/either"));

    form.set_probability_a("0.9");
    form.select_operation(Operation::CombinedWith);
    form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.44}"#));

    let summary = form.success().expect("success");
    assert_eq!(
        summary.formula(),
        "P(A) + P(B) - P(A)P(B) = 0.20 + 0.30 - (0.20 * 0.30)"
    );
}

#[test]
fn transport_failure_becomes_failure_state() {
    let mut form = filled_form("0.1", "0.2");
    let (ticket, _) = dispatch(&mut form);
    form.complete(ticket, &HttpOutcome::Transport("connection refused".into()));
    assert_eq!(
        form.error_message().as_deref(),
        Some("Could not connect to the backend API. Check if the service is running.")
    );
    assert!(form.success().is_none());
}

#[test]
fn resubmit_clears_previous_success_before_validating() {
    let mut form = filled_form("0.5", "0.5");
    let (ticket, _) = dispatch(&mut form);
    form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.25}"#));

    form.set_probability_b("3");
    form.submit();

    assert!(form.success().is_none());
    assert_eq!(
        form.error_message().as_deref(),
        Some("Probability B must be between 0 and 1.")
    );
}

#[test]
fn reset_after_success_clears_everything() {
    let mut form = filled_form("0.2", "0.3");
    form.select_operation(Operation::Either);
    let (ticket, _) = dispatch(&mut form);
    form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.12}"#));

    form.reset();

    assert_eq!(form.input().probability_a, "");
    assert_eq!(form.input().probability_b, "");
    assert_eq!(form.operation(), Operation::CombinedWith);
    assert_eq!(form.outcome(), &Outcome::Idle);
}

#[test]
fn completion_after_reset_is_discarded() {
    let mut form = filled_form("0.5", "0.5");
    let (ticket, _) = dispatch(&mut form);

    form.reset();
    assert!(!form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.25}"#)));
    assert_eq!(form.outcome(), &Outcome::Idle);
}

#[test]
fn completion_for_superseded_ticket_is_discarded() {
    let mut form = filled_form("0.5", "0.5");
    let (first, _) = dispatch(&mut form);
    form.reset();

    form.set_probability_a("0.4");
    form.set_probability_b("0.5");
    let (second, _) = dispatch(&mut form);
    assert_ne!(first, second);

    assert!(!form.complete(first, &HttpOutcome::response(200, r#"{"result":0.25}"#)));
    assert!(form.is_loading());
    assert!(form.complete(second, &HttpOutcome::response(200, r#"{"result":0.2}"#)));
    assert_eq!(form.success().map(|s| s.result), Some(0.2));
}

#[test]
fn duplicate_completion_is_ignored() {
    let mut form = filled_form("0.5", "0.5");
    let (ticket, _) = dispatch(&mut form);
    assert!(form.complete(ticket, &HttpOutcome::response(200, r#"{"result":0.25}"#)));
    assert!(!form.complete(ticket, &HttpOutcome::response(500, "")));
    assert_eq!(form.success().map(|s| s.result), Some(0.25));
}

#[test]
fn field_highlighting_tracks_live_text() {
    let mut form = CalculatorForm::new(BASE);
    assert!(!form.probability_a_invalid());
    form.set_probability_a("1.2");
    form.set_probability_b("0.4");
    assert!(form.probability_a_invalid());
    assert!(!form.probability_b_invalid());
}
