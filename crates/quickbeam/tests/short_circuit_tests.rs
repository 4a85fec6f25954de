use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use quickbeam::*;

// Helper: a context whose `hit()` counts its calls and returns `value`
fn counting_context(value: Value) -> (Value, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let hit = NativeFn::plain("hit", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    });
    let context = Value::object(
        Object::new()
            .with("hit", hit)
            .with("yes", true)
            .with("no", false)
            .with("zero", 0),
    );
    (context, calls)
}

fn isolated() -> Evaluator {
    Evaluator::with_frontend(Arc::new(JsepFrontend::new()))
}

#[test]
fn test_or_skips_right_when_left_truthy() {
    let (context, calls) = counting_context(Value::from("side"));
    let evaluator = isolated();

    assert_eq!(evaluator.eval_str("yes || hit()", &context).unwrap(), Value::Bool(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(evaluator.eval_str("no || hit()", &context).unwrap(), Value::from("side"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_and_skips_right_when_left_falsy() {
    let (context, calls) = counting_context(Value::from("side"));
    let evaluator = isolated();

    assert_eq!(evaluator.eval_str("zero && hit()", &context).unwrap(), Value::from(0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(evaluator.eval_str("yes && hit()", &context).unwrap(), Value::from("side"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_conditional_evaluates_one_branch() {
    let (context, calls) = counting_context(Value::from(1));
    let evaluator = isolated();

    assert_eq!(evaluator.eval_str("yes ? 5 : hit()", &context).unwrap(), Value::from(5));
    assert_eq!(evaluator.eval_str("no ? hit() : 6", &context).unwrap(), Value::from(6));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_override_forfeits_short_circuit() {
    let (context, calls) = counting_context(Value::from(1));
    let evaluator = isolated();
    evaluator
        .registry()
        .install_binary_override(|_, left, right| Ok(Value::array(vec![left.clone(), right.clone()])));

    assert_eq!(
        evaluator.eval_str("yes || hit()", &context).unwrap(),
        Value::array(vec![Value::Bool(true), Value::from(1)])
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    evaluator.registry().clear_binary_override();
    evaluator.eval_str("yes || hit()", &context).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_replaced_logical_operator_keeps_short_circuit() {
    let (context, calls) = counting_context(Value::from(1));
    let evaluator = isolated();
    evaluator.add_binary_operator("||", |_, right| {
        Ok(Value::string(format!("right was {}", right)))
    });

    assert_eq!(evaluator.eval_str("yes || hit()", &context).unwrap(), Value::Bool(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        evaluator.eval_str("no || hit()", &context).unwrap(),
        Value::from("right was 1")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registered_short_circuit_operator() {
    let (context, calls) = counting_context(Value::from(2));
    let parser = Arc::new(JsepFrontend::new());
    parser.add_binary_op("??", 1);
    let evaluator = Evaluator::with_frontend(parser);

    evaluator.add_binary_operator("??", |left, right| {
        Ok(if left.is_nullish() { right.clone() } else { left.clone() })
    });
    evaluator
        .registry()
        .register_short_circuit("??", ShortCircuit::WhenTruthy);

    assert_eq!(evaluator.eval_str("yes ?? hit()", &context).unwrap(), Value::Bool(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(evaluator.eval_str("zero ?? hit()", &context).unwrap(), Value::from(0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(evaluator.eval_str("missing ?? hit()", &context).unwrap(), Value::from(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
