use pretty_assertions::assert_eq;
use quickbeam::*;

fn context() -> Value {
    let foo = Object::new()
        .with("bar", "baz")
        .with("baz", "wow")
        .with(
            "func",
            NativeFn::new("func", |this, args| {
                let key = args.first().cloned().unwrap_or_default();
                Ok(this.get(&key.to_js_string()))
            }),
        );

    Value::object(
        Object::new()
            .with("string", "string")
            .with("number", 123)
            .with("bool", true)
            .with("one", 1)
            .with("two", 2)
            .with("three", 3)
            .with("foo", foo)
            .with("numMap", Object::new().with("10", "ten").with("3", "three"))
            .with("list", (1..=5).map(Value::from).collect::<Vec<_>>())
            .with(
                "func",
                NativeFn::plain("func", |args| {
                    let x = args.first().cloned().unwrap_or_default();
                    Ok(arithmetic_add(&x, &Value::from(1)))
                }),
            )
            .with(
                "isArray",
                NativeFn::plain("isArray", |args| {
                    Ok(Value::Bool(args.first().map_or(false, Value::is_array)))
                }),
            ),
    )
}

fn arithmetic_add(a: &Value, b: &Value) -> Value {
    quickbeam::operators::arithmetic::add(a, b)
}

// Helper to compile on the shared evaluator and call against the fixture context
fn eval(src: &str) -> Value {
    compile(src)
        .unwrap_or_else(|e| panic!("parse failed for {}: {}", src, e))
        .call(&context())
        .unwrap_or_else(|e| panic!("evaluation failed for {}: {}", src, e))
}

// ═══════════════════════════════════════════════════════════════════════
// Array Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_array_expressions() {
    assert_eq!(eval("([1,2,3])[0]"), Value::from(1));
    assert_eq!(eval(r#"(["one","two","three"])[1]"#), Value::from("two"));
    assert_eq!(eval("([true,false,true])[2]"), Value::Bool(true));
    assert_eq!(eval(r#"([1,true,"three"]).length"#), Value::from(3));
    assert_eq!(eval("isArray([1,2,3])"), Value::Bool(true));
    assert_eq!(eval("list[3]"), Value::from(4));
    assert_eq!(eval("(list)[3]"), Value::from(4));
    assert_eq!(eval("numMap[1 + two]"), Value::from("three"));
}

// ═══════════════════════════════════════════════════════════════════════
// Binary Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_binary_expressions() {
    assert_eq!(eval("1+2"), Value::from(3));
    assert_eq!(eval("2-1"), Value::from(1));
    assert_eq!(eval("2*2"), Value::from(4));
    assert_eq!(eval("6/3"), Value::from(2));
    assert_eq!(eval("5|3"), Value::from(7));
    assert_eq!(eval("5&3"), Value::from(1));
    assert_eq!(eval("5^3"), Value::from(6));
    assert_eq!(eval("4<<2"), Value::from(16));
    assert_eq!(eval("256>>4"), Value::from(16));
    assert_eq!(eval("-14>>>2"), Value::from(1_073_741_820));
    assert_eq!(eval("10%6"), Value::from(4));
    assert_eq!(eval(r#""a"+"b""#), Value::from("ab"));
    assert_eq!(eval("one + three"), Value::from(4));
}

#[test]
fn test_string_concatenation_coerces() {
    assert_eq!(eval("'n' + number"), Value::from("n123"));
    assert_eq!(eval("list + ''"), Value::from("1,2,3,4,5"));
    assert_eq!(eval("1 + null"), Value::from(1));
}

// ═══════════════════════════════════════════════════════════════════════
// Call Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_call_expressions() {
    assert_eq!(eval("func(5)"), Value::from(6));
    assert_eq!(eval("func(1+2)"), Value::from(4));
    assert_eq!(eval(r#"foo.func("bar")"#), Value::from("baz"));
}

#[test]
fn test_call_non_function_is_undefined() {
    assert_eq!(eval("number(1)"), Value::Undefined);
    assert_eq!(eval("missing()"), Value::Undefined);
    assert_eq!(eval("foo.nothing(1, 2)"), Value::Undefined);
}

// ═══════════════════════════════════════════════════════════════════════
// Conditional Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_conditional_expressions() {
    assert_eq!(eval(r#"(true ? "true" : "false")"#), Value::from("true"));
    assert_eq!(
        eval(r#"( ( bool || false ) ? "true" : "false")"#),
        Value::from("true")
    );
    assert_eq!(eval(r#"( true ? ( 123*456 ) : "false")"#), Value::from(56_088));
    assert_eq!(eval(r#"( false ? "true" : one + two )"#), Value::from(3));
}

// ═══════════════════════════════════════════════════════════════════════
// Identifiers and Literals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_identifiers() {
    assert_eq!(eval("string"), Value::from("string"));
    assert_eq!(eval("number"), Value::from(123));
    assert_eq!(eval("bool"), Value::Bool(true));
    assert_eq!(eval("nothing"), Value::Undefined);
}

#[test]
fn test_literals() {
    assert_eq!(eval(r#""foo""#), Value::from("foo"));
    assert_eq!(eval("'foo'"), Value::from("foo"));
    assert_eq!(eval("123"), Value::from(123));
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("null"), Value::Null);
}

// ═══════════════════════════════════════════════════════════════════════
// Logical and Comparison Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_logical_expressions() {
    assert_eq!(eval("true || false"), Value::Bool(true));
    assert_eq!(eval("true && false"), Value::Bool(false));
    assert_eq!(eval("'' || 'fallback'"), Value::from("fallback"));
    assert_eq!(eval("one && two"), Value::from(2));
}

#[test]
fn test_comparisons() {
    assert_eq!(eval(r#"1 == "1""#), Value::Bool(true));
    assert_eq!(eval(r#"2 != "2""#), Value::Bool(false));
    assert_eq!(eval("1.234 === 1.234"), Value::Bool(true));
    assert_eq!(eval(r#"123 !== "123""#), Value::Bool(true));
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("1 > 2"), Value::Bool(false));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("1 >= 2"), Value::Bool(false));
}

// ═══════════════════════════════════════════════════════════════════════
// Member Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_member_expressions() {
    assert_eq!(eval("foo.bar"), Value::from("baz"));
    assert_eq!(eval(r#"foo["bar"]"#), Value::from("baz"));
    assert_eq!(eval("foo[foo.bar]"), Value::from("wow"));
    assert_eq!(eval("string.length"), Value::from(6));
    assert_eq!(eval("string[0]"), Value::from("s"));
}

#[test]
fn test_member_of_missing_is_undefined() {
    assert_eq!(eval("nothing.deeper"), Value::Undefined);
    assert_eq!(eval("foo.bar.baz.qux"), Value::Undefined);
}

// ═══════════════════════════════════════════════════════════════════════
// Unary Expressions and `this`
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unary_expressions() {
    assert_eq!(eval("-one"), Value::from(-1));
    assert_eq!(eval("+two"), Value::from(2));
    assert_eq!(eval("!false"), Value::Bool(true));
    assert_eq!(eval("!!true"), Value::Bool(true));
    assert_eq!(eval("~15"), Value::from(-16));
}

#[test]
fn test_this_context() {
    assert_eq!(eval("this.three"), Value::from(3));
    assert_eq!(eval("this['one'] + this.two"), Value::from(3));
}

// ═══════════════════════════════════════════════════════════════════════
// Configurable Operators
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_custom_unary_operator_per_instance() {
    add_parser_unary_op("#");
    add_unary_operator("#", |arg| Ok(Value::string(format!("-->#: {} <--", arg))));

    let first = Evaluator::new();
    let second = Evaluator::new();
    first.add_unary_operator("#", |arg| Ok(Value::string(format!("-->#1: {} <--", arg))));
    second.add_unary_operator("#", |arg| Ok(Value::string(format!("-->#2: {} <--", arg))));

    let src = "#(one + two + 1)";
    assert_eq!(eval(src), Value::from("-->#: 4 <--"));
    assert_eq!(
        first.compile(src).unwrap().call(&context()).unwrap(),
        Value::from("-->#1: 4 <--")
    );
    assert_eq!(
        second.compile(src).unwrap().call(&context()).unwrap(),
        Value::from("-->#2: 4 <--")
    );
}

#[test]
fn test_wrapping_unary_operator() {
    add_parser_unary_op("#");
    let evaluator = Evaluator::new();
    evaluator.add_unary_operator("#", |arg| {
        Ok(quickbeam::operators::arithmetic::add(&Value::from("wrapped:"), arg))
    });

    assert_eq!(
        evaluator.eval_str("#(one+two+1)", &context()).unwrap(),
        Value::from("wrapped:4")
    );
}

#[test]
fn test_compound_is_undefined() {
    assert_eq!(eval("one, two"), Value::Undefined);
}
