use pretty_assertions::assert_eq;
use quickbeam::ast::{Literal, LiteralValue, Node};
use quickbeam::{Frontend, JsepFrontend, JsonFrontend};

fn parse(src: &str) -> Node {
    JsepFrontend::new()
        .parse(src)
        .unwrap_or_else(|e| panic!("parse failed for {}: {}", src, e))
}

fn lit(raw: &str) -> Node {
    Node::number(raw.parse().unwrap()).with_raw(raw)
}

// ═══════════════════════════════════════════════════════════════════════
// Tree Shapes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_every_default_binary_operator_parses() {
    for op in [
        "||", "&&", "|", "^", "&", "==", "!=", "===", "!==", "<", ">", "<=", ">=", "<<", ">>",
        ">>>", "+", "-", "*", "/", "%",
    ] {
        let node = parse(&format!("a {} b", op));
        assert_eq!(node, Node::binary(op, Node::ident("a"), Node::ident("b")), "{}", op);
    }
}

#[test]
fn test_precedence_ladder() {
    // || < && < | < ^ < & < equality < relational < shift < additive < multiplicative
    assert_eq!(
        parse("a || b && c | d ^ e & f == g < h << i + j * k"),
        Node::binary(
            "||",
            Node::ident("a"),
            Node::binary(
                "&&",
                Node::ident("b"),
                Node::binary(
                    "|",
                    Node::ident("c"),
                    Node::binary(
                        "^",
                        Node::ident("d"),
                        Node::binary(
                            "&",
                            Node::ident("e"),
                            Node::binary(
                                "==",
                                Node::ident("f"),
                                Node::binary(
                                    "<",
                                    Node::ident("g"),
                                    Node::binary(
                                        "<<",
                                        Node::ident("h"),
                                        Node::binary(
                                            "+",
                                            Node::ident("i"),
                                            Node::binary("*", Node::ident("j"), Node::ident("k"))
                                        )
                                    )
                                )
                            )
                        )
                    )
                )
            )
        )
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        parse("(1 + 2) * 3"),
        Node::binary("*", Node::binary("+", lit("1"), lit("2")), lit("3"))
    );
}

#[test]
fn test_call_with_arguments() {
    assert_eq!(
        parse("f(a, b + 1, [])"),
        Node::call(
            Node::ident("f"),
            vec![
                Node::ident("a"),
                Node::binary("+", Node::ident("b"), lit("1")),
                Node::array(vec![]),
            ]
        )
    );
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse(" foo . bar [ 0 ] "), parse("foo.bar[0]"));
    assert_eq!(parse("\ta\n+\rb"), parse("a+b"));
}

#[test]
fn test_identifier_characters() {
    assert_eq!(parse("$_a1"), Node::ident("$_a1"));
    assert_eq!(parse("été"), Node::ident("été"));
}

#[test]
fn test_string_literal_keeps_raw() {
    assert_eq!(
        parse(r#""a\"b""#),
        Node::Literal(Literal {
            value: LiteralValue::String("a\"b".to_string()),
            raw: Some(r#""a\"b""#.to_string()),
        })
    );
}

#[test]
fn test_empty_input_is_empty_compound() {
    let Node::Compound(compound) = parse("   ") else {
        panic!("expected compound");
    };
    assert!(compound.body.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_symbol_is_rejected() {
    let err = JsepFrontend::new().parse("1 @ 2").unwrap_err();
    assert_eq!(err.message, "Unexpected \"@\"");
    assert_eq!(err.index, Some(2));
    assert_eq!(err.to_string(), "Parse error: Unexpected \"@\" at character 2");
}

#[test]
fn test_missing_unary_argument() {
    let err = JsepFrontend::new().parse("!").unwrap_err();
    assert_eq!(err.message, "missing unaryOp argument");
}

// ═══════════════════════════════════════════════════════════════════════
// Shared Parser and JSON Trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_shared_parser_registration() {
    quickbeam::add_parser_unary_op("@@");
    quickbeam::add_parser_binary_op("<=>", 7);

    assert_eq!(
        quickbeam::parse("@@a <=> b").unwrap(),
        Node::binary("<=>", Node::unary("@@", Node::ident("a")), Node::ident("b"))
    );
}

#[test]
fn test_json_round_trip_through_serde() {
    let tree = parse("foo.func('bar') ? list[1] : -one");
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(JsonFrontend.parse(&json).unwrap(), tree);
}

#[test]
fn test_json_uses_estree_tags() {
    let json = serde_json::to_value(parse("this.a || !b")).unwrap();
    assert_eq!(json["type"], "LogicalExpression");
    assert_eq!(json["left"]["type"], "MemberExpression");
    assert_eq!(json["left"]["object"]["type"], "ThisExpression");
    assert_eq!(json["right"]["type"], "UnaryExpression");
    assert_eq!(json["right"]["prefix"], true);
}
