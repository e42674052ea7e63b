use std::{
    cell::{Cell, RefCell},
    error::Error,
    fs,
    rc::Rc,
    str::FromStr,
    thread,
    time::{Duration, Instant},
};

use bigdecimal::BigDecimal;
use ember::{
    Mode,
    ast::{ExprKind, LiteralValue, Stmt},
    error::{LexError, ParseError, RuntimeError, TypeError},
    get_result,
    interpreter::{
        analyzer::{Analyzer, analyze, assignable::is_assignable},
        environment::{
            registry::Registry,
            types::{ObjectType, Type},
        },
        evaluator::core::{EvalResult, Interpreter, MAX_CALL_DEPTH},
        lexer::lex,
        parser::{MAX_NESTING_DEPTH, Parser, parse},
        value::{core::Value, object::Object},
    },
    run_source,
};
use walkdir::WalkDir;

fn assert_success(src: &str, expected: i32) {
    match run_source(src) {
        Ok(code) => assert_eq!(code, expected, "Script returned the wrong exit status:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure<E: Error + Clone + 'static>(src: &str) -> E {
    match run_source(src) {
        Ok(code) => panic!("Script succeeded with {code} but was expected to fail:\n{src}"),
        Err(e) => e.downcast_ref::<E>()
                   .cloned()
                   .unwrap_or_else(|| panic!("Script failed with an unexpected error: {e}")),
    }
}

fn assert_unchecked_failure(src: &str) -> RuntimeError {
    match get_result(src, &Registry::standard(), Mode::Unchecked) {
        Ok(code) => panic!("Script succeeded with {code:?} but was expected to fail"),
        Err(e) => e.downcast_ref::<RuntimeError>()
                   .cloned()
                   .unwrap_or_else(|| panic!("Script failed with an unexpected error: {e}")),
    }
}

fn main_returning(body: &str) -> String {
    format!("DEF main(): Integer DO {body} END")
}

/// Runs `test` on a thread with a main-thread sized stack, so deep but legal
/// recursion behaves as it does under the CLI.
fn with_large_stack(test: impl FnOnce() + Send + 'static) {
    let result = thread::Builder::new().stack_size(8 * 1024 * 1024)
                                       .spawn(test)
                                       .unwrap()
                                       .join();
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

#[test]
fn global_field_is_visible_in_main() {
    let src = "LET x: Integer = 1; DEF main(): Integer DO RETURN x + 2; END";

    let tokens = lex(src).unwrap();
    let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts,
               ["LET", "x", ":", "Integer", "=", "1", ";", "DEF", "main", "(", ")", ":",
                "Integer", "DO", "RETURN", "x", "+", "2", ";", "END"]);

    let source = parse(tokens).unwrap();
    assert_eq!(source.fields.len(), 1);
    assert_eq!(source.methods.len(), 1);

    let analysis = analyze(&source, &Registry::standard()).unwrap();
    let Stmt::Return { value, .. } = &source.methods[0].statements[0] else {
        panic!("Expected a return statement");
    };
    assert!(matches!(value.kind, ExprKind::Binary { .. }));
    assert_eq!(analysis.type_of(value.id), Some(&Type::Integer));

    assert_success(src, 3);
}

#[test]
fn if_with_then_branch_returns_early() {
    assert_success("DEF main(): Integer DO IF TRUE DO RETURN 1; END RETURN 0; END", 1);
    assert_success("DEF main(): Integer DO IF FALSE DO RETURN 1; ELSE RETURN 2; END RETURN 0; END",
                2);
}

#[test]
fn string_plus_integer_is_a_string() {
    let source = parse(lex("DEF main(): Integer DO LET s = \"a\" + 1; RETURN 0; END").unwrap()).unwrap();
    let analysis = analyze(&source, &Registry::standard()).unwrap();

    let Stmt::Declaration(declaration) = &source.methods[0].statements[0] else {
        panic!("Expected a declaration");
    };
    assert_eq!(analysis.declared_type(declaration.id), Some(&Type::String));
}

#[test]
fn unterminated_string_reports_offset_past_last_character() {
    assert_eq!(lex("\"abc"), Err(LexError::UnterminatedString { offset: 4 }));
}

#[test]
fn main_must_return_integer() {
    assert_eq!(assert_failure::<TypeError>("DEF main() DO END"),
               TypeError::InvalidMainReturnType { found: "Nil".to_string() });
    assert_eq!(assert_failure::<TypeError>("DEF other(): Integer DO RETURN 0; END"),
               TypeError::MissingMain);
}

#[test]
fn and_requires_boolean_operands() {
    assert_eq!(assert_failure::<TypeError>(&main_returning("1 AND TRUE; RETURN 0;")),
               TypeError::ExpectedBoolean { found:  "Integer".to_string(),
                                            offset: 23, });
}

#[test]
fn assignability_follows_capability_types() {
    let concrete = [Type::Nil,
                    Type::Boolean,
                    Type::Integer,
                    Type::Decimal,
                    Type::Character,
                    Type::String,
                    Type::IntegerIterable,
                    Type::Object(Rc::new(ObjectType::new("Point")))];

    for source in &concrete {
        assert!(is_assignable(&Type::Any, source));
        assert_eq!(is_assignable(&Type::Comparable, source),
                   matches!(source, Type::Integer | Type::Decimal | Type::Character | Type::String));

        for target in &concrete {
            assert_eq!(is_assignable(target, source), target == source);
        }
    }
}

#[test]
fn literals_survive_printing_and_reparsing() {
    let literals = [LiteralValue::Nil,
                    LiteralValue::from(true),
                    LiteralValue::from(false),
                    LiteralValue::from(42),
                    LiteralValue::from(-7),
                    LiteralValue::Decimal(BigDecimal::from_str("3.25").unwrap()),
                    LiteralValue::Decimal(BigDecimal::from_str("-0.5").unwrap()),
                    LiteralValue::from('\n'),
                    LiteralValue::from('\''),
                    LiteralValue::from("a\"b\\c\td")];
    let registry = Registry::standard();

    for literal in literals {
        let text = literal.to_string();
        let expression = Parser::new(lex(&text).unwrap()).parse_expression().unwrap();
        assert_eq!(expression.kind, ExprKind::Literal(literal.clone()), "{text}");

        let literal_type = Analyzer::new(&registry).analyze_expression(&expression).unwrap();
        assert_eq!(literal_type.name(), Value::from(&literal).kind_name());
    }
}

#[test]
fn analysis_is_idempotent() {
    let src = "LET limit: Integer = 4;
               DEF total(n: Integer): Integer DO
                   LET sum = 0;
                   FOR i IN range(0, n) DO sum = sum + i; END
                   RETURN sum;
               END
               DEF main(): Integer DO RETURN total(limit); END";
    let source = parse(lex(src).unwrap()).unwrap();
    let registry = Registry::standard();

    let first = analyze(&source, &registry).unwrap();
    let second = analyze(&source, &registry).unwrap();

    assert_eq!(first, second);
    assert!(first.expression_count() > 0);
}

#[test]
fn logical_operators_short_circuit() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut registry = Registry::standard();
    registry.define_function("touch", vec![], Type::Boolean, move |_: &[Value]| {
                counter.set(counter.get() + 1);
                Ok(Value::from(true))
            });

    let src = main_returning("IF FALSE AND touch() DO RETURN 1; END
                              IF TRUE OR touch() DO RETURN 2; END
                              RETURN 3;");
    assert_eq!(get_result(&src, &registry, Mode::Checked).unwrap(), Some(2));
    assert_eq!(calls.get(), 0);

    let src = main_returning("IF TRUE AND touch() DO RETURN 1; END RETURN 0;");
    assert_eq!(get_result(&src, &registry, Mode::Checked).unwrap(), Some(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn methods_may_call_methods_declared_later() {
    assert_success("DEF main(): Integer DO RETURN fib(10); END
                 DEF fib(n: Integer): Integer DO
                     IF n < 2 DO RETURN n; END
                     RETURN fib(n - 1) + fib(n - 2);
                 END",
                55);
}

#[test]
fn methods_share_global_state() {
    assert_success("LET counter: Integer = 0;
                 DEF bump() DO counter = counter + 1; END
                 DEF main(): Integer DO bump(); bump(); RETURN counter; END",
                2);
}

#[test]
fn inner_blocks_shadow_without_leaking() {
    assert_success(&main_returning("LET x = 1; IF TRUE DO LET x = 5; x = x + 1; END RETURN x;"),
                1);
    assert_success(&main_returning("LET x = 1; IF TRUE DO x = 5; END RETURN x;"), 5);
}

#[test]
fn redefinitions_are_errors() {
    assert_eq!(assert_failure::<TypeError>(&main_returning("LET x = 1; LET x = 2; RETURN x;")),
               TypeError::VariableRedefinition { name: "x".to_string() });
    assert_eq!(assert_failure::<TypeError>("DEF f() DO END DEF f() DO END DEF main(): Integer DO RETURN 0; END"),
               TypeError::FunctionRedefinition { name:  "f".to_string(),
                                                 arity: 0, });
    assert_success("DEF f() DO END DEF f(x) DO END DEF main(): Integer DO f(); f(1); RETURN 0; END",
                0);
}

#[test]
fn loops_and_ranges() {
    assert_success(&main_returning("LET sum = 0; FOR i IN range(0, 5) DO sum = sum + i; END RETURN sum;"),
                10);
    assert_success(&main_returning("LET sum = 0; FOR i IN range(5, 0) DO sum = sum + 1; END RETURN sum;"),
                0);
    assert_success(&main_returning("LET n = 5; LET product = 1;
                                 WHILE n > 1 DO product = product * n; n = n - 1; END
                                 RETURN product;"),
                120);
    assert_success(&main_returning("FOR i IN range(0, 10) DO IF i == 3 DO RETURN i; END END RETURN 0;"),
                3);
}

#[test]
fn arithmetic_semantics() {
    assert_success(&main_returning("RETURN -7 / 2;"), -3);
    assert_success(&main_returning("IF 1.0 / 4.0 == 0.25 DO RETURN 1; END RETURN 0;"), 1);
    assert_success(&main_returning("IF 'a' < 'b' AND \"ab\" < \"b\" DO RETURN 1; END RETURN 0;"),
                1);
    assert_success(&main_returning("IF \"x\" + 1.5 == \"x1.5\" DO RETURN 1; END RETURN 0;"), 1);
    assert_success(&main_returning("IF 1.5 + 1.5 >= 3.0 DO RETURN 1; END RETURN 0;"), 1);
}

#[test]
fn runtime_errors() {
    assert_eq!(assert_failure::<RuntimeError>(&main_returning("RETURN 1 / 0;")),
               RuntimeError::DivisionByZero);
    assert_eq!(assert_failure::<RuntimeError>(&main_returning("RETURN 2147483647 + 1;")),
               RuntimeError::ExitCodeOutOfRange { value: "2147483648".to_string() });
    assert!(matches!(assert_failure::<RuntimeError>(&main_returning("LET x = logarithm(0.0); RETURN 0;")),
                     RuntimeError::InvalidArgument { .. }));
}

#[test]
fn type_errors() {
    let cases = [("RETURN y;", "UnknownVariable"),
                 ("missing(); RETURN 0;", "UnknownFunction"),
                 ("print(1, 2); RETURN 0;", "UnknownFunction"),
                 ("RETURN (1);", "GroupNotBinary"),
                 ("LET x = 1; x; RETURN 0;", "ExpressionNotCall"),
                 ("RETURN 3000000000;", "IntegerOutOfRange"),
                 ("RETURN 2147483648;", "IntegerOutOfRange"),
                 ("IF TRUE DO ELSE RETURN 1; END RETURN 0;", "EmptyThenBranch"),
                 ("IF 1 DO RETURN 1; END RETURN 0;", "ExpectedBoolean"),
                 ("WHILE \"yes\" DO END RETURN 0;", "ExpectedBoolean"),
                 ("FOR i IN 5 DO END RETURN 0;", "ExpectedIterable"),
                 ("RETURN 1.5;", "NotAssignable"),
                 ("LET x: Integer = 'c'; RETURN 0;", "NotAssignable"),
                 ("LET x: Float = 1.0; RETURN 0;", "UnknownType"),
                 ("LET x; RETURN 0;", "MissingDeclarationType"),
                 ("1 = 2; RETURN 0;", "InvalidAssignmentReceiver"),
                 ("RETURN 1 + 1.0;", "InvalidOperands"),
                 ("IF 1 < 'a' DO RETURN 1; END RETURN 0;", "InvalidOperands"),
                 ("IF TRUE < FALSE DO RETURN 1; END RETURN 0;", "InvalidOperands"),
                 ("LET x = 1; RETURN x.y;", "NotAnObject")];

    for (body, expected) in cases {
        let error = assert_failure::<TypeError>(&main_returning(body));
        assert!(format!("{error:?}").starts_with(expected),
                "{body}: expected {expected}, got {error:?}");
    }
}

#[test]
fn literal_ranges_are_checked_at_their_bounds() {
    assert_success(&main_returning("RETURN -2147483648;"), i32::MIN);
    assert_success(&main_returning("RETURN 2147483647;"), i32::MAX);

    let huge = format!("1{}.0", "0".repeat(400));
    assert_eq!(assert_failure::<TypeError>(&main_returning(&format!("LET d = {huge}; RETURN 0;"))),
               TypeError::DecimalOutOfRange { offset: 31 });
    let large = format!("1{}.0", "0".repeat(300));
    assert_success(&main_returning(&format!("LET d = {large}; RETURN 0;")), 0);
}

#[test]
fn capability_types_are_only_for_parameters() {
    assert_eq!(assert_failure::<TypeError>(&main_returning("LET c: Comparable = 1; RETURN 0;")),
               TypeError::CapabilityDeclaration { name:  "c".to_string(),
                                                  found: "Comparable".to_string(), });
    assert_eq!(assert_failure::<TypeError>("LET g: Any = 1; DEF main(): Integer DO RETURN 0; END"),
               TypeError::CapabilityDeclaration { name:  "g".to_string(),
                                                  found: "Any".to_string(), });
    assert_eq!(assert_failure::<TypeError>("DEF f(): Any DO RETURN 1; END
                                            DEF main(): Integer DO RETURN 0; END"),
               TypeError::CapabilityDeclaration { name:  "f".to_string(),
                                                  found: "Any".to_string(), });

    let src = "DEF f(x) DO print(x); END
               DEF g(y: Comparable) DO print(y); END
               DEF main(): Integer DO f(1); g('c'); RETURN 0; END";
    let source = parse(lex(src).unwrap()).unwrap();
    let analysis = analyze(&source, &Registry::standard()).unwrap();

    let parameter_type = |method: usize| {
        let Stmt::Expression(call) = &source.methods[method].statements[0] else {
            panic!("Expected an expression statement");
        };
        let ExprKind::Function { arguments, .. } = &call.kind else {
            panic!("Expected a call");
        };
        analysis.type_of(arguments[0].id).cloned()
    };
    assert_eq!(parameter_type(0), Some(Type::Any));
    assert_eq!(parameter_type(1), Some(Type::Comparable));
    assert_success(src, 0);
}

#[test]
fn nesting_is_limited_while_parsing() {
    let parse_str = |src: &str| parse(lex(src).unwrap());

    let deep = format!("{}1 + 1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(parse_str(&main_returning(&format!("RETURN {deep};"))),
                     Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })));

    let chain = vec!["1"; 100_000].join(" + ");
    assert!(matches!(parse_str(&main_returning(&format!("RETURN {chain};"))),
                     Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })));

    let blocks = format!("{}RETURN 1;{}", "IF TRUE DO ".repeat(100_000), " END".repeat(100_000));
    assert!(matches!(parse_str(&main_returning(&blocks)),
                     Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })));

    let nested = (0..40).fold("1".to_string(), |inner, _| format!("(1 + {inner})"));
    assert_success(&main_returning(&format!("RETURN {nested};")), 41);

    let chain = vec!["1"; 100].join(" + ");
    assert_success(&main_returning(&format!("RETURN {chain};")), 100);
}

#[test]
fn runaway_recursion_is_a_runtime_error() {
    with_large_stack(|| {
        let runaway = "DEF f(n: Integer): Integer DO RETURN f(n + 1); END
                       DEF main(): Integer DO RETURN f(0); END";
        assert_eq!(assert_failure::<RuntimeError>(runaway),
                   RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH });

        // `main` itself is the first call.
        let deepest = MAX_CALL_DEPTH - 2;
        let src = format!("DEF down(n: Integer): Integer DO
                               IF n == 0 DO RETURN 0; END
                               RETURN 1 + down(n - 1);
                           END
                           DEF main(): Integer DO RETURN down({deepest}); END");
        assert_success(&src, i32::try_from(deepest).unwrap());

        // A failed run leaves no calls behind on the interpreter.
        let mut interpreter = Interpreter::new(&Registry::standard());
        let runaway = parse(lex(runaway).unwrap()).unwrap();
        assert!(interpreter.run(&runaway).is_err());
        let src = parse(lex(&src).unwrap()).unwrap();
        assert_eq!(interpreter.run(&src).unwrap(), Value::from(i64::try_from(deepest).unwrap()));
    });
}

#[test]
fn ranges_are_produced_lazily() {
    let started = Instant::now();
    assert_success(&main_returning("FOR i IN range(0, 2000000000) DO RETURN i; END RETURN 1;"),
                   0);
    assert_success(&main_returning("FOR i IN range(-2000000000, 2000000000) DO
                                        IF i > -1999999998 DO RETURN 7; END
                                    END
                                    RETURN 1;"),
                   7);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn standard_registry_exposes_builtins() {
    let registry = Registry::standard();
    let names = registry.functions()
                        .map(|f| (f.signature.name.as_str(), f.signature.arity()))
                        .collect::<Vec<_>>();
    assert_eq!(names, [("logarithm", 1), ("print", 1), ("range", 2)]);
    assert_eq!(registry.function("range", 2).unwrap().signature.return_type,
               Type::IntegerIterable);
}

#[test]
fn parse_errors_report_offsets() {
    let parse_str = |src: &str| parse(lex(src).unwrap()).unwrap_err();

    assert_eq!(parse_str("DEF main(): Integer DO RETURN 0; END END"),
               ParseError::TrailingTokens { token:  "END".to_string(),
                                            offset: 37, });
    assert!(matches!(parse_str("DEF main("), ParseError::UnexpectedEndOfInput { offset: 9, .. }));
    assert!(matches!(parse_str("DEF main() RETURN"),
                     ParseError::UnexpectedToken { offset: 11, .. }));
    assert!(matches!(parse_str("DEF main(): Integer DO RETURN 0 END"),
                     ParseError::UnexpectedToken { offset: 32, .. }));
    assert_eq!(parse(Vec::new()).unwrap(), ember::ast::Source::default());
}

#[test]
fn lex_errors_report_offsets() {
    assert_eq!(lex("1."), Err(LexError::InvalidDecimal { offset: 2 }));
    assert_eq!(lex("''"), Err(LexError::EmptyCharacter { offset: 1 }));
    assert_eq!(lex("'\\q'"), Err(LexError::InvalidEscape { offset: 2 }));
    assert_eq!(lex("'ab'"), Err(LexError::InvalidCharacter { offset: 2 }));
    assert_eq!(lex("'a"), Err(LexError::UnterminatedCharacter { offset: 2 }));

    let texts = lex("a<=b != c = -1 - x").unwrap()
                                         .into_iter()
                                         .map(|t| (t.text, t.offset))
                                         .collect::<Vec<_>>();
    assert_eq!(texts,
               [("a".to_string(), 0),
                ("<=".to_string(), 1),
                ("b".to_string(), 3),
                ("!=".to_string(), 5),
                ("c".to_string(), 8),
                ("=".to_string(), 10),
                ("-1".to_string(), 12),
                ("-".to_string(), 15),
                ("x".to_string(), 17)]);
}

#[test]
fn unchecked_programs_fail_at_runtime() {
    assert!(matches!(assert_unchecked_failure(&main_returning("RETURN 1 AND TRUE;")),
                     RuntimeError::ExpectedBoolean { .. }));
    assert_eq!(assert_unchecked_failure(&main_returning("1 = 2; RETURN 0;")),
               RuntimeError::InvalidAssignmentReceiver);
    assert!(matches!(assert_unchecked_failure(&main_returning("RETURN y;")),
                     RuntimeError::UnknownVariable { .. }));
    assert!(matches!(assert_unchecked_failure(&main_returning("RETURN missing(1);")),
                     RuntimeError::UnknownFunction { .. }));
}

#[test]
fn print_writes_natural_text() {
    let output = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&output);

    let mut registry = Registry::standard();
    registry.define_function("print", vec![Type::Any], Type::Nil, move |args: &[Value]| {
                sink.borrow_mut().push(args[0].to_string());
                Ok(Value::Nil)
            });

    let src = main_returning("print(\"a\" + 1); print('c'); print(1.50); print(TRUE); print(NIL);
                              print(range(0, 3)); print(\"tab\\there\"); RETURN 0;");
    assert_eq!(get_result(&src, &registry, Mode::Checked).unwrap(), Some(0));
    assert_eq!(*output.borrow(),
               ["a1", "c", "1.50", "TRUE", "NIL", "[0, 1, 2]", "tab\there"]);
}

fn point_sum(args: &[Value]) -> EvalResult<Value> {
    let point = args[0].as_object()?;
    let x = point.field("x")?;
    let y = point.field("y")?;
    Ok(Value::from(x.as_integer()? + y.as_integer()?))
}

#[test]
fn host_object_types() {
    let mut registry = Registry::standard();
    let point = registry.define_type(ObjectType::new("Point").with_field("x", Type::Integer)
                                                             .with_field("y", Type::Integer)
                                                             .with_method("sum", vec![], Type::Integer, point_sum));
    let Type::Object(point_type) = point.clone() else {
        panic!("Expected an object type");
    };
    registry.define_function("make_point",
                             vec![Type::Integer, Type::Integer],
                             point,
                             move |args: &[Value]| {
                                 let object = Object::new(Rc::clone(&point_type));
                                 object.set_field("x", args[0].clone())?;
                                 object.set_field("y", args[1].clone())?;
                                 Ok(Value::from(object))
                             });

    let src = main_returning("LET p: Point = make_point(3, 4); p.x = p.x + 10; RETURN p.sum();");
    assert_eq!(get_result(&src, &registry, Mode::Checked).unwrap(), Some(17));

    let src = main_returning("LET p = make_point(3, 4); RETURN p.z;");
    let error = get_result(&src, &registry, Mode::Checked).unwrap_err();
    assert!(matches!(error.downcast_ref::<TypeError>(), Some(TypeError::UnknownField { .. })));

    let src = main_returning("LET p = make_point(3, 4); p.y = 'c'; RETURN 0;");
    let error = get_result(&src, &registry, Mode::Checked).unwrap_err();
    assert!(matches!(error.downcast_ref::<TypeError>(), Some(TypeError::NotAssignable { .. })));

    let src = main_returning("RETURN make_point(1, 2).sum(5);");
    let error = get_result(&src, &registry, Mode::Checked).unwrap_err();
    assert!(matches!(error.downcast_ref::<TypeError>(), Some(TypeError::UnknownMethod { .. })));
}

#[test]
fn scripts_return_expected_exit_codes() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ember"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = path.file_stem()
                           .and_then(|stem| stem.to_str())
                           .and_then(|stem| stem.rsplit('.').next())
                           .and_then(|code| code.parse::<i32>().ok())
                           .unwrap_or_else(|| panic!("{path:?} does not name its exit code"));

        count += 1;
        match run_source(&content) {
            Ok(code) => assert_eq!(code, expected, "{path:?} returned the wrong exit status"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
