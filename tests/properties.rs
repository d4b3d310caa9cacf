use proptest::prelude::*;
use tib::ast::Expr;
use tib::lexer::{tokenize, Lexer, TokenKind};
use tib::{parse, Grammar};

const MAX_INPUT_BYTES: usize = 256;
const MAX_STEPS: usize = 4096;

const BINARY_OPERATORS: &[&str] = &[
    "->", "or", "xor", "and", "=", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "^",
];

fn chain_source(first: u32, rest: &[(usize, u32)]) -> String {
    let mut source = first.to_string();
    for (op, operand) in rest {
        source.push_str(&format!(" {} {}", BINARY_OPERATORS[*op], operand));
    }
    source
}

fn is_left_nested(expr: &Expr) -> bool {
    match expr {
        Expr::Binary { left, right, .. } => {
            matches!(**right, Expr::Literal { .. }) && is_left_nested(left)
        }
        Expr::Literal { .. } => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn digit_strings_lex_as_one_integer(digits in "[0-9]{1,24}") {
        let grammar = Grammar::default();
        let tokens = tokenize(&digits, &grammar).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].lexeme, &digits);
    }

    #[test]
    fn dotted_digit_strings_lex_as_one_float(
        whole in "[0-9]{0,12}",
        fraction in "[0-9]{0,12}",
    ) {
        prop_assume!(!(whole.is_empty() && fraction.is_empty()));

        let source = format!("{}.{}", whole, fraction);
        let grammar = Grammar::default();
        let tokens = tokenize(&source, &grammar).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        prop_assert_eq!(&tokens[0].lexeme, &source);
    }

    #[test]
    fn operator_chains_respect_the_ladder(
        first in 0u32..1000,
        rest in proptest::collection::vec((0..BINARY_OPERATORS.len(), 0u32..1000), 0..10),
    ) {
        let source = chain_source(first, &rest);
        let grammar = Grammar::default();
        let output = parse(&source);

        prop_assert!(output.is_ok(), "{:?}: {:?}", source, output.diagnostics);

        let expr = output.program.statements[0].as_expression().unwrap();
        prop_assert!(expr.respects_precedence(&grammar.operators), "{}", expr.to_sexpr());
        prop_assert_eq!(expr.to_string(), source);
    }

    #[test]
    fn single_operator_chains_nest_to_the_left(
        op in 0..BINARY_OPERATORS.len(),
        operands in proptest::collection::vec(0u32..100, 2..10),
    ) {
        let rest: Vec<(usize, u32)> = operands[1..].iter().map(|n| (op, *n)).collect();
        let source = chain_source(operands[0], &rest);
        let output = parse(&source);

        let expr = output.program.statements[0].as_expression().unwrap();
        prop_assert!(is_left_nested(expr), "{}", expr.to_sexpr());
    }

    #[test]
    fn statement_count_follows_the_terminators(
        parts in proptest::collection::vec(proptest::option::of(0u32..100), 1..12),
        newline in any::<bool>(),
    ) {
        let separator = if newline { "\n" } else { ":" };
        let source = parts
            .iter()
            .map(|part| part.map(|n| n.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(separator);

        let trailing = usize::from(parts.last().map_or(false, |p| p.is_some()));
        let output = parse(&source);

        prop_assert!(output.is_ok());
        prop_assert_eq!(output.program.len(), parts.len() - 1 + trailing);
    }

    #[test]
    fn lexing_with_recovery_terminates(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let grammar = Grammar::default();
        let mut lexer = Lexer::new(&input, &grammar);
        let mut terminated = false;

        for _ in 0..MAX_STEPS {
            match lexer.next() {
                Some(Ok(_)) => {}
                Some(Err(_)) => lexer.recover(),
                None => {
                    terminated = true;
                    break;
                }
            }
        }

        prop_assert!(
            terminated,
            "lexer did not terminate within {MAX_STEPS} steps for input length {}",
            input.len()
        );
    }

    #[test]
    fn nested_input_never_exhausts_the_stack(
        opens in 0usize..2_000,
        prefix in prop_oneof![Just("("), Just("-"), Just("not("), Just("--")],
    ) {
        let source = prefix.repeat(opens) + "1";
        let output = parse(&source);

        prop_assert_eq!(output.program.len(), 1);
        prop_assert!(output.diagnostics.len() <= 1);
    }

    #[test]
    fn every_invalid_statement_has_one_diagnostic(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let output = parse(&input);

        let invalid: Vec<_> = output
            .program
            .iter()
            .filter(|stmt| stmt.is_invalid())
            .map(|stmt| Some(stmt.span))
            .collect();
        let tagged: Vec<_> = output.diagnostics.iter().map(|d| d.statement).collect();
        prop_assert_eq!(invalid, tagged);

        let lines: Vec<usize> = output.diagnostics.iter().map(|d| d.span.line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        prop_assert_eq!(lines, sorted);
    }
}
