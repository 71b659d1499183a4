//! Property-based tests for the tiny compiler
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use tinyc::diagnostics::{DiagnosticKind, Diagnostics};
use tinyc::lexer::{ScanConfig, Scanner, TokenKind, lex};
use tinyc::{CompilationContext, CompilerConfig, compile_source};
use tinyc_core::{NumericKind, ValueType, classify};

/// Source-like text: mostly legal characters with the occasional stray one.
fn source_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 \n\t:=<>!+*/%(){}';.,#$-]{0,120}").unwrap()
}

// =============================================================================
// Scanner Properties
// =============================================================================

proptest! {
    /// Property: the scanner always terminates with exactly one end-of-file token
    #[test]
    fn scanner_is_total(source in any::<String>()) {
        let (tokens, _) = lex(&source, ScanConfig::default());
        prop_assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::EndFile));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EndFile).count(), 1);
    }

    /// Property: re-scanning from a reset state yields the same tokens
    #[test]
    fn scanner_reset_is_idempotent(source in source_text()) {
        let mut diagnostics = Diagnostics::new();
        let mut scanner = Scanner::new(&source, ScanConfig::default());
        let mut first = Vec::new();
        loop {
            let token = scanner.next_token(&mut diagnostics);
            let done = token.kind == TokenKind::EndFile;
            first.push(token);
            if done {
                break;
            }
        }
        let reported = diagnostics.len();

        scanner.reset();
        let mut again = Diagnostics::new();
        let second: Vec<_> = (0..first.len()).map(|_| scanner.next_token(&mut again)).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(reported, again.len());
    }

    /// Property: token positions never move backwards
    #[test]
    fn token_spans_are_ordered(source in source_text()) {
        let (tokens, _) = lex(&source, ScanConfig::default());
        for pair in tokens.windows(2) {
            let (a, b) = (pair[0].span, pair[1].span);
            prop_assert!((a.line, a.column) <= (b.line, b.column), "{} after {}", b, a);
        }
    }
}

// =============================================================================
// Numeric Classification Properties
// =============================================================================

proptest! {
    #[test]
    fn decimal_literals_classify_as_decimal(text in "[1-9][0-9]{0,8}") {
        prop_assert_eq!(classify(&text), NumericKind::Decimal);
    }

    #[test]
    fn octal_literals_classify_as_octal(text in "0[0-7]{1,8}") {
        prop_assert_eq!(classify(&text), NumericKind::Octal);
    }

    #[test]
    fn hex_literals_classify_as_hex(text in "0[xX][0-9a-fA-F]{1,7}") {
        prop_assert_eq!(classify(&text), NumericKind::Hex);
    }

    #[test]
    fn fractions_classify_by_suffix(whole in "[0-9]{0,5}", frac in "[0-9]{1,5}", suffix in "[fF]?") {
        let text = format!("{whole}.{frac}{suffix}");
        let expected = if suffix.is_empty() { NumericKind::Double } else { NumericKind::Float };
        prop_assert_eq!(classify(&text), expected);
    }

    /// Property: a scanned number is a single token carrying its whole text
    #[test]
    fn numbers_scan_as_one_token(text in "(0|[1-9][0-9]{0,5}|0[0-7]{1,5}|0x[0-9a-f]{1,5}|(0|[1-9][0-9]{0,3})\\.[0-9]{1,4}f?)") {
        let (tokens, diagnostics) = lex(&text, ScanConfig::default());
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Num(text.clone()));
        prop_assert_eq!(tokens.len(), 2);
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

fn numeric_literal() -> impl Strategy<Value = (&'static str, ValueType)> {
    prop_oneof![
        Just(("7", ValueType::Integer)),
        Just(("017", ValueType::Integer)),
        Just(("2.5f", ValueType::Float)),
        Just(("2.5", ValueType::Double)),
    ]
}

fn rank(ty: ValueType) -> u8 {
    match ty {
        ValueType::Integer => 0,
        ValueType::Float => 1,
        _ => 2,
    }
}

proptest! {
    /// Property: arithmetic resolves to the wider operand type
    #[test]
    fn arithmetic_follows_promotion_lattice(
        (lhs, lhs_ty) in numeric_literal(),
        (rhs, rhs_ty) in numeric_literal(),
        op in prop::sample::select(vec!["+", "-", "*", "/", "%"]),
    ) {
        let expected = if rank(lhs_ty) >= rank(rhs_ty) { lhs_ty } else { rhs_ty };
        let source = format!("double r := {lhs} {op} {rhs}");
        let mut ctx = CompilationContext::new(CompilerConfig::default());
        let program = compile_source(&source, &mut ctx);
        prop_assert!(program.is_ok(), "{}: {}", source, ctx.diagnostics);

        let program = program.unwrap();
        let tinyc::ast::StmtKind::Declaration { vars, .. } = &program.body[0].kind else {
            return Err(TestCaseError::fail("expected a declaration"));
        };
        let init = vars[0].init.as_ref().map(|e| e.resolved());
        prop_assert_eq!(init, Some(expected));
    }

    /// Property: compilation never panics, and a failure always leaves diagnostics behind
    #[test]
    fn failures_always_carry_diagnostics(source in source_text()) {
        let mut ctx = CompilationContext::new(CompilerConfig::default());
        if compile_source(&source, &mut ctx).is_err() {
            prop_assert!(ctx.has_errors());
        } else {
            prop_assert!(!ctx.has_errors());
        }
    }

    /// Property: lexical or syntax errors suppress analysis entirely
    #[test]
    fn front_end_errors_gate_analysis(source in source_text()) {
        let mut ctx = CompilationContext::new(CompilerConfig::default());
        let _ = compile_source(&source, &mut ctx);
        let front_end = ctx.diagnostics.has_kind(DiagnosticKind::Lexical)
            || ctx.diagnostics.has_kind(DiagnosticKind::Syntax);
        if front_end {
            prop_assert_eq!(ctx.diagnostics.count(DiagnosticKind::Analysis), 0);
        }
    }
}
