//! Snapshot tests for analyzed syntax trees and reports

use std::fs;
use std::path::Path;

use tinyc::ast::pretty::outline;
use tinyc::{CompilationContext, CompilerConfig, compile_source};

fn compile(source: &str) -> (String, CompilationContext) {
    let mut ctx = CompilationContext::new(CompilerConfig::default());
    let program = compile_source(source, &mut ctx).unwrap();
    (outline(&program), ctx)
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/dangling_else.tny");
    let (tree, _) = compile(&fs::read_to_string(path).unwrap());
    insta::assert_snapshot!(tree, @r"
    Declaration bool [line 2]
      Var a [line 2]
        Const true [line 2] : bool
      Var b [line 2]
        Const false [line 2] : bool
    If [line 3]
      Ident a [line 3] : bool
      Then
        If [line 3]
          Ident b [line 3] : bool
          Then
            Write [line 3]
              Const 1 [line 3] : int
          Else
            Write [line 3]
              Const 2 [line 3] : int
    ");
}

#[test]
fn test_promotion_is_visible_in_tree() {
    let (tree, ctx) = compile("int i := 2;\nfloat f;\nwrite i * f + 1.5");
    insta::assert_snapshot!(tree, @r"
    Declaration int [line 1]
      Var i [line 1]
        Const 2 [line 1] : int
    Declaration float [line 2]
      Var f [line 2]
    Write [line 3]
      Binary + [line 3] : double
        Binary * [line 3] : float
          Ident i [line 3] : int
          Ident f [line 3] : float
        Const 1.5 [line 3] : double
    ");
    insta::assert_snapshot!(ctx.symbols.to_string(), @r"
    Variable_Name  Memory_Address  Type   Appear_Line_Number
    i              0x00000000      int    1 3
    f              0x00000001      float  2 3
    ");
}
