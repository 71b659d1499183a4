#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyc::{CompilationContext, CompilerConfig, compile_source};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let mut ctx = CompilationContext::new(CompilerConfig::default());
        // Every failure must surface as diagnostics, never as a panic
        if compile_source(s, &mut ctx).is_err() {
            assert!(ctx.has_errors());
        }
    }
});
