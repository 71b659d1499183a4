/// Parse a source text with a fresh diagnostics collector.
///
/// ## Returns
/// - The parsed [`Program`] and every lexical and syntax diagnostic produced on the way.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str, config: ScanConfig) -> (Program, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let program = parse_into(source, config, &mut diagnostics);
    (program, diagnostics)
}

/// Parse a source text, appending diagnostics to a caller-owned collector.
pub fn parse_into(source: &str, config: ScanConfig, diagnostics: &mut Diagnostics) -> Program {
    Parser::new(Scanner::new(source, config), diagnostics).parse()
}
