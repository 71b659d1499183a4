//! Finite-state scanner for the tiny language.
//!
//! [`Scanner::next_token`] produces one token per call until [`TokenKind::EndFile`]. Source text is
//! buffered one physical line at a time, and one character of pushback lets every state look one
//! character past its lexeme before deciding where it ends.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and keyword classification
//!
//! ## Recovery
//!
//! Every malformed lexeme yields exactly one lexical diagnostic. Illegal characters are dropped
//! without leaving the current state; malformed operators and numbers come back as
//! [`TokenKind::Error`]. Scanning never aborts.

pub mod tokens;

pub use tokens::{Token, TokenKind, classify_word};

use crate::ast::Span;
use crate::diagnostics::{Diagnostics, errors};
use tinyc_core::lang::operators::OperatorId;
use tinyc_core::lang::punctuation::PunctuationId;

/// Usable characters per physical line.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Deepest accepted nesting of `(` and `not` inside one expression.
pub const DEFAULT_MAX_NESTING: usize = 64;

/// Scanner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Longest accepted line, terminator excluded.
    pub max_line_len: usize,
    /// Trace every buffered source line.
    pub echo_source: bool,
    /// Expression nesting limit enforced by the parser that consumes this scanner.
    pub max_nesting: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            echo_source: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
//
//   Start ──'{'──▶ InComment ──'}'──▶ Start
//     │ ──'\''──▶ InString ──'\''──▶ Done(Str)
//     │ ──alpha──▶ InIdentifier ──other──▶ Done(keyword | ident)
//     │ ──':' '!' '>' '<'──▶ In{Assign,NotEqual,GreaterEq,LessEq} ──▶ Done
//     │ ──'0'──▶ InOctal ──'x'──▶ InHex
//     │ ──1-9──▶ InDecimal
//     │ ──'.'──▶ InFloat ◀──'.'── InDecimal / InOctal
//     └ ──single char──▶ Done
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InComment,
    InString,
    InIdentifier,
    InAssign,
    InNotEqual,
    InGreaterEq,
    InLessEq,
    InDecimal,
    InOctal,
    InHex,
    InFloat,
    Done,
}

/// Line-buffered scanner over one source text.
pub struct Scanner<'src> {
    source: &'src str,
    lines: std::str::SplitInclusive<'src, char>,
    buffer: Vec<char>,
    /// Index of the next character in `buffer`.
    pos: usize,
    /// 1-based number of the buffered line; 0 before the first read.
    line: usize,
    /// Set once the last `get_char` ran out of input, so pushback is a no-op.
    at_eof: bool,
    config: ScanConfig,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, config: ScanConfig) -> Self {
        Self {
            source,
            lines: source.split_inclusive('\n'),
            buffer: Vec::new(),
            pos: 0,
            line: 0,
            at_eof: false,
            config,
        }
    }

    /// Current line number, for callers that attach positions to their own diagnostics.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Rewind to the first line of the source.
    pub fn reset(&mut self) {
        self.lines = self.source.split_inclusive('\n');
        self.buffer.clear();
        self.pos = 0;
        self.line = 0;
        self.at_eof = false;
    }

    // ========================================================================
    // Character buffer
    // ========================================================================

    /// Next character, reloading the line buffer when it is exhausted.
    fn get_char(&mut self, diagnostics: &mut Diagnostics) -> Option<char> {
        while self.pos >= self.buffer.len() {
            if !self.load_line(diagnostics) {
                self.at_eof = true;
                return None;
            }
        }
        self.at_eof = false;
        let c = self.buffer[self.pos];
        self.pos += 1;
        Some(c)
    }

    /// Push the last character back. Has no effect after end of input.
    fn unget_char(&mut self) {
        if !self.at_eof && self.pos > 0 {
            self.pos -= 1;
        }
    }

    fn load_line(&mut self, diagnostics: &mut Diagnostics) -> bool {
        let Some(text) = self.lines.next() else {
            return false;
        };
        self.line += 1;
        self.buffer.clear();
        self.buffer.extend(text.chars());
        self.pos = 0;

        let content = text.trim_end_matches(['\n', '\r']);
        if self.config.echo_source {
            tracing::trace!(target: "tinyc::scanner", line = self.line, "{}", content);
        }
        let len = content.chars().count();
        if len > self.config.max_line_len {
            diagnostics.push(errors::line_too_long(self.line, len, self.config.max_line_len));
        }
        true
    }

    /// Position of the character most recently returned by `get_char`.
    fn last_span(&self) -> Span {
        Span::new(self.line.max(1), self.pos.max(1))
    }

    // ========================================================================
    // Main scanning loop
    // ========================================================================

    /// Scan and return the next token.
    ///
    /// After the end of input every call returns [`TokenKind::EndFile`].
    pub fn next_token(&mut self, diagnostics: &mut Diagnostics) -> Token {
        let mut state = ScanState::Start;
        let mut text = String::new();
        let mut kind = TokenKind::EndFile;
        let mut start = self.last_span();

        while state != ScanState::Done {
            let c = self.get_char(diagnostics);
            let mut save = true;

            let opaque = matches!(state, ScanState::InComment | ScanState::InString);
            if let Some(ch) = c.filter(|ch| !opaque && !is_legal(*ch)) {
                diagnostics.push(errors::illegal_char(ch, self.last_span()));
                continue;
            }

            match state {
                ScanState::Start => {
                    start = self.last_span();
                    match c {
                        None => {
                            save = false;
                            kind = TokenKind::EndFile;
                            state = ScanState::Done;
                        }
                        Some(' ' | '\t' | '\r' | '\n') => save = false,
                        Some('{') => {
                            save = false;
                            state = ScanState::InComment;
                        }
                        Some('\'') => {
                            save = false;
                            state = ScanState::InString;
                        }
                        Some('.') => state = ScanState::InFloat,
                        Some('0') => state = ScanState::InOctal,
                        Some('1'..='9') => state = ScanState::InDecimal,
                        Some(ch) if ch.is_ascii_alphabetic() => state = ScanState::InIdentifier,
                        Some(':') => state = ScanState::InAssign,
                        Some('!') => state = ScanState::InNotEqual,
                        Some('>') => state = ScanState::InGreaterEq,
                        Some('<') => state = ScanState::InLessEq,
                        Some(ch) => {
                            state = ScanState::Done;
                            kind = match single_char_token(ch) {
                                Some(kind) => kind,
                                None => {
                                    diagnostics.push(errors::stray_char(ch, start));
                                    TokenKind::Error
                                }
                            };
                        }
                    }
                }

                ScanState::InComment => {
                    save = false;
                    match c {
                        None => {
                            diagnostics.push(errors::unterminated_comment(start));
                            state = ScanState::Done;
                        }
                        Some('}') => state = ScanState::Start,
                        Some(_) => {}
                    }
                }

                ScanState::InString => match c {
                    None => {
                        save = false;
                        diagnostics.push(errors::unterminated_string(start));
                        state = ScanState::Done;
                    }
                    Some('\n' | '\r') => {
                        save = false;
                        diagnostics.push(errors::unterminated_string(start));
                        kind = TokenKind::Error;
                        state = ScanState::Done;
                    }
                    Some('\'') => {
                        save = false;
                        kind = TokenKind::Str(std::mem::take(&mut text));
                        state = ScanState::Done;
                    }
                    Some(_) => {}
                },

                ScanState::InIdentifier => {
                    if !c.is_some_and(|ch| ch.is_ascii_alphanumeric()) {
                        save = false;
                        self.unget_char();
                        kind = classify_word(std::mem::take(&mut text));
                        state = ScanState::Done;
                    }
                }

                ScanState::InAssign | ScanState::InNotEqual => {
                    let (first, op) = if state == ScanState::InAssign {
                        (':', OperatorId::Assign)
                    } else {
                        ('!', OperatorId::NotEq)
                    };
                    state = ScanState::Done;
                    if c == Some('=') {
                        kind = TokenKind::Operator(op);
                    } else {
                        save = false;
                        self.unget_char();
                        diagnostics.push(errors::incomplete_operator(first, start));
                        kind = TokenKind::Error;
                    }
                }

                ScanState::InGreaterEq | ScanState::InLessEq => {
                    let (long, short) = if state == ScanState::InGreaterEq {
                        (OperatorId::GtEq, OperatorId::Gt)
                    } else {
                        (OperatorId::LtEq, OperatorId::Lt)
                    };
                    state = ScanState::Done;
                    if c == Some('=') {
                        kind = TokenKind::Operator(long);
                    } else {
                        save = false;
                        self.unget_char();
                        kind = TokenKind::Operator(short);
                    }
                }

                ScanState::InDecimal => match c {
                    Some('0'..='9') => {}
                    Some('.') => state = ScanState::InFloat,
                    _ => {
                        save = false;
                        self.unget_char();
                        kind = TokenKind::Num(std::mem::take(&mut text));
                        state = ScanState::Done;
                    }
                },

                ScanState::InOctal => match c {
                    Some('0'..='7') => {}
                    Some('x' | 'X') if text == "0" => state = ScanState::InHex,
                    Some('.') => state = ScanState::InFloat,
                    _ => {
                        save = false;
                        self.unget_char();
                        kind = TokenKind::Num(std::mem::take(&mut text));
                        state = ScanState::Done;
                    }
                },

                ScanState::InHex => {
                    if !c.is_some_and(|ch| ch.is_ascii_hexdigit()) {
                        save = false;
                        self.unget_char();
                        state = ScanState::Done;
                        kind = if text.len() > 2 {
                            TokenKind::Num(std::mem::take(&mut text))
                        } else {
                            diagnostics.push(errors::malformed_number(&text, start));
                            TokenKind::Error
                        };
                    }
                }

                ScanState::InFloat => {
                    let has_digits = text.chars().any(|ch| ch.is_ascii_digit());
                    match c {
                        Some('0'..='9') => {}
                        Some('f' | 'F') if has_digits => {
                            text.extend(c);
                            save = false;
                            kind = TokenKind::Num(std::mem::take(&mut text));
                            state = ScanState::Done;
                        }
                        _ => {
                            save = false;
                            self.unget_char();
                            state = ScanState::Done;
                            kind = if has_digits {
                                TokenKind::Num(std::mem::take(&mut text))
                            } else {
                                diagnostics.push(errors::malformed_number(&text, start));
                                TokenKind::Error
                            };
                        }
                    }
                }

                ScanState::Done => {}
            }

            if save {
                text.extend(c);
            }
        }

        let token = Token::new(kind, start);
        tracing::trace!(target: "tinyc::scanner", line = token.span.line, token = %token.kind);
        token
    }
}

/// Characters allowed outside comments and strings.
fn is_legal(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '+' | '-'
                | '*'
                | '/'
                | '%'
                | '('
                | ')'
                | '{'
                | '}'
                | '<'
                | '>'
                | '='
                | '!'
                | ':'
                | ','
                | '\''
                | ';'
                | '.'
                | ' '
                | '\t'
                | '\r'
                | '\n'
        )
}

fn single_char_token(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::Operator(OperatorId::Plus),
        '-' => TokenKind::Operator(OperatorId::Minus),
        '*' => TokenKind::Operator(OperatorId::Star),
        '/' => TokenKind::Operator(OperatorId::Slash),
        '%' => TokenKind::Operator(OperatorId::Percent),
        '=' => TokenKind::Operator(OperatorId::Eq),
        '(' => TokenKind::Punctuation(PunctuationId::LParen),
        ')' => TokenKind::Punctuation(PunctuationId::RParen),
        ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
        ',' => TokenKind::Punctuation(PunctuationId::Comma),
        _ => return None,
    };
    Some(kind)
}

/// Scan a whole source text, including the trailing [`TokenKind::EndFile`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str, config: ScanConfig) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new(source, config);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token(&mut diagnostics);
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, diagnostics)
}
