/// Tokenizer for OpenStep-style dictionary literals.
///
/// Produces structural tokens (`{ } ( ) = ; ,`), quoted and bare strings, and
/// fully decoded `<…>` data blobs. Tracks 1-based line/column for diagnostics.
use super::errors::LiteralError;

/// The kind of a lexed token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Equals,
    Semicolon,
    Comma,
    /// `"…"` with escapes already resolved.
    Quoted(String),
    /// Unquoted run of `[A-Za-z0-9_$+/:.-]`.
    Bare(String),
    /// `<…>` hex data, decoded.
    Data(Vec<u8>),
}

impl TokenKind {
    /// Short description for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::LeftBrace => "'{'".to_owned(),
            Self::RightBrace => "'}'".to_owned(),
            Self::LeftParen => "'('".to_owned(),
            Self::RightParen => "')'".to_owned(),
            Self::Equals => "'='".to_owned(),
            Self::Semicolon => "';'".to_owned(),
            Self::Comma => "','".to_owned(),
            Self::Quoted(s) => format!("string \"{s}\""),
            Self::Bare(s) => format!("'{s}'"),
            Self::Data(_) => "data literal".to_owned(),
        }
    }
}

/// A token plus the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// Characters allowed in an unquoted string.
#[must_use]
pub fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '+' | '/' | ':' | '.' | '-')
}

/// Streaming lexer over a literal.
pub struct Lexer<'a> {
    src: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Lex the next token, or `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `LiteralError` for unknown characters, unterminated strings,
    /// bad escapes and malformed data blobs.
    pub fn next_token(&mut self) -> Result<Option<Token>, LiteralError> {
        self.skip_whitespace();
        let (line, column) = (self.line, self.column);
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let kind = match c {
            '{' | '}' | '(' | ')' | '=' | ';' | ',' => {
                self.bump();
                match c {
                    '{' => TokenKind::LeftBrace,
                    '}' => TokenKind::RightBrace,
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    '=' => TokenKind::Equals,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Comma,
                }
            }
            '"' => self.lex_quoted(line, column)?,
            '<' => self.lex_data(line, column)?,
            c if is_bare_char(c) => self.lex_bare(),
            found => {
                return Err(LiteralError::UnexpectedChar {
                    found,
                    line,
                    column,
                });
            }
        };

        Ok(Some(Token { kind, line, column }))
    }

    fn lex_bare(&mut self) -> TokenKind {
        let start = self.pos;
        while self.peek().is_some_and(is_bare_char) {
            self.bump();
        }
        TokenKind::Bare(self.src[start..self.pos].to_owned())
    }

    fn lex_quoted(&mut self, line: usize, column: usize) -> Result<TokenKind, LiteralError> {
        self.bump(); // opening quote
        let mut out = String::new();
        loop {
            let (esc_line, esc_column) = (self.line, self.column);
            match self.bump() {
                None => return Err(LiteralError::UnterminatedString { line, column }),
                Some('"') => return Ok(TokenKind::Quoted(out)),
                Some('\\') => self.lex_escape(&mut out, esc_line, esc_column, (line, column))?,
                Some(c) => out.push(c),
            }
        }
    }

    /// Decode one escape; the backslash is already consumed.
    fn lex_escape(
        &mut self,
        out: &mut String,
        line: usize,
        column: usize,
        string_start: (usize, usize),
    ) -> Result<(), LiteralError> {
        let Some(c) = self.bump() else {
            return Err(LiteralError::UnterminatedString {
                line: string_start.0,
                column: string_start.1,
            });
        };

        let decoded = match c {
            '"' => '"',
            '\\' => '\\',
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            'U' | 'u' => return self.lex_unicode_escape(out, line, column),
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            self.bump();
                            value = value * 8 + d;
                        }
                        None => break,
                    }
                }
                // At most 0o777, always a valid scalar value.
                char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            other => {
                return Err(LiteralError::InvalidEscape {
                    sequence: format!("\\{other}"),
                    line,
                    column,
                });
            }
        };
        out.push(decoded);
        Ok(())
    }

    /// `\UXXXX`, combining a following `\UXXXX` low surrogate when present.
    fn lex_unicode_escape(
        &mut self,
        out: &mut String,
        line: usize,
        column: usize,
    ) -> Result<(), LiteralError> {
        let mut units = vec![self.hex4(line, column)?];
        if (0xD800..0xDC00).contains(&units[0])
            && (self.src[self.pos..].starts_with("\\U") || self.src[self.pos..].starts_with("\\u"))
        {
            self.bump();
            self.bump();
            units.push(self.hex4(line, column)?);
        }

        for decoded in char::decode_utf16(units.iter().copied()) {
            let ch = decoded.map_err(|e| LiteralError::InvalidEscape {
                sequence: format!("\\U{:04X}", e.unpaired_surrogate()),
                line,
                column,
            })?;
            out.push(ch);
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hex4(&mut self, line: usize, column: usize) -> Result<u16, LiteralError> {
        let mut value: u16 = 0;
        let mut seen = String::with_capacity(4);
        for _ in 0..4 {
            let digit = self.peek().and_then(|c| c.to_digit(16));
            match (self.peek(), digit) {
                (Some(c), Some(d)) => {
                    self.bump();
                    seen.push(c);
                    // d < 16, so the cast is lossless.
                    value = value * 16 + d as u16;
                }
                _ => {
                    return Err(LiteralError::InvalidEscape {
                        sequence: format!("\\U{seen}"),
                        line,
                        column,
                    });
                }
            }
        }
        Ok(value)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn lex_data(&mut self, line: usize, column: usize) -> Result<TokenKind, LiteralError> {
        self.bump(); // '<'
        let mut bytes = Vec::new();
        let mut high: Option<u8> = None;
        loop {
            self.skip_whitespace();
            let (c_line, c_column) = (self.line, self.column);
            match self.bump() {
                None => return Err(LiteralError::UnexpectedEnd { expected: "'>'" }),
                Some('>') => break,
                Some(c) => {
                    let Some(nibble) = c.to_digit(16) else {
                        return Err(LiteralError::InvalidData {
                            reason: "non-hex character",
                            line: c_line,
                            column: c_column,
                        });
                    };
                    // nibble < 16
                    let nibble = nibble as u8;
                    match high.take() {
                        Some(h) => bytes.push((h << 4) | nibble),
                        None => high = Some(nibble),
                    }
                }
            }
        }

        if high.is_some() {
            return Err(LiteralError::InvalidData {
                reason: "odd number of hex digits",
                line,
                column,
            });
        }
        Ok(TokenKind::Data(bytes))
    }
}
