/// Dictionary-literal parser.
///
/// A state machine over lexer tokens with an explicit container stack, so
/// nesting depth is limited by memory rather than the call stack.
use super::errors::LiteralError;
use super::lexer::{Lexer, Token, TokenKind};
use super::value::{Dictionary, PlistValue};

/// What a dictionary frame is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DictState {
    /// After `{` or `;`.
    KeyOrEnd,
    /// After a key.
    Equals,
    /// After `=`.
    Value,
    /// After a value.
    SemicolonOrEnd,
}

impl DictState {
    fn expected(self) -> &'static str {
        match self {
            Self::KeyOrEnd => "a key or '}'",
            Self::Equals => "'='",
            Self::Value => "a value",
            Self::SemicolonOrEnd => "';' or '}'",
        }
    }
}

/// What an array frame is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    /// After `(` or `,`.
    ValueOrEnd,
    /// After a value.
    CommaOrEnd,
}

impl ArrayState {
    fn expected(self) -> &'static str {
        match self {
            Self::ValueOrEnd => "a value or ')'",
            Self::CommaOrEnd => "',' or ')'",
        }
    }
}

/// An open container on the parse stack.
#[derive(Debug)]
enum Frame {
    Dict {
        entries: Dictionary,
        key: Option<String>,
        state: DictState,
    },
    Array {
        items: Vec<PlistValue>,
        state: ArrayState,
    },
}

impl Frame {
    fn dict() -> Self {
        Self::Dict {
            entries: Dictionary::new(),
            key: None,
            state: DictState::KeyOrEnd,
        }
    }

    fn array() -> Self {
        Self::Array {
            items: Vec::new(),
            state: ArrayState::ValueOrEnd,
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::Dict { state, .. } => state.expected(),
            Self::Array { state, .. } => state.expected(),
        }
    }

    fn into_value(self) -> PlistValue {
        match self {
            Self::Dict { entries, .. } => PlistValue::Dict(entries),
            Self::Array { items, .. } => PlistValue::Array(items),
        }
    }

    /// Store a finished child value.
    fn attach(&mut self, value: PlistValue) {
        match self {
            Self::Dict {
                entries,
                key,
                state,
            } => {
                if let Some(k) = key.take() {
                    entries.insert(k, value);
                }
                *state = DictState::SemicolonOrEnd;
            }
            Self::Array { items, state } => {
                items.push(value);
                *state = ArrayState::CommaOrEnd;
            }
        }
    }
}

/// Result of feeding one token to the top frame.
enum Step {
    /// State advanced; nothing else to do.
    Continue,
    /// A nested container opened.
    Open(Frame),
    /// A scalar value completed.
    Value(PlistValue),
    /// The top container closed.
    Close,
}

/// Start a value from a token, if the token can begin one.
fn begin_value(kind: TokenKind) -> Result<Step, TokenKind> {
    match kind {
        TokenKind::LeftBrace => Ok(Step::Open(Frame::dict())),
        TokenKind::LeftParen => Ok(Step::Open(Frame::array())),
        TokenKind::Quoted(s) => Ok(Step::Value(PlistValue::String(s))),
        TokenKind::Bare(s) => Ok(Step::Value(PlistValue::from_bare(&s))),
        TokenKind::Data(bytes) => Ok(Step::Value(PlistValue::Data(bytes))),
        other => Err(other),
    }
}

/// Parse a dictionary literal. The input must already be trimmed and start
/// with `{`.
///
/// # Errors
///
/// Returns `LiteralError` on any lexical or grammatical error, including
/// content after the closing brace.
pub fn parse_dictionary(src: &str) -> Result<Dictionary, LiteralError> {
    let mut lexer = Lexer::new(src);

    let root = next_or_end(&mut lexer, "'{'")?;
    if root.kind != TokenKind::LeftBrace {
        return Err(unexpected(root, "'{'"));
    }
    let mut stack = vec![Frame::dict()];

    loop {
        let expected = stack.last().map_or("'{'", Frame::expected);
        let token = next_or_end(&mut lexer, expected)?;
        let Some(top) = stack.last_mut() else {
            // Root frame is only popped on return below.
            return Err(unexpected(token, "end of input"));
        };

        let step = feed(top, token)?;
        let finished = match step {
            Step::Continue => continue,
            Step::Open(frame) => {
                stack.push(frame);
                continue;
            }
            Step::Value(value) => Some(value),
            Step::Close => match stack.pop() {
                Some(Frame::Dict { entries, .. }) if stack.is_empty() => {
                    return finish_root(&mut lexer, entries);
                }
                frame => frame.map(Frame::into_value),
            },
        };

        let Some(value) = finished else { continue };
        match stack.last_mut() {
            Some(parent) => parent.attach(value),
            // The root frame is always a dictionary and returns on close.
            None => return Err(LiteralError::UnexpectedEnd { expected: "'}'" }),
        }
    }
}

/// The root dictionary closed; nothing but whitespace may follow.
fn finish_root(lexer: &mut Lexer<'_>, root: Dictionary) -> Result<Dictionary, LiteralError> {
    match lexer.next_token()? {
        Some(extra) => Err(LiteralError::TrailingContent {
            line: extra.line,
            column: extra.column,
        }),
        None => Ok(root),
    }
}

/// Advance the top frame's state machine by one token.
fn feed(top: &mut Frame, token: Token) -> Result<Step, LiteralError> {
    let (line, column) = (token.line, token.column);
    let reject = |kind: TokenKind, expected: &'static str| LiteralError::UnexpectedToken {
        found: kind.describe(),
        expected,
        line,
        column,
    };

    match top {
        Frame::Dict { key, state, .. } => match (*state, token.kind) {
            (DictState::KeyOrEnd | DictState::SemicolonOrEnd, TokenKind::RightBrace) => {
                Ok(Step::Close)
            }
            (DictState::KeyOrEnd, TokenKind::Quoted(k) | TokenKind::Bare(k)) => {
                *key = Some(k);
                *state = DictState::Equals;
                Ok(Step::Continue)
            }
            (DictState::Equals, TokenKind::Equals) => {
                *state = DictState::Value;
                Ok(Step::Continue)
            }
            (DictState::Value, kind) => {
                begin_value(kind).map_err(|kind| reject(kind, DictState::Value.expected()))
            }
            (DictState::SemicolonOrEnd, TokenKind::Semicolon) => {
                *state = DictState::KeyOrEnd;
                Ok(Step::Continue)
            }
            (s, kind) => Err(reject(kind, s.expected())),
        },
        Frame::Array { state, .. } => match (*state, token.kind) {
            (ArrayState::ValueOrEnd | ArrayState::CommaOrEnd, TokenKind::RightParen) => {
                Ok(Step::Close)
            }
            (ArrayState::ValueOrEnd, kind) => {
                begin_value(kind).map_err(|kind| reject(kind, ArrayState::ValueOrEnd.expected()))
            }
            (ArrayState::CommaOrEnd, TokenKind::Comma) => {
                *state = ArrayState::ValueOrEnd;
                Ok(Step::Continue)
            }
            (s, kind) => Err(reject(kind, s.expected())),
        },
    }
}

fn next_or_end(lexer: &mut Lexer<'_>, expected: &'static str) -> Result<Token, LiteralError> {
    lexer
        .next_token()?
        .ok_or(LiteralError::UnexpectedEnd { expected })
}

fn unexpected(token: Token, expected: &'static str) -> LiteralError {
    LiteralError::UnexpectedToken {
        found: token.kind.describe(),
        expected,
        line: token.line,
        column: token.column,
    }
}
