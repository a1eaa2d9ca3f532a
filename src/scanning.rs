use crate::parsing::BinaryOperator;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    operator(BinaryOperator),
    operand,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: String, kind: TokenKind) -> Self {
        Self{content, kind}
    }

    /// Anything that is not exactly one of the four operator symbols is an
    /// operand candidate, including the empty string.
    pub fn classify(content: &str) -> Self {
        match content.parse() {
            Ok(operator) => Self::new(content.into(), TokenKind::operator(operator)),
            Err(_) => Self::new(content.into(), TokenKind::operand),
        }
    }
}

pub trait Scanner {
    fn get_current(&self) -> Token;
    fn advance(&mut self);
    fn is_valid(&self) -> bool;
}

/// Splits a line on single spaces. Consecutive spaces yield empty tokens.
pub struct LineScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl LineScanner {
    pub fn new(line: &str) -> Self {
        Self{tokens: line.split(' ').map(Token::classify).collect(), index: 0}
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl Scanner for LineScanner {
    fn get_current(&self) -> Token {
        self.tokens[self.index].clone()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn is_valid(&self) -> bool {
        self.index < self.tokens.len()
    }
}

fn count<P: Fn(u8) -> bool>(bytes: &[u8], start: usize, predicate: P) -> usize {
    bytes.iter().skip(start).take_while(|byte| predicate(**byte)).count()
}

/// Length of the leading `digits [ '.' digits ]` run, or 0 when the content
/// does not start with a digit. Only the prefix is inspected.
pub fn number_prefix_len(content: &str) -> usize {
    let bytes = content.as_bytes();
    let whole = count(bytes, 0, |byte| byte.is_ascii_digit());
    if whole == 0 {
        return 0;
    }

    let mut length = whole;
    if bytes.get(length) == Some(&b'.') {
        length += 1;
        length += count(bytes, length, |byte| byte.is_ascii_digit());
    }
    length
}

pub fn has_number_prefix(content: &str) -> bool {
    number_prefix_len(content) > 0
}
