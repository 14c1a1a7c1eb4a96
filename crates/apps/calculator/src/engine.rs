//! Arithmetic evaluation and keypad state for the calculator panel.
//!
//! The evaluator accepts decimal literals, unary signs, and `+ - * /` with the usual precedence.
//! Anything else is rejected; user text is never handed to a general-purpose evaluator.

use thiserror::Error;

const MAX_TAPE_ITEMS: usize = 24;

#[derive(Debug, Clone, PartialEq, Error)]
/// Reasons an expression could not be evaluated.
pub enum ExpressionError {
    /// The display was empty.
    #[error("nothing to evaluate")]
    Empty,
    /// A literal such as `1.2.3` did not parse.
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    /// A character outside digits, `.`, and `+ - * /`.
    #[error("unexpected `{0}`")]
    UnexpectedCharacter(char),
    /// An operator with nothing after it.
    #[error("operator `{0}` is missing an operand")]
    MissingOperand(char),
    /// Two numbers with no operator between them.
    #[error("missing operator between numbers")]
    MissingOperator,
    /// Division by zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
    /// The result is infinite or NaN.
    #[error("result is out of range")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        match ch {
            ' ' => {
                chars.next();
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Op(ch));
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&digit) = chars.peek() {
                    if !(digit.is_ascii_digit() || digit == '.') {
                        break;
                    }
                    literal.push(digit);
                    chars.next();
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(ExpressionError::UnexpectedCharacter(other)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term(None)?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.bump();
            let rhs = self.term(Some(op))?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self, after: Option<char>) -> Result<f64, ExpressionError> {
        let mut value = self.factor(after)?;
        while let Some(Token::Op(op @ ('*' | '/'))) = self.peek() {
            self.bump();
            let rhs = self.factor(Some(op))?;
            if op == '*' {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                value /= rhs;
            }
        }
        Ok(value)
    }

    // factor := ('+' | '-') factor | number
    fn factor(&mut self, after: Option<char>) -> Result<f64, ExpressionError> {
        match self.bump() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Op(sign @ ('+' | '-'))) => {
                let value = self.factor(Some(sign))?;
                Ok(if sign == '-' { -value } else { value })
            }
            Some(Token::Op(op)) => Err(ExpressionError::MissingOperand(op)),
            None => Err(ExpressionError::MissingOperand(after.unwrap_or('='))),
        }
    }
}

/// Evaluates an arithmetic expression.
///
/// # Errors
///
/// Returns an [`ExpressionError`] for empty or malformed input, division by zero, and results
/// that are not finite.
pub fn evaluate(input: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(match token {
            Token::Op(op) => ExpressionError::MissingOperand(op),
            Token::Number(_) => ExpressionError::MissingOperator,
        });
    }
    if !value.is_finite() {
        return Err(ExpressionError::Overflow);
    }
    Ok(value)
}

/// Formats a result without a trailing fraction for whole numbers.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    /// Append a digit, decimal point, or operator to the display.
    Insert(char),
    Equals,
    Clear,
    Backspace,
}

#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    pub id: &'static str,
    pub label: &'static str,
    pub class_name: &'static str,
    pub key: CalcKey,
}

const fn insert(id: &'static str, label: &'static str, class_name: &'static str) -> KeySpec {
    let bytes = label.as_bytes();
    KeySpec {
        id,
        label,
        class_name,
        key: CalcKey::Insert(bytes[0] as char),
    }
}

/// Keypad in row order, four keys per row.
pub const KEYPAD: [KeySpec; 16] = [
    insert("7", "7", "digit"),
    insert("8", "8", "digit"),
    insert("9", "9", "digit"),
    insert("div", "/", "operator"),
    insert("4", "4", "digit"),
    insert("5", "5", "digit"),
    insert("6", "6", "digit"),
    insert("mul", "*", "operator"),
    insert("1", "1", "digit"),
    insert("2", "2", "digit"),
    insert("3", "3", "digit"),
    insert("sub", "-", "operator"),
    insert("0", "0", "digit"),
    insert("dot", ".", "digit"),
    KeySpec {
        id: "eq",
        label: "=",
        class_name: "operator equals",
        key: CalcKey::Equals,
    },
    insert("add", "+", "operator"),
];

/// Maps a `KeyboardEvent.key` value to a keypad key.
pub fn keyboard_key(key: &str) -> Option<CalcKey> {
    match key {
        "Enter" | "=" => Some(CalcKey::Equals),
        "Escape" | "Delete" => Some(CalcKey::Clear),
        "Backspace" => Some(CalcKey::Backspace),
        "," => Some(CalcKey::Insert('.')),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch @ ('0'..='9' | '.' | '+' | '-' | '*' | '/')), None) => {
                    Some(CalcKey::Insert(ch))
                }
                (Some('x' | 'X'), None) => Some(CalcKey::Insert('*')),
                _ => None,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub id: u64,
    pub expression: String,
    pub result: String,
}

/// Display text plus a short tape of evaluated expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    tape: Vec<TapeEntry>,
    next_tape_id: u64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: String::new(),
            tape: Vec::new(),
            next_tape_id: 1,
        }
    }
}

impl CalculatorState {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn tape(&self) -> &[TapeEntry] {
        &self.tape
    }

    /// Applies one key press. An evaluation error clears the display and is returned for
    /// reporting.
    pub fn press(&mut self, key: CalcKey) -> Result<(), ExpressionError> {
        match key {
            CalcKey::Insert(ch) => self.display.push(ch),
            CalcKey::Clear => self.display.clear(),
            CalcKey::Backspace => {
                self.display.pop();
            }
            CalcKey::Equals => return self.evaluate_display(),
        }
        Ok(())
    }

    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    fn evaluate_display(&mut self) -> Result<(), ExpressionError> {
        match evaluate(&self.display) {
            Ok(value) => {
                let result = format_number(value);
                let expression = std::mem::replace(&mut self.display, result.clone());
                self.push_tape(expression, result);
                Ok(())
            }
            Err(err) => {
                self.display.clear();
                Err(err)
            }
        }
    }

    fn push_tape(&mut self, expression: String, result: String) {
        let id = self.next_tape_id;
        self.next_tape_id = self.next_tape_id.saturating_add(1);
        self.tape.push(TapeEntry {
            id,
            expression,
            result,
        });
        if self.tape.len() > MAX_TAPE_ITEMS {
            let overflow = self.tape.len() - MAX_TAPE_ITEMS;
            self.tape.drain(0..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn type_keys(state: &mut CalculatorState, text: &str) {
        for ch in text.chars() {
            state.press(CalcKey::Insert(ch)).expect("insert never fails");
        }
    }

    fn type_and_evaluate(state: &mut CalculatorState, input: &str) -> Result<(), ExpressionError> {
        type_keys(state, input);
        state.press(CalcKey::Equals)
    }

    #[test]
    fn two_plus_two_displays_four() {
        let mut state = CalculatorState::default();
        type_keys(&mut state, "2+2");

        state.press(CalcKey::Equals).expect("valid expression");

        assert_eq!(state.display(), "4");
        assert_eq!(
            state.tape(),
            &[TapeEntry {
                id: 1,
                expression: "2+2".into(),
                result: "4".into(),
            }]
        );
    }

    #[test]
    fn dangling_operator_reports_error_and_clears_display() {
        let mut state = CalculatorState::default();
        type_keys(&mut state, "2+");

        let err = state.press(CalcKey::Equals).expect_err("incomplete");

        assert_eq!(err, ExpressionError::MissingOperand('+'));
        assert_eq!(state.display(), "");
        assert!(state.tape().is_empty());
    }

    #[test]
    fn precedence_and_signs() {
        let cases = [
            ("2+3*4", 14.0),
            ("10-4-3", 3.0),
            ("8/4/2", 1.0),
            ("-3*2", -6.0),
            ("2*-3", -6.0),
            ("1.5+.5", 2.0),
            (" 7 / 2 ", 3.5),
        ];
        for (input, expected) in cases {
            assert_eq!(evaluate(input), Ok(expected), "input={input:?}");
        }
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(evaluate("1/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(evaluate("2**3"), Err(ExpressionError::MissingOperand('*')));
        assert_eq!(
            evaluate("1.2.3"),
            Err(ExpressionError::InvalidNumber("1.2.3".into()))
        );
        assert_eq!(
            evaluate("2^3"),
            Err(ExpressionError::UnexpectedCharacter('^'))
        );
        assert_eq!(evaluate("1 2"), Err(ExpressionError::MissingOperator));
    }

    #[test]
    fn numbers_format_without_trailing_zeros() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn results_can_be_chained() {
        let mut state = CalculatorState::default();
        type_and_evaluate(&mut state, "6*7").expect("valid");
        type_and_evaluate(&mut state, "-2").expect("valid");

        assert_eq!(state.display(), "40");
        assert_eq!(state.tape().len(), 2);
    }

    #[test]
    fn clear_and_backspace_edit_the_display() {
        let mut state = CalculatorState::default();
        type_keys(&mut state, "12+3");

        state.press(CalcKey::Backspace).expect("backspace");
        assert_eq!(state.display(), "12+");
        state.press(CalcKey::Clear).expect("clear");
        assert_eq!(state.display(), "");
    }

    #[test]
    fn tape_keeps_only_recent_results() {
        let mut state = CalculatorState::default();
        for n in 0..(MAX_TAPE_ITEMS + 3) {
            state.press(CalcKey::Clear).expect("clear");
            type_and_evaluate(&mut state, &format!("{n}+1")).expect("valid");
        }

        assert_eq!(state.tape().len(), MAX_TAPE_ITEMS);
        assert_eq!(state.tape()[0].expression, "3+1");
    }

    #[test]
    fn keypad_follows_classic_layout() {
        let labels: Vec<_> = KEYPAD.iter().map(|spec| spec.label).collect();
        assert_eq!(
            labels,
            vec!["7", "8", "9", "/", "4", "5", "6", "*", "1", "2", "3", "-", "0", ".", "=", "+"]
        );
        assert_eq!(KEYPAD[3].key, CalcKey::Insert('/'));
    }

    #[test]
    fn keyboard_keys_map_to_keypad() {
        assert_eq!(keyboard_key("7"), Some(CalcKey::Insert('7')));
        assert_eq!(keyboard_key("x"), Some(CalcKey::Insert('*')));
        assert_eq!(keyboard_key("Enter"), Some(CalcKey::Equals));
        assert_eq!(keyboard_key("Escape"), Some(CalcKey::Clear));
        assert_eq!(keyboard_key("Shift"), None);
        assert_eq!(keyboard_key("a"), None);
    }
}
