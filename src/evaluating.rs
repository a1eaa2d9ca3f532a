use crate::error_handling::*;
use crate::parsing::*;
use crate::registers::*;
use crate::scanning::*;

use tracing::{debug, trace};

/// Renders a value with one fractional digit, rounded at single precision.
/// Infinities render as `+Inf` and `-Inf`.
pub fn format_value(value: f64) -> String {
    let narrowed = value as f32;
    if narrowed.is_infinite() {
        if narrowed.is_sign_positive() { "+Inf".into() } else { "-Inf".into() }
    } else {
        format!("{:.1}", narrowed)
    }
}

/// A two-slot register machine with a running total.
///
/// Each token of a line either applies an operator to the pending operands
/// (with the running total standing in as the first operand when only one is
/// pending) or is pushed as a new operand. Every failure is reported through
/// the returned display string and leaves the calculator usable.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    registers: RegisterBank,
    running_total: Option<f64>,
    display: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running_total(&self) -> Option<f64> {
        self.running_total
    }

    pub fn pending(&self) -> &[f64] {
        self.registers.filled()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Processes every space separated token of `line` in order and returns
    /// the display left by the last one.
    pub fn evaluate(&mut self, line: &str) -> String {
        let mut scanner = LineScanner::new(line);
        while scanner.is_valid() {
            let token = scanner.get_current();
            self.display = match self.process(&token) {
                Ok(value) => format!("result: {}", value),
                Err(e) => {
                    debug!(token = %token.content, error = %e, "token rejected");
                    e.to_string()
                },
            };
            scanner.advance();
        }
        self.display.clone()
    }

    fn process(&mut self, token: &Token) -> Result<String> {
        trace!(token = %token.content, pending = self.registers.count(), "processing token");
        match token.kind {
            TokenKind::operator(operator) => {
                self.check_operable()?;
                Ok(self.apply(operator))
            },
            TokenKind::operand => self.accept_operand(&token.content),
        }
    }

    fn check_operable(&self) -> Result<()> {
        match (self.registers.count(), self.running_total.is_some()) {
            (0, _) => Err(CalcError::insufficient_operands),
            (2, _) | (1, true) => Ok(()),
            _ => Err(CalcError::unrecognized_state),
        }
    }

    fn apply(&mut self, operator: BinaryOperator) -> String {
        if let Some(total) = self.running_total {
            self.registers.promote(total);
        }

        let (left, right) = self.registers.pair();
        let value = operator.call(left, right);
        debug!(%operator, left, right, value, "operation applied");

        self.running_total = Some(value);
        self.registers.clear();
        format_value(value)
    }

    fn accept_operand(&mut self, content: &str) -> Result<String> {
        if self.registers.is_full() {
            return Err(CalcError::too_many_operands(CAPACITY));
        }
        if !has_number_prefix(content) {
            return Err(CalcError::invalid_operand(content.into()));
        }

        // Out of range literals overflow to infinity; `inf` and `NaN` never pass the prefix check.
        let value = content
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| CalcError::unparsable_number(content.into()))?;
        self.registers.push(value)?;
        debug!(value, pending = self.registers.count(), "operand accepted");
        Ok(format_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(calculator: &mut Calculator, lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| calculator.evaluate(line)).collect()
    }

    #[test]
    fn formats_one_fractional_digit() {
        assert_eq!(format_value(3.0), "3.0");
        assert_eq!(format_value(2.26), "2.3");
        assert_eq!(format_value(-0.5), "-0.5");
        assert_eq!(format_value(f64::INFINITY), "+Inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_value(1e300), "+Inf");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn operand_is_echoed() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("7"), "result: 7.0");
        assert_eq!(calculator.evaluate("3."), "result: 3.0");
        assert_eq!(calculator.pending(), &[7.0, 3.0]);
        assert_eq!(calculator.running_total(), None);
    }

    #[test]
    fn two_operands_then_operator() {
        let mut calculator = Calculator::new();
        let outputs = run(&mut calculator, &["5", "3", "+"]);
        assert_eq!(outputs, ["result: 5.0", "result: 3.0", "result: 8.0"]);
        assert_eq!(calculator.running_total(), Some(8.0));
        assert!(calculator.pending().is_empty());
    }

    #[test]
    fn running_total_is_first_operand() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["10", "2", "+"]);
        assert_eq!(calculator.evaluate("5"), "result: 5.0");
        assert_eq!(calculator.evaluate("-"), "result: 7.0");

        calculator.evaluate("2");
        assert_eq!(calculator.evaluate("/"), "result: 3.5");
        assert_eq!(calculator.running_total(), Some(3.5));
    }

    #[test]
    fn two_pending_operands_ignore_running_total() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["1", "1", "+"]);
        assert_eq!(run(&mut calculator, &["9", "4", "-"]).last().unwrap(), "result: 5.0");
    }

    #[test]
    fn operator_without_operands() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("+"), "Error, insufficient operands for operation");
        assert_eq!(calculator.running_total(), None);
        assert!(calculator.pending().is_empty());
    }

    #[test]
    fn operator_with_one_operand_and_no_total() {
        let mut calculator = Calculator::new();
        calculator.evaluate("4");
        assert_eq!(calculator.evaluate("*"), "Unrecognized state");
        assert_eq!(calculator.pending(), &[4.0]);
        assert_eq!(calculator.evaluate("2 *"), "result: 8.0");
    }

    #[test]
    fn operator_with_total_but_nothing_pending() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["4", "4", "*"]);
        assert_eq!(calculator.evaluate("+"), "Error, insufficient operands for operation");
        assert_eq!(calculator.running_total(), Some(16.0));
    }

    #[test]
    fn third_operand_is_rejected() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["1", "2"]);
        assert_eq!(calculator.evaluate("3"), "Error, exactly 2 operands per operation");
        assert_eq!(calculator.pending(), &[1.0, 2.0]);
    }

    #[test]
    fn capacity_is_checked_before_lexing() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["1", "2"]);
        assert_eq!(calculator.evaluate("abc"), "Error, exactly 2 operands per operation");
    }

    #[test]
    fn non_numeric_operand() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("abc"), "Error, token abc is not a valid operand");
        assert_eq!(calculator.evaluate(".5"), "Error, token .5 is not a valid operand");
        assert!(calculator.pending().is_empty());
    }

    #[test]
    fn numeric_prefix_with_trailing_garbage() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("12abc"), "Error parsing 12abc");
        assert!(calculator.pending().is_empty());
    }

    #[test]
    fn out_of_range_operand_is_a_parse_error() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("1e400"), "Error parsing 1e400");

        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(calculator.evaluate(&huge), format!("Error parsing {}", huge));
        assert!(calculator.pending().is_empty());

        assert_eq!(calculator.evaluate("1e3"), "result: 1000.0");
        assert_eq!(calculator.pending(), &[1000.0]);
    }

    #[test]
    fn empty_line_is_an_invalid_operand() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate(""), "Error, token  is not a valid operand");
    }

    #[test]
    fn last_token_decides_display() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("5 3 +"), "result: 8.0");
        assert_eq!(calculator.display(), "result: 8.0");
        assert_eq!(calculator.evaluate("2  *"), "result: 16.0");
    }

    #[test]
    fn error_mid_line_does_not_stop_processing() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.evaluate("x 6 2 /"), "result: 3.0");
    }

    #[test]
    fn division_by_zero_is_infinite() {
        let mut calculator = Calculator::new();
        let outputs = run(&mut calculator, &["4", "0", "/"]);
        assert_eq!(outputs.last().unwrap(), "result: +Inf");
        assert_eq!(calculator.running_total(), Some(f64::INFINITY));
    }

    #[test]
    fn pending_operand_with_total_can_take_a_second_literal() {
        let mut calculator = Calculator::new();
        run(&mut calculator, &["2", "3", "+"]);
        run(&mut calculator, &["10", "4"]);
        assert_eq!(calculator.evaluate("-"), "result: 6.0");
        assert_eq!(calculator.running_total(), Some(6.0));
    }
}
