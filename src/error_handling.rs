use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Error, exactly {0} operands per operation")]
    too_many_operands(usize),

    #[error("Error, insufficient operands for operation")]
    insufficient_operands,

    #[error("Error, token {0} is not a valid operand")]
    invalid_operand(String),

    #[error("Error parsing {0}")]
    unparsable_number(String),

    #[error("Unrecognized state")]
    unrecognized_state,
}

pub type Result<T> = std::result::Result<T, CalcError>;
