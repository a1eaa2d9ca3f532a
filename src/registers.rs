use crate::error_handling::*;

pub const CAPACITY: usize = 2;

/// Up to two operands waiting for an operator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterBank {
    slots: [f64; CAPACITY],
    count: usize,
}

impl RegisterBank {
    #[cfg(test)]
    fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count >= CAPACITY
    }

    pub fn filled(&self) -> &[f64] {
        &self.slots[..self.count.min(CAPACITY)]
    }

    pub fn push(&mut self, value: f64) -> Result<()> {
        if self.is_full() {
            return Err(CalcError::too_many_operands(CAPACITY));
        }
        self.slots[self.count] = value;
        self.count += 1;
        Ok(())
    }

    /// Moves the single pending value into the second slot and puts `first`
    /// ahead of it, filling the bank.
    pub fn promote(&mut self, first: f64) {
        if self.count == 1 {
            self.slots[1] = self.slots[0];
            self.slots[0] = first;
            self.count = CAPACITY;
        }
    }

    pub fn pair(&self) -> (f64, f64) {
        (self.slots[0], self.slots[1])
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
