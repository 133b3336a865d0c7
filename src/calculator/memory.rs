//! The single memory register.

use serde::{Deserialize, Serialize};

use super::evaluation::Evaluation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySlot {
    value: f64,
}

impl MemorySlot {
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Add `value` to the register. On overflow the register is unchanged
    /// and [`Evaluation::Undefined`] is returned.
    pub fn add(&mut self, value: f64) -> Evaluation {
        self.accumulate(self.value + value)
    }

    /// Subtract `value` from the register, like [`MemorySlot::add`].
    pub fn subtract(&mut self, value: f64) -> Evaluation {
        self.accumulate(self.value - value)
    }

    fn accumulate(&mut self, value: f64) -> Evaluation {
        if value.is_finite() {
            self.value = value;
            Evaluation::Value(value)
        } else {
            Evaluation::Undefined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut memory = MemorySlot::default();
        memory.add(2.5);
        memory.add(2.5);
        assert_eq!(memory.recall(), 5.0);
    }

    #[test]
    fn test_store_then_clear() {
        let mut memory = MemorySlot::default();
        memory.store(42.0);
        memory.clear();
        assert_eq!(memory.recall(), 0.0);
    }

    #[test]
    fn test_subtract() {
        let mut memory = MemorySlot::default();
        memory.store(10.0);
        assert_eq!(memory.subtract(4.0), Evaluation::Value(6.0));
        assert_eq!(memory.recall(), 6.0);
    }

    #[test]
    fn test_overflow_leaves_register_unchanged() {
        let mut memory = MemorySlot::default();
        memory.store(f64::MAX);

        assert_eq!(memory.add(f64::MAX), Evaluation::Undefined);
        assert_eq!(memory.recall(), f64::MAX);
    }
}
