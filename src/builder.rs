use crate::utils::MAX_DIGITS;
use crate::{BlockCounter, RangeEngine};

pub struct RangeEngineBuilder<C: BlockCounter> {
    counter: C,
    max_digits: Option<u32>,
}

impl<C: BlockCounter> RangeEngineBuilder<C> {
    pub fn new(counter: C) -> Self {
        Self {
            counter,
            max_digits: None,
        }
    }
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = Some(max_digits);
        self
    }
    pub fn build(self) -> RangeEngine<C> {
        match self.max_digits {
            Some(d) => RangeEngine::with_max_digits(self.counter, d),
            None => RangeEngine::with_max_digits(self.counter, MAX_DIGITS),
        }
    }
}
