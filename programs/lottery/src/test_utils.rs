use anchor_lang::prelude::*;

use crate::error::LotteryError;

pub fn assert_lottery_error<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
    let err = result.expect_err("expected a lottery error");
    assert_eq!(ProgramError::from(err), ProgramError::Custom(expected.into()));
}

/// Always hands out the same ticket.
pub struct FixedIndex(pub usize);

impl crate::randomness::RandomnessSource for FixedIndex {
    fn index(&mut self, _upper: usize) -> Result<usize> {
        Ok(self.0)
    }
}
