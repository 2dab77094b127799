use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Stake must be greater than 0.01 SOL")]
    StakeTooLow,
    #[msg("Only the manager can pick a winner")]
    NotManager,
    #[msg("The lottery has no players")]
    NoPlayers,
    #[msg("Prize pot overflow")]
    PotOverflow,
    #[msg("Randomness source returned an index outside the ticket range")]
    RandomIndexOutOfRange,
    #[msg("Winner account was not passed to the instruction")]
    WinnerAccountMissing,
    #[msg("Winner account is not writable")]
    WinnerAccountNotWritable,
    #[msg("Winner account cannot receive lamports")]
    WinnerCannotReceive,
    #[msg("Lottery account holds less than the recorded pot")]
    VaultUnderfunded,
    #[msg("Too many players to return, query them by index")]
    TooManyPlayersToReturn,
    #[msg("Player index out of range")]
    PlayerIndexOutOfRange,
}
