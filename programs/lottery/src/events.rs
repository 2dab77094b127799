use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub manager: Pubkey,
}

#[event]
pub struct PlayerEntered {
    pub lottery: Pubkey,
    pub player: Pubkey,
    pub stake: u64,
    pub ticket: u64,
    pub pot: u64,
}

#[event]
pub struct WinnerPicked {
    pub lottery: Pubkey,
    pub round: u64,
    pub winner: Pubkey,
    pub ticket: u64,
    pub prize: u64,
    pub tickets: u64,
}
