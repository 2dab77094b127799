use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("Cx9QYBUgRk39i8aFrtfBbh6E6cc126MYQAG5PxWFdu9B");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
        process_enter(ctx, stake)
    }

    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
    ) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn player(ctx: Context<ReadLottery>, index: u32) -> Result<Pubkey> {
        process_player(ctx, index)
    }

    pub fn manager(ctx: Context<ReadLottery>) -> Result<Pubkey> {
        process_manager(ctx)
    }
}
