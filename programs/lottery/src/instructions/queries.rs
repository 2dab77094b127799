use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Read-only view of a lottery, open to any caller.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Returns the entrants of the current round in entry order.
/// Rounds too large for return data have to be read with `process_player`,
/// or by fetching the lottery account itself, which has no size limit.
pub fn process_get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
    ctx.accounts.lottery.returnable_players()
}

pub fn process_player(ctx: Context<ReadLottery>, index: u32) -> Result<Pubkey> {
    ctx.accounts.lottery.player(index as usize)
}

pub fn process_manager(ctx: Context<ReadLottery>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery.manager)
}
