use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryInitialized;
use crate::state::Lottery;

/// Accounts required to create a lottery.
/// The signer becomes its manager for the lottery's whole lifetime.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The Lottery state account, one per manager.
    #[account(
        init,
        payer = manager,
        space = Lottery::space_for(0),
        seeds = [LOTTERY_SEED, manager.key().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery account, binds the manager and opens round 1.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
pub fn process_initialize(ctx: Context<InitializeLottery>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.open(manager, ctx.bumps.lottery);

    msg!("Lottery {} managed by {}", lottery.key(), manager);
    emit!(LotteryInitialized {
        lottery: lottery.key(),
        manager,
    });

    Ok(())
}
