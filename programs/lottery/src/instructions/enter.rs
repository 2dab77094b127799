use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::PlayerEntered;
use crate::state::Lottery;

/// Accounts required to enter the lottery.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The account staking lamports.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery being entered.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the stake transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller with `stake` lamports.
///
/// Steps performed:
/// 1. Check the stake is above the minimum and fits the pot.
/// 2. Transfer the stake, plus rent for one more key if the account has to
///    grow, from the player to the lottery account.
/// 3. Grow the account when needed and record the ticket.
///
/// The account never shrinks, so later rounds reuse the space.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `stake` - Lamports to stake
pub fn process_enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
    ctx.accounts.lottery.check_stake(stake)?;

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let space = Lottery::space_for(ctx.accounts.lottery.players.len() + 1);
    let current_space = lottery_info.data_len();
    let top_up = Lottery::entry_rent(&Rent::get()?, current_space, space);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: lottery_info.clone(),
            },
        ),
        stake
            .checked_add(top_up)
            .ok_or(ProgramError::ArithmeticOverflow)?,
    )?;

    if space > current_space {
        lottery_info.realloc(space, false)?;
    }

    let player = ctx.accounts.player.key();
    let lottery = &mut ctx.accounts.lottery;
    let ticket = lottery.enter(player, stake)?;

    msg!("Ticket {} for {} ({} lamports)", ticket, player, stake);
    emit!(PlayerEntered {
        lottery: lottery.key(),
        player,
        stake,
        ticket: ticket as u64,
        pot: lottery.pot,
    });

    Ok(())
}
