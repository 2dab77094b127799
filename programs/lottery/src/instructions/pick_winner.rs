use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::randomness::ClockEntropy;
use crate::state::Lottery;

/// Accounts required to pick a winner.
///
/// The winner is only known once the draw has run, so the client passes the
/// distinct player accounts of the round as writable remaining accounts.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the lottery manager. Checked against the stored key in the handler.
    #[account(mut)]
    pub caller: Signer<'info>,

    /// The lottery being settled.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Settles the round.
///
/// Steps:
/// 1. Verify the caller is the manager and the round has players.
/// 2. Draw a ticket from clock entropy.
/// 3. Move the whole pot to the ticket's owner.
/// 4. Clear the players and open the next round.
///
/// # Arguments
/// * `ctx` - Context containing `PickWinner` accounts, player accounts as remaining accounts
pub fn process_pick_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.caller.key();
    let lottery = &ctx.accounts.lottery;

    let mut entropy = ClockEntropy::from_clock(&clock, &caller, &lottery.players);
    let settlement = lottery.draw(&caller, &mut entropy)?;

    msg!("Ticket num: {}", lottery.players.len());
    msg!("Winner: ticket {} ({})", settlement.ticket, settlement.winner);

    let vault = lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(vault.data_len());
    let caller_info = ctx.accounts.caller.to_account_info();
    let winner = find_winner_account(&settlement.winner, &caller_info, ctx.remaining_accounts)?;

    pay_prize(&vault, winner, settlement.prize, reserve)?;

    let lottery = &mut ctx.accounts.lottery;
    let round = lottery.round;
    let tickets = lottery.players.len() as u64;
    lottery.reset();

    msg!("Paid {} lamports, round {} closed", settlement.prize, round);
    emit!(WinnerPicked {
        lottery: lottery.key(),
        round,
        winner: settlement.winner,
        ticket: settlement.ticket as u64,
        prize: settlement.prize,
        tickets,
    });

    Ok(())
}

/// Finds the account of `winner` among the remaining accounts, falling back
/// to the caller's own account when the manager holds the winning ticket.
pub fn find_winner_account<'a, 'info>(
    winner: &Pubkey,
    caller: &'a AccountInfo<'info>,
    remaining_accounts: &'a [AccountInfo<'info>],
) -> Result<&'a AccountInfo<'info>> {
    if let Some(account) = remaining_accounts.iter().find(|account| account.key == winner) {
        return Ok(account);
    }
    if caller.key == winner {
        return Ok(caller);
    }
    err!(LotteryError::WinnerAccountMissing)
}

/// Moves `prize` lamports from the lottery account to the winner, keeping at
/// least `reserve` lamports in the lottery account. Both balances are computed
/// before either is written.
pub fn pay_prize(
    vault: &AccountInfo<'_>,
    winner: &AccountInfo<'_>,
    prize: u64,
    reserve: u64,
) -> Result<()> {
    require!(winner.is_writable, LotteryError::WinnerAccountNotWritable);
    require!(!winner.executable, LotteryError::WinnerCannotReceive);

    let vault_balance = vault
        .lamports()
        .checked_sub(prize)
        .filter(|balance| *balance >= reserve)
        .ok_or_else(|| error!(LotteryError::VaultUnderfunded))?;
    let winner_balance = winner
        .lamports()
        .checked_add(prize)
        .ok_or_else(|| error!(LotteryError::PotOverflow))?;

    **vault.try_borrow_mut_lamports()? = vault_balance;
    **winner.try_borrow_mut_lamports()? = winner_balance;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomness::RandomnessSource;
    use crate::test_utils::{assert_lottery_error, FixedIndex};
    use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

    const RESERVE: u64 = 1_000_000;

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
        writable: bool,
        executable: bool,
    }

    impl TestAccount {
        fn new(lamports: u64) -> Self {
            Self {
                key: Pubkey::new_unique(),
                owner: Pubkey::default(),
                lamports,
                data: Vec::new(),
                writable: true,
                executable: false,
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                self.writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                self.executable,
                0,
            )
        }
    }

    #[test]
    fn prize_moves_to_winner() {
        let mut vault = TestAccount::new(RESERVE + 2 * LAMPORTS_PER_SOL);
        let mut winner = TestAccount::new(5);

        {
            let vault = vault.info();
            let winner = winner.info();
            pay_prize(&vault, &winner, 2 * LAMPORTS_PER_SOL, RESERVE).unwrap();
        }

        assert_eq!(vault.lamports, RESERVE);
        assert_eq!(winner.lamports, 5 + 2 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn read_only_winner_is_rejected() {
        let mut vault = TestAccount::new(RESERVE + 100);
        let mut winner = TestAccount::new(0);
        winner.writable = false;

        {
            let vault = vault.info();
            let winner = winner.info();
            assert_lottery_error(
                pay_prize(&vault, &winner, 100, RESERVE),
                LotteryError::WinnerAccountNotWritable,
            );
        }

        assert_eq!(vault.lamports, RESERVE + 100);
        assert_eq!(winner.lamports, 0);
    }

    #[test]
    fn executable_winner_is_rejected() {
        let mut vault = TestAccount::new(RESERVE + 100);
        let mut winner = TestAccount::new(0);
        winner.executable = true;

        {
            let vault = vault.info();
            let winner = winner.info();
            assert_lottery_error(
                pay_prize(&vault, &winner, 100, RESERVE),
                LotteryError::WinnerCannotReceive,
            );
        }

        assert_eq!(vault.lamports, RESERVE + 100);
        assert_eq!(winner.lamports, 0);
    }

    #[test]
    fn prize_cannot_eat_into_reserve() {
        let mut vault = TestAccount::new(RESERVE + 99);
        let mut winner = TestAccount::new(0);

        {
            let vault = vault.info();
            let winner = winner.info();
            assert_lottery_error(
                pay_prize(&vault, &winner, 100, RESERVE),
                LotteryError::VaultUnderfunded,
            );
            assert_lottery_error(
                pay_prize(&vault, &winner, u64::MAX, 0),
                LotteryError::VaultUnderfunded,
            );
        }

        assert_eq!(vault.lamports, RESERVE + 99);
        assert_eq!(winner.lamports, 0);
    }

    #[test]
    fn winner_overflow_leaves_vault_alone() {
        let mut vault = TestAccount::new(RESERVE + 100);
        let mut winner = TestAccount::new(u64::MAX);

        {
            let vault = vault.info();
            let winner = winner.info();
            assert_lottery_error(
                pay_prize(&vault, &winner, 100, RESERVE),
                LotteryError::PotOverflow,
            );
        }

        assert_eq!(vault.lamports, RESERVE + 100);
        assert_eq!(winner.lamports, u64::MAX);
    }

    #[test]
    fn winner_found_in_remaining_accounts() {
        let mut caller = TestAccount::new(0);
        let mut first = TestAccount::new(0);
        let mut second = TestAccount::new(0);
        let wanted = second.key;

        let caller = caller.info();
        let remaining = vec![first.info(), second.info()];

        let found = find_winner_account(&wanted, &caller, &remaining).unwrap();
        assert_eq!(found.key, &wanted);
    }

    #[test]
    fn manager_can_win_without_extra_account() {
        let mut caller = TestAccount::new(0);
        let mut other = TestAccount::new(0);
        let caller_key = caller.key;

        let caller = caller.info();
        let remaining = vec![other.info()];

        let found = find_winner_account(&caller_key, &caller, &remaining).unwrap();
        assert_eq!(found.key, &caller_key);
    }

    #[test]
    fn missing_winner_account_is_rejected() {
        let mut caller = TestAccount::new(0);
        let mut other = TestAccount::new(0);

        let caller = caller.info();
        let remaining = vec![other.info()];

        assert_lottery_error(
            find_winner_account(&Pubkey::new_unique(), &caller, &remaining),
            LotteryError::WinnerAccountMissing,
        );
    }

    #[test]
    fn settlement_pays_the_single_player() {
        let manager = Pubkey::new_unique();
        let stake = 2 * LAMPORTS_PER_SOL;
        let mut lottery = Lottery {
            bump: 255,
            manager,
            pot: 0,
            round: 1,
            players: Vec::new(),
        };

        let mut player = TestAccount::new(10 * LAMPORTS_PER_SOL - stake);
        let mut vault = TestAccount::new(RESERVE + stake);
        lottery.enter(player.key, stake).unwrap();

        let mut entropy = ClockEntropy::new(1_000, 1_700_000_000, &manager, &lottery.players);
        let settlement = lottery.draw(&manager, &mut entropy).unwrap();
        assert_eq!(settlement.winner, player.key);

        {
            let vault = vault.info();
            let mut caller = TestAccount::new(0);
            let caller = caller.info();
            let remaining = vec![player.info()];
            let winner = find_winner_account(&settlement.winner, &caller, &remaining).unwrap();
            pay_prize(&vault, winner, settlement.prize, RESERVE).unwrap();
        }
        lottery.reset();

        assert!(player.lamports - (10 * LAMPORTS_PER_SOL - stake) > 18 * LAMPORTS_PER_SOL / 10);
        assert_eq!(vault.lamports, RESERVE);
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.pot, 0);
    }

    #[test]
    fn exactly_one_player_receives_the_pot() {
        let manager = Pubkey::new_unique();
        let stake = LAMPORTS_PER_SOL / 10;
        let mut lottery = Lottery {
            bump: 255,
            manager,
            pot: 0,
            round: 1,
            players: Vec::new(),
        };

        let mut players: Vec<TestAccount> = (0..4).map(|_| TestAccount::new(0)).collect();
        for player in &players {
            lottery.enter(player.key, stake).unwrap();
        }
        let mut vault = TestAccount::new(RESERVE + lottery.pot);

        let mut rng = FixedIndex(3);
        assert_eq!(rng.index(4).unwrap(), 3);
        let settlement = lottery.draw(&manager, &mut rng).unwrap();

        {
            let vault = vault.info();
            let mut caller = TestAccount::new(0);
            let caller = caller.info();
            let remaining: Vec<AccountInfo> = players.iter_mut().map(TestAccount::info).collect();
            let winner = find_winner_account(&settlement.winner, &caller, &remaining).unwrap();
            pay_prize(&vault, winner, settlement.prize, RESERVE).unwrap();
        }
        lottery.reset();

        let paid: Vec<u64> = players.iter().map(|player| player.lamports).collect();
        assert_eq!(paid, vec![0, 0, 0, 4 * stake]);
        assert_eq!(vault.lamports, RESERVE);
        assert_eq!(lottery.round, 2);
    }
}
