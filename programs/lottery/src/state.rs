use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::PUBKEY_BYTES;

use crate::constants::{MAX_RETURNED_PLAYERS, MINIMUM_STAKE};
use crate::error::LotteryError;
use crate::randomness::RandomnessSource;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that created the lottery. Only it can pick a winner.
    pub manager: Pubkey,

    /// Lamports staked in the current round. The account itself holds
    /// exactly this much on top of its rent-exempt minimum.
    pub pot: u64,

    /// The round in progress, starting at 1.
    pub round: u64,

    /// One entry per accepted stake, in the order they arrived.
    /// The account grows as needed and never shrinks.
    #[max_len(0)]
    pub players: Vec<Pubkey>,
}

/// A drawn winner, computed before anything is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub ticket: usize,
    pub winner: Pubkey,
    pub prize: u64,
}

impl Lottery {
    /// Account size, discriminator included, when holding `players` entries.
    pub fn space_for(players: usize) -> usize {
        8 + Self::INIT_SPACE + players * PUBKEY_BYTES
    }

    /// Extra rent an entrant pays when the account has to grow from
    /// `current_space` to `space` bytes. Zero when it already fits.
    pub fn entry_rent(rent: &Rent, current_space: usize, space: usize) -> u64 {
        if space <= current_space {
            return 0;
        }
        rent.minimum_balance(space)
            .saturating_sub(rent.minimum_balance(current_space))
    }

    pub fn open(&mut self, manager: Pubkey, bump: u8) {
        self.bump = bump;
        self.manager = manager;
        self.pot = 0;
        self.round = 1;
        self.players.clear();
    }

    /// Checks a stake against the entry rules and returns the pot it would produce.
    pub fn check_stake(&self, stake: u64) -> Result<u64> {
        require!(stake > MINIMUM_STAKE, LotteryError::StakeTooLow);
        self.pot
            .checked_add(stake)
            .ok_or_else(|| error!(LotteryError::PotOverflow))
    }

    /// Records a ticket for `player`. Returns the ticket's position.
    pub fn enter(&mut self, player: Pubkey, stake: u64) -> Result<usize> {
        let pot = self.check_stake(stake)?;

        self.players.push(player);
        self.pot = pot;

        Ok(self.players.len() - 1)
    }

    /// Draws the winner without touching state.
    pub fn draw<R: RandomnessSource>(&self, caller: &Pubkey, rng: &mut R) -> Result<Settlement> {
        require_keys_eq!(*caller, self.manager, LotteryError::NotManager);
        require!(!self.players.is_empty(), LotteryError::NoPlayers);

        let ticket = rng.index(self.players.len())?;
        let winner = *self
            .players
            .get(ticket)
            .ok_or_else(|| error!(LotteryError::RandomIndexOutOfRange))?;

        Ok(Settlement {
            ticket,
            winner,
            prize: self.pot,
        })
    }

    /// Closes the round once the prize has left the account.
    pub fn reset(&mut self) {
        self.players.clear();
        self.pot = 0;
        self.round = self.round.saturating_add(1);
    }

    pub fn player(&self, index: usize) -> Result<Pubkey> {
        self.players
            .get(index)
            .copied()
            .ok_or_else(|| error!(LotteryError::PlayerIndexOutOfRange))
    }

    /// The entrant list, if it fits in instruction return data.
    pub fn returnable_players(&self) -> Result<Vec<Pubkey>> {
        require!(
            self.players.len() <= MAX_RETURNED_PLAYERS,
            LotteryError::TooManyPlayersToReturn
        );
        Ok(self.players.clone())
    }
}
