use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::error::LotteryError;

/// Picks the winning ticket.
pub trait RandomnessSource {
    /// Returns an index in `[0, upper)`.
    fn index(&mut self, upper: usize) -> Result<usize>;
}

/// Winner selection from the entropy the runtime exposes to an instruction:
/// slot, cluster time, the caller and the current entrant list, hashed together.
///
/// This is NOT secure randomness. The slot leader can influence the slot and
/// timestamp, and anyone can recompute the draw before submitting. The lottery
/// accepts that limitation instead of depending on an oracle.
pub struct ClockEntropy {
    seed: [u8; 32],
}

impl ClockEntropy {
    pub fn new(slot: u64, unix_timestamp: i64, caller: &Pubkey, players: &[Pubkey]) -> Self {
        let slot = slot.to_le_bytes();
        let timestamp = unix_timestamp.to_le_bytes();

        let mut parts: Vec<&[u8]> = Vec::with_capacity(players.len() + 3);
        parts.push(&slot);
        parts.push(&timestamp);
        parts.push(caller.as_ref());
        parts.extend(players.iter().map(|player| player.as_ref()));

        Self {
            seed: hashv(&parts).to_bytes(),
        }
    }

    pub fn from_clock(clock: &Clock, caller: &Pubkey, players: &[Pubkey]) -> Self {
        Self::new(clock.slot, clock.unix_timestamp, caller, players)
    }

    #[cfg(test)]
    fn seed(&self) -> &[u8; 32] {
        &self.seed
    }
}

impl RandomnessSource for ClockEntropy {
    fn index(&mut self, upper: usize) -> Result<usize> {
        require!(upper > 0, LotteryError::NoPlayers);

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.seed[..8]);
        let value = u64::from_le_bytes(word);

        // Ratchet so a second draw from the same source is not a repeat.
        self.seed = hashv(&[&self.seed[..]]).to_bytes();

        Ok((value % upper as u64) as usize)
    }
}
