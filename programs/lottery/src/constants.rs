use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed prefix of the lottery PDA. The manager's key follows it.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Stakes must be strictly above this amount (0.01 SOL).
pub const MINIMUM_STAKE: u64 = LAMPORTS_PER_SOL / 100;

/// Largest entrant list `get_players` can hand back: a borsh `Vec<Pubkey>`
/// has to fit the runtime's 1024 byte return data buffer.
pub const MAX_RETURNED_PLAYERS: usize = 31;
