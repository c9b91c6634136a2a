pub mod addrs;

/// The only chain these contracts are deployed on.
pub const SEPOLIA: u64 = 11_155_111;

/// All contract amounts use 18 decimals, like the native token.
pub const TOKEN_DECIMALS: u8 = 18;
