pub static ERROR_NOT_OWNER: &[u8] = b"Caller is not the owner";
pub static ERROR_NOT_PENDING_OWNER: &[u8] = b"Caller is not the pending owner";
pub static ERROR_NOT_OPERATOR: &[u8] = b"Caller is not the operator";

pub static ERROR_PAUSED: &[u8] = b"Contract is paused";
pub static ERROR_NOT_PAUSED: &[u8] = b"Contract is not paused";
pub static ERROR_NORMAL_UNSTAKE_DISABLED: &[u8] = b"Normal unstake is not allowed";
pub static ERROR_INSTANT_UNSTAKE_DISABLED: &[u8] = b"Instant unstake is not allowed";
pub static ERROR_CLAIM_DISABLED: &[u8] = b"Claim is not allowed";

pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount should be greater than 0";
pub static ERROR_STAKING_CAP_EXCEEDED: &[u8] = b"Exceed staking cap";
pub static ERROR_CLAIM_PREVIOUS_UNSTAKE: &[u8] = b"Claim the previous unstake first";
pub static ERROR_BAD_PAYMENT_TOKEN: &[u8] = b"Bad payment token";
pub static ERROR_INVALID_SLOT: &[u8] = b"Invalid slot";
pub static ERROR_FEE_TOO_HIGH: &[u8] = b"Instant unstake fee exceeds 100%";
pub static ERROR_LS_TOKEN_ALREADY_SET: &[u8] = b"LS token already set";
pub static ERROR_LS_TOKEN_NOT_SET: &[u8] = b"LS token not set";
pub static ERROR_INVALID_LS_TOKEN: &[u8] = b"Invalid LS token identifier";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity";
pub static ERROR_INSUFFICIENT_INSTANT_POOL: &[u8] = b"Insufficient instant pool";
pub static ERROR_INSUFFICIENT_CLAIMABLE: &[u8] = b"Insufficient claimable amount";

pub static ERROR_NO_PENDING_UNSTAKE: &[u8] = b"No pending unstake";
pub static ERROR_CLAIMABLE_TIME_NOT_REACHED: &[u8] = b"Claimable time not reached";
