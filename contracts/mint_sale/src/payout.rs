use soroban_sdk::contracttype;

/// Share of every withdrawal sent to the payout address
pub const PAYOUT_SHARE_PERCENT: i128 = 8;
pub const PERCENT: i128 = 100;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalSplit {
    /// 92%, plus any rounding remainder
    pub admin_share: i128,
    /// 8%, rounded down
    pub payout_share: i128,
}

/// Split a withdrawal between the administrator and the payout address
///
/// Formula: payout = amount × 8 / 100 (floor), admin = amount - payout
///
/// Example:
/// - amount: 4_500_000 (0.45)
/// - payout: 360_000 (0.036)
/// - admin: 4_140_000 (0.414)
pub fn split_withdrawal(amount: i128) -> Option<WithdrawalSplit> {
    let payout_share = amount
        .checked_mul(PAYOUT_SHARE_PERCENT)?
        .checked_div(PERCENT)?;
    let admin_share = amount.checked_sub(payout_share)?;

    Some(WithdrawalSplit {
        admin_share,
        payout_share,
    })
}
