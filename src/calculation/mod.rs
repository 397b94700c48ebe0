//! Calculation logic for the contribution calculator.
//!
//! This module contains the social contribution table, the approximate health
//! contribution rules, the per-regime income tax rules, VAT, and the top-level
//! [`calculate`] function combining them.

mod calculator;
mod health_contribution;
mod income_tax;
mod rounding;
mod social_contributions;

pub use calculator::{
    AMOUNT_OUT_OF_RANGE_MESSAGE, MAX_MONTHLY_AMOUNT, NEGATIVE_COSTS_MESSAGE,
    NEGATIVE_INCOME_MESSAGE, NEGATIVE_VAT_RATE_MESSAGE, VAT_RATE_OUT_OF_RANGE_MESSAGE, calculate,
    calculate_vat, validate_input,
};
pub use health_contribution::{
    HealthContributionResult, LINEAR_HEALTH_WARNING, LUMP_SUM_HEALTH_WARNING,
    SCALE_HEALTH_WARNING, UNKNOWN_REGIME_HEALTH_WARNING, calculate_health_contribution,
    lump_sum_health_placeholder,
};
pub use income_tax::{
    DISCOUNT_WARNING, IncomeTaxResult, LINEAR_TAX_WARNING, LUMP_SUM_TAX_WARNING,
    SCALE_FIRST_BRACKET_LIMIT, SCALE_TAX_WARNING, calculate_income_tax, monthly_tax_reduction,
};
pub use rounding::round_money;
pub use social_contributions::{
    MISSING_BASE_WARNING, SICKNESS_CONTRIBUTION_NAME, SocialContributionsResult,
    calculate_social_contributions, mandatory_contribution_rates, sickness_contribution_rate,
};
