//! Pre-built Test Fixtures
//!
//! Provides ready-to-use products and dates for the discount scenarios the
//! test suites share. All dates are fixed, so results never depend on the
//! day the tests run.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_discount::{DiscountService, PensionProduct, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::{LifeInsuranceBuilder, MortgageBuilder, NonLifeInsuranceBuilder, PensionBuilder};

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// Date every fixture is evaluated at (June 15, 2024)
    pub fn evaluation_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Clock pinned to [`DateFixtures::evaluation_date`]
    pub fn clock() -> FixedClock {
        FixedClock::new(Self::evaluation_date())
    }

    /// Discount service evaluating at [`DateFixtures::evaluation_date`]
    pub fn service() -> DiscountService {
        DiscountService::new(Arc::new(Self::clock()))
    }
}

/// Fixture for commission amounts around the calculator thresholds
pub struct CommissionFixtures;

impl CommissionFixtures {
    /// Lowest commission earning a discount
    pub fn floor() -> Decimal {
        dec!(50)
    }

    /// Just below the floor
    pub fn below_floor() -> Decimal {
        dec!(49.99)
    }

    /// Highest commission counted in full
    pub fn cap() -> Decimal {
        dec!(1000)
    }

    /// Commission well above the cap
    pub fn above_cap() -> Decimal {
        dec!(1500)
    }
}

/// Fixture for products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Pension with commission 1000 running the given number of years
    /// (`None` for open-ended) and the given monthly deposit
    pub fn pension(term_years: Option<u32>, monthly_deposit: Decimal) -> Product {
        let builder = PensionBuilder::new().with_monthly_deposit(monthly_deposit);
        match term_years {
            Some(years) => builder.with_term_years(years).build(),
            None => builder.open_ended().build(),
        }
    }

    /// Pension running from 2000-01-01 to 2022-01-01 with deposit 400 and commission 100
    pub fn long_running_pension() -> Product {
        PensionProduct::new("pension", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .with_yearly_commission(dec!(100))
            .with_monthly_deposit(dec!(400))
            .with_end_date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
            .into()
    }

    /// Mortgage with commission 500
    pub fn mortgage(name: &str, duration_in_months: u32) -> Product {
        MortgageBuilder::new()
            .with_name(name)
            .with_duration_in_months(duration_in_months)
            .build()
    }

    /// Life insurance for a customer of the given age
    pub fn life_insurance(age: u32, commission: Option<Decimal>, insured_amount: Option<Decimal>) -> Product {
        let mut builder = LifeInsuranceBuilder::new().with_age(age);
        builder = match commission {
            Some(commission) => builder.with_commission(commission),
            None => builder.without_commission(),
        };
        builder = match insured_amount {
            Some(amount) => builder.with_insured_amount(amount),
            None => builder.without_insured_amount(),
        };
        builder.build()
    }

    /// Non-life insurance with commission 500
    pub fn non_life_insurance() -> Product {
        NonLifeInsuranceBuilder::new().build()
    }

    /// One product of each type, each eligible for its maximum discount
    pub fn maximum_discount_portfolio() -> Vec<Product> {
        vec![
            Self::pension(Some(21), dec!(300)),
            Self::mortgage("ANNUITY", 360),
            Self::life_insurance(21, Some(dec!(500)), Some(dec!(150000))),
            Self::non_life_insurance(),
        ]
    }
}
