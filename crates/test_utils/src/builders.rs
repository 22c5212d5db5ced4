//! Test Data Builders
//!
//! Provides builder patterns for constructing products with sensible
//! defaults. Durations and ages are expressed relative to
//! [`DateFixtures::evaluation_date`], so tests only state what matters to
//! the rule under test.

use chrono::{Months, NaiveDate};
use domain_discount::{LifeInsuranceProduct, MortgageProduct, NonLifeInsurance, PensionProduct, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

fn years_after(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Builder for pension products
///
/// Defaults: starts on the evaluation date, open-ended, commission 1000,
/// monthly deposit 300, target capital 500,000.
pub struct PensionBuilder {
    product: PensionProduct,
}

impl Default for PensionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PensionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            product: PensionProduct::new("pension", DateFixtures::evaluation_date())
                .with_yearly_commission(dec!(1000))
                .with_monthly_deposit(dec!(300))
                .with_target_capital(dec!(500000)),
        }
    }

    /// Sets the start date, keeping the term open-ended
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.product.start_date = start_date;
        self
    }

    /// Ends the pension the given number of years after its start date
    pub fn with_term_years(mut self, years: u32) -> Self {
        self.product.end_date = Some(years_after(self.product.start_date, years));
        self
    }

    /// Sets an explicit end date
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.product.end_date = Some(end_date);
        self
    }

    /// Removes the end date
    pub fn open_ended(mut self) -> Self {
        self.product.end_date = None;
        self
    }

    pub fn with_monthly_deposit(mut self, deposit: Decimal) -> Self {
        self.product.monthly_deposit = Some(deposit);
        self
    }

    pub fn without_monthly_deposit(mut self) -> Self {
        self.product.monthly_deposit = None;
        self
    }

    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.product.yearly_commission = Some(commission);
        self
    }

    pub fn without_commission(mut self) -> Self {
        self.product.yearly_commission = None;
        self
    }

    /// Builds the pension variant
    pub fn build_pension(self) -> PensionProduct {
        self.product
    }

    /// Builds the product
    pub fn build(self) -> Product {
        self.product.into()
    }
}

/// Builder for mortgage products
///
/// Defaults: a 360 month `ANNUITY` mortgage with commission 500.
pub struct MortgageBuilder {
    product: MortgageProduct,
}

impl Default for MortgageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MortgageBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            product: MortgageProduct::new("ANNUITY", DateFixtures::evaluation_date())
                .with_yearly_commission(dec!(500))
                .with_monthly_payment(dec!(100))
                .with_monthly_savings_amount(dec!(150))
                .with_duration_in_months(360)
                .with_interest(Decimal::ONE),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product.product_name = name.into();
        self
    }

    pub fn with_duration_in_months(mut self, months: u32) -> Self {
        self.product.duration_in_months = Some(months);
        self
    }

    pub fn without_duration(mut self) -> Self {
        self.product.duration_in_months = None;
        self
    }

    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.product.yearly_commission = Some(commission);
        self
    }

    pub fn without_commission(mut self) -> Self {
        self.product.yearly_commission = None;
        self
    }

    /// Builds the mortgage variant
    pub fn build_mortgage(self) -> MortgageProduct {
        self.product
    }

    /// Builds the product
    pub fn build(self) -> Product {
        self.product.into()
    }
}

/// Builder for life insurance products
///
/// Defaults: insured customer aged 35 at the evaluation date, insured
/// amount 150,000, commission 500.
pub struct LifeInsuranceBuilder {
    product: LifeInsuranceProduct,
}

impl Default for LifeInsuranceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeInsuranceBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let today = DateFixtures::evaluation_date();
        Self {
            product: LifeInsuranceProduct::new("lifeInsurance", today)
                .with_yearly_commission(dec!(500))
                .with_insured_amount(dec!(150000))
                .with_birthdate_insured_customer(years_before(today, 35)),
        }
    }

    /// Sets the age of the insured customer at the evaluation date
    pub fn with_age(mut self, years: u32) -> Self {
        self.product.birthdate_insured_customer = Some(years_before(DateFixtures::evaluation_date(), years));
        self
    }

    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.product.birthdate_insured_customer = Some(birthdate);
        self
    }

    pub fn without_birthdate(mut self) -> Self {
        self.product.birthdate_insured_customer = None;
        self
    }

    pub fn with_insured_amount(mut self, amount: Decimal) -> Self {
        self.product.insured_amount = Some(amount);
        self
    }

    pub fn without_insured_amount(mut self) -> Self {
        self.product.insured_amount = None;
        self
    }

    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.product.yearly_commission = Some(commission);
        self
    }

    pub fn without_commission(mut self) -> Self {
        self.product.yearly_commission = None;
        self
    }

    /// Builds the life insurance variant
    pub fn build_life_insurance(self) -> LifeInsuranceProduct {
        self.product
    }

    /// Builds the product
    pub fn build(self) -> Product {
        self.product.into()
    }
}

/// Builder for non-life insurance products
///
/// Defaults: commission 500, monthly premium 130.
pub struct NonLifeInsuranceBuilder {
    product: NonLifeInsurance,
}

impl Default for NonLifeInsuranceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NonLifeInsuranceBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            product: NonLifeInsurance::new("NL", DateFixtures::evaluation_date())
                .with_yearly_commission(dec!(500))
                .with_monthly_premium(dec!(130)),
        }
    }

    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.product.yearly_commission = Some(commission);
        self
    }

    pub fn with_monthly_premium(mut self, premium: Decimal) -> Self {
        self.product.monthly_premium = Some(premium);
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        self.product.into()
    }
}
