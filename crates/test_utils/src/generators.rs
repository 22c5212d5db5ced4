//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random products that are
//! well-formed (the kind the product validator accepts).

use chrono::{Duration, NaiveDate};
use domain_discount::{LifeInsuranceProduct, MortgageProduct, NonLifeInsurance, PensionProduct, Product};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating non-negative amounts with two decimal places
pub fn amount_strategy(max_units: i64) -> impl Strategy<Value = Decimal> {
    (0i64..max_units * 100).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating commissions, sometimes absent
pub fn commission_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::weighted(0.9, amount_strategy(2_000))
}

/// Strategy for generating dates between 1940 and 2060
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..(120 * 365)).prop_map(|days| {
        NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating product names, including the eligible mortgage name
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ANNUITY".to_string()),
        Just("SAVINGS".to_string()),
        Just("LINEAR".to_string()),
        "[a-z]{3,12}",
    ]
}

/// Strategy for generating pensions
pub fn pension_strategy() -> impl Strategy<Value = PensionProduct> {
    (
        product_name_strategy(),
        date_strategy(),
        commission_strategy(),
        prop::option::of(amount_strategy(1_000)),
        prop::option::of(0i64..(40 * 365)),
        prop::option::of(amount_strategy(1_000_000)),
    )
        .prop_map(|(name, start_date, commission, deposit, term_days, target)| PensionProduct {
            product_name: name,
            start_date,
            yearly_commission: commission,
            monthly_deposit: deposit,
            end_date: term_days.map(|days| start_date + Duration::days(days)),
            target_capital: target,
        })
}

/// Strategy for generating mortgages
pub fn mortgage_strategy() -> impl Strategy<Value = MortgageProduct> {
    (
        product_name_strategy(),
        date_strategy(),
        commission_strategy(),
        prop::option::of(prop_oneof![Just(360u32), 1u32..480u32]),
        prop::option::of(amount_strategy(5_000)),
    )
        .prop_map(|(name, start_date, commission, months, payment)| MortgageProduct {
            product_name: name,
            start_date,
            yearly_commission: commission,
            monthly_payment: payment,
            monthly_savings_amount: None,
            duration_in_months: months,
            interest: None,
        })
}

/// Strategy for generating life insurances
pub fn life_insurance_strategy() -> impl Strategy<Value = LifeInsuranceProduct> {
    (
        product_name_strategy(),
        date_strategy(),
        commission_strategy(),
        prop::option::of(amount_strategy(500_000)),
        prop::option::of(date_strategy()),
    )
        .prop_map(|(name, start_date, commission, insured, birthdate)| LifeInsuranceProduct {
            product_name: name,
            start_date,
            yearly_commission: commission,
            insured_amount: insured,
            birthdate_insured_customer: birthdate,
        })
}

/// Strategy for generating non-life insurances
pub fn non_life_strategy() -> impl Strategy<Value = NonLifeInsurance> {
    (
        product_name_strategy(),
        date_strategy(),
        commission_strategy(),
        prop::option::of(amount_strategy(1_000)),
    )
        .prop_map(|(name, start_date, commission, premium)| NonLifeInsurance {
            product_name: name,
            start_date,
            yearly_commission: commission,
            monthly_premium: premium,
        })
}

/// Strategy for generating products of any type
pub fn product_strategy() -> impl Strategy<Value = Product> {
    prop_oneof![
        pension_strategy().prop_map(Product::from),
        mortgage_strategy().prop_map(Product::from),
        life_insurance_strategy().prop_map(Product::from),
        non_life_strategy().prop_map(Product::from),
    ]
}

/// Strategy for generating product lists of up to `max_len` products
pub fn products_strategy(max_len: usize) -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..=max_len)
}
