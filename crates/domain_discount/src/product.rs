//! Product model
//!
//! A customer's holdings are a list of [`Product`] values. `Product` is a
//! closed enum over the four product variants; the product type is derived
//! from the variant itself, so a pension always reports
//! [`ProductType::Pension`] and type-specific fields are only reachable
//! through the matching variant.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of financial product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Pension,
    Mortgage,
    LifeInsurance,
    NonLifeInsurance,
}

impl ProductType {
    /// Returns the wire code of this product type
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Pension => "PENSION",
            ProductType::Mortgage => "MORTGAGE",
            ProductType::LifeInsurance => "LIFE_INSURANCE",
            ProductType::NonLifeInsurance => "NON_LIFE_INSURANCE",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Pension savings product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionProduct {
    pub product_name: String,
    pub start_date: NaiveDate,
    pub yearly_commission: Option<Decimal>,
    pub monthly_deposit: Option<Decimal>,
    /// Absent for pensions without a fixed end date
    pub end_date: Option<NaiveDate>,
    pub target_capital: Option<Decimal>,
}

impl PensionProduct {
    pub fn new(product_name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            product_name: product_name.into(),
            start_date,
            yearly_commission: None,
            monthly_deposit: None,
            end_date: None,
            target_capital: None,
        }
    }

    pub fn with_yearly_commission(mut self, commission: Decimal) -> Self {
        self.yearly_commission = Some(commission);
        self
    }

    pub fn with_monthly_deposit(mut self, deposit: Decimal) -> Self {
        self.monthly_deposit = Some(deposit);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_target_capital(mut self, target_capital: Decimal) -> Self {
        self.target_capital = Some(target_capital);
        self
    }
}

/// Mortgage product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageProduct {
    /// Mortgage form, e.g. `ANNUITY` or `SAVINGS`
    pub product_name: String,
    pub start_date: NaiveDate,
    pub yearly_commission: Option<Decimal>,
    pub monthly_payment: Option<Decimal>,
    pub monthly_savings_amount: Option<Decimal>,
    pub duration_in_months: Option<u32>,
    pub interest: Option<Decimal>,
}

impl MortgageProduct {
    pub fn new(product_name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            product_name: product_name.into(),
            start_date,
            yearly_commission: None,
            monthly_payment: None,
            monthly_savings_amount: None,
            duration_in_months: None,
            interest: None,
        }
    }

    pub fn with_yearly_commission(mut self, commission: Decimal) -> Self {
        self.yearly_commission = Some(commission);
        self
    }

    pub fn with_monthly_payment(mut self, payment: Decimal) -> Self {
        self.monthly_payment = Some(payment);
        self
    }

    pub fn with_monthly_savings_amount(mut self, amount: Decimal) -> Self {
        self.monthly_savings_amount = Some(amount);
        self
    }

    pub fn with_duration_in_months(mut self, months: u32) -> Self {
        self.duration_in_months = Some(months);
        self
    }

    pub fn with_interest(mut self, interest: Decimal) -> Self {
        self.interest = Some(interest);
        self
    }
}

/// Life insurance product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeInsuranceProduct {
    pub product_name: String,
    pub start_date: NaiveDate,
    pub yearly_commission: Option<Decimal>,
    pub insured_amount: Option<Decimal>,
    pub birthdate_insured_customer: Option<NaiveDate>,
}

impl LifeInsuranceProduct {
    pub fn new(product_name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            product_name: product_name.into(),
            start_date,
            yearly_commission: None,
            insured_amount: None,
            birthdate_insured_customer: None,
        }
    }

    pub fn with_yearly_commission(mut self, commission: Decimal) -> Self {
        self.yearly_commission = Some(commission);
        self
    }

    pub fn with_insured_amount(mut self, amount: Decimal) -> Self {
        self.insured_amount = Some(amount);
        self
    }

    pub fn with_birthdate_insured_customer(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate_insured_customer = Some(birthdate);
        self
    }
}

/// Non-life (property and casualty) insurance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonLifeInsurance {
    pub product_name: String,
    pub start_date: NaiveDate,
    pub yearly_commission: Option<Decimal>,
    pub monthly_premium: Option<Decimal>,
}

impl NonLifeInsurance {
    pub fn new(product_name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            product_name: product_name.into(),
            start_date,
            yearly_commission: None,
            monthly_premium: None,
        }
    }

    pub fn with_yearly_commission(mut self, commission: Decimal) -> Self {
        self.yearly_commission = Some(commission);
        self
    }

    pub fn with_monthly_premium(mut self, premium: Decimal) -> Self {
        self.monthly_premium = Some(premium);
        self
    }
}

/// A product held by a customer
///
/// Serialized with the product type as tag:
///
/// ```json
/// { "product_type": "MORTGAGE", "product_name": "ANNUITY", "start_date": "2024-01-01",
///   "yearly_commission": "500", "duration_in_months": 360 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    Pension(PensionProduct),
    Mortgage(MortgageProduct),
    LifeInsurance(LifeInsuranceProduct),
    NonLifeInsurance(NonLifeInsurance),
}

impl Product {
    /// Returns the product type, as determined by the variant
    pub fn product_type(&self) -> ProductType {
        match self {
            Product::Pension(_) => ProductType::Pension,
            Product::Mortgage(_) => ProductType::Mortgage,
            Product::LifeInsurance(_) => ProductType::LifeInsurance,
            Product::NonLifeInsurance(_) => ProductType::NonLifeInsurance,
        }
    }

    pub fn product_name(&self) -> &str {
        match self {
            Product::Pension(p) => &p.product_name,
            Product::Mortgage(p) => &p.product_name,
            Product::LifeInsurance(p) => &p.product_name,
            Product::NonLifeInsurance(p) => &p.product_name,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            Product::Pension(p) => p.start_date,
            Product::Mortgage(p) => p.start_date,
            Product::LifeInsurance(p) => p.start_date,
            Product::NonLifeInsurance(p) => p.start_date,
        }
    }

    pub fn yearly_commission(&self) -> Option<Decimal> {
        match self {
            Product::Pension(p) => p.yearly_commission,
            Product::Mortgage(p) => p.yearly_commission,
            Product::LifeInsurance(p) => p.yearly_commission,
            Product::NonLifeInsurance(p) => p.yearly_commission,
        }
    }

    /// Narrows to a pension, if this is one
    pub fn as_pension(&self) -> Option<&PensionProduct> {
        match self {
            Product::Pension(p) => Some(p),
            _ => None,
        }
    }

    /// Narrows to a mortgage, if this is one
    pub fn as_mortgage(&self) -> Option<&MortgageProduct> {
        match self {
            Product::Mortgage(p) => Some(p),
            _ => None,
        }
    }

    /// Narrows to a life insurance, if this is one
    pub fn as_life_insurance(&self) -> Option<&LifeInsuranceProduct> {
        match self {
            Product::LifeInsurance(p) => Some(p),
            _ => None,
        }
    }

    /// Narrows to a non-life insurance, if this is one
    pub fn as_non_life_insurance(&self) -> Option<&NonLifeInsurance> {
        match self {
            Product::NonLifeInsurance(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PensionProduct> for Product {
    fn from(product: PensionProduct) -> Self {
        Product::Pension(product)
    }
}

impl From<MortgageProduct> for Product {
    fn from(product: MortgageProduct) -> Self {
        Product::Mortgage(product)
    }
}

impl From<LifeInsuranceProduct> for Product {
    fn from(product: LifeInsuranceProduct) -> Self {
        Product::LifeInsurance(product)
    }
}

impl From<NonLifeInsurance> for Product {
    fn from(product: NonLifeInsurance) -> Self {
        Product::NonLifeInsurance(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_product_type_follows_variant() {
        let pension: Product = PensionProduct::new("pension", start()).into();
        let mortgage: Product = MortgageProduct::new("ANNUITY", start()).into();
        let life: Product = LifeInsuranceProduct::new("life", start()).into();
        let non_life: Product = NonLifeInsurance::new("NL", start()).into();

        assert_eq!(pension.product_type(), ProductType::Pension);
        assert_eq!(mortgage.product_type(), ProductType::Mortgage);
        assert_eq!(life.product_type(), ProductType::LifeInsurance);
        assert_eq!(non_life.product_type(), ProductType::NonLifeInsurance);
    }

    #[test]
    fn test_common_accessors() {
        let product: Product = MortgageProduct::new("ANNUITY", start())
            .with_yearly_commission(dec!(500))
            .into();

        assert_eq!(product.product_name(), "ANNUITY");
        assert_eq!(product.start_date(), start());
        assert_eq!(product.yearly_commission(), Some(dec!(500)));
    }

    #[test]
    fn test_narrowing_only_matches_own_variant() {
        let product: Product = PensionProduct::new("pension", start()).into();

        assert!(product.as_pension().is_some());
        assert!(product.as_mortgage().is_none());
        assert!(product.as_life_insurance().is_none());
        assert!(product.as_non_life_insurance().is_none());
    }

    #[test]
    fn test_deserialize_tagged_product() {
        let json = r#"{
            "product_type": "MORTGAGE",
            "product_name": "ANNUITY",
            "start_date": "2024-01-01",
            "yearly_commission": 500,
            "duration_in_months": 360
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        let mortgage = product.as_mortgage().unwrap();

        assert_eq!(mortgage.duration_in_months, Some(360));
        assert_eq!(mortgage.yearly_commission, Some(dec!(500)));
        assert_eq!(mortgage.interest, None);
    }

    #[test]
    fn test_serialized_tag_matches_product_type_code() {
        let product: Product = NonLifeInsurance::new("NL", start()).into();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["product_type"], product.product_type().code());
    }
}
