//! Product validation rules
//!
//! The discount rules treat every missing field as "no discount" and never
//! reject a product. Callers that accept products from outside (such as the
//! HTTP API) validate them here first.
//!
//! # Validation Rules
//!
//! ## All Products
//! - Product name must not be blank
//! - Yearly commission must not be negative
//!
//! ## Pensions
//! - End date must not precede the start date
//! - Monthly deposit and target capital must not be negative
//!
//! ## Mortgages
//! - Duration must be at least one month
//! - Monthly payment, savings amount and interest must not be negative
//!
//! ## Life Insurances
//! - Insured amount must not be negative
//! - Birthdate of the insured customer must not be after the evaluation date
//! - Missing insured amount is reported as a warning (no discount possible)
//!
//! ## Non-life Insurances
//! - Monthly premium must not be negative

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::product::{LifeInsuranceProduct, MortgageProduct, NonLifeInsurance, PensionProduct, Product};

/// Result of product validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the products are valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for products
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use domain_discount::validation::ProductValidator;
/// use domain_discount::{PensionProduct, Product};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let product: Product = PensionProduct::new(" ", start).into();
///
/// let result = ProductValidator::validate(&product, start);
/// assert!(!result.is_valid);
/// ```
pub struct ProductValidator;

impl ProductValidator {
    /// Validates a product according to its type
    ///
    /// # Arguments
    ///
    /// * `product` - The product to validate
    /// * `evaluation_date` - Date the product will be evaluated at
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(product: &Product, evaluation_date: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_common(product, &mut result);

        match product {
            Product::Pension(pension) => Self::validate_pension(pension, &mut result),
            Product::Mortgage(mortgage) => Self::validate_mortgage(mortgage, &mut result),
            Product::LifeInsurance(life) => Self::validate_life_insurance(life, evaluation_date, &mut result),
            Product::NonLifeInsurance(non_life) => Self::validate_non_life(non_life, &mut result),
        }

        result
    }

    /// Validates a list of products, prefixing findings with the product position
    pub fn validate_all(products: &[Product], evaluation_date: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (index, product) in products.iter().enumerate() {
            let single = Self::validate(product, evaluation_date);
            result.merge(ValidationResult {
                is_valid: single.is_valid,
                errors: single.errors.into_iter().map(|e| format!("products[{}]: {}", index, e)).collect(),
                warnings: single.warnings.into_iter().map(|w| format!("products[{}]: {}", index, w)).collect(),
            });
        }

        result
    }

    fn validate_common(product: &Product, result: &mut ValidationResult) {
        if product.product_name().trim().is_empty() {
            result.add_error("Product name is required");
        }

        check_non_negative("Yearly commission", product.yearly_commission(), result);
    }

    fn validate_pension(pension: &PensionProduct, result: &mut ValidationResult) {
        if let Some(end_date) = pension.end_date {
            if end_date < pension.start_date {
                result.add_error(format!(
                    "End date {} is before start date {}",
                    end_date, pension.start_date
                ));
            }
        }

        check_non_negative("Monthly deposit", pension.monthly_deposit, result);
        check_non_negative("Target capital", pension.target_capital, result);
    }

    fn validate_mortgage(mortgage: &MortgageProduct, result: &mut ValidationResult) {
        if mortgage.duration_in_months == Some(0) {
            result.add_error("Duration in months must be at least 1");
        }

        check_non_negative("Monthly payment", mortgage.monthly_payment, result);
        check_non_negative("Monthly savings amount", mortgage.monthly_savings_amount, result);
        check_non_negative("Interest", mortgage.interest, result);
    }

    fn validate_life_insurance(life: &LifeInsuranceProduct, evaluation_date: NaiveDate, result: &mut ValidationResult) {
        match life.insured_amount {
            Some(amount) if amount < Decimal::ZERO => {
                result.add_error(format!("Insured amount cannot be negative: {}", amount));
            }
            Some(_) => {}
            None => result.add_warning("No insured amount; life insurance earns no discount"),
        }

        if let Some(birthdate) = life.birthdate_insured_customer {
            if birthdate > evaluation_date {
                result.add_error("Birthdate of the insured customer cannot be in the future");
            }
        }
    }

    fn validate_non_life(non_life: &NonLifeInsurance, result: &mut ValidationResult) {
        check_non_negative("Monthly premium", non_life.monthly_premium, result);
    }
}

fn check_non_negative(field: &str, value: Option<Decimal>, result: &mut ValidationResult) {
    if let Some(value) = value {
        if value < Decimal::ZERO {
            result.add_error(format!("{} cannot be negative: {}", field, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_pension() {
        let product: Product = PensionProduct::new("pension", date(2000, 1, 1))
            .with_yearly_commission(dec!(100))
            .with_end_date(date(2022, 1, 1))
            .into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_pension_end_before_start() {
        let product: Product = PensionProduct::new("pension", date(2022, 1, 1))
            .with_end_date(date(2000, 1, 1))
            .into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("before start date"));
    }

    #[test]
    fn test_negative_commission() {
        let product: Product = NonLifeInsurance::new("NL", date(2024, 1, 1))
            .with_yearly_commission(dec!(-1))
            .into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_zero_month_mortgage() {
        let product: Product = MortgageProduct::new("ANNUITY", date(2024, 1, 1))
            .with_duration_in_months(0)
            .into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_life_insurance_without_amount_is_warning() {
        let product: Product = LifeInsuranceProduct::new("life", date(2024, 1, 1)).into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_future_birthdate() {
        let product: Product = LifeInsuranceProduct::new("life", date(2024, 1, 1))
            .with_insured_amount(dec!(150000))
            .with_birthdate_insured_customer(date(2030, 1, 1))
            .into();

        let result = ProductValidator::validate(&product, date(2024, 1, 1));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_validate_all_prefixes_position() {
        let products: Vec<Product> = vec![
            NonLifeInsurance::new("NL", date(2024, 1, 1)).into(),
            NonLifeInsurance::new("", date(2024, 1, 1)).into(),
        ];

        let result = ProductValidator::validate_all(&products, date(2024, 1, 1));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["products[1]: Product name is required".to_string()]);
    }
}
