//! Structural validation of product payloads.
//!
//! # Responsibilities
//! - Check name, price and sku against the acceptance rules
//! - Collect every violation, not just the first
//! - Preserve check order for deterministic reporting
//!
//! # Design Decisions
//! - Pure function: ProductPayload → ValidationResult, no side effects
//! - Never panics on malformed-but-parseable input; outcome is the result value
//! - SKU pattern is fixed at compile time and compiled once

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog::product::ProductPayload;

/// Three alphanumeric segments separated by dashes, e.g. `ab1-1a1-1aa`.
const SKU_PATTERN: &str = "^[a-zA-Z0-9]+-[a-zA-Z0-9]+-[a-zA-Z0-9]+$";

fn sku_regex() -> &'static Regex {
    static SKU_REGEX: OnceLock<Regex> = OnceLock::new();
    SKU_REGEX.get_or_init(|| Regex::new(SKU_PATTERN).expect("SKU pattern is valid"))
}

/// A single field-level rule failure, reported to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Payload field that failed the rule.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

/// Outcome of checking a candidate payload.
///
/// Either accepted, or a non-empty ordered list of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// True when the payload passed every check.
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in check order (empty when `ok`).
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the result, yielding the violation list.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn record(&mut self, field: &str, message: &str) {
        self.violations.push(Violation {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

/// Check a candidate payload against the catalog acceptance rules.
///
/// Checks run in a fixed order (name, price, sku) and do not short-circuit.
pub fn validate(payload: &ProductPayload) -> ValidationResult {
    let mut result = ValidationResult { violations: Vec::new() };

    if payload.name.trim().is_empty() {
        result.record("name", "name is required and must not be empty");
    }

    if payload.price <= 0.0 {
        result.record("price", "price is required and must be greater than zero");
    }

    if !sku_regex().is_match(&payload.sku) {
        result.record(
            "sku",
            "sku must be three alphanumeric segments separated by dashes",
        );
    }

    result
}
