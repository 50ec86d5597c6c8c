//! Certificate redemption (retirement) dialog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{invalid, FlowError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Details recorded on the retirement receipt
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionForm {
    #[validate(
        custom(function = "not_blank", message = "Company name is required"),
        length(max = 200, message = "Company name is too long")
    )]
    pub company: String,

    #[validate(
        custom(function = "not_blank", message = "Purpose of redemption is required"),
        length(max = 500, message = "Purpose is too long")
    )]
    pub purpose: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Scope 2 note is too long"))]
    pub scope2_note: String,
}

/// Proof of retirement returned once the ledger confirms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionReceipt {
    pub receipt_id: String,
    pub certificate_id: String,
    pub certificate_name: String,
    pub company: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope2_note: String,
    pub redeemed_at: DateTime<Utc>,
    pub signature: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RedemptionStep {
    Form,
    Processing,
    Complete,
}

impl RedemptionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedemptionStep::Form => "form",
            RedemptionStep::Processing => "processing",
            RedemptionStep::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionFlow {
    pub certificate_id: String,
    pub form: RedemptionForm,
    step: RedemptionStep,
    receipt: Option<RedemptionReceipt>,
}

impl RedemptionFlow {
    pub fn open(certificate_id: impl Into<String>) -> Self {
        Self {
            certificate_id: certificate_id.into(),
            form: RedemptionForm::default(),
            step: RedemptionStep::Form,
            receipt: None,
        }
    }

    pub fn step(&self) -> RedemptionStep {
        self.step
    }

    pub fn receipt(&self) -> Option<&RedemptionReceipt> {
        self.receipt.as_ref()
    }

    /// Validate the form and start retiring the certificate
    pub fn submit(&mut self, form: RedemptionForm) -> Result<(), FlowError> {
        if self.step != RedemptionStep::Form {
            return Err(invalid("redeem", self.step.as_str()));
        }
        form.validate()
            .map_err(|errors| FlowError::from_validation(&errors))?;

        self.form = form;
        self.step = RedemptionStep::Processing;
        Ok(())
    }

    pub fn complete(&mut self, receipt: RedemptionReceipt) -> Result<(), FlowError> {
        if self.step != RedemptionStep::Processing {
            return Err(invalid("complete a redemption", self.step.as_str()));
        }
        self.receipt = Some(receipt);
        self.step = RedemptionStep::Complete;
        Ok(())
    }

    /// Close and clear the form. Refused while processing.
    pub fn close(&mut self) -> Result<(), FlowError> {
        if self.step == RedemptionStep::Processing {
            return Err(invalid("close", self.step.as_str()));
        }
        self.form = RedemptionForm::default();
        self.receipt = None;
        self.step = RedemptionStep::Form;
        Ok(())
    }
}
