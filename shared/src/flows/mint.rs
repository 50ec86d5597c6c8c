//! Generator mint wizard
//!
//! Four steps: select the time window, review metadata, choose listing
//! options, confirm. Minting starts from the confirm step and returns the
//! wizard to step one when the ledger confirms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{invalid, FlowError};
use crate::models::{GeneratorStats, TimeWindow};
use crate::validation::validate_generator_id;

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("not_positive"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionOptions {
    #[validate(custom(function = "positive", message = "Reserve price must be positive"))]
    pub reserve: Decimal,

    #[validate(custom(function = "positive", message = "Minimum bid increment must be positive"))]
    pub min_increment: Decimal,

    #[validate(range(min = 1, max = 168, message = "Duration must be between 1 and 168 hours"))]
    pub duration_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FixedPriceOptions {
    #[validate(custom(function = "positive", message = "Price must be positive"))]
    pub price: Decimal,
}

/// How a freshly minted certificate is offered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListingChoice {
    Auction(AuctionOptions),
    Fixed(FixedPriceOptions),
}

impl Default for ListingChoice {
    fn default() -> Self {
        ListingChoice::Auction(AuctionOptions {
            reserve: Decimal::from(40),
            min_increment: Decimal::ONE,
            duration_hours: 48,
        })
    }
}

impl ListingChoice {
    pub fn validate(&self) -> Result<(), FlowError> {
        let result = match self {
            ListingChoice::Auction(options) => options.validate(),
            ListingChoice::Fixed(options) => options.validate(),
        };
        result.map_err(|errors| FlowError::from_validation(&errors))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MintStep {
    SelectWindow,
    ReviewMetadata,
    ListingOptions,
    Confirm,
    Minting,
}

impl MintStep {
    /// Step number shown in the progress bar; minting stays on step 4
    pub fn number(&self) -> u8 {
        match self {
            MintStep::SelectWindow => 1,
            MintStep::ReviewMetadata => 2,
            MintStep::ListingOptions => 3,
            MintStep::Confirm | MintStep::Minting => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MintStep::SelectWindow => "select-window",
            MintStep::ReviewMetadata => "review-metadata",
            MintStep::ListingOptions => "listing-options",
            MintStep::Confirm => "confirm",
            MintStep::Minting => "minting",
        }
    }
}

/// Everything the ledger needs to mint one batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub generator_id: String,
    pub window: TimeWindow,
    pub units: u32,
    pub listing: ListingChoice,
    pub auto_list: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MintWizard {
    pub generator_id: String,
    pub mintable_units: u32,
    pub window: Option<TimeWindow>,
    pub listing: ListingChoice,
    pub auto_list: bool,
    step: MintStep,
}

impl MintWizard {
    /// Open the wizard; unavailable while no full unit has accrued
    pub fn open(stats: &GeneratorStats) -> Result<Self, FlowError> {
        validate_generator_id(&stats.generator_id).map_err(|msg| FlowError::InvalidField {
            field: "generatorId",
            message: msg.to_string(),
        })?;
        if !stats.can_mint() {
            return Err(FlowError::NothingToMint);
        }

        Ok(Self {
            generator_id: stats.generator_id.clone(),
            mintable_units: stats.mintable_units,
            window: None,
            listing: ListingChoice::default(),
            auto_list: true,
            step: MintStep::SelectWindow,
        })
    }

    pub fn step(&self) -> MintStep {
        self.step
    }

    pub fn select_window(&mut self, window: TimeWindow) -> Result<(), FlowError> {
        if self.step != MintStep::SelectWindow {
            return Err(invalid("select a window", self.step.as_str()));
        }
        if window.end <= window.start {
            return Err(FlowError::InvalidField {
                field: "window",
                message: "Window end must be after its start".to_string(),
            });
        }
        self.window = Some(window);
        Ok(())
    }

    pub fn set_listing(&mut self, listing: ListingChoice, auto_list: bool) -> Result<(), FlowError> {
        if self.step != MintStep::ListingOptions {
            return Err(invalid("change listing options", self.step.as_str()));
        }
        listing.validate()?;
        self.listing = listing;
        self.auto_list = auto_list;
        Ok(())
    }

    /// Advance one step; minting is started with [`MintWizard::mint`]
    pub fn next(&mut self) -> Result<MintStep, FlowError> {
        self.step = match self.step {
            MintStep::SelectWindow if self.window.is_none() => {
                return Err(FlowError::InvalidField {
                    field: "window",
                    message: "Select a time window".to_string(),
                })
            }
            MintStep::SelectWindow => MintStep::ReviewMetadata,
            MintStep::ReviewMetadata => MintStep::ListingOptions,
            MintStep::ListingOptions => {
                self.listing.validate()?;
                MintStep::Confirm
            }
            step @ (MintStep::Confirm | MintStep::Minting) => {
                return Err(invalid("advance", step.as_str()))
            }
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<MintStep, FlowError> {
        self.step = match self.step {
            MintStep::ReviewMetadata => MintStep::SelectWindow,
            MintStep::ListingOptions => MintStep::ReviewMetadata,
            MintStep::Confirm => MintStep::ListingOptions,
            step @ (MintStep::SelectWindow | MintStep::Minting) => {
                return Err(invalid("go back", step.as_str()))
            }
        };
        Ok(self.step)
    }

    /// Start minting one unit from the confirm step
    pub fn mint(&mut self) -> Result<MintRequest, FlowError> {
        if self.step != MintStep::Confirm {
            return Err(invalid("mint", self.step.as_str()));
        }
        if self.mintable_units == 0 {
            return Err(FlowError::NothingToMint);
        }
        let window = self.window.ok_or_else(|| invalid("mint", "no window is selected"))?;

        self.step = MintStep::Minting;
        Ok(MintRequest {
            generator_id: self.generator_id.clone(),
            window,
            units: 1,
            listing: self.listing.clone(),
            auto_list: self.auto_list,
        })
    }

    /// Ledger confirmed the mint; reset for the next batch
    pub fn complete(&mut self) -> Result<(), FlowError> {
        if self.step != MintStep::Minting {
            return Err(invalid("complete a mint", self.step.as_str()));
        }
        self.mintable_units -= 1;
        self.window = None;
        self.step = MintStep::SelectWindow;
        Ok(())
    }
}
