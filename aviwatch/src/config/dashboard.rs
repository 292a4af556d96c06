//! Texts and filter widgets shown above the map.
//!
//! Only the feature selector is wired to the map. The airport, year, animal and month widgets are
//! rendered with their configured values but do not filter anything yet.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
	/// Page heading.
	pub title: String,
	/// Line below the heading.
	pub subtitle: String,
	/// Airport radio buttons.
	pub airports: ChoiceConfig,
	/// Year dropdown.
	pub years: ChoiceConfig,
	/// Free text input for the animal.
	pub animal: TextConfig,
	/// Month slider.
	pub months: SliderConfig,
	/// Multi-select controlling which features are visible on the map.
	pub selector: SelectorConfig,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			title: "Monitoramento de pássaros".to_string(),
			subtitle: "Sistema de detecção de animais silvestres em regiões de perigo para os aeroportos".to_string(),
			airports: ChoiceConfig {
				label: "Aeroportos".to_string(),
				options: vec!["New York City".into(), "Montréal".into(), "San Francisco".into()],
				selected: Some("Montréal".to_string()),
			},
			years: ChoiceConfig {
				label: "Anos".to_string(),
				options: (1952..=2007).step_by(5).map(|year: i32| year.to_string()).collect(),
				selected: Some("1962".to_string()),
			},
			animal: TextConfig {
				label: "Escolha o animal:".to_string(),
				value: "Pássaro".to_string(),
			},
			months: SliderConfig {
				label: "Meses".to_string(),
				min: 1,
				max: 12,
				step: 1,
				value: 6,
			},
			selector: SelectorConfig::default(),
		}
	}
}

impl DashboardConfig {
	pub fn verify(&self) -> Result<()> {
		self.airports.verify()?;
		self.years.verify()?;
		self.months.verify()
	}
}

/// A labelled single choice out of fixed options.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChoiceConfig {
	pub label: String,
	#[serde(default)]
	pub options: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub selected: Option<String>,
}

impl ChoiceConfig {
	fn verify(&self) -> Result<()> {
		if let Some(selected) = &self.selected {
			ensure!(
				self.options.contains(selected),
				"'{selected}' is not one of the options of '{}'",
				self.label
			);
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
	pub label: String,
	#[serde(default)]
	pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
	pub label: String,
	pub min: i64,
	pub max: i64,
	#[serde(default = "default_step")]
	pub step: i64,
	pub value: i64,
}

fn default_step() -> i64 {
	1
}

impl SliderConfig {
	fn verify(&self) -> Result<()> {
		ensure!(self.min <= self.max, "slider '{}': min {} exceeds max {}", self.label, self.min, self.max);
		ensure!(self.step > 0, "slider '{}': step must be positive", self.label);
		ensure!(
			(self.min..=self.max).contains(&self.value),
			"slider '{}': value {} is outside [{}, {}]",
			self.label,
			self.value,
			self.min,
			self.max
		);
		Ok(())
	}
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
	pub label: String,
}

impl Default for SelectorConfig {
	fn default() -> Self {
		Self {
			label: "Marcadores visíveis".to_string(),
		}
	}
}
