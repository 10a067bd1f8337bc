//! Wire and form records for the two screening flows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::LABEL_ANEMIC;

// ---------------------------------------------------------------------------
// CBC form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory clinical range shown next to a measurement input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AdvisoryRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The four numeric lab measurements of the CBC form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CbcField {
    Hemoglobin,
    Mcv,
    Mch,
    Mchc,
}

impl CbcField {
    /// Display order on the page.
    pub const ALL: [CbcField; 4] = [
        CbcField::Hemoglobin,
        CbcField::Mcv,
        CbcField::Mch,
        CbcField::Mchc,
    ];

    /// Input id and name attribute; matches the JSON key the service expects.
    pub fn key(&self) -> &'static str {
        match self {
            CbcField::Hemoglobin => "Hemoglobin",
            CbcField::Mcv => "MCV",
            CbcField::Mch => "MCH",
            CbcField::Mchc => "MCHC",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CbcField::Hemoglobin => "Hemoglobin (Hgb) - g/dL",
            CbcField::Mcv => "Mean Corpuscular Volume (MCV) - fL",
            CbcField::Mch => "Mean Corpuscular Hemoglobin (MCH) - pg",
            CbcField::Mchc => "Mean Corpuscular Hemoglobin Concentration (MCHC) - g/dL",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            CbcField::Hemoglobin | CbcField::Mchc => "g/dL",
            CbcField::Mcv => "fL",
            CbcField::Mch => "pg",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CbcField::Hemoglobin => "e.g., 12.5",
            CbcField::Mcv => "e.g., 85.0",
            CbcField::Mch => "e.g., 28.0",
            CbcField::Mchc => "e.g., 34.0",
        }
    }

    pub fn range(&self) -> AdvisoryRange {
        match self {
            CbcField::Hemoglobin => AdvisoryRange { min: 5.0, max: 20.0, step: 0.1 },
            CbcField::Mcv => AdvisoryRange { min: 60.0, max: 120.0, step: 0.1 },
            CbcField::Mch => AdvisoryRange { min: 20.0, max: 40.0, step: 0.1 },
            CbcField::Mchc => AdvisoryRange { min: 30.0, max: 40.0, step: 0.1 },
        }
    }

    /// Hint line under the input, e.g. `"Range: 5.0 - 20.0 g/dL"`.
    pub fn range_hint(&self) -> String {
        let r = self.range();
        match self {
            CbcField::Hemoglobin => format!("Range: {:.1} - {:.1} {}", r.min, r.max, self.unit()),
            _ => format!("Range: {} - {} {}", r.min, r.max, self.unit()),
        }
    }
}

/// Raw CBC form contents exactly as typed by the user.
///
/// Field text is kept verbatim so the inputs can be re-rendered without
/// reformatting; parsing happens on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CbcForm {
    pub gender: Option<Gender>,
    pub hemoglobin: String,
    pub mcv: String,
    pub mch: String,
    pub mchc: String,
}

impl CbcForm {
    pub fn raw(&self, field: CbcField) -> &str {
        match field {
            CbcField::Hemoglobin => &self.hemoglobin,
            CbcField::Mcv => &self.mcv,
            CbcField::Mch => &self.mch,
            CbcField::Mchc => &self.mchc,
        }
    }

    pub fn set_raw(&mut self, field: CbcField, value: String) {
        match field {
            CbcField::Hemoglobin => self.hemoglobin = value,
            CbcField::Mcv => self.mcv = value,
            CbcField::Mch => self.mch = value,
            CbcField::Mchc => self.mchc = value,
        }
    }

    pub fn value(&self, field: CbcField) -> Option<f64> {
        parse_measurement(self.raw(field))
    }

    /// All five fields populated.
    pub fn is_complete(&self) -> bool {
        self.gender.is_some() && CbcField::ALL.iter().all(|f| self.value(*f).is_some())
    }

    /// Populated fields whose value lies outside the advisory range.
    pub fn out_of_range(&self) -> Vec<CbcField> {
        CbcField::ALL
            .iter()
            .copied()
            .filter(|f| matches!(self.value(*f), Some(v) if !f.range().contains(v)))
            .collect()
    }

    /// Build the request body, or `None` when any field is missing.
    pub fn to_request(&self) -> Option<CbcRequest> {
        Some(CbcRequest {
            gender: self.gender?,
            hemoglobin: self.value(CbcField::Hemoglobin)?,
            mch: self.value(CbcField::Mch)?,
            mchc: self.value(CbcField::Mchc)?,
            mcv: self.value(CbcField::Mcv)?,
        })
    }
}

/// Text that does not parse as a finite number counts as empty.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JSON body posted to the CBC endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CbcRequest {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Hemoglobin")]
    pub hemoglobin: f64,
    #[serde(rename = "MCH")]
    pub mch: f64,
    #[serde(rename = "MCHC")]
    pub mchc: f64,
    #[serde(rename = "MCV")]
    pub mcv: f64,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfidenceScores {
    pub anemic_probability: f64,
    pub non_anemic_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CbcPrediction {
    pub label: String,
    pub prediction_class: i64,
    pub confidence_scores: ConfidenceScores,
}

impl CbcPrediction {
    pub fn is_anemic(&self) -> bool {
        self.label == LABEL_ANEMIC
    }

    pub fn tone(&self) -> Tone {
        if self.is_anemic() {
            Tone::Danger
        } else {
            Tone::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisualPrediction {
    pub risk_label: String,
    pub confidence_score: f64,
}

impl VisualPrediction {
    pub fn tone(&self) -> Tone {
        let label = self.risk_label.to_lowercase();
        if label.contains("high") {
            Tone::Danger
        } else if label.contains("medium") {
            Tone::Warning
        } else {
            Tone::Ok
        }
    }
}

/// Colour treatment of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Ok,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        use crate::constants::{CSS_TONE_DANGER, CSS_TONE_OK, CSS_TONE_WARNING};
        match self {
            Tone::Danger => CSS_TONE_DANGER,
            Tone::Warning => CSS_TONE_WARNING,
            Tone::Ok => CSS_TONE_OK,
        }
    }
}

/// Still frame grabbed from the camera, as a JPEG data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    pub data_url: String,
}
