//! Fusion of per-document AI judgments into a bounded score adjustment.
//!
//! Each `DocumentJudgment` arrives from an external vision review step that
//! bounds its own `score_adjustment` to [-10, +40]. The engine sums the
//! adjustments as-is and does not re-clamp individual judgments; only the
//! final score is clamped to [0, 100]. If the producer's bound stops
//! holding, totals drift with it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::composer;
use crate::insights::Confidence;
use crate::review::Assessment;
use crate::ruleset::RuleSet;
use crate::types::RiskLevel;

// ---------------------------------------------------------------------------
// Input / Output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentQuality {
    Poor,
    Acceptable,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    Incomplete,
    Partial,
    Complete,
}

/// One document's verdict from the external review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentJudgment {
    pub document_label: String,
    pub document_quality: DocumentQuality,
    pub authenticity_concerns: bool,
    pub completeness: Completeness,
    #[serde(default)]
    pub quality_notes: String,
    /// Does the document support the claimed transaction details.
    pub verified: bool,
    pub confidence_level: Confidence,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub inconsistencies: Vec<String>,
    pub score_adjustment: i32,
    #[serde(default)]
    pub adjustment_reason: String,
}

/// An assessment revised in light of document evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedAssessment {
    pub original: Assessment,
    pub documents_reviewed: usize,
    pub verified_count: usize,
    /// Percentage of judged documents that verified, one decimal place.
    pub verification_rate: Decimal,
    pub overall_verification: String,
    pub total_adjustment: i32,
    pub adjustment_reason: String,
    pub final_score: i32,
    pub final_level: RiskLevel,
    pub rationale: String,
}

// ---------------------------------------------------------------------------
// Adjustment
// ---------------------------------------------------------------------------

/// Fold a set of document judgments into an existing assessment.
///
/// Returns None when no judgments were produced (all documents skipped or
/// the review step failed); the caller must fall back to the unadjusted
/// assessment rather than report a zero adjustment.
///
/// The level is recomputed from the rule set passed here, which is the live
/// one at adjustment time: a cut-point change between original assessment
/// and document review is honored.
pub fn adjust_assessment(
    assessment: &Assessment,
    judgments: &[DocumentJudgment],
    rules: &RuleSet,
) -> Option<AdjustedAssessment> {
    if judgments.is_empty() {
        return None;
    }

    let total_adjustment: i32 = judgments.iter().map(|j| j.score_adjustment).sum();
    let final_score = (assessment.risk_score + total_adjustment).clamp(0, composer::MAX_SCORE);
    let final_level = composer::score_to_level(rules, final_score);

    let verified_count = judgments.iter().filter(|j| j.verified).count();
    let verification_rate = percentage(verified_count, judgments.len());
    let overall_verification = verification_narrative(verified_count, judgments.len());

    let clauses: Vec<String> = judgments
        .iter()
        .filter(|j| j.score_adjustment != 0)
        .map(|j| {
            format!(
                "{}: {} ({:+} points)",
                j.document_label, j.adjustment_reason, j.score_adjustment
            )
        })
        .collect();
    let adjustment_reason = if clauses.is_empty() {
        "No adjustments needed".to_string()
    } else {
        clauses.join(" | ")
    };

    let rationale = annotate_rationale(&assessment.rationale, total_adjustment);

    Some(AdjustedAssessment {
        original: assessment.clone(),
        documents_reviewed: judgments.len(),
        verified_count,
        verification_rate,
        overall_verification,
        total_adjustment,
        adjustment_reason,
        final_score,
        final_level,
        rationale,
    })
}

fn percentage(part: usize, whole: usize) -> Decimal {
    (Decimal::from(part as u64) * Decimal::ONE_HUNDRED / Decimal::from(whole as u64)).round_dp(1)
}

fn verification_narrative(verified: usize, total: usize) -> String {
    // Integer forms of rate >= 0.8 and rate >= 0.5.
    if verified * 10 >= total * 8 {
        "Documents strongly support the transaction".to_string()
    } else if verified * 2 >= total {
        "Documents partially support the transaction with some concerns".to_string()
    } else {
        "Documents raise significant concerns about the transaction".to_string()
    }
}

fn annotate_rationale(rationale: &str, total_adjustment: i32) -> String {
    if total_adjustment > 0 {
        format!(
            "{} DOCUMENT ALERT: Risk increased by {} points due to document concerns.",
            rationale, total_adjustment
        )
    } else if total_adjustment < 0 {
        format!(
            "{} Documents verified successfully, risk reduced by {} points.",
            rationale,
            total_adjustment.abs()
        )
    } else {
        rationale.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
