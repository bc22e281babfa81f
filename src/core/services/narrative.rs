//! Narrative service - digest building and oracle answer parsing
//!
//! The oracle is best-effort. [`summarize`] never fails: transport errors
//! and unexpected answers turn into a degraded [`Narrative`] that the
//! caller logs once.

use std::fmt::Write as _;

use crate::core::models::{Narrative, NarrativeQuality, Severity};
use crate::core::ports::NarrativeOracle;
use crate::text::truncate_chars;

use super::classifier::SeverityBuckets;
use super::collector::Activity;

/// Marker introducing the trend section of an oracle answer
pub const TREND_MARKER: &str = "[TREND]";

/// Marker introducing the comment section of an oracle answer
pub const COMMENT_MARKER: &str = "[COMMENT]";

/// Longest trend kept from an answer without markers
pub const TREND_LIMIT: usize = 500;

/// Number of item titles quoted in a digest
pub const DIGEST_SAMPLES: usize = 5;

/// Trend used when the oracle could not be asked
pub const FALLBACK_TREND: &str = "트렌드 분석을 생성하지 못했습니다.";

/// Comment used whenever the answer has no usable comment section
pub const FALLBACK_COMMENT: &str = "자동 코멘트를 생성하지 못했습니다. 위 목록을 직접 확인해주세요.";

/// Build the fixed-format recap sent to the oracle
#[must_use]
pub fn build_digest(repo: &str, activity: &Activity, buckets: &SeverityBuckets) -> String {
    let mut digest = String::new();
    let _ = writeln!(digest, "Repository: {repo}");
    let _ = writeln!(digest, "Window: {}", activity.window);
    let _ = writeln!(
        digest,
        "Issues: {} new, {} completed, {} open",
        activity.created.len(),
        activity.closed.len(),
        activity.open_count
    );
    let _ = writeln!(
        digest,
        "Severity: critical {}, major {}, normal {}",
        buckets.count(Severity::Critical),
        buckets.count(Severity::Major),
        buckets.count(Severity::Normal)
    );
    let _ = writeln!(
        digest,
        "Pull requests: {} opened, {} merged",
        activity.opened_pull_requests(),
        activity.merged_pull_requests()
    );
    let _ = writeln!(digest, "Commits: {}", activity.commit_count);

    let samples: Vec<_> = buckets.iter().take(DIGEST_SAMPLES).collect();
    if !samples.is_empty() {
        digest.push_str("Samples:\n");
        for item in samples {
            let _ = writeln!(
                digest,
                "- {} {} ({})",
                item.reference(),
                item.title,
                super::classifier::classify(item)
            );
        }
    }

    digest
}

/// Wrap a digest in the instructions sent to the oracle
#[must_use]
pub fn build_prompt(digest: &str) -> String {
    format!(
        "다음은 GitHub 저장소의 최근 활동 요약입니다.\n\n\
         {digest}\n\
         위 데이터를 분석하여 아래 형식으로만 답해주세요. 표시는 그대로 유지해주세요.\n\n\
         {TREND_MARKER}\n\
         (이슈 흐름과 위험 요소에 대한 2~3문장 분석)\n\
         {COMMENT_MARKER}\n\
         (팀에게 전하는 한두 문장의 코멘트)\n"
    )
}

/// Split an oracle answer into trend and comment
///
/// Both markers must be present, trend first. Otherwise the trimmed answer,
/// cut to [`TREND_LIMIT`] characters, becomes the trend and the comment is
/// [`FALLBACK_COMMENT`].
#[must_use]
pub fn parse_narrative(answer: &str) -> Narrative {
    if let Some(trend_at) = answer.find(TREND_MARKER) {
        let after_trend = trend_at + TREND_MARKER.len();
        if let Some(offset) = answer[after_trend..].find(COMMENT_MARKER) {
            let comment_at = after_trend + offset;
            return Narrative {
                trend: answer[after_trend..comment_at].trim().to_string(),
                comment: answer[comment_at + COMMENT_MARKER.len()..].trim().to_string(),
                quality: NarrativeQuality::Parsed,
            };
        }
    }

    Narrative {
        trend: truncate_chars(answer.trim(), TREND_LIMIT),
        comment: FALLBACK_COMMENT.to_string(),
        quality: NarrativeQuality::Truncated,
    }
}

/// Narrative used when the oracle failed
#[must_use]
pub fn fallback_narrative(reason: impl Into<String>) -> Narrative {
    Narrative {
        trend: FALLBACK_TREND.to_string(),
        comment: FALLBACK_COMMENT.to_string(),
        quality: NarrativeQuality::Fallback(reason.into()),
    }
}

/// Ask the oracle for a narrative of `digest`
///
/// Never fails; see [`Narrative::quality`] for degradation.
pub async fn summarize(oracle: &dyn NarrativeOracle, digest: &str) -> Narrative {
    match oracle.generate(&build_prompt(digest)).await {
        Ok(answer) => parse_narrative(&answer),
        Err(e) => fallback_narrative(e.to_string()),
    }
}
