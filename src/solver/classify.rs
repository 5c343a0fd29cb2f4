//! Rule-based classification of problem descriptions into plan templates.
//!
//! There is no model behind this: a submission is matched against an ordered
//! table of topic rules (keyword containment or an explicit category tag) and
//! the first hit selects the template bundle.

use serde::{Deserialize, Serialize};

use super::bundles::Topic;

/// Category tags the user can attach to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Finance,
    Career,
    Relationships,
    Lifestyle,
    Technology,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Health,
        Category::Finance,
        Category::Career,
        Category::Relationships,
        Category::Lifestyle,
        Category::Technology,
    ];

    /// Stable id; this is also the label written into [`Solution::category`].
    pub fn id(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Career => "career",
            Category::Relationships => "relationships",
            Category::Lifestyle => "lifestyle",
            Category::Technology => "technology",
        }
    }

    /// Human-readable label for the category picker.
    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "Health & Wellness",
            Category::Finance => "Financial",
            Category::Career => "Career & Education",
            Category::Relationships => "Relationships",
            Category::Lifestyle => "Lifestyle",
            Category::Technology => "Technology",
        }
    }
}

/// The plan handed to the result renderer. Owned copies so the view can hold
/// it independently of the static template data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub analysis: String,
    pub category: String,
    pub steps: Vec<String>,
    pub resources: Vec<String>,
    pub timeline: String,
}

/// One row of the classification table. A rule fires when the lowercased text
/// contains any of its keywords, or the submission carries its category tag.
struct TopicRule {
    topic: Topic,
    keywords: &'static [&'static str],
    tag: Category,
}

/// Ordered by priority; the first rule that fires wins, so a text matching
/// both "debt" and "sick" is always classified financial.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Financial,
        keywords: &["money", "debt", "budget"],
        tag: Category::Finance,
    },
    TopicRule {
        topic: Topic::Health,
        keywords: &["health", "sick", "medical"],
        tag: Category::Health,
    },
    TopicRule {
        topic: Topic::Career,
        keywords: &["job", "work", "career"],
        tag: Category::Career,
    },
    TopicRule {
        topic: Topic::Relationship,
        keywords: &["relationship", "family", "friend"],
        tag: Category::Relationships,
    },
    TopicRule {
        topic: Topic::Lifestyle,
        keywords: &["habit", "routine", "lifestyle"],
        tag: Category::Lifestyle,
    },
];

const URGENCY_KEYWORDS: &[&str] = &["urgent", "emergency", "immediate"];

/// Classify a problem description and select its plan template.
///
/// Pure and deterministic: identical `(text, category)` inputs produce
/// identical output. Matching is case-insensitive; the caller is responsible
/// for rejecting empty or too-short input before calling this.
///
/// The returned `category` field is the caller-supplied tag (or `"general"`),
/// independent of which bundle the keywords selected.
pub fn classify(text: &str, category: Option<Category>) -> Solution {
    let lowered = text.to_lowercase();
    let urgent = contains_any(&lowered, URGENCY_KEYWORDS);

    let topic = TOPIC_RULES
        .iter()
        .find(|rule| contains_any(&lowered, rule.keywords) || category == Some(rule.tag))
        .map_or(Topic::Generic, |rule| rule.topic);
    let bundle = topic.bundle();

    Solution {
        analysis: bundle.analysis.to_string(),
        category: category.map_or_else(|| "general".to_string(), |c| c.id().to_string()),
        steps: bundle.steps.iter().map(|s| (*s).to_string()).collect(),
        resources: bundle.resources.iter().map(|r| (*r).to_string()).collect(),
        timeline: if urgent {
            bundle.timeline_urgent.to_string()
        } else {
            bundle.timeline_normal.to_string()
        },
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::bundles::Topic;

    #[test]
    fn budget_keyword_selects_financial_but_category_stays_general() {
        let solution = classify("I need help with my budget and debt", None);
        let financial = Topic::Financial.bundle();
        assert_eq!(solution.analysis, financial.analysis);
        assert_eq!(solution.steps, financial.steps.to_vec());
        assert_eq!(solution.resources, financial.resources.to_vec());
        assert_eq!(solution.category, "general");
    }

    #[test]
    fn financial_outranks_health_on_mixed_keywords() {
        let solution = classify(
            "The debt is making me sick with worry every single night",
            None,
        );
        assert_eq!(solution.analysis, Topic::Financial.bundle().analysis);
    }

    #[test]
    fn priority_is_positional_not_by_match_count() {
        // Two health keywords against one financial keyword; financial still
        // wins because it sits first in the table.
        let solution = classify("sick of medical bills eating my money", None);
        assert_eq!(solution.analysis, Topic::Financial.bundle().analysis);
    }

    #[test]
    fn urgency_selects_the_urgent_timeline_variant() {
        let financial = Topic::Financial.bundle();
        let urgent = classify("urgent: my debt has gotten completely out of hand", None);
        assert_eq!(urgent.timeline, financial.timeline_urgent);

        let normal = classify("my debt has gotten completely out of hand", None);
        assert_eq!(normal.timeline, financial.timeline_normal);
    }

    #[test]
    fn lost_job_example_resolves_to_career() {
        let solution = classify(
            "I just lost my job and I'm not sure how to find a new one",
            None,
        );
        let career = Topic::Career.bundle();
        assert_eq!(solution.analysis, career.analysis);
        assert_eq!(solution.category, "general");
        assert_eq!(solution.timeline, career.timeline_normal);
    }

    #[test]
    fn category_tag_alone_selects_the_matching_bundle() {
        let solution = classify(
            "everything has been piling up lately and I can't keep track",
            Some(Category::Lifestyle),
        );
        assert_eq!(solution.analysis, Topic::Lifestyle.bundle().analysis);
        assert_eq!(solution.category, "lifestyle");
    }

    #[test]
    fn higher_priority_keywords_override_a_lower_priority_tag() {
        // Relationships tag, but a financial keyword sits above it in the
        // priority order.
        let solution = classify(
            "we keep arguing about money and it never gets resolved",
            Some(Category::Relationships),
        );
        assert_eq!(solution.analysis, Topic::Financial.bundle().analysis);
        assert_eq!(solution.category, "relationships");
    }

    #[test]
    fn technology_tag_falls_back_to_generic_with_its_own_label() {
        let solution = classify(
            "my laptop setup is a mess and I don't know where to start",
            Some(Category::Technology),
        );
        assert_eq!(solution.analysis, Topic::Generic.bundle().analysis);
        assert_eq!(solution.category, "technology");
    }

    #[test]
    fn unmatched_text_gets_the_generic_bundle() {
        let solution = classify("I can't decide where to go on vacation this year", None);
        assert_eq!(solution.analysis, Topic::Generic.bundle().analysis);
        assert_eq!(solution.category, "general");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let solution = classify("MY DEBT IS CRUSHING ME AND I NEED A WAY OUT", None);
        assert_eq!(solution.analysis, Topic::Financial.bundle().analysis);
    }

    #[test]
    fn classification_is_idempotent() {
        let a = classify("urgent money trouble with my job", Some(Category::Finance));
        let b = classify("urgent money trouble with my job", Some(Category::Finance));
        assert_eq!(a, b);
    }

    #[test]
    fn every_solution_has_six_steps_and_five_resources() {
        let inputs: [(&str, Option<Category>); 7] = [
            ("my budget is broken", None),
            ("I have been feeling sick for weeks", None),
            ("my job is wearing me down", None),
            ("my family and I keep clashing", None),
            ("I want a better morning routine", None),
            ("nothing specific, just stuck", None),
            ("nothing specific, just stuck", Some(Category::Technology)),
        ];
        for (text, category) in inputs {
            let solution = classify(text, category);
            assert_eq!(solution.steps.len(), 6, "{text}");
            assert_eq!(solution.resources.len(), 5, "{text}");
        }
    }
}
