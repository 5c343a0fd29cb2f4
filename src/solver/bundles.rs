//! Canned plan templates, one per topic. Pure data: the classifier picks a
//! bundle and copies it verbatim into the `Solution` it returns.

/// A topic the classifier can resolve a submission to. `Generic` is the
/// fallback when no topic rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Financial,
    Health,
    Career,
    Relationship,
    Lifestyle,
    Generic,
}

/// Fixed plan template for one topic: always six steps, always five
/// resources, and a timeline phrase for each urgency variant.
pub struct Bundle {
    pub analysis: &'static str,
    pub steps: [&'static str; 6],
    pub resources: [&'static str; 5],
    pub timeline_normal: &'static str,
    pub timeline_urgent: &'static str,
}

impl Topic {
    pub fn bundle(self) -> &'static Bundle {
        match self {
            Topic::Financial => &FINANCIAL,
            Topic::Health => &HEALTH,
            Topic::Career => &CAREER,
            Topic::Relationship => &RELATIONSHIP,
            Topic::Lifestyle => &LIFESTYLE,
            Topic::Generic => &GENERIC,
        }
    }
}

static FINANCIAL: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a financial issue \
               centered on cash flow and debt load. The key factors to consider \
               are your current obligations, spending visibility, and building \
               a sustainable buffer.",
    steps: [
        "List every income source, debt, and recurring expense to get a complete picture",
        "Track 30 days of spending to see where money actually goes",
        "Build a monthly budget that covers essentials before discretionary spending",
        "Prioritize debts by interest rate and negotiate terms where possible",
        "Automate payments and a small emergency fund contribution each payday",
        "Review the plan monthly and adjust categories as your situation changes",
    ],
    resources: [
        "Certified financial counselors and advisors",
        "Budgeting apps with automatic transaction tracking",
        "Debt management and consolidation programs",
        "Personal finance books and courses",
        "Community credit unions and nonprofit money-help services",
    ],
    timeline_normal: "1-3 months to stabilize, with a full budget cycle visible after 90 days",
    timeline_urgent: "Start today: triage bills within 48 hours, stabilization within 2-4 weeks",
};

static HEALTH: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a health and \
               wellness issue that deserves careful, professionally backed \
               attention. The key factors to consider are symptom patterns, \
               lifestyle contributors, and access to qualified care.",
    steps: [
        "Write down your symptoms, their frequency, and anything that triggers them",
        "Schedule an appointment with a primary care provider for a proper evaluation",
        "Follow through on recommended tests or referrals without delay",
        "Adjust the sleep, nutrition, and movement habits that affect the condition",
        "Set up reminders for medications or treatment routines",
        "Book a follow-up to review progress and adapt the treatment plan",
    ],
    resources: [
        "Primary care physicians and specialist referrals",
        "Telehealth services for quick consultations",
        "Reputable medical information sites and patient guides",
        "Support groups for your specific condition",
        "Health tracking apps for symptoms, sleep, and activity",
    ],
    timeline_normal: "2-6 weeks depending on appointment availability, with ongoing follow-up",
    timeline_urgent: "Seek care within 24 hours; for severe symptoms use urgent care or emergency services now",
};

static CAREER: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a career issue \
               involving direction, opportunity, or workplace fit. The key \
               factors to consider are your transferable skills, the market \
               you're targeting, and a realistic search cadence.",
    steps: [
        "Clarify what you want next: role, industry, and non-negotiables",
        "Update your resume and online profiles to match that target",
        "Tell your network what you're looking for and ask for introductions",
        "Apply to a fixed number of well-matched openings every week",
        "Practice interviews with stories that show measurable impact",
        "Review responses every two weeks and refine your targeting",
    ],
    resources: [
        "Career coaches and resume review services",
        "Job boards and company career pages in your field",
        "Professional networking platforms and local meetups",
        "Skill-building courses and certifications",
        "Industry communities and alumni groups",
    ],
    timeline_normal: "2-3 months for a focused search, with traction typically visible in 4-6 weeks",
    timeline_urgent: "Start within 24 hours: stabilize income first, then run the search at full pace for 2-4 weeks",
};

static RELATIONSHIP: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a relationship \
               issue rooted in communication and expectations. The key factors \
               to consider are each person's perspective, the recurring \
               friction points, and making space to talk honestly.",
    steps: [
        "Name the specific behavior or pattern that is causing friction",
        "Pick a calm moment and describe how it affects you, without blame",
        "Listen to the other person's view without interrupting or rebutting",
        "Agree on one concrete change each of you will try",
        "Set a time in two weeks to revisit how the change is going",
        "Bring in a counselor or mediator if the pattern doesn't shift",
    ],
    resources: [
        "Couples and family counseling services",
        "Books on communication and conflict resolution",
        "Relationship workshops and classes",
        "Trusted friends or mentors who know you both",
        "Moderated online communities around healthy relationships",
    ],
    timeline_normal: "2-8 weeks of consistent effort, with check-ins every two weeks",
    timeline_urgent: "Address it this week; if there is any safety concern, contact a support line immediately",
};

static LIFESTYLE: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a lifestyle issue \
               about habits and daily structure. The key factors to consider \
               are the cue behind the current routine, the friction of the new \
               one, and how progress gets tracked.",
    steps: [
        "Define the single habit you want to build or break, in one sentence",
        "Identify the trigger and the reward that keep the current routine in place",
        "Design the smallest version of the new habit you can do daily",
        "Anchor it to an existing routine and remove obvious friction",
        "Track completion daily with a simple streak or checklist",
        "Review weekly and scale the habit up only after it sticks",
    ],
    resources: [
        "Habit tracking apps with streaks and reminders",
        "Books on behavior change and habit formation",
        "Accountability partners and habit groups",
        "Coaches specializing in routines and productivity",
        "Communities built around your specific goal",
    ],
    timeline_normal: "3-8 weeks for a habit to stabilize, reviewed weekly",
    timeline_urgent: "Start the smallest version today and protect the first 7 days",
};

static GENERIC: Bundle = Bundle {
    analysis: "Based on your description, this appears to be a general issue \
               that requires a systematic approach. The key factors to \
               consider are immediate impact, available resources, and \
               long-term sustainability.",
    steps: [
        "Assess the current situation and gather all relevant information",
        "Identify the root cause rather than just symptoms",
        "Research proven solutions and best practices",
        "Create a detailed action plan with specific milestones",
        "Implement the solution in phases with regular monitoring",
        "Evaluate results and adjust the approach as needed",
    ],
    resources: [
        "Expert consultation or professional guidance",
        "Online courses and educational materials",
        "Community support groups and forums",
        "Recommended tools and applications",
        "Books and research papers on the topic",
    ],
    timeline_normal: "2-4 weeks for initial implementation, with ongoing monitoring",
    timeline_urgent: "Start within 24 hours and front-load the first two steps into the coming week",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TOPICS: [Topic; 6] = [
        Topic::Financial,
        Topic::Health,
        Topic::Career,
        Topic::Relationship,
        Topic::Lifestyle,
        Topic::Generic,
    ];

    #[test]
    fn every_bundle_is_fully_populated() {
        for topic in ALL_TOPICS {
            let bundle = topic.bundle();
            assert!(!bundle.analysis.is_empty(), "{topic:?} analysis");
            assert!(bundle.steps.iter().all(|s| !s.is_empty()), "{topic:?} steps");
            assert!(
                bundle.resources.iter().all(|r| !r.is_empty()),
                "{topic:?} resources"
            );
            assert!(!bundle.timeline_normal.is_empty(), "{topic:?} timeline");
            assert!(!bundle.timeline_urgent.is_empty(), "{topic:?} urgent timeline");
        }
    }

    #[test]
    fn timeline_variants_differ() {
        for topic in ALL_TOPICS {
            let bundle = topic.bundle();
            assert_ne!(bundle.timeline_normal, bundle.timeline_urgent, "{topic:?}");
        }
    }
}
