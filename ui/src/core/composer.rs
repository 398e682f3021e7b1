//! The career analysis composer: a deterministic, total transform from a
//! five-field request into a multi-section Markdown narrative.
//!
//! The output is a pure function of the request and the static profile table.
//! Absence of expected data never fails: an unknown topic falls back to the
//! default profile, empty interest lists get a fixed phrase, and checklist
//! literals without an advice entry simply contribute nothing.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::profiles::{profile_for, TopicProfile};

/// Topics offered by the analysis form. The last three have no dedicated
/// profile yet and resolve to the default.
pub const TOPIC_CHOICES: &[&str] = &[
    "Artificial Intelligence",
    "Biotechnology",
    "Quantum Computing",
    "Data Science",
    "Renewable Energy",
    "Robotics",
    "Cybersecurity",
    "Space Technology",
];

pub const CAREER_LEVELS: &[&str] = &[
    "Student",
    "Recent Graduate",
    "Entry Level",
    "Mid-Career",
    "Senior Professional",
    "Career Changer",
];

pub const INTEREST_CHOICES: &[&str] = &[
    "Machine Learning",
    "Research & Development",
    "Product Development",
    "Data Analysis",
    "Project Management",
    "Teaching/Education",
    "Entrepreneurship",
    "Consulting",
    "Policy Making",
];

pub const CHALLENGE_CHOICES: &[&str] = &[
    "Lack of Experience",
    "Keeping Up with Technology",
    "Finding Opportunities",
    "Skill Development",
    "Networking",
    "Work-Life Balance",
    "Salary Expectations",
];

pub const GOAL_CHOICES: &[&str] = &[
    "Career Transition",
    "Skill Enhancement",
    "Leadership Role",
    "Research Opportunities",
    "Industry Networking",
    "Higher Education",
    "Starting a Business",
    "Remote Work Opportunities",
];

/// Phrase substituted when no specific interests were selected.
pub const GENERAL_INTERESTS_FALLBACK: &str = "general applications";

/// Advice paragraphs keyed by challenge literal. Only these four challenges
/// have dedicated advice; the remaining form choices contribute nothing.
/// Fragments are emitted in this table order regardless of input order.
const CHALLENGE_ADVICE: &[(&str, &str)] = &[
    (
        "Lack of Experience",
        "- **Experience Gap**: Consider contributing to open-source projects, pursuing internships, or building a portfolio of personal projects to demonstrate your capabilities.",
    ),
    (
        "Keeping Up with Technology",
        "- **Technology Updates**: Follow industry leaders on social media, subscribe to relevant newsletters, and join professional communities in your field.",
    ),
    (
        "Finding Opportunities",
        "- **Opportunity Discovery**: Leverage LinkedIn, attend virtual conferences, join professional associations, and network with industry professionals.",
    ),
    (
        "Skill Development",
        "- **Skill Enhancement**: Create a structured learning plan, utilize online platforms like Coursera or edX, and seek mentorship from experienced professionals.",
    ),
];

/// Advice paragraphs keyed by goal literal, same emission rules as
/// [`CHALLENGE_ADVICE`].
const GOAL_ADVICE: &[(&str, &str)] = &[
    (
        "Career Transition",
        "- **Transition Strategy**: Develop a 6-12 month transition plan, identify transferable skills, and consider bridge roles that combine your current expertise with your target field.",
    ),
    (
        "Skill Enhancement",
        "- **Learning Path**: Focus on both technical and soft skills, pursue relevant certifications, and practice through hands-on projects.",
    ),
    (
        "Research Opportunities",
        "- **Research Direction**: Identify active research groups, consider graduate studies or research collaborations, and stay updated with latest publications in your area of interest.",
    ),
    (
        "Industry Networking",
        "- **Networking Strategy**: Attend industry events, join professional societies, engage in online communities, and consider informational interviews with industry leaders.",
    ),
];

/// The five-field input bundle to the composer. Transient; list order is
/// irrelevant for correctness but preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub topic: String,
    pub career_level: String,
    pub interests: Vec<String>,
    pub challenges: Vec<String>,
    pub goals: Vec<String>,
}

/// Compose the full narrative for `request`.
///
/// Deterministic and total: any combination of strings and lists (including
/// empty ones) yields a valid report. The topic is inserted verbatim into the
/// summary and outlook sections even when profile lookup fell back.
pub fn compose(request: &AnalysisRequest) -> String {
    let profile: &TopicProfile = profile_for(&request.topic);

    let focus = if request.interests.is_empty() {
        GENERAL_INTERESTS_FALLBACK.to_string()
    } else {
        request.interests.join(", ")
    };

    let mut report = String::with_capacity(4 * 1024);

    let _ = write!(
        report,
        "## 🎯 Personalized STEM Career Analysis for {career_level}\n\
         \n\
         ### 📋 Your Profile Summary\n\
         Based on your inputs, you are a **{career_level}** professional interested in **{topic}** with specific focus on **{focus}**.\n\
         \n\
         ### 🔍 Field Overview: {topic}\n\
         {overview}\n\
         \n\
         ### 📈 Current Trends & Developments\n\
         {trends}\n\
         \n\
         ### 🚀 Career Opportunities\n\
         {opportunities}\n\
         \n\
         ### 🎓 Recommended Skills Development\n\
         {skills}\n\
         \n\
         ### 💡 Addressing Your Challenges\n",
        career_level = request.career_level,
        topic = request.topic,
        focus = focus,
        overview = profile.overview,
        trends = profile.trends,
        opportunities = profile.opportunities,
        skills = profile.skills,
    );

    append_advice(&mut report, CHALLENGE_ADVICE, &request.challenges);

    report.push_str("\n### 🎯 Strategic Recommendations Based on Your Goals\n");
    append_advice(&mut report, GOAL_ADVICE, &request.goals);

    let _ = write!(
        report,
        "\n\
         ### 🚀 Next Steps Action Plan\n\
         \n\
         **Immediate Actions (Next 30 Days):**\n\
         1. Create or update your professional profiles (LinkedIn, GitHub, personal website)\n\
         2. Identify 3-5 key skills to focus on based on current market demands\n\
         3. Join relevant professional communities and online forums\n\
         \n\
         **Short-term Goals (3-6 Months):**\n\
         1. Complete at least one significant project or course in your chosen area\n\
         2. Attend 2-3 industry events or webinars\n\
         3. Connect with 10-15 professionals in your target field\n\
         \n\
         **Long-term Vision (6-12 Months):**\n\
         1. Apply for positions or opportunities aligned with your career goals\n\
         2. Consider advanced certifications or formal education if needed\n\
         3. Establish yourself as a knowledgeable contributor in your field\n\
         \n\
         ### 💼 Industry Outlook\n\
         The {topic} field shows strong growth potential with increasing investment from both private and public sectors. \
         Market demand for skilled professionals continues to outpace supply, creating excellent opportunities for motivated individuals.\n\
         \n\
         ### 🔗 Recommended Resources\n\
         - **Online Learning**: Coursera, edX, Udacity for technical skills\n\
         - **Professional Networks**: LinkedIn groups, Reddit communities, Discord servers\n\
         - **Industry Publications**: Follow key journals and blogs in your field\n\
         - **Conferences**: Look for virtual and in-person events in your area of interest\n\
         \n\
         ---\n\
         \n\
         *This analysis is generated based on current market trends, industry insights, and your personal profile. \
         Remember that career success often comes from consistent effort, continuous learning, and strategic networking.*\n",
        topic = request.topic,
    );

    report
}

/// Append the advice paragraph for every table entry whose key appears in
/// `selected`. Table order wins; duplicates in `selected` emit one fragment;
/// unrecognized literals are ignored.
fn append_advice(report: &mut String, table: &[(&str, &str)], selected: &[String]) {
    for (key, advice) in table {
        if selected.iter().any(|item| item == key) {
            report.push('\n');
            report.push_str(advice);
        }
    }
    report.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profiles::{default_profile, profiled_topics};

    fn request(topic: &str, level: &str) -> AnalysisRequest {
        AnalysisRequest {
            topic: topic.into(),
            career_level: level.into(),
            ..Default::default()
        }
    }

    #[test]
    fn recognized_topics_embed_all_four_profile_fields() {
        for topic in profiled_topics() {
            let report = compose(&request(topic, "Student"));
            let profile = crate::core::profiles::profile_for(topic);
            assert!(report.contains(profile.overview), "overview for {topic}");
            assert!(report.contains(profile.trends), "trends for {topic}");
            assert!(
                report.contains(profile.opportunities),
                "opportunities for {topic}"
            );
            assert!(report.contains(profile.skills), "skills for {topic}");
        }
    }

    #[test]
    fn unrecognized_topic_uses_default_profile_but_keeps_verbatim_name() {
        let report = compose(&request("Space Technology", "Entry Level"));
        let fallback = default_profile();
        assert!(report.contains(fallback.overview));
        assert!(report.contains("Field Overview: Space Technology"));

        let empty_topic = compose(&request("", "Entry Level"));
        assert!(empty_topic.contains(fallback.overview));
    }

    #[test]
    fn empty_interests_fall_back_to_general_applications() {
        let report = compose(&request("Data Science", "Student"));
        assert!(report.contains(GENERAL_INTERESTS_FALLBACK));
    }

    #[test]
    fn interests_are_joined_in_input_order() {
        let mut req = request("Data Science", "Student");
        req.interests = vec!["Consulting".into(), "Machine Learning".into()];
        let report = compose(&req);
        assert!(report.contains("**Consulting, Machine Learning**"));
        assert!(!report.contains(GENERAL_INTERESTS_FALLBACK));
    }

    #[test]
    fn each_recognized_challenge_toggles_its_fragment() {
        for (key, advice) in CHALLENGE_ADVICE {
            let mut req = request("Biotechnology", "Mid-Career");
            req.challenges = vec![key.to_string()];
            assert!(compose(&req).contains(advice), "fragment for {key}");

            let without = compose(&request("Biotechnology", "Mid-Career"));
            assert!(!without.contains(advice), "no fragment without {key}");
        }
    }

    #[test]
    fn each_recognized_goal_toggles_its_fragment() {
        for (key, advice) in GOAL_ADVICE {
            let mut req = request("Biotechnology", "Mid-Career");
            req.goals = vec![key.to_string()];
            assert!(compose(&req).contains(advice), "fragment for {key}");
        }
    }

    #[test]
    fn unrecognized_checklist_literals_are_silent() {
        let mut req = request("Quantum Computing", "Student");
        req.challenges = vec!["Networking".into()];
        let report = compose(&req);
        assert!(report.contains("Quantum computing represents a revolutionary approach"));
        assert!(report.contains(GENERAL_INTERESTS_FALLBACK));
        for (_, advice) in CHALLENGE_ADVICE.iter().chain(GOAL_ADVICE) {
            assert!(!report.contains(advice));
        }
    }

    #[test]
    fn identical_requests_produce_identical_output() {
        let mut req = request("Renewable Energy", "Career Changer");
        req.interests = vec!["Policy Making".into()];
        req.challenges = vec!["Skill Development".into(), "Networking".into()];
        req.goals = vec!["Higher Education".into(), "Career Transition".into()];
        assert_eq!(compose(&req), compose(&req));
    }

    #[test]
    fn worked_example_with_fallback_profile_and_multiple_fragments() {
        let req = AnalysisRequest {
            topic: "Nonexistent".into(),
            career_level: "Mid-Career".into(),
            interests: vec!["Research & Development".into()],
            challenges: vec!["Lack of Experience".into(), "Skill Development".into()],
            goals: vec!["Career Transition".into()],
        };
        let report = compose(&req);

        let fallback = default_profile();
        assert!(report.contains(fallback.overview));
        assert!(report.contains(fallback.skills));
        assert!(report.contains("**Research & Development**"));
        assert!(report.contains("**Experience Gap**"));
        assert!(report.contains("**Skill Enhancement**"));
        assert!(report.contains("**Transition Strategy**"));
        assert!(!report.contains("**Technology Updates**"));
    }

    #[test]
    fn fragments_follow_table_order_not_input_order() {
        let mut req = request("Data Science", "Student");
        req.challenges = vec!["Skill Development".into(), "Lack of Experience".into()];
        let report = compose(&req);
        let gap = report.find("**Experience Gap**").unwrap();
        let skill = report.find("**Skill Enhancement**").unwrap();
        assert!(gap < skill);
    }

    #[test]
    fn duplicate_literals_emit_one_fragment() {
        let mut req = request("Data Science", "Student");
        req.goals = vec!["Career Transition".into(), "Career Transition".into()];
        let report = compose(&req);
        assert_eq!(report.matches("**Transition Strategy**").count(), 1);
    }
}
