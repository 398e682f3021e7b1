//! Static topic profiles backing the career analysis narrative.
//!
//! Five STEM subject areas are described by a fixed four-field record. Lookup
//! is exact string match; anything else (misspellings, the empty string,
//! topics offered by the form but not yet profiled) resolves to the default
//! profile. That fallback is deliberate: the composer must stay total, so an
//! unknown topic degrades to generic-but-valid content instead of failing.

/// Four fixed prose fields describing one STEM subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicProfile {
    pub topic: &'static str,
    pub overview: &'static str,
    pub trends: &'static str,
    pub opportunities: &'static str,
    pub skills: &'static str,
}

/// Topic whose profile is used when lookup misses.
pub const DEFAULT_TOPIC: &str = "Data Science";

static PROFILES: &[TopicProfile] = &[
    TopicProfile {
        topic: "Artificial Intelligence",
        overview: "Artificial Intelligence is currently the fastest-growing field in STEM, with applications spanning from healthcare to autonomous vehicles.",
        trends: "Key trends include Large Language Models, Computer Vision, and Edge AI deployment.",
        opportunities: "High demand for AI specialists, research positions, and startup opportunities.",
        skills: "Python programming, machine learning frameworks (TensorFlow, PyTorch), statistics, and domain expertise.",
    },
    TopicProfile {
        topic: "Biotechnology",
        overview: "Biotechnology combines biology with technology to develop innovative solutions for health, agriculture, and environmental challenges.",
        trends: "CRISPR gene editing, personalized medicine, synthetic biology, and biomanufacturing are leading trends.",
        opportunities: "Growing opportunities in pharmaceutical companies, research institutions, and biotech startups.",
        skills: "Molecular biology, bioinformatics, laboratory techniques, and regulatory knowledge.",
    },
    TopicProfile {
        topic: "Quantum Computing",
        overview: "Quantum computing represents a revolutionary approach to computation, promising to solve complex problems beyond classical computers.",
        trends: "Quantum supremacy achievements, cloud quantum services, and quantum machine learning algorithms.",
        opportunities: "Research positions, quantum software development, and consulting roles in emerging quantum industry.",
        skills: "Quantum mechanics, linear algebra, programming languages like Qiskit, and theoretical physics.",
    },
    TopicProfile {
        topic: "Data Science",
        overview: "Data Science leverages statistical methods and computational tools to extract insights from complex datasets.",
        trends: "AutoML, explainable AI, real-time analytics, and data privacy technologies are current focal points.",
        opportunities: "High demand across industries including finance, healthcare, tech, and government sectors.",
        skills: "Statistical analysis, programming (Python/R), machine learning, and domain knowledge.",
    },
    TopicProfile {
        topic: "Renewable Energy",
        overview: "Renewable energy technology focuses on sustainable power generation through solar, wind, and other clean sources.",
        trends: "Energy storage solutions, smart grid technology, and green hydrogen production are emerging trends.",
        opportunities: "Engineering roles, policy development, and project management in the growing green economy.",
        skills: "Engineering principles, project management, regulatory knowledge, and sustainability expertise.",
    },
];

/// Resolve a topic name to its profile, falling back to [`DEFAULT_TOPIC`] on
/// any miss. Never fails.
pub fn profile_for(topic: &str) -> &'static TopicProfile {
    PROFILES
        .iter()
        .find(|profile| profile.topic == topic)
        .unwrap_or_else(default_profile)
}

/// The profile used when no exact match exists.
pub fn default_profile() -> &'static TopicProfile {
    PROFILES
        .iter()
        .find(|profile| profile.topic == DEFAULT_TOPIC)
        .expect("default topic present in static table")
}

/// Names of all profiled topics, in table order.
pub fn profiled_topics() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|profile| profile.topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_returns_that_profile() {
        for name in profiled_topics() {
            assert_eq!(profile_for(name).topic, name);
        }
    }

    #[test]
    fn miss_falls_back_to_default() {
        assert_eq!(profile_for("Nonexistent").topic, DEFAULT_TOPIC);
        assert_eq!(profile_for("").topic, DEFAULT_TOPIC);
        // Lookup is case-sensitive by contract.
        assert_eq!(profile_for("artificial intelligence").topic, DEFAULT_TOPIC);
    }

    #[test]
    fn table_has_five_distinct_topics() {
        let names: Vec<_> = profiled_topics().collect();
        assert_eq!(names.len(), 5);
        let mut dedup = names.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), names.len());
    }
}
