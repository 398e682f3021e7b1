//! Sample news statistics backing the dashboard pages.
//!
//! There is no ingestion pipeline behind this crate: category stats, headline
//! metrics, and KPIs are fixed demo content, and the monthly trend series is
//! drawn fresh from a caller-supplied RNG so each visit to the Analytics page
//! looks alive without pretending to be real data.

use rand::Rng;
use serde::Serialize;

/// One headline metric card on the Home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineMetric {
    pub icon: &'static str,
    pub value: u32,
    pub label: &'static str,
    pub delta: &'static str,
}

pub const HEADLINE_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric {
        icon: "📚",
        value: 1_234,
        label: "Articles Analyzed",
        delta: "+12% this month",
    },
    HeadlineMetric {
        icon: "🔬",
        value: 567,
        label: "Research Papers",
        delta: "+8% this month",
    },
    HeadlineMetric {
        icon: "🚀",
        value: 890,
        label: "Tech Innovations",
        delta: "+15% this month",
    },
    HeadlineMetric {
        icon: "🤖",
        value: 234,
        label: "AI Insights",
        delta: "+23% this month",
    },
];

/// One row of the category overview table on the Data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: &'static str,
    pub articles: u32,
    pub growth_pct: i32,
    pub trending: &'static str,
}

pub const CATEGORY_STATS: &[CategoryStat] = &[
    CategoryStat {
        category: "Science",
        articles: 145,
        growth_pct: 12,
        trending: "Climate Science, Biotechnology",
    },
    CategoryStat {
        category: "Technology",
        articles: 230,
        growth_pct: 18,
        trending: "AI, Quantum Computing",
    },
    CategoryStat {
        category: "Engineering",
        articles: 178,
        growth_pct: 15,
        trending: "Renewable Energy, Robotics",
    },
    CategoryStat {
        category: "Mathematics",
        articles: 92,
        growth_pct: 8,
        trending: "Data Science, Statistics",
    },
];

/// One KPI tile on the Analytics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

pub const ANALYTICS_KPIS: &[Kpi] = &[
    Kpi {
        label: "🤖 AI Research Growth",
        value: "45%",
        delta: "12% vs last quarter",
    },
    Kpi {
        label: "⚛️ Quantum Computing",
        value: "23%",
        delta: "8% vs last quarter",
    },
    Kpi {
        label: "🧬 Biotechnology",
        value: "67%",
        delta: "15% vs last quarter",
    },
];

pub const TREND_MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve months of sampled article counts for one tracked field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub name: &'static str,
    pub counts: Vec<u32>,
}

/// Half-open sampling ranges per tracked field.
const TREND_RANGES: &[(&str, u32, u32)] = &[
    ("AI & ML", 80, 120),
    ("Quantum Tech", 40, 80),
    ("Biotech", 60, 100),
];

/// Draw one year of sample counts per tracked field from `rng`.
pub fn monthly_trend_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrendSeries> {
    TREND_RANGES
        .iter()
        .map(|&(name, lo, hi)| TrendSeries {
            name,
            counts: (0..TREND_MONTHS.len())
                .map(|_| rng.gen_range(lo..hi))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn trend_series_cover_twelve_months_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = monthly_trend_series(&mut rng);
        assert_eq!(series.len(), TREND_RANGES.len());

        for (s, &(name, lo, hi)) in series.iter().zip(TREND_RANGES) {
            assert_eq!(s.name, name);
            assert_eq!(s.counts.len(), TREND_MONTHS.len());
            assert!(s.counts.iter().all(|&c| (lo..hi).contains(&c)));
        }
    }

    #[test]
    fn same_seed_same_series() {
        let a = monthly_trend_series(&mut StdRng::seed_from_u64(42));
        let b = monthly_trend_series(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_tables_are_plausible() {
        assert_eq!(CATEGORY_STATS.len(), 4);
        assert_eq!(HEADLINE_METRICS.len(), 4);
        assert!(CATEGORY_STATS.iter().all(|c| c.articles > 0));
    }
}
