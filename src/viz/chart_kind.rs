use strum_macros::EnumIter;

/// The fixed set of chart artifacts regenerated after every prediction.
/// Keys are stable identifiers used by the results page; file names are
/// fixed and overwritten on each regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ChartKind {
    IncomeVsScore,
    AgeVsScore,
    AgeVsIncome,
    ClusterDistribution,
}

impl ChartKind {
    pub fn key(self) -> &'static str {
        match self {
            ChartKind::IncomeVsScore => "income_vs_score",
            ChartKind::AgeVsScore => "age_vs_score",
            ChartKind::AgeVsIncome => "age_vs_income",
            ChartKind::ClusterDistribution => "cluster_distribution",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::IncomeVsScore => "income_vs_score.svg",
            ChartKind::AgeVsScore => "age_vs_score.svg",
            ChartKind::AgeVsIncome => "age_vs_income.svg",
            ChartKind::ClusterDistribution => "cluster_distribution.svg",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::IncomeVsScore => "Income vs. Spending Score",
            ChartKind::AgeVsScore => "Age vs. Spending Score",
            ChartKind::AgeVsIncome => "Age vs. Income",
            ChartKind::ClusterDistribution => "Cluster Distribution",
        }
    }
}
