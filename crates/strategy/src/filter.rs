use leavecal_model::Strategy;

/// Optional criteria for narrowing the strategy list.
///
/// The default keeps everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyFilter {
    min_days: Option<u32>,
    max_leave_days: Option<u32>,
    include_labor_only: bool,
}

impl Default for StrategyFilter {
    fn default() -> Self {
        Self {
            min_days: None,
            max_leave_days: None,
            include_labor_only: true,
        }
    }
}

impl StrategyFilter {
    /// Keep strategies with at least `days` total days off.
    pub fn with_min_days(mut self, days: Option<u32>) -> Self {
        self.min_days = days;
        self
    }

    /// Keep strategies that need at most `days` leave days.
    pub fn with_max_leave_days(mut self, days: Option<u32>) -> Self {
        self.max_leave_days = days;
        self
    }

    /// Include or drop labor-only strategies.
    pub fn with_labor_only(mut self, include: bool) -> Self {
        self.include_labor_only = include;
        self
    }

    pub fn matches(&self, s: &Strategy) -> bool {
        if let Some(min) = self.min_days
            && s.total_days < min
        {
            return false;
        }
        if let Some(max) = self.max_leave_days
            && s.leave_count > max
        {
            return false;
        }
        self.include_labor_only || !s.labor_only
    }

    /// Matching strategies in their original order.
    pub fn apply<'a>(&self, strategies: &'a [Strategy]) -> Vec<&'a Strategy> {
        strategies.iter().filter(|s| self.matches(s)).collect()
    }
}
