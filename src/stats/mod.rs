
/// Categories with fewer questions asked than this never receive a status.
pub const MIN_QUESTIONS_FOR_STATUS: u32 = 10;
pub const STRONG_ABOVE_PERCENT: u32 = 90;
pub const WEAK_BELOW_PERCENT: u32 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub questions_asked: u32,
    pub correct_answers: u32,
}

impl CategoryStats {
    pub fn record(&mut self, is_correct: bool) {
        self.questions_asked += 1;
        if is_correct {
            self.correct_answers += 1;
        }
    }

    pub fn percentage_correct(&self) -> f64 {
        if self.questions_asked == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.questions_asked as f64 * 100.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Strong,
    Weak,
}

impl Status {
    // Integer comparison keeps the cut points exact.
    pub fn classify(stats: &CategoryStats) -> Option<Status> {
        if stats.questions_asked < MIN_QUESTIONS_FOR_STATUS {
            return None;
        }
        let correct = stats.correct_answers as u64 * 100;
        let asked = stats.questions_asked as u64;
        if correct > asked * STRONG_ABOVE_PERCENT as u64 {
            Some(Status::Strong)
        } else if correct < asked * WEAK_BELOW_PERCENT as u64 {
            Some(Status::Weak)
        } else {
            None
        }
    }

    pub fn get_label(&self) -> &'static str {
        match self {
            Status::Strong => "STRONG",
            Status::Weak => "WEAK",
        }
    }
}

/// Aggregate of every ledger row, overall and per category. Categories keep
/// the order in which they first appear in the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: CategoryStats,
    categories: Vec<(String, CategoryStats)>,
}

impl HistoryStats {
    pub fn record(&mut self, category: &str, is_correct: bool) {
        self.total.record(is_correct);
        match self.categories.iter_mut().find(|(c, _)| c == category) {
            Some((_, stats)) => stats.record(is_correct),
            None => {
                let mut stats = CategoryStats::default();
                stats.record(is_correct);
                self.categories.push((category.to_owned(), stats));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryStats> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, stats)| stats)
    }

    pub fn get_categories(&self) -> &[(String, CategoryStats)] {
        &self.categories
    }
}
