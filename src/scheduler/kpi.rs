//! Staffing quality metrics (KPIs).
//!
//! Computes coverage and preference indicators from a scheduler after
//! `create_schedule` has run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Assignments | (employee, slot) pairs in the schedule |
//! | Understaffed Slots | Slots below the per-shift minimum |
//! | Coverage Rate | Seats filled up to the minimum / seats required |
//! | Preference Satisfaction | Preferences honored / preferences recorded |
//! | Avg Days Worked | Mean days worked over recorded employees |

use crate::models::{Day, ShiftKind};

use super::ShiftScheduler;

/// Weekly staffing indicators.
#[derive(Debug, Clone)]
pub struct StaffingKpi {
    /// Total (employee, slot) assignments.
    pub total_assignments: usize,
    /// Slots below the configured minimum.
    pub understaffed_slots: usize,
    /// Fraction of required seats filled (0.0..1.0). Seats beyond the
    /// minimum do not count.
    pub coverage_rate: f64,
    /// Fraction of recorded preferences present in the schedule (0.0..1.0).
    pub preference_satisfaction: f64,
    /// Mean days worked per employee.
    pub avg_days_worked: f64,
    /// Most days any single employee works.
    pub max_days_worked: u8,
}

impl StaffingKpi {
    /// Computes KPIs from the scheduler's current state.
    pub fn calculate(scheduler: &ShiftScheduler) -> Self {
        let schedule = scheduler.schedule();
        let min = scheduler.config().min_employees_per_shift;

        let mut filled_seats = 0usize;
        for (_, roster) in schedule.slots() {
            filled_seats += roster.len().min(min);
        }
        let required = scheduler.config().required_seats();
        let coverage_rate = if required == 0 {
            1.0
        } else {
            filled_seats as f64 / required as f64
        };

        let mut recorded = 0usize;
        let mut honored = 0usize;
        for e in scheduler.employees() {
            for p in &e.preferences {
                recorded += 1;
                if schedule.roster(p.day, p.shift).contains(&e.name) {
                    honored += 1;
                }
            }
        }
        let preference_satisfaction = if recorded == 0 {
            1.0
        } else {
            honored as f64 / recorded as f64
        };

        let employees = scheduler.employees();
        let avg_days_worked = if employees.is_empty() {
            0.0
        } else {
            let sum: u32 = employees.iter().map(|e| u32::from(e.days_worked)).sum();
            sum as f64 / employees.len() as f64
        };
        let max_days_worked = employees.iter().map(|e| e.days_worked).max().unwrap_or(0);

        Self {
            total_assignments: schedule.assignment_count(),
            understaffed_slots: schedule.understaffed_count(min),
            coverage_rate,
            preference_satisfaction,
            avg_days_worked,
            max_days_worked,
        }
    }

    /// Headcount per shift kind summed over the week.
    pub fn headcount_by_shift(scheduler: &ShiftScheduler) -> [(ShiftKind, usize); 3] {
        ShiftKind::ALL.map(|shift| {
            let count = Day::ALL
                .into_iter()
                .map(|day| scheduler.schedule().roster(day, shift).len())
                .sum();
            (shift, count)
        })
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_understaffed: usize, min_coverage: f64) -> bool {
        self.understaffed_slots <= max_understaffed && self.coverage_rate >= min_coverage
    }
}
