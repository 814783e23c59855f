//! Pure assembly of the weekly planner board.

use chrono::NaiveDate;
use models_planning::employee::{Department, Employee};
use models_planning::schedule::{self, DayWindow};
use models_planning::shift::Shift;
use models_planning::week::{normalize_date_key, WeekKey};

use crate::domain::model::{
    BoardCell, BoardDay, DepartmentGroup, EmployeeRow, HoursSummary, PlannerBoard,
};

/// Assembles the board from already-loaded inputs.
///
/// Employees get a row in every department group they belong to; employees
/// without a department and departments without employees are left out.
/// Cell membership compares normalized `YYYY-MM-DD` keys, so legacy rows
/// with time-of-day suffixes still land in the right column. Closed days
/// hide their shifts without deleting them, and every employee's hour total
/// spans the whole plan, hidden shifts included.
pub fn build_board(
    week: &WeekKey,
    template_days: &[DayWindow],
    dates: [NaiveDate; 7],
    departments: &[Department],
    employees: &[Employee],
    shifts: &[Shift],
) -> PlannerBoard {
    let days = layout_days(template_days, dates);

    let mut sorted: Vec<&Department> = departments.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let mut groups = Vec::new();
    for department in sorted {
        let mut rows: Vec<EmployeeRow> = employees
            .iter()
            .filter(|employee| employee.department_ids.iter().any(|id| id == &department.id))
            .map(|employee| employee_row(employee, &days, shifts))
            .collect();
        if rows.is_empty() {
            continue;
        }
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.employee_id.cmp(&b.employee_id)));
        groups.push(DepartmentGroup {
            department_id: department.id.clone(),
            name: department.name.clone(),
            rows,
        });
    }

    PlannerBoard {
        week_key: week.to_string(),
        days,
        open_hours: schedule::display_bounds(template_days),
        departments: groups,
    }
}

fn layout_days(template_days: &[DayWindow], dates: [NaiveDate; 7]) -> Vec<BoardDay> {
    dates
        .iter()
        .map(|date| {
            let weekday = date.format("%A").to_string();
            let window = template_days
                .iter()
                .find(|day| day.day.eq_ignore_ascii_case(&weekday))
                .cloned();
            let closed = window.as_ref().map_or(true, |day| day.closed);
            BoardDay {
                weekday,
                date: date.format("%Y-%m-%d").to_string(),
                window: window.filter(|day| !day.closed),
                closed,
            }
        })
        .collect()
}

fn employee_row(employee: &Employee, days: &[BoardDay], shifts: &[Shift]) -> EmployeeRow {
    let cells = days
        .iter()
        .map(|day| {
            let on_day = if day.closed {
                Vec::new()
            } else {
                shifts
                    .iter()
                    .filter(|shift| shift.employee_id == employee.id)
                    .filter(|shift| normalize_date_key(&shift.work_date) == day.date)
                    .cloned()
                    .collect()
            };
            BoardCell {
                date: day.date.clone(),
                closed: day.closed,
                can_assign: !day.closed,
                shifts: on_day,
            }
        })
        .collect();

    let worked_hours: f64 = shifts
        .iter()
        .filter(|shift| shift.employee_id == employee.id)
        .map(shift_hours)
        .sum();

    EmployeeRow {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        cells,
        hours: HoursSummary {
            worked_hours,
            contracted_hours: employee.hours_per_week,
        },
    }
}

/// Fractional hours of one shift, clamped at zero. Breaks stay untouched.
fn shift_hours(shift: &Shift) -> f64 {
    let (Some(start), Some(end)) = (
        schedule::hhmm_to_hours(&shift.start_time),
        schedule::hhmm_to_hours(&shift.end_time),
    ) else {
        return 0.0;
    };
    (end - start).max(0.0)
}
