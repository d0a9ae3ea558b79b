use crate::models::{slot_label, HOURS_PER_DAY};
use std::collections::{BTreeMap, HashSet};

pub const SLEEP_LABEL: &str = "Sleep";
pub const FUN_LABEL: &str = "Fun";
pub const WORK_LABEL: &str = "Work";

/// Slot labels covered by the inclusive hour interval `start..=end`, both in
/// 0..=23. When `start > end` the interval wraps past midnight once: the
/// start-side run comes first, then the run from 00:00.
pub fn interval_slots(start: u8, end: u8) -> Vec<String> {
    if start <= end {
        (start..=end).map(slot_label).collect()
    } else {
        (start..HOURS_PER_DAY)
            .chain(0..=end)
            .map(slot_label)
            .collect()
    }
}

/// Writes `label` into every slot in `slots`, after clearing it from any slot
/// that carried it but is no longer in the set. Slot names that are not
/// canonical task keys are ignored. Re-applying with the same inputs is a
/// no-op.
pub fn apply_category(tasks: &mut BTreeMap<String, String>, slots: &[String], label: &str) {
    let wanted: HashSet<&str> = slots.iter().map(String::as_str).collect();
    for (slot, text) in tasks.iter_mut() {
        if text.as_str() == label && !wanted.contains(slot.as_str()) {
            text.clear();
        }
    }
    for slot in slots {
        if let Some(text) = tasks.get_mut(slot) {
            *text = label.to_string();
        }
    }
}

/// Applies the three category layers to a day's tasks. Work first, then Fun,
/// then Sleep, so a slot claimed by more than one ends up Sleep > Fun > Work.
pub fn apply_plan(
    tasks: &mut BTreeMap<String, String>,
    sleep: Option<(u8, u8)>,
    fun: &[String],
    work: &[String],
) {
    apply_category(tasks, work, WORK_LABEL);
    apply_category(tasks, fun, FUN_LABEL);
    let sleep_slots = match sleep {
        Some((start, end)) => interval_slots(start, end),
        None => Vec::new(),
    };
    apply_category(tasks, &sleep_slots, SLEEP_LABEL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;

    #[test]
    fn plain_interval_is_inclusive_and_ordered() {
        let slots = interval_slots(9, 12);
        assert_eq!(
            slots,
            vec![
                "09:00 - 10:00",
                "10:00 - 11:00",
                "11:00 - 12:00",
                "12:00 - 13:00",
            ]
        );
    }

    #[test]
    fn interval_lengths_match_hour_counts() {
        for start in 0..24u8 {
            for end in 0..24u8 {
                let expected = if start <= end {
                    (end - start + 1) as usize
                } else {
                    (24 - start + end + 1) as usize
                };
                assert_eq!(interval_slots(start, end).len(), expected);
            }
        }
    }

    #[test]
    fn wrapping_interval_crosses_midnight_once() {
        let slots = interval_slots(22, 6);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0], "22:00 - 23:00");
        assert_eq!(slots[1], "23:00 - 24:00");
        assert_eq!(slots[2], "00:00 - 01:00");
        assert_eq!(slots[8], "06:00 - 07:00");
    }

    #[test]
    fn single_hour_interval() {
        assert_eq!(interval_slots(5, 5), vec!["05:00 - 06:00"]);
    }

    #[test]
    fn full_day_intervals() {
        assert_eq!(interval_slots(0, 23).len(), 24);
        assert_eq!(interval_slots(12, 11).len(), 24);
    }

    #[test]
    fn apply_category_clears_stale_labels() {
        let mut tasks = DayRecord::new().tasks;
        apply_category(&mut tasks, &interval_slots(22, 6), SLEEP_LABEL);
        assert_eq!(tasks[&slot_label(22)], "Sleep");
        assert_eq!(tasks[&slot_label(3)], "Sleep");

        apply_category(&mut tasks, &interval_slots(23, 6), SLEEP_LABEL);
        assert_eq!(tasks[&slot_label(22)], "");
        assert_eq!(tasks[&slot_label(23)], "Sleep");
    }

    #[test]
    fn apply_category_is_idempotent() {
        let mut once = DayRecord::new().tasks;
        apply_category(&mut once, &interval_slots(22, 6), SLEEP_LABEL);
        let mut twice = once.clone();
        apply_category(&mut twice, &interval_slots(22, 6), SLEEP_LABEL);
        assert_eq!(once, twice);
    }

    #[test]
    fn apply_category_keeps_user_text_elsewhere() {
        let mut tasks = DayRecord::new().tasks;
        tasks.insert(slot_label(9), "standup".to_string());
        apply_category(&mut tasks, &interval_slots(22, 6), SLEEP_LABEL);
        assert_eq!(tasks[&slot_label(9)], "standup");
    }

    #[test]
    fn apply_category_ignores_unknown_slot_names() {
        let mut tasks = DayRecord::new().tasks;
        apply_category(&mut tasks, &["24:00 - 25:00".to_string()], FUN_LABEL);
        assert_eq!(tasks.len(), 24);
        assert!(tasks.values().all(String::is_empty));
    }

    #[test]
    fn plan_precedence_is_sleep_then_fun_then_work() {
        let mut tasks = DayRecord::new().tasks;
        let overlap = vec![slot_label(8), slot_label(9)];
        apply_plan(&mut tasks, Some((8, 8)), &overlap, &overlap);
        assert_eq!(tasks[&slot_label(8)], "Sleep");
        assert_eq!(tasks[&slot_label(9)], "Fun");

        let mut tasks = DayRecord::new().tasks;
        apply_plan(&mut tasks, None, &[], &overlap);
        assert_eq!(tasks[&slot_label(8)], "Work");
        assert_eq!(tasks[&slot_label(9)], "Work");
    }

    #[test]
    fn plan_application_is_idempotent() {
        let mut once = DayRecord::new().tasks;
        once.insert(slot_label(14), "dentist".to_string());
        let fun = vec![slot_label(18)];
        let work = vec![slot_label(10), slot_label(11)];
        apply_plan(&mut once, Some((22, 6)), &fun, &work);
        let mut twice = once.clone();
        apply_plan(&mut twice, Some((22, 6)), &fun, &work);
        assert_eq!(once, twice);
        assert_eq!(once[&slot_label(14)], "dentist");
    }
}
