//! Screen state shared by the home, calendar and records views.

use chrono::NaiveDate;
use log::debug;
use shared::Tab;

use crate::domain::calendar::{first_of_month, CalendarService};
use crate::domain::models::Child;

/// Which child, day, month and tab the user is looking at
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    child_index: usize,
    selected_date: NaiveDate,
    focused_month: NaiveDate,
    tab: Tab,
}

impl SelectionState {
    /// Start on the first child with today selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            child_index: 0,
            selected_date: today,
            focused_month: first_of_month(today),
            tab: Tab::default(),
        }
    }

    pub fn child_index(&self) -> usize {
        self.child_index
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// First day of the month shown in the calendar
    pub fn focused_month(&self) -> NaiveDate {
        self.focused_month
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Jump to a specific child; out-of-range indices are kept and resolve to no child
    pub fn select_child(&mut self, index: usize) {
        self.child_index = index;
    }

    /// Move to the next child, staying on the last one
    pub fn select_next_child(&mut self, child_count: usize) {
        let last = child_count.saturating_sub(1);
        self.child_index = self.child_index.saturating_add(1).min(last);
    }

    /// Move to the previous child, staying on the first one
    pub fn select_previous_child(&mut self, child_count: usize) {
        let last = child_count.saturating_sub(1);
        self.child_index = self.child_index.min(last).saturating_sub(1);
    }

    pub fn selected_child<'a>(&self, children: &'a [Child]) -> Option<&'a Child> {
        children.get(self.child_index)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        debug!("Selected date {}", date);
        self.selected_date = date;
        self.focused_month = first_of_month(date);
    }

    pub fn show_previous_month(&mut self, calendar: &CalendarService) {
        self.focused_month = calendar.previous_month(self.focused_month);
    }

    pub fn show_next_month(&mut self, calendar: &CalendarService) {
        self.focused_month = calendar.next_month(self.focused_month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ThemeColor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn children() -> Vec<Child> {
        let today = date(2024, 5, 14);
        ["Emma", "Liam", "Sophia"]
            .iter()
            .map(|name| Child::new(name, date(2020, 1, 1), ThemeColor::Blue, today).unwrap())
            .collect()
    }

    #[test]
    fn test_new_selection() {
        let state = SelectionState::new(date(2024, 5, 14));
        assert_eq!(state.child_index(), 0);
        assert_eq!(state.selected_date(), date(2024, 5, 14));
        assert_eq!(state.focused_month(), date(2024, 5, 1));
        assert_eq!(state.tab(), Tab::Home);
    }

    #[test]
    fn test_child_navigation_clamps() {
        let children = children();
        let mut state = SelectionState::new(date(2024, 5, 14));

        state.select_previous_child(children.len());
        assert_eq!(state.child_index(), 0);

        state.select_next_child(children.len());
        state.select_next_child(children.len());
        state.select_next_child(children.len());
        assert_eq!(state.child_index(), 2);
        assert_eq!(state.selected_child(&children).unwrap().name, "Sophia");

        state.select_previous_child(children.len());
        assert_eq!(state.selected_child(&children).unwrap().name, "Liam");
    }

    #[test]
    fn test_selected_child_out_of_range() {
        let children = children();
        let mut state = SelectionState::new(date(2024, 5, 14));

        assert!(state.selected_child(&[]).is_none());

        state.select_child(7);
        assert!(state.selected_child(&children).is_none());

        // Nothing to move to with an empty list
        let mut empty = SelectionState::new(date(2024, 5, 14));
        empty.select_next_child(0);
        assert_eq!(empty.child_index(), 0);
        empty.select_previous_child(0);
        assert_eq!(empty.child_index(), 0);
    }

    #[test]
    fn test_child_navigation_from_out_of_range_index() {
        let children = children();
        let mut state = SelectionState::new(date(2024, 5, 14));

        state.select_child(usize::MAX);
        state.select_next_child(children.len());
        assert_eq!(state.child_index(), 2);

        state.select_child(10);
        state.select_previous_child(children.len());
        assert_eq!(state.child_index(), 1);
        assert_eq!(state.selected_child(&children).unwrap().name, "Liam");
    }

    #[test]
    fn test_select_date_focuses_month() {
        let calendar = CalendarService::default();
        let mut state = SelectionState::new(date(2024, 5, 14));

        state.show_next_month(&calendar);
        state.show_next_month(&calendar);
        assert_eq!(state.focused_month(), date(2024, 7, 1));
        // Browsing months leaves the selected day alone
        assert_eq!(state.selected_date(), date(2024, 5, 14));

        state.select_date(date(2023, 12, 31));
        assert_eq!(state.focused_month(), date(2023, 12, 1));

        state.show_next_month(&calendar);
        assert_eq!(state.focused_month(), date(2024, 1, 1));
        state.show_previous_month(&calendar);
        state.show_previous_month(&calendar);
        assert_eq!(state.focused_month(), date(2023, 11, 1));
    }

    #[test]
    fn test_select_tab() {
        let mut state = SelectionState::new(date(2024, 5, 14));
        state.select_tab(Tab::Medicine);
        assert_eq!(state.tab(), Tab::Medicine);
    }
}
