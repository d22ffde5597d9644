//! Thread-local session store for the detailed calculator.
//!
//! The detailed view is split into an input page and a results page. The last
//! submitted profile is kept here so switching pages (or switching to the
//! classic view and back) does not lose it. Nothing survives a page reload.

use life_numbers::DetailedProfile;
use std::cell::RefCell;

thread_local! {
    /// Last profile submitted from the detailed input page.
    pub static SESSION_STORE: RefCell<Option<DetailedProfile>> = const { RefCell::new(None) };
}

pub fn store_profile(profile: DetailedProfile) {
    SESSION_STORE.with(|s| *s.borrow_mut() = Some(profile));
}

pub fn last_profile() -> Option<DetailedProfile> {
    SESSION_STORE.with(|s| s.borrow().clone())
}

pub fn clear() {
    SESSION_STORE.with(|s| s.borrow_mut().take());
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_numbers::{ClassicProfile, Gender, LeisureHours};

    #[test]
    fn test_store_and_clear() {
        clear();
        assert!(last_profile().is_none());

        let profile = DetailedProfile {
            base: ClassicProfile {
                age: 41,
                country: "Germany".to_string(),
                work_hours_per_week: 38.0,
                sleep_hours_per_day: 7.0,
                parent_age: 70,
                visits_per_year: 4.0,
                kid_age: 9,
            },
            gender: Gender::Female,
            leisure: LeisureHours::default(),
        };
        store_profile(profile.clone());
        assert_eq!(last_profile(), Some(profile));

        clear();
        assert!(last_profile().is_none());
    }
}
