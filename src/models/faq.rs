use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        id: "01",
        question: "Is this gym beginner friendly?",
        answer: "We demand effort, not experience. Our community respects anyone willing to do the work. The coaches will ensure your form is perfect before you load the bar.",
    },
    FaqEntry {
        id: "02",
        question: "Do I need to sign a contract?",
        answer: "We offer flexible monthly memberships for freedom, and committed term options for value. The 7-Day War Pass carries no obligation.",
    },
    FaqEntry {
        id: "03",
        question: "What are the operating hours?",
        answer: "War never sleeps. Members have 24/7 keycard access to the facility. Staffed coaching hours are 6am - 9pm weekdays.",
    },
    FaqEntry {
        id: "04",
        question: "Is Personal Training included?",
        answer: "The 7-Day Pass includes a tactical assessment and one intro session. Dedicated 1-on-1 coaching packages are available for those who need a commander.",
    },
];

/// Which FAQ entry is expanded. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
    len: usize,
}

impl FaqState {
    /// Starts with the first entry open.
    pub fn new(len: usize) -> Self {
        Self {
            open: (len > 0).then_some(0),
            len,
        }
    }

    /// Close `index` if it is open, otherwise open it and close the rest.
    /// Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_count(&self) -> usize {
        usize::from(self.open.is_some())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_entry_starts_open() {
        let state = FaqState::new(FAQS.len());
        assert_eq!(state.open(), Some(0));
        assert_eq!(FaqState::new(0).open(), None);
    }

    #[test]
    fn opening_any_entry_closes_the_others() {
        for len in 1..6 {
            for i in 0..len {
                let mut state = FaqState::new(len);
                state.toggle(i);
                if i == 0 {
                    // entry 0 was already open
                    assert_eq!(state.open_count(), 0);
                    state.toggle(i);
                }
                assert!(state.is_open(i));
                assert_eq!(state.open_count(), 1);
                assert!((0..len).filter(|&j| j != i).all(|j| !state.is_open(j)));

                state.toggle(i);
                assert_eq!(state.open_count(), 0);
            }
        }
    }

    #[test]
    fn switching_entries_keeps_one_open() {
        let mut state = FaqState::new(4);
        state.toggle(2);
        state.toggle(3);
        assert_eq!(state.open(), Some(3));
        state.toggle(1);
        assert_eq!(state.open(), Some(1));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut state = FaqState::new(4);
        state.toggle(4);
        state.toggle(usize::MAX);
        assert_eq!(state.open(), Some(0));

        let mut empty = FaqState::new(0);
        empty.toggle(0);
        assert_eq!(empty.open(), None);
    }

    #[test]
    fn entries_are_in_display_order() {
        let ids: Vec<&str> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["01", "02", "03", "04"]);
    }
}
