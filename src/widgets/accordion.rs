//! FAQ panels. Each panel toggles on its own; expanding one never
//! collapses a sibling.

pub struct Panel {
    pub title: &'static str,
    pub body: &'static str,
    expanded: bool,
}

impl Panel {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

pub struct Accordion {
    panels: Vec<Panel>,
}

const DEFAULT_FAQ: &[(&str, &str)] = &[
    (
        "How is lost revenue estimated?",
        "Missed calls times your conversion rate times the average \
         transaction value, rounded to whole dollars.",
    ),
    (
        "Where do the slider defaults come from?",
        "Typical figures for a small service business; adjust them to \
         match your own call volume.",
    ),
    (
        "Does the estimate include repeat customers?",
        "No. It counts the first transaction only, so the real cost of a \
         missed call is usually higher.",
    ),
    (
        "Can I turn the background animation off?",
        "Yes, the space bar pauses it; it is purely decorative.",
    ),
];

impl Accordion {
    pub fn with_default_faq() -> Self {
        Self::from_entries(DEFAULT_FAQ)
    }

    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            panels: entries
                .iter()
                .map(|&(title, body)| Panel {
                    title,
                    body,
                    expanded: false,
                })
                .collect(),
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Flip one panel. Out-of-range indices are ignored rather than
    /// treated as an error.
    pub fn toggle(&mut self, index: usize) -> Option<&Panel> {
        let panel = self.panels.get_mut(index)?;
        panel.expanded ^= true;
        Some(&self.panels[index])
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|p| p.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let mut acc = Accordion::with_default_faq();

        assert!(!acc.is_expanded(1));
        acc.toggle(1);
        assert!(acc.is_expanded(1));
        acc.toggle(1);
        assert!(!acc.is_expanded(1));
    }

    #[test]
    fn panels_toggle_independently() {
        let mut acc = Accordion::with_default_faq();

        acc.toggle(0);
        acc.toggle(2);

        let states: Vec<bool> = acc.panels().iter().map(Panel::is_expanded).collect();
        assert_eq!(states, vec![true, false, true, false]);

        acc.toggle(0);
        assert!(!acc.is_expanded(0));
        assert!(acc.is_expanded(2));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut acc = Accordion::with_default_faq();
        assert!(acc.toggle(99).is_none());
        assert!(acc.panels().iter().all(|p| !p.is_expanded()));
    }
}
