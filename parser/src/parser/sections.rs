//! Section routing.
//!
//! The router walks lines in order and switches the current [`Section`]
//! when a line starts with one of the literal section titles. Transitions
//! only move forward; a title for a section at or before the current one is
//! reported as stale and otherwise ignored.

use super::Section;

/// Literal titles, in report order.
const SECTION_HEADERS: [(&str, Section); 4] = [
    ("SEVERITY BREAKDOWN", Section::Severity),
    ("ISSUE TYPE BREAKDOWN", Section::Types),
    ("FILE-WISE BREAKDOWN", Section::Files),
    ("DETAILED ISSUES", Section::Issues),
];

/// Where a line was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Section title; the router moved into this section.
    Enter(Section),
    /// Section title for a section already passed.
    Stale(Section),
    /// Ordinary line belonging to the current section.
    Body(Section),
}

#[derive(Debug, Clone)]
pub struct SectionRouter {
    current: Section,
    visited: Vec<Section>,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRouter {
    pub fn new() -> Self {
        Self {
            current: Section::Unclassified,
            visited: Vec::new(),
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Sections entered so far, in order.
    pub fn visited(&self) -> &[Section] {
        &self.visited
    }

    pub fn route(&mut self, line: &str) -> Route {
        let Some(target) = header_section(line) else {
            return Route::Body(self.current);
        };

        if target <= self.current {
            return Route::Stale(target);
        }

        self.current = target;
        self.visited.push(target);
        Route::Enter(target)
    }
}

fn header_section(line: &str) -> Option<Section> {
    let trimmed = line.trim_start();
    SECTION_HEADERS
        .iter()
        .find(|(title, _)| trimmed.starts_with(*title))
        .map(|(_, section)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unclassified() {
        let mut router = SectionRouter::new();
        assert_eq!(router.route("SUMMARY"), Route::Body(Section::Unclassified));
        assert!(router.visited().is_empty());
    }

    #[test]
    fn test_walks_every_section_in_order() {
        let mut router = SectionRouter::new();
        assert_eq!(
            router.route("SEVERITY BREAKDOWN"),
            Route::Enter(Section::Severity)
        );
        assert_eq!(router.route("Critical : 1"), Route::Body(Section::Severity));
        assert_eq!(
            router.route("ISSUE TYPE BREAKDOWN"),
            Route::Enter(Section::Types)
        );
        assert_eq!(
            router.route("FILE-WISE BREAKDOWN"),
            Route::Enter(Section::Files)
        );
        assert_eq!(
            router.route("DETAILED ISSUES (sorted by severity)"),
            Route::Enter(Section::Issues)
        );
        assert_eq!(
            router.visited(),
            &[
                Section::Severity,
                Section::Types,
                Section::Files,
                Section::Issues
            ]
        );
    }

    #[test]
    fn test_never_moves_backwards() {
        let mut router = SectionRouter::new();
        router.route("FILE-WISE BREAKDOWN");
        assert_eq!(
            router.route("SEVERITY BREAKDOWN"),
            Route::Stale(Section::Severity)
        );
        assert_eq!(
            router.route("FILE-WISE BREAKDOWN"),
            Route::Stale(Section::Files)
        );
        assert_eq!(router.current(), Section::Files);
    }

    #[test]
    fn test_may_skip_sections() {
        let mut router = SectionRouter::new();
        assert_eq!(
            router.route("DETAILED ISSUES"),
            Route::Enter(Section::Issues)
        );
        assert_eq!(router.visited(), &[Section::Issues]);
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let mut router = SectionRouter::new();
        assert_eq!(
            router.route("Severity breakdown"),
            Route::Body(Section::Unclassified)
        );
    }
}
