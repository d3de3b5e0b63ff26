//! Page router state.
//!
//! The site is a single document whose content sections behave as pages. The
//! [`Router`] decides, for a requested page id, which page becomes visible, whether
//! the footer shows, which nav link is active and whether the skills bars animate.
//! The result is a [`PageTransition`] that the DOM layer applies verbatim.

use std::collections::BTreeSet;

use crate::config::RouterConfig;

/// What the DOM layer has to do to display a page.
///
/// All content sections, the footer and every nav link's active state are reset
/// before a transition is applied; the fields below only describe what gets
/// switched back on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageTransition {
    /// Page to un-hide, if the requested id names one
    pub reveal: Option<String>,
    /// Element to smooth-scroll into view
    pub scroll_to: Option<String>,
    pub footer_visible: bool,
    /// Set exactly once per session, the first time the skills page is shown
    pub animate_skills: bool,
    /// Nav link target to mark active
    pub active_link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Router {
    header_id: String,
    skills_id: String,
    pages: BTreeSet<String>,
    nav_targets: BTreeSet<String>,
    active_page: Option<String>,
    skills_animated: bool,
}

impl Router {
    /// Build a router over the pages and nav link targets present in the document.
    ///
    /// The header always counts as a page.
    pub fn new<P, N>(config: &RouterConfig, pages: P, nav_targets: N) -> Self
    where
        P: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        let mut pages: BTreeSet<String> = pages.into_iter().collect();
        pages.insert(config.header_id.clone());
        Self {
            header_id: config.header_id.clone(),
            skills_id: config.skills_id.clone(),
            pages,
            nav_targets: nav_targets.into_iter().collect(),
            active_page: None,
            skills_animated: false,
        }
    }

    /// Page currently shown, `None` before the first navigation or after an unknown id.
    pub fn active_page(&self) -> Option<&str> {
        self.active_page.as_deref()
    }

    pub fn skills_animated(&self) -> bool {
        self.skills_animated
    }

    /// Switch to page `id`.
    ///
    /// Unknown ids are not an error: nothing is revealed, no link is active and the
    /// footer stays hidden, so the footer never shows without a content section.
    pub fn show(&mut self, id: &str) -> PageTransition {
        let matched = self.pages.contains(id);
        let is_header = id == self.header_id;

        let animate_skills = id == self.skills_id && !self.skills_animated;
        if animate_skills {
            self.skills_animated = true;
        }

        self.active_page = matched.then(|| id.to_string());

        let transition = PageTransition {
            reveal: self.active_page.clone(),
            scroll_to: if matched || is_header {
                Some(id.to_string())
            } else {
                None
            },
            footer_visible: matched && !is_header,
            animate_skills,
            active_link: (matched && self.nav_targets.contains(id)).then(|| id.to_string()),
        };
        log::debug!("router: show '{id}' -> {transition:?}");
        transition
    }
}

/// Turn a raw progress attribute into a CSS width.
///
/// Returns `None` for values that are not finite numbers; others are clamped to
/// [0, 100] percent.
pub fn progress_width(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().trim_end_matches('%').parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // + 0.0 turns -0 into 0
    Some(format!("{}%", value.clamp(0.0, 100.0) + 0.0))
}
