//! Page router wired to the DOM.
//!
//! Content sections act as pages: only one is visible at a time, nav links carry
//! the id of the page they show, and the header doubles as the landing page.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::RouterConfig;
use folio_core::router::{progress_width, PageTransition, Router};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, ACTIVE};

pub struct PageRouter {
    config: RouterConfig,
    document: Document,
    sections: Vec<Element>,
    header: Element,
    footer: Element,
    nav_links: Vec<Element>,
    mobile_menu: Element,
    mobile_menu_button: Element,
    state: RefCell<Router>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PageRouter {
    /// Collect the page's sections and links. Fails if the header, footer or mobile
    /// menu elements are missing.
    pub fn mount(document: &Document, config: &RouterConfig) -> anyhow::Result<Rc<Self>> {
        let sections = dom::query_all(document, &config.section_selector)?;
        let nav_links = dom::query_all(document, &config.nav_link_selector)?;
        let header = dom::by_id::<Element>(document, &config.header_id)?;
        let footer = dom::by_id::<Element>(document, &config.footer_id)?;
        let mobile_menu = dom::by_id::<Element>(document, &config.mobile_menu_id)?;
        let mobile_menu_button = dom::by_id::<Element>(document, &config.mobile_menu_button_id)?;

        let page_ids = sections.iter().map(Element::id).filter(|id| !id.is_empty());
        let nav_targets = nav_links
            .iter()
            .filter_map(|link| link.get_attribute(&config.target_attribute));
        let state = Router::new(config, page_ids, nav_targets);
        log::info!(
            "router: {} sections, {} nav links",
            sections.len(),
            nav_links.len()
        );

        Ok(Rc::new(Self {
            config: config.clone(),
            document: document.clone(),
            sections,
            header,
            footer,
            nav_links,
            mobile_menu,
            mobile_menu_button,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Attach click handlers to every nav link and the mobile menu button.
    pub fn install(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();
        for link in &self.nav_links {
            let router = Rc::downgrade(self);
            let link_for_click = link.clone();
            listeners.push(EventListener::new(link, "click", move |event| {
                event.prevent_default();
                let Some(router) = router.upgrade() else {
                    return;
                };
                match link_for_click.get_attribute(&router.config.target_attribute) {
                    Some(target) => router.show_page(&target),
                    None => log::debug!("router: nav link without a target"),
                }
                router.close_mobile_menu();
            }));
        }

        let menu = self.mobile_menu.clone();
        listeners.push(EventListener::new(
            &self.mobile_menu_button,
            "click",
            move |_event| {
                let _ = menu.class_list().toggle(dom::HIDDEN);
            },
        ));
    }

    /// Show page `id`, hiding every other section. Unknown ids hide everything.
    pub fn show_page(&self, id: &str) {
        let transition = self.state.borrow_mut().show(id);
        self.apply(id, &transition);
    }

    pub fn active_page(&self) -> Option<String> {
        self.state.borrow().active_page().map(str::to_string)
    }

    pub fn close_mobile_menu(&self) {
        dom::set_hidden(&self.mobile_menu, true);
    }

    fn apply(&self, id: &str, transition: &PageTransition) {
        for section in &self.sections {
            dom::set_hidden(section, true);
        }
        dom::set_hidden(&self.footer, true);
        for link in &self.nav_links {
            dom::set_class(link, ACTIVE, false);
        }

        if let Some(page) = transition
            .reveal
            .as_deref()
            .and_then(|page| self.document.get_element_by_id(page))
        {
            dom::set_hidden(&page, false);
        }

        if transition.footer_visible {
            dom::set_hidden(&self.footer, false);
        }

        if id == self.config.header_id {
            dom::smooth_scroll(&self.header);
        } else if let Some(page) = transition
            .scroll_to
            .as_deref()
            .and_then(|page| self.document.get_element_by_id(page))
        {
            dom::smooth_scroll(&page);
        }

        if transition.animate_skills {
            self.animate_skills();
        }

        if let Some(target) = transition.active_link.as_deref() {
            if let Some(link) = self.nav_links.iter().find(|link| {
                link.get_attribute(&self.config.target_attribute).as_deref() == Some(target)
            }) {
                dom::set_class(link, ACTIVE, true);
            }
        }
    }

    /// Set every skills bar to its `data-progress` width; CSS animates the change.
    fn animate_skills(&self) {
        let selector = format!(
            "#{} [{}]",
            self.config.skills_id, self.config.progress_attribute
        );
        let bars = match dom::query_all(&self.document, &selector) {
            Ok(bars) => bars,
            Err(err) => {
                log::warn!("router: skills bars: {err}");
                return;
            }
        };
        for bar in bars {
            let raw = bar
                .get_attribute(&self.config.progress_attribute)
                .unwrap_or_default();
            let Some(width) = progress_width(&raw) else {
                log::warn!("router: skipping skills bar with progress '{raw}'");
                continue;
            };
            if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                let _ = bar.style().set_property("width", &width);
            }
        }
        log::debug!("router: skills bars animated");
    }
}
