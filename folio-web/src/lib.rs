//! WASM behaviour layer for the portfolio site.
//!
//! This crate provides:
//! - `router`: section-as-page navigation and the mobile menu
//! - `modal`: the email and call modals with copy-to-clipboard
//! - `background`: the particle animation on the header canvas
//! - `config`: optional JSON overrides embedded in the page
//!
//! The module's start function waits for the document to be parsed, mounts every
//! component and keeps them alive for the lifetime of the page.

pub mod background;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod error;
pub mod modal;
pub mod router;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::SiteConfig;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::background::Background;
use crate::modal::ModalController;
use crate::router::PageRouter;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Every mounted component. Dropping it detaches all listeners.
pub struct App {
    pub router: Rc<PageRouter>,
    pub email: Rc<ModalController>,
    pub call: Rc<ModalController>,
    pub background: Rc<Background>,
    _load: Option<EventListener>,
}

impl App {
    /// Look up every required element first, then attach listeners. A missing
    /// element fails the whole mount and leaves the page untouched.
    pub fn mount(document: &Document, config: &SiteConfig) -> anyhow::Result<Self> {
        let router = PageRouter::mount(document, &config.router)?;
        let email = ModalController::mount(document, "email", &config.email_modal)?;
        let call = ModalController::mount(document, "call", &config.call_modal)?;
        let background = Background::mount(document, &config.background)?;

        router.install();
        router.show_page(&config.router.header_id);
        email.install()?;
        call.install()?;
        background.install()?;

        // the module may finish loading after the window `load` event
        let load = if document.ready_state() == "complete" {
            background.start();
            None
        } else {
            let background = Rc::clone(&background);
            let window = dom::window()?;
            Some(EventListener::once(&window, "load", move |_| {
                background.start();
            }))
        };

        Ok(Self {
            router,
            email,
            call,
            background,
            _load: load,
        })
    }
}

/// Mount the site behaviour on the current document.
pub fn boot() -> anyhow::Result<()> {
    let document = dom::document()?;
    let config = config::load(&document);
    log::set_max_level(config.log_level_filter());
    let app = App::mount(&document, &config)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    log::info!("site ready");
    Ok(())
}

/// Module entry point. Initialisation errors (a missing required element) are
/// logged; the page is then left without behaviour.
#[wasm_bindgen(start)]
pub fn start() {
    // a second init keeps the first logger
    let _ = folio_log::init(log::LevelFilter::Info);

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("init failed: {err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot_or_log()).forget();
    } else {
        boot_or_log();
    }
}

fn boot_or_log() {
    if let Err(err) = boot() {
        log::error!("init failed: {err:#}");
    }
}
